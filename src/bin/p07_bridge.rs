//! Pattern 7: Bridge
//! Example: Devices and remote controls varying independently
//!
//! Run with: cargo run --bin p07_bridge

// ============================================
// 1. Implementor: remote controls
// ============================================

trait RemoteControl {
    fn power_on(&self) -> Vec<String>;
    fn power_off(&self) -> Vec<String>;
}

struct BasicRemote;

impl RemoteControl for BasicRemote {
    fn power_on(&self) -> Vec<String> {
        vec!["Basic Remote: Power ON".to_string()]
    }

    fn power_off(&self) -> Vec<String> {
        vec!["Basic Remote: Power OFF".to_string()]
    }
}

struct AdvancedRemote;

impl RemoteControl for AdvancedRemote {
    fn power_on(&self) -> Vec<String> {
        vec![
            "Advanced Remote: Power ON".to_string(),
            "Advanced Remote: Initiating advanced functions".to_string(),
        ]
    }

    fn power_off(&self) -> Vec<String> {
        vec![
            "Advanced Remote: Power OFF".to_string(),
            "Advanced Remote: Cleaning up advanced functions".to_string(),
        ]
    }
}

// ============================================
// 2. Abstraction: devices
// ============================================

trait Device {
    fn turn_on(&self) -> Vec<String>;
    fn turn_off(&self) -> Vec<String>;
}

struct Tv {
    remote: Box<dyn RemoteControl>,
}

impl Tv {
    fn new(remote: Box<dyn RemoteControl>) -> Self {
        Tv { remote }
    }
}

impl Device for Tv {
    // Power up through the remote first, then the device reports
    fn turn_on(&self) -> Vec<String> {
        let mut lines = self.remote.power_on();
        lines.push("TV: Turning ON".to_string());
        lines
    }

    // The device reports first, then the remote powers down
    fn turn_off(&self) -> Vec<String> {
        let mut lines = vec!["TV: Turning OFF".to_string()];
        lines.extend(self.remote.power_off());
        lines
    }
}

struct Radio {
    remote: Box<dyn RemoteControl>,
}

impl Radio {
    fn new(remote: Box<dyn RemoteControl>) -> Self {
        Radio { remote }
    }
}

impl Device for Radio {
    fn turn_on(&self) -> Vec<String> {
        let mut lines = self.remote.power_on();
        lines.push("Radio: Turning ON".to_string());
        lines
    }

    fn turn_off(&self) -> Vec<String> {
        let mut lines = vec!["Radio: Turning OFF".to_string()];
        lines.extend(self.remote.power_off());
        lines
    }
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}

fn main() {
    println!("=== Bridge Demo ===\n");

    let tv = Tv::new(Box::new(BasicRemote));
    print_lines(&tv.turn_on());
    print_lines(&tv.turn_off());

    println!();

    let radio = Radio::new(Box::new(AdvancedRemote));
    print_lines(&radio.turn_on());
    print_lines(&radio.turn_off());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tv_with_basic_remote() {
        let tv = Tv::new(Box::new(BasicRemote));

        assert_eq!(
            tv.turn_on(),
            vec!["Basic Remote: Power ON", "TV: Turning ON"]
        );
        assert_eq!(
            tv.turn_off(),
            vec!["TV: Turning OFF", "Basic Remote: Power OFF"]
        );
    }

    #[test]
    fn test_radio_with_advanced_remote() {
        let radio = Radio::new(Box::new(AdvancedRemote));

        assert_eq!(
            radio.turn_on(),
            vec![
                "Advanced Remote: Power ON",
                "Advanced Remote: Initiating advanced functions",
                "Radio: Turning ON",
            ]
        );
        assert_eq!(
            radio.turn_off(),
            vec![
                "Radio: Turning OFF",
                "Advanced Remote: Power OFF",
                "Advanced Remote: Cleaning up advanced functions",
            ]
        );
    }

    #[test]
    fn test_remotes_swap_without_touching_the_device() {
        let tv = Tv::new(Box::new(AdvancedRemote));

        // Same device line, different remote preamble
        assert_eq!(tv.turn_on().last().map(String::as_str), Some("TV: Turning ON"));
        assert_eq!(tv.turn_on().len(), 3);
    }
}
