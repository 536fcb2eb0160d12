//! Pattern 14: Command
//! Example: Remote control buttons bound to light commands
//!
//! Run with: cargo run --bin p14_command

use std::rc::Rc;

// ============================================
// 1. Receiver
// ============================================

struct Light;

impl Light {
    fn turn_on(&self) -> String {
        "Light is turned on.".to_string()
    }

    fn turn_off(&self) -> String {
        "Light is turned off.".to_string()
    }
}

// ============================================
// 2. Commands
// ============================================

trait Command {
    fn execute(&self) -> String;
}

struct TurnOnCommand {
    receiver: Rc<Light>,
}

impl TurnOnCommand {
    fn new(receiver: Rc<Light>) -> Self {
        TurnOnCommand { receiver }
    }
}

impl Command for TurnOnCommand {
    fn execute(&self) -> String {
        self.receiver.turn_on()
    }
}

struct TurnOffCommand {
    receiver: Rc<Light>,
}

impl TurnOffCommand {
    fn new(receiver: Rc<Light>) -> Self {
        TurnOffCommand { receiver }
    }
}

impl Command for TurnOffCommand {
    fn execute(&self) -> String {
        self.receiver.turn_off()
    }
}

// ============================================
// 3. Invoker
// ============================================

struct RemoteControl {
    command: Option<Box<dyn Command>>,
}

impl RemoteControl {
    fn new() -> Self {
        RemoteControl { command: None }
    }

    fn set_command(&mut self, command: Box<dyn Command>) {
        self.command = Some(command);
    }

    fn press_button(&self) -> Vec<String> {
        let mut lines = vec!["Pressing the button on the remote control...".to_string()];
        if let Some(command) = &self.command {
            lines.push(command.execute());
        }
        lines
    }
}

fn main() {
    println!("=== Command Demo ===\n");

    let light = Rc::new(Light);

    let turn_on = TurnOnCommand::new(Rc::clone(&light));
    let turn_off = TurnOffCommand::new(Rc::clone(&light));

    let mut remote = RemoteControl::new();

    remote.set_command(Box::new(turn_on));
    for line in remote.press_button() {
        println!("{line}");
    }

    remote.set_command(Box::new(turn_off));
    for line in remote.press_button() {
        println!("{line}");
    }
}
