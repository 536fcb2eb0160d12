//! Pattern 18: Observer
//! Example: Weather station pushing measurements to displays
//!
//! Run with: cargo run --bin p18_observer

// ============================================
// 1. Observer interface
// ============================================

trait Observer {
    // Returns the line the observer renders for this update
    fn update(&mut self, temperature: f64, humidity: f64, pressure: f64) -> String;
}

// ============================================
// 2. Subject
// ============================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ObserverId(usize);

struct WeatherData {
    // Registration order is notification order
    observers: Vec<(ObserverId, Box<dyn Observer>)>,
    next_id: usize,
    temperature: f64,
    humidity: f64,
    pressure: f64,
}

impl WeatherData {
    fn new() -> Self {
        WeatherData {
            observers: Vec::new(),
            next_id: 0,
            temperature: 0.0,
            humidity: 0.0,
            pressure: 0.0,
        }
    }

    fn register_observer(&mut self, observer: Box<dyn Observer>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }

    fn remove_observer(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(oid, _)| *oid != id);
        self.observers.len() != before
    }

    fn notify_observers(&mut self) -> Vec<String> {
        let (temperature, humidity, pressure) = (self.temperature, self.humidity, self.pressure);
        self.observers
            .iter_mut()
            .map(|(_, observer)| observer.update(temperature, humidity, pressure))
            .collect()
    }

    fn set_measurements(&mut self, temperature: f64, humidity: f64, pressure: f64) -> Vec<String> {
        self.temperature = temperature;
        self.humidity = humidity;
        self.pressure = pressure;
        self.measurements_changed()
    }

    fn measurements_changed(&mut self) -> Vec<String> {
        self.notify_observers()
    }
}

// ============================================
// 3. Concrete observer
// ============================================

struct CurrentConditionsDisplay {
    temperature: f64,
    humidity: f64,
}

impl CurrentConditionsDisplay {
    fn new() -> Self {
        CurrentConditionsDisplay {
            temperature: 0.0,
            humidity: 0.0,
        }
    }

    fn display(&self) -> String {
        format!(
            "Current conditions: {}F degrees and {}% humidity",
            self.temperature, self.humidity
        )
    }
}

impl Observer for CurrentConditionsDisplay {
    fn update(&mut self, temperature: f64, humidity: f64, _pressure: f64) -> String {
        self.temperature = temperature;
        self.humidity = humidity;
        self.display()
    }
}

fn main() {
    println!("=== Observer Demo ===\n");

    let mut weather_data = WeatherData::new();
    weather_data.register_observer(Box::new(CurrentConditionsDisplay::new()));

    for (t, h, p) in [(80.0, 65.0, 30.4), (82.0, 70.0, 29.2), (78.0, 90.0, 29.2)] {
        for line in weather_data.set_measurements(t, h, p) {
            println!("{line}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Observer that tags its lines so notification order is visible
    struct TaggedObserver {
        tag: &'static str,
    }

    impl Observer for TaggedObserver {
        fn update(&mut self, temperature: f64, humidity: f64, _pressure: f64) -> String {
            format!("{} saw {temperature}/{humidity}", self.tag)
        }
    }

    #[test]
    fn test_display_renders_the_latest_measurements() {
        let mut weather_data = WeatherData::new();
        weather_data.register_observer(Box::new(CurrentConditionsDisplay::new()));

        let lines = weather_data.set_measurements(80.0, 65.0, 30.4);
        assert_eq!(
            lines,
            vec!["Current conditions: 80F degrees and 65% humidity"]
        );

        let lines = weather_data.set_measurements(82.0, 70.0, 29.2);
        assert_eq!(
            lines,
            vec!["Current conditions: 82F degrees and 70% humidity"]
        );
    }

    #[test]
    fn test_observers_are_notified_in_registration_order() {
        let mut weather_data = WeatherData::new();
        weather_data.register_observer(Box::new(TaggedObserver { tag: "first" }));
        weather_data.register_observer(Box::new(TaggedObserver { tag: "second" }));

        assert_eq!(
            weather_data.set_measurements(70.0, 50.0, 30.0),
            vec!["first saw 70/50", "second saw 70/50"]
        );
    }

    #[test]
    fn test_removed_observer_stops_receiving_updates() {
        let mut weather_data = WeatherData::new();
        let first = weather_data.register_observer(Box::new(TaggedObserver { tag: "first" }));
        weather_data.register_observer(Box::new(TaggedObserver { tag: "second" }));

        assert!(weather_data.remove_observer(first));
        assert_eq!(
            weather_data.set_measurements(70.0, 50.0, 30.0),
            vec!["second saw 70/50"]
        );

        // Removing twice finds nothing
        assert!(!weather_data.remove_observer(first));
    }

    #[test]
    fn test_no_observers_means_no_notifications() {
        let mut weather_data = WeatherData::new();
        assert!(weather_data.set_measurements(60.0, 40.0, 29.0).is_empty());
    }
}
