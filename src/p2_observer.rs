// Pattern 2: Observer - Weather Station
// A WeatherData subject pushes measurement updates to registered display
// observers; a channel-based variant shows the same flow over mpsc.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread;

// ============================================================================
// Subject and Observer Interfaces
// ============================================================================

trait WeatherObserver {
    fn update(&mut self, temperature: f32, humidity: f32, pressure: f32);
    fn display(&self) -> String;
}

type ObserverHandle = Arc<Mutex<dyn WeatherObserver + Send>>;

struct WeatherData {
    temperature: f32,
    humidity: f32,
    pressure: f32,
    observers: Vec<ObserverHandle>,
}

impl WeatherData {
    fn new() -> Self {
        Self {
            temperature: 0.0,
            humidity: 0.0,
            pressure: 0.0,
            observers: Vec::new(),
        }
    }

    fn register_observer(&mut self, observer: ObserverHandle) {
        self.observers.push(observer);
    }

    // Observers are unregistered by handle identity
    fn remove_observer(&mut self, observer: &ObserverHandle) {
        self.observers.retain(|o| !Arc::ptr_eq(o, observer));
    }

    fn set_measurements(&mut self, temperature: f32, humidity: f32, pressure: f32) {
        self.temperature = temperature;
        self.humidity = humidity;
        self.pressure = pressure;
        self.measurements_changed();
    }

    fn measurements_changed(&self) {
        self.notify_observers();
    }

    fn notify_observers(&self) {
        for observer in &self.observers {
            let mut observer = observer.lock().unwrap();
            observer.update(self.temperature, self.humidity, self.pressure);
            println!("{}", observer.display());
        }
    }
}

// ============================================================================
// Displays
// ============================================================================

struct CurrentConditionsDisplay {
    temperature: f32,
    humidity: f32,
}

impl CurrentConditionsDisplay {
    fn new() -> Self {
        Self {
            temperature: 0.0,
            humidity: 0.0,
        }
    }
}

impl WeatherObserver for CurrentConditionsDisplay {
    fn update(&mut self, temperature: f32, humidity: f32, _pressure: f32) {
        self.temperature = temperature;
        self.humidity = humidity;
    }

    fn display(&self) -> String {
        format!(
            "Current conditions: {}F degrees and {}% humidity",
            self.temperature, self.humidity
        )
    }
}

struct StatisticsDisplay {
    max_temp: f32,
    min_temp: f32,
    temp_sum: f32,
    num_readings: u32,
}

impl StatisticsDisplay {
    fn new() -> Self {
        Self {
            max_temp: f32::MIN,
            min_temp: f32::MAX,
            temp_sum: 0.0,
            num_readings: 0,
        }
    }
}

impl WeatherObserver for StatisticsDisplay {
    fn update(&mut self, temperature: f32, _humidity: f32, _pressure: f32) {
        self.temp_sum += temperature;
        self.num_readings += 1;
        self.max_temp = self.max_temp.max(temperature);
        self.min_temp = self.min_temp.min(temperature);
    }

    fn display(&self) -> String {
        let avg = self.temp_sum / self.num_readings as f32;
        format!(
            "Statistics Avg/Max/Min temperature = {}/{}/{}",
            avg, self.max_temp, self.min_temp
        )
    }
}

struct ForecastDisplay {
    current_pressure: f32,
    last_pressure: f32,
}

impl ForecastDisplay {
    fn new() -> Self {
        Self {
            current_pressure: 29.92,
            last_pressure: 0.0,
        }
    }

    fn forecast(&self) -> &str {
        if self.current_pressure > self.last_pressure {
            "Improving weather on the way!"
        } else if self.current_pressure < self.last_pressure {
            "Watch out for cooler, rainy weather"
        } else {
            "More of the same"
        }
    }
}

impl WeatherObserver for ForecastDisplay {
    fn update(&mut self, _temperature: f32, _humidity: f32, pressure: f32) {
        self.last_pressure = self.current_pressure;
        self.current_pressure = pressure;
    }

    fn display(&self) -> String {
        format!("Forecast: {}", self.forecast())
    }
}

fn weather_station_example() {
    let mut weather_data = WeatherData::new();

    let current = Arc::new(Mutex::new(CurrentConditionsDisplay::new()));
    let statistics = Arc::new(Mutex::new(StatisticsDisplay::new()));
    let forecast = Arc::new(Mutex::new(ForecastDisplay::new()));

    weather_data.register_observer(current.clone());
    weather_data.register_observer(statistics.clone());
    weather_data.register_observer(forecast.clone());

    weather_data.set_measurements(80.0, 65.0, 30.4);
    weather_data.set_measurements(82.0, 70.0, 29.2);
    weather_data.set_measurements(78.0, 90.0, 29.2);
}

fn remove_observer_example() {
    let mut weather_data = WeatherData::new();

    let current = Arc::new(Mutex::new(CurrentConditionsDisplay::new()));
    let handle: ObserverHandle = current.clone();
    weather_data.register_observer(handle.clone());

    weather_data.set_measurements(70.0, 50.0, 29.9);
    weather_data.remove_observer(&handle);
    println!("(current conditions display unregistered)");
    weather_data.set_measurements(90.0, 50.0, 29.9);

    // The removed observer never saw the second reading
    println!("Last seen: {}", current.lock().unwrap().display());
}

// ============================================================================
// Channel-based Observer
// ============================================================================

#[derive(Clone, Copy)]
struct Measurement {
    temperature: f32,
    humidity: f32,
}

struct WeatherPublisher {
    subscribers: Vec<mpsc::Sender<Measurement>>,
}

impl WeatherPublisher {
    fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    fn subscribe(&mut self) -> mpsc::Receiver<Measurement> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    fn publish(&mut self, measurement: Measurement) {
        // Disconnected subscribers drop out on the next publish
        self.subscribers.retain(|tx| tx.send(measurement).is_ok());
    }
}

fn channel_observer_example() {
    let mut publisher = WeatherPublisher::new();

    let rx1 = publisher.subscribe();
    let rx2 = publisher.subscribe();

    let h1 = thread::spawn(move || {
        if let Ok(m) = rx1.recv() {
            println!("Display 1: {}F, {}% humidity", m.temperature, m.humidity);
        }
    });
    let h2 = thread::spawn(move || {
        if let Ok(m) = rx2.recv() {
            println!("Display 2: {}F, {}% humidity", m.temperature, m.humidity);
        }
    });

    publisher.publish(Measurement {
        temperature: 80.0,
        humidity: 65.0,
    });

    h1.join().unwrap();
    h2.join().unwrap();
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_conditions_tracks_latest() {
        let mut weather_data = WeatherData::new();
        let current = Arc::new(Mutex::new(CurrentConditionsDisplay::new()));
        weather_data.register_observer(current.clone());

        weather_data.set_measurements(80.0, 65.0, 30.4);
        weather_data.set_measurements(82.0, 70.0, 29.2);

        let display = current.lock().unwrap();
        assert!((display.temperature - 82.0).abs() < 0.001);
        assert!((display.humidity - 70.0).abs() < 0.001);
    }

    #[test]
    fn test_statistics_min_max_avg() {
        let mut stats = StatisticsDisplay::new();
        stats.update(80.0, 65.0, 30.4);
        stats.update(82.0, 70.0, 29.2);
        stats.update(78.0, 90.0, 29.2);

        assert!((stats.max_temp - 82.0).abs() < 0.001);
        assert!((stats.min_temp - 78.0).abs() < 0.001);
        assert!((stats.temp_sum / stats.num_readings as f32 - 80.0).abs() < 0.001);
    }

    #[test]
    fn test_forecast_trend() {
        let mut forecast = ForecastDisplay::new();
        forecast.update(80.0, 65.0, 30.4);
        assert_eq!(forecast.forecast(), "Improving weather on the way!");

        forecast.update(82.0, 70.0, 29.2);
        assert_eq!(forecast.forecast(), "Watch out for cooler, rainy weather");

        forecast.update(78.0, 90.0, 29.2);
        assert_eq!(forecast.forecast(), "More of the same");
    }

    #[test]
    fn test_all_observers_notified() {
        let mut weather_data = WeatherData::new();
        let current = Arc::new(Mutex::new(CurrentConditionsDisplay::new()));
        let stats = Arc::new(Mutex::new(StatisticsDisplay::new()));

        weather_data.register_observer(current.clone());
        weather_data.register_observer(stats.clone());
        weather_data.set_measurements(75.0, 60.0, 30.0);

        assert!((current.lock().unwrap().temperature - 75.0).abs() < 0.001);
        assert_eq!(stats.lock().unwrap().num_readings, 1);
    }

    #[test]
    fn test_removed_observer_not_notified() {
        let mut weather_data = WeatherData::new();
        let stats = Arc::new(Mutex::new(StatisticsDisplay::new()));
        let handle: ObserverHandle = stats.clone();

        weather_data.register_observer(handle.clone());
        weather_data.set_measurements(75.0, 60.0, 30.0);
        weather_data.remove_observer(&handle);
        weather_data.set_measurements(80.0, 60.0, 30.0);

        assert_eq!(stats.lock().unwrap().num_readings, 1);
    }

    #[test]
    fn test_publisher_fans_out() {
        let mut publisher = WeatherPublisher::new();
        let rx1 = publisher.subscribe();
        let rx2 = publisher.subscribe();

        publisher.publish(Measurement {
            temperature: 70.0,
            humidity: 55.0,
        });

        assert!((rx1.recv().unwrap().temperature - 70.0).abs() < 0.001);
        assert!((rx2.recv().unwrap().humidity - 55.0).abs() < 0.001);
    }

    #[test]
    fn test_publisher_drops_disconnected() {
        let mut publisher = WeatherPublisher::new();
        let rx = publisher.subscribe();
        drop(rx);

        publisher.publish(Measurement {
            temperature: 70.0,
            humidity: 55.0,
        });
        assert!(publisher.subscribers.is_empty());
    }
}

fn main() {
    println!("Pattern 2: Observer - Weather Station");
    println!("======================================\n");

    println!("=== Weather Station ===");
    weather_station_example();
    println!();

    println!("=== Unregistering an Observer ===");
    remove_observer_example();
    println!();

    println!("=== Channel-based Observer ===");
    channel_observer_example();
}
