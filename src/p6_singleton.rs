// Pattern 6: Singleton - Chocolate Boiler
// One boiler per process, constructed on first demand. Global access goes
// through ChocolateBoiler::instance(); the constructor is private.

use classic_patterns::lazy::LazySingleton;
use colored::Colorize;
use lazy_static::lazy_static;
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, OnceLock};

// ============================================================================
// Thread-Safe Singleton over a LazySingleton slot
// ============================================================================

static BOILER: LazySingleton<Mutex<ChocolateBoiler>> = LazySingleton::new();
static BOILER_CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

lazy_static! {
    // Transition log shared by every boiler operation
    static ref EVENT_LOG: Mutex<Vec<String>> = Mutex::new(Vec::new());
}

struct ChocolateBoiler {
    empty: bool,
    boiled: bool,
}

impl ChocolateBoiler {
    fn new() -> Self {
        BOILER_CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst);
        Self {
            empty: true,
            boiled: false,
        }
    }

    /// The only way to a boiler. The first caller constructs it; everyone
    /// gets a handle to the same instance. Operations on the boiler are
    /// serialized by the `Mutex` the instance is stored under, not by the
    /// construction guard.
    fn instance() -> Arc<Mutex<ChocolateBoiler>> {
        BOILER.get_or_init(|| Mutex::new(ChocolateBoiler::new()))
    }

    fn fill(&mut self) {
        if self.is_empty() {
            self.empty = false;
            self.boiled = false;
            log_event("fill: boiler filled with a milk/chocolate mixture");
        }
    }

    fn boil(&mut self) {
        if !self.is_empty() && !self.is_boiled() {
            self.boiled = true;
            log_event("boil: mixture brought to a boil");
        }
    }

    fn drain(&mut self) {
        if !self.is_empty() && self.is_boiled() {
            self.empty = true;
            log_event("drain: boiled chocolate drained off");
        }
    }

    fn is_empty(&self) -> bool {
        self.empty
    }

    fn is_boiled(&self) -> bool {
        self.boiled
    }
}

fn log_event(event: &str) {
    EVENT_LOG.lock().unwrap().push(event.to_string());
}

fn chocolate_boiler_example() {
    let boiler = ChocolateBoiler::instance();
    {
        let mut boiler = boiler.lock().unwrap();
        boiler.fill();
        boiler.boil();
        boiler.drain();
    }

    // A second request returns the existing instance
    let boiler2 = ChocolateBoiler::instance();
    println!(
        "Same boiler instance: {}",
        Arc::ptr_eq(&boiler, &boiler2).to_string().green()
    );
    println!(
        "Constructions: {}",
        BOILER_CONSTRUCTIONS.load(Ordering::SeqCst)
    );
}

fn parallel_access_example() {
    // Many threads race for the instance; exactly one construction happens
    let handles: Vec<Arc<Mutex<ChocolateBoiler>>> = (0..100)
        .into_par_iter()
        .map(|_| ChocolateBoiler::instance())
        .collect();

    let first = &handles[0];
    let all_same = handles.iter().all(|h| Arc::ptr_eq(first, h));
    println!("100 parallel requests, one instance: {}", all_same.to_string().green());
    println!(
        "Constructions: {}",
        BOILER_CONSTRUCTIONS.load(Ordering::SeqCst)
    );
}

fn event_log_example() {
    println!("Boiler event log:");
    for event in EVENT_LOG.lock().unwrap().iter() {
        println!("  {}", event);
    }
}

// ============================================================================
// Read-only Singleton with OnceLock
// ============================================================================

struct BoilerConfig {
    capacity_litres: u32,
    target_temp_celsius: u32,
}

impl BoilerConfig {
    fn global() -> &'static BoilerConfig {
        static CONFIG: OnceLock<BoilerConfig> = OnceLock::new();
        CONFIG.get_or_init(|| BoilerConfig {
            capacity_litres: 500,
            target_temp_celsius: 115,
        })
    }
}

fn config_singleton_example() {
    let config = BoilerConfig::global();
    println!("Boiler capacity: {} litres", config.capacity_litres);
    println!("Target temperature: {}C", config.target_temp_celsius);

    let config2 = BoilerConfig::global();
    println!("Same config instance: {}", std::ptr::eq(config, config2));
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_boil_drain_cycle() {
        let mut boiler = ChocolateBoiler::new();
        assert!(boiler.is_empty());

        boiler.fill();
        assert!(!boiler.is_empty());
        assert!(!boiler.is_boiled());

        boiler.boil();
        assert!(boiler.is_boiled());

        boiler.drain();
        assert!(boiler.is_empty());
    }

    #[test]
    fn test_cannot_boil_empty_boiler() {
        let mut boiler = ChocolateBoiler::new();
        boiler.boil();
        assert!(!boiler.is_boiled());
    }

    #[test]
    fn test_cannot_drain_unboiled_mixture() {
        let mut boiler = ChocolateBoiler::new();
        boiler.fill();
        boiler.drain();
        assert!(!boiler.is_empty());
    }

    #[test]
    fn test_refill_resets_boiled_flag() {
        let mut boiler = ChocolateBoiler::new();
        boiler.fill();
        boiler.boil();
        boiler.drain();

        boiler.fill();
        assert!(!boiler.is_boiled());
    }

    #[test]
    fn test_instance_identity() {
        let a = ChocolateBoiler::instance();
        let b = ChocolateBoiler::instance();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_mutation_visible_through_second_handle() {
        let a = ChocolateBoiler::instance();
        a.lock().unwrap().fill();

        let b = ChocolateBoiler::instance();
        assert!(!b.lock().unwrap().is_empty());
    }

    #[test]
    fn test_config_singleton_identity() {
        let config1 = BoilerConfig::global();
        let config2 = BoilerConfig::global();
        assert!(std::ptr::eq(config1, config2));
        assert_eq!(config1.capacity_litres, 500);
    }
}

fn main() {
    println!("Pattern 6: Singleton - Chocolate Boiler");
    println!("========================================\n");

    println!("{}", "=== Thread-Safe Boiler Singleton ===".bold());
    chocolate_boiler_example();
    println!();

    println!("{}", "=== Parallel Access ===".bold());
    parallel_access_example();
    println!();

    println!("{}", "=== Boiler Event Log ===".bold());
    event_log_example();
    println!();

    println!("{}", "=== Read-only Config Singleton (OnceLock) ===".bold());
    config_singleton_example();
}
