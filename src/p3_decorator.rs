// Pattern 3: Decorator - Coffee Shop Order System
// Condiments wrap beverages and add to both the description and the cost;
// a generic variant composes the same wrappers at compile time.

use colored::Colorize;

// ============================================================================
// Beverage Component
// ============================================================================

trait Beverage {
    fn description(&self) -> String;
    fn cost(&self) -> f64;
}

// ============================================================================
// Base Beverages
// ============================================================================

struct HouseBlend;
impl Beverage for HouseBlend {
    fn description(&self) -> String {
        "House Blend Coffee".to_string()
    }
    fn cost(&self) -> f64 {
        0.89
    }
}

struct DarkRoast;
impl Beverage for DarkRoast {
    fn description(&self) -> String {
        "Dark Roast Coffee".to_string()
    }
    fn cost(&self) -> f64 {
        0.99
    }
}

struct Espresso;
impl Beverage for Espresso {
    fn description(&self) -> String {
        "Espresso".to_string()
    }
    fn cost(&self) -> f64 {
        1.99
    }
}

struct Decaf;
impl Beverage for Decaf {
    fn description(&self) -> String {
        "Decaf Coffee".to_string()
    }
    fn cost(&self) -> f64 {
        1.05
    }
}

// ============================================================================
// Condiment Decorators
// ============================================================================

struct Milk(Box<dyn Beverage>);
impl Beverage for Milk {
    fn description(&self) -> String {
        format!("{}, Milk", self.0.description())
    }
    fn cost(&self) -> f64 {
        0.10 + self.0.cost()
    }
}

struct Mocha(Box<dyn Beverage>);
impl Beverage for Mocha {
    fn description(&self) -> String {
        format!("{}, Mocha", self.0.description())
    }
    fn cost(&self) -> f64 {
        0.20 + self.0.cost()
    }
}

struct Soy(Box<dyn Beverage>);
impl Beverage for Soy {
    fn description(&self) -> String {
        format!("{}, Soy", self.0.description())
    }
    fn cost(&self) -> f64 {
        0.15 + self.0.cost()
    }
}

struct Whip(Box<dyn Beverage>);
impl Beverage for Whip {
    fn description(&self) -> String {
        format!("{}, Whip", self.0.description())
    }
    fn cost(&self) -> f64 {
        0.10 + self.0.cost()
    }
}

fn print_order(beverage: &dyn Beverage) {
    println!(
        "{} {}",
        beverage.description(),
        format!("${:.2}", beverage.cost()).green()
    );
}

fn storefront_example() {
    let beverage = Espresso;
    print_order(&beverage);

    // Double mocha with whip
    let beverage2 = Whip(Box::new(Mocha(Box::new(Mocha(Box::new(DarkRoast))))));
    print_order(&beverage2);

    let beverage3 = Whip(Box::new(Mocha(Box::new(Soy(Box::new(HouseBlend))))));
    print_order(&beverage3);

    let beverage4 = Milk(Box::new(Decaf));
    print_order(&beverage4);
}

// ============================================================================
// Generic Decorators - Compile-time Composition
// ============================================================================

struct WithMocha<B>(B);
impl<B: Beverage> Beverage for WithMocha<B> {
    fn description(&self) -> String {
        format!("{}, Mocha", self.0.description())
    }
    fn cost(&self) -> f64 {
        0.20 + self.0.cost()
    }
}

struct WithWhip<B>(B);
impl<B: Beverage> Beverage for WithWhip<B> {
    fn description(&self) -> String {
        format!("{}, Whip", self.0.description())
    }
    fn cost(&self) -> f64 {
        0.10 + self.0.cost()
    }
}

fn generic_decorator_example() {
    // No heap allocation, no dynamic dispatch
    let order = WithWhip(WithMocha(Decaf));
    print_order(&order);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_cost(beverage: &dyn Beverage, expected: f64) {
        assert!(
            (beverage.cost() - expected).abs() < 0.001,
            "expected {} got {}",
            expected,
            beverage.cost()
        );
    }

    #[test]
    fn test_plain_espresso() {
        let beverage = Espresso;
        assert_eq!(beverage.description(), "Espresso");
        assert_cost(&beverage, 1.99);
    }

    #[test]
    fn test_base_prices() {
        assert_cost(&HouseBlend, 0.89);
        assert_cost(&DarkRoast, 0.99);
        assert_cost(&Decaf, 1.05);
    }

    #[test]
    fn test_double_mocha_whip_dark_roast() {
        let beverage = Whip(Box::new(Mocha(Box::new(Mocha(Box::new(DarkRoast))))));
        assert_eq!(beverage.description(), "Dark Roast Coffee, Mocha, Mocha, Whip");
        assert_cost(&beverage, 1.49);
    }

    #[test]
    fn test_soy_mocha_whip_house_blend() {
        let beverage = Whip(Box::new(Mocha(Box::new(Soy(Box::new(HouseBlend))))));
        assert_eq!(
            beverage.description(),
            "House Blend Coffee, Soy, Mocha, Whip"
        );
        assert_cost(&beverage, 1.34);
    }

    #[test]
    fn test_milk_condiment() {
        let beverage = Milk(Box::new(Espresso));
        assert_eq!(beverage.description(), "Espresso, Milk");
        assert_cost(&beverage, 2.09);
    }

    #[test]
    fn test_generic_composition_matches_boxed() {
        let boxed = Whip(Box::new(Mocha(Box::new(Decaf))));
        let generic = WithWhip(WithMocha(Decaf));
        assert_eq!(boxed.description(), generic.description());
        assert!((boxed.cost() - generic.cost()).abs() < 0.001);
    }
}

fn main() {
    println!("Pattern 3: Decorator - Coffee Shop");
    println!("===================================\n");

    println!("=== Storefront Orders ===");
    storefront_example();
    println!();

    println!("=== Generic Decorators ===");
    generic_decorator_example();
}
