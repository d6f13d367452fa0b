// Pattern 1: Strategy - Duck Simulator
// Fly and quack behaviors are separated from the ducks that use them and can
// be swapped at runtime.

// ============================================================================
// Behavior Interfaces
// ============================================================================

trait FlyBehavior {
    fn fly(&self) -> String;
}

trait QuackBehavior {
    fn quack(&self) -> String;
}

// ============================================================================
// Fly Behaviors
// ============================================================================

struct FlyWithWings;
impl FlyBehavior for FlyWithWings {
    fn fly(&self) -> String {
        "I'm flying!!".to_string()
    }
}

struct FlyNoWay;
impl FlyBehavior for FlyNoWay {
    fn fly(&self) -> String {
        "I can't fly".to_string()
    }
}

struct FlyRocketPowered;
impl FlyBehavior for FlyRocketPowered {
    fn fly(&self) -> String {
        "I'm flying with a rocket!".to_string()
    }
}

// ============================================================================
// Quack Behaviors
// ============================================================================

struct Quack;
impl QuackBehavior for Quack {
    fn quack(&self) -> String {
        "Quack".to_string()
    }
}

struct MuteQuack;
impl QuackBehavior for MuteQuack {
    fn quack(&self) -> String {
        "<< Silence >>".to_string()
    }
}

struct Squeak;
impl QuackBehavior for Squeak {
    fn quack(&self) -> String {
        "Squeak".to_string()
    }
}

#[allow(dead_code)]
struct FakeQuack;
impl QuackBehavior for FakeQuack {
    fn quack(&self) -> String {
        "Qwak".to_string()
    }
}

// ============================================================================
// Ducks - Composition over Inheritance
// ============================================================================

struct Duck {
    display_line: String,
    fly_behavior: Box<dyn FlyBehavior>,
    quack_behavior: Box<dyn QuackBehavior>,
}

impl Duck {
    fn mallard() -> Self {
        Self {
            display_line: "I'm a real Mallard duck".to_string(),
            fly_behavior: Box::new(FlyWithWings),
            quack_behavior: Box::new(Quack),
        }
    }

    fn red_head() -> Self {
        Self {
            display_line: "I'm a real Red Headed duck".to_string(),
            fly_behavior: Box::new(FlyWithWings),
            quack_behavior: Box::new(Quack),
        }
    }

    fn rubber() -> Self {
        Self {
            display_line: "I'm a rubber duckie".to_string(),
            fly_behavior: Box::new(FlyNoWay),
            quack_behavior: Box::new(Squeak),
        }
    }

    fn decoy() -> Self {
        Self {
            display_line: "I'm a duck Decoy".to_string(),
            fly_behavior: Box::new(FlyNoWay),
            quack_behavior: Box::new(MuteQuack),
        }
    }

    fn model() -> Self {
        Self {
            display_line: "I'm a model duck".to_string(),
            fly_behavior: Box::new(FlyNoWay),
            quack_behavior: Box::new(Quack),
        }
    }

    fn display(&self) -> &str {
        &self.display_line
    }

    fn fly(&self) -> String {
        self.fly_behavior.fly()
    }

    fn quack(&self) -> String {
        self.quack_behavior.quack()
    }

    // Behaviors can change at runtime
    fn set_fly_behavior(&mut self, behavior: Box<dyn FlyBehavior>) {
        self.fly_behavior = behavior;
    }

    fn set_quack_behavior(&mut self, behavior: Box<dyn QuackBehavior>) {
        self.quack_behavior = behavior;
    }

    fn swim(&self) -> &str {
        "All ducks float, even decoys!!"
    }
}

fn duck_simulator_example() {
    let mallard = Duck::mallard();
    println!("{}", mallard.display());
    println!("{}", mallard.quack());
    println!("{}", mallard.fly());

    let mut model = Duck::model();
    println!("\n{}", model.display());
    println!("{}", model.fly());
    model.set_fly_behavior(Box::new(FlyRocketPowered));
    println!("{}", model.fly());
}

fn duck_roster_example() {
    let ducks = [
        Duck::mallard(),
        Duck::red_head(),
        Duck::rubber(),
        Duck::decoy(),
    ];

    for duck in &ducks {
        println!("{}: {} / {}", duck.display(), duck.quack(), duck.fly());
    }
    println!("{}", ducks[0].swim());
}

// ============================================================================
// Functional Strategy - Behaviors as Closures
// ============================================================================

struct ClosureDuck {
    display_line: String,
    fly_fn: Box<dyn Fn() -> String>,
}

impl ClosureDuck {
    fn new(display_line: impl Into<String>, fly_fn: Box<dyn Fn() -> String>) -> Self {
        Self {
            display_line: display_line.into(),
            fly_fn,
        }
    }

    fn fly(&self) -> String {
        (self.fly_fn)()
    }

    fn set_fly_fn(&mut self, fly_fn: Box<dyn Fn() -> String>) {
        self.fly_fn = fly_fn;
    }
}

fn closure_strategy_example() {
    let mut duck = ClosureDuck::new(
        "I'm a model duck",
        Box::new(|| "I can't fly".to_string()),
    );
    println!("{}", duck.display_line);
    println!("{}", duck.fly());

    duck.set_fly_fn(Box::new(|| "I'm flying with a rocket!".to_string()));
    println!("{}", duck.fly());
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mallard_behaviors() {
        let mallard = Duck::mallard();
        assert_eq!(mallard.quack(), "Quack");
        assert_eq!(mallard.fly(), "I'm flying!!");
    }

    #[test]
    fn test_rubber_duck_squeaks() {
        let rubber = Duck::rubber();
        assert_eq!(rubber.quack(), "Squeak");
        assert_eq!(rubber.fly(), "I can't fly");
    }

    #[test]
    fn test_decoy_is_silent() {
        let decoy = Duck::decoy();
        assert_eq!(decoy.quack(), "<< Silence >>");
    }

    #[test]
    fn test_runtime_behavior_swap() {
        let mut model = Duck::model();
        assert_eq!(model.fly(), "I can't fly");

        model.set_fly_behavior(Box::new(FlyRocketPowered));
        assert_eq!(model.fly(), "I'm flying with a rocket!");
    }

    #[test]
    fn test_quack_behavior_swap() {
        let mut mallard = Duck::mallard();
        mallard.set_quack_behavior(Box::new(FakeQuack));
        assert_eq!(mallard.quack(), "Qwak");
    }

    #[test]
    fn test_all_ducks_swim() {
        assert_eq!(Duck::decoy().swim(), "All ducks float, even decoys!!");
    }

    #[test]
    fn test_closure_strategy_swap() {
        let mut duck = ClosureDuck::new("test", Box::new(|| "grounded".to_string()));
        assert_eq!(duck.fly(), "grounded");

        duck.set_fly_fn(Box::new(|| "airborne".to_string()));
        assert_eq!(duck.fly(), "airborne");
    }
}

fn main() {
    println!("Pattern 1: Strategy - Duck Simulator");
    println!("=====================================\n");

    println!("=== Runtime Behavior Swap ===");
    duck_simulator_example();
    println!();

    println!("=== Duck Roster ===");
    duck_roster_example();
    println!();

    println!("=== Strategy as Closures ===");
    closure_strategy_example();
}
