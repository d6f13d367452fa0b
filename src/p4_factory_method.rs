// Pattern 4: Factory Method - Pizza Stores
// Each regional store decides which pizza to make; ordering runs the same
// prepare/bake/cut/box sequence regardless of store.

use std::fmt;

// ============================================================================
// Product
// ============================================================================

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum PizzaKind {
    Cheese,
    Veggie,
    Clam,
    Pepperoni,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum CutStyle {
    Diagonal,
    Square,
}

struct Pizza {
    name: String,
    dough: &'static str,
    sauce: &'static str,
    toppings: Vec<&'static str>,
    cut: CutStyle,
}

impl Pizza {
    fn prepare(&self) {
        println!("Preparing {}", self.name);
        println!("Tossing dough...");
        println!("Adding sauce...");
        println!("Adding toppings: ");
        println!("   {}", self.toppings.join("   "));
    }

    fn bake(&self) {
        println!("Bake for 25 minutes at 350");
    }

    fn cut(&self) {
        match self.cut {
            CutStyle::Diagonal => println!("Cutting the pizza into diagonal slices"),
            CutStyle::Square => println!("Cutting the pizza into square slices"),
        }
    }

    fn box_up(&self) {
        println!("Place pizza in official PizzaStore box");
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Pizza {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "---- {} ----", self.name)?;
        writeln!(f, "{}", self.dough)?;
        writeln!(f, "{}", self.sauce)?;
        for topping in &self.toppings {
            writeln!(f, "{}", topping)?;
        }
        Ok(())
    }
}

// ============================================================================
// Creator - the Factory Method lives on the store
// ============================================================================

trait PizzaStore {
    fn create_pizza(&self, kind: PizzaKind) -> Pizza;

    fn order_pizza(&self, kind: PizzaKind) -> Pizza {
        let pizza = self.create_pizza(kind);
        println!("--- Making a {} ---", pizza.name());

        pizza.prepare();
        pizza.bake();
        pizza.cut();
        pizza.box_up();

        pizza
    }
}

// ============================================================================
// Concrete Stores
// ============================================================================

struct NyPizzaStore;

impl PizzaStore for NyPizzaStore {
    fn create_pizza(&self, kind: PizzaKind) -> Pizza {
        let (name, toppings) = match kind {
            PizzaKind::Cheese => (
                "NY Style Sauce and Cheese Pizza",
                vec!["Grated Reggiano Cheese"],
            ),
            PizzaKind::Veggie => (
                "NY Style Veggie Pizza",
                vec![
                    "Grated Reggiano Cheese",
                    "Garlic",
                    "Onion",
                    "Mushrooms",
                    "Red Pepper",
                ],
            ),
            PizzaKind::Clam => (
                "NY Style Clam Pizza",
                vec!["Grated Reggiano Cheese", "Fresh Clams from Long Island Sound"],
            ),
            PizzaKind::Pepperoni => (
                "NY Style Pepperoni Pizza",
                vec![
                    "Grated Reggiano Cheese",
                    "Sliced Pepperoni",
                    "Garlic",
                    "Onion",
                    "Mushrooms",
                    "Red Pepper",
                ],
            ),
        };

        Pizza {
            name: name.to_string(),
            dough: "Thin Crust Dough",
            sauce: "Marinara Sauce",
            toppings,
            cut: CutStyle::Diagonal,
        }
    }
}

struct ChicagoPizzaStore;

impl PizzaStore for ChicagoPizzaStore {
    fn create_pizza(&self, kind: PizzaKind) -> Pizza {
        let (name, toppings) = match kind {
            PizzaKind::Cheese => (
                "Chicago Style Deep Dish Cheese Pizza",
                vec!["Shredded Mozzarella Cheese"],
            ),
            PizzaKind::Veggie => (
                "Chicago Deep Dish Veggie Pizza",
                vec![
                    "Shredded Mozzarella Cheese",
                    "Black Olives",
                    "Spinach",
                    "Eggplant",
                ],
            ),
            PizzaKind::Clam => (
                "Chicago Style Clam Pizza",
                vec![
                    "Shredded Mozzarella Cheese",
                    "Frozen Clams from Chesapeake Bay",
                ],
            ),
            PizzaKind::Pepperoni => (
                "Chicago Style Pepperoni Pizza",
                vec![
                    "Shredded Mozzarella Cheese",
                    "Black Olives",
                    "Spinach",
                    "Eggplant",
                    "Sliced Pepperoni",
                ],
            ),
        };

        Pizza {
            name: name.to_string(),
            dough: "Extra Thick Crust Dough",
            sauce: "Plum Tomato Sauce",
            toppings,
            cut: CutStyle::Square,
        }
    }
}

fn pizza_store_example() {
    let ny_store = NyPizzaStore;
    let chicago_store = ChicagoPizzaStore;

    let kinds = [
        PizzaKind::Cheese,
        PizzaKind::Clam,
        PizzaKind::Pepperoni,
        PizzaKind::Veggie,
    ];

    for kind in kinds {
        let pizza = ny_store.order_pizza(kind);
        println!("Ethan ordered a {}\n", pizza.name());

        let pizza = chicago_store.order_pizza(kind);
        println!("Joel ordered a {}\n", pizza.name());
    }
}

// ============================================================================
// Tests
// ============================================================================


fn main() {
    println!("Pattern 4: Factory Method - Pizza Stores");
    println!("=========================================\n");

    pizza_store_example();
}
