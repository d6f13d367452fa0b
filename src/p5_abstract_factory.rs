// Pattern 5: Abstract Factory - Pizza Ingredient Families
// A store hands its pizzas a regional ingredient factory; the pizzas pull
// whole ingredient families from it without naming concrete ingredients.

use std::fmt;

// ============================================================================
// Ingredients - newtypes over their menu descriptions
// ============================================================================

macro_rules! ingredient {
    ($name:ident) => {
        #[derive(Clone, Copy, PartialEq, Eq, Debug)]
        struct $name(&'static str);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str(self.0)
            }
        }
    };
}

ingredient!(Dough);
ingredient!(Sauce);
ingredient!(Cheese);
ingredient!(Veggie);
ingredient!(Pepperoni);
ingredient!(Clams);

// ============================================================================
// Abstract Factory
// ============================================================================

trait IngredientFactory {
    fn create_dough(&self) -> Dough;
    fn create_sauce(&self) -> Sauce;
    fn create_cheese(&self) -> Cheese;
    fn create_veggies(&self) -> Vec<Veggie>;
    fn create_pepperoni(&self) -> Pepperoni;
    fn create_clams(&self) -> Clams;
}

struct NyIngredientFactory;

impl IngredientFactory for NyIngredientFactory {
    fn create_dough(&self) -> Dough {
        Dough("Thin Crust Dough")
    }
    fn create_sauce(&self) -> Sauce {
        Sauce("Marinara Sauce")
    }
    fn create_cheese(&self) -> Cheese {
        Cheese("Reggiano Cheese")
    }
    fn create_veggies(&self) -> Vec<Veggie> {
        vec![
            Veggie("Garlic"),
            Veggie("Onion"),
            Veggie("Mushrooms"),
            Veggie("Red Pepper"),
        ]
    }
    fn create_pepperoni(&self) -> Pepperoni {
        Pepperoni("Sliced Pepperoni")
    }
    fn create_clams(&self) -> Clams {
        Clams("Fresh Clams from Long Island Sound")
    }
}

struct ChicagoIngredientFactory;

impl IngredientFactory for ChicagoIngredientFactory {
    fn create_dough(&self) -> Dough {
        Dough("ThickCrust style extra thick crust dough")
    }
    fn create_sauce(&self) -> Sauce {
        Sauce("Tomato sauce with plum tomatoes")
    }
    fn create_cheese(&self) -> Cheese {
        Cheese("Shredded Mozzarella")
    }
    fn create_veggies(&self) -> Vec<Veggie> {
        vec![Veggie("Black Olives"), Veggie("Spinach"), Veggie("Eggplant")]
    }
    fn create_pepperoni(&self) -> Pepperoni {
        Pepperoni("Sliced Pepperoni")
    }
    fn create_clams(&self) -> Clams {
        Clams("Frozen Clams from Chesapeake Bay")
    }
}

// ============================================================================
// Pizzas - assembled from whichever factory they are given
// ============================================================================

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum PizzaKind {
    Cheese,
    Veggie,
    Clam,
    Pepperoni,
}

struct Pizza {
    name: String,
    dough: Dough,
    sauce: Sauce,
    cheese: Cheese,
    veggies: Vec<Veggie>,
    pepperoni: Option<Pepperoni>,
    clams: Option<Clams>,
}

impl Pizza {
    fn assemble(kind: PizzaKind, name: String, factory: &dyn IngredientFactory) -> Self {
        println!("Preparing {}", name);
        let mut pizza = Self {
            name,
            dough: factory.create_dough(),
            sauce: factory.create_sauce(),
            cheese: factory.create_cheese(),
            veggies: Vec::new(),
            pepperoni: None,
            clams: None,
        };
        match kind {
            PizzaKind::Cheese => {}
            PizzaKind::Veggie => pizza.veggies = factory.create_veggies(),
            PizzaKind::Clam => pizza.clams = Some(factory.create_clams()),
            PizzaKind::Pepperoni => {
                pizza.veggies = factory.create_veggies();
                pizza.pepperoni = Some(factory.create_pepperoni());
            }
        }
        pizza
    }

    fn bake(&self) {
        println!("Bake for 25 minutes at 350");
    }

    fn cut(&self) {
        println!("Cutting the pizza into diagonal slices");
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
        writeln!(f, "{}", self.cheese)?;
        if !self.veggies.is_empty() {
            let listing: Vec<&str> = self.veggies.iter().map(|v| v.0).collect();
            writeln!(f, "{}", listing.join(", "))?;
        }
        if let Some(pepperoni) = &self.pepperoni {
            writeln!(f, "{}", pepperoni)?;
        }
        if let Some(clams) = &self.clams {
            writeln!(f, "{}", clams)?;
        }
        Ok(())
    }
}

// ============================================================================
// Stores
// ============================================================================

trait PizzaStore {
    fn create_pizza(&self, kind: PizzaKind) -> Pizza;

    fn order_pizza(&self, kind: PizzaKind) -> Pizza {
        let pizza = self.create_pizza(kind);
        println!("--- Making a {} ---", pizza.name());
        pizza.bake();
        pizza.cut();
        pizza.box_up();
        pizza
    }
}

struct NyPizzaStore;

impl PizzaStore for NyPizzaStore {
    fn create_pizza(&self, kind: PizzaKind) -> Pizza {
        let name = match kind {
            PizzaKind::Cheese => "New York Style Cheese Pizza",
            PizzaKind::Veggie => "New York Style Veggie Pizza",
            PizzaKind::Clam => "New York Style Clam Pizza",
            PizzaKind::Pepperoni => "New York Style Pepperoni Pizza",
        };
        Pizza::assemble(kind, name.to_string(), &NyIngredientFactory)
    }
}

struct ChicagoPizzaStore;

impl PizzaStore for ChicagoPizzaStore {
    fn create_pizza(&self, kind: PizzaKind) -> Pizza {
        let name = match kind {
            PizzaKind::Cheese => "Chicago Style Cheese Pizza",
            PizzaKind::Veggie => "Chicago Style Veggie Pizza",
            PizzaKind::Clam => "Chicago Style Clam Pizza",
            PizzaKind::Pepperoni => "Chicago Style Pepperoni Pizza",
        };
        Pizza::assemble(kind, name.to_string(), &ChicagoIngredientFactory)
    }
}

fn ingredient_factory_example() {
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
        println!("Ethan ordered a\n{}", pizza);

        let pizza = chicago_store.order_pizza(kind);
        println!("Joel ordered a\n{}", pizza);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regional_ingredient_families() {
        let ny = NyIngredientFactory;
        let chicago = ChicagoIngredientFactory;

        assert_eq!(ny.create_dough(), Dough("Thin Crust Dough"));
        assert_eq!(ny.create_clams(), Clams("Fresh Clams from Long Island Sound"));
        assert_eq!(
            chicago.create_clams(),
            Clams("Frozen Clams from Chesapeake Bay")
        );
        assert_eq!(chicago.create_cheese(), Cheese("Shredded Mozzarella"));
    }

    #[test]
    fn test_veggie_families_differ() {
        assert_eq!(NyIngredientFactory.create_veggies().len(), 4);
        assert_eq!(ChicagoIngredientFactory.create_veggies().len(), 3);
    }

    #[test]
    fn test_cheese_pizza_uses_factory_ingredients() {
        let pizza = NyPizzaStore.create_pizza(PizzaKind::Cheese);
        assert_eq!(pizza.name(), "New York Style Cheese Pizza");
        assert_eq!(pizza.dough, Dough("Thin Crust Dough"));
        assert_eq!(pizza.sauce, Sauce("Marinara Sauce"));
        assert_eq!(pizza.cheese, Cheese("Reggiano Cheese"));
        assert!(pizza.veggies.is_empty());
        assert!(pizza.clams.is_none());
    }

    #[test]
    fn test_clam_pizza_regional_sourcing() {
        let ny = NyPizzaStore.create_pizza(PizzaKind::Clam);
        let chicago = ChicagoPizzaStore.create_pizza(PizzaKind::Clam);
        assert_eq!(ny.clams, Some(Clams("Fresh Clams from Long Island Sound")));
        assert_eq!(
            chicago.clams,
            Some(Clams("Frozen Clams from Chesapeake Bay"))
        );
    }

    #[test]
    fn test_pepperoni_pizza_gets_veggies_too() {
        let pizza = ChicagoPizzaStore.create_pizza(PizzaKind::Pepperoni);
        assert_eq!(pizza.pepperoni, Some(Pepperoni("Sliced Pepperoni")));
        assert_eq!(pizza.veggies.len(), 3);
    }

    #[test]
    fn test_display_lists_assembled_ingredients() {
        let pizza = ChicagoPizzaStore.create_pizza(PizzaKind::Veggie);
        let listing = pizza.to_string();
        assert!(listing.contains("---- Chicago Style Veggie Pizza ----"));
        assert!(listing.contains("Shredded Mozzarella"));
        assert!(listing.contains("Black Olives, Spinach, Eggplant"));
    }

    #[test]
    fn test_same_recipe_any_factory() {
        // The pizza code never names a concrete ingredient; swapping the
        // factory swaps the whole family.
        let factories: Vec<Box<dyn IngredientFactory>> =
            vec![Box::new(NyIngredientFactory), Box::new(ChicagoIngredientFactory)];
        for factory in &factories {
            let pizza =
                Pizza::assemble(PizzaKind::Clam, "Clam Pizza".to_string(), factory.as_ref());
            assert!(pizza.clams.is_some());
        }
    }
}

fn main() {
    println!("Pattern 5: Abstract Factory - Pizza Ingredients");
    println!("================================================\n");

    ingredient_factory_example();
}
