use dietplan_catalog::FoodItem;

use crate::summary::Nutrition;

/// Foods chosen for one meal slot, in selection order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Meal<'a> {
    pub items: Vec<&'a FoodItem>,
}

impl<'a> Meal<'a> {
    pub fn new(items: Vec<&'a FoodItem>) -> Self {
        Self { items }
    }

    pub fn nutrition(&self) -> Nutrition {
        self.items.iter().map(|item| Nutrition::of(item)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// One meal per slot of the day, referencing catalog items
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MealPlan<'a> {
    pub meals: Vec<Meal<'a>>,
}

impl<'a> MealPlan<'a> {
    pub fn new(meals: Vec<Meal<'a>>) -> Self {
        Self { meals }
    }

    pub fn meals(&self) -> &[Meal<'a>] {
        &self.meals
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}
