use std::iter::Sum;
use std::ops::Add;

use dietplan_catalog::FoodItem;
use serde::{Deserialize, Serialize};

use crate::MealPlan;

/// Calories and macronutrient grams
///
/// Values are kept unrounded; rounding is a presentation concern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl Nutrition {
    pub fn of(item: &FoodItem) -> Self {
        Self {
            calories: item.calories,
            protein: item.protein,
            carbs: item.carbs,
            fats: item.fats,
        }
    }

    pub fn rounded(&self) -> Self {
        Self {
            calories: self.calories.round(),
            protein: self.protein.round(),
            carbs: self.carbs.round(),
            fats: self.fats.round(),
        }
    }
}

impl Add for Nutrition {
    type Output = Nutrition;

    fn add(self, rhs: Nutrition) -> Nutrition {
        Nutrition {
            calories: self.calories + rhs.calories,
            protein: self.protein + rhs.protein,
            carbs: self.carbs + rhs.carbs,
            fats: self.fats + rhs.fats,
        }
    }
}

impl Sum for Nutrition {
    fn sum<I: Iterator<Item = Nutrition>>(iter: I) -> Self {
        iter.fold(Nutrition::default(), Add::add)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodSummary {
    pub name: String,
    pub portion: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealSummary {
    pub meal_number: usize,
    pub foods: Vec<FoodSummary>,
    pub nutrition: Nutrition,
}

/// Serializable view of a plan, also the shape stored in history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSummary {
    pub total_nutrition: Nutrition,
    pub meals: Vec<MealSummary>,
}

/// Summarize a plan; the daily total is the sum of the per-meal totals
pub fn summarize(plan: &MealPlan<'_>) -> PlanSummary {
    let meals: Vec<MealSummary> = plan
        .meals()
        .iter()
        .enumerate()
        .map(|(i, meal)| MealSummary {
            meal_number: i + 1,
            foods: meal
                .items
                .iter()
                .map(|item| FoodSummary {
                    name: item.name.clone(),
                    portion: item.portion.clone(),
                })
                .collect(),
            nutrition: meal.nutrition(),
        })
        .collect();

    let total_nutrition = meals.iter().map(|meal| meal.nutrition).sum();

    PlanSummary {
        total_nutrition,
        meals,
    }
}
