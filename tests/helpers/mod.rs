#![allow(dead_code)]

use std::path::Path;
use std::process::{Command, Output};

use dietplan_mealplan::{FoodSummary, MealSummary, Nutrition, PlanSummary};

/// The dietplan binary running in `dir`, isolated from any local config
pub fn dietplan(dir: &Path) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_dietplan"));
    command
        .current_dir(dir)
        .env("CONFIG_PATH", dir.join("missing.toml"))
        .env_remove("RUST_LOG")
        .env_remove("ENVIRONMENT");
    command
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn summary(foods: &[(&str, f64)]) -> PlanSummary {
    let meals: Vec<MealSummary> = foods
        .iter()
        .enumerate()
        .map(|(i, (name, calories))| MealSummary {
            meal_number: i + 1,
            foods: vec![FoodSummary {
                name: name.to_string(),
                portion: "100g".to_string(),
            }],
            nutrition: Nutrition {
                calories: *calories,
                ..Default::default()
            },
        })
        .collect();

    PlanSummary {
        total_nutrition: meals.iter().map(|meal| meal.nutrition).sum(),
        meals,
    }
}
