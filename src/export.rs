use askama::Template;

use dietplan_mealplan::{FoodSummary, Nutrition, PlanSummary};

struct MealView<'a> {
    number: usize,
    foods: &'a [FoodSummary],
    nutrition: Nutrition,
}

/// Plain text plan: daily totals, then every meal with its foods and
/// nutrition, separated by a rule
#[derive(Template)]
#[template(path = "plan.txt")]
struct PlanTemplate<'a> {
    total: Nutrition,
    meals: Vec<MealView<'a>>,
}

impl<'a> From<&'a PlanSummary> for PlanTemplate<'a> {
    fn from(summary: &'a PlanSummary) -> Self {
        Self {
            total: summary.total_nutrition.rounded(),
            meals: summary
                .meals
                .iter()
                .map(|meal| MealView {
                    number: meal.meal_number,
                    foods: &meal.foods,
                    nutrition: meal.nutrition.rounded(),
                })
                .collect(),
        }
    }
}

/// Render a plan summary as plain text, nutrition rounded to whole units
pub fn render_plan(summary: &PlanSummary) -> askama::Result<String> {
    PlanTemplate::from(summary).render()
}

/// One line per history entry: date and total calories
pub fn render_history_line(date: &str, summary: &PlanSummary) -> String {
    format!(
        "{}  {} kcal  ({} meals)",
        date,
        summary.total_nutrition.calories.round(),
        summary.meals.len()
    )
}
