mod fallback;
mod history;
mod plan;
mod planner;
mod summary;

pub use fallback::category_fallback;
pub use history::{HistoryEntry, liked_names_from_history};
pub use plan::{Meal, MealPlan};
pub use planner::{DailyPlan, MealPlanner, PlannerSettings, per_meal_target, record_plan};
pub use summary::{FoodSummary, MealSummary, Nutrition, PlanSummary, summarize};
