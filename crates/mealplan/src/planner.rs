use dietplan_catalog::FoodItem;
use dietplan_recommender::{DietaryFilter, Recommender, assemble_meal};
use dietplan_user::{CalorieEstimate, DailyNeeds, EstimateSource, UserProfile};
use rand::Rng;

use crate::{
    HistoryEntry, Meal, MealPlan, PlanSummary, category_fallback, liked_names_from_history,
    summarize,
};

/// Tunables for plan generation
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerSettings {
    /// Candidates kept per meal slot after filtering
    pub top_k: usize,
    /// Relative width of the per-meal calorie band
    pub tolerance: f64,
    /// Floor for the per-meal calorie target
    pub min_meal_calories: f64,
    /// Number of recent history entries used to seed preferences
    pub history_window: usize,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            top_k: 60,
            tolerance: 0.25,
            min_meal_calories: 150.0,
            history_window: 10,
        }
    }
}

/// Calories targeted by each meal: the daily total split evenly, floored.
/// A zero meal count divides by one.
pub fn per_meal_target(daily_calories: f64, meals_per_day: u32, floor: f64) -> f64 {
    let meals = meals_per_day.max(1) as f64;
    (daily_calories / meals).max(floor)
}

/// Everything produced for one day: targets, plan, and its summary
#[derive(Debug, Clone)]
pub struct DailyPlan<'a> {
    pub needs: DailyNeeds,
    pub source: EstimateSource,
    pub plan: MealPlan<'a>,
    pub summary: PlanSummary,
    /// Non-fatal problems met while planning
    pub warnings: Vec<String>,
}

/// Builds daily plans on top of a [`Recommender`]
#[derive(Debug, Clone)]
pub struct MealPlanner {
    recommender: Recommender,
    settings: PlannerSettings,
}

impl MealPlanner {
    pub fn new(recommender: Recommender, settings: PlannerSettings) -> Self {
        Self {
            recommender,
            settings,
        }
    }

    pub fn recommender(&self) -> &Recommender {
        &self.recommender
    }

    pub fn settings(&self) -> &PlannerSettings {
        &self.settings
    }

    /// Generate one meal per slot for the profile.
    ///
    /// Preferences are seeded from the most recent history entries; each slot
    /// is ranked then assembled, and falls back to a random category pick
    /// from the filtered catalog when assembly yields nothing. A profile with
    /// zero meals per day gets an empty plan.
    #[tracing::instrument(skip(self, profile, needs, rng), fields(meals = profile.meals_per_day, calories = needs.calories))]
    pub fn generate_meal_plan<R: Rng + ?Sized>(
        &self,
        profile: &UserProfile,
        needs: &DailyNeeds,
        rng: &mut R,
    ) -> MealPlan<'_> {
        let target = per_meal_target(
            needs.calories,
            profile.meals_per_day,
            self.settings.min_meal_calories,
        );
        let liked = liked_names_from_history(profile.recent_history(self.settings.history_window));
        let filter = DietaryFilter::new(&profile.dietary_restrictions, &profile.allergies);

        tracing::debug!(meal_target = target, liked = liked.len(), "Planning meals");

        let slots = profile.meals_per_day;
        let mut meals = Vec::with_capacity(slots as usize);

        for slot in 0..slots {
            let candidates = self.recommender.recommend_candidates(
                liked.as_slice(),
                Some(profile.goal.as_str()),
                &filter,
                self.settings.top_k,
            );

            let mut items = assemble_meal(&candidates, target, self.settings.tolerance);

            if items.is_empty() {
                let available: Vec<&FoodItem> = filter.apply(self.recommender.catalog().iter());
                items = category_fallback(&available, &mut *rng);
                tracing::info!(slot, picked = items.len(), "Used category fallback for meal");
            }

            if items.is_empty() {
                tracing::warn!(slot, "No food satisfies the dietary filters");
            }

            meals.push(Meal::new(items));
        }

        MealPlan::new(meals)
    }

    /// Derive the day's needs from a calorie estimate, generate the plan and
    /// summarize it
    pub fn plan_day<R: Rng + ?Sized>(
        &self,
        profile: &UserProfile,
        estimate: CalorieEstimate,
        rng: &mut R,
    ) -> DailyPlan<'_> {
        let needs = DailyNeeds::from_calories(estimate.calories, profile);
        let plan = self.generate_meal_plan(profile, &needs, &mut *rng);
        let summary = summarize(&plan);

        let mut warnings: Vec<String> = estimate.warning.into_iter().collect();
        if plan.meals().iter().any(Meal::is_empty) {
            warnings.push("Some meals are empty: no food satisfies the dietary filters".to_string());
        }

        DailyPlan {
            needs,
            source: estimate.source,
            plan,
            summary,
            warnings,
        }
    }
}

/// Append a plan summary to the profile's in-memory history
pub fn record_plan(profile: &mut UserProfile, summary: &PlanSummary, date: &str) -> HistoryEntry {
    let entry = HistoryEntry::new(date, summary.clone());
    profile.record_history(entry.to_value());
    entry
}
