use anyhow::{Context, Result};
use dietplan_catalog::Catalog;
use dietplan_mealplan::MealPlanner;
use dietplan_recommender::Recommender;
use dietplan_user::{DailyCalorieEstimator, LinearCalorieModel, UserProfile};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{CatalogConfig, Config, EstimatorConfig};
use crate::history_log::HistoryLog;

/// The configured catalog file, or the built-in catalog
pub fn load_catalog(config: &CatalogConfig) -> Result<Catalog> {
    match &config.path {
        Some(path) => {
            let catalog = Catalog::load(path)
                .with_context(|| format!("Failed to load catalog from {}", path.display()))?;
            tracing::info!(path = %path.display(), items = catalog.len(), "Loaded catalog");
            Ok(catalog)
        }
        None => Ok(Catalog::builtin()),
    }
}

/// Estimator using the configured model when it can be read
pub fn load_estimator(config: &EstimatorConfig) -> DailyCalorieEstimator {
    let Some(path) = &config.model_path else {
        return DailyCalorieEstimator::formula_only();
    };

    match LinearCalorieModel::load(path) {
        Ok(model) => {
            tracing::debug!(path = %path.display(), "Loaded calorie model");
            DailyCalorieEstimator::with_model(model)
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Calorie model unavailable, using Harris-Benedict");
            DailyCalorieEstimator::formula_only()
        }
    }
}

pub fn build_planner(config: &Config) -> Result<MealPlanner> {
    let catalog = load_catalog(&config.catalog)?;
    Ok(MealPlanner::new(
        Recommender::new(catalog),
        config.planner.settings(),
    ))
}

pub fn rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Fill the profile's history from the log; an unreadable log means no
/// history
pub fn seed_history(profile: &mut UserProfile, log: &HistoryLog) {
    match log.read_raw() {
        Ok(entries) => profile.meal_history = entries,
        Err(e) => tracing::warn!(error = %e, "Failed to read meal history"),
    }
}

/// Reject inputs the planner is not meant to receive
pub fn check_plan_inputs(profile: &UserProfile, daily_calories: f64) -> Result<()> {
    anyhow::ensure!(
        profile.meals_per_day > 0,
        "meals per day must be at least 1"
    );
    anyhow::ensure!(
        daily_calories.is_finite() && daily_calories > 0.0,
        "estimated daily calories must be positive, got {daily_calories}; check weight, height and age"
    );
    Ok(())
}
