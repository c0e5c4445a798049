use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use dietplan::bootstrap::{self, build_planner, check_plan_inputs, load_estimator, seed_history};
use dietplan::config::{Config, ProfileConfig};
use dietplan::export::render_plan;
use dietplan::history_log::{HistoryLog, today};
use dietplan_mealplan::record_plan;

/// Profile overrides for a single run
#[derive(Args, Debug, Default)]
pub struct ProfileArgs {
    /// Body weight in kg
    #[arg(long)]
    weight: Option<f64>,

    /// Height in cm
    #[arg(long)]
    height: Option<f64>,

    /// Age in years
    #[arg(long)]
    age: Option<u32>,

    /// male or female
    #[arg(long)]
    gender: Option<String>,

    /// sedentary, light, moderate, very_active or extra_active
    #[arg(long = "activity")]
    activity_level: Option<String>,

    /// lose, maintain or gain
    #[arg(long)]
    goal: Option<String>,

    /// Required dietary flag, repeatable (replaces configured restrictions)
    #[arg(long = "restriction")]
    restrictions: Vec<String>,

    /// Allergy substring, repeatable (replaces configured allergies)
    #[arg(long = "allergy")]
    allergies: Vec<String>,

    /// Number of meals
    #[arg(long = "meals", value_parser = clap::value_parser!(u32).range(1..))]
    meals_per_day: Option<u32>,
}

impl ProfileArgs {
    fn apply(self, mut base: ProfileConfig) -> ProfileConfig {
        if let Some(weight) = self.weight {
            base.weight = weight;
        }
        if let Some(height) = self.height {
            base.height = height;
        }
        if let Some(age) = self.age {
            base.age = age;
        }
        if let Some(gender) = self.gender {
            base.gender = gender;
        }
        if let Some(activity_level) = self.activity_level {
            base.activity_level = activity_level;
        }
        if let Some(goal) = self.goal {
            base.goal = goal;
        }
        if !self.restrictions.is_empty() {
            base.dietary_restrictions = self.restrictions;
        }
        if !self.allergies.is_empty() {
            base.allergies = self.allergies;
        }
        if let Some(meals_per_day) = self.meals_per_day {
            base.meals_per_day = meals_per_day;
        }
        base
    }
}

#[tracing::instrument(skip_all)]
pub fn generate(
    config: Config,
    args: ProfileArgs,
    seed: Option<u64>,
    export: Option<PathBuf>,
    no_history: bool,
) -> Result<()> {
    let mut profile = args.apply(config.profile.clone()).to_profile();
    let log = HistoryLog::new(&config.history.path);
    seed_history(&mut profile, &log);

    let planner = build_planner(&config)?;
    let estimator = load_estimator(&config.estimator);
    let estimate = estimator.estimate(&profile);
    check_plan_inputs(&profile, estimate.calories)?;

    let mut rng = bootstrap::rng(seed.or(config.planner.seed));
    let day = planner.plan_day(&profile, estimate, &mut rng);

    let text = render_plan(&day.summary).context("Failed to render meal plan")?;
    println!(
        "Daily targets ({}): {} kcal, protein {}g, carbs {}g, fats {}g\n",
        day.source, day.needs.calories, day.needs.protein, day.needs.carbs, day.needs.fats
    );
    print!("{text}");

    for warning in &day.warnings {
        eprintln!("Warning: {warning}");
    }

    if let Some(path) = export {
        std::fs::write(&path, &text)
            .with_context(|| format!("Failed to export meal plan to {}", path.display()))?;
        tracing::info!(path = %path.display(), "Meal plan exported");
    }

    if !no_history {
        let entry = record_plan(&mut profile, &day.summary, &today());
        if let Err(e) = log.append(&entry) {
            tracing::warn!(error = %e, "Failed to write history, plan was not saved");
            eprintln!("Warning: failed to write history: {e}");
        }
    }

    Ok(())
}
