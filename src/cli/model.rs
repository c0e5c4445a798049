use std::path::PathBuf;

use anyhow::{Context, Result};
use dietplan::config::Config;
use dietplan_user::{LinearCalorieModel, synthetic_training_set};

const DEFAULT_MODEL_PATH: &str = "calorie_model.json";

pub fn train_model(config: Config, output: Option<PathBuf>) -> Result<()> {
    let path = output
        .or(config.estimator.model_path)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL_PATH));

    let samples = synthetic_training_set();
    let model = LinearCalorieModel::fit(&samples).context("Failed to fit calorie model")?;
    model
        .save(&path)
        .with_context(|| format!("Failed to save calorie model to {}", path.display()))?;

    tracing::info!(path = %path.display(), samples = samples.len(), "Calorie model trained");

    println!("Model saved to {}", path.display());
    println!("intercept: {:.4}", model.intercept);
    for (name, coefficient) in ["age", "weight", "height", "activity", "goal"]
        .iter()
        .zip(model.coefficients)
    {
        println!("{name}: {coefficient:.4}");
    }

    Ok(())
}
