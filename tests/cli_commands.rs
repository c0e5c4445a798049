//! Tests for CLI commands (generate, history, train-model, catalog)

use temp_dir::TempDir;

mod helpers;

#[test]
fn test_cli_help_shows_all_commands() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let output = helpers::dietplan(dir.path()).arg("--help").output()?;

    let help_text = helpers::stdout(&output);

    assert!(help_text.contains("generate"), "generate command not in help");
    assert!(help_text.contains("history"), "history command not in help");
    assert!(help_text.contains("train-model"), "train-model command not in help");
    assert!(help_text.contains("catalog"), "catalog command not in help");

    Ok(())
}

#[test]
fn test_catalog_lists_builtin_foods() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let output = helpers::dietplan(dir.path()).arg("catalog").output()?;

    assert!(output.status.success());
    let text = helpers::stdout(&output);
    assert!(text.contains("Chicken Breast (skinless)"));
    assert!(text.contains("Kale (raw)"));

    Ok(())
}

#[test]
fn test_generate_exports_and_records_history() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let output = helpers::dietplan(dir.path())
        .args(["generate", "--seed", "7", "--export", "plan.txt"])
        .output()?;

    assert!(output.status.success(), "generate failed: {:?}", output);
    let text = helpers::stdout(&output);
    assert!(text.contains("Daily Totals:"));
    assert!(text.contains("Meal 3:"));

    let exported = std::fs::read_to_string(dir.child("plan.txt"))?;
    assert!(exported.starts_with("Your Meal Plan"));
    assert!(text.contains(&exported));

    let history = std::fs::read_to_string(dir.child("meal_history.jsonl"))?;
    assert_eq!(history.lines().count(), 1);

    let output = helpers::dietplan(dir.path()).arg("history").output()?;
    assert!(output.status.success());
    assert!(helpers::stdout(&output).contains("kcal  (3 meals)"));

    Ok(())
}

#[test]
fn test_generate_without_history() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let output = helpers::dietplan(dir.path())
        .args(["generate", "--no-history", "--meals", "4", "--restriction", "vegan"])
        .output()?;

    assert!(output.status.success());
    assert!(helpers::stdout(&output).contains("Meal 4:"));
    assert!(!dir.child("meal_history.jsonl").exists());

    let output = helpers::dietplan(dir.path()).arg("history").output()?;
    assert!(helpers::stdout(&output).contains("No history available yet."));

    Ok(())
}

#[test]
fn test_zero_meals_is_rejected() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let output = helpers::dietplan(dir.path())
        .args(["generate", "--meals", "0"])
        .output()?;

    assert!(!output.status.success());

    Ok(())
}

#[test]
fn test_invalid_environment_config_is_rejected() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let output = helpers::dietplan(dir.path())
        .env("DIETPLAN__PLANNER__TOP_K", "0")
        .args(["generate", "--no-history"])
        .output()?;

    assert!(!output.status.success());

    Ok(())
}

#[test]
fn test_trained_model_drives_generation() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let output = helpers::dietplan(dir.path())
        .args(["train-model", "--output", "model.json"])
        .output()?;
    assert!(output.status.success());
    assert!(dir.child("model.json").exists());

    let output = helpers::dietplan(dir.path())
        .env("DIETPLAN__ESTIMATOR__MODEL_PATH", "model.json")
        .args(["generate", "--no-history", "--seed", "1"])
        .output()?;

    assert!(output.status.success());
    assert!(helpers::stdout(&output).contains("Daily targets (model)"));

    Ok(())
}
