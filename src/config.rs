use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use dietplan_mealplan::PlannerSettings;
use dietplan_user::UserProfile;
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub planner: PlannerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub estimator: EstimatorConfig,
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PlannerConfig {
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    #[serde(default = "default_min_meal_calories")]
    pub min_meal_calories: f64,
    #[serde(default = "default_history_window")]
    pub history_window: usize,
    /// Fixed seed for reproducible plans, entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
            tolerance: default_tolerance(),
            min_meal_calories: default_min_meal_calories(),
            history_window: default_history_window(),
            seed: None,
        }
    }
}

impl PlannerConfig {
    pub fn settings(&self) -> PlannerSettings {
        PlannerSettings {
            top_k: self.top_k,
            tolerance: self.tolerance,
            min_meal_calories: self.min_meal_calories,
            history_window: self.history_window,
        }
    }
}

fn default_top_k() -> usize {
    PlannerSettings::default().top_k
}

fn default_tolerance() -> f64 {
    PlannerSettings::default().tolerance
}

fn default_min_meal_calories() -> f64 {
    PlannerSettings::default().min_meal_calories
}

fn default_history_window() -> usize {
    PlannerSettings::default().history_window
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CatalogConfig {
    /// JSON catalog file, the built-in catalog when absent
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct EstimatorConfig {
    /// Trained linear calorie model, Harris-Benedict only when absent
    #[serde(default)]
    pub model_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HistoryConfig {
    #[serde(default = "default_history_path")]
    pub path: PathBuf,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            path: default_history_path(),
        }
    }
}

fn default_history_path() -> PathBuf {
    PathBuf::from("meal_history.jsonl")
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Default user profile, overridable per run from the command line
#[derive(Debug, Deserialize, Clone)]
pub struct ProfileConfig {
    #[serde(default = "default_weight")]
    pub weight: f64,
    #[serde(default = "default_height")]
    pub height: f64,
    #[serde(default = "default_age")]
    pub age: u32,
    #[serde(default = "default_gender")]
    pub gender: String,
    #[serde(default = "default_activity_level")]
    pub activity_level: String,
    #[serde(default = "default_goal")]
    pub goal: String,
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default = "default_meals_per_day")]
    pub meals_per_day: u32,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            weight: default_weight(),
            height: default_height(),
            age: default_age(),
            gender: default_gender(),
            activity_level: default_activity_level(),
            goal: default_goal(),
            dietary_restrictions: Vec::new(),
            allergies: Vec::new(),
            meals_per_day: default_meals_per_day(),
        }
    }
}

impl ProfileConfig {
    pub fn to_profile(&self) -> UserProfile {
        UserProfile {
            weight: self.weight,
            height: self.height,
            age: self.age,
            gender: self.gender.clone(),
            activity_level: self.activity_level.clone(),
            goal: self.goal.clone(),
            dietary_restrictions: self.dietary_restrictions.clone(),
            allergies: self.allergies.clone(),
            meals_per_day: self.meals_per_day,
            meal_history: Vec::new(),
        }
        .normalized()
    }
}

fn default_weight() -> f64 {
    70.0
}

fn default_height() -> f64 {
    170.0
}

fn default_age() -> u32 {
    30
}

fn default_gender() -> String {
    "male".to_string()
}

fn default_activity_level() -> String {
    "moderate".to_string()
}

fn default_goal() -> String {
    "maintain".to_string()
}

fn default_meals_per_day() -> u32 {
    3
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DIETPLAN__PLANNER__TOP_K, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, ignored when missing
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("DIETPLAN")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("profile.dietary_restrictions")
                .with_list_parse_key("profile.allergies"),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.planner.top_k == 0 {
            return Err("Planner top_k must be at least 1".to_string());
        }
        if !(self.planner.tolerance > 0.0 && self.planner.tolerance < 1.0) {
            return Err(format!(
                "Planner tolerance must be between 0 and 1, got {}",
                self.planner.tolerance
            ));
        }
        if self.planner.min_meal_calories <= 0.0 {
            return Err("Planner min_meal_calories must be positive".to_string());
        }
        if self.profile.meals_per_day == 0 {
            return Err("Profile meals_per_day must be at least 1".to_string());
        }
        Ok(())
    }
}
