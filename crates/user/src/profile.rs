use dietplan_shared::{ActivityLevel, Gender, Goal};
use serde::{Deserialize, Serialize};

/// Personal data and preferences that drive plan generation
///
/// Labels (`gender`, `activity_level`, `goal`) are kept as captured and
/// parsed at use; unrecognized labels fall back to defaults instead of
/// failing. `meal_history` holds raw history entries so malformed entries
/// can be skipped when read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub weight: f64,
    pub height: f64,
    pub age: u32,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub activity_level: String,
    #[serde(default)]
    pub goal: String,
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default = "default_meals_per_day")]
    pub meals_per_day: u32,
    #[serde(default)]
    pub meal_history: Vec<serde_json::Value>,
}

fn default_meals_per_day() -> u32 {
    3
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            weight: 0.0,
            height: 0.0,
            age: 0,
            gender: String::new(),
            activity_level: String::new(),
            goal: String::new(),
            dietary_restrictions: Vec::new(),
            allergies: Vec::new(),
            meals_per_day: default_meals_per_day(),
            meal_history: Vec::new(),
        }
    }
}

impl UserProfile {
    /// Normalize captured input the way the profile form saves it: labels
    /// lowercased, restrictions lowercased, blank allergies dropped.
    pub fn normalized(mut self) -> Self {
        self.gender = self.gender.trim().to_lowercase();
        self.activity_level = self.activity_level.trim().to_lowercase();
        self.goal = self.goal.trim().to_lowercase();
        self.dietary_restrictions = self
            .dietary_restrictions
            .iter()
            .map(|r| r.trim().to_lowercase())
            .filter(|r| !r.is_empty())
            .collect();
        self.allergies = self
            .allergies
            .iter()
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty())
            .collect();
        self
    }

    /// Parsed goal, `None` when the label is not one of the canonical values
    pub fn goal(&self) -> Option<Goal> {
        Goal::from_label(&self.goal)
    }

    pub fn activity(&self) -> Option<ActivityLevel> {
        ActivityLevel::from_label(&self.activity_level)
    }

    pub fn gender(&self) -> Option<Gender> {
        Gender::from_label(&self.gender)
    }

    pub fn has_restriction(&self, tag: &str) -> bool {
        self.dietary_restrictions
            .iter()
            .any(|r| r.eq_ignore_ascii_case(tag))
    }

    /// The last `window` history entries, oldest first
    pub fn recent_history(&self, window: usize) -> &[serde_json::Value] {
        let start = self.meal_history.len().saturating_sub(window);
        &self.meal_history[start..]
    }

    pub fn record_history(&mut self, entry: serde_json::Value) {
        self.meal_history.push(entry);
    }
}
