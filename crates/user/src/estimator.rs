use dietplan_shared::{ActivityLevel, Gender, Goal};
use serde::Serialize;
use strum::{AsRefStr, Display};

use crate::{EstimatorError, LinearCalorieModel, UserProfile};

/// Anything able to turn a profile into a daily calorie number
pub trait CalorieEstimator {
    fn estimate_calories(&self, profile: &UserProfile) -> Result<f64, EstimatorError>;
}

/// Closed-form Harris-Benedict estimate with activity and goal adjustments
#[derive(Debug, Clone, Copy, Default)]
pub struct HarrisBenedict;

impl HarrisBenedict {
    /// Basal metabolic rate; anything other than male uses the female equation
    pub fn bmr(profile: &UserProfile) -> f64 {
        let (weight, height, age) = (profile.weight, profile.height, profile.age as f64);

        match profile.gender() {
            Some(Gender::Male) => 88.362 + 13.397 * weight + 4.799 * height - 5.677 * age,
            _ => 447.593 + 9.247 * weight + 3.098 * height - 4.330 * age,
        }
    }

    /// Daily calorie adjustment applied on top of energy expenditure
    pub fn goal_adjustment(goal: Option<Goal>) -> f64 {
        match goal {
            Some(Goal::Lose) => -500.0,
            Some(Goal::Gain) => 500.0,
            Some(Goal::Maintain) | None => 0.0,
        }
    }

    pub fn daily_calories(profile: &UserProfile) -> f64 {
        let multiplier = profile
            .activity()
            .unwrap_or(ActivityLevel::Sedentary)
            .multiplier();
        let tdee = Self::bmr(profile) * multiplier;

        (tdee + Self::goal_adjustment(profile.goal())).round()
    }
}

impl CalorieEstimator for HarrisBenedict {
    fn estimate_calories(&self, profile: &UserProfile) -> Result<f64, EstimatorError> {
        Ok(Self::daily_calories(profile))
    }
}

impl CalorieEstimator for LinearCalorieModel {
    fn estimate_calories(&self, profile: &UserProfile) -> Result<f64, EstimatorError> {
        self.predict(profile)
    }
}

#[derive(Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum EstimateSource {
    Model,
    HarrisBenedict,
}

/// Daily calories plus how they were obtained
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalorieEstimate {
    pub calories: f64,
    pub source: EstimateSource,
    /// Set when the model failed and the formula was used instead
    pub warning: Option<String>,
}

/// Daily calorie oracle: the regression model when available, otherwise the
/// Harris-Benedict formula. A failing model never aborts the estimate.
#[derive(Debug, Clone, Default)]
pub struct DailyCalorieEstimator {
    model: Option<LinearCalorieModel>,
}

impl DailyCalorieEstimator {
    pub fn formula_only() -> Self {
        Self { model: None }
    }

    pub fn with_model(model: LinearCalorieModel) -> Self {
        Self { model: Some(model) }
    }

    pub fn has_model(&self) -> bool {
        self.model.is_some()
    }

    pub fn estimate(&self, profile: &UserProfile) -> CalorieEstimate {
        let Some(model) = &self.model else {
            return CalorieEstimate {
                calories: HarrisBenedict::daily_calories(profile),
                source: EstimateSource::HarrisBenedict,
                warning: None,
            };
        };

        match model.estimate_calories(profile) {
            Ok(calories) => CalorieEstimate {
                calories,
                source: EstimateSource::Model,
                warning: None,
            },
            Err(e) => {
                tracing::warn!(error = %e, "Calorie model failed, falling back to Harris-Benedict");
                CalorieEstimate {
                    calories: HarrisBenedict::daily_calories(profile),
                    source: EstimateSource::HarrisBenedict,
                    warning: Some(format!("Calorie model failed, used Harris-Benedict: {}", e)),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn male_profile() -> UserProfile {
        UserProfile {
            weight: 70.0,
            height: 175.0,
            age: 30,
            gender: "male".to_string(),
            activity_level: "moderate".to_string(),
            goal: "maintain".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_harris_benedict_male() {
        let mut profile = male_profile();
        assert_eq!(HarrisBenedict::daily_calories(&profile), 2628.0);

        profile.goal = "lose".to_string();
        assert_eq!(HarrisBenedict::daily_calories(&profile), 2128.0);
    }

    #[test]
    fn test_harris_benedict_female_gain() {
        let profile = UserProfile {
            weight: 60.0,
            height: 165.0,
            age: 25,
            gender: "female".to_string(),
            activity_level: "sedentary".to_string(),
            goal: "gain".to_string(),
            ..Default::default()
        };

        assert_eq!(HarrisBenedict::daily_calories(&profile), 2186.0);
    }

    #[test]
    fn test_unknown_activity_uses_sedentary() {
        let mut profile = male_profile();
        profile.activity_level = "sometimes".to_string();
        let mut sedentary = male_profile();
        sedentary.activity_level = "sedentary".to_string();

        assert_eq!(
            HarrisBenedict::daily_calories(&profile),
            HarrisBenedict::daily_calories(&sedentary)
        );
    }

    #[test]
    fn test_estimator_without_model_uses_formula() {
        let estimate = DailyCalorieEstimator::formula_only().estimate(&male_profile());

        assert_eq!(estimate.source, EstimateSource::HarrisBenedict);
        assert_eq!(estimate.calories, 2628.0);
        assert!(estimate.warning.is_none());
    }

    #[test]
    fn test_estimator_prefers_model() {
        let model = LinearCalorieModel {
            intercept: 2000.0,
            coefficients: [0.0; 5],
        };

        let estimate = DailyCalorieEstimator::with_model(model).estimate(&male_profile());

        assert_eq!(estimate.source, EstimateSource::Model);
        assert_eq!(estimate.calories, 2000.0);
    }

    #[test]
    fn test_failing_model_falls_back_with_warning() {
        let model = LinearCalorieModel {
            intercept: f64::NAN,
            coefficients: [0.0; 5],
        };

        let estimate = DailyCalorieEstimator::with_model(model).estimate(&male_profile());

        assert_eq!(estimate.source, EstimateSource::HarrisBenedict);
        assert_eq!(estimate.calories, 2628.0);
        assert!(estimate.warning.is_some_and(|w| w.contains("Harris-Benedict")));
    }
}
