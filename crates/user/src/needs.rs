use dietplan_shared::Goal;
use serde::Serialize;

use crate::UserProfile;

const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
const KCAL_PER_GRAM_CARBS: f64 = 4.0;
const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Share of daily calories assigned to each macronutrient
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroSplit {
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl MacroSplit {
    /// Vegan takes precedence over the goal-based split
    pub fn for_profile(profile: &UserProfile) -> Self {
        if profile.has_restriction("vegan") {
            return Self::new(0.25, 0.55, 0.20);
        }

        match profile.goal() {
            Some(Goal::Lose) => Self::new(0.40, 0.35, 0.25),
            Some(Goal::Gain) => Self::new(0.30, 0.50, 0.20),
            Some(Goal::Maintain) | None => Self::new(0.30, 0.40, 0.30),
        }
    }

    fn new(protein: f64, carbs: f64, fats: f64) -> Self {
        Self {
            protein,
            carbs,
            fats,
        }
    }
}

/// Daily calorie and macronutrient targets in kcal and grams
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyNeeds {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl DailyNeeds {
    pub fn from_calories(calories: f64, profile: &UserProfile) -> Self {
        let split = MacroSplit::for_profile(profile);

        Self {
            calories: calories.round(),
            protein: (calories * split.protein / KCAL_PER_GRAM_PROTEIN).round(),
            carbs: (calories * split.carbs / KCAL_PER_GRAM_CARBS).round(),
            fats: (calories * split.fats / KCAL_PER_GRAM_FAT).round(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maintain_split() {
        let profile = UserProfile {
            goal: "maintain".to_string(),
            ..Default::default()
        };

        let needs = DailyNeeds::from_calories(2000.0, &profile);

        assert_eq!(
            needs,
            DailyNeeds {
                calories: 2000.0,
                protein: 150.0,
                carbs: 200.0,
                fats: 67.0,
            }
        );
    }

    #[test]
    fn test_lose_split() {
        let profile = UserProfile {
            goal: "lose".to_string(),
            ..Default::default()
        };

        let needs = DailyNeeds::from_calories(2000.0, &profile);

        assert_eq!(needs.protein, 200.0);
        assert_eq!(needs.carbs, 175.0);
        assert_eq!(needs.fats, 56.0);
    }

    #[test]
    fn test_vegan_overrides_goal() {
        let profile = UserProfile {
            goal: "lose".to_string(),
            dietary_restrictions: vec!["vegan".to_string()],
            ..Default::default()
        };

        assert_eq!(
            MacroSplit::for_profile(&profile),
            MacroSplit {
                protein: 0.25,
                carbs: 0.55,
                fats: 0.20,
            }
        );
    }
}
