use std::path::Path;

use dietplan_shared::Goal;
use ndarray::{Array1, Array2, s};
use serde::{Deserialize, Serialize};

use crate::{EstimatorError, UserProfile};

/// Number of model inputs: age, weight, height, activity factor, goal code
pub const MODEL_FEATURES: usize = 5;

/// Activity factor used when the activity label is not recognized
pub const DEFAULT_ACTIVITY_FACTOR: f64 = 1.5;

/// One labelled row of training data
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingSample {
    pub age: f64,
    pub weight: f64,
    pub height: f64,
    pub activity_factor: f64,
    /// 0 = lose, 1 = maintain, 2 = gain
    pub goal_code: f64,
    pub calories: f64,
}

impl TrainingSample {
    fn features(&self) -> [f64; MODEL_FEATURES] {
        [
            self.age,
            self.weight,
            self.height,
            self.activity_factor,
            self.goal_code,
        ]
    }
}

/// Numeric goal encoding shared by training and prediction
pub fn goal_code(goal: Option<Goal>) -> f64 {
    match goal {
        Some(Goal::Lose) => 0.0,
        Some(Goal::Gain) => 2.0,
        Some(Goal::Maintain) | None => 1.0,
    }
}

/// Model inputs for a profile
pub fn profile_features(profile: &UserProfile) -> [f64; MODEL_FEATURES] {
    [
        profile.age as f64,
        profile.weight,
        profile.height,
        profile
            .activity()
            .map(|level| level.multiplier())
            .unwrap_or(DEFAULT_ACTIVITY_FACTOR),
        goal_code(profile.goal()),
    ]
}

/// Linear regression from profile features to daily calories
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearCalorieModel {
    pub intercept: f64,
    pub coefficients: [f64; MODEL_FEATURES],
}

impl LinearCalorieModel {
    /// Ordinary least squares fit via the normal equations
    pub fn fit(samples: &[TrainingSample]) -> Result<Self, EstimatorError> {
        const PARAMS: usize = MODEL_FEATURES + 1;

        if samples.len() < PARAMS {
            return Err(EstimatorError::InsufficientSamples {
                minimum: PARAMS,
                current: samples.len(),
            });
        }

        // Design matrix with a leading intercept column
        let x = Array2::from_shape_fn((samples.len(), PARAMS), |(i, j)| match j {
            0 => 1.0,
            _ => samples[i].features()[j - 1],
        });
        let y = Array1::from_iter(samples.iter().map(|sample| sample.calories));

        let solution = solve(x.t().dot(&x), x.t().dot(&y))?;
        let mut coefficients = [0.0; MODEL_FEATURES];
        for (coefficient, value) in coefficients.iter_mut().zip(solution.iter().skip(1)) {
            *coefficient = *value;
        }

        Ok(Self {
            intercept: solution[0],
            coefficients,
        })
    }

    pub fn predict_raw(&self, features: &[f64; MODEL_FEATURES]) -> f64 {
        self.intercept
            + self
                .coefficients
                .iter()
                .zip(features)
                .map(|(c, x)| c * x)
                .sum::<f64>()
    }

    /// Predicted daily calories for a profile, rounded to whole kcal
    pub fn predict(&self, profile: &UserProfile) -> Result<f64, EstimatorError> {
        let prediction = self.predict_raw(&profile_features(profile)).round();
        if !prediction.is_finite() {
            return Err(EstimatorError::NonFinitePrediction);
        }
        Ok(prediction)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, EstimatorError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| EstimatorError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), EstimatorError> {
        let path = path.as_ref();
        let raw = serde_json::to_string_pretty(self)?;
        std::fs::write(path, raw).map_err(|source| EstimatorError::Io {
            path: path.display().to_string(),
            source,
        })
    }
}

/// Gaussian elimination with partial pivoting on a square system
fn solve(mut a: Array2<f64>, mut b: Array1<f64>) -> Result<Array1<f64>, EstimatorError> {
    let n = b.len();
    let scale = a.iter().fold(0.0_f64, |acc, value| acc.max(value.abs()));
    let threshold = scale.max(1.0) * 1e-12;

    for col in 0..n {
        let pivot = (col..n)
            .max_by(|&i, &j| a[[i, col]].abs().total_cmp(&a[[j, col]].abs()))
            .unwrap_or(col);
        if a[[pivot, col]].abs() < threshold {
            return Err(EstimatorError::SingularSystem);
        }
        if pivot != col {
            for k in 0..n {
                a.swap([col, k], [pivot, k]);
            }
            b.swap(col, pivot);
        }

        for row in col + 1..n {
            let factor = a[[row, col]] / a[[col, col]];
            for k in col..n {
                let above = a[[col, k]];
                a[[row, k]] -= factor * above;
            }
            let above = b[col];
            b[row] -= factor * above;
        }
    }

    let mut x = Array1::<f64>::zeros(n);
    for row in (0..n).rev() {
        let tail = a.row(row).slice(s![row + 1..]).dot(&x.slice(s![row + 1..]));
        x[row] = (b[row] - tail) / a[[row, row]];
    }
    Ok(x)
}

/// Synthetic training set loosely following TDEE patterns
#[rustfmt::skip]
pub fn synthetic_training_set() -> Vec<TrainingSample> {
    const ROWS: [(f64, f64, f64, f64, f64, f64); 20] = [
        (18.0, 50.0, 155.0, 1.2, 0.0, 1500.0),
        (22.0, 55.0, 160.0, 1.375, 1.0, 1800.0),
        (25.0, 60.0, 165.0, 1.55, 1.0, 2000.0),
        (30.0, 65.0, 170.0, 1.375, 2.0, 2400.0),
        (35.0, 70.0, 172.0, 1.725, 0.0, 1700.0),
        (40.0, 75.0, 175.0, 1.55, 1.0, 2200.0),
        (45.0, 80.0, 178.0, 1.2, 0.0, 1600.0),
        (50.0, 85.0, 180.0, 1.9, 2.0, 3000.0),
        (28.0, 58.0, 162.0, 1.55, 1.0, 2100.0),
        (32.0, 68.0, 169.0, 1.375, 1.0, 1950.0),
        (27.0, 62.0, 167.0, 1.55, 0.0, 1650.0),
        (60.0, 90.0, 185.0, 1.2, 2.0, 3200.0),
        (55.0, 82.0, 183.0, 1.375, 1.0, 2600.0),
        (48.0, 77.0, 176.0, 1.55, 1.0, 2300.0),
        (20.0, 52.0, 158.0, 1.2, 0.0, 1550.0),
        (26.0, 59.0, 161.0, 1.55, 2.0, 2500.0),
        (33.0, 71.0, 174.0, 1.725, 1.0, 2250.0),
        (38.0, 73.0, 171.0, 1.375, 0.0, 1800.0),
        (42.0, 79.0, 179.0, 1.55, 2.0, 2800.0),
        (29.0, 66.0, 168.0, 1.5, 1.0, 2050.0),
    ];

    ROWS.iter()
        .map(|&(age, weight, height, activity_factor, goal_code, calories)| TrainingSample {
            age,
            weight,
            height,
            activity_factor,
            goal_code,
            calories,
        })
        .collect()
}
