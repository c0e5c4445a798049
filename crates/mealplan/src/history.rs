use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::PlanSummary;

/// A generated plan as remembered in the user's history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// `YYYY-MM-DD`
    pub date: String,
    pub summary: PlanSummary,
}

impl HistoryEntry {
    pub fn new(date: impl Into<String>, summary: PlanSummary) -> Self {
        Self {
            date: date.into(),
            summary,
        }
    }

    pub fn to_value(&self) -> Value {
        // A struct of strings, numbers and vectors always serializes
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// Food names from history entries, oldest entry first.
///
/// Parsing is best effort: entries without a `summary.meals` array, meals
/// without `foods`, and foods without a string `name` are skipped.
pub fn liked_names_from_history(entries: &[Value]) -> Vec<String> {
    let mut names = Vec::new();
    let mut skipped = 0usize;

    for entry in entries {
        let Some(meals) = entry
            .get("summary")
            .and_then(|summary| summary.get("meals"))
            .and_then(Value::as_array)
        else {
            skipped += 1;
            continue;
        };

        names.extend(
            meals
                .iter()
                .filter_map(|meal| meal.get("foods").and_then(Value::as_array))
                .flatten()
                .filter_map(|food| food.get("name").and_then(Value::as_str))
                .map(str::to_owned),
        );
    }

    if skipped > 0 {
        tracing::debug!(skipped, "Skipped malformed history entries");
    }

    names
}
