use ordered_float::OrderedFloat;
use serde::Serialize;

use crate::core::Entry;

/// Inclusive value-axis bounds. `min` is pinned at zero for every chart in
/// this crate; `max` is the largest observed entry result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    /// Raises `max` to a reference-line ceiling so a constant mark line is
    /// always inside the axis range.
    #[must_use]
    pub fn with_ceiling(self, mark_value: f64) -> Self {
        Self {
            min: self.min,
            max: self.max.max(mark_value),
        }
    }
}

/// Computes the value-axis domain over a collection of entries.
///
/// Entry results are finite by construction, so `OrderedFloat` gives a total
/// order here. An empty collection yields `{0, 0}`.
#[must_use]
pub fn value_domain(entries: &[Entry]) -> Domain {
    let max = entries
        .iter()
        .map(|entry| OrderedFloat(entry.result))
        .max()
        .map_or(0.0, |max| max.0);

    Domain { min: 0.0, max }
}
