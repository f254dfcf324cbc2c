//! Aggregate counts over the idea table.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// Summary returned by the statistics endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct IdeaStats {
    pub total: u64,
    pub completed: u64,
    /// Ideas whose `date` starts with today's `YYYY-MM-DD`.
    pub today: u64,
    /// Percentage of completed ideas, two decimals; `0` on an empty store.
    pub completion_rate: f64,
}

impl IdeaStats {
    /// Builds the summary from raw counts.
    pub fn from_counts(total: u64, completed: u64, today: u64) -> Self {
        let completion_rate = if total == 0 {
            0.0
        } else {
            round2(completed as f64 / total as f64 * 100.0)
        };
        Self {
            total,
            completed,
            today,
            completion_rate,
        }
    }
}

// An empty store reports the rate as the integer `0`; any other store
// reports a float, even when nothing is completed.
impl Serialize for IdeaStats {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("IdeaStats", 4)?;
        state.serialize_field("total", &self.total)?;
        state.serialize_field("completed", &self.completed)?;
        state.serialize_field("today", &self.today)?;
        if self.total == 0 {
            state.serialize_field("completion_rate", &0u64)?;
        } else {
            state.serialize_field("completion_rate", &self.completion_rate)?;
        }
        state.end()
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Number of ideas dated on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCount {
    /// `YYYY-MM-DD`.
    pub date: String,
    pub count: u64,
}
