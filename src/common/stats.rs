use serde::{Deserialize, Serialize};

/// Aggregate dashboard numbers pushed over the live feed. Every field is
/// optional on the wire; an update only carries what changed.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_violation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violations_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high_priority: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medium_priority: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low_priority: Option<u64>,
}

impl DashboardStats {
    /// Folds an update into held state. Fields absent from the update keep
    /// their current value.
    pub fn apply(&mut self, update: &DashboardStats) {
        if let Some(top_violation) = &update.top_violation {
            self.top_violation = Some(top_violation.clone());
        }
        if let Some(violations_count) = update.violations_count {
            self.violations_count = Some(violations_count);
        }
        if let Some(high_priority) = update.high_priority {
            self.high_priority = Some(high_priority);
        }
        if let Some(medium_priority) = update.medium_priority {
            self.medium_priority = Some(medium_priority);
        }
        if let Some(low_priority) = update.low_priority {
            self.low_priority = Some(low_priority);
        }
    }
}
