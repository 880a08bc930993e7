// 📊 Reports - serialisable summaries of parks and visitors

use crate::entities::{ParkId, VisitorId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParkSummary {
    pub id: ParkId,
    pub name: String,
    pub total_visits: usize,
    pub distinct_visitors: usize,

    /// Name of the best visitor; None when the park has no trips
    pub best_visitor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitorSummary {
    pub id: VisitorId,
    pub name: String,
    pub total_trips: usize,

    /// Names of distinct parks visited, sorted
    pub parks: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryReport {
    pub parks: Vec<ParkSummary>,
    pub visitors: Vec<VisitorSummary>,
    pub total_trips: usize,
}

impl ParkSummary {
    pub fn summary(&self) -> String {
        match &self.best_visitor {
            Some(best) => format!(
                "{}: {} visits by {} visitors (best: {})",
                self.name, self.total_visits, self.distinct_visitors, best
            ),
            None => format!("{}: no visits yet", self.name),
        }
    }
}

impl VisitorSummary {
    pub fn summary(&self) -> String {
        format!(
            "{}: {} trips to {} parks",
            self.name,
            self.total_trips,
            self.parks.len()
        )
    }
}
