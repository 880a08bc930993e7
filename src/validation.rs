// 📏 Validation Rules - length bounds for names and dates
//
// Lengths are counted in characters, not bytes.

use crate::error::{ParkError, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// RULES
// ============================================================================

/// Length bounds applied at construction time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    /// Minimum characters in a park name
    pub park_name_min: usize,

    /// Minimum characters in a visitor name (constructor only)
    pub visitor_name_min: usize,

    /// Maximum characters in a visitor name (constructor only)
    pub visitor_name_max: usize,

    /// Minimum characters in a trip start/end date (constructor only)
    pub date_min: usize,
}

impl Default for Rules {
    fn default() -> Self {
        Rules {
            park_name_min: 3,
            visitor_name_min: 1,
            visitor_name_max: 15,
            date_min: 7,
        }
    }
}

impl Rules {
    /// Load rules from a JSON document; absent keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ParkError::validation("rules", e.to_string()))
    }

    pub fn check_park_name(&self, name: &str) -> Result<()> {
        check_min("name", name, self.park_name_min)
    }

    pub fn check_visitor_name(&self, name: &str) -> Result<()> {
        let len = name.chars().count();
        if len < self.visitor_name_min || len > self.visitor_name_max {
            return Err(ParkError::validation(
                "name",
                format!(
                    "must be between {} and {} characters, got {}",
                    self.visitor_name_min, self.visitor_name_max, len
                ),
            ));
        }
        Ok(())
    }

    pub fn check_date(&self, field: &str, date: &str) -> Result<()> {
        check_min(field, date, self.date_min)
    }
}

fn check_min(field: &str, value: &str, min: usize) -> Result<()> {
    let len = value.chars().count();
    if len < min {
        return Err(ParkError::validation(
            field,
            format!("must be at least {} characters, got {}", min, len),
        ));
    }
    Ok(())
}
