// 🏞️ Park Entity - a named location that visitors take trips to
//
// The name is write-once. Trips and the distinct-visitor set only grow,
// and only through Trip construction.

use super::trip::{Attach, Trip, TripPark};
use super::{ParkId, VisitorId};
use crate::error::{ParkError, Result};
use crate::validation::Rules;
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Not `Clone`: a copy would share the id but record trips separately.
#[derive(Debug)]
pub struct Park {
    /// Stable identity - NEVER changes
    id: ParkId,

    /// Set once at construction
    name: String,

    /// Trips to this park, in creation order
    trips: Vec<Trip>,

    /// Distinct visitors across `trips`
    visitors: HashSet<VisitorId>,

    created_at: DateTime<Utc>,
}

impl Park {
    pub fn new(name: impl Into<String>) -> Result<Park> {
        Self::with_rules(name, &Rules::default())
    }

    pub fn with_rules(name: impl Into<String>, rules: &Rules) -> Result<Park> {
        let name = name.into();
        if let Err(e) = rules.check_park_name(&name) {
            warn!(error = %e, "rejected park");
            return Err(e);
        }

        let park = Park {
            id: ParkId::new(),
            name,
            trips: Vec::new(),
            visitors: HashSet::new(),
            created_at: Utc::now(),
        };
        debug!(park = %park.id, name = %park.name, "created park");
        Ok(park)
    }

    pub fn id(&self) -> ParkId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Always fails: a park's name cannot change once set
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        let attempted = name.into();
        warn!(park = %self.id, attempted = %attempted, "attempt to rename park");
        Err(ParkError::ImmutableField {
            field: "name".to_string(),
        })
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    /// Distinct visitors, in no particular order
    pub fn visitors(&self) -> Vec<VisitorId> {
        self.visitors.iter().copied().collect()
    }

    pub fn has_visitor(&self, visitor: VisitorId) -> bool {
        self.visitors.contains(&visitor)
    }

    pub fn total_visits(&self) -> usize {
        self.trips.len()
    }

    /// Visitor with the most trips here.
    ///
    /// Ties go to the visitor that reached the top count first when trips
    /// are tallied in creation order.
    pub fn best_visitor(&self) -> Result<VisitorId> {
        if self.trips.is_empty() {
            return Err(ParkError::EmptyCollection {
                what: "best visitor".to_string(),
            });
        }

        Ok(tally_first_max(self.trips.iter().map(Trip::visitor)))
    }
}

/// Counts keys in arrival order and returns the first key holding the top
/// count. `keys` must not be empty.
fn tally_first_max(keys: impl Iterator<Item = VisitorId>) -> VisitorId {
    let mut counts: Vec<(VisitorId, usize)> = Vec::new();
    for key in keys {
        match counts.iter_mut().find(|(k, _)| *k == key) {
            Some((_, n)) => *n += 1,
            None => counts.push((key, 1)),
        }
    }

    let mut best = counts[0];
    for &(key, n) in &counts[1..] {
        if n > best.1 {
            best = (key, n);
        }
    }
    best.0
}

impl TripPark for Park {
    fn park_id(&self) -> ParkId {
        self.id
    }

    fn attach_trip(&mut self, trip: &Trip, _token: Attach) {
        self.trips.push(trip.clone());
        self.visitors.insert(trip.visitor());
    }
}

impl PartialEq for Park {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Park {}

// ============================================================================
// TESTS
// ============================================================================
