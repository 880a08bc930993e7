// Entity Models - Park, Visitor, Trip
//
// Each entity has a stable UUID identity. Equality between entities is
// identity equality, never name equality: two parks called "Zion" are
// two parks.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

pub mod park;
pub mod trip;
pub mod visitor;

pub use park::Park;
pub use trip::{Attach, Trip, TripPark, TripRecord, TripVisitor};
pub use visitor::Visitor;

// ============================================================================
// IDENTITIES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParkId(Uuid);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VisitorId(Uuid);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TripId(Uuid);

impl ParkId {
    pub(crate) fn new() -> Self {
        ParkId(Uuid::new_v4())
    }
}

impl VisitorId {
    pub(crate) fn new() -> Self {
        VisitorId(Uuid::new_v4())
    }
}

impl TripId {
    pub(crate) fn new() -> Self {
        TripId(Uuid::new_v4())
    }
}

impl fmt::Display for ParkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "park:{}", self.0)
    }
}

impl fmt::Display for VisitorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "visitor:{}", self.0)
    }
}

impl fmt::Display for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "trip:{}", self.0)
    }
}
