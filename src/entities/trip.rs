// 🧭 Trip Entity - the join record between a Visitor and a Park
//
// Constructing a Trip is the only event that mutates shared collections:
// the visitor's trips and parks, the park's trips and visitors, and the
// process-wide registry of every trip ever created. All five happen after
// validation, or not at all.

use super::{ParkId, TripId, VisitorId};
use crate::error::Result;
use crate::validation::Rules;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, OnceLock, PoisonError, RwLock};
use tracing::{debug, warn};

const DATE_FORMAT: &str = "%Y-%m-%d";

// ============================================================================
// ENDPOINTS
// ============================================================================

/// Proof that an attach call comes from `Trip` construction.
///
/// Only this module can build one, so no other path can push a trip
/// into an endpoint's collections.
pub struct Attach(());

/// Visitor side of a trip
pub trait TripVisitor {
    fn visitor_id(&self) -> VisitorId;

    /// Record `trip` in this visitor's trips and its park in the visited set
    fn attach_trip(&mut self, trip: &Trip, token: Attach);
}

/// Park side of a trip
pub trait TripPark {
    fn park_id(&self) -> ParkId;

    /// Record `trip` in this park's trips and its visitor in the visitor set
    fn attach_trip(&mut self, trip: &Trip, token: Attach);
}

// ============================================================================
// GLOBAL REGISTRY
// ============================================================================

/// Every trip ever constructed, in creation order. Never cleared.
static ALL_TRIPS: OnceLock<RwLock<Vec<Trip>>> = OnceLock::new();

fn registry() -> &'static RwLock<Vec<Trip>> {
    ALL_TRIPS.get_or_init(|| RwLock::new(Vec::new()))
}

// ============================================================================
// TRIP
// ============================================================================

#[derive(Debug, Clone)]
struct TripDates {
    start_date: String,
    end_date: String,
}

#[derive(Debug)]
struct TripInner {
    id: TripId,
    visitor: VisitorId,
    park: ParkId,
    created_at: DateTime<Utc>,
    dates: RwLock<TripDates>,
}

/// Shared handle to a trip.
///
/// Clones point at the same trip: the copy held by the park, the one held
/// by the visitor and the one in the registry all see the same dates.
#[derive(Debug, Clone)]
pub struct Trip {
    inner: Arc<TripInner>,
}

/// Point-in-time copy of a trip's values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRecord {
    pub id: TripId,
    pub visitor: VisitorId,
    pub park: ParkId,
    pub start_date: String,
    pub end_date: String,
    pub created_at: DateTime<Utc>,
}

impl Trip {
    /// Create a trip with the default rules
    pub fn new<V, P>(
        visitor: &mut V,
        park: &mut P,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Result<Trip>
    where
        V: TripVisitor + ?Sized,
        P: TripPark + ?Sized,
    {
        Self::new_with_rules(visitor, park, start_date, end_date, &Rules::default())
    }

    pub fn new_with_rules<V, P>(
        visitor: &mut V,
        park: &mut P,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
        rules: &Rules,
    ) -> Result<Trip>
    where
        V: TripVisitor + ?Sized,
        P: TripPark + ?Sized,
    {
        let start_date = start_date.into();
        let end_date = end_date.into();

        if let Err(e) = rules
            .check_date("start_date", &start_date)
            .and_then(|_| rules.check_date("end_date", &end_date))
        {
            warn!(error = %e, "rejected trip");
            return Err(e);
        }

        let trip = Trip {
            inner: Arc::new(TripInner {
                id: TripId::new(),
                visitor: visitor.visitor_id(),
                park: park.park_id(),
                created_at: Utc::now(),
                dates: RwLock::new(TripDates {
                    start_date,
                    end_date,
                }),
            }),
        };

        // Registry lock is taken after the attaches; endpoints may read it.
        visitor.attach_trip(&trip, Attach(()));
        park.attach_trip(&trip, Attach(()));
        registry()
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(trip.clone());

        debug!(
            trip = %trip.id(),
            visitor = %trip.visitor(),
            park = %trip.park(),
            "registered trip"
        );
        Ok(trip)
    }

    pub fn id(&self) -> TripId {
        self.inner.id
    }

    pub fn visitor(&self) -> VisitorId {
        self.inner.visitor
    }

    pub fn park(&self) -> ParkId {
        self.inner.park
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.inner.created_at
    }

    fn dates(&self) -> TripDates {
        self.inner
            .dates
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn start_date(&self) -> String {
        self.dates().start_date
    }

    pub fn end_date(&self) -> String {
        self.dates().end_date
    }

    /// Replace the start date. No length bound applies after construction.
    pub fn set_start_date(&self, date: impl Into<String>) {
        let mut dates = self.inner.dates.write().unwrap_or_else(PoisonError::into_inner);
        dates.start_date = date.into();
    }

    /// Replace the end date. No length bound applies after construction.
    pub fn set_end_date(&self, date: impl Into<String>) {
        let mut dates = self.inner.dates.write().unwrap_or_else(PoisonError::into_inner);
        dates.end_date = date.into();
    }

    /// Days between start and end when both are `YYYY-MM-DD` dates
    pub fn duration_days(&self) -> Option<i64> {
        let dates = self.dates();
        let start = NaiveDate::parse_from_str(&dates.start_date, DATE_FORMAT).ok()?;
        let end = NaiveDate::parse_from_str(&dates.end_date, DATE_FORMAT).ok()?;
        Some((end - start).num_days())
    }

    pub fn snapshot(&self) -> TripRecord {
        let dates = self.dates();
        TripRecord {
            id: self.inner.id,
            visitor: self.inner.visitor,
            park: self.inner.park,
            start_date: dates.start_date,
            end_date: dates.end_date,
            created_at: self.inner.created_at,
        }
    }

    /// Every trip constructed in this process, in creation order
    pub fn all() -> Vec<Trip> {
        registry()
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn count() -> usize {
        registry().read().unwrap_or_else(PoisonError::into_inner).len()
    }
}

impl PartialEq for Trip {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl Eq for Trip {}

// ============================================================================
// TESTS
// ============================================================================
