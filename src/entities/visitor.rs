// 🥾 Visitor Entity - a named person who takes trips
//
// The constructor bounds the name to 1..=15 characters; `set_name` accepts
// any string. Renaming never touches identity.

use super::trip::{Attach, Trip, TripVisitor};
use super::{ParkId, VisitorId};
use crate::error::Result;
use crate::validation::Rules;
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Not `Clone`: a copy would share the id but record trips separately.
#[derive(Debug)]
pub struct Visitor {
    id: VisitorId,
    name: String,
    trips: Vec<Trip>,
    parks: HashSet<ParkId>,
    created_at: DateTime<Utc>,
}

impl Visitor {
    pub fn new(name: impl Into<String>) -> Result<Visitor> {
        Self::with_rules(name, &Rules::default())
    }

    pub fn with_rules(name: impl Into<String>, rules: &Rules) -> Result<Visitor> {
        let name = name.into();
        if let Err(e) = rules.check_visitor_name(&name) {
            warn!(error = %e, "rejected visitor");
            return Err(e);
        }

        let visitor = Visitor {
            id: VisitorId::new(),
            name,
            trips: Vec::new(),
            parks: HashSet::new(),
            created_at: Utc::now(),
        };
        debug!(visitor = %visitor.id, name = %visitor.name, "created visitor");
        Ok(visitor)
    }

    pub fn id(&self) -> VisitorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename. Unlike construction, no length bound is enforced here.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    /// Distinct parks visited, in no particular order
    pub fn national_parks(&self) -> Vec<ParkId> {
        self.parks.iter().copied().collect()
    }

    pub fn has_visited(&self, park: ParkId) -> bool {
        self.parks.contains(&park)
    }

    pub fn total_visits_at_park(&self, park: ParkId) -> usize {
        self.trips.iter().filter(|t| t.park() == park).count()
    }
}

impl TripVisitor for Visitor {
    fn visitor_id(&self) -> VisitorId {
        self.id
    }

    fn attach_trip(&mut self, trip: &Trip, _token: Attach) {
        self.trips.push(trip.clone());
        self.parks.insert(trip.park());
    }
}

impl PartialEq for Visitor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Visitor {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Park;

    #[test]
    fn test_visitor_creation() {
        let visitor = Visitor::new("Ada").unwrap();

        assert_eq!(visitor.name(), "Ada");
        assert!(visitor.trips().is_empty());
        assert!(visitor.national_parks().is_empty());
    }

    #[test]
    fn test_visitor_created_at() {
        let before = Utc::now();
        let visitor = Visitor::new("Ada").unwrap();

        assert!(visitor.created_at() >= before);
        assert!(visitor.created_at() <= Utc::now());
    }

    #[test]
    fn test_visitor_queries_are_idempotent() {
        let mut ada = Visitor::new("Ada").unwrap();
        let mut acadia = Park::new("Acadia").unwrap();
        let mut zion = Park::new("Zion").unwrap();
        Trip::new(&mut ada, &mut acadia, "2024-06-01", "2024-06-07").unwrap();
        Trip::new(&mut ada, &mut zion, "2024-07-01", "2024-07-07").unwrap();

        assert_eq!(ada.trips(), ada.trips());
        assert_eq!(
            ada.total_visits_at_park(acadia.id()),
            ada.total_visits_at_park(acadia.id())
        );

        let mut first = ada.national_parks();
        let mut second = ada.national_parks();
        first.sort_by_key(|p| p.to_string());
        second.sort_by_key(|p| p.to_string());
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn test_visitor_name_bounds() {
        assert!(Visitor::new("A").is_ok());
        assert!(Visitor::new("a".repeat(15)).is_ok());
        assert!(Visitor::new("").unwrap_err().is_validation());
        assert!(Visitor::new("a".repeat(16)).unwrap_err().is_validation());
    }

    // Construction enforces 1..=15 characters but renaming does not
    #[test]
    fn test_set_name_skips_length_bound() {
        let mut visitor = Visitor::new("Ada").unwrap();
        let id = visitor.id();

        visitor.set_name("Augusta Ada King, Countess of Lovelace");
        assert_eq!(visitor.name(), "Augusta Ada King, Countess of Lovelace");

        visitor.set_name("");
        assert_eq!(visitor.name(), "");
        assert_eq!(visitor.id(), id);
    }

    #[test]
    fn test_total_visits_at_park() {
        let mut ada = Visitor::new("Ada").unwrap();
        let mut acadia = Park::new("Acadia").unwrap();
        let mut zion = Park::new("Zion").unwrap();

        for _ in 0..4 {
            Trip::new(&mut ada, &mut acadia, "2024-06-01", "2024-06-07").unwrap();
        }
        Trip::new(&mut ada, &mut zion, "2024-07-01", "2024-07-07").unwrap();

        assert_eq!(ada.total_visits_at_park(acadia.id()), 4);
        assert_eq!(ada.total_visits_at_park(zion.id()), 1);
        assert_eq!(ada.trips().len(), 5);
    }

    #[test]
    fn test_national_parks_distinct() {
        let mut ada = Visitor::new("Ada").unwrap();
        let mut acadia = Park::new("Acadia").unwrap();
        let mut zion = Park::new("Zion").unwrap();

        Trip::new(&mut ada, &mut acadia, "2024-06-01", "2024-06-07").unwrap();
        Trip::new(&mut ada, &mut acadia, "2024-06-08", "2024-06-09").unwrap();
        Trip::new(&mut ada, &mut zion, "2024-07-01", "2024-07-07").unwrap();

        let parks = ada.national_parks();
        assert_eq!(parks.len(), 2);
        assert!(parks.contains(&acadia.id()));
        assert!(parks.contains(&zion.id()));
        assert!(ada.has_visited(zion.id()));
    }

    #[test]
    fn test_unvisited_park_counts_zero() {
        let ada = Visitor::new("Ada").unwrap();
        let acadia = Park::new("Acadia").unwrap();

        assert_eq!(ada.total_visits_at_park(acadia.id()), 0);
        assert!(!ada.has_visited(acadia.id()));
    }

    #[test]
    fn test_trips_keep_creation_order() {
        let mut ada = Visitor::new("Ada").unwrap();
        let mut acadia = Park::new("Acadia").unwrap();

        let first = Trip::new(&mut ada, &mut acadia, "2024-06-01", "2024-06-07").unwrap();
        let second = Trip::new(&mut ada, &mut acadia, "2024-08-01", "2024-08-07").unwrap();

        assert_eq!(ada.trips(), &[first, second]);
    }
}
