// 🗂️ Directory - owns parks and visitors, resolves ids back to entities
//
// Trips only carry ids. The directory is the arena that turns those ids
// into the Park and Visitor values they name.

use crate::entities::{Park, ParkId, Trip, Visitor, VisitorId};
use crate::error::{ParkError, Result};
use crate::report::{DirectoryReport, ParkSummary, VisitorSummary};
use crate::validation::Rules;
use tracing::debug;

/// Sole owner of its parks and visitors. Not `Clone`: a copy would share ids.
#[derive(Debug, Default)]
pub struct Directory {
    rules: Rules,

    /// Insertion order
    parks: Vec<Park>,

    /// Insertion order
    visitors: Vec<Visitor>,

    /// Trips booked through this directory, creation order
    trips: Vec<Trip>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rules(rules: Rules) -> Self {
        Directory {
            rules,
            ..Self::default()
        }
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    // ------------------------------------------------------------------------
    // Registration
    // ------------------------------------------------------------------------

    pub fn add_park(&mut self, name: impl Into<String>) -> Result<ParkId> {
        let park = Park::with_rules(name, &self.rules)?;
        let id = park.id();
        self.parks.push(park);
        Ok(id)
    }

    pub fn add_visitor(&mut self, name: impl Into<String>) -> Result<VisitorId> {
        let visitor = Visitor::with_rules(name, &self.rules)?;
        let id = visitor.id();
        self.visitors.push(visitor);
        Ok(id)
    }

    /// Book a trip between two entities owned by this directory.
    ///
    /// Unknown ids fail before validation; either way nothing is recorded.
    pub fn book_trip(
        &mut self,
        visitor: VisitorId,
        park: ParkId,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Result<Trip> {
        let vi = self.visitor_index(visitor)?;
        let pi = self.park_index(park)?;

        let trip = Trip::new_with_rules(
            &mut self.visitors[vi],
            &mut self.parks[pi],
            start_date,
            end_date,
            &self.rules,
        )?;
        self.trips.push(trip.clone());

        debug!(trip = %trip.id(), total = self.trips.len(), "booked trip");
        Ok(trip)
    }

    // ------------------------------------------------------------------------
    // Lookups
    // ------------------------------------------------------------------------

    fn park_index(&self, id: ParkId) -> Result<usize> {
        self.parks
            .iter()
            .position(|p| p.id() == id)
            .ok_or(ParkError::UnknownPark(id))
    }

    fn visitor_index(&self, id: VisitorId) -> Result<usize> {
        self.visitors
            .iter()
            .position(|v| v.id() == id)
            .ok_or(ParkError::UnknownVisitor(id))
    }

    pub fn park(&self, id: ParkId) -> Result<&Park> {
        self.park_index(id).map(|i| &self.parks[i])
    }

    pub fn visitor(&self, id: VisitorId) -> Result<&Visitor> {
        self.visitor_index(id).map(|i| &self.visitors[i])
    }

    /// Rename a visitor. Owned entities are never handed out mutably, so
    /// trips reach them only through `book_trip`.
    pub fn rename_visitor(&mut self, id: VisitorId, name: impl Into<String>) -> Result<()> {
        let i = self.visitor_index(id)?;
        self.visitors[i].set_name(name);
        Ok(())
    }

    pub fn parks(&self) -> &[Park] {
        &self.parks
    }

    pub fn visitors(&self) -> &[Visitor] {
        &self.visitors
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn find_park_by_name(&self, name: &str) -> Option<&Park> {
        self.parks.iter().find(|p| p.name() == name)
    }

    pub fn find_visitor_by_name(&self, name: &str) -> Option<&Visitor> {
        self.visitors.iter().find(|v| v.name() == name)
    }

    // ------------------------------------------------------------------------
    // Resolved queries
    // ------------------------------------------------------------------------

    pub fn visitors_of(&self, park: ParkId) -> Result<Vec<&Visitor>> {
        self.park(park)?
            .visitors()
            .into_iter()
            .map(|id| self.visitor(id))
            .collect()
    }

    pub fn best_visitor_of(&self, park: ParkId) -> Result<&Visitor> {
        let id = self.park(park)?.best_visitor()?;
        self.visitor(id)
    }

    pub fn parks_of(&self, visitor: VisitorId) -> Result<Vec<&Park>> {
        self.visitor(visitor)?
            .national_parks()
            .into_iter()
            .map(|id| self.park(id))
            .collect()
    }

    // ------------------------------------------------------------------------
    // Reports
    // ------------------------------------------------------------------------

    pub fn park_summary(&self, id: ParkId) -> Result<ParkSummary> {
        let park = self.park(id)?;
        let best_visitor = match park.best_visitor() {
            Ok(best) => Some(self.visitor(best)?.name().to_string()),
            Err(ParkError::EmptyCollection { .. }) => None,
            Err(e) => return Err(e),
        };

        Ok(ParkSummary {
            id,
            name: park.name().to_string(),
            total_visits: park.total_visits(),
            distinct_visitors: park.visitors().len(),
            best_visitor,
        })
    }

    pub fn visitor_summary(&self, id: VisitorId) -> Result<VisitorSummary> {
        let visitor = self.visitor(id)?;
        let mut parks: Vec<String> = self
            .parks_of(id)?
            .into_iter()
            .map(|p| p.name().to_string())
            .collect();
        parks.sort();

        Ok(VisitorSummary {
            id,
            name: visitor.name().to_string(),
            total_trips: visitor.trips().len(),
            parks,
        })
    }

    pub fn summaries(&self) -> Result<DirectoryReport> {
        let parks = self
            .parks
            .iter()
            .map(|p| self.park_summary(p.id()))
            .collect::<Result<Vec<_>>>()?;
        let visitors = self
            .visitors
            .iter()
            .map(|v| self.visitor_summary(v.id()))
            .collect::<Result<Vec<_>>>()?;

        Ok(DirectoryReport {
            parks,
            visitors,
            total_trips: self.trips.len(),
        })
    }

    pub fn to_json(&self) -> Result<String> {
        let report = self.summaries()?;
        serde_json::to_string_pretty(&report).map_err(|e| ParkError::Serialization(e.to_string()))
    }
}

// ============================================================================
// TESTS
// ============================================================================
