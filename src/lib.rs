// Park Ledger - Core Library
// National parks, visitors, and the trips that join them

pub mod directory;
pub mod entities;
pub mod error;
pub mod report;
pub mod validation;

// Re-export commonly used types
pub use directory::Directory;
pub use entities::{
    Park, ParkId,
    Visitor, VisitorId,
    Trip, TripId, TripRecord, TripPark, TripVisitor,
};
pub use error::{ParkError, Result};
pub use report::{DirectoryReport, ParkSummary, VisitorSummary};
pub use validation::Rules;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
