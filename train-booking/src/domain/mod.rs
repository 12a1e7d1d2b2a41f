//! Domain types for the train booking core.
//!
//! This module contains the core domain model types: stations, routes,
//! spans, tickets and trains. All types enforce their invariants at
//! construction time, so code that receives these types can trust their
//! validity.

mod error;
mod route;
mod span;
mod station;
mod ticket;
mod time;
mod train;

pub use error::DomainError;
pub use route::{Route, RoutePosition};
pub use span::{Span, overlaps};
pub use station::{InvalidStation, Station};
pub use ticket::{Passenger, Ticket};
pub use time::{ClockTime, MINUTES_PER_DAY, TimeError};
pub use train::{NewTrain, Train, TrainId};
