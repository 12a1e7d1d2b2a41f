//! Train booking core.
//!
//! Models trains running fixed routes and tickets booked between stations
//! on those routes, and answers seat availability, boarding, passenger age
//! and schedule queries from the route/interval model.

pub mod booking;
pub mod config;
pub mod domain;
pub mod ledger;
pub mod schedule;
pub mod store;
pub mod web;
