//! # pawtrack
//!
//! Household chore tracker for a team of pets.
//!
//! This library provides:
//! - A recurrence evaluator deciding which chores fall on which calendar dates
//! - Period statistics: scheduled vs. completed counts, top performer, grades
//! - Generated weekly and monthly performance reviews
//! - A JSON HTTP API over a single file-backed household document
//!
//! ## Request Flow
//! 1. Handler resolves "today" and parses dates at the HTTP boundary
//! 2. Reads borrow the live document; writes run against a copy
//! 3. Writes are validated, saved to disk, then published
//! 4. Statistics are recomputed from the chores on every request
//!
//! ## Modules
//! - `schedule`: calendar dates, periods and recurrence rules
//! - `stats`: occurrence aggregation, leaderboard and grades
//! - `household`: the persisted document and its write-side rules
//! - `reviews`: species-flavoured review text
//! - `store`: persistence backends
//! - `api`: HTTP routes

pub mod api;
pub mod config;
pub mod household;
pub mod reviews;
pub mod schedule;
pub mod stats;
pub mod store;
pub mod util;

pub use config::Config;
pub use household::HouseholdData;
pub use store::HouseholdStore;
