//! HTTP API for pawtrack.
//!
//! ## Endpoints
//!
//! - `GET /api/health` - Health check
//! - `GET|POST /api/team-members`, `PUT|DELETE /api/team-members/{id}` - Household members
//! - `GET|PUT /api/settings` - Display settings
//! - `GET|POST /api/chores`, `PUT|DELETE /api/chores/{id}` - Chore definitions
//! - `POST /api/chores/{id}/complete`, `POST /api/chores/{id}/uncomplete` - Completion marks
//! - `GET /api/calendar/{date}`, `GET /api/calendar?start=&end=` - Occurrences per date
//! - `GET /api/stats?period=week|month&date=` - Period totals, top performer and grades
//! - `GET|POST /api/reviews`, `PUT|DELETE /api/reviews/{id}`, `DELETE /api/reviews/all` - Reviews
//! - `POST /api/reviews/monthly-audit`, `POST /api/reviews/weekly` - Generated reviews
//! - `GET|PUT /api/inventory`, `POST /api/inventory/sync`, `POST /api/inventory/refill` - Treat jar

mod calendar;
mod chores;
mod inventory;
mod members;
mod reviews;
mod routes;
mod settings;
mod stats;
pub mod types;

pub use routes::{router, serve, AppState};
pub use types::*;
