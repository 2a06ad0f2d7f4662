//! Captain (vehicle operator) accounts.
//!
//! Registration validates the flat form fields and stores a captain with a
//! nested `fullname` and `vehicle`.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/captains/register` | No | Register a new captain |
//! | GET | `/captains/{id}` | No | Fetch a captain by id |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::{CaptainRepository, PgCaptainRepository};
pub use services::CaptainService;
