//! Resident census records.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/residents` | Resident table (listed columns only) |
//! | GET | `/api/residents/{id}` | Full record |
//! | POST | `/api/residents` | Add a resident |
//! | PUT | `/api/residents/{id}` | Replace a resident's record |
//!
//! Writes go through a [`ResidentStore`]; the server wraps the in-memory store
//! in a [`SimulatedResidentStore`] so latency and random rejection can be
//! configured.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod seed;
pub mod services;

pub use services::{InMemoryResidentStore, ResidentService, ResidentStore, SimulatedResidentStore};
