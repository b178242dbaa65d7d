//! Domain library for the FinanceConnect advisor marketplace.
//!
//! The marketplace connects clients with CEO-verified financial advisors. This crate
//! holds the advisor directory and its filter engine, the application review workflow,
//! the registration wizard, and the HTTP routers exposing them; the runnable service
//! lives in `services/api`.

pub mod auth;
pub mod config;
pub mod error;
pub mod marketplace;
pub mod telemetry;
