//! # Attachment publisher server
//!
//! Listens for two kinds of webhook and joins them:
//! * Bank transaction notifications, posted by the bank API.
//! * Receipt emails, posted by an inbound mail relay.
//!
//! Whenever a debit and a receipt from the same vendor for the same amount have both arrived, in either order, the
//! receipt is rendered to a PNG and attached to the transaction in the bank's app.
//!
//! ## Configuration
//! The server is configured via environment variables. See [config](config/index.html) for more information.
//!
//! ## Routes
//! * `/health`: A health check route that returns a 200 OK response.
//! * `/webhooks/mondo/transaction`: Incoming bank transactions.
//! * `/webhooks/email`: Incoming receipt emails.
//! * `/pending`: A snapshot of everything still waiting for a counterpart.
pub mod cli;
pub mod config;
pub mod data_objects;
pub mod errors;
pub mod expiry_worker;
pub mod helpers;
pub mod integrations;
pub mod routes;
pub mod server;
pub mod webhook_routes;

#[cfg(test)]
mod endpoint_tests;
