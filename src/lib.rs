//! Geolume chat widget library.
//!
//! This module re-exports the core components for testing and embedding.

pub mod app;
pub mod backend;
pub mod config;
pub mod events;
pub mod logging;
pub mod message;
pub mod protocol;
pub mod replies;
pub mod state;
pub mod ui;
pub mod validation;

#[cfg(test)]
mod integration_tests;
