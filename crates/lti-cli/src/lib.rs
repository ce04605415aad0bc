//! # lti-cli
//!
//! Command-line host for the LTI engine.
//!
//! This crate provides:
//! - Dashboard, related-isolation, history, summary, review and agenda
//!   reports over a JSON snapshot of the browser store
//! - TOML configuration with `config path|get|init` management
//! - Tracing setup honouring `RUST_LOG`

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_handlers;
pub mod error;
pub mod logging;

pub use error::{Error, Result};
