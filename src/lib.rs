//! `salary-ensemble` library crate.
//!
//! The binary (`salary`) is a thin wrapper around this library so that:
//!
//! - the prediction core is testable without spawning processes
//! - the core (catalog, registry, ensemble) can sit behind another front-end
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod domain;
pub mod ensemble;
pub mod error;
pub mod io;
pub mod logging;
pub mod models;
pub mod report;
