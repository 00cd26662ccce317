//! Server application core modules.
//!
//! This module contains all server-side functionality for the Apotek catalog: HTTP routing,
//! the operation services enforcing catalog invariants, the consistency components they are
//! built from, database repositories, and the client for the external image host.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod media;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
