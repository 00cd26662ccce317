//! Server application models and type definitions.
//!
//! This module contains data models for the server application: the shared application
//! state handed to every HTTP handler, and database model type aliases together with
//! their conversions into the API's DTOs.

pub mod app;
pub mod db;
