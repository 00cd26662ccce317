//! Operation services and the consistency components they are built from.
//!
//! Every operation opens one transaction and composes the validators, the singleton flag
//! maintainer, stock provisioning and the delete cascade inside it. Media store calls
//! happen around the transaction: uploads before it, removals after commit.

pub mod admin;
pub mod cascade;
pub mod category;
pub mod flag;
pub mod image;
pub mod pharmacy;
pub mod product;
pub mod stock;
pub mod unit;
pub mod validation;
