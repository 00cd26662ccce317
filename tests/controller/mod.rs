//! Tests for HTTP controller endpoints.
//!
//! JSON endpoints are called directly with their extractors. Multipart endpoints and
//! routing are exercised through the full router.

mod category;
mod pharmacy;
mod product;
mod router;
mod unit;

use apotek_test_utils::prelude::*;

use crate::util::TestContextExt;
