//! Common test infrastructure for efmlwd-update tests
//!
//! # Usage
//!
//! In your test file, add:
//! ```ignore
//! mod common;
//! use common::*;
//! ```
//!
//! # Modules
//!
//! - `constants`: Plugin identity, versions and tags
//! - `builders`: Fluent builders for release feed bodies and checker config
//! - `mock_server`: Wiremock setup helpers for the latest-release endpoint

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod builders;
pub mod constants;
pub mod mock_server;

pub use builders::*;
pub use constants::*;
pub use mock_server::*;
