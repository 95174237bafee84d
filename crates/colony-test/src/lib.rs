//! Shared test fixtures for colony allocator crates.
//!
//! This crate provides configuration texts only. It does NOT depend on
//! `colony-core`, so `colony-core` itself can use it as a dev-dependency
//! without ending up with two copies of its own types.
//!
//! - [`scenarios`] - Fixed configurations with known allocations
//! - [`facts`] - Builder producing configuration text
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! colony-test = { workspace = true }
//! ```
//!
//! ```ignore
//! use colony_test::scenarios::SCENARIO_A;
//! let document = colony_core::parse_str(SCENARIO_A).unwrap();
//! ```

pub mod facts;
pub mod scenarios;

pub use facts::FactFile;
