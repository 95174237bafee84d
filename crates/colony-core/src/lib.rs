//! Colony Core - allocation engine for colonists, resources and rivalries
//!
//! This crate provides the building blocks of a colony allocation run:
//! - Domain types for colonists, resources, conflicts and preference lists
//! - A parser for the line-oriented colony fact format
//! - A manual builder mirroring interactive data entry
//! - A greedy initial allocation and raw pairwise swaps
//! - An envy detector that reports colonists jealous of a rival
//!
//! # Example
//!
//! ```
//! use colony_core::{compute_initial_allocation, enumerate_jealous, parse_str, ColonistId};
//!
//! let document = parse_str(
//!     "colon(A).\ncolon(B).\nressource(1).\nressource(2).\n\
//!      deteste(A,B).\npreferences(A,1,2).\npreferences(B,1,2).\n",
//! )
//! .unwrap();
//!
//! let allocation = compute_initial_allocation(&document).unwrap();
//! assert_eq!(allocation.resource_of("A").unwrap().as_str(), "1");
//! assert_eq!(enumerate_jealous(&allocation, &document), vec![ColonistId::from("B")]);
//! ```

pub mod allocation;
pub mod domain;
pub mod envy;
pub mod error;
pub mod manual;
pub mod parser;

pub use allocation::{compute_initial_allocation, swap, Allocation, AllocationError, SwapError};
pub use domain::{
    ColonistId, ConflictPair, ConflictRegistry, Document, EntityRegistry, Namespace, PreferenceList,
    PreferenceTable, RegistryError, ResourceId,
};
pub use envy::{enumerate_jealous, is_jealous, jealousy_report, Jealousy};
pub use error::{ColonyError, Result};
pub use manual::{ManualBuilder, ManualError};
pub use parser::{
    parse_configuration, parse_file, parse_reader, parse_str, FactKind, LoadError, ParseError,
    ParseErrorKind, Parser, Section, MAX_COLONISTS,
};
