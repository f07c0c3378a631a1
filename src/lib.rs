//! Реестр кодпоинтов Unicode, собранный из текстовых таблиц UCD.
//!
//! ```no_run
//! use unicode_registry::{build, UcdConfig};
//!
//! let registry = build(&UcdConfig::new("./data/ucd/15.1.0")).unwrap();
//! let grave = &registry[0x0300];
//!
//! assert_eq!(grave.compositions.get(&0x0061), Some(&0x00E0));
//! ```

#[macro_use]
extern crate lazy_static;

pub mod codepoint;
pub mod config;
pub mod error;
pub mod ingest;
pub mod registry;
pub mod stats;
pub mod tables;

pub use codepoint::{CodePoint, DecompositionTag, NormalizationForm, QuickCheck};
pub use config::{UcdConfig, UcdTable};
pub use error::{UcdError, UcdErrorKind};
pub use ingest::build;
pub use registry::Registry;
pub use stats::RegistryStats;
