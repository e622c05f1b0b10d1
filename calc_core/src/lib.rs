//! # calc_core - Calculator Catalog Engine
//!
//! `calc_core` holds everything behind the kceva calculator site that is not
//! presentation: the catalog of ~100 calculators, form validation, the
//! client-side stores for history, preferences and theme, and the resolver
//! that hands a page the unit able to run a given calculator.
//!
//! ## Design Philosophy
//!
//! - **Validated at construction**: catalog integrity and resolver mappings
//!   are checked once, up front
//! - **JSON at the edges**: forms in, results out, persisted state on disk
//!   all go through `serde_json`
//! - **Explicit state**: stores are constructed, hydrated and passed around;
//!   nothing global is mutable
//! - **Rich Errors**: structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::catalog::Catalog;
//! use calc_core::resolver::{ComponentResolver, Resolution};
//! use calc_core::store::ClientState;
//! use calc_core::units::Evaluation;
//! use serde_json::json;
//!
//! let catalog = Catalog::builtin().unwrap();
//! let resolver = ComponentResolver::builtin(catalog).unwrap();
//! let state = ClientState::in_memory();
//!
//! if let Resolution::Implemented { descriptor, unit, .. } = resolver.resolve("tip-calculator") {
//!     let form = json!({ "bill": "80", "tip_percent": "20" });
//!     if let Evaluation::Computed(result) = unit.evaluate(form.as_object().unwrap()).unwrap() {
//!         let inputs = form.as_object().cloned().unwrap();
//!         state.history.add_calculation(descriptor.id, descriptor.name, inputs, result);
//!     }
//! }
//! assert_eq!(state.history.len(), 1);
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Calculator and category descriptors and queries
//! - [`validation`] - Rules, schemas, sanitizers and a form validator
//! - [`store`] - History, preferences, theme, app and performance stores
//! - [`resolver`] - Calculator id to unit mapping and status
//! - [`units`] - Runnable calculator units (fields, schema, compute)
//! - [`formulas`] - Pure calculation functions
//! - [`seo`], [`sitemap`], [`offline`] - Page metadata, sitemap and offline cache
//! - [`format`] - Number, currency and slug formatting
//! - [`config`] - Site configuration
//! - [`errors`] - Structured error types

pub mod catalog;
pub mod config;
pub mod errors;
pub mod format;
pub mod formulas;
pub mod offline;
pub mod resolver;
pub mod seo;
pub mod sitemap;
pub mod store;
pub mod units;
pub mod validation;

// Re-export commonly used types at crate root for convenience
pub use catalog::{CalculatorDescriptor, Catalog, CategoryId};
pub use config::SiteConfig;
pub use errors::{CalcError, CalcResult};
pub use resolver::{ComponentResolver, Resolution};
pub use store::ClientState;
