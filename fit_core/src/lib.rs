//! # fit_core - Fitness Metrics Engine
//!
//! `fit_core` computes the derived fitness metrics behind the FitStance tools
//! page: BMR, TDEE, a calorie target, BMI and its category, a daily water
//! target, and macronutrient grams. All inputs and outputs are
//! JSON-serializable so a web or terminal renderer can drive it directly.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **Parse, then compute**: raw form strings become a typed input first
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use fit_core::metrics::{compute, Goal, MetricsInput, Sex};
//!
//! let input = MetricsInput {
//!     age_years: 30,
//!     sex: Sex::Male,
//!     activity_factor: 1.55,
//!     goal: Goal::Maintain,
//!     weight_kg: 80.0,
//!     height_cm: 180.0,
//! };
//!
//! let result = compute(&input).unwrap();
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`metrics`] - Input parsing, the calculator, and display formatting
//! - [`preferences`] - Theme preference over an injected store
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types
//! - [`file_io`] - Preference file persistence with atomic saves and locking

pub mod errors;
#[cfg(not(target_arch = "wasm32"))]
pub mod file_io;
pub mod metrics;
pub mod preferences;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use errors::{FitError, FitResult};
pub use metrics::{compute, MetricsDisplay, MetricsInput, MetricsResult, RawMetricsForm};
pub use preferences::{PreferenceStore, Theme, ThemePreference};
