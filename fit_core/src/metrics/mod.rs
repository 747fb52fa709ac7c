//! # Fitness Metrics
//!
//! Every calculation follows the same pattern:
//!
//! - [`RawMetricsForm`] - raw strings from a form (optional first step)
//! - [`MetricsInput`] - validated, strongly-typed input
//! - [`compute`] - pure function producing a [`MetricsResult`]
//! - [`MetricsDisplay`] - rounded strings for each output slot
//!
//! No state is kept between calls.
//!
//! ## Example
//!
//! ```rust
//! use fit_core::metrics::{compute, MetricsDisplay, RawMetricsForm};
//!
//! let form = RawMetricsForm {
//!     age: Some("30".into()),
//!     sex: Some("male".into()),
//!     activity: Some("moderate".into()),
//!     goal: Some("maintain".into()),
//!     weight_kg: Some("80".into()),
//!     height_cm: Some("180".into()),
//!     ..Default::default()
//! };
//!
//! let input = form.parse()?;
//! let display = MetricsDisplay::from_result(&compute(&input)?);
//! assert_eq!(display.water, "3.20");
//! # Ok::<(), fit_core::FitError>(())
//! ```

pub mod bmi;
pub mod calculator;
pub mod display;
pub mod form;
pub mod input;
pub mod rounding;

pub use bmi::{BmiCategory, BmiSeverity};
pub use calculator::{compute, MetricsResult};
pub use display::MetricsDisplay;
pub use form::RawMetricsForm;
pub use input::{ActivityLevel, Goal, MetricsInput, Sex};
