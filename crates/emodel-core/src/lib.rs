//! # emodel-core: ITU-T G.107 transmission rating
//!
//! This library computes the E-model transmission rating factor R, a single
//! score predicting the perceived quality of a telephone connection from
//! twenty terminal and network parameters (loudness ratings, echo, noise,
//! delay, codec impairment, packet loss).
//!
//! ## Usage
//!
//! ```rust
//! use emodel_core::{compute, InputParameters};
//!
//! // G.107 reference connection
//! let params = InputParameters::g107_defaults();
//! let r = compute(&params);
//! assert!((r - 93.2).abs() < 0.01);
//!
//! // 2 % random loss on G.729A
//! let lossy = InputParameters { ie: 11.0, bpl: 19.0, ppl: 2.0, ..params };
//! assert!(lossy.compute() < r);
//! ```
//!
//! The engine is a pure function. It never fails: inputs outside a formula's
//! domain (for example `Qdu < 0`) produce a NaN R. Use
//! [`validation::validate`] to reject such inputs up front.

pub mod engine;
pub mod error;
pub mod formulas;
pub mod loader;
pub mod logging;
pub mod params;
pub mod quality;
pub mod validation;

// Re-export commonly used types and functions
pub use engine::{compute, compute_breakdown, RatingBreakdown};
pub use error::{EmodelError, Result};
pub use loader::{load, load_from_reader, load_from_str, InputSource};
pub use params::InputParameters;
pub use quality::{mos_from_r, QualityLevel, QualityScore};
pub use validation::{validate, validation_report};

/// Version information for the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
