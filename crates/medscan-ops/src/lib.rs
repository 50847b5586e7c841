//! # medscan-ops
//!
//! Intensity transforms for grayscale medical images.
//!
//! This crate implements the enhancement core used by the `medscan` tool:
//! deterministic per-pixel remapping of 8-bit intensity grids, plus the
//! histogram computation used to inspect pixel distributions.
//!
//! # Modules
//!
//! - [`gamma`] - Power-law gamma correction
//! - [`stretch`] - Piecewise-linear contrast stretching via a 256-entry LUT
//! - [`equalize`] - Histogram equalization
//! - [`pipeline`] - Composition of base transforms into multi-stage pipelines
//! - [`histogram`] - 256-bin intensity histograms
//!
//! # Rounding Policies
//!
//! Two distinct numeric conventions are deliberately kept separate because
//! downstream pixel values differ visibly between them:
//!
//! - LUT construction ([`stretch`]) **truncates toward zero**.
//! - Gamma correction ([`gamma`]) **rounds to nearest** and clamps.
//!
//! # Example
//!
//! ```rust
//! use medscan_core::GrayImage;
//! use medscan_ops::pipeline::Pipeline;
//!
//! let img = GrayImage::filled(4, 4, 128);
//! let pipeline = Pipeline::contrast_then_gamma(0.5, 1.0, 70, 0, 140, 255);
//! let enhanced = pipeline.apply(&img).unwrap();
//! assert_eq!(enhanced.dimensions(), img.dimensions());
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod lookup;

pub mod equalize;
pub mod gamma;
pub mod histogram;
pub mod pipeline;
pub mod stretch;

pub use error::{OpsError, OpsResult};
pub use histogram::Histogram;
pub use pipeline::{Pipeline, Transform};
pub use stretch::StretchLut;
