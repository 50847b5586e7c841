//! # medscan-core
//!
//! Core types for grayscale medical image enhancement.
//!
//! This crate provides the foundational types used throughout the medscan
//! workspace:
//!
//! - [`GrayImage`] - Owned 8-bit grayscale intensity grid
//! - [`Error`] / [`Result`] - Unified error type for core operations
//!
//! ## Crate Structure
//!
//! This crate is the foundation of medscan and has no internal dependencies.
//! All other medscan crates depend on `medscan-core`:
//!
//! ```text
//! medscan-core (this crate)
//!    ^
//!    |
//!    +-- medscan-ops (intensity transforms, histograms)
//!    +-- medscan-io (PNG/JPEG grayscale I/O)
//!    +-- medscan-chart (histogram chart rendering)
//!    +-- medscan-cli (command-line tool)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod image;

pub use error::{Error, Result};
pub use image::GrayImage;
