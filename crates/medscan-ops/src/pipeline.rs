//! Transform composition.
//!
//! The enhancement methods are three interchangeable base transforms that
//! can be chained in any order the caller selects. Each stage consumes the
//! previous stage's output grid; no intermediate clamping is needed beyond
//! what each stage already guarantees, since every stage both expects and
//! produces intensities in [0, 255].
//!
//! The two pipelines the tool historically shipped are kept as named
//! constructors: [`Pipeline::contrast_then_gamma`] and
//! [`Pipeline::equalize_then_gamma`].
//!
//! # Example
//!
//! ```rust
//! use medscan_core::GrayImage;
//! use medscan_ops::{Pipeline, Transform};
//!
//! let img = GrayImage::filled(4, 4, 200);
//! let out = Pipeline::new()
//!     .then(Transform::Stretch { r1: 70, s1: 0, r2: 140, s2: 255 })
//!     .then(Transform::Gamma { gamma: 0.5, gain: 1.0 })
//!     .apply(&img)
//!     .unwrap();
//! assert_eq!(out.dimensions(), (4, 4));
//! ```

use medscan_core::GrayImage;
use tracing::debug;

use crate::equalize::equalize;
use crate::gamma::{self, gamma_correct};
use crate::stretch::{contrast_stretch, StretchLut};
use crate::OpsResult;

/// A single base transform with its parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    /// Power-law gamma correction (`gain * r^gamma`, rounded).
    Gamma {
        /// Exponent applied to the normalized intensity
        gamma: f64,
        /// Multiplier applied after the power
        gain: f64,
    },
    /// Piecewise-linear contrast stretch through breakpoints
    /// `(r1, s1)` and `(r2, s2)`.
    Stretch {
        /// Low input breakpoint
        r1: u8,
        /// Output value at `r1`
        s1: u8,
        /// High input breakpoint
        r2: u8,
        /// Output value at `r2`
        s2: u8,
    },
    /// Histogram equalization (parameter-free).
    Equalize,
}

impl Transform {
    /// Checks the transform's parameters without touching any pixels.
    ///
    /// # Errors
    ///
    /// Returns [`crate::OpsError::InvalidParameter`] for non-positive
    /// gamma/gain or out-of-order stretch breakpoints.
    pub fn validate(&self) -> OpsResult<()> {
        match *self {
            Transform::Gamma { gamma, gain } => gamma::validate(gamma, gain),
            Transform::Stretch { r1, s1, r2, s2 } => {
                StretchLut::build(r1, s1, r2, s2).map(|_| ())
            }
            Transform::Equalize => Ok(()),
        }
    }

    /// Applies the transform, returning a new image.
    pub fn apply(&self, img: &GrayImage) -> OpsResult<GrayImage> {
        match *self {
            Transform::Gamma { gamma, gain } => gamma_correct(img, gamma, gain),
            Transform::Stretch { r1, s1, r2, s2 } => contrast_stretch(img, r1, s1, r2, s2),
            Transform::Equalize => Ok(equalize(img)),
        }
    }

    /// Short name used in logs and CLI stage lists.
    pub fn name(&self) -> &'static str {
        match self {
            Transform::Gamma { .. } => "gamma",
            Transform::Stretch { .. } => "stretch",
            Transform::Equalize => "equalize",
        }
    }
}

/// An ordered chain of base transforms.
///
/// Stages run front to back; stage N's output is stage N+1's input.
/// Parameters of every stage are validated before any pixel work, so an
/// invalid later stage fails the whole invocation without producing
/// partial results.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    stages: Vec<Transform>,
}

impl Pipeline {
    /// Creates an empty pipeline (identity).
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a stage, builder-style.
    #[must_use]
    pub fn then(mut self, stage: Transform) -> Self {
        self.stages.push(stage);
        self
    }

    /// The classic combined method: contrast stretch, then gamma.
    pub fn contrast_then_gamma(gamma: f64, gain: f64, r1: u8, s1: u8, r2: u8, s2: u8) -> Self {
        Self::new()
            .then(Transform::Stretch { r1, s1, r2, s2 })
            .then(Transform::Gamma { gamma, gain })
    }

    /// The equalization variant: histogram equalization, then gamma.
    pub fn equalize_then_gamma(gamma: f64, gain: f64) -> Self {
        Self::new()
            .then(Transform::Equalize)
            .then(Transform::Gamma { gamma, gain })
    }

    /// Returns the ordered stages.
    #[inline]
    pub fn stages(&self) -> &[Transform] {
        &self.stages
    }

    /// Returns `true` if the pipeline has no stages.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Validates every stage's parameters.
    ///
    /// # Errors
    ///
    /// Returns the first stage's [`crate::OpsError::InvalidParameter`].
    pub fn validate(&self) -> OpsResult<()> {
        self.stages.iter().try_for_each(Transform::validate)
    }

    /// Runs the pipeline over an image, returning the final grid.
    ///
    /// An empty pipeline returns a copy of the input.
    ///
    /// # Errors
    ///
    /// Returns [`crate::OpsError::InvalidParameter`] if any stage's
    /// parameters are invalid; validation happens up front.
    pub fn apply(&self, img: &GrayImage) -> OpsResult<GrayImage> {
        self.validate()?;
        let mut out = img.clone();
        for stage in &self.stages {
            debug!(stage = stage.name(), "applying pipeline stage");
            out = stage.apply(&out)?;
        }
        Ok(out)
    }
}
