//! Object-fit resolution
//!
//! Computes where a media rectangle lands inside its container.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::LayoutError;

/// Pixel box of the hosting container
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Check if either side is zero (or negative)
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Natural pixel size of the media, known once metadata has loaded
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IntrinsicSize {
    pub width: f64,
    pub height: f64,
}

impl IntrinsicSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Metadata is available. A zero side means "not loaded yet".
    pub fn is_ready(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Object-fit policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum FitPolicy {
    /// Scale to cover, maintain aspect ratio (may crop)
    Cover,
    /// Scale to fit, maintain aspect ratio (may letterbox)
    #[default]
    Contain,
}

impl FitPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            FitPolicy::Cover => "cover",
            FitPolicy::Contain => "contain",
        }
    }
}

impl FromStr for FitPolicy {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cover" => Ok(FitPolicy::Cover),
            "contain" => Ok(FitPolicy::Contain),
            other => Err(LayoutError::InvalidPolicy(other.to_string())),
        }
    }
}

impl TryFrom<String> for FitPolicy {
    type Error = LayoutError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for FitPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rectangle the media is displayed at, relative to the container origin
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LayoutResult {
    pub width: f64,
    pub height: f64,
    pub top: f64,
    pub left: f64,
}

impl LayoutResult {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Resolve the display rectangle for `intrinsic` inside `viewport`.
///
/// The caller must only invoke this once the intrinsic size is known
/// (see [`IntrinsicSize::is_ready`]); use [`try_resolve`] when that is
/// not guaranteed.
pub fn resolve(viewport: Viewport, intrinsic: IntrinsicSize, policy: FitPolicy) -> LayoutResult {
    debug_assert!(intrinsic.is_ready(), "resolve called before metadata loaded");

    let scale = viewport.width / intrinsic.width;
    let candidate_height = intrinsic.height * scale;

    let height_driven = match policy {
        FitPolicy::Cover => candidate_height < viewport.height,
        FitPolicy::Contain => candidate_height > viewport.height,
    };

    let result = if height_driven {
        // Full container height, center horizontally
        let scale = viewport.height / intrinsic.height;
        let width = intrinsic.width * scale;
        LayoutResult {
            width,
            height: viewport.height,
            top: 0.0,
            left: (viewport.width - width) / 2.0,
        }
    } else {
        // Full container width, center vertically
        LayoutResult {
            width: viewport.width,
            height: candidate_height,
            top: (viewport.height - candidate_height) / 2.0,
            left: 0.0,
        }
    };

    tracing::trace!(
        "object-fit {}: {}x{} in {}x{} -> {:?}",
        policy, intrinsic.width, intrinsic.height, viewport.width, viewport.height, result
    );

    result
}

/// Resolve, or `None` while the intrinsic size is still unknown
pub fn try_resolve(
    viewport: Viewport,
    intrinsic: IntrinsicSize,
    policy: FitPolicy,
) -> Option<LayoutResult> {
    intrinsic.is_ready().then(|| resolve(viewport, intrinsic, policy))
}
