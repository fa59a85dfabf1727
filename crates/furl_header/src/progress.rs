//! Scroll offset to collapse progress
//!
//! Progress lives in `[-1, 0]`: `0` is the fully expanded header (at rest or
//! pulled down past the top), `-1` is fully collapsed. In between it follows
//! the offset linearly across the collapse distance.

use serde::Serialize;

use crate::metrics::HeaderMetrics;

/// Map a scroll offset to collapse progress over `collapse_distance`.
///
/// ```
/// use furl_header::progress::collapse_progress;
///
/// assert_eq!(collapse_progress(-40.0, 80.0), -0.5);
/// assert_eq!(collapse_progress(-200.0, 80.0), -1.0);
/// assert_eq!(collapse_progress(12.0, 80.0), 0.0);
/// ```
pub fn collapse_progress(offset: f32, collapse_distance: f32) -> f32 {
    let normalized = offset / collapse_distance;
    if -normalized > 1.0 {
        -1.0
    } else if offset > 0.0 || normalized.is_nan() {
        0.0
    } else {
        normalized
    }
}

/// Whether the content has scrolled up past the collapse distance
pub fn past_collapse_threshold(offset: f32, collapse_distance: f32) -> bool {
    -offset > collapse_distance
}

/// Collapse progress of a header, always in `[-1, 0]`
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Progress(f32);

impl Progress {
    pub const EXPANDED: Progress = Progress(0.0);
    pub const COLLAPSED: Progress = Progress(-1.0);

    pub fn from_offset(offset: f32, metrics: &HeaderMetrics) -> Self {
        Self(collapse_progress(offset, metrics.collapse_distance))
    }

    pub fn value(self) -> f32 {
        self.0
    }

    /// How far the header has collapsed, in `[0, 1]`
    pub fn collapsed_amount(self) -> f32 {
        -self.0
    }

    pub fn is_fully_expanded(self) -> bool {
        self.0 == 0.0
    }

    pub fn is_fully_collapsed(self) -> bool {
        self.0 == -1.0
    }
}

impl From<Progress> for f32 {
    fn from(progress: Progress) -> f32 {
        progress.0
    }
}
