//! Design constants for the collapsing headers
//!
//! Every factor that turns scroll progress into a visual property lives here.
//! The defaults are the shipped design values; overriding them is supported
//! for tuning but [`HeaderMetrics::validate`] must pass before use.

use furl_animation::Easing;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Scroll distance over which the header fully collapses
pub const COLLAPSE_DISTANCE: f32 = 80.0;
/// Horizontal inset of the feature row at full collapse
pub const FEATURE_INSET: f32 = 50.0;
/// Upward travel of the feature row at full collapse
pub const FEATURE_LIFT: f32 = 65.0;
/// Bottom inset of the gradient background at full collapse
pub const BACKGROUND_INSET: f32 = 85.0;
/// Overscroll distance per unit of extra banner scale
pub const BANNER_ZOOM_DIVISOR: f32 = 1000.0;
/// Search-bar transition length
pub const TRANSITION_MS: u32 = 200;

/// Errors for invalid design constants
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MetricsError {
    #[error("`{field}` must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f32 },
    #[error("`{field}` must be greater than zero, got {value}")]
    NotPositive { field: &'static str, value: f32 },
}

/// Geometry and timing constants shared by both header variants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderMetrics {
    pub collapse_distance: f32,
    pub feature_inset: f32,
    pub feature_lift: f32,
    /// Gap between the search row and the feature row
    pub feature_top_padding: f32,
    /// Vertical shift of each feature's icon-only overlay
    pub icon_overlay_offset: f32,
    /// Position of the collapsed-state search icon inside the header
    pub search_icon_offset: (f32, f32),
    /// Gradient background bottom inset at full collapse (Header 1)
    pub background_inset: f32,
    /// Bottom inset of the solid backdrop behind the banner (Momo)
    pub backdrop_inset: f32,
    pub banner_zoom_divisor: f32,
    /// Banner fade mask stop: opaque until here, clear at the bottom edge
    pub banner_mask_fade_start: f32,
    /// Outer padding around the header content
    pub edge_padding: f32,
    pub transition_ms: u32,
    pub transition_easing: Easing,
}

impl Default for HeaderMetrics {
    fn default() -> Self {
        Self {
            collapse_distance: COLLAPSE_DISTANCE,
            feature_inset: FEATURE_INSET,
            feature_lift: FEATURE_LIFT,
            feature_top_padding: 10.0,
            icon_overlay_offset: -8.0,
            search_icon_offset: (13.0, 10.0),
            background_inset: BACKGROUND_INSET,
            backdrop_inset: 80.0,
            banner_zoom_divisor: BANNER_ZOOM_DIVISOR,
            banner_mask_fade_start: 0.8,
            edge_padding: 15.0,
            transition_ms: TRANSITION_MS,
            transition_easing: Easing::EaseInOut,
        }
    }
}

impl HeaderMetrics {
    /// Check that every constant is usable; divisors must be positive
    pub fn validate(&self) -> Result<(), MetricsError> {
        let values = [
            ("collapse_distance", self.collapse_distance),
            ("feature_inset", self.feature_inset),
            ("feature_lift", self.feature_lift),
            ("feature_top_padding", self.feature_top_padding),
            ("icon_overlay_offset", self.icon_overlay_offset),
            ("search_icon_offset.x", self.search_icon_offset.0),
            ("search_icon_offset.y", self.search_icon_offset.1),
            ("background_inset", self.background_inset),
            ("backdrop_inset", self.backdrop_inset),
            ("banner_zoom_divisor", self.banner_zoom_divisor),
            ("banner_mask_fade_start", self.banner_mask_fade_start),
            ("edge_padding", self.edge_padding),
        ];
        for (field, value) in values {
            if !value.is_finite() {
                return Err(MetricsError::NotFinite { field, value });
            }
        }

        for (field, value) in [
            ("collapse_distance", self.collapse_distance),
            ("banner_zoom_divisor", self.banner_zoom_divisor),
        ] {
            if value <= 0.0 {
                return Err(MetricsError::NotPositive { field, value });
            }
        }
        Ok(())
    }
}
