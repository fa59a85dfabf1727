//! Visual properties derived from scroll progress
//!
//! Everything here is a pure function of the scroll offset, the collapse
//! progress derived from it, and the search blend: `0` while the search bar is
//! collapsed, `1` while expanded, in between during the search transition.
//! Properties written as `expanded ? a : b` interpolate between `b` and `a`
//! by that blend.

use serde::Serialize;

use crate::metrics::HeaderMetrics;
use crate::progress::Progress;
use crate::variant::HeaderVariant;

/// Interpolate a property between its collapsed-search and expanded-search values
fn by_search(blend: f32, expanded: f32, collapsed: f32) -> f32 {
    if blend <= 0.0 {
        collapsed
    } else if blend >= 1.0 {
        expanded
    } else {
        collapsed + (expanded - collapsed) * blend
    }
}

/// Point an element scales around
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    #[default]
    Center,
    Top,
}

/// Search field, avatar and dismiss button
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SearchRowVisuals {
    /// Search field opacity
    pub opacity: f32,
    pub avatar_opacity: f32,
    /// The "×" button fades in over the avatar while the search bar opens
    pub dismiss_opacity: f32,
}

/// Feature-button row and the cross-fade inside each button
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FeatureRowVisuals {
    pub padding_x: f32,
    pub padding_top: f32,
    pub offset_y: f32,
    pub opacity: f32,
    /// Icon + title stack of each button
    pub label_opacity: f32,
    /// Icon-only overlay of each button
    pub icon_overlay_opacity: f32,
    pub icon_overlay_offset_y: f32,
}

/// Search icon shown in the top-left corner once collapsed
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CollapsedIconVisuals {
    pub opacity: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

/// Variant-specific background treatment
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum BackgroundVisuals {
    /// Gradient fill retracting from the bottom as the header collapses
    Gradient { bottom_inset: f32 },
    /// Banner image over a solid backdrop
    Banner {
        opacity: f32,
        scale: f32,
        anchor: Anchor,
        /// Opaque until this fraction of the height, then fades to clear
        mask_fade_start: f32,
        backdrop_opacity: f32,
        backdrop_bottom_padding: f32,
    },
}

/// Every computed visual property of one header frame
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct HeaderVisuals {
    pub offset: f32,
    pub progress: Progress,
    pub search_blend: f32,
    /// Counter-offset that keeps the header pinned while its content scrolls
    pub pin_offset_y: f32,
    pub search_row: SearchRowVisuals,
    pub features: FeatureRowVisuals,
    pub collapsed_search_icon: CollapsedIconVisuals,
    pub background: BackgroundVisuals,
}

impl HeaderVisuals {
    /// Compute a frame from the scroll offset and the search blend (`0..=1`)
    pub fn compute(
        variant: HeaderVariant,
        metrics: &HeaderMetrics,
        offset: f32,
        search_blend: f32,
    ) -> Self {
        let progress = Progress::from_offset(offset, metrics);
        let p = progress.value();
        let blend = search_blend.clamp(0.0, 1.0);

        let search_row = SearchRowVisuals {
            opacity: by_search(blend, 1.0, 1.0 + p),
            avatar_opacity: by_search(blend, 0.0, 1.0),
            dismiss_opacity: blend,
        };

        let features = FeatureRowVisuals {
            padding_x: -p * metrics.feature_inset,
            padding_top: metrics.feature_top_padding,
            offset_y: p * metrics.feature_lift,
            opacity: by_search(blend, 0.0, 1.0),
            label_opacity: 1.0 + p,
            icon_overlay_opacity: -p,
            icon_overlay_offset_y: metrics.icon_overlay_offset,
        };

        let collapsed_search_icon = CollapsedIconVisuals {
            opacity: by_search(blend, 0.0, -p),
            offset_x: metrics.search_icon_offset.0,
            offset_y: metrics.search_icon_offset.1,
        };

        let background = match variant {
            HeaderVariant::Standard => BackgroundVisuals::Gradient {
                bottom_inset: -p * metrics.background_inset,
            },
            HeaderVariant::Momo => BackgroundVisuals::Banner {
                opacity: by_search(blend, 1.0, 1.0 + p),
                scale: banner_scale(offset, metrics),
                anchor: Anchor::Top,
                mask_fade_start: metrics.banner_mask_fade_start,
                backdrop_opacity: by_search(blend, 0.0, -p),
                backdrop_bottom_padding: metrics.backdrop_inset,
            },
        };

        Self {
            offset,
            progress,
            search_blend: blend,
            pin_offset_y: -offset,
            search_row,
            features,
            collapsed_search_icon,
            background,
        }
    }

    /// Compute a frame with the search bar fully settled in one state
    pub fn settled(
        variant: HeaderVariant,
        metrics: &HeaderMetrics,
        offset: f32,
        search_expanded: bool,
    ) -> Self {
        let blend = if search_expanded { 1.0 } else { 0.0 };
        Self::compute(variant, metrics, offset, blend)
    }
}

/// Top-anchored zoom of the banner while the content is pulled down
pub fn banner_scale(offset: f32, metrics: &HeaderMetrics) -> f32 {
    if offset > 0.0 {
        1.0 + offset / metrics.banner_zoom_divisor
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard(offset: f32, expanded: bool) -> HeaderVisuals {
        HeaderVisuals::settled(
            HeaderVariant::Standard,
            &HeaderMetrics::default(),
            offset,
            expanded,
        )
    }

    #[test]
    fn test_at_rest() {
        let v = standard(0.0, false);
        assert_eq!(v.progress.value(), 0.0);
        assert_eq!(v.search_row.opacity, 1.0);
        assert_eq!(v.features.padding_x, 0.0);
        assert_eq!(v.features.offset_y, 0.0);
        assert_eq!(v.features.label_opacity, 1.0);
        assert_eq!(v.collapsed_search_icon.opacity, 0.0);
    }

    #[test]
    fn test_half_collapsed() {
        let v = standard(-40.0, false);
        assert_eq!(v.progress.value(), -0.5);
        assert_eq!(v.search_row.opacity, 0.5);
        assert_eq!(v.features.padding_x, 25.0);
        assert_eq!(v.features.offset_y, -32.5);
        assert_eq!(v.features.icon_overlay_opacity, 0.5);
        assert_eq!(v.features.label_opacity, 0.5);
        assert_eq!(v.pin_offset_y, 40.0);
    }

    #[test]
    fn test_fully_collapsed() {
        let v = standard(-80.0, false);
        assert_eq!(v.progress.value(), -1.0);
        assert_eq!(v.search_row.opacity, 0.0);
        assert_eq!(v.features.padding_x, 50.0);
        assert_eq!(v.features.offset_y, -65.0);
        assert_eq!(v.features.icon_overlay_opacity, 1.0);
        assert_eq!(v.collapsed_search_icon.opacity, 1.0);
        assert_eq!(
            v.background,
            BackgroundVisuals::Gradient {
                bottom_inset: 85.0
            }
        );
    }

    #[test]
    fn test_no_overshoot_past_threshold() {
        assert_eq!(standard(-100.0, false), {
            let mut at_threshold = standard(-80.0, false);
            at_threshold.offset = -100.0;
            at_threshold.pin_offset_y = 100.0;
            at_threshold
        });
    }

    #[test]
    fn test_expanded_search_overrides() {
        let v = standard(-40.0, true);
        assert_eq!(v.search_row.opacity, 1.0);
        assert_eq!(v.search_row.avatar_opacity, 0.0);
        assert_eq!(v.search_row.dismiss_opacity, 1.0);
        assert_eq!(v.features.opacity, 0.0);
        assert_eq!(v.collapsed_search_icon.opacity, 0.0);
        // Scroll-driven properties ignore the search state
        assert_eq!(v.features.padding_x, 25.0);
    }

    #[test]
    fn test_blend_interpolates() {
        let v = HeaderVisuals::compute(
            HeaderVariant::Standard,
            &HeaderMetrics::default(),
            -40.0,
            0.5,
        );
        assert_eq!(v.search_row.opacity, 0.75);
        assert_eq!(v.search_row.avatar_opacity, 0.5);
        assert_eq!(v.features.opacity, 0.5);
    }

    #[test]
    fn test_momo_banner() {
        let metrics = HeaderMetrics::default();
        let pulled = HeaderVisuals::settled(HeaderVariant::Momo, &metrics, 50.0, false);
        match pulled.background {
            BackgroundVisuals::Banner {
                opacity,
                scale,
                anchor,
                backdrop_opacity,
                ..
            } => {
                assert_eq!(scale, 1.05);
                assert_eq!(anchor, Anchor::Top);
                assert_eq!(opacity, 1.0);
                assert_eq!(backdrop_opacity, 0.0);
            }
            other => panic!("unexpected background {:?}", other),
        }

        let collapsed = HeaderVisuals::settled(HeaderVariant::Momo, &metrics, -80.0, false);
        match collapsed.background {
            BackgroundVisuals::Banner {
                opacity,
                scale,
                backdrop_opacity,
                ..
            } => {
                assert_eq!(scale, 1.0);
                assert_eq!(opacity, 0.0);
                assert_eq!(backdrop_opacity, 1.0);
            }
            other => panic!("unexpected background {:?}", other),
        }
    }

    #[test]
    fn test_banner_scale() {
        let metrics = HeaderMetrics::default();
        assert_eq!(banner_scale(0.0, &metrics), 1.0);
        assert_eq!(banner_scale(-300.0, &metrics), 1.0);
        assert_eq!(banner_scale(100.0, &metrics), 1.1);
    }
}
