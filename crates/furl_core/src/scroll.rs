//! Scroll container with rubber-band overscroll
//!
//! The container owns the scrolled content's offset, declares its coordinate
//! space on every layout pass and publishes the content's measured top edge
//! through an [`OffsetReporter`].
//!
//! Offsets follow the measurement convention: `0` at rest, negative once the
//! content has moved up, positive while it is pulled down past the top edge.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::coordinate::CoordinateSpaces;
use crate::geometry::Rect;
use crate::reporter::{OffsetObserver, OffsetReporter, SubscriptionId};

/// Errors for scroll configurations that cannot be laid out
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScrollConfigError {
    #[error("`{field}` must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f32 },
    #[error("`{field}` must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },
}

/// Configuration for scroll behavior
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Viewport frame in window coordinates
    pub viewport: Rect,
    /// Height of the scrolled content
    pub content_height: f32,
    /// Allow rubber-band overscroll past either edge
    pub bounce_enabled: bool,
    /// Maximum overscroll distance as fraction of viewport height
    pub max_overscroll: f32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            viewport: Rect::new(0.0, 0.0, 390.0, 844.0),
            // Header plus ten 200pt cards
            content_height: 2400.0,
            bounce_enabled: true,
            max_overscroll: 0.3,
        }
    }
}

impl ScrollConfig {
    /// Create config with bounce disabled
    pub fn no_bounce() -> Self {
        Self {
            bounce_enabled: false,
            ..Default::default()
        }
    }

    /// Check that the bounds derived from this config are well ordered
    pub fn validate(&self) -> Result<(), ScrollConfigError> {
        let values = [
            ("viewport.x", self.viewport.x),
            ("viewport.y", self.viewport.y),
            ("viewport.width", self.viewport.width),
            ("viewport.height", self.viewport.height),
            ("content_height", self.content_height),
            ("max_overscroll", self.max_overscroll),
        ];
        for (field, value) in values {
            if !value.is_finite() {
                return Err(ScrollConfigError::NotFinite { field, value });
            }
        }
        for &(field, value) in &values[2..] {
            if value < 0.0 {
                return Err(ScrollConfigError::Negative { field, value });
            }
        }
        Ok(())
    }
}

/// A vertical scroll container publishing its content offset
#[derive(Debug)]
pub struct ScrollContainer {
    config: ScrollConfig,
    offset_y: f32,
    spaces: CoordinateSpaces,
    reporter: OffsetReporter,
}

impl ScrollContainer {
    /// Create a container that declares the coordinate space `space`
    pub fn new(space: impl Into<String>, config: ScrollConfig) -> Result<Self, ScrollConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            offset_y: 0.0,
            spaces: CoordinateSpaces::new(),
            reporter: OffsetReporter::new(space),
        })
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    pub fn offset_y(&self) -> f32 {
        self.offset_y
    }

    /// Offset at the top edge
    pub fn min_offset_y(&self) -> f32 {
        0.0
    }

    /// Offset with the content's bottom edge at the viewport's bottom edge
    pub fn max_offset_y(&self) -> f32 {
        -(self.config.content_height - self.config.viewport.height).max(0.0)
    }

    fn max_overscroll_distance(&self) -> f32 {
        self.config.viewport.height * self.config.max_overscroll
    }

    /// Signed distance past the nearest edge (positive above the top)
    pub fn overscroll_amount(&self) -> f32 {
        if self.offset_y > self.min_offset_y() {
            self.offset_y - self.min_offset_y()
        } else if self.offset_y < self.max_offset_y() {
            self.offset_y - self.max_offset_y()
        } else {
            0.0
        }
    }

    pub fn is_overscrolling(&self) -> bool {
        self.overscroll_amount() != 0.0
    }

    /// Apply a drag delta. Positive `delta_y` pulls the content down.
    pub fn scroll_by(&mut self, delta_y: f32) {
        let old_offset = self.offset_y;
        let overscroll = self.overscroll_amount();
        let pushing_further = (overscroll > 0.0 && delta_y > 0.0) || (overscroll < 0.0 && delta_y < 0.0);

        if self.config.bounce_enabled && pushing_further {
            // Resistance grows as the band stretches: 55% down to 10%
            let max_over = self.max_overscroll_distance();
            let stretch_ratio = if max_over > 0.0 {
                (overscroll.abs() / max_over).min(1.0)
            } else {
                1.0
            };
            let resistance = 0.55 - stretch_ratio * 0.45;
            self.offset_y += delta_y * resistance;
        } else {
            self.offset_y += delta_y;
        }

        self.clamp();
        tracing::trace!(
            "scroll delta_y={:.1} offset: {:.1} -> {:.1}, bounds=({:.0}, {:.0})",
            delta_y,
            old_offset,
            self.offset_y,
            self.max_offset_y(),
            self.min_offset_y()
        );
    }

    /// Jump to an absolute offset, clamped like a drag
    pub fn scroll_to(&mut self, offset_y: f32) {
        self.offset_y = offset_y;
        self.clamp();
    }

    /// End of gesture: snap any overscroll back inside the bounds
    pub fn settle(&mut self) {
        self.offset_y = self
            .offset_y
            .clamp(self.max_offset_y(), self.min_offset_y());
    }

    fn clamp(&mut self) {
        if self.config.bounce_enabled {
            let max_over = self.max_overscroll_distance();
            self.offset_y = self
                .offset_y
                .clamp(self.max_offset_y() - max_over, self.min_offset_y() + max_over);
        } else {
            self.settle();
        }
    }

    /// Frame of the scrolled content in window coordinates
    pub fn content_frame(&self) -> Rect {
        let viewport = self.config.viewport;
        Rect::new(
            viewport.x,
            viewport.y + self.offset_y,
            viewport.width,
            self.config.content_height,
        )
    }

    /// Run a layout pass: declare the coordinate space, measure the content
    /// and publish the offset. Returns the delivered offset, if any.
    pub fn layout(&mut self) -> Option<f32> {
        if let Err(err) = self
            .spaces
            .declare(self.reporter.space(), self.config.viewport)
        {
            tracing::warn!("scroll container has no usable coordinate space: {}", err);
        }
        let frame = self.content_frame();
        self.reporter.report(&self.spaces, frame)
    }

    pub fn subscribe(&mut self, observer: impl OffsetObserver + 'static) -> SubscriptionId {
        self.reporter.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.reporter.unsubscribe(id)
    }

    pub fn reporter(&self) -> &OffsetReporter {
        &self.reporter
    }
}
