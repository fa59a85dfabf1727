//! Named coordinate spaces
//!
//! A scroll container declares a coordinate space under a name. Any view laid
//! out inside it can then measure its own frame relative to that space, which
//! is how the offset reporter turns a global layout frame into a scroll offset.
//!
//! Frames are stored in window coordinates and re-declared on every layout
//! pass, so a declaration with an existing name replaces the old frame.

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::geometry::Rect;

/// Errors raised by the coordinate-space registry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordinateSpaceError {
    /// Coordinate spaces must be addressable by a non-empty name
    #[error("coordinate space name must not be empty")]
    EmptyName,
    /// No ancestor declared a space with this name
    #[error("unknown coordinate space `{0}`")]
    Unknown(String),
}

/// Registry of the coordinate spaces declared during the current layout pass
#[derive(Debug, Default)]
pub struct CoordinateSpaces {
    spaces: FxHashMap<String, Rect>,
}

impl CoordinateSpaces {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare (or re-declare) a named space whose frame is `frame` in window coordinates
    pub fn declare(&mut self, name: &str, frame: Rect) -> Result<(), CoordinateSpaceError> {
        if name.is_empty() {
            return Err(CoordinateSpaceError::EmptyName);
        }
        if let Some(existing) = self.spaces.get_mut(name) {
            *existing = frame;
        } else {
            tracing::debug!(space = name, "declared coordinate space");
            self.spaces.insert(name.to_owned(), frame);
        }
        Ok(())
    }

    /// Remove a space, returning its last frame
    pub fn remove(&mut self, name: &str) -> Option<Rect> {
        self.spaces.remove(name)
    }

    /// Frame of the named space in window coordinates
    pub fn origin(&self, name: &str) -> Option<Rect> {
        self.spaces.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.spaces.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }

    /// Convert a window-space frame into the named space
    pub fn frame_in(&self, name: &str, frame: Rect) -> Result<Rect, CoordinateSpaceError> {
        let origin = self
            .spaces
            .get(name)
            .ok_or_else(|| CoordinateSpaceError::Unknown(name.to_owned()))?;
        Ok(frame.translate(-origin.x, -origin.y))
    }

    /// Top edge of `frame` measured in the named space
    pub fn offset_in(&self, name: &str, frame: Rect) -> Result<f32, CoordinateSpaceError> {
        self.frame_in(name, frame).map(|local| local.min_y())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_relative_to_space() {
        let mut spaces = CoordinateSpaces::new();
        spaces
            .declare("SCROLL", Rect::new(0.0, 44.0, 390.0, 800.0))
            .unwrap();

        let content = Rect::new(0.0, 4.0, 390.0, 2400.0);
        assert_eq!(spaces.offset_in("SCROLL", content), Ok(-40.0));
    }

    #[test]
    fn test_redeclare_replaces_frame() {
        let mut spaces = CoordinateSpaces::new();
        spaces.declare("SCROLL", Rect::new(0.0, 0.0, 10.0, 10.0)).unwrap();
        spaces.declare("SCROLL", Rect::new(0.0, 20.0, 10.0, 10.0)).unwrap();

        assert_eq!(spaces.len(), 1);
        assert_eq!(spaces.origin("SCROLL").map(|r| r.y), Some(20.0));
    }

    #[test]
    fn test_removed_space_is_unknown() {
        let mut spaces = CoordinateSpaces::new();
        let frame = Rect::new(0.0, 44.0, 390.0, 800.0);
        spaces.declare("SCROLL", frame).unwrap();

        assert_eq!(spaces.remove("SCROLL"), Some(frame));
        assert_eq!(spaces.remove("SCROLL"), None);
        assert!(!spaces.contains("SCROLL"));
        assert!(spaces.offset_in("SCROLL", Rect::ZERO).is_err());
    }

    #[test]
    fn test_unknown_space() {
        let spaces = CoordinateSpaces::new();
        assert_eq!(
            spaces.offset_in("MISSING", Rect::ZERO),
            Err(CoordinateSpaceError::Unknown("MISSING".into()))
        );
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut spaces = CoordinateSpaces::new();
        assert_eq!(
            spaces.declare("", Rect::ZERO),
            Err(CoordinateSpaceError::EmptyName)
        );
        assert!(spaces.is_empty());
    }
}
