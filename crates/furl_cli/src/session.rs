//! Simulated scroll session
//!
//! Mounts one header over a scroll container, walks the content offset from
//! `from` to `to` one frame at a time and records what the host would draw.

use anyhow::Result;
use furl_core::scroll::ScrollContainer;
use furl_header::tree::ViewNode;
use furl_header::{HeaderController, HeaderVisuals, SearchState};
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;

use crate::config::{FurlConfig, SessionConfig};

/// Coordinate space declared by the simulated scroll view
pub const SCROLL_SPACE: &str = "SCROLL";

/// One rendered frame
#[derive(Debug, Clone, Serialize)]
pub struct Frame {
    pub index: usize,
    pub offset: f32,
    pub search: SearchState,
    pub visuals: HeaderVisuals,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tree: Option<ViewNode>,
}

pub struct Session {
    scroll: ScrollContainer,
    header: Rc<RefCell<HeaderController>>,
    plan: SessionConfig,
    with_tree: bool,
}

impl Session {
    pub fn new(config: &FurlConfig) -> Result<Self> {
        config.validate()?;
        let header = HeaderController::new(config.header.variant, config.metrics)?
            .with_dismiss_policy(config.header.dismiss_policy);
        let header = Rc::new(RefCell::new(header));

        let mut scroll = ScrollContainer::new(SCROLL_SPACE, config.scroll)?;
        scroll.subscribe(HeaderController::observer(&header));

        tracing::info!(
            variant = %config.header.variant,
            policy = ?config.header.dismiss_policy,
            "mounted header"
        );

        Ok(Self {
            scroll,
            header,
            plan: config.session.clone(),
            with_tree: false,
        })
    }

    /// Attach the full view tree to every frame
    pub fn with_tree(mut self, with_tree: bool) -> Self {
        self.with_tree = with_tree;
        self
    }

    /// Offsets visited, `from` and `to` included
    pub fn offsets(&self) -> Vec<f32> {
        let SessionConfig { from, to, .. } = self.plan;
        let step = self.plan.signed_step();
        // Bounded by MAX_FRAMES through validation in `new`
        let count = self.plan.step_count() as usize;

        let mut offsets: Vec<f32> = (0..=count).map(|i| from + step * i as f32).collect();
        if offsets.last() != Some(&to) {
            offsets.push(to);
        }
        offsets
    }

    /// Run the gesture, then let any running search transition finish
    pub fn run(mut self) -> Vec<Frame> {
        let offsets = self.offsets();
        let mut frames = Vec::with_capacity(offsets.len());
        let mut search_tapped = false;

        for offset in offsets {
            self.scroll.scroll_to(offset);
            self.scroll.layout();

            if let Some(at) = self.plan.search_at {
                if !search_tapped && reached(self.plan.from, offset, at) {
                    search_tapped = true;
                    let opened = self.header.borrow_mut().tap_search();
                    tracing::info!(offset, opened, "tapped search");
                }
            }

            self.header.borrow_mut().tick(self.plan.frame_ms);
            frames.push(self.frame(frames.len()));
        }

        while self.header.borrow().is_animating() {
            self.header.borrow_mut().tick(self.plan.frame_ms);
            frames.push(self.frame(frames.len()));
        }

        frames
    }

    fn frame(&self, index: usize) -> Frame {
        let header = self.header.borrow();
        Frame {
            index,
            offset: header.scroll_offset(),
            search: header.search_state(),
            visuals: header.visuals(),
            tree: self.with_tree.then(|| header.view_tree()),
        }
    }
}

/// Whether walking from `from` has arrived at `at`
fn reached(from: f32, offset: f32, at: f32) -> bool {
    if at <= from {
        offset <= at
    } else {
        offset >= at
    }
}

impl Frame {
    /// One summary line, followed by the view tree if attached
    pub fn to_text(&self) -> String {
        let v = &self.visuals;
        let mut out = format!(
            "frame {:>3} offset={:>7.1} progress={:>6.3} search={:?} blend={:.3} row={:.3} features=(pad {:.1}, y {:.1})\n",
            self.index,
            self.offset,
            v.progress.value(),
            self.search,
            v.search_blend,
            v.search_row.opacity,
            v.features.padding_x,
            v.features.offset_y,
        );
        if let Some(tree) = &self.tree {
            out.push_str(&tree.to_text());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(session: SessionConfig) -> FurlConfig {
        FurlConfig {
            session,
            ..Default::default()
        }
    }

    #[test]
    fn test_offsets_include_endpoints() {
        let session = Session::new(&config(SessionConfig {
            from: 0.0,
            to: -25.0,
            step: 10.0,
            ..Default::default()
        }))
        .unwrap();
        assert_eq!(session.offsets(), vec![0.0, -10.0, -20.0, -25.0]);
    }

    #[test]
    fn test_offsets_walk_down() {
        let session = Session::new(&config(SessionConfig {
            from: -40.0,
            to: 0.0,
            step: -20.0,
            ..Default::default()
        }))
        .unwrap();
        assert_eq!(session.offsets(), vec![-40.0, -20.0, 0.0]);
    }

    #[test]
    fn test_unusable_config_rejected() {
        let mut bouncy = FurlConfig::default();
        bouncy.scroll.max_overscroll = f32::NAN;
        assert!(Session::new(&bouncy).is_err());

        let endless = config(SessionConfig {
            to: f32::INFINITY,
            ..Default::default()
        });
        assert!(Session::new(&endless).is_err());
    }

    #[test]
    fn test_default_run_collapses() {
        let frames = Session::new(&FurlConfig::default()).unwrap().run();
        assert_eq!(frames.len(), 13);
        assert_eq!(frames[0].visuals.progress.value(), 0.0);
        assert_eq!(frames[4].visuals.progress.value(), -0.5);
        assert_eq!(frames[12].offset, -120.0);
        assert_eq!(frames[12].visuals.progress.value(), -1.0);
        assert!(frames.iter().all(|f| f.tree.is_none()));
    }

    #[test]
    fn test_search_tap_closes_past_threshold() {
        let frames = Session::new(&config(SessionConfig {
            search_at: Some(-20.0),
            ..Default::default()
        }))
        .unwrap()
        .run();

        let opened = frames.iter().find(|f| f.offset == -20.0).unwrap();
        assert_eq!(opened.search, SearchState::Expanded);
        let closed = frames.iter().find(|f| f.offset == -90.0).unwrap();
        assert_eq!(closed.search, SearchState::Collapsed);

        // Trailing frames finish the close transition
        let last = frames.last().unwrap();
        assert_eq!(last.visuals.search_blend, 0.0);
    }

    #[test]
    fn test_frames_carry_tree() {
        let frames = Session::new(&FurlConfig::default())
            .unwrap()
            .with_tree(true)
            .run();
        let text = frames[0].to_text();
        assert!(text.starts_with("frame   0 offset=    0.0"));
        assert!(text.contains("SearchField \"Search\""));
    }
}
