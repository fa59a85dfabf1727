//! Header view tree
//!
//! A renderer-agnostic description of one header frame. Each node carries the
//! visual properties computed for it; laying out, drawing and interpolating
//! between frames is left to the host.

use serde::Serialize;
use smallvec::SmallVec;

use crate::actions::HeaderAction;
use crate::variant::HeaderVariant;
use crate::visuals::{Anchor, BackgroundVisuals, HeaderVisuals};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    Header,
    GradientBackground,
    Backdrop,
    Banner,
    Content,
    SearchRow,
    SearchField,
    Avatar,
    DismissButton,
    FeatureRow,
    FeatureButton,
    FeatureLabel,
    FeatureIconOverlay,
    CollapsedSearchIcon,
}

/// Visual properties of a node; unset fields keep their neutral value
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct NodeStyle {
    pub opacity: f32,
    pub offset_x: f32,
    pub offset_y: f32,
    pub padding_x: f32,
    pub padding_top: f32,
    pub padding_bottom: f32,
    pub scale: f32,
    pub anchor: Anchor,
}

impl Default for NodeStyle {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
            padding_x: 0.0,
            padding_top: 0.0,
            padding_bottom: 0.0,
            scale: 1.0,
            anchor: Anchor::Center,
        }
    }
}

impl NodeStyle {
    fn opacity(opacity: f32) -> Self {
        Self {
            opacity,
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ViewNode {
    pub kind: NodeKind,
    /// Text, placeholder, symbol or image name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub style: NodeStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<HeaderAction>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ViewNode>,
}

impl ViewNode {
    fn new(kind: NodeKind, style: NodeStyle) -> Self {
        Self {
            kind,
            label: None,
            style,
            action: None,
            children: Vec::new(),
        }
    }

    fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    fn action(mut self, action: HeaderAction) -> Self {
        self.action = Some(action);
        self
    }

    fn child(mut self, child: ViewNode) -> Self {
        self.children.push(child);
        self
    }

    /// Depth-first search for the first node of `kind`
    pub fn find(&self, kind: NodeKind) -> Option<&ViewNode> {
        if self.kind == kind {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(kind))
    }

    /// All nodes of `kind`, in document order
    pub fn find_all(&self, kind: NodeKind) -> SmallVec<[&ViewNode; 4]> {
        let mut found = SmallVec::new();
        self.collect(kind, &mut found);
        found
    }

    fn collect<'a>(&'a self, kind: NodeKind, found: &mut SmallVec<[&'a ViewNode; 4]>) {
        if self.kind == kind {
            found.push(self);
        }
        for child in &self.children {
            child.collect(kind, found);
        }
    }

    /// Nodes that respond to taps
    pub fn actions(&self) -> Vec<HeaderAction> {
        let mut actions = Vec::new();
        self.visit(&mut |node| actions.extend(node.action));
        actions
    }

    fn visit(&self, f: &mut impl FnMut(&ViewNode)) {
        f(self);
        for child in &self.children {
            child.visit(f);
        }
    }

    /// Indented one-line-per-node dump, for logs and the CLI
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        self.write_text(0, &mut out);
        out
    }

    fn write_text(&self, depth: usize, out: &mut String) {
        let s = &self.style;
        out.push_str(&format!("{:indent$}{:?}", "", self.kind, indent = depth * 2));
        if let Some(label) = &self.label {
            out.push_str(&format!(" \"{}\"", label));
        }
        out.push_str(&format!(" opacity={:.3}", s.opacity));
        if s.offset_x != 0.0 || s.offset_y != 0.0 {
            out.push_str(&format!(" offset=({:.1}, {:.1})", s.offset_x, s.offset_y));
        }
        if s.padding_x != 0.0 {
            out.push_str(&format!(" padding_x={:.1}", s.padding_x));
        }
        if s.padding_top != 0.0 {
            out.push_str(&format!(" padding_top={:.1}", s.padding_top));
        }
        if s.padding_bottom != 0.0 {
            out.push_str(&format!(" padding_bottom={:.1}", s.padding_bottom));
        }
        if s.scale != 1.0 {
            out.push_str(&format!(" scale={:.3} anchor={:?}", s.scale, s.anchor));
        }
        out.push('\n');
        for child in &self.children {
            child.write_text(depth + 1, out);
        }
    }
}

/// Build the view tree of one frame
pub fn build(variant: HeaderVariant, visuals: &HeaderVisuals) -> ViewNode {
    let mut header = ViewNode::new(
        NodeKind::Header,
        NodeStyle {
            offset_y: visuals.pin_offset_y,
            ..Default::default()
        },
    );

    match visuals.background {
        BackgroundVisuals::Gradient { bottom_inset } => {
            header = header.child(ViewNode::new(
                NodeKind::GradientBackground,
                NodeStyle {
                    padding_bottom: bottom_inset,
                    ..Default::default()
                },
            ));
        }
        BackgroundVisuals::Banner {
            opacity,
            scale,
            anchor,
            backdrop_opacity,
            backdrop_bottom_padding,
            ..
        } => {
            header = header
                .child(ViewNode::new(
                    NodeKind::Backdrop,
                    NodeStyle {
                        opacity: backdrop_opacity,
                        padding_bottom: backdrop_bottom_padding,
                        ..Default::default()
                    },
                ))
                .child(
                    ViewNode::new(
                        NodeKind::Banner,
                        NodeStyle {
                            opacity,
                            scale,
                            anchor,
                            ..Default::default()
                        },
                    )
                    .label(variant.banner_image().unwrap_or_default()),
                );
        }
    }

    let row = &visuals.search_row;
    let mut search_row = ViewNode::new(NodeKind::SearchRow, NodeStyle::default())
        .child(
            ViewNode::new(NodeKind::SearchField, NodeStyle::opacity(row.opacity))
                .label(variant.search_placeholder()),
        )
        .child(
            ViewNode::new(NodeKind::Avatar, NodeStyle::opacity(row.avatar_opacity))
                .label(variant.avatar_image())
                .action(HeaderAction::Avatar),
        );
    if row.dismiss_opacity > 0.0 {
        search_row = search_row.child(
            ViewNode::new(NodeKind::DismissButton, NodeStyle::opacity(row.dismiss_opacity))
                .label("xmark")
                .action(HeaderAction::DismissSearch),
        );
    }

    let f = &visuals.features;
    let mut feature_row = ViewNode::new(
        NodeKind::FeatureRow,
        NodeStyle {
            opacity: f.opacity,
            offset_y: f.offset_y,
            padding_x: f.padding_x,
            padding_top: f.padding_top,
            ..Default::default()
        },
    );
    for button in variant.feature_buttons() {
        feature_row = feature_row.child(
            ViewNode::new(NodeKind::FeatureButton, NodeStyle::default())
                .action(HeaderAction::Feature(button.action))
                .child(
                    ViewNode::new(NodeKind::FeatureLabel, NodeStyle::opacity(f.label_opacity))
                        .label(button.title),
                )
                .child(
                    ViewNode::new(
                        NodeKind::FeatureIconOverlay,
                        NodeStyle {
                            opacity: f.icon_overlay_opacity,
                            offset_y: f.icon_overlay_offset_y,
                            ..Default::default()
                        },
                    )
                    .label(button.symbol),
                ),
        );
    }

    let icon = &visuals.collapsed_search_icon;
    header
        .child(
            ViewNode::new(NodeKind::Content, NodeStyle::default())
                .child(search_row)
                .child(feature_row),
        )
        .child(
            ViewNode::new(
                NodeKind::CollapsedSearchIcon,
                NodeStyle {
                    opacity: icon.opacity,
                    offset_x: icon.offset_x,
                    offset_y: icon.offset_y,
                    ..Default::default()
                },
            )
            .label("magnifyingglass")
            .action(HeaderAction::OpenSearch),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::FeatureAction;
    use crate::metrics::HeaderMetrics;

    fn tree(variant: HeaderVariant, offset: f32, expanded: bool) -> ViewNode {
        let visuals = HeaderVisuals::settled(variant, &HeaderMetrics::default(), offset, expanded);
        build(variant, &visuals)
    }

    #[test]
    fn test_standard_structure() {
        let root = tree(HeaderVariant::Standard, -40.0, false);
        assert_eq!(root.kind, NodeKind::Header);
        assert_eq!(root.style.offset_y, 40.0);
        assert!(root.find(NodeKind::GradientBackground).is_some());
        assert!(root.find(NodeKind::Banner).is_none());
        assert!(root.find(NodeKind::DismissButton).is_none());
        assert_eq!(root.find_all(NodeKind::FeatureButton).len(), 4);

        let row = root.find(NodeKind::FeatureRow).unwrap();
        assert_eq!(row.style.padding_x, 25.0);
        assert_eq!(row.style.offset_y, -32.5);
    }

    #[test]
    fn test_gradient_retracts_from_bottom() {
        let root = tree(HeaderVariant::Standard, -80.0, false);
        let background = root.find(NodeKind::GradientBackground).unwrap();
        assert_eq!(background.style.padding_bottom, 85.0);
    }

    #[test]
    fn test_momo_structure() {
        let root = tree(HeaderVariant::Momo, 20.0, false);
        let banner = root.find(NodeKind::Banner).unwrap();
        assert_eq!(banner.label.as_deref(), Some("doge"));
        assert_eq!(banner.style.anchor, Anchor::Top);
        assert!(banner.style.scale > 1.0);

        let labels: Vec<_> = root
            .find_all(NodeKind::FeatureLabel)
            .iter()
            .filter_map(|n| n.label.clone())
            .collect();
        assert_eq!(labels, ["Deposit", "Withdraw", "QR Code", "Your cards"]);
    }

    #[test]
    fn test_dismiss_button_only_when_expanded() {
        let root = tree(HeaderVariant::Standard, 0.0, true);
        let dismiss = root.find(NodeKind::DismissButton).unwrap();
        assert_eq!(dismiss.action, Some(HeaderAction::DismissSearch));
        assert_eq!(root.find(NodeKind::Avatar).unwrap().style.opacity, 0.0);
    }

    #[test]
    fn test_actions_in_document_order() {
        let root = tree(HeaderVariant::Standard, 0.0, false);
        assert_eq!(
            root.actions(),
            vec![
                HeaderAction::Avatar,
                HeaderAction::Feature(FeatureAction::Deposit),
                HeaderAction::Feature(FeatureAction::Withdraw),
                HeaderAction::Feature(FeatureAction::QrCode),
                HeaderAction::Feature(FeatureAction::Scanning),
                HeaderAction::OpenSearch,
            ]
        );
    }

    #[test]
    fn test_text_dump() {
        let text = tree(HeaderVariant::Momo, 0.0, false).to_text();
        assert!(text.starts_with("Header opacity=1.000"));
        assert!(text.contains("  Banner \"doge\" opacity=1.000"));
        assert!(text.contains("SearchField \"Search doges...\""));

        let scrolled = tree(HeaderVariant::Standard, -40.0, false).to_text();
        let mut lines = scrolled.lines();
        assert_eq!(lines.next(), Some("Header opacity=1.000 offset=(0.0, 40.0)"));
        assert_eq!(
            lines.next(),
            Some("  GradientBackground opacity=1.000 padding_bottom=42.5")
        );
    }
}
