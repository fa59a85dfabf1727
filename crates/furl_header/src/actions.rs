//! Header tap actions
//!
//! Search and dismiss taps drive the search-bar state machine inside the
//! controller. Everything else (avatar, feature buttons) is routed to an
//! [`ActionHandler`] supplied by the host; the default one only logs.

use serde::{Deserialize, Serialize};

/// Actions behind the feature-button row
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeatureAction {
    Deposit,
    Withdraw,
    QrCode,
    Scanning,
    Cards,
}

/// Every tappable control in a header
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeaderAction {
    /// Search icon shown while collapsed
    OpenSearch,
    /// The "×" button shown while the search bar is expanded
    DismissSearch,
    Avatar,
    Feature(FeatureAction),
}

/// Receiver for actions the header does not handle itself
pub trait ActionHandler {
    fn avatar_tapped(&mut self);
    fn feature_tapped(&mut self, action: FeatureAction);
}

/// Default handler: records the tap in the log and does nothing else
#[derive(Debug, Default, Clone, Copy)]
pub struct LogActions;

impl ActionHandler for LogActions {
    fn avatar_tapped(&mut self) {
        tracing::info!("avatar tapped");
    }

    fn feature_tapped(&mut self, action: FeatureAction) {
        tracing::info!(?action, "feature tapped");
    }
}
