//! The two header designs
//!
//! Both variants share the collapse behaviour and differ in content and
//! background treatment: `Standard` paints a gradient that extends as it
//! collapses, `Momo` shows a banner image over a solid backdrop.

use serde::{Deserialize, Serialize};

use crate::actions::FeatureAction;

/// One entry of the feature-button row
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FeatureButton {
    /// SF Symbols-style icon name
    pub symbol: &'static str,
    pub title: &'static str,
    pub action: FeatureAction,
}

const STANDARD_FEATURES: [FeatureButton; 4] = [
    FeatureButton {
        symbol: "rectangle.portrait.and.arrow.forward",
        title: "Deposit",
        action: FeatureAction::Deposit,
    },
    FeatureButton {
        symbol: "dollarsign",
        title: "Withdraw",
        action: FeatureAction::Withdraw,
    },
    FeatureButton {
        symbol: "qrcode",
        title: "QR Code",
        action: FeatureAction::QrCode,
    },
    FeatureButton {
        symbol: "qrcode.viewfinder",
        title: "Scanning",
        action: FeatureAction::Scanning,
    },
];

const MOMO_FEATURES: [FeatureButton; 4] = [
    FeatureButton {
        symbol: "rectangle.portrait.and.arrow.forward",
        title: "Deposit",
        action: FeatureAction::Deposit,
    },
    FeatureButton {
        symbol: "dollarsign.arrow.circlepath",
        title: "Withdraw",
        action: FeatureAction::Withdraw,
    },
    FeatureButton {
        symbol: "qrcode.viewfinder",
        title: "QR Code",
        action: FeatureAction::QrCode,
    },
    FeatureButton {
        symbol: "creditcard",
        title: "Your cards",
        action: FeatureAction::Cards,
    },
];

/// Header design
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeaderVariant {
    /// Generic "Header 1" design
    #[default]
    #[serde(alias = "header-1")]
    Standard,
    /// Wallet-branded design with a banner image
    Momo,
}

impl HeaderVariant {
    pub const ALL: [HeaderVariant; 2] = [HeaderVariant::Standard, HeaderVariant::Momo];

    pub fn name(self) -> &'static str {
        match self {
            HeaderVariant::Standard => "standard",
            HeaderVariant::Momo => "momo",
        }
    }

    pub fn search_placeholder(self) -> &'static str {
        match self {
            HeaderVariant::Standard => "Search",
            HeaderVariant::Momo => "Search doges...",
        }
    }

    /// Opacity of the dark pill behind the search field
    pub fn search_field_backdrop(self) -> f32 {
        match self {
            HeaderVariant::Standard => 0.15,
            HeaderVariant::Momo => 0.5,
        }
    }

    pub fn avatar_image(self) -> &'static str {
        "doge"
    }

    /// Image painted behind the header, if any
    pub fn banner_image(self) -> Option<&'static str> {
        match self {
            HeaderVariant::Standard => None,
            HeaderVariant::Momo => Some("doge"),
        }
    }

    pub fn feature_buttons(self) -> &'static [FeatureButton] {
        match self {
            HeaderVariant::Standard => &STANDARD_FEATURES,
            HeaderVariant::Momo => &MOMO_FEATURES,
        }
    }
}

impl std::str::FromStr for HeaderVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "standard" | "header-1" | "header1" => Ok(HeaderVariant::Standard),
            "momo" => Ok(HeaderVariant::Momo),
            other => Err(format!("unknown header variant `{}`", other)),
        }
    }
}

impl std::fmt::Display for HeaderVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
