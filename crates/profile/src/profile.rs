use serde::{Deserialize, Serialize};

/// Store name used until the owner picks their own.
pub const DEFAULT_STORE_NAME: &str = "Hafiz Store";

/// Tagline used until the owner picks their own.
pub const DEFAULT_TAGLINE: &str = "Your trusted store";

// ─────────────────────────────────────────────────────────────────────────────
// Title color
// ─────────────────────────────────────────────────────────────────────────────

/// Title color choices offered by the settings screen.
///
/// Persisted as the hex value, which is also what renderers consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TitleColor {
    #[default]
    Black,
    Blue,
    Purple,
    Green,
    Red,
}

impl TitleColor {
    pub const ALL: [TitleColor; 5] = [
        TitleColor::Black,
        TitleColor::Blue,
        TitleColor::Purple,
        TitleColor::Green,
        TitleColor::Red,
    ];

    /// Human-facing label.
    pub fn label(self) -> &'static str {
        match self {
            TitleColor::Black => "Black",
            TitleColor::Blue => "Blue",
            TitleColor::Purple => "Purple",
            TitleColor::Green => "Green",
            TitleColor::Red => "Red",
        }
    }

    /// Hex value persisted to storage.
    pub fn as_hex(self) -> &'static str {
        match self {
            TitleColor::Black => "#000000",
            TitleColor::Blue => "#003366",
            TitleColor::Purple => "#6C63FF",
            TitleColor::Green => "#00B894",
            TitleColor::Red => "#FF7675",
        }
    }

    /// Parse a persisted hex value (case-insensitive).
    pub fn from_hex(hex: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|color| color.as_hex().eq_ignore_ascii_case(hex.trim()))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Title size
// ─────────────────────────────────────────────────────────────────────────────

/// Title size choices offered by the settings screen.
///
/// Persisted as the point number rendered as a string ("22").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TitleSize {
    Small,
    #[default]
    Medium,
    Large,
    ExtraLarge,
}

impl TitleSize {
    pub const ALL: [TitleSize; 4] = [
        TitleSize::Small,
        TitleSize::Medium,
        TitleSize::Large,
        TitleSize::ExtraLarge,
    ];

    /// Human-facing label.
    pub fn label(self) -> &'static str {
        match self {
            TitleSize::Small => "Small",
            TitleSize::Medium => "Medium",
            TitleSize::Large => "Large",
            TitleSize::ExtraLarge => "Extra Large",
        }
    }

    /// Font size in points.
    pub fn points(self) -> u16 {
        match self {
            TitleSize::Small => 18,
            TitleSize::Medium => 22,
            TitleSize::Large => 26,
            TitleSize::ExtraLarge => 30,
        }
    }

    pub fn from_points(points: u16) -> Option<Self> {
        Self::ALL.iter().copied().find(|size| size.points() == points)
    }

    /// Parse a persisted point value ("22").
    pub fn from_points_str(raw: &str) -> Option<Self> {
        raw.trim().parse::<u16>().ok().and_then(Self::from_points)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Store profile
// ─────────────────────────────────────────────────────────────────────────────

/// Display settings for the storefront header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreProfile {
    pub name: String,
    pub tagline: String,
    /// Image URI chosen by the owner; absent until one is picked.
    pub logo: Option<String>,
    pub title_color: TitleColor,
    pub title_size: TitleSize,
}

impl Default for StoreProfile {
    fn default() -> Self {
        Self {
            name: DEFAULT_STORE_NAME.to_string(),
            tagline: DEFAULT_TAGLINE.to_string(),
            logo: None,
            title_color: TitleColor::default(),
            title_size: TitleSize::default(),
        }
    }
}
