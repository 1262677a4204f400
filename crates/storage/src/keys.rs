//! Fixed storage keys.
//!
//! These values are stable: they identify data already persisted on devices
//! and must not change. All keys live in one flat namespace, unversioned.

/// The inventory collection blob (one JSON array of items).
pub const ITEMS: &str = "store_items";

/// Logged-in marker; holds `"true"` while a session is active.
pub const SESSION: &str = "user_logged_in";

/// Store display name.
pub const STORE_NAME: &str = "store_name";

/// Store logo image URI.
pub const STORE_LOGO: &str = "store_logo";

/// Store tagline.
pub const STORE_TAGLINE: &str = "store_tagline";

/// Dashboard title color (hex string, e.g. `#6C63FF`).
pub const TITLE_COLOR: &str = "title_color";

/// Dashboard title size (points rendered as a string, e.g. `"22"`).
pub const TITLE_SIZE: &str = "title_size";
