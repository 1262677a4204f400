//! Store profile domain: the display settings shown on the dashboard header.
//!
//! Pure types only; persistence of the profile lives in `dukaan-storage`.

pub mod profile;

pub use profile::{
    DEFAULT_STORE_NAME, DEFAULT_TAGLINE, StoreProfile, TitleColor, TitleSize,
};
