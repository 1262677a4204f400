//! `dukaan-app`: the storefront composed over one shared backend.
//!
//! [`App`] wires the stores and the credential verifier together and exposes
//! the entry points screens call: launch routing, login/logout, the
//! dashboard, live search, and item management. Screens re-fetch through the
//! facade instead of keeping their own copies of state.

pub mod app;
pub mod content;

pub use app::{App, AppError, AppResult, Dashboard, LaunchTarget};
pub use content::{ABOUT_PAGE, AboutPage, ContactLink, ONBOARDING_PAGES, OnboardingPage};
