use std::sync::Arc;

use thiserror::Error;

use dukaan_auth::{AuthError, CredentialVerifier, Credentials, StaticCredentials};
use dukaan_core::DomainError;
use dukaan_inventory::catalog;
use dukaan_inventory::{Item, ItemDraft, ItemId};
use dukaan_profile::StoreProfile;
use dukaan_storage::{InventoryStore, KeyValueStore, ProfileStore, SessionStore, StoreError};

use crate::content::{ABOUT_PAGE, AboutPage, ONBOARDING_PAGES, OnboardingPage};

/// App-level error: a store failure or a failed credential check.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type used by the facade.
pub type AppResult<T> = Result<T, AppError>;

/// Where to land when the app starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchTarget {
    /// No active session: onboarding carousel, then the login gate.
    Onboarding,
    /// Active session: straight to the dashboard.
    Dashboard,
}

/// Everything the dashboard renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    pub profile: StoreProfile,
    pub items: Vec<Item>,
}

/// The storefront facade: one shared backend, one store per concern.
///
/// Generic over the key-value backend `S` and the credential verifier `V`,
/// which defaults to the built-in owner account.
pub struct App<S, V = StaticCredentials> {
    inventory: InventoryStore<Arc<S>>,
    profile: ProfileStore<Arc<S>>,
    session: SessionStore<Arc<S>>,
    verifier: V,
}

impl<S: KeyValueStore> App<S> {
    /// Wire the stores over `kv` with the built-in owner account.
    pub fn new(kv: S) -> Self {
        Self::with_verifier(kv, StaticCredentials::default())
    }
}

impl<S: KeyValueStore, V: CredentialVerifier> App<S, V> {
    /// Wire the stores over `kv` with a custom credential verifier.
    pub fn with_verifier(kv: S, verifier: V) -> Self {
        let kv = Arc::new(kv);
        Self {
            inventory: InventoryStore::new(Arc::clone(&kv)),
            profile: ProfileStore::new(Arc::clone(&kv)),
            session: SessionStore::new(kv),
            verifier,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Launch & session
    // ─────────────────────────────────────────────────────────────────────

    /// Decide the first screen from the persisted session flag.
    pub async fn launch_target(&self) -> AppResult<LaunchTarget> {
        Ok(if self.session.is_logged_in().await? {
            LaunchTarget::Dashboard
        } else {
            LaunchTarget::Onboarding
        })
    }

    /// Verify `credentials` and persist the session on success.
    pub async fn log_in(&self, credentials: &Credentials) -> AppResult<()> {
        self.verifier.authorize(credentials)?;
        self.session.log_in().await?;

        tracing::info!(username = %credentials.username, "login succeeded");
        Ok(())
    }

    /// Clear the session.
    pub async fn log_out(&self) -> AppResult<()> {
        self.session.log_out().await?;

        tracing::info!("logged out");
        Ok(())
    }

    pub async fn is_logged_in(&self) -> AppResult<bool> {
        Ok(self.session.is_logged_in().await?)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Dashboard
    // ─────────────────────────────────────────────────────────────────────

    /// Load the dashboard: profile header plus the full (seeded) inventory.
    pub async fn dashboard(&self) -> AppResult<Dashboard> {
        Ok(Dashboard {
            profile: self.profile.load().await?,
            items: self.inventory.load().await?,
        })
    }

    /// Like [`App::dashboard`], but a malformed inventory blob degrades to an
    /// empty list instead of failing, so the screen always renders.
    pub async fn dashboard_or_default(&self) -> AppResult<Dashboard> {
        let profile = self.profile.load().await?;
        let items = match self.inventory.load().await {
            Ok(items) => items,
            Err(StoreError::Deserialization(msg)) => {
                tracing::warn!(%msg, "inventory blob unreadable; showing empty list");
                Vec::new()
            }
            Err(other) => return Err(other.into()),
        };

        Ok(Dashboard { profile, items })
    }

    /// Live search over a loaded collection (empty query shows everything).
    pub fn search(&self, items: &[Item], query: &str) -> Vec<Item> {
        catalog::filter(items, query)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Item management
    // ─────────────────────────────────────────────────────────────────────

    /// Current collection for the management screen (non-seeding read).
    pub async fn items(&self) -> AppResult<Vec<Item>> {
        Ok(self.inventory.read().await?)
    }

    /// Validate and append a new item; returns the collection to render and
    /// the created item.
    pub async fn add_item(&self, draft: &ItemDraft) -> AppResult<(Vec<Item>, Item)> {
        let items = self.inventory.read().await?;
        Ok(self.inventory.create(&items, draft).await?)
    }

    /// Prefill the edit form for `id`, currency label stripped.
    pub async fn edit_draft(&self, id: &ItemId) -> AppResult<ItemDraft> {
        let items = self.inventory.read().await?;
        let item = items
            .iter()
            .find(|item| &item.id == id)
            .ok_or(StoreError::Domain(DomainError::NotFound))?;

        Ok(ItemDraft::from_item(item))
    }

    /// Validate and replace the item carrying `id`; returns the collection to
    /// render and the updated item.
    pub async fn edit_item(&self, id: &ItemId, draft: &ItemDraft) -> AppResult<(Vec<Item>, Item)> {
        let items = self.inventory.read().await?;
        Ok(self.inventory.update(&items, id, draft).await?)
    }

    /// Delete the item carrying `id`; returns the collection to render.
    ///
    /// Confirmation dialogs are the screen's business; this always deletes.
    pub async fn remove_item(&self, id: &ItemId) -> AppResult<Vec<Item>> {
        let items = self.inventory.read().await?;
        Ok(self.inventory.delete(&items, id).await?)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Static content
    // ─────────────────────────────────────────────────────────────────────

    /// The onboarding carousel copy.
    pub fn onboarding_pages(&self) -> &'static [OnboardingPage; 3] {
        &ONBOARDING_PAGES
    }

    /// The about page copy.
    pub fn about_page(&self) -> &'static AboutPage {
        &ABOUT_PAGE
    }

    // ─────────────────────────────────────────────────────────────────────
    // Stores
    // ─────────────────────────────────────────────────────────────────────

    /// The profile store, for the settings screen.
    pub fn profile_store(&self) -> &ProfileStore<Arc<S>> {
        &self.profile
    }

    /// The inventory store, for callers that manage their own collection.
    pub fn inventory_store(&self) -> &InventoryStore<Arc<S>> {
        &self.inventory
    }
}
