//! Store profile persistence, one key per field.

use dukaan_core::DomainError;
use dukaan_profile::{StoreProfile, TitleColor, TitleSize};

use crate::error::StoreResult;
use crate::keys;
use crate::kv::KeyValueStore;

/// Store display settings over their per-field keys.
///
/// Reads degrade per field: an absent or unrecognized value yields that
/// field's default (with a warning for values that should have parsed), so a
/// half-written profile never blocks the dashboard.
pub struct ProfileStore<S> {
    kv: S,
}

impl<S: KeyValueStore> ProfileStore<S> {
    pub fn new(kv: S) -> Self {
        Self { kv }
    }

    /// Assemble the profile from its keys, defaulting field by field.
    pub async fn load(&self) -> StoreResult<StoreProfile> {
        let mut profile = StoreProfile::default();

        if let Some(name) = self.kv.get(keys::STORE_NAME).await? {
            profile.name = name;
        }
        if let Some(tagline) = self.kv.get(keys::STORE_TAGLINE).await? {
            profile.tagline = tagline;
        }
        profile.logo = self.kv.get(keys::STORE_LOGO).await?;

        if let Some(hex) = self.kv.get(keys::TITLE_COLOR).await? {
            match TitleColor::from_hex(&hex) {
                Some(color) => profile.title_color = color,
                None => tracing::warn!(value = %hex, "unrecognized title color; using default"),
            }
        }
        if let Some(points) = self.kv.get(keys::TITLE_SIZE).await? {
            match TitleSize::from_points_str(&points) {
                Some(size) => profile.title_size = size,
                None => tracing::warn!(value = %points, "unrecognized title size; using default"),
            }
        }

        Ok(profile)
    }

    /// Rename the store. The new name must be non-empty after trimming.
    pub async fn set_name(&self, name: &str) -> StoreResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("store name cannot be empty").into());
        }
        self.kv.set(keys::STORE_NAME, name).await?;
        Ok(())
    }

    /// Change the tagline. Must be non-empty after trimming.
    pub async fn set_tagline(&self, tagline: &str) -> StoreResult<()> {
        let tagline = tagline.trim();
        if tagline.is_empty() {
            return Err(DomainError::validation("tagline cannot be empty").into());
        }
        self.kv.set(keys::STORE_TAGLINE, tagline).await?;
        Ok(())
    }

    /// Set or clear the logo image URI.
    pub async fn set_logo(&self, logo: Option<&str>) -> StoreResult<()> {
        match logo {
            Some(uri) => self.kv.set(keys::STORE_LOGO, uri).await?,
            None => self.kv.remove(keys::STORE_LOGO).await?,
        }
        Ok(())
    }

    pub async fn set_title_color(&self, color: TitleColor) -> StoreResult<()> {
        self.kv.set(keys::TITLE_COLOR, color.as_hex()).await?;
        Ok(())
    }

    pub async fn set_title_size(&self, size: TitleSize) -> StoreResult<()> {
        self.kv
            .set(keys::TITLE_SIZE, &size.points().to_string())
            .await?;
        Ok(())
    }
}
