//! Site-wide settings (messaging endpoint, gallery content, timings).
//!
//! The web crate embeds a `site.json` and hands the parsed value to the root
//! component, which provides it to the rest of the tree through context:
//! ```ignore
//! let config = SiteConfig::from_json(SITE_JSON).unwrap_or_default();
//! use_context_provider(|| config);
//! ```
//! Every field has a default, so a partial document only overrides what it
//! names.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed site config: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("site config lists no gallery images")]
    EmptyGallery,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Messaging deep-link endpoint (query string is appended).
    pub messaging_endpoint: String,
    /// Fixed recipient of every booking message.
    pub recipient_phone: String,
    /// Directory the gallery images are served from.
    pub gallery_dir: String,
    /// Gallery image filenames in display order.
    pub gallery_images: Vec<String>,
    pub images_per_view: usize,
    pub autoplay_interval_ms: u64,
    /// Delay between opening the booking dialog and focusing its first field.
    pub focus_delay_ms: u64,
    /// Local-storage key holding the language preference.
    pub language_storage_key: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            messaging_endpoint: "https://api.whatsapp.com/send".to_string(),
            recipient_phone: "6285792164690".to_string(),
            gallery_dir: "./images/gallery".to_string(),
            gallery_images: (1..=7).map(|n| format!("gallery{n}.jpeg")).collect(),
            images_per_view: 3,
            autoplay_interval_ms: 5_000,
            focus_delay_ms: 300,
            language_storage_key: "siteLang".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON document; missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        if config.gallery_images.is_empty() {
            return Err(ConfigError::EmptyGallery);
        }
        Ok(config)
    }

    /// `<messaging_endpoint>?phone=<recipient_phone>`, the base every
    /// outbound messaging link starts from.
    pub fn messaging_base(&self) -> String {
        format!("{}?phone={}", self.messaging_endpoint, self.recipient_phone)
    }

    pub fn gallery_path(&self, file: &str) -> String {
        format!("{}/{file}", self.gallery_dir.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_the_villa_site() {
        let config = SiteConfig::default();
        assert_eq!(config.gallery_images.len(), 7);
        assert_eq!(config.images_per_view, 3);
        assert_eq!(config.autoplay_interval_ms, 5_000);
        assert_eq!(
            config.messaging_base(),
            "https://api.whatsapp.com/send?phone=6285792164690"
        );
        assert_eq!(
            config.gallery_path("gallery1.jpeg"),
            "./images/gallery/gallery1.jpeg"
        );
    }

    #[test]
    fn partial_json_overrides_only_named_fields() {
        let config = SiteConfig::from_json(r#"{ "recipient_phone": "628111", "images_per_view": 2 }"#)
            .expect("valid config");
        assert_eq!(config.recipient_phone, "628111");
        assert_eq!(config.images_per_view, 2);
        assert_eq!(config.language_storage_key, "siteLang");
    }

    #[test]
    fn rejects_empty_gallery_and_garbage() {
        assert!(matches!(
            SiteConfig::from_json(r#"{ "gallery_images": [] }"#),
            Err(ConfigError::EmptyGallery)
        ));
        assert!(matches!(
            SiteConfig::from_json("not json"),
            Err(ConfigError::Malformed(_))
        ));
    }
}
