//! Helper functions for page rendering
//!
//! Date formatting, HTML tags and rich text serialization used by the
//! generator's page templates.

mod date;
mod html;
mod rich_text;

pub use date::*;
pub use html::*;
pub use rich_text::*;

use anyhow::Result;
use chrono::Locale;

use crate::config::SiteConfig;

/// Site-aware helpers for page templates
pub struct Helpers {
    date_format: String,
    tz: chrono_tz::Tz,
    locale: Locale,
}

impl Helpers {
    /// Create a new helpers instance
    pub fn new(config: &SiteConfig) -> Result<Self> {
        Ok(Self {
            date_format: config.date_format.clone(),
            tz: config.tz()?,
            locale: locale_for(&config.language),
        })
    }

    /// Format a publication date in the site's timezone and language
    pub fn date(&self, published_at: Option<&str>) -> String {
        format_published(published_at, &self.date_format, &self.tz, self.locale)
    }
}
