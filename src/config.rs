use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::carousel::CarouselOptions;
use crate::error::ConfigError;
use crate::items::ItemSequence;
use crate::testimonial::{Testimonial, default_testimonials};

/// Contents of a carousel TOML file.
///
/// Only the two carousel options are recognized; any other key is an error.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CarouselConfig {
    #[serde(default)]
    pub autoplay_speed_ms: Option<u64>,
    #[serde(default = "default_testimonials")]
    pub testimonials: Vec<Testimonial>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay_speed_ms: None,
            testimonials: default_testimonials(),
        }
    }
}

impl CarouselConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), testimonials = config.testimonials.len(), "loaded config");
        Ok(config)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn options(&self) -> CarouselOptions {
        CarouselOptions {
            autoplay_speed: self.autoplay_speed_ms.map(Duration::from_millis),
        }
    }

    pub fn items(&self) -> Result<ItemSequence<Testimonial>, ConfigError> {
        Ok(ItemSequence::new(self.testimonials.clone())?)
    }
}
