use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Lowest zoom tick (must be <= -1)
    pub zoom_min: i32,

    /// Highest zoom tick (must be >= 1)
    pub zoom_max: i32,

    /// Scale multiplier per zoom tick
    pub zoom_factor: f64,

    /// Folder the viewer opens first
    pub start_dir: PathBuf,

    /// Manifest to copy from in headless mode
    pub export_manifest: Option<PathBuf>,

    /// Destination directory for headless copy
    pub export_dest: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        let start_dir = dirs::picture_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        Self {
            zoom_min: -2,
            zoom_max: 4,
            zoom_factor: crate::viewer::DEFAULT_ZOOM_FACTOR,
            start_dir,
            export_manifest: None,
            export_dest: None,
        }
    }
}

impl Config {
    /// Load config from `.env` and environment variables
    pub fn load() -> Result<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let mut config = Config::default();

        if let Ok(min) = std::env::var("PHOTOSEL_ZOOM_MIN") {
            config.zoom_min = min.parse()?;
        }

        if let Ok(max) = std::env::var("PHOTOSEL_ZOOM_MAX") {
            config.zoom_max = max.parse()?;
        }

        if let Ok(factor) = std::env::var("PHOTOSEL_ZOOM_FACTOR") {
            config.zoom_factor = factor.parse()?;
        }

        if let Ok(dir) = std::env::var("PHOTOSEL_START_DIR") {
            config.start_dir = PathBuf::from(dir);
        }

        if let Ok(manifest) = std::env::var("PHOTOSEL_EXPORT_MANIFEST") {
            config.export_manifest = Some(PathBuf::from(manifest));
        }

        if let Ok(dest) = std::env::var("PHOTOSEL_EXPORT_DEST") {
            config.export_dest = Some(PathBuf::from(dest));
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.zoom_min > -1 {
            bail!("zoom_min must be -1 or lower, got {}", self.zoom_min);
        }
        if self.zoom_max < 1 {
            bail!("zoom_max must be 1 or higher, got {}", self.zoom_max);
        }
        if !(self.zoom_factor > 1.0) {
            bail!("zoom_factor must be greater than 1.0, got {}", self.zoom_factor);
        }
        Ok(())
    }
}

pub fn load_config() -> Result<Config> {
    Config::load()
}
