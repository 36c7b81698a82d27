//! Settings parser for .gallery/config.toml

use super::types::Settings;
use gallery_core::prelude::*;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.toml";
const GALLERY_DIR: &str = ".gallery";

/// Load settings from `.gallery/config.toml`
///
/// Missing or malformed files yield defaults; the gallery always starts.
pub fn load_settings(project_path: &Path) -> Settings {
    let config_path = project_path.join(GALLERY_DIR).join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create `.gallery/config.toml` with defaults if missing
pub fn init_config_dir(project_path: &Path) -> Result<()> {
    let gallery_dir = project_path.join(GALLERY_DIR);

    if !gallery_dir.exists() {
        std::fs::create_dir_all(&gallery_dir)
            .map_err(|e| Error::config(format!("Failed to create .gallery dir: {}", e)))?;
        info!("Created .gallery directory");
    }

    let config_path = gallery_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        std::fs::write(&config_path, generate_default_config())
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created default config.toml");
    }

    Ok(())
}

fn generate_default_config() -> String {
    r#"# Photo Gallery Configuration

[gallery]
collection = "gallery"          # Loaded from <collections_dir>/<collection>.json
collections_dir = "collections"
default_order = "date"          # "date" or one of the collection's grouping keys

[translation]
language = ""                   # Empty = GALLERY_LANG, then LANG, then fallback
fallback_language = "en"
dictionary_dir = "dictionary"

[ui]
show_descriptions = true
show_location = true
"#
    .to_string()
}
