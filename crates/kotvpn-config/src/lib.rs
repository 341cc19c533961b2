//! Kot VPN Configuration Management
//!
//! Handles loading and managing configuration from ~/.kotvpn/config.toml,
//! generating a commented default file on first run. Partial files merge
//! over defaults so users only write the keys they change.

use std::fs;
use std::path::PathBuf;

use kotvpn_core::BlurVariant;
use serde::{Deserialize, Serialize};

/// Default configuration directory name
const CONFIG_DIR_NAME: &str = ".kotvpn";
/// Default configuration file name
const CONFIG_FILE_NAME: &str = "config.toml";

/// Window configuration section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Initial window width in logical pixels
    #[serde(default = "default_width")]
    pub width: u32,

    /// Initial window height in logical pixels
    #[serde(default = "default_height")]
    pub height: u32,
}

fn default_width() -> u32 {
    1280
}

fn default_height() -> u32 {
    800
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

/// Scene configuration section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Which of the two shipped blur conventions to run
    #[serde(default)]
    pub variant: BlurVariant,

    /// Static backdrop image, relative paths resolve against the working directory
    #[serde(default = "default_static_image")]
    pub static_image: PathBuf,

    /// Animated backdrop image
    #[serde(default = "default_animated_image")]
    pub animated_image: PathBuf,

    /// Foreground mascot image
    #[serde(default = "default_mascot_image")]
    pub mascot_image: PathBuf,

    /// Parallax strength of the mascot layer
    #[serde(default = "default_mascot_depth")]
    pub mascot_depth: f32,
}

fn default_static_image() -> PathBuf {
    PathBuf::from("assets/bg-static.png")
}

fn default_animated_image() -> PathBuf {
    PathBuf::from("assets/bg-animated.png")
}

fn default_mascot_image() -> PathBuf {
    PathBuf::from("assets/mascot.png")
}

fn default_mascot_depth() -> f32 {
    0.5
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            variant: BlurVariant::default(),
            static_image: default_static_image(),
            animated_image: default_animated_image(),
            mascot_image: default_mascot_image(),
            mascot_depth: default_mascot_depth(),
        }
    }
}

/// Page configuration section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    /// Panel title; omit to fall back to the built-in placeholder
    #[serde(default = "default_title")]
    pub title: Option<String>,
}

fn default_title() -> Option<String> {
    Some("Kot vpn bot".to_string())
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Window settings
    #[serde(default)]
    pub window: WindowConfig,

    /// Scene settings
    #[serde(default)]
    pub scene: SceneConfig,

    /// Page settings
    #[serde(default)]
    pub page: PageConfig,
}

impl Config {
    /// Load configuration from file, creating default if it doesn't exist
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            log::info!("Config file not found, creating default at {:?}", config_path);
            Self::create_default_config()?;
        }

        let config = Self::load_from(&config_path)?;
        log::info!("Loaded configuration from {:?}", config_path);
        Ok(config)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &PathBuf) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.clone(), e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::ParseError(path.clone(), e))?;

        Ok(config)
    }

    /// Get the configuration directory path (~/.kotvpn/)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDirectory)?;
        Ok(home.join(CONFIG_DIR_NAME))
    }

    /// Get the configuration file path (~/.kotvpn/config.toml)
    pub fn config_file_path() -> Result<PathBuf, ConfigError> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Create the default configuration file and directory structure
    pub fn create_default_config() -> Result<(), ConfigError> {
        let config_dir = Self::config_dir()?;
        let config_path = Self::config_file_path()?;

        fs::create_dir_all(&config_dir)
            .map_err(|e| ConfigError::CreateDirError(config_dir.clone(), e))?;

        let default_config = Config::default();
        let toml_content = toml::to_string_pretty(&default_config)
            .map_err(ConfigError::SerializeError)?;

        // Add header comment
        let content = format!(
            "# Kot VPN landing configuration\n\
             #\n\
             # scene.variant selects which of the two blur conventions runs:\n\
             #   classic  - static backdrop sharp at center, animated blurred there\n\
             #   inverted - the opposite pairing\n\
             \n\
             {toml_content}"
        );

        fs::write(&config_path, content)
            .map_err(|e| ConfigError::WriteError(config_path.clone(), e))?;

        log::info!("Created default configuration at {:?}", config_path);
        Ok(())
    }
}

/// Configuration errors
#[derive(Debug)]
pub enum ConfigError {
    /// Home directory not found
    NoHomeDirectory,
    /// Failed to read config file
    ReadError(PathBuf, std::io::Error),
    /// Failed to parse config file
    ParseError(PathBuf, toml::de::Error),
    /// Failed to serialize config
    SerializeError(toml::ser::Error),
    /// Failed to write config file
    WriteError(PathBuf, std::io::Error),
    /// Failed to create directory
    CreateDirError(PathBuf, std::io::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NoHomeDirectory => write!(f, "Could not determine home directory"),
            ConfigError::ReadError(path, e) => write!(f, "Failed to read {:?}: {}", path, e),
            ConfigError::ParseError(path, e) => write!(f, "Failed to parse {:?}: {}", path, e),
            ConfigError::SerializeError(e) => write!(f, "Failed to serialize config: {}", e),
            ConfigError::WriteError(path, e) => write!(f, "Failed to write {:?}: {}", path, e),
            ConfigError::CreateDirError(path, e) => write!(f, "Failed to create {:?}: {}", path, e),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.window.height, 800);
        assert_eq!(config.scene.variant, BlurVariant::Classic);
        assert_eq!(config.scene.mascot_depth, 0.5);
        assert_eq!(config.page.title.as_deref(), Some("Kot vpn bot"));
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.window.width, config.window.width);
        assert_eq!(parsed.scene.variant, config.scene.variant);
        assert_eq!(parsed.page.title, config.page.title);
    }

    #[test]
    fn test_partial_config() {
        let partial = r#"
            [scene]
            variant = "inverted"
        "#;
        let config: Config = toml::from_str(partial).unwrap();
        assert_eq!(config.scene.variant, BlurVariant::Inverted);
        // Other fields should have defaults
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.scene.mascot_depth, 0.5);
    }

    #[test]
    fn test_invalid_variant_is_an_error() {
        let bad = r#"
            [scene]
            variant = "sideways"
        "#;
        assert!(toml::from_str::<Config>(bad).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "[window]\nwidth = 640\nheight = 480\n\n[page]\ntitle = \"Test panel\"\n"
        )
        .unwrap();

        let config = Config::load_from(&file.path().to_path_buf()).unwrap();
        assert_eq!(config.window.width, 640);
        assert_eq!(config.window.height, 480);
        assert_eq!(config.page.title.as_deref(), Some("Test panel"));
    }

    #[test]
    fn test_load_from_missing_file() {
        let path = PathBuf::from("/nonexistent/kotvpn/config.toml");
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::ReadError(..))
        ));
    }

    #[test]
    fn test_load_from_garbled_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[window\nwidth = ").unwrap();
        assert!(matches!(
            Config::load_from(&file.path().to_path_buf()),
            Err(ConfigError::ParseError(..))
        ));
    }
}
