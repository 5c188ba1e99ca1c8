use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaperSize {
    #[default]
    A4,
    Letter,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Folder scanned in batch mode.
    pub input_dir: PathBuf,
    /// Folder that receives one PDF per input file.
    pub output_dir: PathBuf,
    /// Extension of input files, without the dot.
    pub input_extension: String,
    pub page_size: PaperSize,
    /// Page margin in points, applied on all sides.
    pub margin: f32,
    pub fallback_title: String,
    /// `strftime` pattern for the generated-date line.
    pub date_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("raw_summaries"),
            output_dir: PathBuf::from("claude_pdf_summaries"),
            input_extension: "txt".to_string(),
            page_size: PaperSize::A4,
            margin: 72.0,
            fallback_title: "eBook Summary".to_string(),
            date_format: "%B %d, %Y".to_string(),
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        config.expand_dirs();
        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    /// Loads the config at `path` (or the default location), falling back to defaults when absent.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        let loaded = match path {
            Some(path) => Self::load_from_path(path)?,
            None => Self::load()?,
        };
        Ok(loaded.unwrap_or_default())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/summary-press");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Expands `~` and environment variables in both folder paths.
    /// A path naming an unset variable is kept as written.
    fn expand_dirs(&mut self) {
        for dir in [&mut self.input_dir, &mut self.output_dir] {
            let raw = dir.to_string_lossy().into_owned();
            if let Ok(expanded) = shellexpand::full(&raw) {
                *dir = PathBuf::from(expanded.as_ref());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    fn write_config(content: &str) -> (TempDir, PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, content).unwrap();
        (temp_dir, config_file)
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let (_dir, config_file) = write_config("margin = 36.0\n");

        let config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(config.margin, 36.0);
        assert_eq!(config.input_dir, PathBuf::from("raw_summaries"));
        assert_eq!(config.output_dir, PathBuf::from("claude_pdf_summaries"));
        assert_eq!(config.input_extension, "txt");
        assert_eq!(config.page_size, PaperSize::A4);
        assert_eq!(config.fallback_title, "eBook Summary");
        assert_eq!(config.date_format, "%B %d, %Y");
    }

    #[test]
    fn test_page_size_is_lowercase_in_toml() {
        let config: Config = toml::from_str("page_size = \"letter\"\n").unwrap();
        assert_eq!(config.page_size, PaperSize::Letter);

        let (_dir, config_file) = write_config("page_size = \"tabloid\"\n");
        let result = Config::load_from_path(&config_file);
        assert!(matches!(result, Err(ConfigError::ConfigParseError { .. })));
    }

    #[test]
    fn test_load_or_default_without_file() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nonexistent.toml");

        assert!(Config::load_from_path(&missing).unwrap().is_none());
        let config = Config::load_or_default(Some(&missing)).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_wrong_value_type_is_parse_error() {
        let (_dir, config_file) = write_config("margin = \"wide\"");

        let result = Config::load_from_path(&config_file);

        assert!(matches!(result, Err(ConfigError::ConfigParseError { .. })));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");
        let test_config = Config {
            output_dir: PathBuf::from("/tmp/pdfs"),
            input_extension: "md".to_string(),
            page_size: PaperSize::Letter,
            date_format: "%Y-%m-%d".to_string(),
            ..Config::default()
        };

        test_config.save_to_path(&config_file).unwrap();
        let saved = std::fs::read_to_string(&config_file).unwrap();
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert!(saved.contains("page_size = \"letter\""));
        assert_eq!(loaded_config, test_config);
    }

    #[test]
    fn test_folder_paths_are_expanded() {
        unsafe {
            env::set_var("SUMMARY_ROOT", "/custom/summaries");
        }
        let (_dir, config_file) = write_config(
            "input_dir = \"$SUMMARY_ROOT/raw\"\noutput_dir = \"~/pdfs\"\n",
        );

        let config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(config.input_dir, PathBuf::from("/custom/summaries/raw"));
        assert!(!config.output_dir.to_string_lossy().starts_with('~'));
        assert!(config.output_dir.ends_with("pdfs"));

        unsafe {
            env::remove_var("SUMMARY_ROOT");
        }
    }

    #[test]
    fn test_unset_variable_keeps_path() {
        let (_dir, config_file) =
            write_config("input_dir = \"$SUMMARY_PRESS_UNSET_VAR/raw\"\n");

        let config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(
            config.input_dir,
            PathBuf::from("$SUMMARY_PRESS_UNSET_VAR/raw")
        );
    }
}
