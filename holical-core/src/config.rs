//! Global holical configuration.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::error::{HolicalError, HolicalResult};

pub static DEFAULT_BASE_URL: &str = "https://date.nager.at/api/v3/PublicHolidays";
pub static DEFAULT_COUNTRY_CODE: &str = "US";
static DEFAULT_OUTPUT_DIR: &str = ".";

/// Environment variables with this prefix override file values,
/// e.g. `HOLICAL_COUNTRY_CODE=DE`.
static ENV_PREFIX: &str = "HOLICAL";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_country_code() -> String {
    DEFAULT_COUNTRY_CODE.to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

/// Configuration at ~/.config/holical/config.toml
///
/// Every field is optional in the file; missing values fall back to the
/// public Nager.Date endpoint, the US, and the working directory.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct HolicalConfig {
    /// Yearly holiday endpoint; requests go to `{base_url}/{year}/{country_code}`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_country_code")]
    pub country_code: String,

    /// Directory the calendar spreadsheet is written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for HolicalConfig {
    fn default() -> Self {
        HolicalConfig {
            base_url: default_base_url(),
            country_code: default_country_code(),
            output_dir: default_output_dir(),
        }
    }
}

impl HolicalConfig {
    pub fn config_path() -> HolicalResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| HolicalError::Config("Could not determine config directory".into()))?
            .join("holical");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the user config file (if any) layered under `HOLICAL_*` environment variables.
    pub fn load() -> HolicalResult<Self> {
        let config_path = Self::config_path()?;
        Self::build(
            File::from(config_path)
                .format(FileFormat::Toml)
                .required(false),
            None,
        )
    }

    /// Load a specific config file. Unlike [`HolicalConfig::load`], the file must exist.
    /// It is always read as TOML, whatever its extension.
    pub fn load_from(path: &Path) -> HolicalResult<Self> {
        if !path.exists() {
            return Err(HolicalError::Config(format!(
                "Config file not found at {}",
                path.display()
            )));
        }

        Self::build(
            File::from(path.to_path_buf())
                .format(FileFormat::Toml)
                .required(true),
            None,
        )
    }

    fn build(
        file: File<config::FileSourceFile, FileFormat>,
        env: Option<HashMap<String, String>>,
    ) -> HolicalResult<Self> {
        let config: HolicalConfig = Config::builder()
            .add_source(file)
            .add_source(Environment::with_prefix(ENV_PREFIX).source(env))
            .build()
            .map_err(|e| HolicalError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| HolicalError::Config(e.to_string()))?;

        config.normalized()
    }

    /// Upper-case the country code and reject empty values.
    pub fn normalized(mut self) -> HolicalResult<Self> {
        self.country_code = self.country_code.trim().to_uppercase();
        self.base_url = self.base_url.trim().to_string();
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> HolicalResult<()> {
        if self.base_url.is_empty() {
            return Err(HolicalError::Config("base_url must not be empty".into()));
        }

        if self.country_code.is_empty() {
            return Err(HolicalError::Config("country_code must not be empty".into()));
        }

        Ok(())
    }

    /// Output directory with `~` expanded.
    pub fn output_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.output_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// The effective configuration as TOML, for display.
    pub fn to_toml(&self) -> HolicalResult<String> {
        toml::to_string_pretty(self).map_err(|e| HolicalError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_when_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("config.toml");

        let config = HolicalConfig::build(
            File::from(missing).required(false),
            Some(HashMap::new()),
        )
        .unwrap();

        assert_eq!(config, HolicalConfig::default());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.country_code, "US");
    }

    #[test]
    fn test_load_from_file_normalizes_country_code() {
        let file = write_config("country_code = \" de \"\noutput_dir = \"/tmp/cal\"\n");

        let config = HolicalConfig::load_from(file.path()).unwrap();

        assert_eq!(config.country_code, "DE");
        assert_eq!(config.output_dir, PathBuf::from("/tmp/cal"));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_env_overrides_file() {
        let file = write_config("country_code = \"DE\"\n");
        let env = HashMap::from([("HOLICAL_COUNTRY_CODE".to_string(), "fr".to_string())]);

        let config = HolicalConfig::build(File::from(file.path().to_path_buf()), Some(env)).unwrap();

        assert_eq!(config.country_code, "FR");
    }

    #[test]
    fn test_load_from_reads_any_extension_as_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("holical.conf");
        std::fs::write(&path, "country_code = \"DE\"\n").unwrap();

        let config = HolicalConfig::load_from(&path).unwrap();

        assert_eq!(config.country_code, "DE");
    }

    #[test]
    fn test_load_from_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = HolicalConfig::load_from(&dir.path().join("nope.toml"));

        assert!(matches!(result, Err(HolicalError::Config(_))));
    }

    #[test]
    fn test_empty_country_code_rejected() {
        let config = HolicalConfig {
            country_code: "   ".into(),
            ..HolicalConfig::default()
        };

        assert!(matches!(config.normalized(), Err(HolicalError::Config(_))));
    }

    #[test]
    fn test_to_toml_round_trips_fields() {
        let toml = HolicalConfig::default().to_toml().unwrap();

        assert!(toml.contains("country_code = \"US\""));
        assert!(toml.contains(DEFAULT_BASE_URL));
    }
}
