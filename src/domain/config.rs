use std::path::Path;

use serde::{Deserialize, Serialize};

/// Configuration for the marketplace data root.
///
/// This struct holds settings that control where the persisted catalogue
/// lives, how many photos a donation may carry, and which address-lookup
/// endpoint is used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// File name of the persisted catalogue, relative to the data root.
    data_file: String,

    /// Maximum number of photos per donation.
    max_images: usize,

    /// Base URL of the postal-code lookup service.
    ///
    /// Overridable mainly so tests can point at a local stub.
    lookup_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            max_images: default_max_images(),
            lookup_base_url: default_lookup_base_url(),
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content
    /// is invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML
    /// or if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize config: {e}"))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {e}"))
    }

    /// File name of the persisted catalogue.
    #[must_use]
    pub fn data_file(&self) -> &str {
        &self.data_file
    }

    /// Maximum number of photos per donation.
    #[must_use]
    pub const fn max_images(&self) -> usize {
        self.max_images
    }

    /// Base URL of the postal-code lookup service.
    #[must_use]
    pub fn lookup_base_url(&self) -> &str {
        &self.lookup_base_url
    }
}

fn default_data_file() -> String {
    "miauplace_cats.json".to_string()
}

const fn default_max_images() -> usize {
    crate::domain::record::MAX_IMAGES
}

fn default_lookup_base_url() -> String {
    "https://viacep.com.br".to_string()
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the
/// domain type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_data_file")]
        data_file: String,

        #[serde(default = "default_max_images")]
        max_images: usize,

        #[serde(default = "default_lookup_base_url")]
        lookup_base_url: String,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                data_file,
                max_images,
                lookup_base_url,
            } => Self {
                data_file,
                max_images,
                lookup_base_url,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            data_file: config.data_file,
            max_images: config.max_images,
            lookup_base_url: config.lookup_base_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::Config;

    #[test]
    fn load_reads_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            b"_version = \"1\"\ndata_file = \"cats.json\"\nmax_images = 3\nlookup_base_url = \"http://localhost:9999\"\n",
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.data_file(), "cats.json");
        assert_eq!(config.max_images(), 3);
        assert_eq!(config.lookup_base_url(), "http://localhost:9999");
    }

    #[test]
    fn load_missing_file_returns_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing.toml");

        let error = Config::load(&missing).unwrap_err();
        assert!(error.starts_with("Failed to read config file:"));
    }

    #[test]
    fn empty_file_returns_default() {
        // Deserialising a bare version header yields the defaults.
        let expected = Config::default();
        let actual: Config = toml::from_str(r#"_version = "1""#).unwrap();
        assert_eq!(actual, expected);
    }

    #[test]
    fn save_round_trips() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");

        let config = Config::default();
        config.save(&path).unwrap();

        assert_eq!(Config::load(&path).unwrap(), config);
    }
}
