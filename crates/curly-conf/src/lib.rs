use std::fs;
use std::path::Path;

use config::Config;
use config::ConfigError as ExternalConfigError;
use config::File;
use config::FileFormat;
use directories::ProjectDirs;
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration build/deserialize error")]
    Config(#[from] ExternalConfigError),
    #[error("Failed to read Cargo.toml")]
    ManifestIo(#[from] std::io::Error),
    #[error("Failed to parse Cargo.toml TOML")]
    ManifestParse(#[from] toml::de::Error),
    #[error("Failed to serialize extracted package metadata")]
    ManifestSerialize(#[from] toml::ser::Error),
}

/// What to do when a reference repeats an attribute key, e.g.
/// `{{widget size=1 size=2}}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicateAttributes {
    /// Reject the reference at compile time.
    #[default]
    Error,
    /// Keep the value that appears last.
    LastWins,
}

/// Destination format for rendered reference values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Escape `& < > " '` unless the presenter returned safe markup.
    #[default]
    Html,
    /// Emit values verbatim.
    Text,
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AttributeSettings {
    pub duplicates: DuplicateAttributes,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub debug: bool,
    pub attributes: AttributeSettings,
    pub output: OutputFormat,
}

impl Settings {
    pub fn new(project_root: &Path) -> Result<Self, ConfigError> {
        let user_config_file = ProjectDirs::from("com.github", "curly", "curly")
            .map(|proj_dirs| proj_dirs.config_dir().join("curly.toml"));

        Self::load_from_paths(project_root, user_config_file.as_deref())
    }

    /// Like [`Settings::new`], with an explicit user config file in place of
    /// the platform config directory.
    pub fn load_from_paths(
        project_root: &Path,
        user_config_path: Option<&Path>,
    ) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        if let Some(path) = user_config_path {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(false));
        }

        let manifest_path = project_root.join("Cargo.toml");
        if manifest_path.exists() {
            let content = fs::read_to_string(&manifest_path)?;
            let manifest: toml::Value = toml::from_str(&content)?;

            let table_path = ["package", "metadata", "curly"];

            let curly_value = table_path
                .iter()
                .try_fold(&manifest, |current, &key| current.get(key));

            if let Some(curly_table) = curly_value.and_then(|v| v.as_table()) {
                let curly_toml = toml::to_string(curly_table)?;
                builder = builder.add_source(File::from_str(&curly_toml, FileFormat::Toml));
            }
        }

        builder = builder.add_source(
            File::from(project_root.join(".curly.toml"))
                .format(FileFormat::Toml)
                .required(false),
        );

        builder = builder.add_source(
            File::from(project_root.join("curly.toml"))
                .format(FileFormat::Toml)
                .required(false),
        );

        let config = builder.build()?;
        let settings: Settings = config.try_deserialize()?;
        tracing::debug!(?settings, "loaded settings");
        Ok(settings)
    }
}
