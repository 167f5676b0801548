// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@mitander.dev>

use crate::common::data_path::resolve_required_data_path;
use crate::common::parsing::{dedup_names, parse_boolish, parse_name_list};
use crate::domain::constants::DEFAULT_NETWORK;
use crate::domain::error::AppError;
use config::{Config, Environment, File};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const ENV_PREFIX: &str = "AUROOM";
const DEFAULT_CONFIG_NAME: &str = "registry";

/// What the join does when an address book entry is absent or empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingPolicy {
    /// Skip the binding, record the gap and log it.
    #[default]
    Warn,
    /// Abort the load on the first gap.
    Strict,
}

impl FromStr for MissingPolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "warn" => Ok(MissingPolicy::Warn),
            "strict" => Ok(MissingPolicy::Strict),
            other => Err(AppError::Config(format!("Invalid missing_policy '{other}'"))),
        }
    }
}

impl fmt::Display for MissingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingPolicy::Warn => f.write_str("warn"),
            MissingPolicy::Strict => f.write_str("strict"),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RegistrySettings {
    // General
    #[serde(default)]
    pub debug: bool,
    #[serde(default)]
    pub log_json: bool,

    // Join
    #[serde(default = "default_networks", deserialize_with = "deserialize_name_list")]
    pub networks: Vec<String>,
    #[serde(default)]
    pub missing_policy: MissingPolicy,

    // Data sources; bundled artifacts when unset
    pub abi_dir: Option<String>,
    pub address_book_path: Option<String>,
    pub data_dir: Option<String>,
}

fn default_networks() -> Vec<String> {
    vec![DEFAULT_NETWORK.to_string()]
}

impl Default for RegistrySettings {
    fn default() -> Self {
        Self {
            debug: false,
            log_json: false,
            networks: default_networks(),
            missing_policy: MissingPolicy::default(),
            abi_dir: None,
            address_book_path: None,
            data_dir: None,
        }
    }
}

fn deserialize_name_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{Error, SeqAccess, Visitor};

    struct NameVisitor;

    impl<'de> Visitor<'de> for NameVisitor {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a sequence of network names or a comma-separated string")
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: Error,
        {
            Ok(parse_name_list(v))
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let mut out = Vec::new();
            while let Some(elem) = seq.next_element::<String>()? {
                out.push(elem);
            }
            Ok(dedup_names(out))
        }
    }

    deserializer.deserialize_any(NameVisitor)
}

impl RegistrySettings {
    /// Layers: `registry.toml` (or `path`), then `AUROOM_*` environment / `.env`.
    pub fn load_with_path(path: Option<&str>) -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let mut builder = Config::builder();
        if let Some(selected_path) = path {
            builder = builder.add_source(File::from(Path::new(selected_path)).required(true));
        } else {
            builder = builder.add_source(File::with_name(DEFAULT_CONFIG_NAME).required(false));
        }
        builder = builder.add_source(Environment::with_prefix(ENV_PREFIX));

        let mut settings: RegistrySettings = builder.build()?.try_deserialize()?;

        // AUROOM_STRICT=1 is shorthand for missing_policy = "strict"
        if let Ok(raw) = std::env::var(format!("{ENV_PREFIX}_STRICT")) {
            match parse_boolish(&raw) {
                Some(true) => settings.missing_policy = MissingPolicy::Strict,
                Some(false) => {}
                None => {
                    return Err(AppError::Config(format!(
                        "{ENV_PREFIX}_STRICT must be a boolean, got '{raw}'"
                    )));
                }
            }
        }

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.networks.is_empty() {
            return Err(AppError::Validation {
                field: "networks".to_string(),
                message: "at least one network is required".to_string(),
            });
        }
        Ok(())
    }

    fn data_dir_value(&self) -> Option<&str> {
        self.data_dir
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    fn resolve_optional(&self, configured: Option<&str>) -> Result<Option<PathBuf>, AppError> {
        match configured.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => resolve_required_data_path(raw, self.data_dir_value()).map(Some),
            None => Ok(None),
        }
    }

    /// Directory override for ABIs, resolved against the data directory.
    pub fn abi_dir_path(&self) -> Result<Option<PathBuf>, AppError> {
        self.resolve_optional(self.abi_dir.as_deref())
    }

    /// File override for the address book, resolved against the data directory.
    pub fn address_book_file(&self) -> Result<Option<PathBuf>, AppError> {
        self.resolve_optional(self.address_book_path.as_deref())
    }

    pub fn log_level(&self) -> &'static str {
        if self.debug { "debug" } else { "info" }
    }
}
