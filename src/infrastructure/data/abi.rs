// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@on1.no>

use crate::domain::constants::bundled_abi_source;
use crate::domain::contracts::ContractName;
use crate::domain::error::AppError;
use alloy_json_abi::JsonAbi;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Interface descriptions keyed by contract name. Always holds every `ContractName`.
#[derive(Debug, Clone, PartialEq)]
pub struct AbiRegistry {
    abis: BTreeMap<ContractName, Arc<JsonAbi>>,
}

impl AbiRegistry {
    /// ABIs compiled into the crate from `data/abi`.
    pub fn bundled() -> Result<Self, AppError> {
        let mut abis = BTreeMap::new();
        for name in ContractName::ALL {
            let abi = parse_abi(name, bundled_abi_source(name))?;
            tracing::debug!(target: "registry", contract = %name, "Loaded bundled ABI");
            abis.insert(name, Arc::new(abi));
        }
        Ok(Self { abis })
    }

    /// Reads `<ContractName>.json` for every known contract from `dir_path`.
    /// Extra files in the directory are ignored.
    pub fn load_from_directory(dir_path: &Path) -> Result<Self, AppError> {
        if !dir_path.is_dir() {
            return Err(AppError::Config(format!(
                "ABI directory not found: {}",
                dir_path.display()
            )));
        }

        let mut abis = BTreeMap::new();
        for name in ContractName::ALL {
            let path = dir_path.join(name.file_name());
            let file_content = fs::read_to_string(&path).map_err(|e| {
                AppError::Config(format!("Failed to read ABI {} ({}): {e}", name, path.display()))
            })?;
            let abi = parse_abi(name, &file_content)?;
            tracing::debug!(
                target: "registry",
                contract = %name,
                path = %path.display(),
                "Loaded ABI"
            );
            abis.insert(name, Arc::new(abi));
        }
        Ok(Self { abis })
    }

    pub fn get(&self, name: ContractName) -> Option<&Arc<JsonAbi>> {
        self.abis.get(&name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContractName, &Arc<JsonAbi>)> {
        self.abis.iter().map(|(k, v)| (*k, v))
    }

    pub fn len(&self) -> usize {
        self.abis.len()
    }

    pub fn is_empty(&self) -> bool {
        self.abis.is_empty()
    }
}

fn parse_abi(name: ContractName, raw: &str) -> Result<JsonAbi, AppError> {
    let abi: JsonAbi = serde_json::from_str(raw)
        .map_err(|e| AppError::Config(format!("Failed to parse ABI {name}: {e}")))?;
    if abi.is_empty() {
        return Err(AppError::Validation {
            field: format!("abi.{name}"),
            message: "ABI has no entries".to_string(),
        });
    }
    Ok(abi)
}
