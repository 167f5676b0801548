// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@oxidity.com>

use crate::common::parsing::{parse_address_hex, parse_chain_id};
use crate::domain::constants::BUNDLED_ADDRESS_BOOK;
use crate::domain::contracts::Category;
use crate::domain::error::AppError;
use alloy::primitives::Address;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Per-network header fields, read leniently: a field of an unexpected type is
/// `None` here and still present in the raw document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkMeta {
    pub name: Option<String>,
    pub chain_id: Option<u64>,
    pub rpc_url: Option<String>,
    pub explorer: Option<String>,
}

impl NetworkMeta {
    fn from_entry(entry: &Value) -> Self {
        let text = |key: &str| entry.get(key).and_then(Value::as_str).map(ToString::to_string);
        let chain_id = match entry.get("chainId") {
            Some(Value::Number(n)) => n.as_u64(),
            Some(Value::String(s)) => parse_chain_id(s),
            _ => None,
        };
        Self {
            name: text("name"),
            chain_id,
            rpc_url: text("rpcUrl"),
            explorer: text("explorer"),
        }
    }
}

/// One network entry. Category maps are checked when the network is joined,
/// not when the book is loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkAddresses {
    pub meta: NetworkMeta,
    entry: Value,
}

impl NetworkAddresses {
    fn section<'a>(
        &'a self,
        network: &str,
        category: Category,
    ) -> Result<Option<&'a Map<String, Value>>, AppError> {
        let Some(fields) = self.entry.as_object() else {
            return Err(AppError::Validation {
                field: format!("addresses.{network}"),
                message: "expected an object".to_string(),
            });
        };
        match fields.get(category.key()) {
            None => Ok(None),
            Some(Value::Object(section)) => Ok(Some(section)),
            Some(_) => Err(AppError::Validation {
                field: format!("addresses.{network}.{category}"),
                message: "expected an object of name -> address".to_string(),
            }),
        }
    }

    /// Raw address string stored under `category.key`, if any.
    pub fn raw(&self, network: &str, category: Category, key: &str) -> Result<Option<&str>, AppError> {
        let Some(section) = self.section(network, category)? else {
            return Ok(None);
        };
        match section.get(key) {
            None => Ok(None),
            Some(Value::String(addr)) => Ok(Some(addr.as_str())),
            Some(_) => Err(AppError::Validation {
                field: format!("addresses.{network}.{category}.{key}"),
                message: "expected an address string".to_string(),
            }),
        }
    }

    /// Every category present must be an object of name -> address string.
    pub fn validate(&self, network: &str) -> Result<(), AppError> {
        for category in Category::ALL {
            let Some(section) = self.section(network, category)? else {
                continue;
            };
            for key in section.keys() {
                self.raw(network, category, key)?;
            }
        }
        Ok(())
    }
}

/// Deployment addresses keyed by network name.
///
/// The parsed document is kept verbatim next to the typed view so callers can
/// re-export it unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct AddressBook {
    raw: Value,
    networks: BTreeMap<String, NetworkAddresses>,
}

impl AddressBook {
    pub fn bundled() -> Result<Self, AppError> {
        Self::from_json_str(BUNDLED_ADDRESS_BOOK, "bundled addresses.json")
    }

    pub fn load_from_file(path: &Path) -> Result<Self, AppError> {
        if !path.exists() {
            return Err(AppError::Config(format!(
                "Address book not found: {}",
                path.display()
            )));
        }
        let raw = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read address book {}: {e}", path.display()))
        })?;
        Self::from_json_str(&raw, &path.display().to_string())
    }

    pub fn from_json_str(raw: &str, origin: &str) -> Result<Self, AppError> {
        let value: Value = serde_json::from_str(raw).map_err(|e| {
            AppError::Config(format!("Failed to parse address book {origin}: {e}"))
        })?;
        Self::from_value(value)
    }

    pub fn from_value(raw: Value) -> Result<Self, AppError> {
        let Some(root) = raw.as_object() else {
            return Err(AppError::Config(
                "Address book must be an object keyed by network name".to_string(),
            ));
        };

        let networks = root
            .iter()
            .map(|(network, entry)| {
                let parsed = NetworkAddresses {
                    meta: NetworkMeta::from_entry(entry),
                    entry: entry.clone(),
                };
                (network.clone(), parsed)
            })
            .collect();

        Ok(Self { raw, networks })
    }

    /// The document exactly as it was parsed.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Raw sub-document for one network.
    pub fn raw_network(&self, network: &str) -> Option<&Value> {
        self.raw.get(network)
    }

    pub fn network(&self, network: &str) -> Option<&NetworkAddresses> {
        self.networks.get(network)
    }

    pub fn network_names(&self) -> impl Iterator<Item = &str> {
        self.networks.keys().map(String::as_str)
    }

    /// Resolves `category.key` on `network`.
    ///
    /// `Ok(None)` for an absent, empty or zero address; `Err` for a value that is
    /// present but not a 20-byte hex address string.
    pub fn lookup(
        &self,
        network: &str,
        category: Category,
        key: &str,
    ) -> Result<Option<Address>, AppError> {
        let entries = self
            .networks
            .get(network)
            .ok_or_else(|| AppError::UnknownNetwork(network.to_string()))?;
        let Some(raw) = entries.raw(network, category, key)? else {
            return Ok(None);
        };
        if raw.trim().is_empty() {
            return Ok(None);
        }
        let address = parse_address_hex(raw).ok_or_else(|| {
            AppError::InvalidAddress(format!("{network}.{category}.{key} = {raw}"))
        })?;
        if address.is_zero() {
            return Ok(None);
        }
        Ok(Some(address))
    }
}
