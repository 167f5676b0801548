// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@oxidity.com>

use crate::app::config::{MissingPolicy, RegistrySettings};
use crate::domain::constants::{BINDING_TABLE, NETWORK_MANTLE_SEPOLIA};
use crate::domain::contracts::{BindingSpec, Category, ContractName};
use crate::domain::error::AppError;
use crate::infrastructure::data::abi::AbiRegistry;
use crate::infrastructure::data::address_book::AddressBook;
use alloy::primitives::Address;
use alloy_json_abi::JsonAbi;
use lazy_static::lazy_static;
use serde::Serialize;
use serde_json::{Map, Value, json};
use std::collections::BTreeMap;
use std::sync::Arc;

lazy_static! {
    static ref BUNDLED: Result<Registry, AppError> = build_bundled();
}

fn build_bundled() -> Result<Registry, AppError> {
    Registry::from_parts(
        AbiRegistry::bundled()?,
        AddressBook::bundled()?,
        &[NETWORK_MANTLE_SEPOLIA.to_string()],
        MissingPolicy::Warn,
    )
}

/// A contract's address on one network together with its interface description.
#[derive(Debug, Clone, PartialEq)]
pub struct ContractBinding {
    pub address: Address,
    pub abi: Arc<JsonAbi>,
}

impl ContractBinding {
    pub fn to_json(&self, include_abi: bool) -> Result<Value, AppError> {
        let abi = if include_abi {
            serde_json::to_value(self.abi.as_ref()).map_err(anyhow::Error::from)?
        } else {
            json!({
                "functions": self.abi.functions().count(),
                "events": self.abi.events().count(),
                "errors": self.abi.errors().count(),
            })
        };
        Ok(json!({
            "address": self.address.to_checksum(None),
            "abi": abi,
        }))
    }
}

/// An address book entry the join could not bind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingEntry {
    pub network: String,
    pub category: Category,
    pub key: String,
    pub abi: ContractName,
}

#[derive(Debug, Clone, PartialEq)]
struct JoinedEntry {
    spec: BindingSpec,
    binding: ContractBinding,
}

/// Joined bindings for one network, in binding-table order.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkContracts {
    network: String,
    chain_id: Option<u64>,
    entries: Vec<JoinedEntry>,
}

impl NetworkContracts {
    pub fn network(&self) -> &str {
        &self.network
    }

    pub fn chain_id(&self) -> Option<u64> {
        self.chain_id
    }

    /// Non-pair binding by address book key (e.g. `"MockIDRX"`, `"GoldVault"`).
    pub fn contract(&self, key: &str) -> Option<&ContractBinding> {
        self.entries
            .iter()
            .find(|e| !e.spec.is_pair() && e.spec.key == key)
            .map(|e| &e.binding)
    }

    /// Liquidity pair binding by pair key (e.g. `"IDRX_USDC"`).
    pub fn pair(&self, key: &str) -> Option<&ContractBinding> {
        self.entries
            .iter()
            .find(|e| e.spec.is_pair() && e.spec.key == key)
            .map(|e| &e.binding)
    }

    pub fn category(&self, category: Category) -> impl Iterator<Item = (&str, &ContractBinding)> {
        self.entries
            .iter()
            .filter(move |e| e.spec.category == category)
            .map(|e| (e.spec.key, &e.binding))
    }

    pub fn contracts(&self) -> impl Iterator<Item = (&str, &ContractBinding)> {
        self.entries
            .iter()
            .filter(|e| !e.spec.is_pair())
            .map(|e| (e.spec.key, &e.binding))
    }

    pub fn pairs(&self) -> impl Iterator<Item = (&str, &ContractBinding)> {
        self.category(Category::Pairs)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `{ "<Name>": {address, abi}, ..., "Pairs": { "<PAIR>": {address, abi} } }`
    pub fn to_json(&self, include_abi: bool) -> Result<Value, AppError> {
        let mut out = Map::new();
        for (key, binding) in self.contracts() {
            out.insert(key.to_string(), binding.to_json(include_abi)?);
        }
        let mut pairs = Map::new();
        for (key, binding) in self.pairs() {
            pairs.insert(key.to_string(), binding.to_json(include_abi)?);
        }
        out.insert("Pairs".to_string(), Value::Object(pairs));
        Ok(Value::Object(out))
    }
}

/// Binds every row of `table` that has an address on `network`.
///
/// Gaps are returned alongside the bindings under `MissingPolicy::Warn` and
/// abort the join under `MissingPolicy::Strict`. Malformed addresses and
/// malformed category maps always fail.
pub fn join_network(
    network: &str,
    abis: &AbiRegistry,
    addresses: &AddressBook,
    table: &[BindingSpec],
    policy: MissingPolicy,
) -> Result<(NetworkContracts, Vec<MissingEntry>), AppError> {
    let network_entry = addresses
        .network(network)
        .ok_or_else(|| AppError::UnknownNetwork(network.to_string()))?;
    network_entry.validate(network)?;

    let mut entries = Vec::with_capacity(table.len());
    let mut missing = Vec::new();

    for spec in table {
        let abi = abis.get(spec.abi).ok_or_else(|| {
            AppError::Initialization(format!("ABI {} not loaded", spec.abi))
        })?;

        let Some(address) = addresses.lookup(network, spec.category, spec.key)? else {
            if policy == MissingPolicy::Strict {
                return Err(AppError::MissingBinding {
                    network: network.to_string(),
                    category: spec.category.to_string(),
                    key: spec.key.to_string(),
                });
            }
            tracing::warn!(
                target: "registry",
                network,
                category = %spec.category,
                key = spec.key,
                "Address missing; binding skipped"
            );
            missing.push(MissingEntry {
                network: network.to_string(),
                category: spec.category,
                key: spec.key.to_string(),
                abi: spec.abi,
            });
            continue;
        };

        entries.push(JoinedEntry {
            spec: *spec,
            binding: ContractBinding {
                address,
                abi: Arc::clone(abi),
            },
        });
    }

    let contracts = NetworkContracts {
        network: network.to_string(),
        chain_id: network_entry.meta.chain_id,
        entries,
    };

    tracing::info!(
        target: "registry",
        network,
        chain_id = ?contracts.chain_id,
        bound = contracts.len(),
        missing = missing.len(),
        "Joined contract bindings"
    );

    Ok((contracts, missing))
}

/// ABIs, the address book passthrough, and the joined per-network bindings.
#[derive(Debug, Clone, PartialEq)]
pub struct Registry {
    abis: AbiRegistry,
    addresses: AddressBook,
    contracts: BTreeMap<String, NetworkContracts>,
    missing: Vec<MissingEntry>,
    policy: MissingPolicy,
}

impl Registry {
    /// Process-wide registry built from the bundled artifacts for Mantle Sepolia.
    pub fn bundled() -> Result<&'static Registry, AppError> {
        match &*BUNDLED {
            Ok(registry) => Ok(registry),
            Err(e) => Err(AppError::Initialization(format!(
                "bundled registry is unusable: {e}"
            ))),
        }
    }

    pub fn load(settings: &RegistrySettings) -> Result<Self, AppError> {
        settings.validate()?;
        let abis = match settings.abi_dir_path()? {
            Some(dir) => AbiRegistry::load_from_directory(&dir)?,
            None => AbiRegistry::bundled()?,
        };
        let addresses = match settings.address_book_file()? {
            Some(path) => AddressBook::load_from_file(&path)?,
            None => AddressBook::bundled()?,
        };
        Self::from_parts(abis, addresses, &settings.networks, settings.missing_policy)
    }

    pub fn from_parts(
        abis: AbiRegistry,
        addresses: AddressBook,
        networks: &[String],
        policy: MissingPolicy,
    ) -> Result<Self, AppError> {
        let mut contracts = BTreeMap::new();
        let mut missing = Vec::new();
        for network in networks {
            if contracts.contains_key(network) {
                continue;
            }
            let (joined, gaps) = join_network(network, &abis, &addresses, BINDING_TABLE, policy)?;
            contracts.insert(network.clone(), joined);
            missing.extend(gaps);
        }

        Ok(Self {
            abis,
            addresses,
            contracts,
            missing,
            policy,
        })
    }

    pub fn abis(&self) -> &AbiRegistry {
        &self.abis
    }

    pub fn abi(&self, name: ContractName) -> Option<&Arc<JsonAbi>> {
        self.abis.get(name)
    }

    /// The address book document as loaded.
    pub fn addresses(&self) -> &Value {
        self.addresses.raw()
    }

    pub fn address_book(&self) -> &AddressBook {
        &self.addresses
    }

    pub fn network_addresses(&self, network: &str) -> Option<&Value> {
        self.addresses.raw_network(network)
    }

    pub fn mantle_sepolia(&self) -> Option<&Value> {
        self.network_addresses(NETWORK_MANTLE_SEPOLIA)
    }

    /// Every network present in the address book, joined or not.
    pub fn network_names(&self) -> impl Iterator<Item = &str> {
        self.addresses.network_names()
    }

    pub fn contracts(&self) -> &BTreeMap<String, NetworkContracts> {
        &self.contracts
    }

    pub fn network(&self, network: &str) -> Option<&NetworkContracts> {
        self.contracts.get(network)
    }

    pub fn missing(&self) -> &[MissingEntry] {
        &self.missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn policy(&self) -> MissingPolicy {
        self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const IDRX: &str = "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";
    const IDRX_USDC: &str = "0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb";

    fn sparse_book() -> AddressBook {
        AddressBook::from_value(json!({
            "localnet": {
                "chainId": 31337,
                "tokens": { "MockIDRX": IDRX },
                "pairs": { "IDRX_USDC": IDRX_USDC }
            }
        }))
        .unwrap()
    }

    #[test]
    fn join_binds_tokens_and_pairs() {
        let abis = AbiRegistry::bundled().unwrap();
        let (joined, missing) = join_network(
            "localnet",
            &abis,
            &sparse_book(),
            BINDING_TABLE,
            MissingPolicy::Warn,
        )
        .unwrap();

        let idrx = joined.contract("MockIDRX").unwrap();
        assert_eq!(format!("{:#x}", idrx.address), IDRX);
        assert_eq!(idrx.abi, *abis.get(ContractName::MockIDRX).unwrap());

        let pair = joined.pair("IDRX_USDC").unwrap();
        assert_eq!(format!("{:#x}", pair.address), IDRX_USDC);
        assert_eq!(pair.abi, *abis.get(ContractName::UniswapV2Pair).unwrap());

        assert_eq!(joined.chain_id(), Some(31337));
        assert_eq!(joined.len(), 2);
        assert_eq!(missing.len(), BINDING_TABLE.len() - 2);
    }

    #[test]
    fn pairs_are_not_reachable_as_contracts() {
        let abis = AbiRegistry::bundled().unwrap();
        let (joined, _) = join_network(
            "localnet",
            &abis,
            &sparse_book(),
            BINDING_TABLE,
            MissingPolicy::Warn,
        )
        .unwrap();
        assert!(joined.contract("IDRX_USDC").is_none());
        assert!(joined.pair("MockIDRX").is_none());
        assert_eq!(joined.category(Category::Tokens).count(), 1);
    }

    #[test]
    fn warn_policy_records_gap_without_failing() {
        let abis = AbiRegistry::bundled().unwrap();
        let (joined, missing) = join_network(
            "localnet",
            &abis,
            &sparse_book(),
            BINDING_TABLE,
            MissingPolicy::Warn,
        )
        .unwrap();
        assert!(joined.contract("XAUT").is_none());
        assert!(missing.iter().any(|m| m.category == Category::Tokens
            && m.key == "XAUT"
            && m.abi == ContractName::XAUT));
    }

    #[test]
    fn strict_policy_fails_on_first_gap() {
        let abis = AbiRegistry::bundled().unwrap();
        let err = join_network(
            "localnet",
            &abis,
            &sparse_book(),
            BINDING_TABLE,
            MissingPolicy::Strict,
        )
        .unwrap_err();
        match err {
            AppError::MissingBinding { network, category, key } => {
                assert_eq!(network, "localnet");
                assert_eq!(category, "tokens");
                assert_eq!(key, "MockUSDC");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn custom_tables_join_without_code_changes() {
        let abis = AbiRegistry::bundled().unwrap();
        let table = [BindingSpec::new(
            Category::Pairs,
            "IDRX_USDC",
            ContractName::UniswapV2Pair,
        )];
        let (joined, missing) = join_network(
            "localnet",
            &abis,
            &sparse_book(),
            &table,
            MissingPolicy::Strict,
        )
        .unwrap();
        assert_eq!(joined.len(), 1);
        assert!(missing.is_empty());
    }

    #[test]
    fn unknown_network_is_rejected() {
        let abis = AbiRegistry::bundled().unwrap();
        let err = join_network(
            "mainnet",
            &abis,
            &sparse_book(),
            BINDING_TABLE,
            MissingPolicy::Warn,
        )
        .unwrap_err();
        assert!(matches!(err, AppError::UnknownNetwork(_)));
    }

    #[test]
    fn repeated_target_networks_are_joined_once() {
        let registry = Registry::from_parts(
            AbiRegistry::bundled().unwrap(),
            sparse_book(),
            &["localnet".to_string(), "localnet".to_string()],
            MissingPolicy::Warn,
        )
        .unwrap();
        assert_eq!(registry.contracts().len(), 1);
        assert_eq!(registry.missing().len(), BINDING_TABLE.len() - 2);
    }

    #[test]
    fn malformed_category_map_fails_only_when_joined() {
        let book = AddressBook::from_value(json!({
            "localnet": { "tokens": { "MockIDRX": IDRX } },
            "broken": { "chainId": "five", "tokens": ["MockIDRX"] }
        }))
        .unwrap();
        let abis = AbiRegistry::bundled().unwrap();
        let registry = Registry::from_parts(
            abis.clone(),
            book.clone(),
            &["localnet".to_string()],
            MissingPolicy::Warn,
        )
        .unwrap();
        assert!(registry.network_addresses("broken").is_some());

        let err = join_network("broken", &abis, &book, BINDING_TABLE, MissingPolicy::Warn)
            .unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[test]
    fn json_view_nests_pairs() {
        let abis = AbiRegistry::bundled().unwrap();
        let (joined, _) = join_network(
            "localnet",
            &abis,
            &sparse_book(),
            BINDING_TABLE,
            MissingPolicy::Warn,
        )
        .unwrap();
        let view = joined.to_json(false).unwrap();
        assert!(view["MockIDRX"]["address"].as_str().is_some());
        assert!(view["Pairs"]["IDRX_USDC"]["abi"]["functions"].as_u64().unwrap() > 0);
        assert!(view.get("XAUT").is_none());

        let full = joined.to_json(true).unwrap();
        assert!(full["MockIDRX"]["abi"].is_array());
    }
}
