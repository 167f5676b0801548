// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@mitander.dev>

use crate::app::config::{MissingPolicy, RegistrySettings};
use crate::domain::contracts::ContractName;
use crate::domain::error::AppError;
use crate::infrastructure::data::registry::{MissingEntry, Registry};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Parser, Debug)]
#[command(name = "auroom-registry", author, version, about = "AuRoom contract registry")]
pub struct Cli {
    /// Path to config file (default: registry.{toml,yaml,json} if present)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Fail on any address book gap (overrides config/env)
    #[arg(long, global = true, default_value_t = false)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// List networks in the address book
    Networks,
    /// Print joined bindings for a network, or a single contract/pair
    Show {
        network: String,
        name: Option<String>,
        /// Include full ABI documents instead of entry counts
        #[arg(long, default_value_t = false)]
        abi: bool,
    },
    /// Print the ABI document of a contract
    Abi { contract: String },
    /// Join every configured network and report gaps
    Check,
}

impl Cli {
    /// Command line flags win over config file and environment.
    pub fn apply_overrides(&self, settings: &mut RegistrySettings) {
        if self.strict {
            settings.missing_policy = MissingPolicy::Strict;
        }
    }
}

/// Output of `check`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckReport {
    pub networks: Vec<String>,
    pub bound: usize,
    pub missing: Vec<MissingEntry>,
}

impl CheckReport {
    pub fn from_registry(registry: &Registry) -> Self {
        Self {
            networks: registry.contracts().keys().cloned().collect(),
            bound: registry.contracts().values().map(|c| c.len()).sum(),
            missing: registry.missing().to_vec(),
        }
    }

    pub fn ensure_complete(&self) -> Result<(), AppError> {
        if self.missing.is_empty() {
            return Ok(());
        }
        Err(AppError::Validation {
            field: "addresses".to_string(),
            message: format!("{} binding(s) missing", self.missing.len()),
        })
    }
}

pub fn networks_report(registry: &Registry) -> Value {
    let networks = registry
        .network_names()
        .map(|name| {
            let meta = registry.address_book().network(name).map(|n| &n.meta);
            json!({
                "network": name,
                "name": meta.and_then(|m| m.name.clone()),
                "chainId": meta.and_then(|m| m.chain_id),
                "joined": registry.network(name).is_some(),
            })
        })
        .collect();
    Value::Array(networks)
}

/// Bindings of `network`, or one of them; `name` is tried as a contract, then as a pair.
pub fn show_report(
    registry: &Registry,
    network: &str,
    name: Option<&str>,
    include_abi: bool,
) -> Result<Value, AppError> {
    let Some(contracts) = registry.network(network) else {
        if registry.network_addresses(network).is_some() {
            return Err(AppError::NetworkNotJoined(network.to_string()));
        }
        return Err(AppError::UnknownNetwork(network.to_string()));
    };

    let Some(name) = name else {
        return Ok(json!({
            "network": contracts.network(),
            "chainId": contracts.chain_id(),
            "contracts": contracts.to_json(include_abi)?,
        }));
    };

    let binding = contracts
        .contract(name)
        .or_else(|| contracts.pair(name))
        .ok_or_else(|| AppError::Validation {
            field: "name".to_string(),
            message: format!("no binding named '{name}' on {network}"),
        })?;
    binding.to_json(include_abi)
}

pub fn abi_report(registry: &Registry, contract: &str) -> Result<Value, AppError> {
    let name: ContractName = contract.parse()?;
    let abi = registry
        .abi(name)
        .ok_or_else(|| AppError::Initialization(format!("ABI {name} not loaded")))?;
    Ok(serde_json::to_value(abi.as_ref()).map_err(anyhow::Error::from)?)
}

/// Runs `command` against `registry`. `check` prints its report before failing
/// on gaps, so the caller always gets the JSON.
pub fn run(registry: &Registry, command: &Command) -> Result<(), AppError> {
    let output = match command {
        Command::Networks => networks_report(registry),
        Command::Show { network, name, abi } => {
            show_report(registry, network, name.as_deref(), *abi)?
        }
        Command::Abi { contract } => abi_report(registry, contract)?,
        Command::Check => {
            let report = CheckReport::from_registry(registry);
            print_json(&serde_json::to_value(&report).map_err(anyhow::Error::from)?)?;
            return report.ensure_complete();
        }
    };
    print_json(&output)
}

fn print_json(value: &Value) -> Result<(), AppError> {
    let body = serde_json::to_string_pretty(value).map_err(anyhow::Error::from)?;
    println!("{body}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::data::abi::AbiRegistry;
    use crate::infrastructure::data::address_book::AddressBook;

    const IDRX: &str = "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";
    const IDRX_USDC: &str = "0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb";

    fn sparse_registry() -> Registry {
        let book = AddressBook::from_value(json!({
            "localnet": {
                "chainId": 31337,
                "tokens": { "MockIDRX": IDRX },
                "pairs": { "IDRX_USDC": IDRX_USDC }
            },
            "otherNet": { "chainId": 1 }
        }))
        .unwrap();
        Registry::from_parts(
            AbiRegistry::bundled().unwrap(),
            book,
            &["localnet".to_string()],
            MissingPolicy::Warn,
        )
        .unwrap()
    }

    #[test]
    fn strict_flag_overrides_configured_policy() {
        let cli = Cli::try_parse_from(["auroom-registry", "check", "--strict"]).unwrap();
        let mut settings = RegistrySettings::default();
        cli.apply_overrides(&mut settings);
        assert_eq!(settings.missing_policy, MissingPolicy::Strict);
        assert_eq!(cli.command, Command::Check);

        let cli = Cli::try_parse_from(["auroom-registry", "networks"]).unwrap();
        let mut settings = RegistrySettings {
            missing_policy: MissingPolicy::Strict,
            ..RegistrySettings::default()
        };
        cli.apply_overrides(&mut settings);
        assert_eq!(settings.missing_policy, MissingPolicy::Strict);
    }

    #[test]
    fn check_report_counts_gaps_and_fails() {
        let report = CheckReport::from_registry(&sparse_registry());
        assert_eq!(report.networks, vec!["localnet"]);
        assert_eq!(report.bound, 2);
        assert_eq!(report.missing.len(), 8);
        assert!(matches!(
            report.ensure_complete(),
            Err(AppError::Validation { .. })
        ));

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["missing"][0]["category"], "tokens");
        assert_eq!(value["missing"][0]["key"], "MockUSDC");
    }

    #[test]
    fn check_report_passes_for_bundled_registry() {
        let report = CheckReport::from_registry(Registry::bundled().unwrap());
        assert!(report.ensure_complete().is_ok());
        assert_eq!(report.bound, 10);
    }

    #[test]
    fn show_falls_back_from_contract_to_pair() {
        let registry = sparse_registry();
        let idrx = show_report(&registry, "localnet", Some("MockIDRX"), false).unwrap();
        assert_eq!(
            idrx["address"].as_str().unwrap().to_lowercase(),
            IDRX
        );
        let pair = show_report(&registry, "localnet", Some("IDRX_USDC"), false).unwrap();
        assert_eq!(
            pair["address"].as_str().unwrap().to_lowercase(),
            IDRX_USDC
        );
        let err = show_report(&registry, "localnet", Some("XAUT"), false).unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[test]
    fn show_whole_network_nests_pairs() {
        let registry = sparse_registry();
        let view = show_report(&registry, "localnet", None, false).unwrap();
        assert_eq!(view["chainId"], 31337);
        assert!(view["contracts"]["Pairs"]["IDRX_USDC"].is_object());
    }

    #[test]
    fn show_separates_unjoined_from_unknown_networks() {
        let registry = sparse_registry();
        let err = show_report(&registry, "otherNet", None, false).unwrap_err();
        assert!(matches!(err, AppError::NetworkNotJoined(ref n) if n == "otherNet"));
        let err = show_report(&registry, "mainnet", None, false).unwrap_err();
        assert!(matches!(err, AppError::UnknownNetwork(_)));
    }

    #[test]
    fn networks_report_flags_joined_networks() {
        let report = networks_report(&sparse_registry());
        let rows = report.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        let local = rows.iter().find(|r| r["network"] == "localnet").unwrap();
        assert_eq!(local["joined"], true);
        let other = rows.iter().find(|r| r["network"] == "otherNet").unwrap();
        assert_eq!(other["joined"], false);
    }

    #[test]
    fn abi_report_parses_contract_names() {
        let registry = sparse_registry();
        assert!(abi_report(&registry, "goldvault").unwrap().is_array());
        assert!(abi_report(&registry, "Vault").is_err());
    }
}
