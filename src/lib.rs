// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@oxidity.com>

//! AuRoom protocol contract registry: bundled ABIs, the per-network address
//! book, and `{address, abi}` bindings joined from both.

pub mod app;
pub mod common;
pub mod domain;
pub mod infrastructure;

pub use app::config::{MissingPolicy, RegistrySettings};
pub use domain::contracts::{BindingSpec, Category, ContractName};
pub use domain::error::AppError;
pub use infrastructure::data::abi::AbiRegistry;
pub use infrastructure::data::address_book::{AddressBook, NetworkAddresses, NetworkMeta};
pub use infrastructure::data::registry::{
    ContractBinding, MissingEntry, NetworkContracts, Registry, join_network,
};
