// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@oxidity.com>

use crate::domain::error::AppError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Contracts that ship an ABI with this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ContractName {
    MockIDRX,
    MockUSDC,
    XAUT,
    IdentityRegistry,
    UniswapV2Factory,
    UniswapV2Router02,
    UniswapV2Pair,
    SwapRouter,
    GoldVault,
}

impl ContractName {
    pub const ALL: [ContractName; 9] = [
        ContractName::MockIDRX,
        ContractName::MockUSDC,
        ContractName::XAUT,
        ContractName::IdentityRegistry,
        ContractName::UniswapV2Factory,
        ContractName::UniswapV2Router02,
        ContractName::UniswapV2Pair,
        ContractName::SwapRouter,
        ContractName::GoldVault,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContractName::MockIDRX => "MockIDRX",
            ContractName::MockUSDC => "MockUSDC",
            ContractName::XAUT => "XAUT",
            ContractName::IdentityRegistry => "IdentityRegistry",
            ContractName::UniswapV2Factory => "UniswapV2Factory",
            ContractName::UniswapV2Router02 => "UniswapV2Router02",
            ContractName::UniswapV2Pair => "UniswapV2Pair",
            ContractName::SwapRouter => "SwapRouter",
            ContractName::GoldVault => "GoldVault",
        }
    }

    /// File name of the ABI artifact inside an ABI directory.
    pub fn file_name(&self) -> String {
        format!("{}.json", self.as_str())
    }
}

impl fmt::Display for ContractName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContractName {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ContractName::ALL
            .iter()
            .copied()
            .find(|name| name.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| AppError::Validation {
                field: "contract".to_string(),
                message: format!("unknown contract '{wanted}'"),
            })
    }
}

/// Role categories of the address book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Tokens,
    Infrastructure,
    Protocol,
    Pairs,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Tokens,
        Category::Infrastructure,
        Category::Protocol,
        Category::Pairs,
    ];

    /// Key of this category inside a network entry of the address book.
    pub fn key(&self) -> &'static str {
        match self {
            Category::Tokens => "tokens",
            Category::Infrastructure => "infrastructure",
            Category::Protocol => "protocol",
            Category::Pairs => "pairs",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| AppError::Validation {
                field: "category".to_string(),
                message: format!("unknown category '{wanted}'"),
            })
    }
}

/// One row of the join: the address stored under `category.key` is bound to `abi`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BindingSpec {
    pub category: Category,
    pub key: &'static str,
    pub abi: ContractName,
}

impl BindingSpec {
    pub const fn new(category: Category, key: &'static str, abi: ContractName) -> Self {
        Self { category, key, abi }
    }

    pub fn is_pair(&self) -> bool {
        self.category == Category::Pairs
    }
}
