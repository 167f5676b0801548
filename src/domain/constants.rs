// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@oxidity.com>

use crate::domain::contracts::{BindingSpec, Category, ContractName};

// =============================================================================
// NETWORK CONSTANTS
// =============================================================================

pub const NETWORK_MANTLE_SEPOLIA: &str = "mantleSepolia";
pub const CHAIN_MANTLE_SEPOLIA: u64 = 5003;

pub const DEFAULT_NETWORK: &str = NETWORK_MANTLE_SEPOLIA;

// =============================================================================
// BUNDLED ARTIFACTS
// =============================================================================

pub const BUNDLED_ADDRESS_BOOK: &str = include_str!("../../data/abi/addresses.json");

pub fn bundled_abi_source(name: ContractName) -> &'static str {
    match name {
        ContractName::MockIDRX => include_str!("../../data/abi/MockIDRX.json"),
        ContractName::MockUSDC => include_str!("../../data/abi/MockUSDC.json"),
        ContractName::XAUT => include_str!("../../data/abi/XAUT.json"),
        ContractName::IdentityRegistry => include_str!("../../data/abi/IdentityRegistry.json"),
        ContractName::UniswapV2Factory => include_str!("../../data/abi/UniswapV2Factory.json"),
        ContractName::UniswapV2Router02 => include_str!("../../data/abi/UniswapV2Router02.json"),
        ContractName::UniswapV2Pair => include_str!("../../data/abi/UniswapV2Pair.json"),
        ContractName::SwapRouter => include_str!("../../data/abi/SwapRouter.json"),
        ContractName::GoldVault => include_str!("../../data/abi/GoldVault.json"),
    }
}

// =============================================================================
// JOIN TABLE
// =============================================================================

/// Address book entries joined per network. Order is the output order.
pub const BINDING_TABLE: &[BindingSpec] = &[
    BindingSpec::new(Category::Tokens, "MockIDRX", ContractName::MockIDRX),
    BindingSpec::new(Category::Tokens, "MockUSDC", ContractName::MockUSDC),
    BindingSpec::new(Category::Tokens, "XAUT", ContractName::XAUT),
    BindingSpec::new(
        Category::Infrastructure,
        "IdentityRegistry",
        ContractName::IdentityRegistry,
    ),
    BindingSpec::new(
        Category::Infrastructure,
        "UniswapV2Factory",
        ContractName::UniswapV2Factory,
    ),
    BindingSpec::new(
        Category::Infrastructure,
        "UniswapV2Router02",
        ContractName::UniswapV2Router02,
    ),
    BindingSpec::new(Category::Protocol, "SwapRouter", ContractName::SwapRouter),
    BindingSpec::new(Category::Protocol, "GoldVault", ContractName::GoldVault),
    // Liquidity pairs
    BindingSpec::new(Category::Pairs, "IDRX_USDC", ContractName::UniswapV2Pair),
    BindingSpec::new(Category::Pairs, "XAUT_USDC", ContractName::UniswapV2Pair),
];
