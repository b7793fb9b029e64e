//! Protocol roles exposed as flat address constants

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::errors::BookError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    PoolAddressesProvider,
    Pool,
    PoolConfigurator,
    Oracle,
    AclAdmin,
    AclManager,
    AaveProtocolDataProvider,
    PoolImpl,
    PoolConfiguratorImpl,
    DefaultIncentivesController,
    EmissionManager,
    Collector,
    #[serde(rename = "DEFAULT_A_TOKEN_IMPL_REV_1")]
    DefaultATokenImplRev1,
    #[serde(rename = "DEFAULT_VARIABLE_DEBT_TOKEN_IMPL_REV_1")]
    DefaultVariableDebtTokenImplRev1,
    PoolAddressesProviderRegistry,
    RepayWithCollateralAdapter,
    SwapCollateralAdapter,
    UiIncentiveDataProvider,
    UiPoolDataProvider,
    WalletBalanceProvider,
    WethGateway,
}

impl Role {
    pub const ALL: [Role; 21] = [
        Role::PoolAddressesProvider,
        Role::Pool,
        Role::PoolConfigurator,
        Role::Oracle,
        Role::AclAdmin,
        Role::AclManager,
        Role::AaveProtocolDataProvider,
        Role::PoolImpl,
        Role::PoolConfiguratorImpl,
        Role::DefaultIncentivesController,
        Role::EmissionManager,
        Role::Collector,
        Role::DefaultATokenImplRev1,
        Role::DefaultVariableDebtTokenImplRev1,
        Role::PoolAddressesProviderRegistry,
        Role::RepayWithCollateralAdapter,
        Role::SwapCollateralAdapter,
        Role::UiIncentiveDataProvider,
        Role::UiPoolDataProvider,
        Role::WalletBalanceProvider,
        Role::WethGateway,
    ];

    /// Constant name as emitted by the generator.
    pub const fn constant_name(self) -> &'static str {
        match self {
            Role::PoolAddressesProvider => "POOL_ADDRESSES_PROVIDER",
            Role::Pool => "POOL",
            Role::PoolConfigurator => "POOL_CONFIGURATOR",
            Role::Oracle => "ORACLE",
            Role::AclAdmin => "ACL_ADMIN",
            Role::AclManager => "ACL_MANAGER",
            Role::AaveProtocolDataProvider => "AAVE_PROTOCOL_DATA_PROVIDER",
            Role::PoolImpl => "POOL_IMPL",
            Role::PoolConfiguratorImpl => "POOL_CONFIGURATOR_IMPL",
            Role::DefaultIncentivesController => "DEFAULT_INCENTIVES_CONTROLLER",
            Role::EmissionManager => "EMISSION_MANAGER",
            Role::Collector => "COLLECTOR",
            Role::DefaultATokenImplRev1 => "DEFAULT_A_TOKEN_IMPL_REV_1",
            Role::DefaultVariableDebtTokenImplRev1 => "DEFAULT_VARIABLE_DEBT_TOKEN_IMPL_REV_1",
            Role::PoolAddressesProviderRegistry => "POOL_ADDRESSES_PROVIDER_REGISTRY",
            Role::RepayWithCollateralAdapter => "REPAY_WITH_COLLATERAL_ADAPTER",
            Role::SwapCollateralAdapter => "SWAP_COLLATERAL_ADAPTER",
            Role::UiIncentiveDataProvider => "UI_INCENTIVE_DATA_PROVIDER",
            Role::UiPoolDataProvider => "UI_POOL_DATA_PROVIDER",
            Role::WalletBalanceProvider => "WALLET_BALANCE_PROVIDER",
            Role::WethGateway => "WETH_GATEWAY",
        }
    }

    /// Solidity interface the contract implements, when the generator names one.
    pub const fn interface_name(self) -> Option<&'static str> {
        match self {
            Role::PoolAddressesProvider => Some("IPoolAddressesProvider"),
            Role::Pool => Some("IPool"),
            Role::PoolConfigurator => Some("IPoolConfigurator"),
            Role::Oracle => Some("IAaveOracle"),
            Role::AclManager => Some("IACLManager"),
            Role::AaveProtocolDataProvider => Some("IPoolDataProvider"),
            Role::Collector => Some("ICollector"),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.constant_name())
    }
}

impl FromStr for Role {
    type Err = BookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.constant_name() == s)
            .ok_or_else(|| BookError::UnknownRoleName { name: s.to_string() })
    }
}
