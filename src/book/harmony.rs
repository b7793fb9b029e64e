// AUTOGENERATED - MANUALLY CHANGES WILL BE REVERTED BY THE GENERATOR
//! Aave V3 Harmony (chain id 1666600000)

use crate::types::{AssetEntry, Network, NetworkAddressBook, Role};

pub const CHAIN_ID: u64 = 1_666_600_000;

pub static ROLES: [(Role, &str); 19] = [
    // IPoolAddressesProvider https://explorer.harmony.one/address/0xa97684ead0e402dC232d5A977953DF7ECBaB3CDb
    (Role::PoolAddressesProvider, "0xa97684ead0e402dC232d5A977953DF7ECBaB3CDb"),
    // IPool https://explorer.harmony.one/address/0x794a61358D6845594F94dc1DB02A252b5b4814aD
    (Role::Pool, "0x794a61358D6845594F94dc1DB02A252b5b4814aD"),
    // IPoolConfigurator https://explorer.harmony.one/address/0x8145eddDf43f50276641b55bd3AD95944510021E
    (Role::PoolConfigurator, "0x8145eddDf43f50276641b55bd3AD95944510021E"),
    // IAaveOracle https://explorer.harmony.one/address/0x3C90887Ede8D65ccb2777A5d577beAb2548280AD
    (Role::Oracle, "0x3C90887Ede8D65ccb2777A5d577beAb2548280AD"),
    // https://explorer.harmony.one/address/0xb2f0C5f37f4beD2cB51C44653cD5D84866BDcd2D
    (Role::AclAdmin, "0xb2f0C5f37f4beD2cB51C44653cD5D84866BDcd2D"),
    // IACLManager https://explorer.harmony.one/address/0xa72636CbcAa8F5FF95B2cc47F3CDEe83F3294a0B
    (Role::AclManager, "0xa72636CbcAa8F5FF95B2cc47F3CDEe83F3294a0B"),
    // IPoolDataProvider https://explorer.harmony.one/address/0x69FA688f1Dc47d4B5d8029D5a35FB7a548310654
    (Role::AaveProtocolDataProvider, "0x69FA688f1Dc47d4B5d8029D5a35FB7a548310654"),
    // https://explorer.harmony.one/address/0xDF9e4ABdbd94107932265319479643D3B05809dc
    (Role::PoolImpl, "0xDF9e4ABdbd94107932265319479643D3B05809dc"),
    // https://explorer.harmony.one/address/0xD6FA681E22306b0F4E605B979b7c9a1dFa865ade
    (Role::PoolConfiguratorImpl, "0xD6FA681E22306b0F4E605B979b7c9a1dFa865ade"),
    // https://explorer.harmony.one/address/0x929EC64c34a17401F460460D4B9390518E5B473e
    (Role::DefaultIncentivesController, "0x929EC64c34a17401F460460D4B9390518E5B473e"),
    // https://explorer.harmony.one/address/0x048f2228D7Bf6776f99aB50cB1b1eaB4D1d4cA73
    (Role::EmissionManager, "0x048f2228D7Bf6776f99aB50cB1b1eaB4D1d4cA73"),
    // ICollector https://explorer.harmony.one/address/0x8A020d92D6B119978582BE4d3EdFdC9F7b28BF31
    (Role::Collector, "0x8A020d92D6B119978582BE4d3EdFdC9F7b28BF31"),
    // https://explorer.harmony.one/address/0xa5ba6E5EC19a1Bf23C857991c857dB62b2Aa187B
    (Role::DefaultATokenImplRev1, "0xa5ba6E5EC19a1Bf23C857991c857dB62b2Aa187B"),
    // https://explorer.harmony.one/address/0x81387c40EB75acB02757C1Ae55D5936E78c9dEd3
    (Role::DefaultVariableDebtTokenImplRev1, "0x81387c40EB75acB02757C1Ae55D5936E78c9dEd3"),
    // https://explorer.harmony.one/address/0x770ef9f4fe897e59daCc474EF11238303F9552b6
    (Role::PoolAddressesProviderRegistry, "0x770ef9f4fe897e59daCc474EF11238303F9552b6"),
    // https://explorer.harmony.one/address/0xf7a60467aBb8A3240A0382b22E1B03c7d4F59Da5
    (Role::UiIncentiveDataProvider, "0xf7a60467aBb8A3240A0382b22E1B03c7d4F59Da5"),
    // https://explorer.harmony.one/address/0xeC6118C69af50660231108059ab98CD0cF9a6eA1
    (Role::UiPoolDataProvider, "0xeC6118C69af50660231108059ab98CD0cF9a6eA1"),
    // https://explorer.harmony.one/address/0xBc790382B3686abffE4be14A030A96aC6154023a
    (Role::WalletBalanceProvider, "0xBc790382B3686abffE4be14A030A96aC6154023a"),
    // https://explorer.harmony.one/address/0xE387c6053CE8EC9f8C3fa5cE085Af73114a695d3
    (Role::WethGateway, "0xE387c6053CE8EC9f8C3fa5cE085Af73114a695d3"),
];

pub static ASSETS: [(&str, AssetEntry); 8] = [
    (
        "ONE_DAI",
        AssetEntry {
            decimals: 18,
            id: 0,
            underlying: "0xEf977d2f931C1978Db5F6747666fa1eACB0d0339",
            a_token: "0x82E64f49Ed5EC1bC6e43DAD4FC8Af9bb3A2312EE",
            v_token: "0x8619d80FB0141ba7F184CbF22fd724116D9f7ffC",
            interest_rate_strategy: "0x230E0321Cf38F09e247e50Afc7801EA2351fe56F",
            oracle: "0x981AB570aC289938F296b975C524B66FBF1B8774",
        },
    ),
    (
        "LINK",
        AssetEntry {
            decimals: 18,
            id: 1,
            underlying: "0x218532a12a389a4a92fC0C5Fb22901D1c19198aA",
            a_token: "0x191c10Aa4AF7C30e871E70C95dB0E4eb77237530",
            v_token: "0x953A573793604aF8d41F306FEb8274190dB4aE0e",
            interest_rate_strategy: "0x230E0321Cf38F09e247e50Afc7801EA2351fe56F",
            oracle: "0x80f2c02224a2E548FC67c0bF705eBFA825dd5439",
        },
    ),
    (
        "ONE_USDC",
        AssetEntry {
            decimals: 6,
            id: 2,
            underlying: "0x985458E523dB3d53125813eD68c274899e9DfAb4",
            a_token: "0x625E7708f30cA75bfd92586e17077590C60eb4cD",
            v_token: "0xFCCf3cAbbe80101232d343252614b6A3eE81C989",
            interest_rate_strategy: "0x230E0321Cf38F09e247e50Afc7801EA2351fe56F",
            oracle: "0xA9F30e6ED4098e9439B2ac8aEA2d3fc26BcEbb45",
        },
    ),
    (
        "ONE_WBTC",
        AssetEntry {
            decimals: 8,
            id: 3,
            underlying: "0x3095c7557bCb296ccc6e363DE01b760bA031F2d9",
            a_token: "0x078f358208685046a11C85e8ad32895DED33A249",
            v_token: "0x92b42c66840C7AD907b4BF74879FF3eF7c529473",
            interest_rate_strategy: "0x230E0321Cf38F09e247e50Afc7801EA2351fe56F",
            oracle: "0x945fD405773973d286De54E44649cc0d9e264F78",
        },
    ),
    (
        "ONE_ETH",
        AssetEntry {
            decimals: 18,
            id: 4,
            underlying: "0x6983D1E6DEf3690C4d616b13597A09e6193EA013",
            a_token: "0xe50fA9b3c56FfB159cB0FCA61F5c9D750e8128c8",
            v_token: "0x0c84331e39d6658Cd6e6b9ba04736cC4c4734351",
            interest_rate_strategy: "0x230E0321Cf38F09e247e50Afc7801EA2351fe56F",
            oracle: "0x7fc3FCb14eF04A48Bb0c12f0c39CD74C249c37d8",
        },
    ),
    (
        "ONE_USDT",
        AssetEntry {
            decimals: 6,
            id: 5,
            underlying: "0x3C2B8Be99c50593081EAA2A724F0B8285F5aba8f",
            a_token: "0x6ab707Aca953eDAeFBc4fD23bA73294241490620",
            v_token: "0xfb00AC187a8Eb5AFAE4eACE434F493Eb62672df7",
            interest_rate_strategy: "0x230E0321Cf38F09e247e50Afc7801EA2351fe56F",
            oracle: "0x05225Cd708bCa9253789C1374e4337a019e99D56",
        },
    ),
    (
        "ONE_AAVE",
        AssetEntry {
            decimals: 18,
            id: 6,
            underlying: "0xcF323Aad9E522B93F11c352CaA519Ad0E14eB40F",
            a_token: "0xf329e36C7bF6E5E86ce2150875a84Ce77f477375",
            v_token: "0xE80761Ea617F66F96274eA5e8c37f03960ecC679",
            interest_rate_strategy: "0x230E0321Cf38F09e247e50Afc7801EA2351fe56F",
            oracle: "0xFD858c8bC5ac5e10f01018bC78471bb0DC392247",
        },
    ),
    (
        "WONE",
        AssetEntry {
            decimals: 18,
            id: 7,
            underlying: "0xcF664087a5bB0237a0BAd6742852ec6c8d69A27a",
            a_token: "0x6d80113e533a2C0fe82EaBD35f1875DcEA89Ea97",
            v_token: "0x4a1c3aD6Ed28a636ee1751C69071f6be75DEb8B8",
            interest_rate_strategy: "0x230E0321Cf38F09e247e50Afc7801EA2351fe56F",
            oracle: "0x3105C276558Dd4cf7E7be71d73Be8D33bD18F211",
        },
    ),
];

pub static BOOK: NetworkAddressBook = NetworkAddressBook {
    network: Network::Harmony,
    chain_id: CHAIN_ID,
    roles: &ROLES,
    assets: &ASSETS,
};
