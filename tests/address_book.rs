use aave_v3_address_book::{
    BookError, Network, Role, book, get_asset, get_role_address, get_role_address_by_name,
    list_assets, roles, storage, validation,
};
use std::collections::HashSet;

#[test]
fn ids_are_dense_on_every_network() {
    for network in Network::ALL {
        let ids: HashSet<u16> = list_assets(network).map(|(_, entry)| entry.id).collect();
        let expected: HashSet<u16> = (0..book(network).asset_count() as u16).collect();
        assert_eq!(ids, expected, "{network}");
    }
}

#[test]
fn every_address_is_well_formed() {
    for network in Network::ALL {
        for (label, address) in book(network).labelled_addresses() {
            assert!(validation::is_address_shaped(address), "{network} {label}: {address}");
        }
    }
}

#[test]
fn lookups_are_deterministic() {
    for network in Network::ALL {
        for (role, address) in roles(network) {
            assert_eq!(get_role_address(network, role).unwrap(), address);
            assert_eq!(get_role_address(network, role).unwrap(), address);
        }
        for (symbol, entry) in list_assets(network) {
            assert_eq!(get_asset(network, symbol).unwrap(), entry);
            assert!(std::ptr::eq(get_asset(network, symbol).unwrap(), entry));
        }
    }
}

#[test]
fn list_assets_is_ascending_and_restartable() {
    for network in Network::ALL {
        let assets = list_assets(network);
        assert_eq!(assets.len(), book(network).symbols().count());

        let first: Vec<u16> = assets.clone().map(|(_, entry)| entry.id).collect();
        let second: Vec<u16> = assets.map(|(_, entry)| entry.id).collect();
        assert_eq!(first, second);
        assert!(first.windows(2).all(|pair| pair[0] < pair[1]));
    }
}

#[test]
fn fantom_symbols_in_reserve_order() {
    let symbols: Vec<&str> = list_assets(Network::Fantom).map(|(symbol, _)| symbol).collect();
    assert_eq!(
        symbols,
        ["DAI", "LINK", "USDC", "BTC", "ETH", "fUSDT", "AAVE", "WFTM", "CRV", "SUSHI"]
    );
}

#[test]
fn fantom_usdc() {
    let usdc = get_asset(Network::Fantom, "USDC").unwrap();
    assert_eq!(usdc.decimals, 6);
    assert_eq!(usdc.id, 2);
    assert_eq!(usdc.underlying, "0x04068DA6C83AFCFA0e13ba15A6696662335D5B75");
    assert_eq!(usdc.a_token, "0x625E7708f30cA75bfd92586e17077590C60eb4cD");
    assert_eq!(usdc.v_token, "0xFCCf3cAbbe80101232d343252614b6A3eE81C989");
    assert_eq!(usdc.interest_rate_strategy, "0xf4a0039F2d4a2EaD5216AbB6Ae4C4C3AA2dB9b82");
    assert_eq!(usdc.oracle, "0x2553f4eeb82d5A26427b8d1106C51499CBa5D99c");
}

#[test]
fn harmony_one_usdc() {
    let usdc = get_asset(Network::Harmony, "ONE_USDC").unwrap();
    assert_eq!(usdc.decimals, 6);
    assert_eq!(usdc.id, 2);
    assert_eq!(usdc.underlying, "0x985458E523dB3d53125813eD68c274899e9DfAb4");
    assert_eq!(usdc.oracle, "0xA9F30e6ED4098e9439B2ac8aEA2d3fc26BcEbb45");
}

#[test]
fn pool_is_shared_across_networks() {
    let fantom = get_role_address(Network::Fantom, Role::Pool).unwrap();
    let harmony = get_role_address(Network::Harmony, Role::Pool).unwrap();
    assert_eq!(fantom, "0x794a61358D6845594F94dc1DB02A252b5b4814aD");
    assert_eq!(fantom, harmony);
    assert_eq!(get_role_address_by_name(Network::Harmony, "POOL").unwrap(), harmony);
}

#[test]
fn oracles_differ_across_networks() {
    assert_ne!(
        get_role_address(Network::Fantom, Role::Oracle).unwrap(),
        get_role_address(Network::Harmony, Role::Oracle).unwrap()
    );
}

#[test]
fn unknown_asset_is_a_lookup_miss() {
    let err = get_asset(Network::Fantom, "NONEXISTENT").unwrap_err();
    assert!(err.is_lookup_miss());
    match err {
        BookError::UnknownAsset { network, symbol } => {
            assert_eq!(network, Network::Fantom);
            assert_eq!(symbol, "NONEXISTENT");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(
        get_asset(Network::Fantom, "NONEXISTENT").unwrap_err().to_string(),
        "Unknown asset on Fantom: NONEXISTENT"
    );
}

#[test]
fn missing_role_is_a_lookup_miss() {
    let err = get_role_address(Network::Harmony, Role::RepayWithCollateralAdapter).unwrap_err();
    assert!(err.is_lookup_miss());
    assert_eq!(
        err.to_string(),
        "Unknown role on Harmony: REPAY_WITH_COLLATERAL_ADAPTER"
    );
}

#[test]
fn chain_ids() {
    assert_eq!(book(Network::Fantom).chain_id, 250);
    assert_eq!(book(Network::Harmony).chain_id, 1_666_600_000);
    assert_eq!(Network::from_chain_id(1_666_600_000).unwrap(), Network::Harmony);
}

#[test]
fn json_round_trip_is_byte_identical() {
    for network in Network::ALL {
        let json = storage::to_json(network).unwrap();
        let document = storage::from_json(&json).unwrap();
        assert!(document.matches(book(network)));
        for (doc_role, (role, address)) in document.roles.iter().zip(roles(network)) {
            assert_eq!(doc_role.name, role);
            assert_eq!(doc_role.address.as_bytes(), address.as_bytes());
        }
    }
}

#[test]
fn lookups_are_shareable_across_threads() {
    let handles: Vec<_> = Network::ALL
        .into_iter()
        .map(|network| {
            std::thread::spawn(move || {
                list_assets(network)
                    .map(|(symbol, _)| get_asset(network, symbol).map(|entry| entry.id))
                    .collect::<Result<Vec<_>, _>>()
            })
        })
        .collect();
    for handle in handles {
        let ids = handle.join().unwrap().unwrap();
        assert!(!ids.is_empty());
    }
}

#[test]
fn explorer_links_match_generated_comments() {
    let collector = get_role_address(Network::Fantom, Role::Collector).unwrap();
    assert_eq!(
        aave_v3_address_book::explorer_url(Network::Fantom, collector),
        "https://ftmscan.com/address/0xBe85413851D195fC6341619cD68BfDc26a25b928"
    );
    assert_eq!(Role::Collector.interface_name(), Some("ICollector"));
    assert_eq!(Role::AclAdmin.interface_name(), None);
}
