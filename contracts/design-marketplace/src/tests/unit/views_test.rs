use crate::tests::test_utils::*;
use crate::*;
use near_sdk::json_types::U128;

#[test]
fn get_listing_roundtrip() {
    let mut contract = new_contract();
    seed_listing(&mut contract, &seller(), 7, 1_000);

    let listing = contract.get_listing(registry(), 7).unwrap();
    assert_eq!(listing.registry_id, registry());
    assert_eq!(listing.token_id, 7);
    assert_eq!(listing.seller_id, seller());
    assert_eq!(listing.price, U128(1_000));
}

#[test]
fn get_listing_absent_is_none() {
    let contract = new_contract();
    assert!(contract.get_listing(registry(), 0).is_none());
}

#[test]
fn listing_keys_do_not_collide_across_registries() {
    let mut contract = new_contract();
    seed_listing(&mut contract, &seller(), 1, 1_000);
    contract.add_listing(Listing {
        registry_id: "other-registry.near".parse().unwrap(),
        token_id: 1,
        seller_id: buyer(),
        price: U128(9_000),
    });

    assert_eq!(contract.get_supply_listings(), 2);
    assert_eq!(contract.get_listing(registry(), 1).unwrap().price, U128(1_000));
    assert_eq!(
        contract
            .get_listing("other-registry.near".parse().unwrap(), 1)
            .unwrap()
            .price,
        U128(9_000)
    );
}

#[test]
fn get_listings_pages() {
    let mut contract = new_contract();
    for token_id in 0..5 {
        seed_listing(&mut contract, &seller(), token_id, 1_000 + token_id as u128);
    }

    let page = contract.get_listings(Some(2), Some(2));
    assert_eq!(page.len(), 2);
    assert_eq!(contract.get_listings(None, None).len(), 5);
}

#[test]
fn listings_by_seller_tracks_ownership() {
    let mut contract = new_contract();
    seed_listing(&mut contract, &seller(), 0, 1_000);
    seed_listing(&mut contract, &seller(), 1, 1_000);
    seed_listing(&mut contract, &buyer(), 2, 1_000);

    assert_eq!(contract.get_supply_by_seller_id(seller()), 2);
    assert_eq!(contract.get_listings_by_seller_id(seller(), None, None).len(), 2);
    assert_eq!(contract.get_listings_by_seller_id(buyer(), None, None).len(), 1);
    assert!(contract.get_listings_by_seller_id(admin(), None, None).is_empty());
}

#[test]
fn listings_by_registry_groups_keys() {
    let mut contract = new_contract();
    seed_listing(&mut contract, &seller(), 0, 1_000);
    contract.add_listing(Listing {
        registry_id: "other-registry.near".parse().unwrap(),
        token_id: 0,
        seller_id: seller(),
        price: U128(500),
    });

    assert_eq!(contract.get_listings_by_registry_id(registry(), None, None).len(), 1);
    assert_eq!(
        contract
            .get_listings_by_registry_id("other-registry.near".parse().unwrap(), None, None)
            .len(),
        1
    );
}
