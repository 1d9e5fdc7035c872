use crate::tests::test_utils::*;
use crate::*;
use near_sdk::test_utils::get_logs;
use near_sdk::testing_env;

#[test]
fn owner_transfer_moves_ownership() {
    let mut contract = new_contract();
    let token_id = register(&mut contract, &designer());

    testing_env!(context_with_deposit(designer(), 1).build());
    contract.transfer(collector(), token_id).unwrap();

    assert_eq!(contract.owner_of(token_id).unwrap(), collector());
}

#[test]
fn transfer_clears_approval() {
    let mut contract = new_contract();
    let token_id = register(&mut contract, &designer());

    testing_env!(context_with_deposit(designer(), 1).build());
    contract.approve("market.near".parse().unwrap(), token_id).unwrap();
    contract.transfer(collector(), token_id).unwrap();

    assert_eq!(contract.get_approved(token_id).unwrap(), None);
}

#[test]
fn approved_operator_can_transfer() {
    let mut contract = new_contract();
    let token_id = register(&mut contract, &designer());

    testing_env!(context_with_deposit(designer(), 1).build());
    contract.approve(admin(), token_id).unwrap();

    testing_env!(context_with_deposit(admin(), 1).build());
    contract.transfer(collector(), token_id).unwrap();

    assert_eq!(contract.owner_of(token_id).unwrap(), collector());
    assert_eq!(contract.get_approved(token_id).unwrap(), None);
}

#[test]
fn operator_transfer_emits_authorized_id() {
    let mut contract = new_contract();
    let token_id = register(&mut contract, &designer());

    testing_env!(context_with_deposit(designer(), 1).build());
    contract.approve(admin(), token_id).unwrap();

    testing_env!(context_with_deposit(admin(), 1).build());
    contract.transfer(collector(), token_id).unwrap();

    let logs = get_logs();
    assert!(logs.iter().any(|l| l.contains("nft_transfer") && l.contains("authorized_id")));
}

#[test]
fn unauthorized_sender_cannot_transfer() {
    let mut contract = new_contract();
    let token_id = register(&mut contract, &designer());

    testing_env!(context_with_deposit(collector(), 1).build());
    let err = contract.transfer(collector(), token_id).unwrap_err();
    assert!(matches!(err, RegistryError::Unauthorized(_)));
    assert_eq!(contract.owner_of(token_id).unwrap(), designer());
}

#[test]
fn transfer_unknown_token_fails() {
    let mut contract = new_contract();

    testing_env!(context_with_deposit(designer(), 1).build());
    let err = contract.transfer(collector(), 42).unwrap_err();
    assert!(matches!(err, RegistryError::NotFound(_)));
}

#[test]
fn transfer_without_yocto_fails() {
    let mut contract = new_contract();
    let token_id = register(&mut contract, &designer());

    testing_env!(context(designer()).build());
    let err = contract.transfer(collector(), token_id).unwrap_err();
    assert!(matches!(err, RegistryError::InsufficientDeposit(_)));
}

#[test]
fn metadata_survives_transfer() {
    let mut contract = new_contract();
    let token_id = register(&mut contract, &designer());
    let before = contract.get_metadata(token_id).unwrap();

    testing_env!(context_with_deposit(designer(), 1).build());
    contract.transfer(collector(), token_id).unwrap();

    let after = contract.get_metadata(token_id).unwrap();
    assert_eq!(after.creator_name, before.creator_name);
    assert_eq!(after.description, before.description);
    assert_eq!(after.created_at, before.created_at);
    assert_eq!(contract.token_uri(token_id).unwrap(), "ipfs://QmTest123");
}

#[test]
fn transfer_updates_owner_index() {
    let mut contract = new_contract();
    let token_id = register(&mut contract, &designer());
    assert_eq!(contract.supply_for_owner(designer()), 1);
    assert_eq!(contract.supply_for_owner(collector()), 0);

    testing_env!(context_with_deposit(designer(), 1).build());
    contract.transfer(collector(), token_id).unwrap();

    assert_eq!(contract.supply_for_owner(designer()), 0);
    assert_eq!(contract.supply_for_owner(collector()), 1);
}
