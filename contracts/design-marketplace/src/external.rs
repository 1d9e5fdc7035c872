#![allow(dead_code)]

use near_sdk::json_types::U128;
use near_sdk::{AccountId, PromiseOrValue, ext_contract};

/// Capability seam to the design registry: the marketplace acts on whatever
/// registry account the caller names, never a hard-coded one.
#[ext_contract(ext_design_registry)]
pub trait ExtDesignRegistry {
    fn transfer(&mut self, receiver_id: AccountId, token_id: u64);

    fn owner_of(&self, token_id: u64) -> AccountId;
    fn get_approved(&self, token_id: u64) -> Option<AccountId>;
}

#[ext_contract(ext_self)]
pub trait ExtSelf {
    fn process_listing(
        &mut self,
        registry_id: AccountId,
        token_id: u64,
        price: U128,
        seller_id: AccountId,
    );

    fn process_purchase(
        &mut self,
        registry_id: AccountId,
        token_id: u64,
        buyer_id: AccountId,
        deposit: U128,
    ) -> PromiseOrValue<U128>;

    fn resolve_purchase(
        &mut self,
        registry_id: AccountId,
        token_id: u64,
        buyer_id: AccountId,
        seller_id: AccountId,
        price: U128,
    ) -> U128;
}
