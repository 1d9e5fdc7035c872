use near_sdk::AccountId;
use near_sdk::json_types::U128;
use near_sdk::near;

/// An active offer to sell one design at a fixed price. `price` is always
/// positive: "no active listing" is the absence of the record, and a
/// successful purchase removes it.
#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct Listing {
    pub registry_id: AccountId,
    pub token_id: u64,
    pub seller_id: AccountId,
    pub price: U128,
}
