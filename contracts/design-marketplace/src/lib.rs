use near_sdk::store::{IterableMap, IterableSet, LookupMap};
use near_sdk::{AccountId, Gas, NearToken, PanicOnDefault, Promise, PromiseOrValue, env, near};

pub mod constants;
mod errors;
mod guards;
mod storage;

mod events;
mod external;

mod sale;

mod admin;


pub use constants::*;
pub use errors::MarketError;
pub use sale::types::Listing;
pub use storage::StorageKey;

#[near(
    contract_state,
    contract_metadata(
        version = "0.1.0",
        standard(standard = "nep297", version = "1.0.0"),
    )
)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub owner_id: AccountId,

    pub listings: IterableMap<String, Listing>,
    pub(crate) by_seller_id: LookupMap<AccountId, IterableSet<String>>,
    pub(crate) by_registry_id: LookupMap<AccountId, IterableSet<String>>,
}
