use near_sdk::store::{IterableMap, IterableSet, LookupMap};
use near_sdk::{AccountId, PanicOnDefault, env, near};

pub mod constants;
mod errors;
mod guards;
mod storage;

mod events;

mod design;

mod admin;


pub use constants::*;
pub use design::types::{Design, DesignMetadata, DesignView, RegistryMetadata};
pub use errors::RegistryError;
pub use storage::StorageKey;

#[near(
    contract_state,
    contract_metadata(
        version = "0.1.0",
        standard(standard = "nep171", version = "1.2.0"),
        standard(standard = "nep297", version = "1.0.0"),
    )
)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub owner_id: AccountId,

    pub designs_by_id: IterableMap<u64, Design>,
    pub(crate) designs_per_owner: LookupMap<AccountId, IterableSet<u64>>,
    // Id invariant: dense, strictly increasing from 0, never reused.
    pub next_token_id: u64,

    pub contract_metadata: RegistryMetadata,
}
