use near_sdk::AccountId;

use super::builder::EventJson;
use super::{NEP171_STANDARD, NEP171_VERSION};

fn token_ids_field(token_ids: &[u64]) -> Vec<String> {
    token_ids.iter().map(|id| id.to_string()).collect()
}

pub(crate) fn emit_mint(owner_id: &AccountId, token_ids: &[u64]) {
    EventJson::new(NEP171_STANDARD, NEP171_VERSION, "nft_mint")
        .field("owner_id", owner_id)
        .field("token_ids", token_ids_field(token_ids))
        .emit();
}

pub(crate) fn emit_transfer(
    old_owner_id: &AccountId,
    new_owner_id: &AccountId,
    token_ids: &[u64],
    authorized_id: Option<&AccountId>,
) {
    EventJson::new(NEP171_STANDARD, NEP171_VERSION, "nft_transfer")
        .field("old_owner_id", old_owner_id)
        .field("new_owner_id", new_owner_id)
        .field("token_ids", token_ids_field(token_ids))
        .field_opt("authorized_id", authorized_id)
        .emit();
}
