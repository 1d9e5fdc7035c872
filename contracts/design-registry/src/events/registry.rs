use near_sdk::AccountId;

use super::builder::EventJson;
use super::{REGISTRY_STANDARD, REGISTRY_VERSION};

pub(crate) fn emit_approve(owner_id: &AccountId, token_id: u64, approved_id: &AccountId) {
    EventJson::new(REGISTRY_STANDARD, REGISTRY_VERSION, "approve")
        .field("owner_id", owner_id)
        .field("token_id", token_id)
        .field("approved_id", approved_id)
        .emit();
}

pub(crate) fn emit_owner_transferred(old_owner_id: &AccountId, new_owner_id: &AccountId) {
    EventJson::new(REGISTRY_STANDARD, REGISTRY_VERSION, "transfer_ownership")
        .field("old_owner_id", old_owner_id)
        .field("new_owner_id", new_owner_id)
        .emit();
}
