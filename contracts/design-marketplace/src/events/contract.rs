use near_sdk::AccountId;

use super::CONTRACT;
use super::builder::EventBuilder;

// --- CONTRACT_UPDATE ---

pub(crate) fn emit_owner_transferred(old_owner_id: &AccountId, new_owner_id: &AccountId) {
    EventBuilder::new(CONTRACT, "transfer_ownership", old_owner_id)
        .field("old_owner_id", old_owner_id)
        .field("new_owner_id", new_owner_id)
        .emit();
}
