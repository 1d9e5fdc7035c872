use near_sdk::AccountId;
use near_sdk::json_types::U128;

use super::SALE;
use super::builder::EventBuilder;

// --- SALE_UPDATE ---

pub(crate) fn emit_design_list(
    seller_id: &AccountId,
    registry_id: &AccountId,
    token_id: u64,
    price: U128,
) {
    EventBuilder::new(SALE, "list", seller_id)
        .field("seller_id", seller_id)
        .field("registry_id", registry_id)
        .field("token_id", token_id)
        .field("price", price)
        .emit();
}

pub(crate) fn emit_design_delist(seller_id: &AccountId, registry_id: &AccountId, token_id: u64) {
    EventBuilder::new(SALE, "delist", seller_id)
        .field("seller_id", seller_id)
        .field("registry_id", registry_id)
        .field("token_id", token_id)
        .emit();
}

pub(crate) fn emit_design_purchase(
    buyer_id: &AccountId,
    seller_id: &AccountId,
    registry_id: &AccountId,
    token_id: u64,
    price: U128,
) {
    EventBuilder::new(SALE, "purchase", buyer_id)
        .field("buyer_id", buyer_id)
        .field("seller_id", seller_id)
        .field("registry_id", registry_id)
        .field("token_id", token_id)
        .field("price", price)
        .emit();
}

pub(crate) fn emit_design_purchase_failed(
    buyer_id: &AccountId,
    registry_id: &AccountId,
    token_id: u64,
    refunded: U128,
    reason: &str,
) {
    EventBuilder::new(SALE, "purchase_failed", buyer_id)
        .field("buyer_id", buyer_id)
        .field("registry_id", registry_id)
        .field("token_id", token_id)
        .field("refunded", refunded)
        .field("reason", reason)
        .emit();
}
