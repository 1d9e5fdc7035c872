//! Design ledger: minting, ownership, approvals, and the owner index.

pub mod types;

mod approval;
mod enumeration;
mod mint;
mod transfer;
mod views;

use crate::*;
use near_sdk::store::IterableSet;

impl Contract {
    pub(crate) fn add_design_to_owner(&mut self, owner_id: &AccountId, token_id: u64) {
        if !self.designs_per_owner.contains_key(owner_id) {
            self.designs_per_owner.insert(
                owner_id.clone(),
                IterableSet::new(StorageKey::DesignsPerOwnerInner {
                    account_id_hash: crate::guards::hash_account_id(owner_id),
                }),
            );
        }
        self.designs_per_owner
            .get_mut(owner_id)
            .unwrap()
            .insert(token_id);
    }

    pub(crate) fn remove_design_from_owner(&mut self, owner_id: &AccountId, token_id: u64) {
        if let Some(owned) = self.designs_per_owner.get_mut(owner_id) {
            owned.remove(&token_id);
            if owned.is_empty() {
                self.designs_per_owner.remove(owner_id);
            }
        }
    }
}
