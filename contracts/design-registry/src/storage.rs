use near_sdk::BorshStorageKey;
use near_sdk::near;

#[near]
#[derive(BorshStorageKey)]
pub enum StorageKey {
    DesignsById,
    DesignsPerOwner,
    DesignsPerOwnerInner { account_id_hash: Vec<u8> },
}
