use near_sdk::store::{IterableMap, LookupMap};

use crate::*;

#[near]
impl Contract {
    #[init]
    pub fn new(owner_id: AccountId, contract_metadata: Option<RegistryMetadata>) -> Self {
        Self {
            owner_id,
            designs_by_id: IterableMap::new(StorageKey::DesignsById),
            designs_per_owner: LookupMap::new(StorageKey::DesignsPerOwner),
            next_token_id: 0,
            contract_metadata: contract_metadata.unwrap_or_default(),
        }
    }

    #[payable]
    #[handle_result]
    pub fn transfer_ownership(&mut self, new_owner: AccountId) -> Result<(), RegistryError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if new_owner == self.owner_id {
            return Err(RegistryError::InvalidInput(
                "New owner must differ from current owner".to_string(),
            ));
        }
        let old_owner = self.owner_id.clone();
        self.owner_id = new_owner;
        events::emit_owner_transferred(&old_owner, &self.owner_id);
        Ok(())
    }

    pub fn get_owner(&self) -> &AccountId {
        &self.owner_id
    }

    pub fn registry_metadata(&self) -> RegistryMetadata {
        self.contract_metadata.clone()
    }
}
