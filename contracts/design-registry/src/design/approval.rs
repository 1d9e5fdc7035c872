use crate::guards::check_one_yocto;
use crate::*;

#[near]
impl Contract {
    /// Grants `account_id` the right to transfer this design on the owner's
    /// behalf. A single slot: a new approval replaces any prior one.
    #[payable]
    #[handle_result]
    pub fn approve(&mut self, account_id: AccountId, token_id: u64) -> Result<(), RegistryError> {
        check_one_yocto()?;

        let owner_id = env::predecessor_account_id();
        let design = self
            .designs_by_id
            .get_mut(&token_id)
            .ok_or_else(RegistryError::design_not_found)?;

        if design.owner_id != owner_id {
            return Err(RegistryError::Unauthorized(
                "Only the design owner can approve an operator".into(),
            ));
        }

        design.approved_operator = Some(account_id.clone());

        events::emit_approve(&owner_id, token_id, &account_id);
        Ok(())
    }

    #[handle_result]
    pub fn get_approved(&self, token_id: u64) -> Result<Option<AccountId>, RegistryError> {
        let design = self
            .designs_by_id
            .get(&token_id)
            .ok_or_else(RegistryError::design_not_found)?;
        Ok(design.approved_operator.clone())
    }
}
