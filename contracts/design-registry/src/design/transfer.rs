use crate::guards::check_one_yocto;
use crate::*;

#[near]
impl Contract {
    /// Moves a design to `receiver_id`. Callable by the current owner or by
    /// the approved operator; any approval is cleared by the transfer.
    #[payable]
    #[handle_result]
    pub fn transfer(&mut self, receiver_id: AccountId, token_id: u64) -> Result<(), RegistryError> {
        check_one_yocto()?;
        let sender_id = env::predecessor_account_id();

        self.internal_transfer(&sender_id, &receiver_id, token_id)
    }
}

impl Contract {
    pub(crate) fn internal_transfer(
        &mut self,
        sender_id: &AccountId,
        receiver_id: &AccountId,
        token_id: u64,
    ) -> Result<(), RegistryError> {
        let design = self
            .designs_by_id
            .get(&token_id)
            .ok_or_else(RegistryError::design_not_found)?;

        let old_owner_id = design.owner_id.clone();
        let is_owner = sender_id == &old_owner_id;
        let is_operator = design.approved_operator.as_ref() == Some(sender_id);
        if !is_owner && !is_operator {
            return Err(RegistryError::Unauthorized(
                "Sender is not the owner or approved operator".into(),
            ));
        }

        self.remove_design_from_owner(&old_owner_id, token_id);

        let design = self.designs_by_id.get_mut(&token_id).unwrap();
        design.owner_id = receiver_id.clone();
        design.approved_operator = None;

        self.add_design_to_owner(receiver_id, token_id);

        let authorized_id = (!is_owner).then_some(sender_id);
        events::emit_transfer(&old_owner_id, receiver_id, &[token_id], authorized_id);
        Ok(())
    }
}
