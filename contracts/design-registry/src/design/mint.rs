use crate::*;

#[near]
impl Contract {
    /// Registers a design and mints it to the caller. Ids are dense and
    /// strictly increasing; owner and metadata are written in the same call.
    #[handle_result]
    pub fn register_design(
        &mut self,
        token_uri: String,
        creator_name: String,
        description: String,
    ) -> Result<u64, RegistryError> {
        let creator_id = env::predecessor_account_id();
        self.mint(&creator_id, token_uri, creator_name, description)
    }
}

impl Contract {
    pub(crate) fn mint(
        &mut self,
        creator_id: &AccountId,
        token_uri: String,
        creator_name: String,
        description: String,
    ) -> Result<u64, RegistryError> {
        if token_uri.len() > MAX_TOKEN_URI_LEN {
            return Err(RegistryError::InvalidInput(format!(
                "Token URI exceeds max length of {}",
                MAX_TOKEN_URI_LEN
            )));
        }
        if creator_name.len() > MAX_CREATOR_NAME_LEN {
            return Err(RegistryError::InvalidInput(format!(
                "Creator name exceeds max length of {}",
                MAX_CREATOR_NAME_LEN
            )));
        }
        if description.len() > MAX_DESCRIPTION_LEN {
            return Err(RegistryError::InvalidInput(format!(
                "Description exceeds max length of {}",
                MAX_DESCRIPTION_LEN
            )));
        }

        let token_id = self.next_token_id;
        self.next_token_id = self
            .next_token_id
            .checked_add(1)
            .ok_or_else(|| RegistryError::InternalError("Token ID counter overflow".into()))?;

        let design = Design {
            owner_id: creator_id.clone(),
            token_uri,
            creator_name,
            description,
            created_at: env::block_timestamp(),
            approved_operator: None,
        };

        self.designs_by_id.insert(token_id, design);
        self.add_design_to_owner(creator_id, token_id);

        events::emit_mint(creator_id, &[token_id]);
        Ok(token_id)
    }
}
