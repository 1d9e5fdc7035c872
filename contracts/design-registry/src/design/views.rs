use crate::*;

#[near]
impl Contract {
    #[handle_result]
    pub fn owner_of(&self, token_id: u64) -> Result<AccountId, RegistryError> {
        self.designs_by_id
            .get(&token_id)
            .map(|design| design.owner_id.clone())
            .ok_or_else(RegistryError::design_not_found)
    }

    #[handle_result]
    pub fn token_uri(&self, token_id: u64) -> Result<String, RegistryError> {
        self.designs_by_id
            .get(&token_id)
            .map(|design| design.token_uri.clone())
            .ok_or_else(RegistryError::design_not_found)
    }

    /// Creation metadata only; transfer-invariant for the life of the token.
    #[handle_result]
    pub fn get_metadata(&self, token_id: u64) -> Result<DesignMetadata, RegistryError> {
        self.designs_by_id
            .get(&token_id)
            .map(|design| DesignMetadata {
                creator_name: design.creator_name.clone(),
                description: design.description.clone(),
                created_at: design.created_at,
            })
            .ok_or_else(RegistryError::design_not_found)
    }

    pub fn next_token_id(&self) -> u64 {
        self.next_token_id
    }

    pub fn get_design(&self, token_id: u64) -> Option<DesignView> {
        self.designs_by_id
            .get(&token_id)
            .map(|design| DesignView::from_design(token_id, design))
    }
}
