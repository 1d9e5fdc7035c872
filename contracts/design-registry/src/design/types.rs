use near_sdk::AccountId;
use near_sdk::near;

/// One registered design. `token_uri`, `creator_name`, `description`, and
/// `created_at` are written once at registration and never change; `owner_id`
/// moves with transfers and `approved_operator` is cleared by every transfer.
#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct Design {
    pub owner_id: AccountId,
    pub token_uri: String,
    pub creator_name: String,
    pub description: String,
    pub created_at: u64,
    pub approved_operator: Option<AccountId>,
}

#[near(serializers = [json])]
#[derive(Clone, Debug)]
pub struct DesignMetadata {
    pub creator_name: String,
    pub description: String,
    pub created_at: u64,
}

#[near(serializers = [json])]
#[derive(Clone)]
pub struct DesignView {
    pub token_id: u64,
    pub owner_id: AccountId,
    pub token_uri: String,
    pub creator_name: String,
    pub description: String,
    pub created_at: u64,
    pub approved_operator: Option<AccountId>,
}

impl DesignView {
    pub(crate) fn from_design(token_id: u64, design: &Design) -> Self {
        Self {
            token_id,
            owner_id: design.owner_id.clone(),
            token_uri: design.token_uri.clone(),
            creator_name: design.creator_name.clone(),
            description: design.description.clone(),
            created_at: design.created_at,
            approved_operator: design.approved_operator.clone(),
        }
    }
}

#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct RegistryMetadata {
    pub spec: String,
    pub name: String,
    pub symbol: String,
    pub base_uri: Option<String>,
}

impl Default for RegistryMetadata {
    fn default() -> Self {
        Self {
            spec: "design-registry-1.0.0".to_string(),
            name: "3D Design Registry".to_string(),
            symbol: "DESIGN".to_string(),
            base_uri: None,
        }
    }
}
