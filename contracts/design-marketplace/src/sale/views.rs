use crate::*;

#[near]
impl Contract {
    pub fn get_listing(&self, registry_id: AccountId, token_id: u64) -> Option<Listing> {
        let listing_id = Contract::make_listing_id(&registry_id, token_id);
        self.listings.get(&listing_id).cloned()
    }

    pub fn get_supply_listings(&self) -> u64 {
        self.listings.len() as u64
    }

    pub fn get_listings(&self, from_index: Option<u64>, limit: Option<u64>) -> Vec<Listing> {
        let start = from_index.unwrap_or(0) as usize;
        let limit = limit.unwrap_or(50).min(100) as usize;

        self.listings
            .iter()
            .skip(start)
            .take(limit)
            .map(|(_, listing)| listing.clone())
            .collect()
    }

    pub fn get_supply_by_seller_id(&self, account_id: AccountId) -> u64 {
        self.by_seller_id
            .get(&account_id)
            .map(|keys| keys.len() as u64)
            .unwrap_or(0)
    }

    pub fn get_listings_by_seller_id(
        &self,
        account_id: AccountId,
        from_index: Option<u64>,
        limit: Option<u64>,
    ) -> Vec<Listing> {
        let Some(keys) = self.by_seller_id.get(&account_id) else {
            return vec![];
        };

        let start = from_index.unwrap_or(0) as usize;
        let limit = limit.unwrap_or(50).min(100) as usize;

        keys.iter()
            .skip(start)
            .take(limit)
            .filter_map(|listing_id| self.listings.get(listing_id).cloned())
            .collect()
    }

    pub fn get_listings_by_registry_id(
        &self,
        registry_id: AccountId,
        from_index: Option<u64>,
        limit: Option<u64>,
    ) -> Vec<Listing> {
        let Some(keys) = self.by_registry_id.get(&registry_id) else {
            return vec![];
        };

        let start = from_index.unwrap_or(0) as usize;
        let limit = limit.unwrap_or(50).min(100) as usize;

        keys.iter()
            .skip(start)
            .take(limit)
            .filter_map(|listing_id| self.listings.get(listing_id).cloned())
            .collect()
    }
}
