//! Listing store and its seller/registry secondary indexes.

use near_sdk::BorshStorageKey;

use crate::*;

#[near]
#[derive(BorshStorageKey)]
pub enum StorageKey {
    Listings,
    BySellerId,
    BySellerIdInner { account_id_hash: Vec<u8> },
    ByRegistryId,
    ByRegistryIdInner { account_id_hash: Vec<u8> },
}

impl Contract {
    pub(crate) fn make_listing_id(registry_id: &AccountId, token_id: u64) -> String {
        format!("{}{}{}", registry_id, DELIMETER, token_id)
    }

    /// Inserts or overwrites a listing. An overwrite may change the seller
    /// (the token changed hands and the new owner re-listed), so the seller
    /// index is rebuilt for the key.
    pub(crate) fn add_listing(&mut self, listing: Listing) {
        let listing_id = Self::make_listing_id(&listing.registry_id, listing.token_id);

        let previous_seller = self
            .listings
            .get(&listing_id)
            .map(|previous| previous.seller_id.clone());
        if let Some(previous_seller) = previous_seller {
            if previous_seller != listing.seller_id {
                self.remove_listing_from_seller(&previous_seller, &listing_id);
            }
        }

        self.add_listing_to_seller(&listing.seller_id, &listing_id);
        self.add_listing_to_registry(&listing.registry_id, &listing_id);
        self.listings.insert(listing_id, listing);
    }

    pub(crate) fn remove_listing(
        &mut self,
        registry_id: &AccountId,
        token_id: u64,
    ) -> Result<Listing, MarketError> {
        let listing_id = Self::make_listing_id(registry_id, token_id);
        let listing = self
            .listings
            .remove(&listing_id)
            .ok_or_else(MarketError::listing_not_found)?;

        self.remove_listing_from_seller(&listing.seller_id, &listing_id);
        if let Some(keys) = self.by_registry_id.get_mut(registry_id) {
            keys.remove(&listing_id);
            if keys.is_empty() {
                self.by_registry_id.remove(registry_id);
            }
        }

        Ok(listing)
    }

    fn add_listing_to_seller(&mut self, seller_id: &AccountId, listing_id: &str) {
        if !self.by_seller_id.contains_key(seller_id) {
            self.by_seller_id.insert(
                seller_id.clone(),
                IterableSet::new(StorageKey::BySellerIdInner {
                    account_id_hash: crate::guards::hash_account_id(seller_id),
                }),
            );
        }
        self.by_seller_id
            .get_mut(seller_id)
            .unwrap()
            .insert(listing_id.to_string());
    }

    fn remove_listing_from_seller(&mut self, seller_id: &AccountId, listing_id: &str) {
        if let Some(keys) = self.by_seller_id.get_mut(seller_id) {
            keys.remove(listing_id);
            if keys.is_empty() {
                self.by_seller_id.remove(seller_id);
            }
        }
    }

    fn add_listing_to_registry(&mut self, registry_id: &AccountId, listing_id: &str) {
        if !self.by_registry_id.contains_key(registry_id) {
            self.by_registry_id.insert(
                registry_id.clone(),
                IterableSet::new(StorageKey::ByRegistryIdInner {
                    account_id_hash: crate::guards::hash_account_id(registry_id),
                }),
            );
        }
        self.by_registry_id
            .get_mut(registry_id)
            .unwrap()
            .insert(listing_id.to_string());
    }
}
