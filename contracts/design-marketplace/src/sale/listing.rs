use near_sdk::json_types::U128;

use crate::external::*;
use crate::guards::*;
use crate::*;

#[near]
impl Contract {
    /// Advertises a fixed price for a design held on `registry_id`. The
    /// price is validated synchronously; ownership and marketplace approval
    /// are checked against the registry before the listing is written.
    /// Re-listing before a sale overwrites the previous record.
    #[payable]
    #[handle_result]
    pub fn list_design(
        &mut self,
        registry_id: AccountId,
        token_id: u64,
        price: U128,
    ) -> Result<Promise, MarketError> {
        check_at_least_one_yocto()?;
        if price.0 == 0 {
            return Err(MarketError::InvalidInput(
                "Price must be greater than 0".into(),
            ));
        }

        let seller_id = env::predecessor_account_id();

        Ok(ext_design_registry::ext(registry_id.clone())
            .with_static_gas(Gas::from_tgas(GAS_REGISTRY_VIEW))
            .owner_of(token_id)
            .and(
                ext_design_registry::ext(registry_id.clone())
                    .with_static_gas(Gas::from_tgas(GAS_REGISTRY_VIEW))
                    .get_approved(token_id),
            )
            .then(
                ext_self::ext(env::current_account_id())
                    .with_static_gas(Gas::from_tgas(GAS_PROCESS_LISTING))
                    .process_listing(registry_id, token_id, price, seller_id),
            ))
    }

    #[private]
    pub fn process_listing(
        &mut self,
        registry_id: AccountId,
        token_id: u64,
        price: U128,
        seller_id: AccountId,
    ) {
        if env::promise_results_count() != 2 {
            env::log_str("Listing failed: expected 2 promise results");
            return;
        }

        let owner_id = match env::promise_result_checked(0, 256) {
            Ok(value) => match near_sdk::serde_json::from_slice::<AccountId>(&value) {
                Ok(owner_id) => owner_id,
                Err(_) => {
                    env::log_str("Listing failed: could not parse registry owner");
                    return;
                }
            },
            Err(_) => {
                env::log_str("Listing failed: design not found on registry");
                return;
            }
        };
        if owner_id != seller_id {
            env::log_str("Listing failed: caller is not the design owner");
            return;
        }

        let approved = match env::promise_result_checked(1, 256) {
            Ok(value) => {
                near_sdk::serde_json::from_slice::<Option<AccountId>>(&value).unwrap_or(None)
            }
            Err(_) => {
                env::log_str("Listing failed: approval check call failed");
                return;
            }
        };
        if approved != Some(env::current_account_id()) {
            env::log_str("Listing failed: marketplace is not approved to transfer this design");
            return;
        }

        self.add_listing(Listing {
            registry_id: registry_id.clone(),
            token_id,
            seller_id: seller_id.clone(),
            price,
        });
        events::emit_design_list(&seller_id, &registry_id, token_id, price);
    }

    #[payable]
    #[handle_result]
    pub fn delist_design(
        &mut self,
        registry_id: AccountId,
        token_id: u64,
    ) -> Result<(), MarketError> {
        check_one_yocto()?;

        let actor_id = env::predecessor_account_id();
        let listing_id = Self::make_listing_id(&registry_id, token_id);
        let listing = self
            .listings
            .get(&listing_id)
            .ok_or_else(MarketError::listing_not_found)?;

        if actor_id != listing.seller_id {
            return Err(MarketError::Unauthorized(
                "Only the seller can delist".into(),
            ));
        }

        self.remove_listing(&registry_id, token_id)?;
        events::emit_design_delist(&actor_id, &registry_id, token_id);
        Ok(())
    }
}
