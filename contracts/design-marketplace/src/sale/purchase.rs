use near_sdk::json_types::U128;

use crate::external::*;
use crate::*;

#[near]
impl Contract {
    /// Buys a listed design with the attached deposit as payment. The
    /// deposit must equal the listing price exactly. Settlement happens in
    /// `resolve_purchase`: the buyer's payment goes entirely to the seller
    /// with ownership moved and the listing cleared, or entirely back to
    /// the buyer with no state change.
    #[payable]
    #[handle_result]
    pub fn buy_design(
        &mut self,
        registry_id: AccountId,
        token_id: u64,
    ) -> Result<Promise, MarketError> {
        let listing_id = Self::make_listing_id(&registry_id, token_id);
        let listing = self
            .listings
            .get(&listing_id)
            .ok_or_else(MarketError::listing_not_found)?;

        let buyer_id = env::predecessor_account_id();
        if buyer_id == listing.seller_id {
            return Err(MarketError::InvalidInput(
                "Cannot purchase your own listing".into(),
            ));
        }

        let price = listing.price.0;
        let deposit = env::attached_deposit().as_yoctonear();
        if deposit != price {
            return Err(MarketError::IncorrectPayment(format!(
                "Incorrect payment amount: listing price is {}, attached {}",
                price, deposit
            )));
        }

        Ok(ext_design_registry::ext(registry_id.clone())
            .with_static_gas(Gas::from_tgas(GAS_REGISTRY_VIEW))
            .owner_of(token_id)
            .then(
                ext_self::ext(env::current_account_id())
                    .with_static_gas(Gas::from_tgas(GAS_PROCESS_PURCHASE))
                    .process_purchase(registry_id, token_id, buyer_id, U128(deposit)),
            ))
    }

    /// Ownership re-validation between payment escrow and transfer: a stale
    /// listing whose seller no longer owns the design refunds the buyer
    /// instead of moving someone else's asset. The listing itself is left in
    /// place for the current owner to overwrite or the seller to delist.
    #[private]
    pub fn process_purchase(
        &mut self,
        registry_id: AccountId,
        token_id: u64,
        buyer_id: AccountId,
        deposit: U128,
    ) -> PromiseOrValue<U128> {
        let listing_id = Self::make_listing_id(&registry_id, token_id);
        let Some(listing) = self.listings.get(&listing_id).cloned() else {
            self.refund_buyer(&buyer_id, &registry_id, token_id, deposit, "listing no longer exists");
            return PromiseOrValue::Value(U128(0));
        };

        if listing.price.0 != deposit.0 {
            self.refund_buyer(&buyer_id, &registry_id, token_id, deposit, "listing price changed");
            return PromiseOrValue::Value(U128(0));
        }

        if env::promise_results_count() != 1 {
            self.refund_buyer(&buyer_id, &registry_id, token_id, deposit, "expected 1 promise result");
            return PromiseOrValue::Value(U128(0));
        }
        let current_owner = match env::promise_result_checked(0, 256) {
            Ok(value) => near_sdk::serde_json::from_slice::<AccountId>(&value).ok(),
            Err(_) => None,
        };

        match current_owner {
            Some(owner_id) if owner_id == listing.seller_id => {
                PromiseOrValue::Promise(
                    ext_design_registry::ext(registry_id.clone())
                        .with_static_gas(Gas::from_tgas(GAS_REGISTRY_TRANSFER))
                        .with_attached_deposit(ONE_YOCTO)
                        .transfer(buyer_id.clone(), token_id)
                        .then(
                            ext_self::ext(env::current_account_id())
                                .with_static_gas(Gas::from_tgas(GAS_RESOLVE_PURCHASE))
                                .resolve_purchase(
                                    registry_id,
                                    token_id,
                                    buyer_id,
                                    listing.seller_id,
                                    listing.price,
                                ),
                        ),
                )
            }
            Some(_) => {
                self.refund_buyer(&buyer_id, &registry_id, token_id, deposit, "seller no longer owns this design");
                PromiseOrValue::Value(U128(0))
            }
            None => {
                self.refund_buyer(&buyer_id, &registry_id, token_id, deposit, "registry owner lookup failed");
                PromiseOrValue::Value(U128(0))
            }
        }
    }

    #[private]
    pub fn resolve_purchase(
        &mut self,
        registry_id: AccountId,
        token_id: u64,
        buyer_id: AccountId,
        seller_id: AccountId,
        price: U128,
    ) -> U128 {
        let transferred = env::promise_results_count() == 1
            && env::promise_result_checked(0, 64).is_ok();

        if !transferred {
            // Final race window: ownership or approval changed after
            // re-validation. The listing stays; only money moves back.
            self.refund_buyer(&buyer_id, &registry_id, token_id, price, "registry transfer failed");
            return U128(0);
        }

        self.finalize_purchase(&registry_id, token_id, &buyer_id, &seller_id, price);
        price
    }
}

impl Contract {
    /// Terminal success state: listing cleared only on a confirmed transfer,
    /// then the exact price is forwarded to the seller.
    pub(crate) fn finalize_purchase(
        &mut self,
        registry_id: &AccountId,
        token_id: u64,
        buyer_id: &AccountId,
        seller_id: &AccountId,
        price: U128,
    ) {
        let _ = self.remove_listing(registry_id, token_id);
        let _ = Promise::new(seller_id.clone()).transfer(NearToken::from_yoctonear(price.0));
        events::emit_design_purchase(buyer_id, seller_id, registry_id, token_id, price);
    }

    pub(crate) fn refund_buyer(
        &mut self,
        buyer_id: &AccountId,
        registry_id: &AccountId,
        token_id: u64,
        amount: U128,
        reason: &str,
    ) {
        env::log_str(&format!("Purchase failed: {}", reason));
        if amount.0 > 0 {
            let _ = Promise::new(buyer_id.clone()).transfer(NearToken::from_yoctonear(amount.0));
        }
        events::emit_design_purchase_failed(buyer_id, registry_id, token_id, amount, reason);
    }
}
