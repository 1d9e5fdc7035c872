use near_sdk::NearToken;

// Listing key invariant: delimiter cannot appear in NEAR account IDs,
// preventing (registry, token) key collisions.
pub const DELIMETER: &str = ":";
pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);

pub const GAS_REGISTRY_VIEW: u64 = 10;
pub const GAS_PROCESS_LISTING: u64 = 20;
pub const GAS_REGISTRY_TRANSFER: u64 = 30;
pub const GAS_RESOLVE_PURCHASE: u64 = 30;
// Must cover scheduling the transfer plus its resolve callback.
pub const GAS_PROCESS_PURCHASE: u64 = 90;
