mod builder;
mod types;

mod contract;
mod sale;

pub(crate) use contract::*;
pub(crate) use sale::*;

pub(crate) const STANDARD: &str = "design_market";
pub(crate) const VERSION: &str = "1.0.0";
pub(crate) const PREFIX: &str = "EVENT_JSON:";

pub(crate) const SALE: &str = "SALE_UPDATE";
pub(crate) const CONTRACT: &str = "CONTRACT_UPDATE";
