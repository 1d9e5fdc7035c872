mod builder;

mod nep171;
mod registry;

pub(crate) use nep171::*;
pub(crate) use registry::*;

pub(crate) const PREFIX: &str = "EVENT_JSON:";

pub(crate) const NEP171_STANDARD: &str = "nep171";
pub(crate) const NEP171_VERSION: &str = "1.2.0";

pub(crate) const REGISTRY_STANDARD: &str = "design_registry";
pub(crate) const REGISTRY_VERSION: &str = "1.0.0";
