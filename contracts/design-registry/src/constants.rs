use near_sdk::NearToken;

pub const MAX_TOKEN_URI_LEN: usize = 2_048;
pub const MAX_CREATOR_NAME_LEN: usize = 256;
pub const MAX_DESCRIPTION_LEN: usize = 4_096;

pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);
