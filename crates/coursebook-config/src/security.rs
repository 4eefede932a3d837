use std::env;

use crate::parse_or;

#[derive(Clone, Copy, Debug)]
pub struct SecurityConfig {
    /// bcrypt work factor for newly hashed passwords.
    pub bcrypt_cost: u32,
}

impl SecurityConfig {
    pub fn from_env() -> Self {
        Self::with_cost(parse_or(env::var("BCRYPT_COST").ok(), bcrypt::DEFAULT_COST))
    }

    /// Out-of-range costs fall back to bcrypt's default.
    pub fn with_cost(cost: u32) -> Self {
        let bcrypt_cost = if (4..=31).contains(&cost) {
            cost
        } else {
            bcrypt::DEFAULT_COST
        };
        Self { bcrypt_cost }
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self::with_cost(bcrypt::DEFAULT_COST)
    }
}
