use serde::{Deserialize, Serialize};

/// Identity claims carried in a session token's payload segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub id: u64,          // record id of the caller
    pub username: String,
    pub role: String,     // copied from the record at issue time
    pub iat: i64,         // issued at (unix seconds)
    pub exp: i64,         // expires at (unix seconds), iat + the fixed window
}
