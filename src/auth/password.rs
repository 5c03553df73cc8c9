use tracing::error;

use crate::error::{Error, Result};

/// Fixed bcrypt work factor. The cost and per-call salt are embedded in the
/// hash output, so verification needs nothing besides the hash itself.
const BCRYPT_COST: u32 = 10;

pub fn hash_password(plain: &str) -> Result<String> {
    bcrypt::hash(plain, BCRYPT_COST).map_err(|e| {
        error!(error = %e, "password hashing error");
        Error::Hashing(e)
    })
}

pub fn verify_password(plain: &str, hash: &str) -> Result<bool> {
    bcrypt::verify(plain, hash).map_err(|e| {
        error!(error = %e, "password comparison error");
        Error::Comparison(e)
    })
}
