use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Crate-wide error type. Failures are logged where they are detected and
/// propagated unchanged; nothing here is retried.
#[derive(Debug, Error)]
pub enum Error {
    /// The hashing primitive itself failed; never a wrong-password signal.
    #[error("password hashing failed")]
    Hashing(#[source] bcrypt::BcryptError),

    /// Malformed stored hash or primitive failure during verification.
    #[error("password comparison failed")]
    Comparison(#[source] bcrypt::BcryptError),

    /// A user with the same (email, role) pair already exists.
    #[error("an account with this email and role already exists")]
    DuplicateAccount,

    /// Unknown email or wrong password. Intentionally a single variant so
    /// callers cannot tell whether the email is registered.
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("configuration error: {0}")]
    Config(String),
}
