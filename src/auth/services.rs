use std::sync::Arc;

use tracing::{error, info};

use crate::auth::dto::{NewUser, PublicUser};
use crate::auth::password;
use crate::auth::repo::UserStore;
use crate::error::{Error, Result};

/// Account creation and credential verification over an injected user store.
///
/// Both operations are stateless single-shot calls; cancellation and timeout
/// policy belong to the store and to the caller.
pub struct AuthService {
    store: Arc<dyn UserStore>,
}

impl AuthService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Creates an account, rejecting any (email, role) pair that already
    /// exists. The stored password is a bcrypt hash; the returned record
    /// never includes it.
    pub async fn create_user(&self, new_user: NewUser) -> Result<PublicUser> {
        let NewUser {
            name,
            email,
            password,
            role,
        } = new_user;

        if self
            .store
            .find_by_email_and_role(&email, &role)
            .await?
            .is_some()
        {
            error!(%email, %role, "user creation error: account already exists");
            return Err(Error::DuplicateAccount);
        }

        let hash = password::hash_password(&password)?;
        let user = self.store.insert(&name, &email, &hash, &role).await?;

        info!(id = user.id, email = %user.email, "new user created");
        Ok(user)
    }

    /// Verifies credentials against the stored hash. Unknown email and wrong
    /// password are deliberately reported as the same error.
    pub async fn sign_in_user(&self, email: &str, password: &str) -> Result<PublicUser> {
        let Some(user) = self.store.find_by_email(email).await? else {
            error!(%email, "sign-in error: no account for email");
            return Err(Error::InvalidCredentials);
        };

        if !password::verify_password(password, &user.password)? {
            error!(%email, "sign-in error: password mismatch");
            return Err(Error::InvalidCredentials);
        }

        info!(id = user.id, email = %user.email, "user signed in");
        Ok(user.into_public())
    }
}
