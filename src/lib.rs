pub mod auth;
pub mod config;
pub mod db;
pub mod error;

pub use auth::dto::{NewUser, PublicUser};
pub use auth::repo::{PgUserStore, UserStore};
pub use auth::services::AuthService;
pub use error::{Error, Result};
