pub mod password;
pub mod principal;

pub use password::{PasswordHasher, Sha256PasswordHasher};
pub use principal::resolve_user;
