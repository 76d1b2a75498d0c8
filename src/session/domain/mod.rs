//! Domain model for user sessions.

mod email;
mod error;
mod identity;
mod session;

pub use email::EmailAddress;
pub use error::SessionDomainError;
pub use identity::{ExternalIdentity, IdentityToken};
pub use session::{AuthMethod, AuthenticatedUser, Session};
