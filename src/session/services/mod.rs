//! Application services for signing in and out.

mod session;

pub use session::{INVALID_CREDENTIALS_MESSAGE, SessionError, SessionResult, SessionService};
