//! Authentication primitives.
//!
//! - [`session`] - Client-side session record, shared context and file store
//! - [`password`] - Password digests and bearer-token generation

pub mod password;
pub mod session;

pub use password::{generate_token, hash_password, verify_password};
pub use session::{Session, SessionContext, SessionStore, SessionUser};
