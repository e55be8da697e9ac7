//! Prelude module for convenient imports.
//!
//! ```ignore
//! use marklee::prelude::*;
//! ```
//!
//! This imports the domain decisions, the API models, the admin client and
//! the session context.

// Domain logic
pub use crate::domain::{
    compute_visible_pages, decide, validate_email, validate_password, validate_registration,
    validate_username, GuardDecision, PageItem, Pagination, Role,
};

// API models
pub use crate::models::{ApiEnvelope, BriefQuestion, User, UsersPage};

// Client side
pub use crate::auth::{Session, SessionContext};
pub use crate::client::{AdminClient, ClientError};

// Errors
pub use crate::error::{MarkleeError, MarkleeResult};
