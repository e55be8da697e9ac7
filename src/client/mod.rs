//! Admin API client and console page models.
//!
//! - [`AdminClient`] - Typed calls to the REST service over [`crate::traits::HttpClient`]
//! - [`UserManagementPage`] / [`BriefQuestionsPage`] - Page state with a local error banner

pub mod admin;
pub mod console;
pub mod error;

pub use admin::AdminClient;
pub use console::{Banner, BriefQuestionsPage, UserManagementPage, DEFAULT_PAGE_SIZE};
pub use error::ClientError;
