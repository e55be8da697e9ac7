//! Core decision logic shared by the server and the client.
//!
//! Everything in here is pure and synchronous.
//!
//! ## Modules
//!
//! - [`pagination`] - Page-window computation and page-change model
//! - [`role`] - The [`Role`] enum
//! - [`route_guard`] - Route classification and redirect decisions
//! - [`validation`] - Form field validators

pub mod pagination;
pub mod role;
pub mod route_guard;
pub mod validation;

pub use pagination::{compute_visible_pages, PageItem, Pagination, PaginationState};
pub use role::Role;
pub use route_guard::{classify, decide, GuardDecision, RoleClaim, RouteClass};
pub use validation::{validate_email, validate_password, validate_registration, validate_username};
