//! Request extractors for cross-cutting concerns.
//!
//! - [`auth`]: the [`CurrentUser`](auth::CurrentUser) extractor, which
//!   authenticates the request through the gate
//!
//! Ownership is not checked here. Handlers load the target course and pass
//! it to [`coursebook_gate::admit`], so a missing course is reported before
//! an ownership failure.
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::auth::CurrentUser;
//!
//! async fn get_current_user(CurrentUser(principal): CurrentUser) -> impl IntoResponse {
//!     Json(principal.id)
//! }
//! ```

pub mod auth;
