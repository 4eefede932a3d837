//! # Coursebook Gate
//!
//! Authentication and ownership enforcement for every mutating course request.
//! The crate knows nothing about headers or SQL: it consumes decoded
//! [`Credentials`], reads principals through the [`PrincipalSource`] trait, and
//! returns tagged failures. [`GateError`] converts into
//! [`coursebook_core::AppError`], which owns the status mapping.
//!
//! # Pipeline
//!
//! ```text
//! START         -> authenticate -> AUTHENTICATED | REJECTED(Missing | NotFound | Mismatch)
//! AUTHENTICATED -> load by id   -> LOADED        | REJECTED(resource NotFound)
//! LOADED        -> authorize    -> AUTHORIZED    | REJECTED(Forbidden)
//! AUTHORIZED    -> handler runs the mutation
//! ```
//!
//! Every rejection is terminal. Loading is the caller's job (it owns the
//! store); [`admit`] takes the load result and enforces that existence is
//! checked before ownership.
//!
//! # Example
//!
//! ```ignore
//! use coursebook_gate::{Credentials, Gate, admit};
//!
//! let gate = Gate::new(bcrypt::DEFAULT_COST)?;
//! let principal = gate.authenticate(&store, Some(&credentials)).await?;
//! let course = admit(&principal, store.find_course(id).await?, "Course")?;
//! ```

pub mod authorize;
pub mod credentials;
pub mod error;
pub mod gate;
pub mod principal;

pub use authorize::{Owned, admit, authorize};
pub use credentials::Credentials;
pub use error::{ACCESS_DENIED, AuthFailure, GateError};
pub use gate::Gate;
pub use principal::{Principal, PrincipalSource, StoredPrincipal};
