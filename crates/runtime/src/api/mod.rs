//! Public runtime API surface.
//!
//! Gathers the error types and the pet service abstraction so the session and
//! the providers can depend on a single module.

pub mod errors;
pub mod providers;

pub use errors::{Result, RuntimeError, ServiceError, ServiceResult};
pub use providers::PetService;
