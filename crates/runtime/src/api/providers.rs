//! Asynchronous abstraction over the external pet service.
//!
//! The session only needs two calls: list the user's pets and request an
//! enemy for one of them. Runtime users plug in [`HttpPetService`] for the
//! real backend or an in-memory fixture for tests.
//!
//! [`HttpPetService`]: crate::providers::HttpPetService
use async_trait::async_trait;

use super::errors::ServiceResult;
use crate::records::{PetRecord, PveResponse};

/// Trait for the pet service collaborator.
#[async_trait]
pub trait PetService: Send + Sync {
    /// `GET /pets`: every pet owned by the current user.
    async fn list_pets(&self) -> ServiceResult<Vec<PetRecord>>;

    /// `POST /pets/pve/{pet_id}`: asks the service to generate an enemy.
    async fn request_enemy(&self, pet_id: &str) -> ServiceResult<PveResponse>;
}
