//! In-memory pet service.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::api::{PetService, ServiceError, ServiceResult};
use crate::records::{EnemyRecord, PetRecord, PveResponse};

/// Pet service answering from canned records.
///
/// Every enemy request for a known pet returns the configured enemy. A
/// service built with [`StaticPetService::unavailable`] fails every call.
#[derive(Debug, Default)]
pub struct StaticPetService {
    pets: Vec<PetRecord>,
    enemy: EnemyRecord,
    message: Option<String>,
    outage: Option<String>,
    requests: Mutex<Vec<String>>,
}

impl StaticPetService {
    pub fn new(pets: Vec<PetRecord>, enemy: EnemyRecord) -> Self {
        Self {
            pets,
            enemy,
            ..Self::default()
        }
    }

    /// A service whose every call fails with [`ServiceError::Unavailable`].
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            outage: Some(reason.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Pet ids passed to `request_enemy`, in call order.
    pub async fn enemy_requests(&self) -> Vec<String> {
        self.requests.lock().await.clone()
    }

    fn check_outage(&self) -> ServiceResult<()> {
        match &self.outage {
            Some(reason) => Err(ServiceError::Unavailable {
                reason: reason.clone(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl PetService for StaticPetService {
    async fn list_pets(&self) -> ServiceResult<Vec<PetRecord>> {
        self.check_outage()?;
        Ok(self.pets.clone())
    }

    async fn request_enemy(&self, pet_id: &str) -> ServiceResult<PveResponse> {
        self.requests.lock().await.push(pet_id.to_string());
        self.check_outage()?;

        if !self.pets.iter().any(|pet| pet.id == pet_id) {
            return Err(ServiceError::PetNotFound {
                pet_id: pet_id.to_string(),
            });
        }

        Ok(PveResponse {
            message: self.message.clone(),
            enemy: self.enemy.clone(),
        })
    }
}
