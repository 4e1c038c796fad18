//! HTTP pet service client.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::api::{PetService, Result, RuntimeError, ServiceError, ServiceResult};
use crate::config::ServiceConfig;
use crate::records::{PetRecord, PveResponse};

/// Pet service client using the backend's JSON API.
pub struct HttpPetService {
    /// Base URL without a trailing slash
    base_url: String,

    /// Parsed base URL, joined with escaped path segments per request
    base: reqwest::Url,

    /// HTTP client (carries the request timeout)
    http_client: reqwest::Client,
}

impl HttpPetService {
    /// Create a client for the configured backend.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::InvalidConfig`] if the base URL does not parse
    /// and [`RuntimeError::HttpClient`] if the client cannot be built.
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let url = reqwest::Url::parse(&config.base_url).map_err(|err| {
            RuntimeError::InvalidConfig(format!("PET_API_URL `{}`: {err}", config.base_url))
        })?;
        if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
            return Err(RuntimeError::InvalidConfig(format!(
                "PET_API_URL `{}` must use http or https",
                config.base_url
            )));
        }

        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(RuntimeError::HttpClient)?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            base: url,
            http_client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Appends `segments` to the base path, percent-encoding each one.
    fn url(&self, segments: &[&str]) -> String {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url.to_string()
    }

    /// Checks the status and decodes the JSON body.
    async fn read_json<T: DeserializeOwned>(
        url: &str,
        response: reqwest::Response,
    ) -> ServiceResult<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ServiceError::Status {
                url: url.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| ServiceError::Transport {
                url: url.to_string(),
                source,
            })?;

        tracing::debug!("pet service response from {}: {}", url, body);

        serde_json::from_str(&body).map_err(|source| ServiceError::Malformed {
            url: url.to_string(),
            source,
        })
    }
}

#[async_trait]
impl PetService for HttpPetService {
    async fn list_pets(&self) -> ServiceResult<Vec<PetRecord>> {
        let url = self.url(&["pets"]);
        tracing::debug!("listing pets: GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|source| ServiceError::Transport {
                url: url.clone(),
                source,
            })?;

        Self::read_json(&url, response).await
    }

    async fn request_enemy(&self, pet_id: &str) -> ServiceResult<PveResponse> {
        let url = self.url(&["pets", "pve", pet_id]);
        tracing::debug!("requesting enemy: POST {}", url);

        let response = self
            .http_client
            .post(&url)
            .send()
            .await
            .map_err(|source| ServiceError::Transport {
                url: url.clone(),
                source,
            })?;

        Self::read_json(&url, response).await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn config(base_url: &str) -> ServiceConfig {
        ServiceConfig {
            base_url: base_url.to_string(),
            timeout: Duration::from_secs(1),
        }
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let service = HttpPetService::new(&config("http://localhost:3000/")).unwrap();
        assert_eq!(service.base_url(), "http://localhost:3000");
        assert_eq!(service.url(&["pets"]), "http://localhost:3000/pets");
    }

    #[test]
    fn pet_id_is_escaped_as_one_segment() {
        let service = HttpPetService::new(&config("http://localhost:3000")).unwrap();
        assert_eq!(
            service.url(&["pets", "pve", "a/b?c"]),
            "http://localhost:3000/pets/pve/a%2Fb%3Fc"
        );

        let nested = HttpPetService::new(&config("https://pets.example/api/")).unwrap();
        assert_eq!(
            nested.url(&["pets", "pve", "64f1"]),
            "https://pets.example/api/pets/pve/64f1"
        );
    }

    #[test]
    fn invalid_base_url_is_a_config_error() {
        assert!(matches!(
            HttpPetService::new(&config("not a url")),
            Err(RuntimeError::InvalidConfig(_))
        ));
        assert!(matches!(
            HttpPetService::new(&config("ftp://pets.example")),
            Err(RuntimeError::InvalidConfig(_))
        ));
    }

    #[tokio::test]
    async fn unreachable_service_is_a_transport_error() {
        // port 9 (discard) is closed on test machines
        let service = HttpPetService::new(&config("http://127.0.0.1:9")).unwrap();
        let err = service.list_pets().await.unwrap_err();
        assert!(matches!(err, ServiceError::Transport { .. }));
    }
}
