// ABOUTME: Recipe service seam and HTTP client for the generation endpoint
// ABOUTME: Maps transport and decode faults into ServiceError, service failures stay data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

use crate::config::ServiceConfig;
use crate::errors::{ServiceError, ServiceResult};
use crate::models::{GenerationRequest, GenerationResponse};
use async_trait::async_trait;
use reqwest::Client;

/// The recipe-generation collaborator seam.
///
/// The orchestrator drives this trait, never `reqwest` directly, so its
/// state machine is deterministic under test with a scripted
/// implementation.
#[async_trait]
pub trait RecipeService: Send + Sync {
    /// Submit one generation request and return the service's structured
    /// reply.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] when no usable response was obtained
    /// (network fault, non-2xx status, undecodable body). A reply the
    /// service marks as failed is returned as `Ok` with
    /// `success: false`.
    async fn generate_recipe(
        &self,
        request: &GenerationRequest,
    ) -> ServiceResult<GenerationResponse>;
}

/// HTTP implementation of [`RecipeService`] over the backend REST API
pub struct HttpRecipeService {
    config: ServiceConfig,
    client: Client,
}

impl HttpRecipeService {
    /// Create a client with the given configuration
    #[must_use]
    pub fn new(config: ServiceConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .unwrap_or_default();

        Self { config, client }
    }

    /// The generation endpoint this client posts to
    #[must_use]
    pub fn generate_url(&self) -> String {
        format!("{}/recipes/generate", self.config.base_url)
    }

    /// Probe the service root route to check reachability.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] if the service is unreachable or answers
    /// with a non-success status.
    pub async fn health_check(&self) -> ServiceResult<()> {
        let url = format!("{}/", self.config.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ServiceError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ServiceError::Api {
                status_code: status.as_u16(),
                message,
                retryable: status.is_server_error(),
            });
        }

        Ok(())
    }
}

#[async_trait]
impl RecipeService for HttpRecipeService {
    async fn generate_recipe(
        &self,
        request: &GenerationRequest,
    ) -> ServiceResult<GenerationResponse> {
        let url = self.generate_url();

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| ServiceError::Network(e.to_string()))?;

        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        if !status.is_success() {
            return Err(ServiceError::Api {
                status_code: status.as_u16(),
                message: text,
                retryable: status.is_server_error(),
            });
        }

        serde_json::from_str(&text).map_err(|e| ServiceError::Parse {
            field: "generation_response",
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_url_joins_without_double_slash() {
        let config = ServiceConfig {
            base_url: "http://127.0.0.1:8000/api".to_owned(),
            ..ServiceConfig::default()
        };
        let service = HttpRecipeService::new(config);
        assert_eq!(
            service.generate_url(),
            "http://127.0.0.1:8000/api/recipes/generate"
        );
    }
}
