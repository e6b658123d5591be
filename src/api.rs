//! Cliente HTTP hacia el backend de revisión
//!
//! Una sola llamada `POST /code-review` acotada por timeout, más un
//! health check de mejor esfuerzo. El motor funciona sin red: cualquier
//! fallo aquí se recupera en la capa de servicio con el pipeline local.

use crate::config::RevisorConfig;
use crate::language::Language;
use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
}

pub struct ReviewApi {
    client: reqwest::Client,
    base_url: String,
}

impl ReviewApi {
    pub fn new(config: &RevisorConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Envía el código al backend y devuelve el texto de la revisión.
    pub async fn consultar_revision(&self, codigo: &str, lang: Language) -> anyhow::Result<String> {
        let url = format!("{}/code-review", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&json!({
                "code": codigo,
                "language": lang.id(),
                "timestamp": chrono::Utc::now().to_rfc3339(),
            }))
            .send()
            .await?;

        let status = response.status();
        let body_text = response.text().await?;

        if !status.is_success() {
            return Err(anyhow!(
                "Error del backend de revisión (Status {}): {}",
                status,
                body_text
            ));
        }

        let body: serde_json::Value = serde_json::from_str(&body_text)?;
        extraer_revision(&body)
            .ok_or_else(|| anyhow!("Respuesta del backend inesperada. Body: {}", body_text))
    }

    /// Health check de mejor esfuerzo: nunca falla, en el peor caso
    /// reporta el servicio como no disponible.
    pub async fn verificar_salud(&self) -> HealthStatus {
        let url = format!("{}/health", self.base_url);

        match self.client.get(&url).send().await {
            Ok(response) if response.status().is_success() => response
                .json::<HealthStatus>()
                .await
                .unwrap_or_else(|_| HealthStatus {
                    status: "ok".to_string(),
                    message: "Servicio disponible".to_string(),
                }),
            Ok(response) => HealthStatus {
                status: "unavailable".to_string(),
                message: format!("El servicio respondió con status {}", response.status()),
            },
            Err(e) => HealthStatus {
                status: "unavailable".to_string(),
                message: format!("El servicio no está disponible: {}", e),
            },
        }
    }
}

/// El backend puede responder `{ "review": "..." }` o un objeto completo;
/// en el segundo caso se entrega el JSON formateado.
fn extraer_revision(body: &serde_json::Value) -> Option<String> {
    if let Some(review) = body.get("review").and_then(|r| r.as_str()) {
        return Some(review.to_string());
    }
    if body.is_object() || body.is_string() {
        return serde_json::to_string_pretty(body).ok();
    }
    None
}
