//! Fachada del servicio de revisión
//!
//! Política: intentar primero el backend remoto (acotado por timeout) y,
//! ante cualquier fallo, caer al pipeline local determinista. El llamador
//! siempre recibe un reporte en texto, nunca un error sin manejar.

use crate::analysis::{self, report};
use crate::api::{HealthStatus, ReviewApi};
use crate::config::RevisorConfig;
use crate::language::Language;
use anyhow::anyhow;

pub struct ReviewService {
    api: ReviewApi,
    config: RevisorConfig,
}

impl ReviewService {
    pub fn new(config: RevisorConfig) -> Self {
        Self {
            api: ReviewApi::new(&config),
            config,
        }
    }

    /// Punto de entrada único: código + lenguaje → reporte en texto.
    ///
    /// El código vacío se rechaza antes de cualquier análisis; el fallo
    /// remoto nunca llega al llamador.
    pub async fn submit(&self, codigo: &str, lang: Language) -> String {
        if codigo.trim().is_empty() {
            return report::formatear_reporte_error(&anyhow!("el código enviado está vacío"));
        }

        if self.config.use_remote {
            match self.api.consultar_revision(codigo, lang).await {
                Ok(revision) => return revision,
                Err(_) => {
                    // Backend caído o sin configurar: seguimos con el motor local.
                }
            }
        }

        self.revisar_local(codigo, lang)
    }

    /// Pipeline local: cualquier fallo del análisis se convierte en un
    /// reporte de error, entregado por el mismo canal que uno normal.
    pub fn revisar_local(&self, codigo: &str, lang: Language) -> String {
        match analysis::revisar(codigo, lang) {
            Ok(reporte) => reporte,
            Err(e) => report::formatear_reporte_error(&e),
        }
    }

    /// Estado del backend remoto; nunca falla.
    pub async fn verificar_salud(&self) -> HealthStatus {
        self.api.verificar_salud().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn servicio_sin_backend() -> ReviewService {
        ReviewService::new(RevisorConfig {
            api_url: "http://127.0.0.1:9".to_string(),
            timeout_secs: 1,
            use_remote: true,
        })
    }

    fn servicio_local() -> ReviewService {
        ReviewService::new(RevisorConfig {
            use_remote: false,
            ..RevisorConfig::default()
        })
    }

    #[tokio::test]
    async fn test_fallback_local_cuando_no_hay_backend() {
        let servicio = servicio_sin_backend();
        let reporte = servicio
            .submit("function foo() { var x = 1; }", Language::Javascript)
            .await;
        // El fallo remoto no se propaga: siempre hay reporte.
        assert!(reporte.contains("Reporte de Revisión de Código"));
        assert!(reporte.contains("Métricas de Calidad"));
    }

    #[tokio::test]
    async fn test_codigo_vacio_devuelve_reporte_de_error() {
        let servicio = servicio_local();
        let reporte = servicio.submit("   \n  ", Language::Python).await;
        assert!(reporte.starts_with("❌"));
    }

    #[tokio::test]
    async fn test_modo_local_no_toca_la_red() {
        let servicio = servicio_local();
        let reporte = servicio.submit("let x = 1", Language::Other).await;
        assert!(reporte.contains("buena calidad"));
    }

    #[tokio::test]
    async fn test_salud_reporta_no_disponible() {
        let servicio = servicio_sin_backend();
        let salud = servicio.verificar_salud().await;
        assert_eq!(salud.status, "unavailable");
    }
}
