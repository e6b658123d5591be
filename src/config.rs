use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Versión actual de Revisor (leída desde Cargo.toml en tiempo de compilación)
pub const REVISOR_VERSION: &str = env!("CARGO_PKG_VERSION");

const ARCHIVO_CONFIG: &str = ".revisorrc.toml";

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RevisorConfig {
    pub api_url: String,
    pub timeout_secs: u64,
    pub use_remote: bool,
}

impl Default for RevisorConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:3001/api".to_string(),
            timeout_secs: 30,
            use_remote: true,
        }
    }
}

impl RevisorConfig {
    /// Carga la configuración del directorio dado, o la default si no existe.
    /// `REVISOR_API_URL` tiene prioridad sobre el archivo.
    pub fn load(path: &Path) -> Self {
        let mut config: RevisorConfig = fs::read_to_string(path.join(ARCHIVO_CONFIG))
            .ok()
            .and_then(|contenido| toml::from_str(&contenido).ok())
            .unwrap_or_default();

        if let Ok(url) = std::env::var("REVISOR_API_URL") {
            if !url.trim().is_empty() {
                config.api_url = url;
            }
        }

        config
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let toml = toml::to_string_pretty(self)?;
        fs::write(path.join(ARCHIVO_CONFIG), toml)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_por_defecto() {
        let config = RevisorConfig::default();
        assert_eq!(config.timeout_secs, 30);
        assert!(config.use_remote);
        assert!(config.api_url.contains("localhost"));
    }

    #[test]
    fn test_guardar_y_cargar() {
        let tmp = TempDir::new().unwrap();
        let config = RevisorConfig {
            api_url: "http://ejemplo.test/api".to_string(),
            timeout_secs: 5,
            use_remote: false,
        };
        config.save(tmp.path()).unwrap();

        let cargada = RevisorConfig::load(tmp.path());
        assert_eq!(cargada.api_url, "http://ejemplo.test/api");
        assert_eq!(cargada.timeout_secs, 5);
        assert!(!cargada.use_remote);
    }

    #[test]
    fn test_config_corrupta_usa_default() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join(".revisorrc.toml"), "esto no es toml ][").unwrap();
        let config = RevisorConfig::load(tmp.path());
        assert_eq!(config.timeout_secs, 30);
        assert!(config.use_remote);
    }

    #[test]
    fn test_directorio_sin_config_usa_default() {
        let tmp = TempDir::new().unwrap();
        let config = RevisorConfig::load(tmp.path());
        assert_eq!(config.timeout_secs, 30);
    }
}
