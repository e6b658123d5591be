use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const ARCHIVO_STATS: &str = ".revisor_stats.json";

/// Contadores locales de uso. Mejor esfuerzo: si no se pueden guardar,
/// la revisión sigue funcionando igual. El conteo de problemas sale
/// siempre del motor local, no del backend remoto.
#[derive(Serialize, Deserialize, Default)]
pub struct RevisorStats {
    pub total_revisiones: u32,
    pub total_problemas: u32,
    pub ultima_revision: Option<String>,
}

impl RevisorStats {
    pub fn cargar(path: &Path) -> Self {
        let stats_path = path.join(ARCHIVO_STATS);
        if let Ok(contenido) = fs::read_to_string(stats_path) {
            serde_json::from_str(&contenido).unwrap_or_default()
        } else {
            Self::default()
        }
    }

    pub fn guardar(&self, path: &Path) {
        let stats_path = path.join(ARCHIVO_STATS);
        if let Ok(contenido) = serde_json::to_string_pretty(self) {
            let _ = fs::write(stats_path, contenido);
        }
    }

    pub fn registrar_revision(&mut self, problemas: usize) {
        self.total_revisiones += 1;
        self.total_problemas += problemas as u32;
        self.ultima_revision = Some(chrono::Local::now().format("%Y-%m-%dT%H:%M:%S").to_string());
    }
}
