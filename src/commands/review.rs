use crate::config::RevisorConfig;
use crate::language::Language;
use crate::service::ReviewService;
use crate::stats::RevisorStats;
use crate::ui;
use crate::analysis;
use colored::*;
use std::path::Path;

/// Revisa un archivo: adivina el lenguaje por extensión salvo que se
/// indique explícitamente, y registra el resultado en las stats locales.
pub async fn handle_review(file: &str, lang: Option<String>, solo_local: bool) {
    let path = Path::new(file);

    let codigo = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{} No se pudo leer '{}': {}", "❌".red(), file, e);
            std::process::exit(1);
        }
    };

    if codigo.trim().is_empty() {
        eprintln!("{} El archivo '{}' está vacío.", "⚠️".yellow(), file);
        return;
    }

    let lenguaje = match lang {
        Some(id) => Language::parse(&id),
        None => path
            .extension()
            .and_then(|e| e.to_str())
            .map(Language::desde_extension)
            .unwrap_or(Language::Other),
    };

    let mut config = RevisorConfig::load(Path::new("."));
    if solo_local {
        config.use_remote = false;
    }
    let servicio = ReviewService::new(config);

    println!(
        "📄 Revisando {} como {}...",
        file.cyan(),
        lenguaje.nombre().bright_green()
    );

    let pb = ui::crear_progreso("Analizando código...");
    let reporte = servicio.submit(&codigo, lenguaje).await;
    pb.finish_and_clear();

    println!("\n{}", reporte);

    // Los contadores son siempre del motor local: si el reporte mostrado
    // vino del backend remoto, el conteo de problemas puede diferir del
    // texto impreso. Son métricas de uso, no un resumen del reporte.
    if let Ok(analisis) = analysis::analyze(&codigo, lenguaje) {
        let mut stats = RevisorStats::cargar(Path::new("."));
        stats.registrar_revision(analisis.issues.len());
        stats.guardar(Path::new("."));
    }
}
