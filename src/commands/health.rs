use crate::config::RevisorConfig;
use crate::service::ReviewService;
use crate::ui;
use colored::*;
use std::path::Path;

/// Consulta el estado del backend remoto. Nunca termina con error: si el
/// servicio no responde, se informa y el motor local sigue disponible.
pub async fn handle_health() {
    let config = RevisorConfig::load(Path::new("."));
    println!("🩺 Consultando {}...", config.api_url.cyan());

    let servicio = ReviewService::new(config);

    let pb = ui::crear_progreso("Esperando respuesta del backend...");
    let salud = servicio.verificar_salud().await;
    pb.finish_and_clear();

    if salud.status == "unavailable" {
        println!("   {} Backend no disponible: {}", "⚠️".yellow(), salud.message);
        println!("   {} Las revisiones usarán el motor local.", "ℹ️".cyan());
    } else {
        println!("   {} Backend disponible ({})", "✅".green(), salud.status);
        if !salud.message.is_empty() {
            println!("   {}", salud.message.dimmed());
        }
    }
}
