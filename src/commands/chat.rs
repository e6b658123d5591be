use crate::config::RevisorConfig;
use crate::service::ReviewService;
use crate::ui;
use colored::*;
use std::io::{BufRead, Write};
use std::path::Path;

/// Modo chat: el flujo clásico de pegar código y recibir la revisión.
///
/// El código se termina con una línea que contiene solo `.` (o EOF).
/// Las entradas vacías se rechazan antes de invocar el motor.
pub async fn handle_chat() {
    ui::mostrar_banner();

    let config = RevisorConfig::load(Path::new("."));
    let servicio = ReviewService::new(config);

    let stdin = std::io::stdin();
    loop {
        let lenguaje = ui::seleccionar_lenguaje();

        println!(
            "\n📥 Pega tu código {} y termina con una línea que contenga solo {} :",
            lenguaje.nombre().bright_green(),
            "'.'".cyan().bold()
        );
        let _ = std::io::stdout().flush();

        let mut codigo = String::new();
        let mut termino_con_punto = false;
        for linea in stdin.lock().lines() {
            match linea {
                Ok(l) if l.trim() == "." => {
                    termino_con_punto = true;
                    break;
                }
                Ok(l) => {
                    codigo.push_str(&l);
                    codigo.push('\n');
                }
                Err(e) => {
                    eprintln!("{} Error al leer la entrada: {}", "⚠️".yellow(), e);
                    break;
                }
            }
        }
        // Si el iterador terminó sin el punto, stdin se cerró (EOF).
        let eof = !termino_con_punto;

        if codigo.trim().is_empty() {
            if eof {
                break;
            }
            println!("{}", "⚠️  No se recibió código, intenta de nuevo.".yellow());
            continue;
        }

        let pb = ui::crear_progreso("Revisando tu código...");
        let reporte = servicio.submit(&codigo, lenguaje).await;
        pb.finish_and_clear();

        println!("\n{}\n", reporte);

        if eof {
            break;
        }

        let continuar = dialoguer::Confirm::with_theme(&dialoguer::theme::ColorfulTheme::default())
            .with_prompt("¿Deseas revisar otro fragmento?")
            .default(true)
            .interact()
            .unwrap_or(false);

        if !continuar {
            break;
        }
    }

    println!("{}", "\n👋 Hasta la próxima revisión.".bright_cyan());
}
