//! # Revisor - Asistente de Revisión de Código
//!
//! Motor heurístico de revisión: intenta un backend remoto y, si no hay
//! red, analiza el código localmente con un catálogo de reglas por
//! lenguaje, métricas de calidad y un reporte legible.

use clap::Parser;
use commands::{Cli, Commands};

// Módulos
pub mod analysis;
pub mod api;
pub mod commands;
pub mod config;
pub mod language;
pub mod rules;
pub mod service;
pub mod stats;
pub mod ui;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Chat) => {
            commands::chat::handle_chat().await;
        }
        Some(Commands::Review { file, lang, local }) => {
            commands::review::handle_review(&file, lang, local).await;
        }
        Some(Commands::Rules { lang }) => {
            commands::rules::handle_rules_command(lang);
        }
        Some(Commands::Health) => {
            commands::health::handle_health().await;
        }
        None => {
            // Comportamiento por defecto: el chat clásico.
            commands::chat::handle_chat().await;
        }
    }
}
