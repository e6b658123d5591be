//! Módulo de interfaz de usuario
//!
//! Funciones relacionadas con la interacción con el usuario en la terminal.

use crate::language::Language;
use colored::*;
use dialoguer::{Select, theme::ColorfulTheme};

/// Muestra el banner de Revisor al inicio del modo chat
pub fn mostrar_banner() {
    println!();
    println!(
        "{}",
        "╔════════════════════════════════════════════╗".bright_cyan()
    );
    println!(
        "{}",
        r"
   ██████╗ ███████╗██╗   ██╗██╗███████╗ ██████╗ ██████╗
   ██╔══██╗██╔════╝██║   ██║██║██╔════╝██╔═══██╗██╔══██╗
   ██████╔╝█████╗  ██║   ██║██║███████╗██║   ██║██████╔╝
   ██╔══██╗██╔══╝  ╚██╗ ██╔╝██║╚════██║██║   ██║██╔══██╗
   ██║  ██║███████╗ ╚████╔╝ ██║███████║╚██████╔╝██║  ██║
   ╚═╝  ╚═╝╚══════╝  ╚═══╝  ╚═╝╚══════╝ ╚═════╝ ╚═╝  ╚═╝
"
        .bright_cyan()
        .bold()
    );
    println!(
        "{}",
        "╚════════════════════════════════════════════╝".bright_cyan()
    );
    println!();
    println!(
        "{}",
        "       🤖 Revisor: Asistente de Revisión de Código 🤖"
            .bright_white()
            .bold()
    );
    println!(
        "{}",
        format!("                        v{}", crate::config::REVISOR_VERSION).dimmed()
    );
    println!(
        "{}",
        "       ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".bright_cyan()
    );
}

/// Menú interactivo para elegir el lenguaje del código pegado.
pub fn seleccionar_lenguaje() -> Language {
    let lenguajes = Language::todos();
    let nombres: Vec<&str> = lenguajes.iter().map(|l| l.nombre()).collect();

    let seleccion = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Selecciona el lenguaje del código")
        .items(&nombres)
        .default(0)
        .interact_opt()
        .ok()
        .flatten()
        .unwrap_or(lenguajes.len() - 1);

    lenguajes[seleccion]
}

/// Helper para mostrar una barra de progreso genérica
pub fn crear_progreso(mensaje: &str) -> indicatif::ProgressBar {
    let pb = indicatif::ProgressBar::new_spinner();
    pb.set_style(
        indicatif::ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(mensaje.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
