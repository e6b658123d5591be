pub mod chat;
pub mod health;
pub mod review;
pub mod rules;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "revisor")]
#[command(about = "Asistente de revisión de código con motor local de respaldo", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Chat interactivo: pega código y recibe una revisión
    Chat,
    /// Revisa un archivo de código
    Review {
        /// Archivo a revisar
        file: String,
        /// Lenguaje del código (por defecto se adivina por la extensión)
        #[arg(long)]
        lang: Option<String>,
        /// No intentar el backend remoto, usar solo el motor local
        #[arg(long)]
        local: bool,
    },
    /// Lista las reglas del catálogo
    Rules {
        /// Mostrar solo las reglas de un lenguaje
        #[arg(long)]
        lang: Option<String>,
    },
    /// Consulta el estado del backend de revisión
    Health,
}
