use crate::language::Language;
use crate::rules::{self, Rule, Severity, languages};
use colored::Colorize;

fn etiqueta(severidad: Severity) -> &'static str {
    match severidad {
        Severity::Error => "[ERROR]",
        Severity::Warning => "[WARNING]",
        Severity::Info => "[INFO]",
    }
}

fn imprimir_regla(regla: &Rule) {
    println!(
        "  {:<22} {:<10} {}",
        regla.nombre.yellow(),
        etiqueta(regla.severidad),
        regla.mensaje
    );
}

/// Lista el catálogo de reglas, completo o filtrado por lenguaje.
pub fn handle_rules_command(lang: Option<String>) {
    match lang {
        Some(id) => {
            let lenguaje = Language::parse(&id);
            println!("\n{} {}:", "Reglas para".bold(), lenguaje.nombre().bright_green());
            let especificas = languages::reglas_para(lenguaje);
            if especificas.is_empty() {
                println!("  (este lenguaje no tiene reglas específicas registradas)");
            } else {
                for regla in especificas {
                    imprimir_regla(regla);
                }
            }
        }
        None => {
            println!("\n{}", "Reglas generales:".bold());
            for regla in rules::reglas_generales() {
                imprimir_regla(regla);
            }

            for lenguaje in Language::todos() {
                let especificas = languages::reglas_para(*lenguaje);
                if especificas.is_empty() {
                    continue;
                }
                println!("\n{} {}:", "Reglas para".bold(), lenguaje.nombre().bright_green());
                for regla in especificas {
                    imprimir_regla(regla);
                }
            }
        }
    }
    println!();
}
