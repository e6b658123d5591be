//! Generación de sugerencias de mejora
//!
//! Función pura sobre las métricas y el lenguaje: no toca los issues ya
//! emitidos y cada disparador agrega como máximo una sugerencia.

use crate::analysis::Analysis;
use crate::language::Language;

pub fn generar_sugerencias(analysis: &Analysis, codigo: &str, lang: Language) -> Vec<String> {
    let mut sugerencias = Vec::new();
    let m = &analysis.metrics;

    if m.complejidad < 5 {
        sugerencias
            .push("Considera refactorizar las funciones complejas con lógica más simple".to_string());
    }

    if m.legibilidad < 6 {
        sugerencias.push(
            "Mejora el formato del código, agrega comentarios y líneas en blanco".to_string(),
        );
    }

    if m.seguridad < 7 {
        sugerencias.push(
            "Atiende los problemas de seguridad, evita funciones y métodos peligrosos".to_string(),
        );
    }

    if lang == Language::Javascript && !codigo.contains("const") && !codigo.contains("let") {
        sugerencias
            .push("Usa características modernas de JavaScript como const y let".to_string());
    }

    sugerencias
}
