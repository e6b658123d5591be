//! Catálogo de reglas del motor de revisión
//!
//! Las reglas son estáticas: se compilan una sola vez con `Lazy` y se
//! comparten de forma inmutable entre revisiones concurrentes.

pub mod languages;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// Una regla textual: patrón → mensaje → severidad.
pub struct Rule {
    pub nombre: &'static str,
    pub patron: Regex,
    pub mensaje: &'static str,
    pub severidad: Severity,
}

impl Rule {
    pub fn new(
        nombre: &'static str,
        patron: &str,
        mensaje: &'static str,
        severidad: Severity,
    ) -> Self {
        Self {
            nombre,
            // Los patrones del catálogo son constantes verificadas por tests.
            patron: Regex::new(patron).expect("patrón de regla inválido"),
            mensaje,
            severidad,
        }
    }

    /// Cuenta todas las ocurrencias no solapadas del patrón.
    pub fn contar_coincidencias(&self, codigo: &str) -> usize {
        self.patron.find_iter(codigo).count()
    }
}

static REGLAS_GENERALES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::new(
            "funcion-larga",
            r"function\s+\w+\([^)]*\)\s*\{[^}]{200,}",
            "Función muy larga, considera dividirla en funciones más pequeñas",
            Severity::Warning,
        ),
        Rule::new(
            "convencion-nombres",
            r"\b[a-z][a-z0-9]*[A-Z]",
            "Revisa la convención de nombres, se recomienda camelCase consistente",
            Severity::Info,
        ),
    ]
});

/// Reglas aplicables a cualquier lenguaje, en orden de evaluación fijo.
pub fn reglas_generales() -> &'static [Rule] {
    &REGLAS_GENERALES
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;

    #[test]
    fn test_patrones_del_catalogo_compilan() {
        // Forzar la inicialización de todos los Lazy del catálogo.
        assert_eq!(reglas_generales().len(), 2);
        for lang in Language::todos() {
            for regla in languages::reglas_para(*lang) {
                assert!(!regla.nombre.is_empty());
            }
        }
    }

    #[test]
    fn test_conteo_no_solapado() {
        let regla = &languages::reglas_para(Language::Javascript)[0];
        assert_eq!(regla.nombre, "console-log");
        let codigo = "console.log(1); console.log(2); console.log(3);";
        assert_eq!(regla.contar_coincidencias(codigo), 3);
    }

    #[test]
    fn test_regla_funcion_larga() {
        let larga = format!("function foo() {{ {} }}", "let x = 1; ".repeat(30));
        let corta = "function foo() { return 1; }";
        assert_eq!(reglas_generales()[0].contar_coincidencias(&larga), 1);
        assert_eq!(reglas_generales()[0].contar_coincidencias(corta), 0);
    }
}
