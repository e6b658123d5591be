pub mod javascript;
pub mod python;

use crate::language::Language;
use crate::rules::Rule;

/// Devuelve las reglas específicas del lenguaje dado.
/// Los lenguajes sin reglas registradas devuelven un slice vacío, nunca un error.
pub fn reglas_para(lang: Language) -> &'static [Rule] {
    match lang {
        Language::Javascript => javascript::reglas(),
        Language::Python => python::reglas(),
        _ => &[],
    }
}
