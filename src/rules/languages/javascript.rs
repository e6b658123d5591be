use crate::rules::{Rule, Severity};
use once_cell::sync::Lazy;

static REGLAS: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::new(
            "console-log",
            r"console\.log\(",
            "Elimina las llamadas a console.log antes de pasar a producción",
            Severity::Warning,
        ),
        Rule::new(
            "uso-de-var",
            r"\bvar\s+",
            "Usa let o const en lugar de var",
            Severity::Info,
        ),
        Rule::new(
            "comparacion-debil",
            r"[^=!]==|!=[^=]",
            "Usa === o !== para comparaciones estrictas",
            Severity::Warning,
        ),
    ]
});

/// Reglas específicas de JavaScript.
pub fn reglas() -> &'static [Rule] {
    &REGLAS
}
