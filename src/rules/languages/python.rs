use crate::rules::{Rule, Severity};
use once_cell::sync::Lazy;

static REGLAS: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::new(
            "uso-de-print",
            r"print\(",
            "Usa logging en lugar de print en código de producción",
            Severity::Info,
        ),
        Rule::new(
            "orden-de-imports",
            r"from\s+\w+\s+import.*\nimport",
            "Agrupa los import simples antes de los from...import",
            Severity::Info,
        ),
    ]
});

/// Reglas específicas de Python.
pub fn reglas() -> &'static [Rule] {
    &REGLAS
}
