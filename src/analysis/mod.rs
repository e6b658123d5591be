//! Motor de análisis estático heurístico
//!
//! Corre el catálogo de reglas sobre el código enviado, calcula las cuatro
//! métricas de calidad y arma el resultado completo de una revisión local.
//! Todo el pipeline es determinista: el mismo código y lenguaje producen
//! siempre el mismo resultado.

pub mod metrics;
pub mod report;
pub mod suggestions;

use crate::language::Language;
use crate::rules::{self, Severity, languages};
use anyhow::bail;
use serde::{Deserialize, Serialize};

pub use metrics::Metrics;

/// Límite de líneas no vacías antes de sugerir dividir el archivo.
const MAX_LINEAS_NO_VACIAS: usize = 100;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum IssueKind {
    Complexity,
    Style,
    LanguageSpecific,
}

/// Un hallazgo individual de la revisión.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Issue {
    pub kind: IssueKind,
    pub mensaje: String,
    pub severidad: Severity,
    pub count: Option<usize>,
    pub regla: Option<String>,
}

/// Resultado completo de una pasada del analizador.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Analysis {
    pub issues: Vec<Issue>,
    pub metrics: Metrics,
    pub sugerencias: Vec<String>,
    pub resumen: String,
}

/// Analiza el código y devuelve issues + métricas.
///
/// Las sugerencias y el resumen se completan después; ver [`revisar`].
pub fn analyze(codigo: &str, lang: Language) -> anyhow::Result<Analysis> {
    if codigo.trim().is_empty() {
        bail!("el código enviado está vacío");
    }

    let mut issues = Vec::new();

    // 1. Análisis básico: longitud del archivo y reglas generales.
    let lineas_no_vacias = codigo.lines().filter(|l| !l.trim().is_empty()).count();
    if lineas_no_vacias > MAX_LINEAS_NO_VACIAS {
        issues.push(Issue {
            kind: IssueKind::Complexity,
            mensaje: "Archivo de código largo, considera dividirlo en varios módulos".to_string(),
            severidad: Severity::Info,
            count: None,
            regla: None,
        });
    }

    for regla in rules::reglas_generales() {
        let coincidencias = regla.contar_coincidencias(codigo);
        if coincidencias > 0 {
            issues.push(Issue {
                kind: IssueKind::Style,
                mensaje: regla.mensaje.to_string(),
                severidad: regla.severidad,
                count: Some(coincidencias),
                regla: None,
            });
        }
    }

    // 2. Reglas específicas del lenguaje (si las hay).
    for regla in languages::reglas_para(lang) {
        let coincidencias = regla.contar_coincidencias(codigo);
        if coincidencias > 0 {
            issues.push(Issue {
                kind: IssueKind::LanguageSpecific,
                mensaje: regla.mensaje.to_string(),
                severidad: regla.severidad,
                count: Some(coincidencias),
                regla: Some(regla.nombre.to_string()),
            });
        }
    }

    // 3. Métricas, derivadas solo del texto crudo.
    let metrics = metrics::calcular(codigo);

    Ok(Analysis {
        issues,
        metrics,
        sugerencias: Vec::new(),
        resumen: String::new(),
    })
}

/// Pipeline local completo: analizar → sugerir → resumir → formatear.
pub fn revisar(codigo: &str, lang: Language) -> anyhow::Result<String> {
    let mut analysis = analyze(codigo, lang)?;
    analysis.sugerencias = suggestions::generar_sugerencias(&analysis, codigo, lang);
    analysis.resumen = report::crear_resumen(&analysis);
    Ok(report::formatear_reporte(&analysis))
}
