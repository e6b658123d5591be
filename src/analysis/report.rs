//! Formateo del reporte de revisión
//!
//! Arma el texto final que ve el usuario: métricas, problemas, sugerencias
//! y resumen. El ensamblado es determinista y cada sección solo aparece si
//! tiene contenido, salvo el bloque de métricas que se muestra siempre.

use crate::analysis::Analysis;
use crate::rules::Severity;

/// Glifo según severidad del issue.
fn glifo(severidad: Severity) -> &'static str {
    match severidad {
        Severity::Error => "🚫",
        Severity::Warning => "⚠️",
        Severity::Info => "💡",
    }
}

/// Crea el resumen final: cantidad de problemas, puntuación general y los
/// primeros tres mensajes si los hay.
pub fn crear_resumen(analysis: &Analysis) -> String {
    let cantidad = analysis.issues.len();
    let mut resumen = format!("Revisión completada. Se encontraron {} problema(s).\n", cantidad);
    resumen.push_str(&format!(
        "Puntuación general de calidad: {}/100\n\n",
        analysis.metrics.puntuacion()
    ));

    if cantidad == 0 {
        resumen.push_str("✅ El código tiene buena calidad, no se detectaron problemas evidentes.");
    } else {
        resumen.push_str("📋 Problemas principales:\n");
        for (i, issue) in analysis.issues.iter().take(3).enumerate() {
            resumen.push_str(&format!("{}. {}\n", i + 1, issue.mensaje));
        }
    }

    resumen
}

/// Convierte el análisis completo en el reporte legible final.
pub fn formatear_reporte(analysis: &Analysis) -> String {
    let mut reporte = String::from("🔍 **Reporte de Revisión de Código**\n\n");

    reporte.push_str("📊 **Métricas de Calidad**\n");
    reporte.push_str(&format!("- Complejidad: {}/10\n", analysis.metrics.complejidad));
    reporte.push_str(&format!("- Legibilidad: {}/10\n", analysis.metrics.legibilidad));
    reporte.push_str(&format!(
        "- Mantenibilidad: {}/10\n",
        analysis.metrics.mantenibilidad
    ));
    reporte.push_str(&format!("- Seguridad: {}/10\n\n", analysis.metrics.seguridad));

    if !analysis.issues.is_empty() {
        reporte.push_str(&format!(
            "⚠️ **Problemas Detectados** ({})\n",
            analysis.issues.len()
        ));
        for issue in &analysis.issues {
            match issue.count {
                Some(n) if n > 1 => reporte.push_str(&format!(
                    "{} {} ({} ocurrencias)\n",
                    glifo(issue.severidad),
                    issue.mensaje,
                    n
                )),
                _ => reporte.push_str(&format!("{} {}\n", glifo(issue.severidad), issue.mensaje)),
            }
        }
        reporte.push('\n');
    }

    if !analysis.sugerencias.is_empty() {
        reporte.push_str("💡 **Sugerencias de Mejora**\n");
        for sugerencia in &analysis.sugerencias {
            reporte.push_str(&format!("- {}\n", sugerencia));
        }
        reporte.push('\n');
    }

    reporte.push_str(&format!("📝 **Resumen**\n{}", analysis.resumen));

    reporte
}

/// Reporte con formato de error: se entrega por el mismo canal que un
/// reporte normal, nunca como un fallo sin manejar.
pub fn formatear_reporte_error(error: &anyhow::Error) -> String {
    format!(
        "❌ Ocurrió un error durante la revisión de código: {}\n\n\
         Verifica que el formato del código sea correcto o inténtalo de nuevo más tarde.",
        error
    )
}
