//! Métricas heurísticas de calidad
//!
//! Cuatro puntuaciones enteras en [1,10] derivadas únicamente del texto
//! crudo, independientes de las reglas del catálogo.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static BIFURCACIONES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(if|for|while|switch|catch)\b").unwrap());
static DECLARACIONES: Lazy<Regex> = Lazy::new(|| Regex::new(r"function|def |class ").unwrap());
static LLAMADAS_PELIGROSAS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"eval\(|innerHTML|document\.write").unwrap());

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metrics {
    pub complejidad: u8,
    pub legibilidad: u8,
    pub mantenibilidad: u8,
    pub seguridad: u8,
}

impl Metrics {
    /// Promedio simple de las cuatro métricas.
    pub fn promedio(&self) -> f64 {
        (self.complejidad as f64
            + self.legibilidad as f64
            + self.mantenibilidad as f64
            + self.seguridad as f64)
            / 4.0
    }

    /// Puntuación general en escala 0–100.
    pub fn puntuacion(&self) -> u32 {
        (self.promedio() * 10.0).round() as u32
    }
}

/// Calcula las cuatro métricas sobre el texto enviado.
pub fn calcular(codigo: &str) -> Metrics {
    Metrics {
        complejidad: complejidad(codigo),
        legibilidad: legibilidad(codigo),
        mantenibilidad: mantenibilidad(codigo),
        seguridad: seguridad(codigo),
    }
}

fn complejidad(codigo: &str) -> u8 {
    let bifurcaciones = BIFURCACIONES.find_iter(codigo).count() as i64;
    (10 - bifurcaciones / 5).clamp(1, 10) as u8
}

fn legibilidad(codigo: &str) -> u8 {
    let lineas_codigo = codigo
        .lines()
        .filter(|l| {
            let limpia = l.trim();
            !limpia.is_empty() && !limpia.starts_with("//")
        })
        .count();

    let promedio = if lineas_codigo > 0 {
        codigo.chars().count() as f64 / lineas_codigo as f64
    } else {
        0.0
    };

    if promedio < 80.0 {
        8
    } else {
        // El piso aquí es 3, no 1: líneas muy largas nunca bajan de 3.
        (8 - ((promedio - 80.0) / 20.0).floor() as i64).clamp(3, 10) as u8
    }
}

fn mantenibilidad(codigo: &str) -> u8 {
    let declaraciones = DECLARACIONES.find_iter(codigo).count() as u64;
    (5 + declaraciones / 2).min(10) as u8
}

fn seguridad(codigo: &str) -> u8 {
    let peligrosas = LLAMADAS_PELIGROSAS.find_iter(codigo).count() as i64;
    (10 - 2 * peligrosas).clamp(1, 10) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn en_rango(m: &Metrics) -> bool {
        (1..=10).contains(&m.complejidad)
            && (1..=10).contains(&m.legibilidad)
            && (1..=10).contains(&m.mantenibilidad)
            && (1..=10).contains(&m.seguridad)
    }

    #[test]
    fn test_metricas_siempre_en_rango() {
        let entradas = vec![
            String::new(),
            "x".to_string(),
            "if if if if if if if if if if if if if if if if if if if if if".to_string(),
            "eval(x); innerHTML; document.write(y);\n".repeat(20),
            "a".repeat(5000),
            format!("function a() {{}}\n{}", "class B {}\n".repeat(30)),
            "// solo comentarios\n// nada más".to_string(),
        ];
        for (i, codigo) in entradas.iter().enumerate() {
            let m = calcular(codigo);
            assert!(en_rango(&m), "métricas fuera de rango para la entrada {}", i);
        }
    }

    #[test]
    fn test_complejidad_por_bifurcaciones() {
        assert_eq!(complejidad("if (x) {}"), 10);
        // 5 bifurcaciones → 10 - 1 = 9
        assert_eq!(complejidad("if a; for b; while c; switch d; catch e;"), 9);
        // Tokens completos: "iffy" o "formato" no cuentan.
        assert_eq!(complejidad("iffy formato switcher catchy"), 10);
    }

    #[test]
    fn test_legibilidad_lineas_largas() {
        // Una línea de 200 caracteres: avg=200 → 8 - floor(120/20) = 2 → piso 3.
        let larga = "a".repeat(200);
        assert_eq!(legibilidad(&larga), 3);
        // Sin líneas de código: avg 0 → 8.
        assert_eq!(legibilidad("// comentario\n\n"), 8);
    }

    #[test]
    fn test_mantenibilidad_por_declaraciones() {
        assert_eq!(mantenibilidad("let x = 1;"), 5);
        // 2 declaraciones → 5 + 1 = 6
        assert_eq!(mantenibilidad("function a() {}\nclass B {}"), 6);
        // Tope en 10.
        assert_eq!(mantenibilidad(&"function f() {}\n".repeat(50)), 10);
    }

    #[test]
    fn test_seguridad_monotona() {
        // Agregar llamadas peligrosas nunca sube la métrica.
        let mut anterior = seguridad("let x = 1;");
        for n in 1..=8 {
            let codigo = format!("let x = 1;\n{}", "eval(x);\n".repeat(n));
            let actual = seguridad(&codigo);
            assert!(actual <= anterior, "seguridad subió al agregar eval()");
            anterior = actual;
        }
        assert_eq!(anterior, 1);
    }

    #[test]
    fn test_puntuacion_general() {
        let m = Metrics {
            complejidad: 10,
            legibilidad: 8,
            mantenibilidad: 5,
            seguridad: 10,
        };
        // promedio 8.25 → 82.5 → 83
        assert_eq!(m.puntuacion(), 83);
    }
}
