//! Lenguajes soportados por el motor de revisión
//!
//! El conjunto es fijo: cualquier identificador desconocido se trata como
//! `Other` para no romper la búsqueda de reglas.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Javascript,
    Typescript,
    Python,
    Java,
    Cpp,
    Csharp,
    Go,
    Rust,
    Php,
    Ruby,
    Swift,
    Kotlin,
    Html,
    Css,
    Sql,
    Other,
}

impl Language {
    /// Identificador en minúsculas, tal como viaja en el body HTTP.
    pub fn id(&self) -> &'static str {
        match self {
            Language::Javascript => "javascript",
            Language::Typescript => "typescript",
            Language::Python => "python",
            Language::Java => "java",
            Language::Cpp => "cpp",
            Language::Csharp => "csharp",
            Language::Go => "go",
            Language::Rust => "rust",
            Language::Php => "php",
            Language::Ruby => "ruby",
            Language::Swift => "swift",
            Language::Kotlin => "kotlin",
            Language::Html => "html",
            Language::Css => "css",
            Language::Sql => "sql",
            Language::Other => "other",
        }
    }

    /// Nombre amigable para mostrar en reportes y menús.
    pub fn nombre(&self) -> &'static str {
        match self {
            Language::Javascript => "JavaScript",
            Language::Typescript => "TypeScript",
            Language::Python => "Python",
            Language::Java => "Java",
            Language::Cpp => "C++",
            Language::Csharp => "C#",
            Language::Go => "Go",
            Language::Rust => "Rust",
            Language::Php => "PHP",
            Language::Ruby => "Ruby",
            Language::Swift => "Swift",
            Language::Kotlin => "Kotlin",
            Language::Html => "HTML",
            Language::Css => "CSS",
            Language::Sql => "SQL",
            Language::Other => "Otro lenguaje",
        }
    }

    pub fn todos() -> &'static [Language] {
        &[
            Language::Javascript,
            Language::Typescript,
            Language::Python,
            Language::Java,
            Language::Cpp,
            Language::Csharp,
            Language::Go,
            Language::Rust,
            Language::Php,
            Language::Ruby,
            Language::Swift,
            Language::Kotlin,
            Language::Html,
            Language::Css,
            Language::Sql,
            Language::Other,
        ]
    }

    /// Parseo tolerante: un identificador desconocido nunca es error.
    pub fn parse(id: &str) -> Language {
        match id.trim().to_lowercase().as_str() {
            "javascript" | "js" => Language::Javascript,
            "typescript" | "ts" => Language::Typescript,
            "python" | "py" => Language::Python,
            "java" => Language::Java,
            "cpp" | "c++" => Language::Cpp,
            "csharp" | "c#" => Language::Csharp,
            "go" => Language::Go,
            "rust" => Language::Rust,
            "php" => Language::Php,
            "ruby" => Language::Ruby,
            "swift" => Language::Swift,
            "kotlin" => Language::Kotlin,
            "html" => Language::Html,
            "css" => Language::Css,
            "sql" => Language::Sql,
            _ => Language::Other,
        }
    }

    /// Adivina el lenguaje a partir de la extensión de archivo.
    pub fn desde_extension(ext: &str) -> Language {
        match ext.to_lowercase().as_str() {
            "js" | "jsx" | "mjs" => Language::Javascript,
            "ts" | "tsx" => Language::Typescript,
            "py" => Language::Python,
            "java" => Language::Java,
            "cpp" | "cc" | "cxx" | "hpp" | "h" => Language::Cpp,
            "cs" => Language::Csharp,
            "go" => Language::Go,
            "rs" => Language::Rust,
            "php" => Language::Php,
            "rb" => Language::Ruby,
            "swift" => Language::Swift,
            "kt" | "kts" => Language::Kotlin,
            "html" | "htm" => Language::Html,
            "css" | "scss" => Language::Css,
            "sql" => Language::Sql,
            _ => Language::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_identificadores_conocidos() {
        assert_eq!(Language::parse("javascript"), Language::Javascript);
        assert_eq!(Language::parse("PYTHON"), Language::Python);
        assert_eq!(Language::parse("  rust "), Language::Rust);
    }

    #[test]
    fn test_parse_desconocido_es_other() {
        // Un identificador fuera del conjunto fijo nunca rompe el parseo.
        assert_eq!(Language::parse("cobol"), Language::Other);
        assert_eq!(Language::parse("brainfuck"), Language::Other);
        assert_eq!(Language::parse(""), Language::Other);
        assert_eq!(Language::parse("   "), Language::Other);
    }

    #[test]
    fn test_lenguaje_desconocido_sin_reglas_especificas() {
        // Un identificador desconocido cae en Other, que no tiene reglas.
        let lang = Language::parse("fortran");
        assert!(crate::rules::languages::reglas_para(lang).is_empty());
    }

    #[test]
    fn test_extension_a_lenguaje() {
        assert_eq!(Language::desde_extension("ts"), Language::Typescript);
        assert_eq!(Language::desde_extension("rb"), Language::Ruby);
        assert_eq!(Language::desde_extension("xyz"), Language::Other);
    }

    #[test]
    fn test_id_y_nombre_consistentes() {
        for lang in Language::todos() {
            assert_eq!(Language::parse(lang.id()), *lang);
            assert!(!lang.nombre().is_empty());
        }
    }
}
