//! Language registry
//!
//! Static table mapping editor languages to the judge backend's language ids.

use serde::Serialize;

/// A language selectable in the editor.
///
/// `value_key` is the editor-side language name. It is not unique: both
/// Python entries share `"python"`, so options are identified by their
/// position in [`LANGUAGES`] rather than by key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageOption {
    pub execution_id: u32,
    pub display_name: &'static str,
    pub value_key: &'static str,
}

impl LanguageOption {
    const fn new(execution_id: u32, display_name: &'static str, value_key: &'static str) -> Self {
        Self {
            execution_id,
            display_name,
            value_key,
        }
    }
}

pub const LANGUAGES: &[LanguageOption] = &[
    LanguageOption::new(63, "JavaScript (Node.js 18.6.0)", "javascript"),
    LanguageOption::new(50, "C (GCC 9.2.0)", "c"),
    LanguageOption::new(54, "C++ (G++ 9.2.0)", "cpp"),
    LanguageOption::new(51, "C# (Mono 6.6.0.161)", "csharp"),
    LanguageOption::new(60, "Go (1.13.5)", "go"),
    LanguageOption::new(62, "Java (OpenJDK 13.0.1)", "java"),
    LanguageOption::new(78, "Kotlin (1.3.70)", "kotlin"),
    LanguageOption::new(70, "Python (2.7.17)", "python"),
    LanguageOption::new(71, "Python (3.8.1)", "python"),
    LanguageOption::new(72, "Ruby (2.7.0)", "ruby"),
    LanguageOption::new(81, "Scala (2.13.2)", "scala"),
    LanguageOption::new(83, "Swift (5.2.3)", "swift"),
];

pub const DEFAULT_LANGUAGE_INDEX: usize = 0;

/// Returns the option at `index`, falling back to the default language.
pub fn language_at(index: usize) -> &'static LanguageOption {
    LANGUAGES
        .get(index)
        .unwrap_or(&LANGUAGES[DEFAULT_LANGUAGE_INDEX])
}

/// Registry index of the language with the given judge id. Ids are unique.
pub fn index_of_execution_id(execution_id: u32) -> Option<usize> {
    LANGUAGES
        .iter()
        .position(|lang| lang.execution_id == execution_id)
}

/// All registry indices whose value key matches. Never deduplicated.
pub fn indices_of_value_key(value_key: &str) -> Vec<usize> {
    LANGUAGES
        .iter()
        .enumerate()
        .filter(|(_, lang)| lang.value_key.eq_ignore_ascii_case(value_key))
        .map(|(i, _)| i)
        .collect()
}

/// Resolve a CLI-style selector: a numeric judge id or a value key.
///
/// A value key shared by several entries resolves to the last one, which for
/// `python` is the newest interpreter.
pub fn resolve(selector: &str) -> Option<usize> {
    if let Ok(id) = selector.trim().parse::<u32>() {
        return index_of_execution_id(id);
    }
    indices_of_value_key(selector.trim()).last().copied()
}

pub const DEFAULT_SOURCE: &str = "const formatter = n => (n < 10 ? ' ' : '') + n;

for (let i = 1; i < 8; i+=3) {
  for (let j = 1; j < 10; j++) {
    let results = [i*j, (i+1)*j, (i+2)*j].map(formatter);
    let line = [0, 1, 2].map(n => `${i+n} x ${j} = ${results[n]}`).join('\\t\\t');
    console.log(line);
  }
  console.log();
}";

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_registry_has_twelve_languages() {
        assert_eq!(LANGUAGES.len(), 12);
    }

    #[test]
    fn test_execution_ids_are_unique() {
        let ids: HashSet<u32> = LANGUAGES.iter().map(|l| l.execution_id).collect();
        assert_eq!(ids.len(), LANGUAGES.len());
    }

    #[test]
    fn test_default_language_is_javascript() {
        let lang = language_at(DEFAULT_LANGUAGE_INDEX);
        assert_eq!(lang.execution_id, 63);
        assert_eq!(lang.value_key, "javascript");
    }

    #[test]
    fn test_language_at_out_of_range_falls_back() {
        assert_eq!(language_at(999), &LANGUAGES[0]);
    }

    #[test]
    fn test_duplicate_python_key_keeps_both_entries() {
        let indices = indices_of_value_key("python");
        assert_eq!(indices.len(), 2);
        assert_eq!(language_at(indices[0]).execution_id, 70);
        assert_eq!(language_at(indices[1]).execution_id, 71);
    }

    #[rstest]
    #[case("63", Some(0))]
    #[case("71", Some(8))]
    #[case("python", Some(8))]
    #[case("RUST", None)]
    #[case("cpp", Some(2))]
    #[case(" swift ", Some(11))]
    #[case("9999", None)]
    fn test_resolve(#[case] selector: &str, #[case] expected: Option<usize>) {
        assert_eq!(resolve(selector), expected);
    }

    #[test]
    fn test_default_source_is_not_empty() {
        assert!(DEFAULT_SOURCE.contains("console.log(line);"));
        assert!(DEFAULT_SOURCE.contains("join('\\t\\t')"));
    }
}
