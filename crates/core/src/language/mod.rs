// crates/core/src/language/mod.rs
//! Language definitions: a name, the file extensions it claims, and the
//! boundary matchers that describe its strings and comments.

mod builtin;

use alloc::boxed::Box;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::boundary::Boundary;

/// A language's matcher set.
///
/// Built once when the language is registered and only read afterwards, so
/// a single `Language` can be shared by every worker scanning files.
#[derive(Debug)]
pub struct Language {
    name: String,
    extensions: Vec<String>,
    matchers: Vec<Box<dyn Boundary>>,
}

impl Language {
    #[must_use]
    pub fn new(name: &str, extensions: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            extensions: extensions.iter().map(|e| e.to_lowercase()).collect(),
            matchers: Vec::new(),
        }
    }

    /// Adds a matcher. Earlier matchers win when two delimiters start at the
    /// same offset and have the same length.
    #[must_use]
    pub fn with_matcher<B: Boundary + 'static>(mut self, matcher: B) -> Self {
        self.matchers.push(Box::new(matcher));
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    #[must_use]
    pub fn matchers(&self) -> &[Box<dyn Boundary>] {
        &self.matchers
    }
}

/// Extension → language lookup.
///
/// Languages registered later take over the extensions of earlier ones, which
/// is how user definitions override the built-in table.
#[derive(Debug, Default)]
pub struct LanguageRegistry {
    languages: Vec<Language>,
    by_extension: HashMap<String, usize>,
    aliases: HashMap<String, String>,
}

impl LanguageRegistry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-filled with the built-in language table.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for language in builtin::languages() {
            registry.register(language);
        }
        registry
    }

    pub fn register(&mut self, language: Language) {
        let index = self.languages.len();
        for ext in &language.extensions {
            self.by_extension.insert(ext.clone(), index);
        }
        self.languages.push(language);
    }

    /// Treats files with extension `from` as if they had extension `to`.
    pub fn add_alias(&mut self, from: &str, to: &str) {
        self.aliases.insert(from.to_lowercase(), to.to_lowercase());
    }

    /// Looks up the language for a file extension (without the dot).
    #[must_use]
    pub fn for_extension(&self, extension: &str) -> Option<&Language> {
        let ext = extension.to_lowercase();
        let effective = self.aliases.get(&ext).unwrap_or(&ext);
        self.by_extension
            .get(effective)
            .map(|&index| &self.languages[index])
    }

    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&Language> {
        self.languages
            .iter()
            .rev()
            .find(|l| l.name.eq_ignore_ascii_case(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Language> {
        self.languages.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::{BoundaryKind, LineCommentMatcher};

    #[test]
    fn test_builtin_lookup() {
        let registry = LanguageRegistry::with_builtins();
        assert_eq!(registry.for_extension("rs").map(Language::name), Some("Rust"));
        assert_eq!(registry.for_extension("PY").map(Language::name), Some("Python"));
        assert!(registry.for_extension("unknown-ext").is_none());
    }

    #[test]
    fn test_user_language_overrides_builtin() {
        let mut registry = LanguageRegistry::with_builtins();
        registry.register(Language::new("Custom", &["rs"]).with_matcher(LineCommentMatcher::new("#")));

        let lang = registry.for_extension("rs").unwrap();
        assert_eq!(lang.name(), "Custom");
        assert_eq!(lang.matchers().len(), 1);
        assert_eq!(lang.matchers()[0].kind(), BoundaryKind::LineComment);
    }

    #[test]
    fn test_alias() {
        let mut registry = LanguageRegistry::with_builtins();
        registry.add_alias("inc", "c");
        assert_eq!(registry.for_extension("INC").map(Language::name), Some("C"));
    }

    #[test]
    fn test_extensions_are_lowercased() {
        let lang = Language::new("Mixed", &["ABC"]);
        assert_eq!(lang.extensions(), ["abc".to_string()]);
    }

    #[test]
    fn test_by_name() {
        let registry = LanguageRegistry::with_builtins();
        assert!(registry.by_name("javascript").is_some());
        assert!(!registry.is_empty());
    }
}
