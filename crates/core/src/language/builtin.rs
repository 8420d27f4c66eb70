// crates/core/src/language/builtin.rs
//! Built-in language table.

use alloc::vec;
use alloc::vec::Vec;

use super::Language;
use crate::boundary::{BlockCommentMatcher, LineCommentMatcher, StringMatcher};

/// `//`, `/* */` and `"` strings.
fn c_family(name: &str, extensions: &[&str]) -> Language {
    Language::new(name, extensions)
        .with_matcher(LineCommentMatcher::new("//"))
        .with_matcher(BlockCommentMatcher::new("/*", "*/"))
        .with_matcher(StringMatcher::double_quoted())
}

/// `#` comments with `"` and `'` strings.
fn hash_family(name: &str, extensions: &[&str]) -> Language {
    Language::new(name, extensions)
        .with_matcher(LineCommentMatcher::new("#"))
        .with_matcher(StringMatcher::double_quoted())
        .with_matcher(StringMatcher::single_quoted())
}

pub(super) fn languages() -> Vec<Language> {
    vec![
        c_family("C", &["c", "h"]).with_matcher(StringMatcher::single_quoted()),
        c_family("C++", &["cpp", "cc", "cxx", "c++", "hpp", "hh", "hxx", "h++"])
            .with_matcher(StringMatcher::single_quoted()),
        c_family("C#", &["cs"]).with_matcher(StringMatcher::single_quoted()),
        c_family("Java", &["java"]).with_matcher(StringMatcher::single_quoted()),
        c_family("Kotlin", &["kt", "kts"]),
        c_family("Scala", &["scala", "sc"]),
        c_family("Swift", &["swift"]),
        c_family("Dart", &["dart"]).with_matcher(StringMatcher::single_quoted()),
        c_family("Objective-C", &["m", "mm"]),
        c_family("Groovy", &["groovy", "gradle"]).with_matcher(StringMatcher::single_quoted()),
        c_family("Zig", &["zig"]),
        c_family("Protobuf", &["proto"]),
        c_family("Solidity", &["sol"]).with_matcher(StringMatcher::single_quoted()),
        // lifetimes rule out a general '...' string; only quote char literals are matched
        c_family("Rust", &["rs"])
            .with_matcher(StringMatcher::with_escape_char("'\"", "'", None))
            .with_matcher(StringMatcher::with_escape_char("'\\\"", "'", None)),
        c_family("Go", &["go"]).with_matcher(StringMatcher::with_escape_char("`", "`", None)),
        c_family("JavaScript", &["js", "jsx", "mjs", "cjs"])
            .with_matcher(StringMatcher::single_quoted())
            .with_matcher(StringMatcher::with_escape_char("`", "`", Some('\\'))),
        c_family("TypeScript", &["ts", "tsx", "mts", "cts"])
            .with_matcher(StringMatcher::single_quoted())
            .with_matcher(StringMatcher::with_escape_char("`", "`", Some('\\'))),
        c_family("JSON with Comments", &["jsonc"]),
        Language::new("CSS", &["css"])
            .with_matcher(BlockCommentMatcher::new("/*", "*/"))
            .with_matcher(StringMatcher::double_quoted())
            .with_matcher(StringMatcher::single_quoted()),
        c_family("SCSS", &["scss", "less"]).with_matcher(StringMatcher::single_quoted()),
        c_family("PHP", &["php"])
            .with_matcher(LineCommentMatcher::new("#"))
            .with_matcher(StringMatcher::single_quoted()),
        hash_family("Python", &["py", "pyw", "pyi"])
            .with_matcher(StringMatcher::with_escape_char("\"\"\"", "\"\"\"", Some('\\')))
            .with_matcher(StringMatcher::with_escape_char("'''", "'''", Some('\\'))),
        hash_family("Shell", &["sh", "bash", "zsh", "fish"]),
        hash_family("Ruby", &["rb", "rake", "gemspec"]),
        hash_family("Perl", &["pl", "pm"]),
        hash_family("R", &["r"]),
        hash_family("Elixir", &["ex", "exs"]),
        hash_family("Nim", &["nim"]),
        hash_family("YAML", &["yml", "yaml"]),
        hash_family("TOML", &["toml"]),
        hash_family("CMake", &["cmake"]),
        hash_family("Terraform", &["tf", "tfvars"]),
        Language::new("PowerShell", &["ps1", "psm1", "psd1"])
            .with_matcher(LineCommentMatcher::new("#"))
            .with_matcher(BlockCommentMatcher::new("<#", "#>"))
            .with_matcher(StringMatcher::with_escape_char("\"", "\"", Some('`')))
            .with_matcher(StringMatcher::with_escape_char("'", "'", None)),
        Language::new("Lua", &["lua"])
            .with_matcher(BlockCommentMatcher::new("--[[", "]]"))
            .with_matcher(LineCommentMatcher::new("--"))
            .with_matcher(StringMatcher::double_quoted())
            .with_matcher(StringMatcher::single_quoted()),
        Language::new("SQL", &["sql"])
            .with_matcher(LineCommentMatcher::new("--"))
            .with_matcher(BlockCommentMatcher::new("/*", "*/"))
            .with_matcher(StringMatcher::with_escape_char("'", "'", None)),
        Language::new("Haskell", &["hs", "elm", "purs"])
            .with_matcher(BlockCommentMatcher::new("{-", "-}"))
            .with_matcher(LineCommentMatcher::new("--"))
            .with_matcher(StringMatcher::double_quoted()),
        Language::new("HTML", &["html", "htm", "xhtml", "vue"])
            .with_matcher(BlockCommentMatcher::new("<!--", "-->")),
        Language::new("XML", &["xml", "xsd", "xsl", "xslt", "svg"])
            .with_matcher(BlockCommentMatcher::new("<!--", "-->")),
        Language::new("Markdown", &["md", "markdown"])
            .with_matcher(BlockCommentMatcher::new("<!--", "-->")),
        Language::new("Lisp", &["lisp", "el", "clj", "cljs", "scm", "rkt"])
            .with_matcher(LineCommentMatcher::new(";"))
            .with_matcher(StringMatcher::double_quoted()),
        Language::new("Erlang", &["erl", "hrl"])
            .with_matcher(LineCommentMatcher::new("%"))
            .with_matcher(StringMatcher::double_quoted()),
        Language::new("TeX", &["tex", "sty", "cls"]).with_matcher(LineCommentMatcher::new("%")),
        Language::new("Visual Basic", &["vb", "vbs", "bas"])
            .with_matcher(LineCommentMatcher::new("'"))
            .with_matcher(StringMatcher::with_escape_char("\"", "\"", None)),
        Language::new("INI", &["ini", "cfg"]).with_matcher(LineCommentMatcher::new(";")),
        Language::new("Text", &["txt"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::BoundaryKind;
    use hashbrown::HashSet;

    #[test]
    fn test_extensions_are_unique() {
        let mut seen = HashSet::new();
        for lang in languages() {
            for ext in lang.extensions() {
                assert!(seen.insert(ext.clone()), "duplicate extension {ext}");
            }
        }
    }

    #[test]
    fn test_every_language_has_a_name_and_extension() {
        for lang in languages() {
            assert!(!lang.name().is_empty());
            assert!(!lang.extensions().is_empty());
        }
    }

    #[test]
    fn test_lua_block_listed_before_line() {
        let langs = languages();
        let lua = langs.iter().find(|l| l.name() == "Lua").unwrap();
        assert_eq!(lua.matchers()[0].kind(), BoundaryKind::BlockComment);
        assert_eq!(lua.matchers()[1].kind(), BoundaryKind::LineComment);
    }
}
