use clap::ValueEnum;
use line_stats_engine::options::{SortKey, parse_sort_key};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
    Yaml,
}

/// Output mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "kebab-case")]
pub enum OutputMode {
    /// Every file, then the per-language summary
    #[default]
    Full,
    /// Per-language summary only
    Summary,
}

/// Sort keys, e.g. `code:desc,name`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortSpec(pub Vec<(SortKey, bool)>);

impl FromStr for SortSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let specs = s
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(parse_single_spec)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self(specs))
    }
}

fn parse_single_spec(part: &str) -> Result<(SortKey, bool), String> {
    let (key_str, desc) = part.split_once(':').map_or((part, false), |(k, d)| {
        (k.trim(), d.trim().eq_ignore_ascii_case("desc"))
    });

    let key = parse_sort_key(key_str)?;
    Ok((key, desc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_spec() {
        let spec: SortSpec = "code:desc, name".parse().unwrap();
        assert_eq!(spec.0, vec![(SortKey::Code, true), (SortKey::Name, false)]);
    }

    #[test]
    fn test_sort_spec_error() {
        assert!("chars".parse::<SortSpec>().is_err());
    }

    #[test]
    fn test_sort_spec_empty() {
        let spec: SortSpec = "".parse().unwrap();
        assert!(spec.0.is_empty());
    }
}
