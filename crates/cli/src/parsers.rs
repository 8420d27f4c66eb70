use std::{fmt::Display, str::FromStr};

fn parse_bounded_number<T>(s: &str, min: T, max: Option<T>) -> Result<T, String>
where
    T: Copy + PartialOrd + Display + FromStr,
    <T as FromStr>::Err: Display,
{
    let value: T = s
        .trim()
        .parse()
        .map_err(|e| format!("Invalid number '{s}': {e}"))?;
    if value < min {
        return Err(format!("Value must be >= {min}: {s}"));
    }
    if let Some(max) = max
        && value > max
    {
        return Err(format!("Value must be <= {max}: {s}"));
    }
    Ok(value)
}

/// Parse a positive `usize` (>= 1) from CLI input.
///
/// # Errors
/// Returns an error if the input string is not a valid number or is less than 1.
pub fn parse_positive_usize(s: &str) -> Result<usize, String> {
    parse_bounded_number(s, 1, None)
}

/// Parse a `usize` constrained to the inclusive range [1, 512].
///
/// # Errors
/// Returns an error if the input string is not a valid number or is outside the range [1, 512].
pub fn parse_usize_1_to_512(s: &str) -> Result<usize, String> {
    parse_bounded_number(s, 1, Some(512))
}

/// Parse a `from=to` extension mapping, dropping leading dots.
///
/// # Errors
/// Returns an error if the input has no '=' or either side is empty.
pub fn parse_ext_mapping(s: &str) -> Result<(String, String), String> {
    let (from, to) = s
        .split_once('=')
        .ok_or_else(|| format!("Expected from=to: {s}"))?;
    let from = from.trim().trim_start_matches('.');
    let to = to.trim().trim_start_matches('.');
    if from.is_empty() || to.is_empty() {
        return Err(format!("Expected from=to: {s}"));
    }
    Ok((from.to_string(), to.to_string()))
}
