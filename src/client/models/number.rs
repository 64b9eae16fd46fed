//! Lenient numeric fields
//!
//! The mining service serializes database decimals as strings
//! (`"0.00012345"`) and integers as numbers, and omits columns freely.
//! These helpers accept either shape.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    Text(String),
}

/// Parse the leading numeric prefix of `input`, the way a browser
/// `parseFloat` does: `"12.5 TH/s"` is 12.5, `"abc"` is NaN.
pub fn parse_lenient(input: &str) -> f64 {
    let trimmed = input.trim_start();
    let candidate: String = trimmed
        .chars()
        .take_while(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
        .collect();

    // Longest prefix that still parses wins ("1e" -> 1, "1.5.2" -> 1.5)
    (1..=candidate.len())
        .rev()
        .find_map(|end| candidate[..end].parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

/// Deserialize a number that may arrive as a JSON number, a decimal string,
/// `null`, or not at all. Missing and `null` read as zero.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<NumberOrString>::deserialize(deserializer)? {
        Some(NumberOrString::Number(n)) => n,
        Some(NumberOrString::Text(s)) if s.trim().is_empty() => 0.0,
        Some(NumberOrString::Text(s)) => parse_lenient(&s),
        None => 0.0,
    })
}

/// Deserialize a count. Integers pass through; decimal strings and floats
/// are truncated. Missing, `null`, negative or unparsable values read as zero.
pub fn lenient_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Count {
        Int(u64),
        Other(NumberOrString),
    }

    let as_float = match Option::<Count>::deserialize(deserializer)? {
        Some(Count::Int(n)) => return Ok(n),
        Some(Count::Other(NumberOrString::Number(n))) => n,
        Some(Count::Other(NumberOrString::Text(s))) => parse_lenient(&s),
        None => 0.0,
    };

    Ok(if as_float.is_finite() && as_float > 0.0 {
        as_float.trunc() as u64
    } else {
        0
    })
}

/// Like [`lenient_f64`] for identifiers, which the services emit as either
/// integers or strings.
pub fn lenient_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Int(i64),
        Text(String),
    }

    Ok(match Option::<Id>::deserialize(deserializer)? {
        Some(Id::Int(n)) => n.to_string(),
        Some(Id::Text(s)) => s,
        None => String::new(),
    })
}
