//! Output formatting for the one-shot subcommands.
//!
//! Pure functions: (result, OutputFormat) → String.
//! No I/O, no side effects.

use serde::Serialize;

use crate::catalog::Color;
use crate::colorspace::Rgb;
use crate::types::{DistanceMetric, HashAlgorithm, OutputFormat};

#[derive(Serialize)]
struct IdsOut<'a> {
    ids: &'a [String],
}

#[derive(Serialize)]
struct DigestOut<'a> {
    algorithm: HashAlgorithm,
    digest: &'a str,
}

#[derive(Serialize)]
struct ColorOut {
    id: u8,
    hex: String,
    rgb: Rgb,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'static str>,
}

#[derive(Serialize)]
struct ColorsOut<'a> {
    query: &'a str,
    metric: DistanceMetric,
    /// False when the query was not a color and the full catalog is listed.
    matched: bool,
    colors: Vec<ColorOut>,
}

/// Format generated ids, one per line.
pub fn format_ids(ids: &[String], format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => lines(ids.iter().map(String::as_str)),
        OutputFormat::Json => to_json(&IdsOut { ids }),
    }
}

/// Format a digest.
pub fn format_digest(algorithm: HashAlgorithm, digest: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format!("{digest}\n"),
        OutputFormat::Json => to_json(&DigestOut { algorithm, digest }),
    }
}

/// Format a color search result.
///
/// `matched` is false when the query did not parse and `colors` is the
/// whole catalog.
pub fn format_colors(
    query: &str,
    metric: DistanceMetric,
    matched: bool,
    colors: &[&Color],
    format: OutputFormat,
) -> String {
    match format {
        OutputFormat::Human => format_colors_human(matched, colors),
        OutputFormat::Json => to_json(&ColorsOut {
            query,
            metric,
            matched,
            colors: colors
                .iter()
                .map(|c| ColorOut {
                    id: c.id,
                    hex: format!("#{}", c.hex),
                    rgb: c.rgb,
                    name: c.name16(),
                })
                .collect(),
        }),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn lines<'a>(items: impl Iterator<Item = &'a str>) -> String {
    let mut out = String::new();
    for item in items {
        out.push_str(item);
        out.push('\n');
    }
    out
}

fn format_colors_human(matched: bool, colors: &[&Color]) -> String {
    let mut out = String::new();
    if !matched {
        out.push_str("Not a hex color, listing the full catalog\n");
    }
    for c in colors {
        // System colors are named; the rest show their value.
        let detail = match c.name16() {
            Some(name) => name.to_string(),
            None => {
                let Rgb { r, g, b } = c.rgb;
                format!("#{}  rgb({r}, {g}, {b})", c.hex)
            }
        };
        out.push_str(&format!("{:>3}  {detail}\n", c.id));
    }
    out
}

// ============================================================================
// JSON FORMAT
// ============================================================================

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        // Only plain strings and numbers are serialized here
        panic!("Failed to serialize output to JSON: {}", e)
    })
}

// ============================================================================
// TESTS
// ============================================================================
