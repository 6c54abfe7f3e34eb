//! UUID generation and textual formatting.
//!
//! Ids are kept as display strings. Formatting is always re-derived from the
//! parsed value, so any accepted textual form can be reformatted.

use uuid::Uuid;

/// Display options for UUID text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdFormat {
    /// Keep the `8-4-4-4-12` hyphens.
    pub dash: bool,
    /// Uppercase hex digits.
    pub upper: bool,
}

impl Default for IdFormat {
    fn default() -> Self {
        Self {
            dash: true,
            upper: false,
        }
    }
}

/// Render a parsed UUID according to `format`.
pub fn format_uuid(id: &Uuid, format: IdFormat) -> String {
    let text = if format.dash {
        id.hyphenated().to_string()
    } else {
        id.simple().to_string()
    };
    if format.upper {
        text.to_ascii_uppercase()
    } else {
        text
    }
}

/// Generate `count` random version-4 UUIDs, formatted.
pub fn generate_v4(count: usize, format: IdFormat) -> Vec<String> {
    (0..count)
        .map(|_| format_uuid(&Uuid::new_v4(), format))
        .collect()
}

/// Parse any accepted textual UUID (hyphenated, simple, braced, urn).
pub fn parse_id(text: &str) -> Option<Uuid> {
    Uuid::parse_str(text.trim()).ok()
}

/// Re-derive every id from its canonical value and apply `format`.
///
/// Lines that do not parse as a UUID are dropped.
pub fn reformat(ids: &[String], format: IdFormat) -> Vec<String> {
    ids.iter()
        .filter_map(|raw| match parse_id(raw) {
            Some(id) => Some(format_uuid(&id, format)),
            None => {
                tracing::debug!(line = %raw, "dropping unparsable id");
                None
            }
        })
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "67e55044-10b1-426f-9247-bb680e5fe0c8";

    fn dashed_lower() -> IdFormat {
        IdFormat { dash: true, upper: false }
    }

    #[test]
    fn default_format_is_dashed_lowercase() {
        assert_eq!(IdFormat::default(), dashed_lower());
    }

    #[test]
    fn generate_produces_count_v4_ids() {
        let ids = generate_v4(5, dashed_lower());
        assert_eq!(ids.len(), 5);
        for id in &ids {
            assert_eq!(id.len(), 36);
            let parsed = parse_id(id).unwrap();
            assert_eq!(parsed.get_version_num(), 4);
        }
    }

    #[test]
    fn generate_zero_is_empty() {
        assert!(generate_v4(0, dashed_lower()).is_empty());
    }

    #[test]
    fn format_without_dash_is_32_chars() {
        let id = parse_id(SAMPLE).unwrap();
        let text = format_uuid(&id, IdFormat { dash: false, upper: false });
        assert_eq!(text, "67e5504410b1426f9247bb680e5fe0c8");
    }

    #[test]
    fn format_uppercase() {
        let id = parse_id(SAMPLE).unwrap();
        let text = format_uuid(&id, IdFormat { dash: true, upper: true });
        assert_eq!(text, "67E55044-10B1-426F-9247-BB680E5FE0C8");
    }

    #[test]
    fn reformat_accepts_other_textual_forms() {
        let ids = vec![
            "67E5504410B1426F9247BB680E5FE0C8".to_string(),
            "{67e55044-10b1-426f-9247-bb680e5fe0c8}".to_string(),
            "urn:uuid:67e55044-10b1-426f-9247-bb680e5fe0c8".to_string(),
        ];
        let out = reformat(&ids, dashed_lower());
        assert_eq!(out, vec![SAMPLE; 3]);
    }

    #[test]
    fn reformat_drops_unparsable_lines() {
        let ids = vec![
            SAMPLE.to_string(),
            "not a uuid".to_string(),
            String::new(),
        ];
        let out = reformat(&ids, IdFormat { dash: false, upper: true });
        assert_eq!(out, vec!["67E5504410B1426F9247BB680E5FE0C8".to_string()]);
    }

    #[test]
    fn dash_round_trip_preserves_hex_digits() {
        let ids = generate_v4(10, dashed_lower());
        let undashed = reformat(&ids, IdFormat { dash: false, upper: false });
        let redashed = reformat(&undashed, dashed_lower());
        assert_eq!(redashed, ids);
        for (a, b) in ids.iter().zip(&undashed) {
            assert_eq!(a.replace('-', ""), *b);
        }
    }
}
