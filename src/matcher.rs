//! Nearest-color search over the catalog.
//!
//! Ranking is a full stable sort by distance, so equal distances keep
//! catalog order. An unparsable query fails open to the whole catalog.

use crate::catalog::{CATALOG, Color};
use crate::colorspace::{Rgb, distance};
use crate::types::DistanceMetric;

/// Parse `RRGGBB` or `RGB`, with or without a leading `#`, any case.
pub fn parse_hex(text: &str) -> Option<Rgb> {
    let digits = text.strip_prefix('#').unwrap_or(text);
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match digits.len() {
        6 => Some(Rgb::new(
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
        )),
        3 => {
            // Shorthand: each nibble is doubled (#f80 == #ff8800).
            let expand = |s: &str| channel(s).map(|v| v * 17);
            Some(Rgb::new(
                expand(&digits[0..1])?,
                expand(&digits[1..2])?,
                expand(&digits[2..3])?,
            ))
        }
        _ => None,
    }
}

/// Ranks a color table against a target.
#[derive(Debug, Clone, Copy)]
pub struct ColorMatcher<'a> {
    catalog: &'a [Color],
}

impl Default for ColorMatcher<'static> {
    fn default() -> Self {
        Self::new(&CATALOG)
    }
}

impl<'a> ColorMatcher<'a> {
    pub fn new(catalog: &'a [Color]) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a [Color] {
        self.catalog
    }

    /// Every entry paired with its distance to `target`, nearest first.
    pub fn rank(&self, target: Rgb, metric: DistanceMetric) -> Vec<(&'a Color, f64)> {
        let mut ranked: Vec<(&'a Color, f64)> = self
            .catalog
            .iter()
            .map(|c| (c, distance(metric, target, c.rgb)))
            .collect();
        // sort_by is stable: ties keep catalog order.
        ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
        ranked
    }

    /// The `n` entries nearest to `query`.
    ///
    /// If `query` does not parse as a color the full catalog is returned
    /// unchanged. `n` larger than the catalog yields the whole ranking.
    pub fn search(&self, query: &str, metric: DistanceMetric, n: usize) -> Vec<&'a Color> {
        let Some(target) = parse_hex(query) else {
            tracing::debug!(query, "query is not a color, listing full catalog");
            return self.catalog.iter().collect();
        };
        self.rank(target, metric)
            .into_iter()
            .take(n)
            .map(|(c, _)| c)
            .collect()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::by_id;

    #[test]
    fn parse_six_digit_hex_any_case() {
        assert_eq!(parse_hex("FF8000"), Some(Rgb::new(255, 128, 0)));
        assert_eq!(parse_hex("ff8000"), Some(Rgb::new(255, 128, 0)));
        assert_eq!(parse_hex("#Ff8000"), Some(Rgb::new(255, 128, 0)));
    }

    #[test]
    fn parse_shorthand() {
        assert_eq!(parse_hex("f80"), Some(Rgb::new(255, 136, 0)));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(parse_hex(""), None);
        assert_eq!(parse_hex("not-a-hex"), None);
        assert_eq!(parse_hex("12345"), None);
        assert_eq!(parse_hex("+12345"), None);
        assert_eq!(parse_hex("ééé"), None);
        assert_eq!(parse_hex("1234567"), None);
    }

    #[test]
    fn search_returns_exactly_n() {
        let matcher = ColorMatcher::default();
        for metric in DistanceMetric::ALL {
            for n in [1, 5, 10] {
                assert_eq!(matcher.search("123456", metric, n).len(), n);
            }
        }
    }

    #[test]
    fn search_results_are_sorted_by_distance() {
        let matcher = ColorMatcher::default();
        let target = Rgb::new(0x12, 0x34, 0x56);
        for metric in DistanceMetric::ALL {
            let results = matcher.search("123456", metric, 10);
            let distances: Vec<f64> = results
                .iter()
                .map(|c| distance(metric, target, c.rgb))
                .collect();
            assert!(
                distances.windows(2).all(|w| w[0] <= w[1]),
                "{}: {distances:?}",
                metric.label()
            );
        }
    }

    #[test]
    fn exact_catalog_hex_ranks_first_under_every_metric() {
        let matcher = ColorMatcher::default();
        // 202 (#FF5F00) has no duplicate elsewhere in the table.
        let entry = by_id(202);
        for metric in DistanceMetric::ALL {
            let results = matcher.search(entry.hex, metric, 3);
            assert_eq!(results[0].id, 202, "{}", metric.label());
        }
    }

    #[test]
    fn duplicate_hex_ties_resolve_to_catalog_order() {
        // #FF0000 appears as both 9 and 196.
        let matcher = ColorMatcher::default();
        for metric in DistanceMetric::ALL {
            let results = matcher.search("FF0000", metric, 2);
            let ids: Vec<u8> = results.iter().map(|c| c.id).collect();
            assert_eq!(ids, vec![9, 196], "{}", metric.label());
        }
    }

    #[test]
    fn pure_red_ciede2000_nearest_is_bright_red() {
        let results = ColorMatcher::default().search("FF0000", DistanceMetric::Ciede2000, 1);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, 9);
        assert_eq!(results[0].name16(), Some("Red (Bright)"));
    }

    #[test]
    fn invalid_query_fails_open_to_full_catalog() {
        let matcher = ColorMatcher::default();
        let results = matcher.search("not-a-hex", DistanceMetric::Cie76, 3);
        assert_eq!(results.len(), CATALOG.len());
        assert!(results.iter().zip(CATALOG.iter()).all(|(a, b)| a.id == b.id));
    }

    #[test]
    fn empty_query_fails_open_too() {
        let results = ColorMatcher::default().search("", DistanceMetric::Rgb, 1);
        assert_eq!(results.len(), 256);
    }

    #[test]
    fn n_larger_than_catalog_returns_everything() {
        let small = [*by_id(0), *by_id(15)];
        let matcher = ColorMatcher::new(&small);
        let results = matcher.search("ffffff", DistanceMetric::Rgb, 10);
        let ids: Vec<u8> = results.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![15, 0]);
    }
}
