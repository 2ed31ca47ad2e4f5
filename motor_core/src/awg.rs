//! # AWG Wire Gauge Lookup
//!
//! Nearest-match lookup from a conductor cross-section in mm² to a standard
//! American Wire Gauge label. The table is fixed and immutable, spanning
//! 30 AWG (0.05 mm²) to 4/0 AWG (107 mm²).

/// (cross-section in mm², gauge label), ordered from finest to heaviest
static AWG_TABLE: [(f64, &str); 20] = [
    (0.05, "30 AWG"),
    (0.08, "28 AWG"),
    (0.13, "26 AWG"),
    (0.20, "24 AWG"),
    (0.32, "22 AWG"),
    (0.51, "20 AWG"),
    (0.82, "18 AWG"),
    (1.31, "16 AWG"),
    (2.08, "14 AWG"),
    (3.31, "12 AWG"),
    (5.26, "10 AWG"),
    (8.37, "8 AWG"),
    (13.3, "6 AWG"),
    (21.1, "4 AWG"),
    (33.6, "2 AWG"),
    (42.4, "1 AWG"),
    (53.5, "1/0 AWG"),
    (67.4, "2/0 AWG"),
    (85.0, "3/0 AWG"),
    (107.0, "4/0 AWG"),
];

/// Map a wire cross-section to the nearest standard gauge label.
///
/// Total for every finite input: values outside the table range clamp to the
/// closest end entry. Ties break to the first-seen (finer) entry.
///
/// # Example
///
/// ```rust
/// use motor_core::awg::nearest_gauge;
///
/// assert_eq!(nearest_gauge(5.7), "10 AWG");
/// assert_eq!(nearest_gauge(0.0), "30 AWG");
/// assert_eq!(nearest_gauge(500.0), "4/0 AWG");
/// ```
pub fn nearest_gauge(section_mm2: f64) -> &'static str {
    let mut best = AWG_TABLE[0];
    let mut best_diff = (AWG_TABLE[0].0 - section_mm2).abs();
    for &entry in AWG_TABLE.iter().skip(1) {
        let diff = (entry.0 - section_mm2).abs();
        if diff < best_diff {
            best = entry;
            best_diff = diff;
        }
    }
    best.1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_entries() {
        assert_eq!(nearest_gauge(0.05), "30 AWG");
        assert_eq!(nearest_gauge(2.08), "14 AWG");
        assert_eq!(nearest_gauge(107.0), "4/0 AWG");
    }

    #[test]
    fn test_nearest_match() {
        // 5.78 mm² is closer to 5.26 (10 AWG) than 8.37 (8 AWG)
        assert_eq!(nearest_gauge(5.78), "10 AWG");
        assert_eq!(nearest_gauge(7.0), "8 AWG");
    }

    #[test]
    fn test_out_of_range_clamps() {
        assert_eq!(nearest_gauge(0.0), "30 AWG");
        assert_eq!(nearest_gauge(1e6), "4/0 AWG");
    }

    #[test]
    fn test_exact_tie_first_seen_wins() {
        // Midpoint of 0.05 and 0.08 - the finer gauge wins
        assert_eq!(nearest_gauge(0.065), "30 AWG");
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(nearest_gauge(12.0), nearest_gauge(12.0));
        assert_eq!(nearest_gauge(12.0), "6 AWG");
    }
}
