//! Waterfall decomposition of an ordered cost breakdown.
//!
//! Pure transform from a [`CostBreakdown`] to chart segments: the opening
//! "Base Price" anchor, one stacked delta bar per component in breakdown
//! order, and a synthetic closing "Final VIU" anchor at the running total.
//! Recomputed on every render; never stored.

use crate::error::EngineError;
use crate::results::CostBreakdown;

/// Label the engine uses for the opening anchor entry.
pub const BASE_PRICE_LABEL: &str = "Base Price";

/// Label of the synthetic closing anchor segment.
pub const FINAL_VIU_LABEL: &str = "Final VIU";

/// How a segment participates in the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentRole {
    /// Full-height bar: the opening base price or the closing total.
    Anchor,
    /// Negative delta; lowers the running total.
    Credit,
    /// Non-negative delta; raises the running total.
    Penalty,
}

/// One bar of the waterfall chart.
#[derive(Debug, Clone, PartialEq)]
pub struct WaterfallSegment {
    pub name: String,
    pub value: f64,
    /// Vertical extent `[start, end]` of the bar. `end - start == value`
    /// for every segment, anchors included.
    pub range: [f64; 2],
    /// Lower edge of the bar; equals the running total before this entry
    /// (0 for anchors).
    pub offset: f64,
    pub role: SegmentRole,
}

/// Turn an ordered cost breakdown into cumulative waterfall segments.
///
/// The closing anchor's upper bound always equals the arithmetic sum of all
/// breakdown entries, whatever their signs; that equality is what makes the
/// chart a waterfall.
///
/// Fails with [`EngineError::MalformedBreakdown`] if the breakdown is empty
/// or its first entry is not the "Base Price" anchor.
pub fn decompose(breakdown: &CostBreakdown) -> Result<Vec<WaterfallSegment>, EngineError> {
    let Some((first_name, base)) = breakdown.entries().first() else {
        return Err(EngineError::MalformedBreakdown(
            "cost breakdown is empty".to_string(),
        ));
    };
    if first_name != BASE_PRICE_LABEL {
        return Err(EngineError::MalformedBreakdown(format!(
            "first entry is {first_name:?}, expected {BASE_PRICE_LABEL:?}"
        )));
    }

    let mut segments = Vec::with_capacity(breakdown.len() + 1);
    segments.push(WaterfallSegment {
        name: first_name.clone(),
        value: *base,
        range: [0.0, *base],
        offset: 0.0,
        role: SegmentRole::Anchor,
    });
    let mut cumulative = *base;

    for (name, value) in &breakdown.entries()[1..] {
        let offset = cumulative;
        cumulative += value;
        let role = if *value < 0.0 {
            SegmentRole::Credit
        } else {
            SegmentRole::Penalty
        };
        segments.push(WaterfallSegment {
            name: name.clone(),
            value: *value,
            range: [offset, offset + value],
            offset,
            role,
        });
    }

    segments.push(WaterfallSegment {
        name: FINAL_VIU_LABEL.to_string(),
        value: cumulative,
        range: [0.0, cumulative],
        offset: 0.0,
        role: SegmentRole::Anchor,
    });

    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breakdown(entries: &[(&str, f64)]) -> CostBreakdown {
        CostBreakdown(
            entries
                .iter()
                .map(|(name, value)| (name.to_string(), *value))
                .collect(),
        )
    }

    #[test]
    fn test_worked_example() {
        let segments = decompose(&breakdown(&[
            ("Base Price", 300.0),
            ("Lime Addition", 12.0),
            ("Energy Credit", -8.0),
        ]))
        .unwrap();

        assert_eq!(segments.len(), 4);

        assert_eq!(segments[0].name, "Base Price");
        assert_eq!(segments[0].range, [0.0, 300.0]);
        assert_eq!(segments[0].role, SegmentRole::Anchor);

        assert_eq!(segments[1].range, [300.0, 312.0]);
        assert_eq!(segments[1].role, SegmentRole::Penalty);

        assert_eq!(segments[2].range, [312.0, 304.0]);
        assert_eq!(segments[2].role, SegmentRole::Credit);

        assert_eq!(segments[3].name, "Final VIU");
        assert_eq!(segments[3].range, [0.0, 304.0]);
        assert_eq!(segments[3].offset, 0.0);
        assert_eq!(segments[3].role, SegmentRole::Anchor);
    }

    #[test]
    fn test_cumulative_closure() {
        let inputs = [
            breakdown(&[("Base Price", 380.0), ("Flux", 12.5), ("Yield", 21.0)]),
            breakdown(&[("Base Price", 380.0), ("A", -3.0), ("B", -7.25), ("C", -0.5)]),
            breakdown(&[("Base Price", 0.0), ("Zero", 0.0)]),
        ];
        for input in &inputs {
            let segments = decompose(input).unwrap();
            let sum: f64 = input.entries().iter().map(|(_, v)| v).sum();
            let last = segments.last().unwrap();
            assert!((last.range[1] - sum).abs() < 1e-9, "closure broken for {input:?}");
        }
    }

    #[test]
    fn test_segment_count_is_len_plus_one() {
        for n in 1..6 {
            let mut entries = vec![("Base Price", 100.0)];
            entries.resize(n, ("Delta", 1.0));
            let segments = decompose(&breakdown(&entries)).unwrap();
            assert_eq!(segments.len(), n + 1);
        }
    }

    #[test]
    fn test_role_determinism() {
        let segments = decompose(&breakdown(&[
            ("Base Price", 200.0),
            ("Neg", -0.001),
            ("Zero", 0.0),
            ("Pos", 5.0),
        ]))
        .unwrap();
        assert_eq!(segments[1].role, SegmentRole::Credit);
        // A zero delta is a (degenerate) penalty, not a credit.
        assert_eq!(segments[2].role, SegmentRole::Penalty);
        assert_eq!(segments[3].role, SegmentRole::Penalty);
        assert_eq!(segments[0].role, SegmentRole::Anchor);
        assert_eq!(segments[4].role, SegmentRole::Anchor);
    }

    #[test]
    fn test_base_price_only_yields_two_identical_ranges() {
        let segments = decompose(&breakdown(&[("Base Price", 415.0)])).unwrap();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].range, segments[1].range);
        assert_eq!(segments[1].name, "Final VIU");
    }

    #[test]
    fn test_all_negative_deltas() {
        let segments =
            decompose(&breakdown(&[("Base Price", 100.0), ("A", -30.0), ("B", -90.0)])).unwrap();
        // Running total goes below zero; the closing anchor must follow it.
        assert_eq!(segments.last().unwrap().range, [0.0, -20.0]);
    }

    #[test]
    fn test_missing_anchor_is_rejected() {
        let err = decompose(&breakdown(&[("Flux Penalty", 12.0)])).unwrap_err();
        assert!(matches!(err, EngineError::MalformedBreakdown(_)));

        let err = decompose(&breakdown(&[])).unwrap_err();
        assert!(matches!(err, EngineError::MalformedBreakdown(_)));
    }
}
