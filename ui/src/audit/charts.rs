//! Chart-ready series built from raw comparison lists.
//!
//! Series are bounded to fixed display limits and preserve the backend's
//! ordering: the first N records are shown, nothing is re-sorted. Bounding
//! is a display contract only: the underlying lists may be longer, and the
//! table helpers report the true totals so the UI can say so.

use crate::api::model::{MobileSummary, PerformanceRecord, SeoRecord, UrlComparison};

pub const PERFORMANCE_CHART_LIMIT: usize = 10;
pub const SEO_CHART_LIMIT: usize = 15;
pub const MATCHED_TABLE_LIMIT: usize = 100;
pub const DETAIL_TABLE_LIMIT: usize = 50;

pub const PERFORMANCE_LABEL_CHARS: usize = 30;
pub const SEO_LABEL_CHARS: usize = 40;

pub const MATCHED_COLOR: &str = "#10b981";
pub const REDIRECTED_COLOR: &str = "#f59e0b";
pub const MISSING_COLOR: &str = "#ef4444";
pub const NEW_COLOR: &str = "#3b82f6";

pub const OLD_SITE_COLOR: &str = "#ef4444";
pub const NEW_SITE_COLOR: &str = "#10b981";

// ---------------------------------------------------------------------------
// URL distribution (donut)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieSlice {
    pub label: &'static str,
    pub value: u64,
    pub color: &'static str,
}

/// The four URL categories, always in the same order. Counts come from the
/// comparison summary except "New", which is the length of the new-only
/// list. An absent summary yields four zero slices rather than no chart.
pub fn url_distribution(comparison: &UrlComparison) -> [PieSlice; 4] {
    let summary = &comparison.summary;
    [
        PieSlice {
            label: "Matched",
            value: summary.matched_count,
            color: MATCHED_COLOR,
        },
        PieSlice {
            label: "Redirected",
            value: summary.redirected_count,
            color: REDIRECTED_COLOR,
        },
        PieSlice {
            label: "Missing",
            value: summary.missing_count,
            color: MISSING_COLOR,
        },
        PieSlice {
            label: "New",
            value: comparison.new_only.len() as u64,
            color: NEW_COLOR,
        },
    ]
}

// ---------------------------------------------------------------------------
// Performance comparison (grouped bars)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBar {
    /// Full URL, retained for tooltips and detail lookups.
    pub url: String,
    /// Axis label, truncated for display.
    pub label: String,
    pub old_score: f64,
    pub new_score: f64,
    pub delta: f64,
}

/// Old/new score pairs for the first [`PERFORMANCE_CHART_LIMIT`] records.
pub fn performance_series(records: &[PerformanceRecord]) -> Vec<ScoreBar> {
    records
        .iter()
        .take(PERFORMANCE_CHART_LIMIT)
        .map(|record| ScoreBar {
            url: record.url.clone(),
            label: truncate_label(&record.url, PERFORMANCE_LABEL_CHARS),
            old_score: record.old_score,
            new_score: record.new_score,
            delta: record.score_delta,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// SEO match scores (color-scaled bars)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct SeoScoreBar {
    pub url: String,
    pub label: String,
    pub score: f64,
    pub severity: String,
    pub color: String,
}

/// Match-score bars for the first [`SEO_CHART_LIMIT`] records, colored on a
/// red-to-green scale.
pub fn seo_series(records: &[SeoRecord]) -> Vec<SeoScoreBar> {
    records
        .iter()
        .take(SEO_CHART_LIMIT)
        .map(|record| SeoScoreBar {
            url: record.old_url.clone(),
            label: truncate_label(&record.old_url, SEO_LABEL_CHARS),
            score: record.match_score,
            severity: record.severity.clone(),
            color: score_color(record.match_score),
        })
        .collect()
}

/// Map a 0–100 score onto a red→yellow→green hue.
pub fn score_color(score: f64) -> String {
    let hue = score.clamp(0.0, 100.0) * 1.2;
    format!("hsl({hue:.0}, 72%, 42%)")
}

// ---------------------------------------------------------------------------
// Mobile responsiveness (grouped bars)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MobileCategory {
    pub label: &'static str,
    pub old: u64,
    pub new: u64,
}

/// Three fixed categories × old/new site counts.
pub fn mobile_series(summary: &MobileSummary) -> [MobileCategory; 3] {
    [
        MobileCategory {
            label: "Fully Responsive",
            old: summary.old.fully_responsive,
            new: summary.new.fully_responsive,
        },
        MobileCategory {
            label: "Minor Issues",
            old: summary.old.has_minor_issues,
            new: summary.new.has_minor_issues,
        },
        MobileCategory {
            label: "Major Issues",
            old: summary.old.has_major_issues,
            new: summary.new.has_major_issues,
        },
    ]
}

// ---------------------------------------------------------------------------
// Detail tables
// ---------------------------------------------------------------------------

/// First `limit` rows in existing order. Display bounding only; pair with
/// the slice's true length when reporting counts.
pub fn bounded<T>(rows: &[T], limit: usize) -> &[T] {
    &rows[..rows.len().min(limit)]
}

/// "Showing all N" / "Showing first N of M" caption for a bounded table.
pub fn bound_caption(shown: usize, total: usize) -> String {
    if shown >= total {
        format!("Showing all {total}")
    } else {
        format!("Showing first {shown} of {total}")
    }
}

/// Truncate a URL to `max_chars` characters for an axis label, appending an
/// ellipsis. A URL at or under the limit is returned untouched.
pub fn truncate_label(url: &str, max_chars: usize) -> String {
    if url.chars().count() > max_chars {
        let prefix: String = url.chars().take(max_chars).collect();
        format!("{prefix}...")
    } else {
        url.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::model::{UrlRecord, UrlSummary};

    fn perf_record(url: &str, old: f64, new: f64) -> PerformanceRecord {
        PerformanceRecord {
            url: url.to_string(),
            old_score: old,
            new_score: new,
            score_delta: new - old,
            ..PerformanceRecord::default()
        }
    }

    fn seo_record(url: &str, score: f64) -> SeoRecord {
        SeoRecord {
            old_url: url.to_string(),
            match_score: score,
            ..SeoRecord::default()
        }
    }

    #[test]
    fn url_distribution_has_four_fixed_categories() {
        let comparison = UrlComparison {
            summary: UrlSummary {
                matched_count: 120,
                redirected_count: 30,
                missing_count: 12,
                ..UrlSummary::default()
            },
            new_only: vec![UrlRecord::default(); 7],
            ..UrlComparison::default()
        };

        let slices = url_distribution(&comparison);
        assert_eq!(
            slices.map(|s| s.label),
            ["Matched", "Redirected", "Missing", "New"]
        );
        assert_eq!(slices.map(|s| s.value), [120, 30, 12, 7]);
    }

    #[test]
    fn absent_summary_yields_all_zero_slices() {
        let slices = url_distribution(&UrlComparison::default());
        assert!(slices.iter().all(|slice| slice.value == 0));
        assert_eq!(slices.len(), 4);
    }

    #[test]
    fn performance_series_is_bounded_and_ordered() {
        let records: Vec<_> = (0..25)
            .map(|i| perf_record(&format!("https://e.com/{i}"), 50.0, 60.0))
            .collect();
        let series = performance_series(&records);

        assert_eq!(series.len(), PERFORMANCE_CHART_LIMIT);
        for (idx, bar) in series.iter().enumerate() {
            assert_eq!(bar.url, format!("https://e.com/{idx}"));
        }
    }

    #[test]
    fn seo_series_is_bounded_and_ordered() {
        let records: Vec<_> = (0..40)
            .map(|i| seo_record(&format!("https://e.com/{i}"), 90.0))
            .collect();
        let series = seo_series(&records);

        assert_eq!(series.len(), SEO_CHART_LIMIT);
        assert_eq!(series[0].url, "https://e.com/0");
        assert_eq!(series[14].url, "https://e.com/14");
    }

    #[test]
    fn short_inputs_are_not_padded() {
        assert_eq!(performance_series(&[]).len(), 0);
        let series = performance_series(&[perf_record("https://e.com/", 10.0, 20.0)]);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].delta, 10.0);
    }

    #[test]
    fn performance_labels_truncate_past_thirty_chars() {
        let exactly_30 = "x".repeat(30);
        let with_31 = "x".repeat(31);

        let series = performance_series(&[
            perf_record(&exactly_30, 0.0, 0.0),
            perf_record(&with_31, 0.0, 0.0),
        ]);

        assert_eq!(series[0].label, exactly_30);
        assert_eq!(series[1].label, format!("{}...", "x".repeat(30)));
        // The untruncated URL stays available.
        assert_eq!(series[1].url, with_31);
    }

    #[test]
    fn seo_labels_truncate_past_forty_chars() {
        let exactly_40 = "y".repeat(40);
        let with_41 = "y".repeat(41);

        let series = seo_series(&[seo_record(&exactly_40, 50.0), seo_record(&with_41, 50.0)]);

        assert_eq!(series[0].label, exactly_40);
        assert_eq!(series[1].label, format!("{}...", "y".repeat(40)));
    }

    #[test]
    fn score_colors_span_red_to_green() {
        assert_eq!(score_color(0.0), "hsl(0, 72%, 42%)");
        assert_eq!(score_color(50.0), "hsl(60, 72%, 42%)");
        assert_eq!(score_color(100.0), "hsl(120, 72%, 42%)");
        // Out-of-range scores clamp instead of producing silly hues.
        assert_eq!(score_color(140.0), "hsl(120, 72%, 42%)");
    }

    #[test]
    fn mobile_series_has_three_fixed_categories() {
        let summary = MobileSummary::default();
        let series = mobile_series(&summary);
        assert_eq!(
            series.map(|c| c.label),
            ["Fully Responsive", "Minor Issues", "Major Issues"]
        );
    }

    #[test]
    fn bounded_respects_table_limits() {
        let rows: Vec<u32> = (0..200).collect();
        assert_eq!(bounded(&rows, MATCHED_TABLE_LIMIT).len(), 100);
        assert_eq!(bounded(&rows, DETAIL_TABLE_LIMIT).len(), 50);
        assert_eq!(bounded(&rows, DETAIL_TABLE_LIMIT)[49], 49);

        let few: Vec<u32> = (0..3).collect();
        assert_eq!(bounded(&few, DETAIL_TABLE_LIMIT), few.as_slice());
    }

    #[test]
    fn bound_captions_distinguish_truncation() {
        assert_eq!(bound_caption(3, 3), "Showing all 3");
        assert_eq!(bound_caption(50, 212), "Showing first 50 of 212");
    }
}
