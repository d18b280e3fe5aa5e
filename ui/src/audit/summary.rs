//! Overview metrics derived from a completed audit.
//!
//! Every function here is pure and defensive: any section of the results may
//! be missing (the backend skipped that stage) or present but empty (zero
//! URLs fell into a category). Missing sections zero-default their own
//! metrics and never disturb the others. "No data" and "zero" stay
//! distinguishable through the `has_*` flags and `Option` returns so the UI
//! can show a placeholder instead of a fabricated 0.

use crate::api::model::{AuditResults, PerformanceRecord, SeoRecord};

use super::charts::PERFORMANCE_CHART_LIMIT;

/// The four headline metrics of the results dashboard.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overview {
    pub total_old_urls: u64,
    pub match_rate: f64,
    pub avg_score_new: f64,
    pub avg_score_delta: f64,
    pub seo_health: f64,
    pub mobile_responsive: u64,
    pub mobile_tested: u64,
    pub has_url_data: bool,
    pub has_performance_data: bool,
    pub has_seo_data: bool,
    pub has_mobile_data: bool,
}

impl Overview {
    pub fn from_results(results: &AuditResults) -> Self {
        let mut overview = Self::default();

        if let Some(url) = &results.url_comparison {
            overview.has_url_data = true;
            overview.total_old_urls = url.summary.total_old_urls;
            overview.match_rate = url.summary.match_rate;
        }

        if let Some(perf) = &results.performance_validation {
            overview.has_performance_data = true;
            overview.avg_score_new = perf.summary.avg_score_new;
            overview.avg_score_delta = perf.summary.avg_score_delta;
        }

        if let Some(seo) = &results.seo_validation {
            overview.has_seo_data = true;
            overview.seo_health = seo.summary.avg_match_score;
        }

        if let Some(mobile) = &results.mobile_responsiveness {
            overview.has_mobile_data = true;
            overview.mobile_responsive = mobile.summary.new.fully_responsive;
            overview.mobile_tested = mobile.summary.new.total_tested;
        }

        overview
    }

    /// A non-negative average delta counts as an improvement for display
    /// polarity (green vs. red).
    pub fn performance_improved(&self) -> bool {
        self.avg_score_delta >= 0.0
    }

    /// Share of tested pages that are fully responsive, in percent.
    /// Zero pages tested means a ratio of 0, never a division by zero.
    pub fn mobile_ready_ratio(&self) -> f64 {
        if self.mobile_tested == 0 {
            0.0
        } else {
            self.mobile_responsive as f64 / self.mobile_tested as f64 * 100.0
        }
    }
}

// ---------------------------------------------------------------------------
// Core Web Vitals
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VitalAverage {
    pub old: f64,
    pub new: f64,
}

impl VitalAverage {
    /// Positive means the new site is slower/worse for LCP/CLS/INP.
    pub fn delta(self) -> f64 {
        self.new - self.old
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VitalsAverages {
    pub lcp: VitalAverage,
    pub cls: VitalAverage,
    pub inp: VitalAverage,
}

/// Arithmetic means of the Core Web Vitals over the records feeding the
/// performance chart (the first [`PERFORMANCE_CHART_LIMIT`] entries).
/// `None` when no records exist; callers render a placeholder, never NaN.
pub fn vitals_averages(records: &[PerformanceRecord]) -> Option<VitalsAverages> {
    let window = &records[..records.len().min(PERFORMANCE_CHART_LIMIT)];
    if window.is_empty() {
        return None;
    }
    let count = window.len() as f64;

    let mut lcp = VitalAverage { old: 0.0, new: 0.0 };
    let mut cls = VitalAverage { old: 0.0, new: 0.0 };
    let mut inp = VitalAverage { old: 0.0, new: 0.0 };

    for record in window {
        lcp.old += record.core_web_vitals.lcp.old;
        lcp.new += record.core_web_vitals.lcp.new;
        cls.old += record.core_web_vitals.cls.old;
        cls.new += record.core_web_vitals.cls.new;
        inp.old += record.core_web_vitals.inp.old;
        inp.new += record.core_web_vitals.inp.new;
    }

    for vital in [&mut lcp, &mut cls, &mut inp] {
        vital.old /= count;
        vital.new /= count;
    }

    Some(VitalsAverages { lcp, cls, inp })
}

// ---------------------------------------------------------------------------
// SEO score buckets
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeoBuckets {
    pub perfect: usize,
    pub good: usize,
    pub needs_work: usize,
    pub total: usize,
}

/// Partition SEO records by match score: perfect (≥95), good ([80,95)),
/// needs-work (<80). Boundaries are exact; the three buckets are disjoint
/// and cover every record.
pub fn seo_buckets(records: &[SeoRecord]) -> SeoBuckets {
    let mut buckets = SeoBuckets {
        total: records.len(),
        ..SeoBuckets::default()
    };

    for record in records {
        if record.match_score >= 95.0 {
            buckets.perfect += 1;
        } else if record.match_score >= 80.0 {
            buckets.good += 1;
        } else {
            buckets.needs_work += 1;
        }
    }

    buckets
}
