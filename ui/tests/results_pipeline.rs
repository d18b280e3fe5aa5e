//! End-to-end pass over a realistic backend results payload: decode, headline
//! aggregation, and chart series construction, the way the results view
//! consumes them.

use serde_json::json;

use ui::api::model::AuditResults;
use ui::audit::charts::{
    bound_caption, bounded, performance_series, seo_series, url_distribution,
    DETAIL_TABLE_LIMIT, SEO_CHART_LIMIT,
};
use ui::audit::summary::{seo_buckets, vitals_averages, Overview};

fn sample_results() -> AuditResults {
    serde_json::from_value(json!({
        "urlComparison": {
            "summary": {
                "totalOldUrls": 120,
                "totalNewUrls": 118,
                "matchedCount": 100,
                "redirectedCount": 12,
                "missingCount": 8,
                "matchRate": 83.3
            },
            "matched": (0..100).map(|i| json!({
                "oldUrl": format!("https://old.example.com/page-{i}"),
                "newUrl": format!("https://www.example.com/page-{i}"),
                "status": "matched"
            })).collect::<Vec<_>>(),
            "redirected": (0..12).map(|i| json!({
                "oldUrl": format!("https://old.example.com/blog-{i}"),
                "newUrl": format!("https://www.example.com/articles/{i}"),
                "status": "redirected"
            })).collect::<Vec<_>>(),
            "missing": (0..8).map(|i| json!({
                "oldUrl": format!("https://old.example.com/gone-{i}"),
                "status": "missing"
            })).collect::<Vec<_>>(),
            "newOnly": [
                {"oldUrl": "", "newUrl": "https://www.example.com/launch", "status": "new"}
            ]
        },
        "performanceValidation": {
            "summary": {"avgScoreOld": 61.0, "avgScoreNew": 78.5, "avgScoreDelta": 17.5},
            "comparisons": (0..14).map(|i| json!({
                "url": format!("https://www.example.com/page-{i}"),
                "oldScore": 60.0,
                "newScore": 80.0,
                "scoreDelta": 20.0,
                "coreWebVitals": {
                    "lcp": {"old": 3200.0, "new": 2100.0},
                    "cls": {"old": 0.21, "new": 0.05},
                    "inp": {"old": 420.0, "new": 180.0}
                }
            })).collect::<Vec<_>>()
        },
        "seoValidation": {
            "summary": {"avgMatchScore": 88.2},
            "comparisons": (0..20).map(|i| json!({
                "oldUrl": format!("https://old.example.com/page-{i}"),
                "matchScore": if i < 5 { 97.0 } else if i < 12 { 85.0 } else { 62.0 },
                "severity": if i < 12 { "minor" } else { "major" },
                "title": {"match": true},
                "description": {"match": i % 2 == 0},
                "h1": {"match": true}
            })).collect::<Vec<_>>()
        },
        "mobileResponsiveness": {
            "summary": {
                "old": {"fullyResponsive": 40, "hasMinorIssues": 30, "hasMajorIssues": 20, "totalTested": 90},
                "new": {"fullyResponsive": 72, "hasMinorIssues": 14, "hasMajorIssues": 4, "totalTested": 90},
                "improved": 35,
                "regressed": 2
            }
        }
    }))
    .expect("sample payload decodes")
}

#[test]
fn headline_overview_reads_every_section() {
    let results = sample_results();
    let overview = Overview::from_results(&results);

    assert!(overview.has_url_data);
    assert!(overview.has_performance_data);
    assert!(overview.has_seo_data);
    assert!(overview.has_mobile_data);

    assert_eq!(overview.total_old_urls, 120);
    assert_eq!(overview.match_rate, 83.3);
    assert_eq!(overview.avg_score_new, 78.5);
    assert!(overview.performance_improved());
    assert_eq!(overview.seo_health, 88.2);
    assert_eq!(overview.mobile_responsive, 72);
    assert!((overview.mobile_ready_ratio() - 80.0).abs() < 1e-9);
}

#[test]
fn chart_series_respect_display_bounds() {
    let results = sample_results();

    let url = results.url_comparison.as_ref().unwrap();
    let slices = url_distribution(url);
    assert_eq!(slices.iter().map(|s| s.value).sum::<u64>(), 100 + 12 + 8 + 1);

    let perf = results.performance_validation.as_ref().unwrap();
    let bars = performance_series(&perf.comparisons);
    assert_eq!(bars.len(), 10);
    assert_eq!(bars[0].url, "https://www.example.com/page-0");

    let seo = results.seo_validation.as_ref().unwrap();
    let seo_bars = seo_series(&seo.comparisons);
    assert_eq!(seo_bars.len(), SEO_CHART_LIMIT);
}

#[test]
fn seo_buckets_cover_the_charted_window_exactly() {
    let results = sample_results();
    let seo = results.seo_validation.as_ref().unwrap();

    let window = bounded(&seo.comparisons, SEO_CHART_LIMIT);
    let buckets = seo_buckets(window);

    assert_eq!(buckets.total, 15);
    assert_eq!(buckets.perfect, 5);
    assert_eq!(buckets.good, 7);
    assert_eq!(buckets.needs_work, 3);
    assert_eq!(
        buckets.perfect + buckets.good + buckets.needs_work,
        buckets.total
    );
}

#[test]
fn vitals_averages_come_from_the_charted_records() {
    let results = sample_results();
    let perf = results.performance_validation.as_ref().unwrap();

    let vitals = vitals_averages(&perf.comparisons).expect("records present");
    assert!((vitals.lcp.new - 2100.0).abs() < 1e-9);
    assert!((vitals.lcp.delta() - (2100.0 - 3200.0)).abs() < 1e-9);
    assert!((vitals.cls.new - 0.05).abs() < 1e-9);
    assert!((vitals.inp.old - 420.0).abs() < 1e-9);
}

#[test]
fn table_captions_report_true_totals() {
    let results = sample_results();
    let url = results.url_comparison.as_ref().unwrap();

    let missing = bounded(&url.missing, DETAIL_TABLE_LIMIT);
    assert_eq!(bound_caption(missing.len(), url.missing.len()), "Showing all 8");

    let matched = bounded(&url.matched, 50);
    assert_eq!(
        bound_caption(matched.len(), url.matched.len()),
        "Showing first 50 of 100"
    );
}
