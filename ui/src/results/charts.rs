use dioxus::prelude::*;

use crate::{
    api::model::{MobileResponsiveness, PerformanceValidation, SeoValidation, UrlComparison},
    audit::charts::{
        bounded, mobile_series, performance_series, seo_series, url_distribution, PieSlice,
        NEW_SITE_COLOR, OLD_SITE_COLOR, SEO_CHART_LIMIT,
    },
    audit::summary::{seo_buckets, vitals_averages},
    core::format,
};

/// Donut of the four URL categories plus the summary column the original
/// dashboard showed beside it. Absence of the whole section disables only
/// this panel; an absent summary still renders four zero slices.
#[component]
pub fn UrlDistributionPanel(comparison: Option<UrlComparison>) -> Element {
    let Some(comparison) = comparison else {
        return placeholder("URL Distribution", "URL comparison was not part of this audit.");
    };

    let slices = url_distribution(&comparison);
    let total: u64 = slices.iter().map(|slice| slice.value).sum();
    let gradient = donut_gradient(&slices);
    let summary = comparison.summary.clone();
    let match_rate = format::format_percent_precise(summary.match_rate);

    rsx! {
        section { class: "results-card chart-panel",
            div { class: "results-card__header",
                h2 { "🔗 URL Distribution" }
            }
            div { class: "chart-panel__split",
                div { class: "donut",
                    div { class: "donut__ring", style: "background: {gradient}",
                        div { class: "donut__hole",
                            strong { "{format::format_count(total)}" }
                            span { "URLs" }
                        }
                    }
                    ul { class: "donut__legend",
                        for slice in slices.iter() {
                            li { key: "{slice.label}",
                                span { class: "donut__swatch", style: "background: {slice.color}" }
                                span { class: "donut__label", "{slice.label}" }
                                span { class: "donut__count", "{format::format_count(slice.value)}" }
                            }
                        }
                    }
                }
                ul { class: "chart-panel__summary",
                    li { "Total old URLs: {format::format_count(summary.total_old_urls)}" }
                    li { "Total new URLs: {format::format_count(summary.total_new_urls)}" }
                    li { "Match rate: {match_rate}" }
                    li { "Matched: {format::format_count(summary.matched_count)}" }
                    li { "Redirected: {format::format_count(summary.redirected_count)}" }
                    li { "Missing: {format::format_count(summary.missing_count)}" }
                }
            }
        }
    }
}

/// Grouped old/new score bars for the first ten compared URLs, with the
/// Core Web Vitals averages underneath.
#[component]
pub fn PerformancePanel(validation: Option<PerformanceValidation>) -> Element {
    let Some(validation) = validation else {
        return placeholder("Performance", "Performance testing was not part of this audit.");
    };

    let series = performance_series(&validation.comparisons);
    let vitals = vitals_averages(&validation.comparisons);

    let vitals_node = match vitals {
        Some(vitals) => rsx! {
            div { class: "vitals__grid",
                VitalCard {
                    label: "Avg LCP",
                    value: format::format_ms(vitals.lcp.new),
                    delta: format::format_ms(vitals.lcp.delta()),
                    regressed: vitals.lcp.delta() > 0.0,
                }
                VitalCard {
                    label: "Avg CLS",
                    value: format::format_cls(vitals.cls.new),
                    delta: format::format_cls(vitals.cls.delta()),
                    regressed: vitals.cls.delta() > 0.0,
                }
                VitalCard {
                    label: "Avg INP",
                    value: format::format_ms(vitals.inp.new),
                    delta: format::format_ms(vitals.inp.delta()),
                    regressed: vitals.inp.delta() > 0.0,
                }
            }
        },
        None => rsx! {
            p { class: "results-card__placeholder", "No Core Web Vitals data available." }
        },
    };

    rsx! {
        section { class: "results-card chart-panel",
            div { class: "results-card__header",
                h2 { "⚡ Performance Scores" }
                if !series.is_empty() {
                    span { class: "results-card__meta", "First {series.len()} URLs" }
                }
            }

            if series.is_empty() {
                p { class: "results-card__placeholder", "No performance comparisons available." }
            } else {
                div { class: "bar-chart",
                    for bar in series.iter() {
                        div { class: "bar-chart__row", key: "{bar.url}", title: "{bar.url}",
                            span { class: "bar-chart__label", "{bar.label}" }
                            div { class: "bar-chart__bars",
                                div {
                                    class: "bar-chart__bar",
                                    style: "width: {bar.old_score}%; background: {OLD_SITE_COLOR}",
                                    span { "{score_text(bar.old_score)}" }
                                }
                                div {
                                    class: "bar-chart__bar",
                                    style: "width: {bar.new_score}%; background: {NEW_SITE_COLOR}",
                                    span { "{score_text(bar.new_score)}" }
                                }
                            }
                        }
                    }
                }
                ChartLegend {}
            }

            h3 { "Core Web Vitals" }
            {vitals_node}
        }
    }
}

#[component]
fn VitalCard(label: &'static str, value: String, delta: String, regressed: bool) -> Element {
    let delta_class = if regressed {
        "vital-card__delta vital-card__delta--down"
    } else {
        "vital-card__delta vital-card__delta--up"
    };
    rsx! {
        div { class: "vital-card",
            span { class: "vital-card__label", "{label}" }
            strong { class: "vital-card__value", "{value}" }
            span { class: "{delta_class}", "{delta}" }
        }
    }
}

/// Color-scaled SEO match-score bars for the first fifteen URLs, with the
/// perfect / good / needs-work bucket counts over the same window.
#[component]
pub fn SeoPanel(validation: Option<SeoValidation>) -> Element {
    let Some(validation) = validation else {
        return placeholder("SEO Scores", "SEO validation was not part of this audit.");
    };

    let series = seo_series(&validation.comparisons);
    let buckets = seo_buckets(bounded(&validation.comparisons, SEO_CHART_LIMIT));

    rsx! {
        section { class: "results-card chart-panel",
            div { class: "results-card__header",
                h2 { "🎯 SEO Match Scores" }
                if !series.is_empty() {
                    span { class: "results-card__meta", "First {series.len()} URLs" }
                }
            }

            if series.is_empty() {
                p { class: "results-card__placeholder", "No SEO comparisons available." }
            } else {
                div { class: "bar-chart bar-chart--seo",
                    for bar in series.iter() {
                        div { class: "bar-chart__row", key: "{bar.url}", title: "{bar.url}",
                            span { class: "bar-chart__label", "{bar.label}" }
                            div { class: "bar-chart__bars",
                                div {
                                    class: "bar-chart__bar",
                                    style: "width: {bar.score}%; background: {bar.color}",
                                    span { "{score_text(bar.score)}" }
                                }
                            }
                            span { class: "bar-chart__severity", "{bar.severity}" }
                        }
                    }
                }

                div { class: "seo-buckets",
                    div { class: "seo-bucket",
                        span { class: "seo-bucket__label", "Perfect (≥95)" }
                        strong { "{buckets.perfect}/{buckets.total}" }
                    }
                    div { class: "seo-bucket",
                        span { class: "seo-bucket__label", "Good (80–94)" }
                        strong { "{buckets.good}/{buckets.total}" }
                    }
                    div { class: "seo-bucket",
                        span { class: "seo-bucket__label", "Needs Work (<80)" }
                        strong { "{buckets.needs_work}/{buckets.total}" }
                    }
                }
            }
        }
    }
}

/// Old-vs-new grouped bars for the three responsiveness categories, plus the
/// improved/regressed insight lines.
#[component]
pub fn MobilePanel(section: Option<MobileResponsiveness>) -> Element {
    let Some(section) = section else {
        return placeholder("Mobile", "Mobile responsiveness testing was not part of this audit.");
    };

    let summary = section.summary.clone();
    let categories = mobile_series(&summary);
    let max_count = categories
        .iter()
        .flat_map(|cat| [cat.old, cat.new])
        .max()
        .unwrap_or(0);
    let rows: Vec<MobileRow> = categories
        .iter()
        .map(|cat| MobileRow {
            label: cat.label,
            old: cat.old,
            new: cat.new,
            old_width: bar_width(cat.old, max_count),
            new_width: bar_width(cat.new, max_count),
        })
        .collect();

    rsx! {
        section { class: "results-card chart-panel",
            div { class: "results-card__header",
                h2 { "📱 Mobile Responsiveness" }
            }

            div { class: "bar-chart",
                for row in rows.iter() {
                    div { class: "bar-chart__row", key: "{row.label}",
                        span { class: "bar-chart__label", "{row.label}" }
                        div { class: "bar-chart__bars",
                            div {
                                class: "bar-chart__bar",
                                style: "width: {row.old_width}%; background: {OLD_SITE_COLOR}",
                                span { "{row.old}" }
                            }
                            div {
                                class: "bar-chart__bar",
                                style: "width: {row.new_width}%; background: {NEW_SITE_COLOR}",
                                span { "{row.new}" }
                            }
                        }
                    }
                }
            }
            ChartLegend {}

            if summary.improved > 0 {
                p { class: "insight insight--good",
                    "✅ {summary.improved} pages improved in mobile responsiveness"
                }
            }
            if summary.regressed > 0 {
                p { class: "insight insight--warn",
                    "⚠️ {summary.regressed} pages regressed in mobile responsiveness"
                }
            }
        }
    }
}

#[component]
fn ChartLegend() -> Element {
    rsx! {
        div { class: "chart-legend",
            span { class: "chart-legend__item",
                span { class: "donut__swatch", style: "background: {OLD_SITE_COLOR}" }
                "Old site"
            }
            span { class: "chart-legend__item",
                span { class: "donut__swatch", style: "background: {NEW_SITE_COLOR}" }
                "New site"
            }
        }
    }
}

fn placeholder(title: &str, message: &str) -> Element {
    rsx! {
        section { class: "results-card chart-panel",
            div { class: "results-card__header",
                h2 { "{title}" }
            }
            p { class: "results-card__placeholder", "{message}" }
        }
    }
}

struct MobileRow {
    label: &'static str,
    old: u64,
    new: u64,
    old_width: f64,
    new_width: f64,
}

fn score_text(score: f64) -> String {
    format!("{score:.0}")
}

/// Bar length as a percentage of the tallest bar in the chart. An all-zero
/// chart renders zero-width bars instead of dividing by zero.
fn bar_width(value: u64, max: u64) -> f64 {
    if max == 0 {
        0.0
    } else {
        value as f64 / max as f64 * 100.0
    }
}

/// CSS conic-gradient stops for the donut. With no URLs at all the ring
/// falls back to a neutral track so the chart still renders.
fn donut_gradient(slices: &[PieSlice]) -> String {
    let total: u64 = slices.iter().map(|slice| slice.value).sum();
    if total == 0 {
        return "conic-gradient(#e2e8f0 0% 100%)".to_string();
    }

    let mut stops = Vec::with_capacity(slices.len());
    let mut cursor = 0.0_f64;
    for slice in slices {
        let share = slice.value as f64 / total as f64 * 100.0;
        let end = (cursor + share).min(100.0);
        stops.push(format!("{} {cursor:.2}% {end:.2}%", slice.color));
        cursor = end;
    }
    format!("conic-gradient({})", stops.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::charts::{MATCHED_COLOR, MISSING_COLOR, NEW_COLOR, REDIRECTED_COLOR};

    fn slice(value: u64, color: &'static str) -> PieSlice {
        PieSlice {
            label: "x",
            value,
            color,
        }
    }

    #[test]
    fn gradient_covers_the_full_circle() {
        let slices = [
            slice(1, MATCHED_COLOR),
            slice(1, REDIRECTED_COLOR),
            slice(1, MISSING_COLOR),
            slice(1, NEW_COLOR),
        ];
        let gradient = donut_gradient(&slices);
        assert!(gradient.starts_with("conic-gradient("));
        assert!(gradient.contains("#10b981 0.00% 25.00%"));
        assert!(gradient.ends_with("100.00%)"));
    }

    #[test]
    fn empty_distribution_renders_a_neutral_ring() {
        let slices = [
            slice(0, MATCHED_COLOR),
            slice(0, REDIRECTED_COLOR),
            slice(0, MISSING_COLOR),
            slice(0, NEW_COLOR),
        ];
        assert_eq!(donut_gradient(&slices), "conic-gradient(#e2e8f0 0% 100%)");
    }

    #[test]
    fn bar_widths_guard_the_zero_maximum() {
        assert_eq!(bar_width(5, 0), 0.0);
        assert_eq!(bar_width(5, 10), 50.0);
        assert_eq!(bar_width(10, 10), 100.0);
    }
}
