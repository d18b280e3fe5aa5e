use dioxus::prelude::*;

use crate::{api::model::AuditResults, audit::summary::Overview, core::format};

/// The four headline metric cards. Sections the audit skipped render a
/// placeholder rather than a fabricated zero.
#[component]
pub fn OverviewCards(results: AuditResults) -> Element {
    let overview = Overview::from_results(&results);

    let url_value = if overview.has_url_data {
        format::format_count(overview.total_old_urls)
    } else {
        "—".to_string()
    };
    let url_meta = if overview.has_url_data {
        format!("{} matched", format::format_percent_precise(overview.match_rate))
    } else {
        "URL comparison not run".to_string()
    };

    let perf_value = if overview.has_performance_data {
        format::format_score(overview.avg_score_new)
    } else {
        "—".to_string()
    };
    let perf_meta = if overview.has_performance_data {
        format!("{} points", format::format_signed(overview.avg_score_delta))
    } else {
        "Performance testing not run".to_string()
    };
    let perf_meta_class = if overview.has_performance_data && !overview.performance_improved() {
        "overview-card__meta overview-card__meta--down"
    } else {
        "overview-card__meta overview-card__meta--up"
    };

    let seo_value = if overview.has_seo_data {
        format::format_percent(overview.seo_health)
    } else {
        "—".to_string()
    };
    let seo_meta = if overview.has_seo_data {
        "Match score".to_string()
    } else {
        "SEO validation not run".to_string()
    };

    let mobile_value = if overview.has_mobile_data {
        format!(
            "{}/{}",
            format::format_count(overview.mobile_responsive),
            format::format_count(overview.mobile_tested)
        )
    } else {
        "—".to_string()
    };
    let mobile_meta = if overview.has_mobile_data {
        format!(
            "{} responsive",
            format::format_percent(overview.mobile_ready_ratio())
        )
    } else {
        "Mobile testing not run".to_string()
    };

    rsx! {
        section { class: "results-card overview",
            div { class: "results-card__header",
                h2 { "Overview" }
            }
            div { class: "overview__grid",
                div { class: "overview-card",
                    span { class: "overview-card__label", "Total URLs" }
                    strong { class: "overview-card__value", "{url_value}" }
                    span { class: "overview-card__meta", "{url_meta}" }
                }
                div { class: "overview-card",
                    span { class: "overview-card__label", "Avg Performance" }
                    strong { class: "overview-card__value", "{perf_value}" }
                    span { class: "{perf_meta_class}", "{perf_meta}" }
                }
                div { class: "overview-card",
                    span { class: "overview-card__label", "SEO Health" }
                    strong { class: "overview-card__value", "{seo_value}" }
                    span { class: "overview-card__meta", "{seo_meta}" }
                }
                div { class: "overview-card",
                    span { class: "overview-card__label", "Mobile Ready" }
                    strong { class: "overview-card__value", "{mobile_value}" }
                    span { class: "overview-card__meta", "{mobile_meta}" }
                }
            }
        }
    }
}
