use dioxus::prelude::*;

use crate::api::model::{SeoValidation, UrlComparison, UrlRecord};
use crate::audit::charts::{bound_caption, bounded, DETAIL_TABLE_LIMIT, MATCHED_TABLE_LIMIT};

/// The matched / missing / redirected tables from the URL comparison section.
/// Row counts are bounded for rendering; the missing-URL warning always
/// reports the true total, not the bounded slice.
#[component]
pub fn UrlDetailTables(comparison: UrlComparison) -> Element {
    let matched = bounded(&comparison.matched, MATCHED_TABLE_LIMIT);
    let missing = bounded(&comparison.missing, DETAIL_TABLE_LIMIT);
    let redirected = bounded(&comparison.redirected, DETAIL_TABLE_LIMIT);

    let matched_caption = bound_caption(matched.len(), comparison.matched.len());
    let missing_caption = bound_caption(missing.len(), comparison.missing.len());
    let redirected_caption = bound_caption(redirected.len(), comparison.redirected.len());
    let missing_total = comparison.missing.len();

    rsx! {
        section { class: "results-card detail-tables",
            div { class: "results-card__header",
                h2 { "📋 URL Details" }
            }

            h3 { "Matched URLs" }
            if matched.is_empty() {
                p { class: "results-card__placeholder", "No matched URLs." }
            } else {
                UrlTable { rows: matched.to_vec() }
                p { class: "detail-tables__caption", "{matched_caption}" }
            }

            h3 { "Missing URLs" }
            if missing.is_empty() {
                p { class: "results-card__placeholder", "No missing URLs." }
            } else {
                p { class: "insight insight--warn",
                    "⚠️ {missing_total} URLs are missing - potential 404s!"
                }
                UrlTable { rows: missing.to_vec() }
                p { class: "detail-tables__caption", "{missing_caption}" }
            }

            h3 { "Redirected URLs" }
            if redirected.is_empty() {
                p { class: "results-card__placeholder", "No redirected URLs." }
            } else {
                UrlTable { rows: redirected.to_vec() }
                p { class: "detail-tables__caption", "{redirected_caption}" }
            }
        }
    }
}

#[component]
fn UrlTable(rows: Vec<UrlRecord>) -> Element {
    rsx! {
        table { class: "detail-table",
            thead {
                tr {
                    th { "Old URL" }
                    th { "New URL" }
                }
            }
            tbody {
                for row in rows.iter() {
                    tr { key: "{row.old_url}",
                        td { "{row.old_url}" }
                        td { {row.new_url.as_deref().unwrap_or("—")} }
                    }
                }
            }
        }
    }
}

/// Per-URL SEO comparison rows with per-field match marks.
#[component]
pub fn SeoDetailTable(validation: SeoValidation) -> Element {
    let rows = bounded(&validation.comparisons, DETAIL_TABLE_LIMIT);
    let caption = bound_caption(rows.len(), validation.comparisons.len());
    let rows = rows.to_vec();

    rsx! {
        section { class: "results-card detail-tables",
            div { class: "results-card__header",
                h2 { "🔍 SEO Details" }
            }

            if rows.is_empty() {
                p { class: "results-card__placeholder", "No SEO comparisons available." }
            } else {
                table { class: "detail-table",
                    thead {
                        tr {
                            th { "URL" }
                            th { "Score" }
                            th { "Title" }
                            th { "Description" }
                            th { "H1" }
                            th { "Severity" }
                        }
                    }
                    tbody {
                        for row in rows.iter() {
                            tr { key: "{row.old_url}",
                                td { "{row.old_url}" }
                                td { "{score_text(row.match_score)}" }
                                td { {mark(row.title.matched)} }
                                td { {mark(row.description.matched)} }
                                td { {mark(row.h1.matched)} }
                                td { "{row.severity}" }
                            }
                        }
                    }
                }
                p { class: "detail-tables__caption", "{caption}" }
            }
        }
    }
}

fn score_text(score: f64) -> String {
    format!("{score:.0}")
}

fn mark(matched: bool) -> &'static str {
    if matched {
        "✅"
    } else {
        "❌"
    }
}

#[cfg(test)]
mod tests {
    use super::mark;

    #[test]
    fn match_marks_read_at_a_glance() {
        assert_eq!(mark(true), "✅");
        assert_eq!(mark(false), "❌");
    }
}
