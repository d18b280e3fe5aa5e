use dioxus::prelude::*;

use crate::api::{ApiClient, ExportFormat, ExportSection};

/// Download links for the three export flavors the backend offers. Plain
/// anchors so the browser (or webview) handles the download natively.
#[component]
pub fn ExportLinksPanel(project_id: String) -> Element {
    let client = ApiClient::from_env();
    let csv_all = client.export_url(&project_id, ExportFormat::Csv, ExportSection::All);
    let json_all = client.export_url(&project_id, ExportFormat::Json, ExportSection::All);
    let csv_seo = client.export_url(&project_id, ExportFormat::Csv, ExportSection::Seo);

    rsx! {
        section { class: "results-card export-panel",
            div { class: "results-card__header",
                h2 { "📥 Export Results" }
            }
            div { class: "export-panel__links",
                a { class: "button button--secondary", href: "{csv_all}", target: "_blank",
                    "Full report (CSV)"
                }
                a { class: "button button--secondary", href: "{json_all}", target: "_blank",
                    "Full report (JSON)"
                }
                a { class: "button button--secondary", href: "{csv_seo}", target: "_blank",
                    "SEO section (CSV)"
                }
            }
        }
    }
}
