use dioxus::prelude::*;

use crate::audit::monitor::JobMonitor;

/// Project info and processing progress for the active project. Purely a
/// display of the monitor's snapshot; polling is driven by the results view.
#[component]
pub fn StatusPanel(
    monitor: JobMonitor,
    last_checked: Option<String>,
    on_refresh: EventHandler<()>,
) -> Element {
    let Some(snapshot) = monitor.snapshot().cloned() else {
        return rsx! {
            section { class: "results-card status-panel",
                div { class: "results-card__header",
                    h2 { "Processing Status" }
                }
                if let Some(err) = monitor.last_error() {
                    p { class: "status-panel__error", "⚠️ {err}" }
                    p { class: "results-card__placeholder",
                        "Check the project ID and make sure the backend is reachable."
                    }
                } else {
                    p { class: "results-card__placeholder", "Load a project to see its status." }
                }
            }
        };
    };

    let badge = snapshot.status.badge();
    let status_label = snapshot.status.label();
    let progress = monitor.progress_percent();
    let stage = monitor.stage_label().unwrap_or_else(|| "—".to_string());
    let project_name = snapshot.project_name.clone().unwrap_or_else(|| "N/A".to_string());
    let old_site = snapshot.old_base_url.clone().unwrap_or_else(|| "N/A".to_string());
    let new_site = snapshot.new_base_url.clone().unwrap_or_else(|| "N/A".to_string());
    let checked = last_checked.unwrap_or_default();

    rsx! {
        section { class: "results-card status-panel",
            div { class: "results-card__header",
                h2 { "Processing Status" }
                if !checked.is_empty() {
                    span { class: "results-card__meta", "Last checked {checked}" }
                }
            }

            div { class: "status-panel__project",
                div {
                    span { class: "status-panel__label", "Project" }
                    span { class: "status-panel__value", "{project_name}" }
                }
                div {
                    span { class: "status-panel__label", "Old site" }
                    span { class: "status-panel__value", "{old_site}" }
                }
                div {
                    span { class: "status-panel__label", "New site" }
                    span { class: "status-panel__value", "{new_site}" }
                }
            }

            div { class: "status-panel__state",
                span { class: "status-panel__badge", "{badge} {status_label}" }
                span { class: "status-panel__stage", "Stage: {stage}" }
                span { class: "status-panel__progress-text", "{progress}%" }
            }

            div { class: "status-panel__progress",
                div {
                    class: "status-panel__progress-fill",
                    style: "width: {progress}%",
                }
            }

            if let Some(err) = monitor.last_error() {
                p { class: "status-panel__error", "⚠️ {err}" }
            }

            div { class: "status-panel__actions",
                button {
                    r#type: "button",
                    class: "button button--secondary",
                    onclick: move |_| on_refresh.call(()),
                    "🔄 Refresh"
                }
                if monitor.should_poll() {
                    span { class: "results-card__meta",
                        "Checking automatically every few seconds…"
                    }
                }
            }
        }
    }
}
