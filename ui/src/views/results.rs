use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedSender;
use futures_util::StreamExt;
use time::macros::format_description;
use time::OffsetDateTime;

use crate::api::ApiClient;
use crate::audit::monitor::{JobMonitor, POLL_INTERVAL_MS};
use crate::core::session::try_use_session;
use crate::core::{platform, timing};
use crate::results::{
    DashboardState, ExportLinksPanel, MobilePanel, OverviewCards, PerformancePanel, SeoDetailTable,
    SeoPanel, StatusPanel, UrlDetailTables, UrlDistributionPanel,
};

#[derive(Debug, Clone)]
enum AuditEvent {
    /// Start watching a project. Resets all result state and bumps the
    /// generation so ticks queued for the previous project are ignored.
    Load { project_id: String },
    /// Immediate re-fetch requested by the user.
    Refresh,
    /// A scheduled poll firing. Stale generations are dropped.
    PollTick { generation: u64 },
}

/// Results view: project picker, live processing status, and (once the
/// backend reports completion) the full audit dashboard.
///
/// All polling flows through one coroutine so at most one status fetch is in
/// flight at a time. Ticks are queued as detached sleeps that send back into
/// the coroutine; each Load bumps a generation counter, which is how ticks
/// for an abandoned project die quietly.
#[component]
pub fn Results() -> Element {
    let session = try_use_session();
    let active = session.and_then(|signal| signal());

    let mut project_input = use_signal(|| {
        active
            .as_ref()
            .map(|project| project.id.clone())
            .unwrap_or_default()
    });
    let monitor = use_signal(JobMonitor::new);
    let dashboard = use_signal(DashboardState::default);
    let last_checked = use_signal(|| Option::<String>::None);
    // The id actually being watched; editing the picker does not change it
    // until Load is pressed.
    let mut loaded_id = use_signal(|| Option::<String>::None);

    let sender_slot: Rc<RefCell<Option<UnboundedSender<AuditEvent>>>> =
        Rc::new(RefCell::new(None));
    let sender_slot_for_loop = sender_slot.clone();

    let coroutine = {
        let monitor_ref = monitor.clone();
        let dashboard_ref = dashboard.clone();
        let checked_ref = last_checked.clone();

        use_coroutine(move |mut rx: UnboundedReceiver<AuditEvent>| {
            let sender_slot = sender_slot_for_loop.clone();
            let mut monitor_signal = monitor_ref.clone();
            let mut dashboard_signal = dashboard_ref.clone();
            let mut checked_signal = checked_ref.clone();

            async move {
                let client = ApiClient::from_env();
                let mut generation: u64 = 0;
                let mut project_id: Option<String> = None;

                while let Some(event) = rx.next().await {
                    // Only Load and live ticks extend the tick chain; a manual
                    // Refresh polls without scheduling, so chains never multiply.
                    let mut schedule_next = true;
                    match event {
                        AuditEvent::Load { project_id: id } => {
                            generation += 1;
                            project_id = Some(id);
                            monitor_signal.set(JobMonitor::new());
                            dashboard_signal.set(DashboardState::default());
                            checked_signal.set(None);
                        }
                        AuditEvent::Refresh => {
                            schedule_next = false;
                        }
                        AuditEvent::PollTick { generation: tick } => {
                            if tick != generation {
                                continue;
                            }
                        }
                    }

                    let Some(id) = project_id.clone() else {
                        continue;
                    };

                    poll_once(
                        &client,
                        &id,
                        &mut monitor_signal,
                        &mut dashboard_signal,
                        &mut checked_signal,
                    )
                    .await;

                    if schedule_next && monitor_signal.with(|m| m.should_poll()) {
                        queue_poll_tick(sender_slot.clone(), generation);
                    }
                }
            }
        })
    };

    sender_slot.borrow_mut().replace(coroutine.tx());

    // A project carried over from the New Project view starts loading on
    // mount without an extra click.
    use_hook(|| {
        if let Some(project) = active.clone() {
            loaded_id.set(Some(project.id.clone()));
            coroutine.send(AuditEvent::Load {
                project_id: project.id,
            });
        }
    });

    let load = {
        let coroutine = coroutine.clone();
        move |_| {
            let id = project_input().trim().to_string();
            if !id.is_empty() {
                loaded_id.set(Some(id.clone()));
                coroutine.send(AuditEvent::Load { project_id: id });
            }
        }
    };

    let refresh = {
        let coroutine = coroutine.clone();
        move |_| {
            coroutine.send(AuditEvent::Refresh);
        }
    };

    let monitor_view = monitor();
    let dashboard_view = dashboard();
    let checked_view = last_checked();

    rsx! {
        section { class: "page page-results",
            h1 { "Audit Results" }

            div { class: "results-picker",
                label { r#for: "project-id", "Project ID" }
                input {
                    id: "project-id",
                    r#type: "text",
                    value: "{project_input}",
                    oninput: move |evt| project_input.set(evt.value()),
                }
                button {
                    r#type: "button",
                    class: "button button--primary",
                    onclick: load,
                    "Load"
                }
            }

            StatusPanel {
                monitor: monitor_view.clone(),
                last_checked: checked_view,
                on_refresh: refresh,
            }

            if monitor_view.is_failed() {
                div { class: "insight insight--warn",
                    "⚠️ Processing failed. Check the backend logs for this project."
                }
            }

            if let Some(err) = dashboard_view.error.clone() {
                div { class: "insight insight--warn", "⚠️ Could not load results: {err}" }
            }

            if monitor_view.is_completed() {
                if dashboard_view.loading {
                    p { class: "results-card__placeholder", "Loading results…" }
                }
                if let Some(results) = dashboard_view.results.clone() {
                    OverviewCards { results: results.clone() }
                    UrlDistributionPanel { comparison: results.url_comparison.clone() }
                    PerformancePanel { validation: results.performance_validation.clone() }
                    SeoPanel { validation: results.seo_validation.clone() }
                    MobilePanel { section: results.mobile_responsiveness.clone() }
                    if let Some(comparison) = results.url_comparison.clone() {
                        UrlDetailTables { comparison }
                    }
                    if let Some(validation) = results.seo_validation.clone() {
                        SeoDetailTable { validation }
                    }
                    if let Some(id) = loaded_id() {
                        ExportLinksPanel { project_id: id }
                    }
                }
            }
        }
    }
}

/// One status fetch, plus the one-time results fetch once the job completes.
async fn poll_once(
    client: &ApiClient,
    project_id: &str,
    monitor: &mut Signal<JobMonitor>,
    dashboard: &mut Signal<DashboardState>,
    last_checked: &mut Signal<Option<String>>,
) {
    match client.fetch_status(project_id).await {
        Ok(snapshot) => {
            monitor.with_mut(|m| m.apply(snapshot));
            last_checked.set(Some(now_stamp()));
        }
        Err(err) => {
            monitor.with_mut(|m| m.record_failure(err.to_string()));
            last_checked.set(Some(now_stamp()));
            return;
        }
    }

    let completed = monitor.with(|m| m.is_completed());
    let needs_results = dashboard.with(|d| d.results.is_none() && !d.loading);
    if completed && needs_results {
        dashboard.with_mut(|d| d.loading = true);
        match client.fetch_results(project_id).await {
            Ok(results) => {
                dashboard.set(DashboardState {
                    results: Some(results),
                    error: None,
                    loading: false,
                });
            }
            Err(err) => {
                dashboard.set(DashboardState {
                    results: None,
                    error: Some(err.to_string()),
                    loading: false,
                });
            }
        }
    }
}

fn queue_poll_tick(sender_slot: Rc<RefCell<Option<UnboundedSender<AuditEvent>>>>, generation: u64) {
    if let Some(sender) = sender_slot.borrow().as_ref().cloned() {
        platform::spawn_future(async move {
            timing::sleep_ms(POLL_INTERVAL_MS).await;
            let _ = sender.unbounded_send(AuditEvent::PollTick { generation });
        });
    }
}

fn now_stamp() -> String {
    OffsetDateTime::now_utc()
        .format(&format_description!("[hour]:[minute]:[second] UTC"))
        .unwrap_or_default()
}
