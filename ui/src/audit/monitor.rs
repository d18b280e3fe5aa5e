//! Project lifecycle monitoring.
//!
//! The backend runs the audit asynchronously; this side only watches. A
//! [`JobMonitor`] holds the latest status snapshot and is updated by
//! whole-snapshot replacement: each successful poll swaps in a fresh
//! `StatusSnapshot`, never a partial diff. A failed poll records the error
//! and leaves the previous snapshot (and therefore the lifecycle state)
//! untouched.
//!
//! The async poll loop itself lives with the results view; cadence and
//! cancellation are its concern. This type answers the questions the loop
//! and the status panel ask: keep going? how far along? what stage?

use crate::api::model::{ProjectStatus, StatusSnapshot};

/// How often the results view re-fetches status while a job is running.
pub const POLL_INTERVAL_MS: u64 = 5_000;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobMonitor {
    snapshot: Option<StatusSnapshot>,
    last_error: Option<String>,
}

impl JobMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the monitor's view with a freshly fetched snapshot.
    pub fn apply(&mut self, snapshot: StatusSnapshot) {
        self.snapshot = Some(snapshot);
        self.last_error = None;
    }

    /// Record a fetch failure. The previous snapshot stays visible; a
    /// transport hiccup must not look like a lifecycle transition.
    pub fn record_failure(&mut self, message: impl Into<String>) {
        self.last_error = Some(message.into());
    }

    pub fn snapshot(&self) -> Option<&StatusSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn status(&self) -> Option<ProjectStatus> {
        self.snapshot.as_ref().map(|snap| snap.status)
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// True until a terminal status has been observed. Before the first
    /// successful fetch (including after failures) polling continues.
    pub fn should_poll(&self) -> bool {
        match &self.snapshot {
            None => true,
            Some(snapshot) => !snapshot.status.is_terminal(),
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status() == Some(ProjectStatus::Completed)
    }

    pub fn is_failed(&self) -> bool {
        self.status() == Some(ProjectStatus::Failed)
    }

    /// Display progress in [0,100]; 0 before the first snapshot.
    pub fn progress_percent(&self) -> u8 {
        self.snapshot
            .as_ref()
            .map(|snap| snap.processing_status.progress_percent())
            .unwrap_or(0)
    }

    /// Title-cased current stage, if the backend reported one.
    pub fn stage_label(&self) -> Option<String> {
        self.snapshot
            .as_ref()
            .map(|snap| snap.processing_status.stage_label())
            .filter(|label| !label.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::model::ProcessingStatus;

    fn snapshot(status: ProjectStatus, stage: &str, progress: i64) -> StatusSnapshot {
        StatusSnapshot {
            status,
            processing_status: ProcessingStatus {
                stage: stage.to_string(),
                progress,
            },
            ..StatusSnapshot::default()
        }
    }

    #[test]
    fn polls_until_terminal_state() {
        let mut monitor = JobMonitor::new();
        assert!(monitor.should_poll());

        monitor.apply(snapshot(ProjectStatus::Pending, "", 0));
        assert!(monitor.should_poll());

        monitor.apply(snapshot(ProjectStatus::Processing, "comparing_urls", 30));
        assert!(monitor.should_poll());

        monitor.apply(snapshot(ProjectStatus::Completed, "done", 100));
        assert!(!monitor.should_poll());
        assert!(monitor.is_completed());
    }

    #[test]
    fn failed_is_terminal_too() {
        let mut monitor = JobMonitor::new();
        monitor.apply(snapshot(ProjectStatus::Failed, "testing_performance", 60));
        assert!(!monitor.should_poll());
        assert!(monitor.is_failed());
    }

    #[test]
    fn fetch_failure_keeps_previous_snapshot() {
        let mut monitor = JobMonitor::new();
        monitor.apply(snapshot(ProjectStatus::Processing, "checking_http_status", 45));

        monitor.record_failure("connection refused");

        assert_eq!(monitor.last_error(), Some("connection refused"));
        assert_eq!(monitor.status(), Some(ProjectStatus::Processing));
        assert_eq!(monitor.progress_percent(), 45);
        assert_eq!(monitor.stage_label().as_deref(), Some("Checking Http Status"));
        assert!(monitor.should_poll());
    }

    #[test]
    fn next_successful_poll_clears_the_error() {
        let mut monitor = JobMonitor::new();
        monitor.record_failure("timeout");
        monitor.apply(snapshot(ProjectStatus::Processing, "validating_seo", 70));
        assert!(monitor.last_error().is_none());
    }

    #[test]
    fn out_of_range_progress_is_clamped_not_rejected() {
        let mut monitor = JobMonitor::new();
        monitor.apply(snapshot(ProjectStatus::Processing, "", 180));
        assert_eq!(monitor.progress_percent(), 100);
    }
}
