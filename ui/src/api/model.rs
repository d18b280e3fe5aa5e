//! Wire model for backend payloads.
//!
//! The backend reports audit results as four independently-optional sections.
//! Optionality is handled here, at the decode boundary: sections are
//! `Option<T>`, every scalar the backend may omit carries a serde default,
//! and a section that is present but empty decodes to zero counts, which is
//! deliberately distinct from an absent section.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Project lifecycle
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    #[default]
    Pending,
    Processing,
    Completed,
    Failed,
    /// Any status label this client does not know; treated as non-terminal.
    #[serde(other)]
    Unknown,
}

impl ProjectStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Processing => "PROCESSING",
            Self::Completed => "COMPLETED",
            Self::Failed => "FAILED",
            Self::Unknown => "UNKNOWN",
        }
    }

    pub fn badge(self) -> &'static str {
        match self {
            Self::Pending => "🟡",
            Self::Processing => "🔵",
            Self::Completed => "🟢",
            Self::Failed => "🔴",
            Self::Unknown => "⚪",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProcessingStatus {
    pub stage: String,
    pub progress: i64,
}

impl ProcessingStatus {
    /// Progress for display. The backend promises 0–100 but this client is a
    /// display-only consumer and clamps instead of trusting the report.
    pub fn progress_percent(&self) -> u8 {
        self.progress.clamp(0, 100) as u8
    }

    /// Human form of an underscored stage name:
    /// `"checking_http_status"` → `"Checking Http Status"`.
    pub fn stage_label(&self) -> String {
        self.stage
            .split(['_', ' '])
            .filter(|word| !word.is_empty())
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => {
                        first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                    }
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Full status snapshot for one project. Each poll replaces the previous
/// snapshot wholesale; nothing is diffed or mutated in place.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatusSnapshot {
    pub project_name: Option<String>,
    pub old_base_url: Option<String>,
    pub new_base_url: Option<String>,
    pub status: ProjectStatus,
    pub processing_status: ProcessingStatus,
}

/// Identity returned by project creation (`{project: {_id, ...}}`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreatedProject {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "projectName", default)]
    pub project_name: Option<String>,
}

// ---------------------------------------------------------------------------
// Audit results
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuditResults {
    pub url_comparison: Option<UrlComparison>,
    pub performance_validation: Option<PerformanceValidation>,
    pub seo_validation: Option<SeoValidation>,
    pub mobile_responsiveness: Option<MobileResponsiveness>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UrlComparison {
    pub summary: UrlSummary,
    pub matched: Vec<UrlRecord>,
    pub missing: Vec<UrlRecord>,
    pub redirected: Vec<UrlRecord>,
    pub new_only: Vec<UrlRecord>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UrlSummary {
    pub total_old_urls: u64,
    pub total_new_urls: u64,
    pub matched_count: u64,
    pub redirected_count: u64,
    pub missing_count: u64,
    pub match_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrlMatchStatus {
    Matched,
    Redirected,
    Missing,
    New,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UrlRecord {
    pub old_url: String,
    pub new_url: Option<String>,
    pub status: UrlMatchStatus,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PerformanceValidation {
    pub summary: PerformanceSummary,
    pub comparisons: Vec<PerformanceRecord>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PerformanceSummary {
    pub avg_score_old: f64,
    pub avg_score_new: f64,
    pub avg_score_delta: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PerformanceRecord {
    pub url: String,
    pub old_score: f64,
    pub new_score: f64,
    pub score_delta: f64,
    pub core_web_vitals: CoreWebVitals,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreWebVitals {
    pub lcp: VitalPair,
    pub cls: VitalPair,
    pub inp: VitalPair,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VitalPair {
    pub old: f64,
    pub new: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeoValidation {
    pub summary: SeoSummary,
    pub comparisons: Vec<SeoRecord>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeoSummary {
    pub avg_match_score: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeoRecord {
    pub old_url: String,
    pub match_score: f64,
    pub severity: String,
    pub title: FieldMatch,
    pub description: FieldMatch,
    pub h1: FieldMatch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldMatch {
    #[serde(rename = "match")]
    pub matched: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MobileResponsiveness {
    pub summary: MobileSummary,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MobileSummary {
    pub old: MobileSiteCounts,
    pub new: MobileSiteCounts,
    pub improved: u64,
    pub regressed: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MobileSiteCounts {
    pub fully_responsive: u64,
    pub has_minor_issues: u64,
    pub has_major_issues: u64,
    pub total_tested: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn processing_snapshot_decodes_progress_and_stage() {
        let snapshot: StatusSnapshot = serde_json::from_value(json!({
            "status": "processing",
            "processingStatus": {"stage": "checking_http_status", "progress": 45}
        }))
        .unwrap();

        assert_eq!(snapshot.status, ProjectStatus::Processing);
        assert!(!snapshot.status.is_terminal());
        assert_eq!(snapshot.processing_status.progress_percent(), 45);
        assert_eq!(
            snapshot.processing_status.stage_label(),
            "Checking Http Status"
        );
    }

    #[test]
    fn progress_outside_range_clamps_for_display() {
        let over = ProcessingStatus {
            stage: String::new(),
            progress: 250,
        };
        let under = ProcessingStatus {
            stage: String::new(),
            progress: -3,
        };
        assert_eq!(over.progress_percent(), 100);
        assert_eq!(under.progress_percent(), 0);
    }

    #[test]
    fn unknown_status_is_tolerated() {
        let snapshot: StatusSnapshot =
            serde_json::from_value(json!({"status": "archived"})).unwrap();
        assert_eq!(snapshot.status, ProjectStatus::Unknown);
        assert!(!snapshot.status.is_terminal());
    }

    #[test]
    fn sections_may_be_absent_or_partially_populated() {
        let results: AuditResults = serde_json::from_value(json!({
            "urlComparison": {
                "matched": [{"oldUrl": "/a", "newUrl": "/a", "status": "matched"}]
            }
        }))
        .unwrap();

        let url = results.url_comparison.expect("section present");
        // Summary absent inside a present section decodes to zero counts.
        assert_eq!(url.summary.matched_count, 0);
        assert_eq!(url.matched.len(), 1);
        assert_eq!(url.matched[0].status, UrlMatchStatus::Matched);

        assert!(results.performance_validation.is_none());
        assert!(results.seo_validation.is_none());
        assert!(results.mobile_responsiveness.is_none());
    }

    #[test]
    fn seo_record_reads_match_flags() {
        let record: SeoRecord = serde_json::from_value(json!({
            "oldUrl": "https://old.example.com/pricing",
            "matchScore": 92.5,
            "severity": "minor",
            "title": {"match": true},
            "description": {"match": false},
            "h1": {"match": true}
        }))
        .unwrap();

        assert!(record.title.matched);
        assert!(!record.description.matched);
        assert_eq!(record.match_score, 92.5);
    }

    #[test]
    fn created_project_reads_mongo_style_id() {
        let created: CreatedProject =
            serde_json::from_value(json!({"_id": "66f0aa", "projectName": "Relaunch"})).unwrap();
        assert_eq!(created.id, "66f0aa");
        assert_eq!(created.project_name.as_deref(), Some("Relaunch"));
    }
}
