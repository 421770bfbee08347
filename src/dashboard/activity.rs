//! Recent-activity feed derived from workflow records.

use chrono::{DateTime, Utc};

use crate::api::types::Workflow;

/// How many entries the dashboard feed shows.
pub const RECENT_LIMIT: usize = 5;

/// One row in the recent-activity feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEntry {
    pub id: String,
    pub name: String,
    /// Display label, `pending_approval` already mapped to `pending`.
    pub status: &'static str,
    /// Human-relative time of the last change.
    pub time: String,
}

/// Newest workflows first, capped at `limit`.
///
/// Uses `updated_at` when the backend set it, otherwise `created_at`, so a
/// freshly decided workflow surfaces with its decision time.
pub fn recent_activity(workflows: &[Workflow], limit: usize, now: DateTime<Utc>) -> Vec<ActivityEntry> {
    let mut sorted: Vec<&Workflow> = workflows.iter().collect();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted
        .into_iter()
        .take(limit)
        .map(|w| ActivityEntry {
            id: w.id.clone(),
            name: w.name.clone(),
            status: w.status.display_label(),
            time: format_time_ago(w.updated_at.unwrap_or(w.created_at), now),
        })
        .collect()
}

/// Relative timestamp in the dashboard's vocabulary.
pub fn format_time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds().max(0);
    if seconds < 60 {
        "just now".to_string()
    } else if seconds < 3600 {
        format!("{} minutes ago", seconds / 60)
    } else if seconds < 86_400 {
        format!("{} hours ago", seconds / 3600)
    } else if seconds < 604_800 {
        format!("{} days ago", seconds / 86_400)
    } else {
        then.format("%Y-%m-%d").to_string()
    }
}
