//! Aggregate workflow counts.

use serde::Serialize;

use crate::api::types::{Workflow, WorkflowStatus};

/// Counts shown on the dashboard stat cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

impl DashboardStats {
    /// Tally one pass over the workflow list.
    pub fn from_workflows(workflows: &[Workflow]) -> Self {
        let mut stats = DashboardStats {
            total: workflows.len(),
            ..DashboardStats::default()
        };
        for workflow in workflows {
            match workflow.status {
                WorkflowStatus::PendingApproval => stats.pending += 1,
                WorkflowStatus::Approved => stats.approved += 1,
                WorkflowStatus::Rejected => stats.rejected += 1,
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{RiskLevel, WorkflowType};
    use chrono::{TimeZone, Utc};

    fn workflow(id: &str, status: WorkflowStatus) -> Workflow {
        Workflow {
            id: id.to_string(),
            name: format!("wf-{}", id),
            description: String::new(),
            kind: WorkflowType::Other,
            risk_level: RiskLevel::Medium,
            status,
            created_at: Utc.with_ymd_and_hms(2026, 8, 1, 0, 0, 0).unwrap(),
            updated_at: None,
        }
    }

    #[test]
    fn test_counts_per_status() {
        let workflows = vec![
            workflow("1", WorkflowStatus::PendingApproval),
            workflow("2", WorkflowStatus::PendingApproval),
            workflow("3", WorkflowStatus::Approved),
            workflow("4", WorkflowStatus::Rejected),
        ];
        let stats = DashboardStats::from_workflows(&workflows);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.pending, 2);
        assert_eq!(stats.approved, 1);
        assert_eq!(stats.rejected, 1);
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(DashboardStats::from_workflows(&[]), DashboardStats::default());
    }
}
