//! Domain types for the workflow approval API.
//!
//! Wire format is the backend's JSON: camelCase field names, snake_case
//! enum values, Mongo-style `_id` identifiers, RFC 3339 timestamps.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of work a workflow represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowType {
    Deployment,
    EmailCampaign,
    FinancialTransaction,
    CodeReview,
    Other,
}

impl WorkflowType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowType::Deployment => "deployment",
            WorkflowType::EmailCampaign => "email_campaign",
            WorkflowType::FinancialTransaction => "financial_transaction",
            WorkflowType::CodeReview => "code_review",
            WorkflowType::Other => "other",
        }
    }
}

impl fmt::Display for WorkflowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkflowType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "deployment" => Ok(WorkflowType::Deployment),
            "email_campaign" => Ok(WorkflowType::EmailCampaign),
            "financial_transaction" => Ok(WorkflowType::FinancialTransaction),
            "code_review" => Ok(WorkflowType::CodeReview),
            "other" => Ok(WorkflowType::Other),
            _ => Err(format!(
                "unknown workflow type '{}' (expected deployment, email_campaign, \
                 financial_transaction, code_review or other)",
                s
            )),
        }
    }
}

/// Risk rating attached to a workflow at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(RiskLevel::Low),
            "medium" => Ok(RiskLevel::Medium),
            "high" => Ok(RiskLevel::High),
            _ => Err(format!(
                "unknown risk level '{}' (expected low, medium or high)",
                s
            )),
        }
    }
}

/// Workflow status as the backend reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStatus {
    PendingApproval,
    Approved,
    Rejected,
}

impl WorkflowStatus {
    /// Label shown to users; `pending_approval` displays as plain `pending`.
    pub fn display_label(&self) -> &'static str {
        match self {
            WorkflowStatus::PendingApproval => "pending",
            WorkflowStatus::Approved => "approved",
            WorkflowStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for WorkflowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_label())
    }
}

impl FromStr for WorkflowStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending_approval" | "pending" => Ok(WorkflowStatus::PendingApproval),
            "approved" => Ok(WorkflowStatus::Approved),
            "rejected" => Ok(WorkflowStatus::Rejected),
            _ => Err(format!(
                "unknown status '{}' (expected pending_approval, approved or rejected)",
                s
            )),
        }
    }
}

/// A named, described, typed, risk-rated unit of work requiring approval.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: WorkflowType,
    pub risk_level: RiskLevel,
    pub status: WorkflowStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Envelope the backend wraps workflow listings in.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkflowList {
    pub data: Vec<Workflow>,
}

/// Request body for creating a workflow.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWorkflow {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: WorkflowType,
    pub risk_level: RiskLevel,
}

/// Request body for the status update endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct StatusChange {
    pub status: WorkflowStatus,
}

/// A pending or decided approval record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Approval {
    #[serde(rename = "_id")]
    pub id: String,
    pub workflow_id: String,
    pub status: WorkflowStatus,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub decided_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Request body for the approve/reject endpoints.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalDecision {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decided_by: Option<String>,
}
