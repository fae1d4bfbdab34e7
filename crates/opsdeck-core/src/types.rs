use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// StepStatus
// ---------------------------------------------------------------------------

/// Status of a single pipeline step.
///
/// Progress only exists while a step is running, and an error message only
/// exists while it is failed, so neither can leak into the other states.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Pending,
    Running { progress: u8 },
    Success,
    Error { message: String },
    Warning,
}

impl StepStatus {
    pub fn label(&self) -> &'static str {
        match self {
            StepStatus::Pending => "pending",
            StepStatus::Running { .. } => "running",
            StepStatus::Success => "success",
            StepStatus::Error { .. } => "error",
            StepStatus::Warning => "warning",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            StepStatus::Pending => "o",
            StepStatus::Running { .. } => ">",
            StepStatus::Success => "+",
            StepStatus::Error { .. } => "x",
            StepStatus::Warning => "!",
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, StepStatus::Running { .. })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, StepStatus::Error { .. })
    }

    /// Progress percentage, only meaningful while running.
    pub fn progress(&self) -> Option<u8> {
        match self {
            StepStatus::Running { progress } => Some(*progress),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            StepStatus::Error { message } => Some(message),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// WorkflowStep
// ---------------------------------------------------------------------------

/// One stage of a (fictitious) deployment pipeline, e.g. "Docker" or
/// "Jenkins". Commands, logs and metadata are fixture strings; nothing here
/// ever executes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowStep {
    pub name: String,
    pub status: StepStatus,
    pub commands: Vec<String>,
    pub logs: Vec<String>,
    /// Ordered key/value pairs shown in the Metadata sub-tab.
    pub metadata: Vec<(String, String)>,
}

impl WorkflowStep {
    /// Reset the step to running from the start. Used by the rerun button,
    /// AI retry and prompt fix alike — none of them re-execute anything.
    pub fn retry(&mut self) {
        self.status = StepStatus::Running { progress: 0 };
    }

    /// Step panels start expanded when there is something worth looking at.
    pub fn default_expanded(&self) -> bool {
        self.status.is_running() || self.status.is_error()
    }
}

// ---------------------------------------------------------------------------
// Chat
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Assistant,
    System,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: ChatRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    /// Reference to a workflow this message talks about, e.g. "WF-2024-001".
    pub workflow_ref: Option<String>,
}

impl ChatMessage {
    fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
            workflow_ref: None,
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, content)
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(ChatRole::System, content)
    }

    pub fn with_workflow_ref(mut self, workflow: impl Into<String>) -> Self {
        self.workflow_ref = Some(workflow.into());
        self
    }

    pub fn sender_label(&self) -> &'static str {
        match self.role {
            ChatRole::User => "You",
            ChatRole::Assistant => "AI Assistant",
            ChatRole::System => "System",
        }
    }
}

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NotificationKind {
    pub fn glyph(&self) -> &'static str {
        match self {
            NotificationKind::Success => "+",
            NotificationKind::Error => "x",
            NotificationKind::Warning => "!",
            NotificationKind::Info => "i",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
    pub tool: Option<String>,
}

// ---------------------------------------------------------------------------
// Credentials
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialStatus {
    Active,
    Expired,
    Unused,
}

impl CredentialStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CredentialStatus::Active => "Active",
            CredentialStatus::Expired => "Expired",
            CredentialStatus::Unused => "Unused",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credential {
    pub id: String,
    pub name: String,
    /// "API Token", "SSH Key", ... — free-form, mirrors the service's wording.
    pub kind: String,
    pub service: String,
    pub last_used: DateTime<Utc>,
    pub status: CredentialStatus,
}

// ---------------------------------------------------------------------------
// Integration catalog
// ---------------------------------------------------------------------------

/// Catalog entry. The icon and brand color are static presentation data, so
/// this is the one record that only serializes.
#[derive(Debug, Clone, Serialize)]
pub struct Integration {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub connected: bool,
    pub icon: &'static str,
    /// The vendor's brand color, as an RGB triple.
    pub color: (u8, u8, u8),
}

// ---------------------------------------------------------------------------
// Use-case templates
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    pub id: u32,
    pub title: String,
    pub category: String,
    pub difficulty: Difficulty,
    pub duration: String,
    pub description: String,
    pub tools: Vec<String>,
    pub featured: bool,
}

// ---------------------------------------------------------------------------
// Dashboard workflows
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStatus {
    Running { progress: u8 },
    Completed,
    Pending,
    Failed,
}

impl WorkflowStatus {
    pub fn label(&self) -> &'static str {
        match self {
            WorkflowStatus::Running { .. } => "running",
            WorkflowStatus::Completed => "completed",
            WorkflowStatus::Pending => "pending",
            WorkflowStatus::Failed => "failed",
        }
    }

    pub fn progress(&self) -> u8 {
        match self {
            WorkflowStatus::Running { progress } => *progress,
            WorkflowStatus::Completed => 100,
            WorkflowStatus::Pending | WorkflowStatus::Failed => 0,
        }
    }
}

/// Summary row on the dashboard. The named steps are labels only; the
/// detailed pipeline view is backed by [`WorkflowStep`] records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workflow {
    pub id: u32,
    pub name: String,
    pub status: WorkflowStatus,
    pub duration: String,
    pub steps: Vec<String>,
}

// ---------------------------------------------------------------------------
// Presentational records (stat cards, pricing, support, feedback)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatCard {
    pub title: String,
    pub value: String,
    pub change: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingPlan {
    pub id: String,
    pub name: String,
    pub price: String,
    pub duration: String,
    pub yearly_price: Option<String>,
    pub description: String,
    pub features: Vec<String>,
    pub featured: bool,
    pub cta: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddOnPack {
    pub name: String,
    pub description: String,
    pub price: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocLink {
    pub title: String,
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub service: String,
    pub uptime: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackKind {
    FeatureRequest,
    BugReport,
}

impl FeedbackKind {
    pub fn label(&self) -> &'static str {
        match self {
            FeedbackKind::FeatureRequest => "Feature Request",
            FeedbackKind::BugReport => "Bug Report",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackStatus {
    InProgress,
    Fixed,
    Planned,
}

impl FeedbackStatus {
    pub fn label(&self) -> &'static str {
        match self {
            FeedbackStatus::InProgress => "In Progress",
            FeedbackStatus::Fixed => "Fixed",
            FeedbackStatus::Planned => "Planned",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackItem {
    pub id: u32,
    pub kind: FeedbackKind,
    pub title: String,
    pub status: FeedbackStatus,
    pub votes: u32,
    pub age: String,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn step(status: StepStatus) -> WorkflowStep {
        WorkflowStep {
            name: "Docker".into(),
            status,
            commands: vec!["docker build .".into()],
            logs: vec!["Building Docker image...".into()],
            metadata: vec![("Registry".into(), "registry.io".into())],
        }
    }

    #[test]
    fn retry_resets_to_running_from_zero() {
        let mut s = step(StepStatus::Error {
            message: "build failed".into(),
        });
        s.retry();
        assert_eq!(s.status, StepStatus::Running { progress: 0 });
        assert_eq!(s.status.progress(), Some(0));
        assert!(s.status.error_message().is_none());
    }

    #[test]
    fn progress_only_reported_while_running() {
        assert_eq!(StepStatus::Success.progress(), None);
        assert_eq!(StepStatus::Pending.progress(), None);
        assert_eq!(StepStatus::Running { progress: 65 }.progress(), Some(65));
    }

    #[test]
    fn error_message_only_reported_while_failed() {
        let failed = StepStatus::Error {
            message: "timeout".into(),
        };
        assert_eq!(failed.error_message(), Some("timeout"));
        assert_eq!(StepStatus::Warning.error_message(), None);
    }

    #[test]
    fn expansion_defaults_follow_status() {
        assert!(step(StepStatus::Running { progress: 10 }).default_expanded());
        assert!(step(StepStatus::Error { message: "boom".into() }).default_expanded());
        assert!(!step(StepStatus::Success).default_expanded());
        assert!(!step(StepStatus::Pending).default_expanded());
        assert!(!step(StepStatus::Warning).default_expanded());
    }

    #[test]
    fn chat_message_constructors_set_role() {
        assert_eq!(ChatMessage::user("hi").role, ChatRole::User);
        assert_eq!(ChatMessage::assistant("hi").role, ChatRole::Assistant);
        assert_eq!(ChatMessage::system("hi").role, ChatRole::System);
        let m = ChatMessage::assistant("done").with_workflow_ref("WF-2024-001");
        assert_eq!(m.workflow_ref.as_deref(), Some("WF-2024-001"));
    }

    #[test]
    fn workflow_status_progress() {
        assert_eq!(WorkflowStatus::Running { progress: 65 }.progress(), 65);
        assert_eq!(WorkflowStatus::Completed.progress(), 100);
        assert_eq!(WorkflowStatus::Pending.progress(), 0);
    }
}
