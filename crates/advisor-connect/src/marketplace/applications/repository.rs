use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{AdvisorApplication, ApplicationId, ApplicationStatus};

/// Storage abstraction so the service module can be exercised in isolation. The
/// production adapter is in-memory for now; a persistent store slots in behind
/// this trait.
pub trait ApplicationRepository: Send + Sync {
    fn insert(
        &self,
        application: AdvisorApplication,
    ) -> Result<AdvisorApplication, RepositoryError>;
    fn update(&self, application: AdvisorApplication) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &ApplicationId) -> Result<Option<AdvisorApplication>, RepositoryError>;
    fn list(
        &self,
        status: Option<ApplicationStatus>,
    ) -> Result<Vec<AdvisorApplication>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("application already exists")]
    Conflict,
    #[error("application not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Outbound notification hook. The real transport (the applicant/CEO e-mail
/// service) is an external collaborator; decisions are fire-and-forget here.
pub trait NotificationPublisher: Send + Sync {
    fn publish(&self, notice: DecisionNotice) -> Result<(), NotificationError>;
}

/// Notification payload so routes and tests can assert the integration boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionNotice {
    pub template: String,
    pub application_id: ApplicationId,
    pub recipient: String,
    pub details: BTreeMap<String, String>,
}

/// Notification dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("notification transport unavailable: {0}")]
    Transport(String),
}

/// Sanitized representation of an application's exposed state.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationStatusView {
    pub application_id: ApplicationId,
    pub applicant: String,
    pub status: &'static str,
    pub submitted_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_notes: Option<String>,
}

impl AdvisorApplication {
    pub fn status_view(&self) -> ApplicationStatusView {
        ApplicationStatusView {
            application_id: self.id.clone(),
            applicant: self.applicant_name(),
            status: self.status.label(),
            submitted_at: self.submitted_at,
            reviewed_at: self.reviewed_at,
            review_notes: self.review_notes.clone(),
        }
    }
}

/// Dashboard stat-card counts derived from the stored applications.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ApplicationCounts {
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
    pub total: usize,
}

impl ApplicationCounts {
    pub fn tally<'a>(applications: impl IntoIterator<Item = &'a AdvisorApplication>) -> Self {
        let mut counts = Self::default();
        for application in applications {
            match application.status {
                ApplicationStatus::Pending => counts.pending += 1,
                ApplicationStatus::Approved => counts.approved += 1,
                ApplicationStatus::Rejected => counts.rejected += 1,
            }
            counts.total += 1;
        }
        counts
    }
}
