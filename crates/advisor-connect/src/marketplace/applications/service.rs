use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use super::domain::{
    AdvisorApplication, ApplicationId, ApplicationStatus, RegistrationSubmission, ReviewDecision,
    SubmissionError,
};
use super::repository::{
    ApplicationCounts, ApplicationRepository, DecisionNotice, NotificationError,
    NotificationPublisher, RepositoryError,
};

/// Service composing the submission gate, repository, and decision notifications.
pub struct AdvisorApplicationService<R, N> {
    repository: Arc<R>,
    notifications: Arc<N>,
}

static APPLICATION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_application_id() -> ApplicationId {
    let id = APPLICATION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ApplicationId(format!("app-{id:06}"))
}

impl<R, N> AdvisorApplicationService<R, N>
where
    R: ApplicationRepository + 'static,
    N: NotificationPublisher + 'static,
{
    pub fn new(repository: Arc<R>, notifications: Arc<N>) -> Self {
        Self {
            repository,
            notifications,
        }
    }

    /// Accept a completed registration, storing it as a pending application.
    pub fn submit(
        &self,
        submission: RegistrationSubmission,
    ) -> Result<AdvisorApplication, ApplicationServiceError> {
        submission.validate()?;

        let application = AdvisorApplication {
            id: next_application_id(),
            personal: submission.personal,
            professional: submission.professional,
            verification: submission.verification,
            status: ApplicationStatus::Pending,
            submitted_at: Utc::now(),
            reviewed_at: None,
            review_notes: None,
        };

        let stored = self.repository.insert(application)?;
        info!(
            application_id = %stored.id.0,
            applicant = %stored.applicant_name(),
            company = %stored.verification.company_name,
            "advisor application submitted"
        );
        Ok(stored)
    }

    /// Apply an operator decision to a pending application. Approved and rejected
    /// are terminal, so a second decision on the same record is refused.
    pub fn review(
        &self,
        application_id: &ApplicationId,
        decision: ReviewDecision,
        notes: Option<String>,
    ) -> Result<AdvisorApplication, ApplicationServiceError> {
        let mut application = self
            .repository
            .fetch(application_id)?
            .ok_or(RepositoryError::NotFound)?;

        if application.status.is_terminal() {
            return Err(ReviewError::AlreadyDecided {
                status: application.status,
            }
            .into());
        }

        application.status = decision.resulting_status();
        application.reviewed_at = Some(Utc::now());
        application.review_notes = notes.filter(|value| !value.trim().is_empty());

        self.repository.update(application.clone())?;

        let template = match decision {
            ReviewDecision::Approve => "applicant_approved",
            ReviewDecision::Reject => "applicant_rejected",
        };
        let mut details = BTreeMap::new();
        details.insert(
            "decision".to_string(),
            application.status.label().to_string(),
        );
        details.insert(
            "company".to_string(),
            application.verification.company_name.clone(),
        );
        if let Some(notes) = &application.review_notes {
            details.insert("notes".to_string(), notes.clone());
        }
        self.notifications.publish(DecisionNotice {
            template: template.to_string(),
            application_id: application.id.clone(),
            recipient: application.personal.email.clone(),
            details,
        })?;

        info!(
            application_id = %application.id.0,
            status = application.status.label(),
            "advisor application reviewed"
        );
        Ok(application)
    }

    /// Fetch an application for API responses.
    pub fn get(
        &self,
        application_id: &ApplicationId,
    ) -> Result<AdvisorApplication, ApplicationServiceError> {
        let application = self
            .repository
            .fetch(application_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(application)
    }

    /// Review queue, oldest submission first.
    pub fn list(
        &self,
        status: Option<ApplicationStatus>,
    ) -> Result<Vec<AdvisorApplication>, ApplicationServiceError> {
        let mut applications = self.repository.list(status)?;
        applications.sort_by(|a, b| {
            a.submitted_at
                .cmp(&b.submitted_at)
                .then_with(|| a.id.0.cmp(&b.id.0))
        });
        Ok(applications)
    }

    /// Stat-card counts for the review dashboard.
    pub fn counts(&self) -> Result<ApplicationCounts, ApplicationServiceError> {
        let applications = self.repository.list(None)?;
        Ok(ApplicationCounts::tally(&applications))
    }
}

/// Attempted transition out of a terminal state.
#[derive(Debug, thiserror::Error)]
pub enum ReviewError {
    #[error("application is already {}; decisions are final", status.label())]
    AlreadyDecided { status: ApplicationStatus },
}

/// Error raised by the application service.
#[derive(Debug, thiserror::Error)]
pub enum ApplicationServiceError {
    #[error(transparent)]
    Submission(#[from] SubmissionError),
    #[error(transparent)]
    Review(#[from] ReviewError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Notification(#[from] NotificationError),
}
