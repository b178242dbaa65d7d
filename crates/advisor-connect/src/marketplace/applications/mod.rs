//! Advisor application intake and CEO review workflow.
//!
//! Applications arrive as completed registration submissions, sit in a pending
//! queue, and are decided exactly once by the configured reviewer. Decisions fan
//! out to a notification hook; storage sits behind a repository trait.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    AdvisorApplication, ApplicationId, ApplicationStatus, Consents, ExperienceBracket,
    PersonalInfo, ProfessionalInfo, RegistrationSubmission, RelationshipToVerifier,
    ReviewDecision, SubmissionError, VerificationInfo,
};
pub use repository::{
    ApplicationCounts, ApplicationRepository, ApplicationStatusView, DecisionNotice,
    NotificationError, NotificationPublisher, RepositoryError,
};
pub use router::application_router;
pub use service::{AdvisorApplicationService, ApplicationServiceError, ReviewError};
