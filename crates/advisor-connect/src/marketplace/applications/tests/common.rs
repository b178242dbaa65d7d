use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::response::Response;
use serde_json::Value;

use crate::auth::ReviewerGate;
use crate::marketplace::applications::domain::{
    AdvisorApplication, ApplicationId, ApplicationStatus, Consents, ExperienceBracket,
    PersonalInfo, ProfessionalInfo, RegistrationSubmission, RelationshipToVerifier,
    VerificationInfo,
};
use crate::marketplace::applications::repository::{
    ApplicationRepository, DecisionNotice, NotificationError, NotificationPublisher,
    RepositoryError,
};
use crate::marketplace::applications::{application_router, AdvisorApplicationService};

pub(super) const REVIEWER_EMAIL: &str = "ceo@financeconnect.com";

pub(super) fn personal() -> PersonalInfo {
    PersonalInfo {
        first_name: "Sarah".to_string(),
        last_name: "Mitchell".to_string(),
        email: "sarah.mitchell@email.com".to_string(),
        phone: "+1 (555) 123-4567".to_string(),
        location: "New York, NY".to_string(),
    }
}

pub(super) fn professional() -> ProfessionalInfo {
    ProfessionalInfo {
        title: "Senior Financial Advisor".to_string(),
        experience: ExperienceBracket::ElevenToFifteen,
        specialties: vec![
            "Retirement Planning".to_string(),
            "Investment Management".to_string(),
            "Tax Planning".to_string(),
        ],
        bio: "With over 12 years of experience in financial planning, I specialize in \
              helping high-net-worth individuals and families achieve their financial goals."
            .to_string(),
        education: "MBA Finance - Wharton School".to_string(),
        certifications: "CFA, CFP".to_string(),
        languages: vec!["English".to_string(), "Spanish".to_string()],
    }
}

pub(super) fn verification() -> VerificationInfo {
    VerificationInfo {
        verifier_email: "ceo@financeconnect.com".to_string(),
        company_name: "FinanceConnect".to_string(),
        relationship: RelationshipToVerifier::Employee,
    }
}

pub(super) fn submission() -> RegistrationSubmission {
    RegistrationSubmission {
        personal: personal(),
        professional: professional(),
        verification: verification(),
        consents: Consents {
            accepted_terms: true,
            accepted_verification: true,
        },
    }
}

pub(super) fn submission_without_consents() -> RegistrationSubmission {
    RegistrationSubmission {
        consents: Consents::default(),
        ..submission()
    }
}

pub(super) fn submission_without_verifier_contact() -> RegistrationSubmission {
    let mut submission = submission();
    submission.verification.verifier_email = "  ".to_string();
    submission
}

pub(super) fn build_service() -> (
    Arc<AdvisorApplicationService<MemoryRepository, MemoryNotifications>>,
    Arc<MemoryRepository>,
    Arc<MemoryNotifications>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let notifications = Arc::new(MemoryNotifications::default());
    let service = Arc::new(AdvisorApplicationService::new(
        repository.clone(),
        notifications.clone(),
    ));
    (service, repository, notifications)
}

pub(super) fn router_with_service(
    service: Arc<AdvisorApplicationService<MemoryRepository, MemoryNotifications>>,
) -> axum::Router {
    application_router(service, ReviewerGate::new(REVIEWER_EMAIL))
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    records: Arc<Mutex<HashMap<ApplicationId, AdvisorApplication>>>,
}

impl MemoryRepository {
    pub(super) fn stored_count(&self) -> usize {
        self.records.lock().expect("repository mutex poisoned").len()
    }
}

impl ApplicationRepository for MemoryRepository {
    fn insert(
        &self,
        application: AdvisorApplication,
    ) -> Result<AdvisorApplication, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&application.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(application.id.clone(), application.clone());
        Ok(application)
    }

    fn update(&self, application: AdvisorApplication) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&application.id) {
            guard.insert(application.id.clone(), application);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &ApplicationId) -> Result<Option<AdvisorApplication>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn list(
        &self,
        status: Option<ApplicationStatus>,
    ) -> Result<Vec<AdvisorApplication>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .values()
            .filter(|application| status.map_or(true, |status| application.status == status))
            .cloned()
            .collect())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryNotifications {
    notices: Arc<Mutex<Vec<DecisionNotice>>>,
}

impl MemoryNotifications {
    pub(super) fn notices(&self) -> Vec<DecisionNotice> {
        self.notices.lock().expect("notification mutex poisoned").clone()
    }
}

impl NotificationPublisher for MemoryNotifications {
    fn publish(&self, notice: DecisionNotice) -> Result<(), NotificationError> {
        self.notices
            .lock()
            .expect("notification mutex poisoned")
            .push(notice);
        Ok(())
    }
}

pub(super) struct UnavailableRepository;

impl ApplicationRepository for UnavailableRepository {
    fn insert(
        &self,
        _application: AdvisorApplication,
    ) -> Result<AdvisorApplication, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _application: AdvisorApplication) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &ApplicationId) -> Result<Option<AdvisorApplication>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn list(
        &self,
        _status: Option<ApplicationStatus>,
    ) -> Result<Vec<AdvisorApplication>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn assert_status(response: &Response, expected: StatusCode) {
    assert_eq!(response.status(), expected);
}
