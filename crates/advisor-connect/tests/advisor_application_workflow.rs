//! Integration scenarios for advisor registration intake and CEO review.
//!
//! Exercised end to end through the public wizard, service facade, and HTTP router
//! so the lifecycle is validated without reaching into private modules.

mod common {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use advisor_connect::marketplace::applications::{
        AdvisorApplication, AdvisorApplicationService, ApplicationId, ApplicationRepository,
        ApplicationStatus, Consents, DecisionNotice, ExperienceBracket, NotificationError,
        NotificationPublisher, PersonalInfo, ProfessionalInfo, RegistrationSubmission,
        RelationshipToVerifier, RepositoryError, VerificationInfo,
    };

    pub const REVIEWER_EMAIL: &str = "ceo@financeconnect.com";

    pub fn personal() -> PersonalInfo {
        PersonalInfo {
            first_name: "David".to_string(),
            last_name: "Chen".to_string(),
            email: "david.chen@email.com".to_string(),
            phone: "+1 (555) 234-5678".to_string(),
            location: "San Francisco, CA".to_string(),
        }
    }

    pub fn professional() -> ProfessionalInfo {
        ProfessionalInfo {
            title: "Wealth Management Specialist".to_string(),
            experience: ExperienceBracket::SixteenToTwenty,
            specialties: vec![
                "Estate Planning".to_string(),
                "Business Financial Planning".to_string(),
            ],
            bio: "Expert in helping entrepreneurs and business owners optimize their \
                  financial strategies."
                .to_string(),
            education: "MS Finance - UC Berkeley".to_string(),
            certifications: "CFP".to_string(),
            languages: vec!["English".to_string(), "Mandarin".to_string()],
        }
    }

    pub fn verification() -> VerificationInfo {
        VerificationInfo {
            verifier_email: REVIEWER_EMAIL.to_string(),
            company_name: "FinanceConnect".to_string(),
            relationship: RelationshipToVerifier::FormerEmployee,
        }
    }

    pub fn submission() -> RegistrationSubmission {
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

    #[derive(Default, Clone)]
    pub struct MemoryRepository {
        records: Arc<Mutex<HashMap<ApplicationId, AdvisorApplication>>>,
    }

    impl MemoryRepository {
        pub fn stored_count(&self) -> usize {
            self.records.lock().expect("lock").len()
        }
    }

    impl ApplicationRepository for MemoryRepository {
        fn insert(
            &self,
            application: AdvisorApplication,
        ) -> Result<AdvisorApplication, RepositoryError> {
            let mut guard = self.records.lock().expect("lock");
            if guard.contains_key(&application.id) {
                return Err(RepositoryError::Conflict);
            }
            guard.insert(application.id.clone(), application.clone());
            Ok(application)
        }

        fn update(&self, application: AdvisorApplication) -> Result<(), RepositoryError> {
            let mut guard = self.records.lock().expect("lock");
            guard.insert(application.id.clone(), application);
            Ok(())
        }

        fn fetch(
            &self,
            id: &ApplicationId,
        ) -> Result<Option<AdvisorApplication>, RepositoryError> {
            let guard = self.records.lock().expect("lock");
            Ok(guard.get(id).cloned())
        }

        fn list(
            &self,
            status: Option<ApplicationStatus>,
        ) -> Result<Vec<AdvisorApplication>, RepositoryError> {
            let guard = self.records.lock().expect("lock");
            Ok(guard
                .values()
                .filter(|application| {
                    status.map_or(true, |status| application.status == status)
                })
                .cloned()
                .collect())
        }
    }

    #[derive(Default, Clone)]
    pub struct MemoryNotifications {
        notices: Arc<Mutex<Vec<DecisionNotice>>>,
    }

    impl MemoryNotifications {
        pub fn notices(&self) -> Vec<DecisionNotice> {
            self.notices.lock().expect("lock").clone()
        }
    }

    impl NotificationPublisher for MemoryNotifications {
        fn publish(&self, notice: DecisionNotice) -> Result<(), NotificationError> {
            self.notices.lock().expect("lock").push(notice);
            Ok(())
        }
    }

    pub fn build_service() -> (
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
}

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use advisor_connect::auth::{ReviewerGate, OPERATOR_EMAIL_HEADER};
use advisor_connect::marketplace::applications::{
    application_router, ApplicationServiceError, ApplicationStatus, ReviewDecision, ReviewError,
    SubmissionError,
};
use advisor_connect::marketplace::registration::{RegistrationStep, RegistrationWizard};

use common::*;

#[test]
fn wizard_output_flows_through_the_full_review_lifecycle() {
    let (service, repository, notifications) = build_service();

    let mut wizard = RegistrationWizard::new();
    wizard.record_personal(personal());
    wizard.next();
    wizard.record_professional(professional());
    wizard.next();
    wizard.record_verification(verification());
    wizard.next();
    assert_eq!(wizard.step(), RegistrationStep::Review);
    wizard.record_consents(advisor_connect::marketplace::applications::Consents {
        accepted_terms: true,
        accepted_verification: true,
    });

    let submission = wizard.submit().expect("complete wizard submits");
    let stored = service.submit(submission).expect("intake accepts");
    assert_eq!(stored.status, ApplicationStatus::Pending);
    assert_eq!(repository.stored_count(), 1);

    let approved = service
        .review(
            &stored.id,
            ReviewDecision::Approve,
            Some("Strong recommendation.".to_string()),
        )
        .expect("pending application approved");
    assert_eq!(approved.status, ApplicationStatus::Approved);
    assert!(approved.reviewed_at >= Some(approved.submitted_at));

    let notices = notifications.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].recipient, "david.chen@email.com");

    // Terminal states admit no further transitions.
    match service.review(&stored.id, ReviewDecision::Reject, None) {
        Err(ApplicationServiceError::Review(ReviewError::AlreadyDecided { status })) => {
            assert_eq!(status, ApplicationStatus::Approved);
        }
        other => panic!("expected already-decided, got {other:?}"),
    }
}

#[test]
fn consentless_wizard_never_reaches_the_service() {
    let (service, repository, notifications) = build_service();

    let mut wizard = RegistrationWizard::new();
    wizard
        .record_personal(personal())
        .record_professional(professional())
        .record_verification(verification());

    match wizard.submit() {
        Err(SubmissionError::ConsentRequired) => {}
        other => panic!("expected consent error, got {other:?}"),
    }

    // Nothing was submitted, stored, or dispatched.
    drop(service);
    assert_eq!(repository.stored_count(), 0);
    assert!(notifications.notices().is_empty());
}

async fn read_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

#[tokio::test]
async fn http_round_trip_submits_and_reviews_an_application() {
    let (service, _, notifications) = build_service();
    let router = application_router(service, ReviewerGate::new(REVIEWER_EMAIL));

    let response = router
        .clone()
        .oneshot(
            Request::post("/api/v1/advisors/applications")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::to_vec(&submission()).expect("encode submission"),
                ))
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let body = read_json(response).await;
    let application_id = body["application_id"].as_str().expect("id").to_string();
    assert_eq!(body["status"], "pending");

    let response = router
        .oneshot(
            Request::post(format!(
                "/api/v1/advisors/applications/{application_id}/review"
            ))
            .header(header::CONTENT_TYPE, "application/json")
            .header(OPERATOR_EMAIL_HEADER, REVIEWER_EMAIL)
            .body(Body::from(
                serde_json::to_vec(&json!({ "decision": "reject", "notes": "Not a fit." }))
                    .expect("encode review"),
            ))
            .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["status"], "rejected");

    let notices = notifications.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].template, "applicant_rejected");
}
