use advisor_connect::marketplace::applications::{
    AdvisorApplication, ApplicationId, ApplicationRepository, ApplicationStatus, DecisionNotice,
    NotificationError, NotificationPublisher, RepositoryError,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// In-memory application store. Persistence is an external collaborator that is
/// out of scope for now; everything lives for the process lifetime.
#[derive(Default, Clone)]
pub(crate) struct InMemoryApplicationRepository {
    records: Arc<Mutex<HashMap<ApplicationId, AdvisorApplication>>>,
}

impl ApplicationRepository for InMemoryApplicationRepository {
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

/// Decision notices are collected instead of e-mailed; the real transport is an
/// external collaborator.
#[derive(Default, Clone)]
pub(crate) struct InMemoryNotificationPublisher {
    notices: Arc<Mutex<Vec<DecisionNotice>>>,
}

impl NotificationPublisher for InMemoryNotificationPublisher {
    fn publish(&self, notice: DecisionNotice) -> Result<(), NotificationError> {
        let mut guard = self.notices.lock().expect("notification mutex poisoned");
        guard.push(notice);
        Ok(())
    }
}

impl InMemoryNotificationPublisher {
    pub(crate) fn notices(&self) -> Vec<DecisionNotice> {
        self.notices.lock().expect("notification mutex poisoned").clone()
    }
}
