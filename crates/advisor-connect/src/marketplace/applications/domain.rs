use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for submitted advisor applications.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

/// Personal details collected in the first wizard step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
}

/// Professional details mirroring the advisor card minus rating and reviews.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfessionalInfo {
    pub title: String,
    pub experience: ExperienceBracket,
    pub specialties: Vec<String>,
    pub bio: String,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub certifications: String,
    #[serde(default)]
    pub languages: Vec<String>,
}

/// Experience is collected in fixed brackets, not free-form years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceBracket {
    #[serde(rename = "1-2")]
    OneToTwo,
    #[serde(rename = "3-5")]
    ThreeToFive,
    #[serde(rename = "6-10")]
    SixToTen,
    #[serde(rename = "11-15")]
    ElevenToFifteen,
    #[serde(rename = "16-20")]
    SixteenToTwenty,
    #[serde(rename = "20+")]
    TwentyPlus,
}

impl ExperienceBracket {
    pub const fn label(self) -> &'static str {
        match self {
            ExperienceBracket::OneToTwo => "1-2",
            ExperienceBracket::ThreeToFive => "3-5",
            ExperienceBracket::SixToTen => "6-10",
            ExperienceBracket::ElevenToFifteen => "11-15",
            ExperienceBracket::SixteenToTwenty => "16-20",
            ExperienceBracket::TwentyPlus => "20+",
        }
    }
}

/// CEO-verification contact supplied by the applicant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationInfo {
    pub verifier_email: String,
    pub company_name: String,
    pub relationship: RelationshipToVerifier,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RelationshipToVerifier {
    Employee,
    FormerEmployee,
    Partner,
    Contractor,
    Colleague,
    Other,
}

/// Final-step agreements; both must be accepted before submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consents {
    #[serde(default)]
    pub accepted_terms: bool,
    #[serde(default)]
    pub accepted_verification: bool,
}

/// The merged wizard output submitted as a single unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationSubmission {
    pub personal: PersonalInfo,
    pub professional: ProfessionalInfo,
    pub verification: VerificationInfo,
    pub consents: Consents,
}

impl RegistrationSubmission {
    /// Submission gate: both consents and a reachable verification contact are
    /// required; everything else passes through unvalidated.
    pub fn validate(&self) -> Result<(), SubmissionError> {
        if !self.consents.accepted_terms || !self.consents.accepted_verification {
            return Err(SubmissionError::ConsentRequired);
        }

        if self.verification.verifier_email.trim().is_empty()
            || self.verification.company_name.trim().is_empty()
        {
            return Err(SubmissionError::VerifierContactRequired);
        }

        Ok(())
    }
}

/// Reasons a registration cannot be submitted. Surfaced to the applicant as a
/// warning; there is no retry policy beyond fixing the form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("please agree to the terms and the verification process before submitting")]
    ConsentRequired,
    #[error("please provide the CEO contact email and company name for verification")]
    VerifierContactRequired,
    #[error("registration is incomplete: missing {missing} details")]
    IncompleteForm { missing: &'static str },
}

/// Lifecycle of an application. Pending is the only state with outgoing
/// transitions; approved and rejected are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Approved => "approved",
            ApplicationStatus::Rejected => "rejected",
        }
    }

    pub fn parse_label(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pending" => Some(ApplicationStatus::Pending),
            "approved" => Some(ApplicationStatus::Approved),
            "rejected" => Some(ApplicationStatus::Rejected),
            _ => None,
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            ApplicationStatus::Approved | ApplicationStatus::Rejected
        )
    }
}

/// Operator decision applied to a pending application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewDecision {
    Approve,
    Reject,
}

impl ReviewDecision {
    pub const fn resulting_status(self) -> ApplicationStatus {
        match self {
            ReviewDecision::Approve => ApplicationStatus::Approved,
            ReviewDecision::Reject => ApplicationStatus::Rejected,
        }
    }
}

/// Stored advisor application. Status transitions are the only mutation; records
/// are never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisorApplication {
    pub id: ApplicationId,
    pub personal: PersonalInfo,
    pub professional: ProfessionalInfo,
    pub verification: VerificationInfo,
    pub status: ApplicationStatus,
    pub submitted_at: DateTime<Utc>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub review_notes: Option<String>,
}

impl AdvisorApplication {
    pub fn applicant_name(&self) -> String {
        format!("{} {}", self.personal.first_name, self.personal.last_name)
    }
}
