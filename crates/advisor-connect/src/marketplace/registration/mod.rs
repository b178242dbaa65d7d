//! Four-step advisor registration wizard.
//!
//! The wizard is an explicit state machine: each step owns its own draft record and
//! the drafts are merged into one `RegistrationSubmission` only at the final gate.
//! Navigation is unconditionally forward/back; nothing blocks movement except the
//! submission gate itself.

use super::applications::domain::{
    Consents, PersonalInfo, ProfessionalInfo, RegistrationSubmission, SubmissionError,
    VerificationInfo,
};

/// Linear step sequence: Personal → Professional → Verification → Review.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationStep {
    Personal,
    Professional,
    Verification,
    Review,
}

impl RegistrationStep {
    pub const ORDER: [RegistrationStep; 4] = [
        RegistrationStep::Personal,
        RegistrationStep::Professional,
        RegistrationStep::Verification,
        RegistrationStep::Review,
    ];

    pub const fn title(self) -> &'static str {
        match self {
            RegistrationStep::Personal => "Personal Information",
            RegistrationStep::Professional => "Professional Details",
            RegistrationStep::Verification => "CEO Verification",
            RegistrationStep::Review => "Review & Submit",
        }
    }

    /// One-based position in the sequence.
    pub fn number(self) -> usize {
        Self::ORDER
            .iter()
            .position(|step| *step == self)
            .map(|index| index + 1)
            .unwrap_or(1)
    }

    pub fn next(self) -> Self {
        match self {
            RegistrationStep::Personal => RegistrationStep::Professional,
            RegistrationStep::Professional => RegistrationStep::Verification,
            RegistrationStep::Verification => RegistrationStep::Review,
            RegistrationStep::Review => RegistrationStep::Review,
        }
    }

    pub fn back(self) -> Self {
        match self {
            RegistrationStep::Personal => RegistrationStep::Personal,
            RegistrationStep::Professional => RegistrationStep::Personal,
            RegistrationStep::Verification => RegistrationStep::Professional,
            RegistrationStep::Review => RegistrationStep::Verification,
        }
    }

    pub fn progress_percent(self) -> u8 {
        ((self.number() * 100) / Self::ORDER.len()) as u8
    }
}

/// Wizard state: current step plus per-step drafts, merged only on submit.
#[derive(Debug, Clone, Default)]
pub struct RegistrationWizard {
    step: Option<RegistrationStep>,
    personal: Option<PersonalInfo>,
    professional: Option<ProfessionalInfo>,
    verification: Option<VerificationInfo>,
    consents: Consents,
}

impl RegistrationWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> RegistrationStep {
        self.step.unwrap_or(RegistrationStep::Personal)
    }

    /// Unconditional forward navigation, clamped at the review step.
    pub fn next(&mut self) -> RegistrationStep {
        let step = self.step().next();
        self.step = Some(step);
        step
    }

    /// Unconditional backward navigation, clamped at the first step.
    pub fn back(&mut self) -> RegistrationStep {
        let step = self.step().back();
        self.step = Some(step);
        step
    }

    pub fn record_personal(&mut self, personal: PersonalInfo) -> &mut Self {
        self.personal = Some(personal);
        self
    }

    pub fn record_professional(&mut self, professional: ProfessionalInfo) -> &mut Self {
        self.professional = Some(professional);
        self
    }

    pub fn record_verification(&mut self, verification: VerificationInfo) -> &mut Self {
        self.verification = Some(verification);
        self
    }

    pub fn record_consents(&mut self, consents: Consents) -> &mut Self {
        self.consents = consents;
        self
    }

    /// The only gate in the wizard: merge the step drafts and validate the
    /// consents and verification contact. Everything else is accepted as typed.
    pub fn submit(self) -> Result<RegistrationSubmission, SubmissionError> {
        let personal = self
            .personal
            .ok_or(SubmissionError::IncompleteForm { missing: "personal" })?;
        let professional = self.professional.ok_or(SubmissionError::IncompleteForm {
            missing: "professional",
        })?;
        let verification = self.verification.ok_or(SubmissionError::IncompleteForm {
            missing: "verification",
        })?;

        let submission = RegistrationSubmission {
            personal,
            professional,
            verification,
            consents: self.consents,
        };
        submission.validate()?;
        Ok(submission)
    }
}
