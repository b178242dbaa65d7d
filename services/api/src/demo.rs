use crate::infra::{InMemoryApplicationRepository, InMemoryNotificationPublisher};
use advisor_connect::error::AppError;
use advisor_connect::marketplace::applications::{
    AdvisorApplicationService, Consents, ExperienceBracket, PersonalInfo, ProfessionalInfo,
    RelationshipToVerifier, ReviewDecision, VerificationInfo,
};
use advisor_connect::marketplace::directory::{AdvisorDirectory, AdvisorQuery};
use advisor_connect::marketplace::registration::{RegistrationStep, RegistrationWizard};
use clap::Args;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DirectorySearchArgs {
    /// Match against advisor names and specialties (case-insensitive substring)
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Match against advisor locations (case-insensitive substring)
    #[arg(long)]
    pub(crate) location: Option<String>,
    /// Require an exact specialty from the directory's option list
    #[arg(long)]
    pub(crate) specialty: Option<String>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Reject the demo application instead of approving it.
    #[arg(long)]
    pub(crate) reject: bool,
    /// Notes the reviewer attaches to the decision.
    #[arg(long)]
    pub(crate) notes: Option<String>,
    /// Skip the directory browsing portion of the demo.
    #[arg(long)]
    pub(crate) skip_directory: bool,
}

pub(crate) fn run_directory_search(args: DirectorySearchArgs) -> Result<(), AppError> {
    let DirectorySearchArgs {
        search,
        location,
        specialty,
    } = args;

    let directory = AdvisorDirectory::seeded();
    let query = AdvisorQuery {
        search,
        location,
        specialty,
    };
    let results = directory.search(&query);

    println!(
        "{} of {} advisors match",
        results.len(),
        directory.len()
    );
    for advisor in results {
        println!(
            "- {} | {} | {} | {:.1} ({} reviews) | {}",
            advisor.name,
            advisor.title,
            advisor.location,
            advisor.rating,
            advisor.review_count,
            advisor.specialties.join(", ")
        );
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        reject,
        notes,
        skip_directory,
    } = args;

    println!("Advisor marketplace demo");

    if !skip_directory {
        let directory = AdvisorDirectory::seeded();
        println!("\nDirectory snapshot ({} verified advisors)", directory.len());
        for advisor in directory.advisors() {
            println!(
                "- {} | {} | {}",
                advisor.name, advisor.title, advisor.location
            );
        }
        println!("Specialty filter options: {}", directory.specialties().join(", "));
    }

    println!("\nRegistration wizard walkthrough");
    let mut wizard = RegistrationWizard::new();
    for _ in 0..RegistrationStep::ORDER.len() {
        let step = wizard.step();
        println!(
            "- Step {} of {}: {} ({}%)",
            step.number(),
            RegistrationStep::ORDER.len(),
            step.title(),
            step.progress_percent()
        );
        wizard.next();
    }

    wizard
        .record_personal(demo_personal())
        .record_professional(demo_professional())
        .record_verification(demo_verification());

    // First attempt goes out without the agreements ticked; the gate refuses it.
    match wizard.clone().submit() {
        Ok(_) => println!("  Unexpected: submission accepted without consents"),
        Err(err) => println!("  Submission blocked: {err}"),
    }

    wizard.record_consents(Consents {
        accepted_terms: true,
        accepted_verification: true,
    });
    let submission = match wizard.submit() {
        Ok(submission) => submission,
        Err(err) => {
            println!("  Submission rejected: {err}");
            return Ok(());
        }
    };

    println!("\nApplication intake");
    let repository = Arc::new(InMemoryApplicationRepository::default());
    let notifications = Arc::new(InMemoryNotificationPublisher::default());
    let service = Arc::new(AdvisorApplicationService::new(
        repository,
        notifications.clone(),
    ));

    let application = match service.submit(submission) {
        Ok(application) => application,
        Err(err) => {
            println!("  Submission rejected: {err}");
            return Ok(());
        }
    };
    println!(
        "- Received application {} from {} -> status {}",
        application.id.0,
        application.applicant_name(),
        application.status.label()
    );

    let decision = if reject {
        ReviewDecision::Reject
    } else {
        ReviewDecision::Approve
    };
    println!("\nCEO review");
    let reviewed = match service.review(&application.id, decision, notes) {
        Ok(reviewed) => reviewed,
        Err(err) => {
            println!("  Review failed: {err}");
            return Ok(());
        }
    };
    println!(
        "- Application {} is now {}",
        reviewed.id.0,
        reviewed.status.label()
    );
    if let Some(notes) = &reviewed.review_notes {
        println!("  Reviewer notes: {notes}");
    }

    // Decisions are final; a second pass over the same record is refused.
    if let Err(err) = service.review(&reviewed.id, ReviewDecision::Approve, None) {
        println!("  Repeat decision refused: {err}");
    }

    match serde_json::to_string_pretty(&reviewed.status_view()) {
        Ok(json) => println!("  Public status payload:\n{json}"),
        Err(err) => println!("  Public status payload unavailable: {err}"),
    }

    let notices = notifications.notices();
    if notices.is_empty() {
        println!("  Decision notices: none dispatched");
    } else {
        println!("  Decision notices:");
        for notice in notices {
            println!(
                "    - template={} -> {}",
                notice.template, notice.recipient
            );
        }
    }

    Ok(())
}

fn demo_personal() -> PersonalInfo {
    PersonalInfo {
        first_name: "Jennifer".to_string(),
        last_name: "Rodriguez".to_string(),
        email: "jennifer.rodriguez@email.com".to_string(),
        phone: "+1 (555) 345-6789".to_string(),
        location: "Austin, TX".to_string(),
    }
}

fn demo_professional() -> ProfessionalInfo {
    ProfessionalInfo {
        title: "Retirement Planning Expert".to_string(),
        experience: ExperienceBracket::SixToTen,
        specialties: vec![
            "Retirement Planning".to_string(),
            "Tax Planning".to_string(),
        ],
        bio: "Helps families translate retirement goals into concrete savings plans.".to_string(),
        education: "BBA Finance, University of Texas".to_string(),
        certifications: "CFP".to_string(),
        languages: vec!["English".to_string(), "Spanish".to_string()],
    }
}

fn demo_verification() -> VerificationInfo {
    VerificationInfo {
        verifier_email: "ceo@rodriguezwealth.com".to_string(),
        company_name: "Rodriguez Wealth Advisors".to_string(),
        relationship: RelationshipToVerifier::Employee,
    }
}
