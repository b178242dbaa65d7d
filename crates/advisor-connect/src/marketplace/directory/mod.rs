//! In-memory directory of CEO-verified advisors.

mod filter;
mod router;
mod seed;

pub use filter::AdvisorQuery;
pub use router::directory_router;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for listed advisors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AdvisorId(pub String);

/// Listed advisor card shown on the browse page. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advisor {
    pub id: AdvisorId,
    pub name: String,
    pub title: String,
    pub location: String,
    pub specialties: Vec<String>,
    pub rating: f32,
    pub review_count: u32,
    pub years_experience: u8,
    pub verified: bool,
    pub bio: String,
}

/// Client review attached to an advisor profile. Read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub author: String,
    pub rating: u8,
    pub comment: String,
    pub date: chrono::NaiveDate,
}

/// Full profile view: the directory card plus the detail-page extras.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisorProfile {
    #[serde(flatten)]
    pub advisor: Advisor,
    pub education: Vec<String>,
    pub languages: Vec<String>,
    pub email: String,
    pub phone: String,
    pub reviews: Vec<Review>,
}

/// Directory of advisor profiles with lookup and filtered search.
#[derive(Debug, Clone, Default)]
pub struct AdvisorDirectory {
    entries: Vec<AdvisorProfile>,
}

impl AdvisorDirectory {
    pub fn new(entries: Vec<AdvisorProfile>) -> Self {
        Self { entries }
    }

    /// Directory seeded with the launch roster.
    pub fn seeded() -> Self {
        Self::new(seed::launch_roster())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All advisor cards in load order.
    pub fn advisors(&self) -> impl Iterator<Item = &Advisor> {
        self.entries.iter().map(|entry| &entry.advisor)
    }

    pub fn get(&self, id: &AdvisorId) -> Option<&AdvisorProfile> {
        self.entries.iter().find(|entry| &entry.advisor.id == id)
    }

    /// Distinct specialties actually present in the directory, first-seen order.
    /// Filter options are always derived from this set, never hardcoded.
    pub fn specialties(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for advisor in self.advisors() {
            for specialty in &advisor.specialties {
                if !seen.contains(specialty) {
                    seen.push(specialty.clone());
                }
            }
        }
        seen
    }

    /// Apply the query's conjunction of predicates, preserving load order.
    pub fn search(&self, query: &AdvisorQuery) -> Vec<&Advisor> {
        self.advisors()
            .filter(|advisor| query.matches(advisor))
            .collect()
    }
}
