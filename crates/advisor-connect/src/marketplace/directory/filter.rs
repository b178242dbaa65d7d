use serde::Deserialize;

use super::Advisor;

/// Browse-page filter: up to three optional predicates combined with logical AND.
///
/// Blank or whitespace-only values are treated the same as absent so form inputs can
/// be passed through untouched. The full result is recomputed on every call; at
/// directory scale there is nothing to index.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdvisorQuery {
    /// Case-insensitive substring over advisor name or any specialty.
    #[serde(default)]
    pub search: Option<String>,
    /// Case-insensitive substring over the location string.
    #[serde(default)]
    pub location: Option<String>,
    /// Exact membership in the advisor's specialty list.
    #[serde(default)]
    pub specialty: Option<String>,
}

fn active(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

impl AdvisorQuery {
    pub fn is_unfiltered(&self) -> bool {
        active(&self.search).is_none()
            && active(&self.location).is_none()
            && active(&self.specialty).is_none()
    }

    /// Conjunction of all supplied predicates; absent predicates are always true.
    pub fn matches(&self, advisor: &Advisor) -> bool {
        if let Some(term) = active(&self.search) {
            let name_hit = contains_ignore_case(&advisor.name, term);
            let specialty_hit = advisor
                .specialties
                .iter()
                .any(|specialty| contains_ignore_case(specialty, term));
            if !name_hit && !specialty_hit {
                return false;
            }
        }

        if let Some(term) = active(&self.location) {
            if !contains_ignore_case(&advisor.location, term) {
                return false;
            }
        }

        if let Some(term) = active(&self.specialty) {
            if !advisor.specialties.iter().any(|specialty| specialty == term) {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::super::AdvisorDirectory;
    use super::*;

    fn directory() -> AdvisorDirectory {
        AdvisorDirectory::seeded()
    }

    #[test]
    fn empty_query_is_a_no_op() {
        let directory = directory();
        let query = AdvisorQuery::default();
        assert!(query.is_unfiltered());
        assert_eq!(directory.search(&query).len(), directory.len());
    }

    #[test]
    fn blank_predicates_are_treated_as_absent() {
        let directory = directory();
        let query = AdvisorQuery {
            search: Some("   ".to_string()),
            location: Some(String::new()),
            specialty: None,
        };
        assert!(query.is_unfiltered());
        assert_eq!(directory.search(&query).len(), directory.len());
    }

    #[test]
    fn search_term_is_case_insensitive_over_name_and_specialties() {
        let directory = directory();

        let by_name = AdvisorQuery {
            search: Some("sArAh".to_string()),
            ..AdvisorQuery::default()
        };
        let hits = directory.search(&by_name);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Sarah Mitchell");

        let by_specialty = AdvisorQuery {
            search: Some("ESTATE PLANNING".to_string()),
            ..AdvisorQuery::default()
        };
        let hits = directory.search(&by_specialty);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "David Chen");
    }

    #[test]
    fn location_filter_matches_new_york_to_sarah_mitchell() {
        let directory = directory();
        let query = AdvisorQuery {
            location: Some("New York".to_string()),
            ..AdvisorQuery::default()
        };
        let hits = directory.search(&query);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Sarah Mitchell");
    }

    #[test]
    fn specialty_filter_requires_exact_membership() {
        let directory = directory();

        let exact = AdvisorQuery {
            specialty: Some("Retirement Planning".to_string()),
            ..AdvisorQuery::default()
        };
        let hits = directory.search(&exact);
        assert_eq!(hits.len(), 2);

        // Substrings and casing differences are not membership.
        let partial = AdvisorQuery {
            specialty: Some("Retirement".to_string()),
            ..AdvisorQuery::default()
        };
        assert!(directory.search(&partial).is_empty());

        let wrong_case = AdvisorQuery {
            specialty: Some("retirement planning".to_string()),
            ..AdvisorQuery::default()
        };
        assert!(directory.search(&wrong_case).is_empty());
    }

    #[test]
    fn unknown_specialty_yields_empty_results_not_errors() {
        let directory = directory();
        let query = AdvisorQuery {
            specialty: Some("Underwater Basket Weaving".to_string()),
            ..AdvisorQuery::default()
        };
        assert!(directory.search(&query).is_empty());
    }

    #[test]
    fn combined_predicates_are_a_logical_and() {
        let directory = directory();

        let query = AdvisorQuery {
            search: Some("planning".to_string()),
            location: Some("austin".to_string()),
            specialty: Some("401k Management".to_string()),
        };
        let hits = directory.search(&query);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Jennifer Rodriguez");

        // Same search and specialty, contradictory location: the AND must fail.
        let conflicting = AdvisorQuery {
            location: Some("Chicago".to_string()),
            ..query
        };
        assert!(directory.search(&conflicting).is_empty());
    }

    #[test]
    fn results_preserve_directory_order() {
        let directory = directory();
        let query = AdvisorQuery {
            search: Some("Investment Management".to_string()),
            ..AdvisorQuery::default()
        };
        let names: Vec<&str> = directory
            .search(&query)
            .iter()
            .map(|advisor| advisor.name.as_str())
            .collect();
        assert_eq!(names, ["Sarah Mitchell", "David Chen"]);
    }
}
