//! Launch roster used until the directory is backed by a real datastore.

use chrono::NaiveDate;

use super::{Advisor, AdvisorId, AdvisorProfile, Review};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

pub(super) fn launch_roster() -> Vec<AdvisorProfile> {
    vec![
        AdvisorProfile {
            advisor: Advisor {
                id: AdvisorId("1".to_string()),
                name: "Sarah Mitchell".to_string(),
                title: "Senior Financial Advisor".to_string(),
                location: "New York, NY".to_string(),
                specialties: vec![
                    "Retirement Planning".to_string(),
                    "Investment Management".to_string(),
                    "Tax Planning".to_string(),
                ],
                rating: 4.9,
                review_count: 127,
                years_experience: 12,
                verified: true,
                bio: "Specializing in comprehensive financial planning for high-net-worth \
                      individuals and families."
                    .to_string(),
            },
            education: vec![
                "MBA Finance - Wharton School".to_string(),
                "CFA Charter".to_string(),
                "CFP Certification".to_string(),
            ],
            languages: vec!["English".to_string(), "Spanish".to_string()],
            email: "sarah.mitchell@financeconnect.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            reviews: vec![
                Review {
                    author: "John D.".to_string(),
                    rating: 5,
                    comment: "Sarah helped me plan for retirement and I couldn't be happier \
                              with the results. Very professional and knowledgeable."
                        .to_string(),
                    date: date(2024, 1, 15),
                },
                Review {
                    author: "Maria S.".to_string(),
                    rating: 5,
                    comment: "Excellent advisor! She took the time to understand my goals and \
                              created a personalized investment strategy."
                        .to_string(),
                    date: date(2024, 1, 10),
                },
                Review {
                    author: "Robert K.".to_string(),
                    rating: 4,
                    comment: "Great experience working with Sarah. She's very responsive and \
                              explains complex concepts clearly."
                        .to_string(),
                    date: date(2024, 1, 5),
                },
            ],
        },
        AdvisorProfile {
            advisor: Advisor {
                id: AdvisorId("2".to_string()),
                name: "David Chen".to_string(),
                title: "Wealth Management Specialist".to_string(),
                location: "San Francisco, CA".to_string(),
                specialties: vec![
                    "Estate Planning".to_string(),
                    "Business Financial Planning".to_string(),
                    "Investment Management".to_string(),
                ],
                rating: 4.8,
                review_count: 89,
                years_experience: 15,
                verified: true,
                bio: "Expert in helping entrepreneurs and business owners optimize their \
                      financial strategies."
                    .to_string(),
            },
            education: vec![
                "MS Finance - UC Berkeley".to_string(),
                "CFP Certification".to_string(),
            ],
            languages: vec!["English".to_string(), "Mandarin".to_string()],
            email: "david.chen@financeconnect.com".to_string(),
            phone: "+1 (555) 234-5678".to_string(),
            reviews: Vec::new(),
        },
        AdvisorProfile {
            advisor: Advisor {
                id: AdvisorId("3".to_string()),
                name: "Jennifer Rodriguez".to_string(),
                title: "Retirement Planning Expert".to_string(),
                location: "Austin, TX".to_string(),
                specialties: vec![
                    "Retirement Planning".to_string(),
                    "401k Management".to_string(),
                    "Social Security Optimization".to_string(),
                ],
                rating: 4.9,
                review_count: 156,
                years_experience: 10,
                verified: true,
                bio: "Dedicated to helping clients achieve secure and comfortable retirement \
                      goals."
                    .to_string(),
            },
            education: vec![
                "BBA Finance - University of Texas".to_string(),
                "CFP Certification".to_string(),
            ],
            languages: vec!["English".to_string(), "Spanish".to_string()],
            email: "jennifer.rodriguez@financeconnect.com".to_string(),
            phone: "+1 (555) 345-6789".to_string(),
            reviews: Vec::new(),
        },
        AdvisorProfile {
            advisor: Advisor {
                id: AdvisorId("4".to_string()),
                name: "Michael Thompson".to_string(),
                title: "Investment Advisor".to_string(),
                location: "Chicago, IL".to_string(),
                specialties: vec![
                    "Portfolio Management".to_string(),
                    "Risk Assessment".to_string(),
                    "Alternative Investments".to_string(),
                ],
                rating: 4.7,
                review_count: 203,
                years_experience: 18,
                verified: true,
                bio: "Focused on building diversified investment portfolios for long-term \
                      wealth creation."
                    .to_string(),
            },
            education: vec![
                "MBA - University of Chicago Booth".to_string(),
                "CFA Charter".to_string(),
            ],
            languages: vec!["English".to_string()],
            email: "michael.thompson@financeconnect.com".to_string(),
            phone: "+1 (555) 456-7890".to_string(),
            reviews: Vec::new(),
        },
    ]
}
