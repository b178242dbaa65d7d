//! Client dashboard view: favorites, messages, appointments, recent activity.
//!
//! Read-only snapshots seeded in memory; no mutation paths exist yet.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Router};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::directory::AdvisorId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteAdvisor {
    pub advisor_id: AdvisorId,
    pub name: String,
    pub title: String,
    pub rating: f32,
    pub specialties: Vec<String>,
    pub last_contact: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessagePreview {
    pub advisor_name: String,
    pub message: String,
    pub sent_at: DateTime<Utc>,
    pub unread: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub advisor_name: String,
    pub topic: String,
    pub scheduled_for: DateTime<Utc>,
    pub duration_minutes: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Message,
    Appointment,
    Review,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub kind: ActivityKind,
    pub description: String,
    pub occurred_at: DateTime<Utc>,
}

/// Everything the client dashboard page renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientDashboard {
    pub client_name: String,
    pub member_since: NaiveDate,
    pub favorites: Vec<FavoriteAdvisor>,
    pub messages: Vec<MessagePreview>,
    pub appointments: Vec<Appointment>,
    pub activity: Vec<ActivityEntry>,
}

impl ClientDashboard {
    pub fn unread_messages(&self) -> usize {
        self.messages.iter().filter(|message| message.unread).count()
    }

    /// Demo snapshot used until client accounts are backed by a datastore.
    pub fn seeded() -> Self {
        fn date(year: i32, month: u32, day: u32) -> NaiveDate {
            NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
        }
        fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
            Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
                .single()
                .expect("valid seed timestamp")
        }

        Self {
            client_name: "John Smith".to_string(),
            member_since: date(2024, 1, 1),
            favorites: vec![
                FavoriteAdvisor {
                    advisor_id: AdvisorId("1".to_string()),
                    name: "Sarah Mitchell".to_string(),
                    title: "Senior Financial Advisor".to_string(),
                    rating: 4.9,
                    specialties: vec![
                        "Retirement Planning".to_string(),
                        "Investment Management".to_string(),
                    ],
                    last_contact: date(2024, 1, 15),
                },
                FavoriteAdvisor {
                    advisor_id: AdvisorId("2".to_string()),
                    name: "David Chen".to_string(),
                    title: "Wealth Management Specialist".to_string(),
                    rating: 4.8,
                    specialties: vec![
                        "Estate Planning".to_string(),
                        "Business Financial Planning".to_string(),
                    ],
                    last_contact: date(2024, 1, 10),
                },
            ],
            messages: vec![
                MessagePreview {
                    advisor_name: "Sarah Mitchell".to_string(),
                    message: "I've reviewed your portfolio and have some recommendations \
                              for Q2."
                        .to_string(),
                    sent_at: at(2024, 1, 15, 10, 30),
                    unread: true,
                },
                MessagePreview {
                    advisor_name: "David Chen".to_string(),
                    message: "Thank you for the meeting yesterday. Here's the follow-up \
                              document."
                        .to_string(),
                    sent_at: at(2024, 1, 14, 15, 45),
                    unread: false,
                },
            ],
            appointments: vec![
                Appointment {
                    advisor_name: "Sarah Mitchell".to_string(),
                    topic: "Portfolio Review".to_string(),
                    scheduled_for: at(2024, 1, 20, 14, 0),
                    duration_minutes: 60,
                },
                Appointment {
                    advisor_name: "David Chen".to_string(),
                    topic: "Tax Planning Session".to_string(),
                    scheduled_for: at(2024, 1, 25, 10, 0),
                    duration_minutes: 45,
                },
            ],
            activity: vec![
                ActivityEntry {
                    kind: ActivityKind::Message,
                    description: "Received message from Sarah Mitchell".to_string(),
                    occurred_at: at(2024, 1, 15, 10, 30),
                },
                ActivityEntry {
                    kind: ActivityKind::Appointment,
                    description: "Scheduled appointment with David Chen".to_string(),
                    occurred_at: at(2024, 1, 14, 16, 20),
                },
                ActivityEntry {
                    kind: ActivityKind::Review,
                    description: "Left review for Sarah Mitchell".to_string(),
                    occurred_at: at(2024, 1, 12, 9, 15),
                },
            ],
        }
    }
}

/// Router serving the client dashboard snapshot.
pub fn dashboard_router(dashboard: Arc<ClientDashboard>) -> Router {
    Router::new()
        .route("/api/v1/dashboard", get(dashboard_handler))
        .with_state(dashboard)
}

pub(crate) async fn dashboard_handler(
    State(dashboard): State<Arc<ClientDashboard>>,
) -> impl IntoResponse {
    (StatusCode::OK, axum::Json(dashboard.as_ref().clone()))
}
