//! Marketplace workflows: advisor discovery, application review, registration intake.

pub mod applications;
pub mod directory;
pub mod engagement;
pub mod registration;
