use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A competitive division, unique per (sex, category) within a competition.
///
/// `sort_order` only drives display ordering of division tabs and schedule
/// columns; it never participates in ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Division {
    pub division_id: Uuid,
    pub sex: String,
    pub category: String,
    pub display_name: String,
    pub sort_order: i32,
}
