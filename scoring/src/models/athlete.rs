use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Athlete {
    pub athlete_id: Uuid,
    pub bib: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub box_gym: Option<String>,
    pub division_id: Uuid,
    pub is_active: bool,
}

impl Athlete {
    /// Preferred presentation name: the explicit display name when set,
    /// otherwise "first last".
    pub fn name(&self) -> String {
        match &self.display_name {
            Some(display) if !display.is_empty() => display.clone(),
            _ => format!("{} {}", self.first_name, self.last_name),
        }
    }

    /// Case-insensitive (last, first) key used for deterministic output
    /// ordering. Never a ranking criterion: athletes with equal metrics
    /// share a place regardless of name order.
    pub fn name_key(&self) -> (String, String) {
        (
            self.last_name.to_lowercase(),
            self.first_name.to_lowercase(),
        )
    }
}
