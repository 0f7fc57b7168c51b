use serde::{Deserialize, Serialize};

/// A visitor who submitted at least one eligibility test.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Person {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub email: String,
    pub nom: String,
    pub prenom: String,
    pub telephone: String,
    pub created_at: String,
    pub tests_count: i64,
}
