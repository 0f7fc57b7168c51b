use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminRole {
    Super,
    #[default]
    Editor,
}

/// An admin account as exposed over the API. Password digests never
/// leave the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminAccount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub nom: String,
    pub email: String,
    pub role: AdminRole,
}
