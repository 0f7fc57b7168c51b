use serde::{Deserialize, Serialize};

/// A partner organisation shown on the public homepage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Partner {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub nom: String,
    pub site: String,
    /// Served path of the uploaded logo.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}
