use serde::{Deserialize, Serialize};

/// Aggregates behind the admin dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminStats {
    pub total_tests: i64,
    pub total_persons: i64,
    pub contact_requests: i64,
    pub matches_per_program: Vec<ProgramMatchCount>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgramMatchCount {
    pub program: String,
    pub count: i64,
}
