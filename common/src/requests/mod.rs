use serde::{Deserialize, Serialize};

use crate::model::admin::AdminRole;
use crate::model::program::Program;

/// Response of `POST /test/eligibilite`: the programs the submission
/// matched, ready for the result screen.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EligibilityResponse {
    pub programs: Vec<Program>,
}

/// Request payload for `POST /admin/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request payload for `POST /admin/register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub nom: String,
    pub email: String,
    pub password: String,
    pub role: AdminRole,
}

/// Response of `GET /test/eligibilite/phones?email=`: phone numbers
/// previously used with that email, for prefill.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PhonesResponse {
    pub phones: Vec<String>,
}
