use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The two questionnaire branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicantType {
    /// An individual.
    Physique,
    /// A legal entity.
    Morale,
}

/// One filled-in eligibility questionnaire, as posted to
/// `POST /test/eligibilite`.
///
/// Text inputs stay raw strings so validation owns the parsing.
/// Revenue figures are a map keyed by fiscal year rather than
/// year-interpolated flat field names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EligibilitySubmission {
    pub applicant_type: Option<ApplicantType>,
    pub email: String,
    pub nom: String,
    pub prenom: String,
    pub telephone: String,
    pub sexe: String,
    pub age: String,
    pub secteur_travail: String,
    pub branche: String,
    pub region: String,
    pub statut_juridique: String,
    /// Literal year, or the `avant-2022` sentinel.
    pub annee_creation: String,
    /// Fiscal year -> raw revenue input for that year.
    pub chiffre_affaires: BTreeMap<i32, String>,
    pub montant_investissement: String,
    pub accept_privacy_policy: bool,
}

impl EligibilitySubmission {
    /// The most recent fiscal year with a parseable revenue figure.
    pub fn latest_revenue(&self) -> Option<f64> {
        self.chiffre_affaires
            .iter()
            .rev()
            .find_map(|(_, raw)| raw.trim().parse::<f64>().ok())
    }
}

/// A persisted test record, as listed in a person's history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EligibilityTest {
    pub id: Option<i64>,
    pub submission: EligibilitySubmission,
    /// Names of the programs the submission matched.
    pub matched: Vec<String>,
    pub wants_contact: bool,
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_revenue_prefers_most_recent_year() {
        let mut form = EligibilitySubmission::default();
        form.chiffre_affaires.insert(2022, "100000".to_string());
        form.chiffre_affaires.insert(2024, "250000".to_string());
        assert_eq!(form.latest_revenue(), Some(250000.0));
    }

    #[test]
    fn latest_revenue_skips_blank_years() {
        let mut form = EligibilitySubmission::default();
        form.chiffre_affaires.insert(2023, "180000".to_string());
        form.chiffre_affaires.insert(2024, "".to_string());
        assert_eq!(form.latest_revenue(), Some(180000.0));
    }

    #[test]
    fn applicant_type_wire_names() {
        let json = serde_json::to_string(&ApplicantType::Morale).unwrap();
        assert_eq!(json, r#""morale""#);
    }

    #[test]
    fn revenue_map_round_trips_keyed_by_year() {
        let mut form = EligibilitySubmission::default();
        form.applicant_type = Some(ApplicantType::Morale);
        form.chiffre_affaires.insert(2024, "90000".to_string());
        let json = serde_json::to_string(&form).unwrap();
        assert!(json.contains(r#""chiffreAffaires":{"2024":"90000"}"#));
        let back: EligibilitySubmission = serde_json::from_str(&json).unwrap();
        assert_eq!(back, form);
    }
}
