//! Synchronous whole-form validation for the eligibility questionnaire.
//!
//! Re-run in full on every submit attempt; the form clears a field's
//! error as soon as its value changes. Message text comes from the
//! caller-provided translation lookup so the same logic serves both the
//! public form and server-side re-validation.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::model::submission::{ApplicantType, EligibilitySubmission};

/// Intentionally loose: one `@` somewhere, a dot after it. Full RFC
/// validation is a non-goal and `a@@b.c` is accepted.
const EMAIL_PATTERN: &str = r"\S+@\S+\.\S+";

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).unwrap())
}

pub fn email_is_valid(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Validates a submission against the revenue `years` computed from its
/// creation year. Returns a field-keyed error map; empty means valid.
pub fn validate<F>(
    form: &EligibilitySubmission,
    years: &[i32],
    t: F,
) -> BTreeMap<&'static str, String>
where
    F: Fn(&str) -> String,
{
    let mut errors = BTreeMap::new();

    if form.applicant_type.is_none() {
        errors.insert("applicantType", t("error.required"));
    }

    if form.email.trim().is_empty() {
        errors.insert("email", t("error.required"));
    } else if !email_is_valid(&form.email) {
        errors.insert("email", t("error.email"));
    }

    if form.applicant_type == Some(ApplicantType::Physique) {
        for (key, value) in [
            ("nom", &form.nom),
            ("prenom", &form.prenom),
            ("telephone", &form.telephone),
        ] {
            if value.trim().is_empty() {
                errors.insert(key, t("error.required"));
            }
        }
    }

    if form.applicant_type.is_some() {
        for (key, value) in [
            ("secteurTravail", &form.secteur_travail),
            ("region", &form.region),
            ("statutJuridique", &form.statut_juridique),
            ("anneeCreation", &form.annee_creation),
        ] {
            if value.trim().is_empty() {
                errors.insert(key, t("error.required"));
            }
        }
    }

    // Only legal entities must disclose revenue, even though the form
    // collects the fields for both branches.
    if form.applicant_type == Some(ApplicantType::Morale) && !years.is_empty() {
        let has_figure = years.iter().any(|year| {
            form.chiffre_affaires
                .get(year)
                .and_then(|raw| raw.trim().parse::<f64>().ok())
                .is_some_and(|n| n >= 0.0)
        });
        if !has_figure {
            errors.insert("chiffreAffaires", t("error.revenue"));
        }
    }

    if form.montant_investissement.trim().is_empty() {
        errors.insert("montantInvestissement", t("error.required"));
    }

    if !form.accept_privacy_policy {
        errors.insert("acceptPrivacyPolicy", t("error.privacy"));
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(key: &str) -> String {
        key.to_string()
    }

    fn filled(applicant_type: ApplicantType) -> EligibilitySubmission {
        EligibilitySubmission {
            applicant_type: Some(applicant_type),
            email: "demandeur@exemple.ma".to_string(),
            nom: "Alaoui".to_string(),
            prenom: "Imane".to_string(),
            telephone: "0600000000".to_string(),
            secteur_travail: "agriculture".to_string(),
            region: "Oriental".to_string(),
            statut_juridique: "SARL".to_string(),
            annee_creation: "2023".to_string(),
            montant_investissement: "400000".to_string(),
            accept_privacy_policy: true,
            ..Default::default()
        }
    }

    #[test]
    fn morale_without_revenue_is_rejected() {
        let form = filled(ApplicantType::Morale);
        let errors = validate(&form, &[2024, 2023], t);
        assert_eq!(errors.get("chiffreAffaires").map(String::as_str), Some("error.revenue"));
    }

    #[test]
    fn morale_with_one_revenue_year_passes() {
        let mut form = filled(ApplicantType::Morale);
        form.chiffre_affaires.insert(2023, "120000".to_string());
        let errors = validate(&form, &[2024, 2023], t);
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    }

    #[test]
    fn physique_is_never_required_to_supply_revenue() {
        let form = filled(ApplicantType::Physique);
        let errors = validate(&form, &[2024, 2023], t);
        assert!(!errors.contains_key("chiffreAffaires"));
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    }

    #[test]
    fn negative_revenue_does_not_count() {
        let mut form = filled(ApplicantType::Morale);
        form.chiffre_affaires.insert(2024, "-5".to_string());
        let errors = validate(&form, &[2024], t);
        assert!(errors.contains_key("chiffreAffaires"));
    }

    #[test]
    fn no_revenue_required_when_no_years_are_requested() {
        let form = filled(ApplicantType::Morale);
        let errors = validate(&form, &[], t);
        assert!(!errors.contains_key("chiffreAffaires"));
    }

    #[test]
    fn email_pattern_is_loose_on_purpose() {
        assert!(email_is_valid("a@b.c"));
        assert!(!email_is_valid("not-an-email"));
        // `\S` accepts a second `@`; the pattern is not RFC-strict.
        assert!(email_is_valid("a@@b.c"));
    }

    #[test]
    fn missing_type_and_privacy_are_reported() {
        let form = EligibilitySubmission {
            email: "a@b.c".to_string(),
            ..Default::default()
        };
        let errors = validate(&form, &[], t);
        assert!(errors.contains_key("applicantType"));
        assert!(errors.contains_key("acceptPrivacyPolicy"));
        assert!(errors.contains_key("montantInvestissement"));
        // Type-dependent fields are only checked once a branch is chosen.
        assert!(!errors.contains_key("region"));
        assert!(!errors.contains_key("nom"));
    }

    #[test]
    fn physique_requires_identity_fields() {
        let mut form = filled(ApplicantType::Physique);
        form.nom.clear();
        form.telephone.clear();
        let errors = validate(&form, &[2024], t);
        assert!(errors.contains_key("nom"));
        assert!(errors.contains_key("telephone"));
        assert!(!errors.contains_key("prenom"));
    }
}
