use num_format::{Locale, ToFormattedString};

use common::model::submission::EligibilitySubmission;

use super::messages::Field;

pub fn current_year() -> i32 {
    js_sys::Date::new_0().get_full_year() as i32
}

/// Translation lookup handed to `common::validate`.
pub fn t(key: &str) -> String {
    match key {
        "error.required" => "Ce champ est requis",
        "error.email" => "Adresse email invalide",
        "error.revenue" => "Renseignez au moins un chiffre d'affaires",
        "error.privacy" => "Vous devez accepter la politique de confidentialité",
        other => other,
    }
    .to_string()
}

/// Error-map key of a field, as produced by `common::validate`.
pub fn error_key(field: Field) -> &'static str {
    match field {
        Field::Email => "email",
        Field::Nom => "nom",
        Field::Prenom => "prenom",
        Field::Telephone => "telephone",
        Field::Sexe => "sexe",
        Field::Age => "age",
        Field::SecteurTravail => "secteurTravail",
        Field::Branche => "branche",
        Field::Region => "region",
        Field::StatutJuridique => "statutJuridique",
        Field::AnneeCreation => "anneeCreation",
        Field::MontantInvestissement => "montantInvestissement",
    }
}

pub fn apply(form: &mut EligibilitySubmission, field: Field, value: String) {
    match field {
        Field::Email => form.email = value,
        Field::Nom => form.nom = value,
        Field::Prenom => form.prenom = value,
        Field::Telephone => form.telephone = value,
        Field::Sexe => form.sexe = value,
        Field::Age => form.age = value,
        Field::SecteurTravail => form.secteur_travail = value,
        Field::Branche => form.branche = value,
        Field::Region => form.region = value,
        Field::StatutJuridique => form.statut_juridique = value,
        Field::AnneeCreation => form.annee_creation = value,
        Field::MontantInvestissement => form.montant_investissement = value,
    }
}

/// `"150000"` -> `"150 000 MAD"`, shown under amount inputs.
pub fn format_amount(raw: &str) -> Option<String> {
    let amount: u64 = raw.trim().parse().ok()?;
    Some(format!("{} MAD", amount.to_formatted_string(&Locale::fr)))
}
