use common::model::submission::ApplicantType;
use common::requests::EligibilityResponse;

/// Text-valued questionnaire fields, addressed uniformly so one
/// message covers every input.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Email,
    Nom,
    Prenom,
    Telephone,
    Sexe,
    Age,
    SecteurTravail,
    Branche,
    Region,
    StatutJuridique,
    AnneeCreation,
    MontantInvestissement,
}

pub enum Msg {
    SetApplicantType(ApplicantType),
    Update(Field, String),
    SetRevenue(i32, String),
    SetPrivacy(bool),
    /// Email input lost focus: look up previously used phone numbers.
    EmailCommitted,
    PhonesLoaded(Vec<String>),
    Submit,
    Submitted(Box<Result<EligibilityResponse, String>>),
    Reset,
}
