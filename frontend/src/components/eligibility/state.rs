use std::collections::BTreeMap;

use common::model::program::Program;
use common::model::submission::EligibilitySubmission;
use common::years;

use super::helpers;

/// State of the questionnaire, from first field to result screen.
pub struct EligibilityForm {
    pub form: EligibilitySubmission,
    /// Field key -> message; cleared per field as soon as it changes.
    pub errors: BTreeMap<&'static str, String>,
    /// Guards against double submission: while a request is in flight
    /// further submits are ignored.
    pub submitting: bool,
    /// Matching programs once the backend answered.
    pub result: Option<Vec<Program>>,
    pub submit_error: Option<String>,
    /// Phone numbers previously used with the entered email.
    pub known_phones: Vec<String>,
    /// Clock-derived once at mount.
    pub current_year: i32,
}

impl EligibilityForm {
    pub fn new() -> Self {
        Self {
            form: EligibilitySubmission::default(),
            errors: BTreeMap::new(),
            submitting: false,
            result: None,
            submit_error: None,
            known_phones: Vec::new(),
            current_year: helpers::current_year(),
        }
    }

    /// Fiscal years the revenue section currently asks for.
    pub fn revenue_years(&self) -> Vec<i32> {
        years::revenue_years(&self.form.annee_creation, self.current_year)
    }
}
