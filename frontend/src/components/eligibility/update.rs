use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::requests::{EligibilityResponse, PhonesResponse};
use common::validate;

use super::helpers;
use super::messages::{Field, Msg};
use super::state::EligibilityForm;

pub fn update(component: &mut EligibilityForm, ctx: &Context<EligibilityForm>, msg: Msg) -> bool {
    match msg {
        Msg::SetApplicantType(applicant_type) => {
            component.form.applicant_type = Some(applicant_type);
            component.errors.remove("applicantType");
            true
        }
        Msg::Update(field, value) => {
            helpers::apply(&mut component.form, field, value);
            component.errors.remove(helpers::error_key(field));
            match field {
                // The branch list depends on the sector.
                Field::SecteurTravail => component.form.branche.clear(),
                // Keep only the revenue entries the new year set asks for.
                Field::AnneeCreation => {
                    let years = component.revenue_years();
                    component
                        .form
                        .chiffre_affaires
                        .retain(|year, _| years.contains(year));
                }
                _ => {}
            }
            true
        }
        Msg::SetRevenue(year, raw) => {
            component.form.chiffre_affaires.insert(year, raw);
            component.errors.remove("chiffreAffaires");
            true
        }
        Msg::SetPrivacy(accepted) => {
            component.form.accept_privacy_policy = accepted;
            component.errors.remove("acceptPrivacyPolicy");
            true
        }
        Msg::EmailCommitted => {
            if !validate::email_is_valid(&component.form.email) {
                return false;
            }
            let email = component.form.email.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let url = format!("/test/eligibilite/phones?email={email}");
                let phones = match Request::get(&url).send().await {
                    Ok(response) if response.ok() => response
                        .json::<PhonesResponse>()
                        .await
                        .map(|body| body.phones)
                        .unwrap_or_default(),
                    _ => Vec::new(),
                };
                link.send_message(Msg::PhonesLoaded(phones));
            });
            false
        }
        Msg::PhonesLoaded(phones) => {
            let changed = component.known_phones != phones;
            component.known_phones = phones;
            changed
        }
        Msg::Submit => {
            if component.submitting {
                return false;
            }
            let years = component.revenue_years();
            component.errors = validate::validate(&component.form, &years, helpers::t);
            if !component.errors.is_empty() {
                return true;
            }

            component.submitting = true;
            component.submit_error = None;
            let form = component.form.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let outcome = submit(form).await;
                link.send_message(Msg::Submitted(Box::new(outcome)));
            });
            true
        }
        Msg::Submitted(outcome) => {
            component.submitting = false;
            match *outcome {
                Ok(response) => {
                    component.result = Some(response.programs);
                    component.submit_error = None;
                }
                Err(err) => {
                    gloo_console::error!(format!("eligibility submit failed: {err}"));
                    component.submit_error =
                        Some("Une erreur est survenue, veuillez réessayer.".to_string());
                }
            }
            true
        }
        Msg::Reset => {
            *component = EligibilityForm::new();
            true
        }
    }
}

async fn submit(
    form: common::model::submission::EligibilitySubmission,
) -> Result<EligibilityResponse, String> {
    let response = Request::post("/test/eligibilite")
        .json(&form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(response.text().await.unwrap_or_default());
    }
    response.json().await.map_err(|e| e.to_string())
}
