//! Rendering of the questionnaire and its result screen.
//!
//! Field rows clear their own error on input (handled in `update`);
//! the revenue section follows the computed year set and is collected
//! for both applicant branches even though only legal entities must
//! fill it.

use common::fields;
use common::model::program::Program;
use common::model::submission::ApplicantType;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use super::helpers;
use super::messages::{Field, Msg};
use super::state::EligibilityForm;

pub fn view(component: &EligibilityForm, ctx: &Context<EligibilityForm>) -> Html {
    let link = ctx.link();
    if let Some(programs) = &component.result {
        return build_result(link, programs);
    }

    html! {
        <div class="eligibility-form">
            <h2>{"Testez votre éligibilité"}</h2>
            { build_type_choice(component, link) }
            { build_contact_section(component, link) }
            {
                if component.form.applicant_type.is_some() {
                    build_activity_section(component, link)
                } else {
                    html! {}
                }
            }
            { build_revenue_section(component, link) }
            { build_investment_section(component, link) }

            {
                if let Some(message) = &component.submit_error {
                    html! { <p class="form-error">{ message }</p> }
                } else {
                    html! {}
                }
            }
            <button
                class="submit-btn"
                disabled={component.submitting}
                onclick={link.callback(|_| Msg::Submit)}
            >
                { if component.submitting { "Envoi en cours…" } else { "Vérifier mon éligibilité" } }
            </button>
        </div>
    }
}

fn build_type_choice(component: &EligibilityForm, link: &Scope<EligibilityForm>) -> Html {
    let choice = |applicant_type: ApplicantType, label: &str| {
        let selected = component.form.applicant_type == Some(applicant_type);
        html! {
            <button
                class={classes!("type-btn", selected.then_some("active"))}
                onclick={link.callback(move |_| Msg::SetApplicantType(applicant_type))}
            >
                { label }
            </button>
        }
    };
    html! {
        <div class="form-section">
            <label>{"Vous êtes"}</label>
            { choice(ApplicantType::Physique, "Personne physique") }
            { choice(ApplicantType::Morale, "Personne morale") }
            { field_error(component, "applicantType") }
        </div>
    }
}

fn build_contact_section(component: &EligibilityForm, link: &Scope<EligibilityForm>) -> Html {
    let email_blur = link.callback(|_: FocusEvent| Msg::EmailCommitted);
    html! {
        <div class="form-section">
            <div class="field-row">
                <label>{"Email"}</label>
                <input
                    type="email"
                    value={component.form.email.clone()}
                    oninput={text_callback(link, Field::Email)}
                    onblur={email_blur}
                />
                { field_error(component, "email") }
            </div>
            {
                if component.form.applicant_type == Some(ApplicantType::Physique) {
                    html! {
                        <>
                            { text_row(component, link, "Nom", Field::Nom, component.form.nom.clone()) }
                            { text_row(component, link, "Prénom", Field::Prenom, component.form.prenom.clone()) }
                            { phone_row(component, link) }
                            { select_row(component, link, "Sexe", Field::Sexe,
                                component.form.sexe.clone(), fields::SEXES.to_vec()) }
                            { text_row(component, link, "Âge", Field::Age, component.form.age.clone()) }
                        </>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn build_activity_section(component: &EligibilityForm, link: &Scope<EligibilityForm>) -> Html {
    let branches = fields::branches_for(&component.form.secteur_travail).to_vec();
    let mut creation_years: Vec<String> = (2022..=component.current_year)
        .rev()
        .map(|year| year.to_string())
        .collect();
    creation_years.push(common::years::BEFORE_2022.to_string());

    html! {
        <div class="form-section">
            { select_row(component, link, "Secteur d'activité", Field::SecteurTravail,
                component.form.secteur_travail.clone(), fields::SECTORS.to_vec()) }
            {
                if branches.is_empty() {
                    html! {}
                } else {
                    select_row(component, link, "Branche d'activité", Field::Branche,
                        component.form.branche.clone(), branches)
                }
            }
            { select_row(component, link, "Région", Field::Region,
                component.form.region.clone(), fields::REGIONS.to_vec()) }
            { select_row(component, link, "Statut juridique", Field::StatutJuridique,
                component.form.statut_juridique.clone(), fields::LEGAL_STATUSES.to_vec()) }
            { select_row_owned(component, link, "Année de création", Field::AnneeCreation,
                component.form.annee_creation.clone(), creation_years) }
        </div>
    }
}

fn build_revenue_section(component: &EligibilityForm, link: &Scope<EligibilityForm>) -> Html {
    let years = component.revenue_years();
    if component.form.applicant_type.is_none() || years.is_empty() {
        return html! {};
    }
    html! {
        <div class="form-section">
            <label>{"Chiffre d'affaires déclaré"}</label>
            {
                years.iter().map(|&year| {
                    let raw = component
                        .form
                        .chiffre_affaires
                        .get(&year)
                        .cloned()
                        .unwrap_or_default();
                    let oninput = link.callback(move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::SetRevenue(year, input.value())
                    });
                    let hint = helpers::format_amount(&raw);
                    html! {
                        <div class="field-row" key={year.to_string()}>
                            <label>{ format!("Exercice {year}") }</label>
                            <input type="number" min="0" value={raw} {oninput} />
                            {
                                if let Some(hint) = hint {
                                    html! { <span class="amount-hint">{ hint }</span> }
                                } else {
                                    html! {}
                                }
                            }
                        </div>
                    }
                }).collect::<Html>()
            }
            { field_error(component, "chiffreAffaires") }
        </div>
    }
}

fn build_investment_section(component: &EligibilityForm, link: &Scope<EligibilityForm>) -> Html {
    let onprivacy = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SetPrivacy(input.checked())
    });
    html! {
        <div class="form-section">
            <div class="field-row">
                <label>{"Montant d'investissement envisagé"}</label>
                <input
                    type="number"
                    min="0"
                    value={component.form.montant_investissement.clone()}
                    oninput={text_callback(link, Field::MontantInvestissement)}
                />
                {
                    if let Some(hint) = helpers::format_amount(&component.form.montant_investissement) {
                        html! { <span class="amount-hint">{ hint }</span> }
                    } else {
                        html! {}
                    }
                }
                { field_error(component, "montantInvestissement") }
            </div>
            <div class="field-row">
                <label class="checkbox-row">
                    <input
                        type="checkbox"
                        checked={component.form.accept_privacy_policy}
                        onchange={onprivacy}
                    />
                    {"J'accepte la politique de confidentialité"}
                </label>
                { field_error(component, "acceptPrivacyPolicy") }
            </div>
        </div>
    }
}

fn build_result(link: &Scope<EligibilityForm>, programs: &[Program]) -> Html {
    html! {
        <div class="eligibility-result">
            {
                if programs.is_empty() {
                    html! { <h2>{"Aucun programme ne correspond à votre profil"}</h2> }
                } else {
                    html! { <h2>{ format!("{} programme(s) correspondent à votre profil", programs.len()) }</h2> }
                }
            }
            <ul class="program-list">
                {
                    programs.iter().map(|program| html! {
                        <li key={program.id.unwrap_or_default().to_string()}>
                            <h3>{ &program.nom }</h3>
                            <p>{ &program.description }</p>
                            <p class="program-meta">{ &program.organisme }</p>
                            {
                                if program.lien.is_empty() {
                                    html! {}
                                } else {
                                    html! { <a href={program.lien.clone()}>{"En savoir plus"}</a> }
                                }
                            }
                        </li>
                    }).collect::<Html>()
                }
            </ul>
            <button onclick={link.callback(|_| Msg::Reset)}>{"Refaire un test"}</button>
        </div>
    }
}

fn phone_row(component: &EligibilityForm, link: &Scope<EligibilityForm>) -> Html {
    html! {
        <div class="field-row">
            <label>{"Téléphone"}</label>
            <input
                type="tel"
                list="known-phones"
                value={component.form.telephone.clone()}
                oninput={text_callback(link, Field::Telephone)}
            />
            <datalist id="known-phones">
                {
                    component.known_phones.iter().map(|phone| html! {
                        <option value={phone.clone()} />
                    }).collect::<Html>()
                }
            </datalist>
            { field_error(component, "telephone") }
        </div>
    }
}

fn text_row(
    component: &EligibilityForm,
    link: &Scope<EligibilityForm>,
    label: &str,
    field: Field,
    value: String,
) -> Html {
    html! {
        <div class="field-row">
            <label>{ label }</label>
            <input type="text" {value} oninput={text_callback(link, field)} />
            { field_error(component, helpers::error_key(field)) }
        </div>
    }
}

fn select_row(
    component: &EligibilityForm,
    link: &Scope<EligibilityForm>,
    label: &str,
    field: Field,
    value: String,
    options: Vec<&'static str>,
) -> Html {
    select_row_owned(
        component,
        link,
        label,
        field,
        value,
        options.into_iter().map(str::to_string).collect(),
    )
}

fn select_row_owned(
    component: &EligibilityForm,
    link: &Scope<EligibilityForm>,
    label: &str,
    field: Field,
    value: String,
    options: Vec<String>,
) -> Html {
    let onchange = link.callback(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::Update(field, select.value())
    });
    html! {
        <div class="field-row">
            <label>{ label }</label>
            <select {onchange}>
                <option value="" selected={value.is_empty()}>{"— choisir —"}</option>
                {
                    options.into_iter().map(|option| {
                        let selected = option == value;
                        html! { <option value={option.clone()} {selected}>{ option }</option> }
                    }).collect::<Html>()
                }
            </select>
            { field_error(component, helpers::error_key(field)) }
        </div>
    }
}

fn text_callback(link: &Scope<EligibilityForm>, field: Field) -> Callback<InputEvent> {
    link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::Update(field, input.value())
    })
}

fn field_error(component: &EligibilityForm, key: &str) -> Html {
    match component.errors.get(key) {
        Some(message) => html! { <span class="field-error">{ message }</span> },
        None => html! {},
    }
}
