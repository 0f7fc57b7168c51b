use common::builder::{self, EditorKind};
use common::fields;
use common::model::rule::{Combinator, Rule, RuleNode, RuleValue};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::{operator_from_tag, Msg, OPERATORS};
use super::state::RuleBuilder;

pub fn view(component: &RuleBuilder, ctx: &Context<RuleBuilder>) -> Html {
    let link = ctx.link();
    html! {
        <div class="rule-builder">
            { build_combinator_bar(component, link) }
            <ul class="rule-list">
                {
                    component.program.criteres.rules.iter().enumerate().map(|(index, node)| {
                        match node {
                            RuleNode::Rule(rule) => build_rule_row(component, link, index, rule),
                            RuleNode::Group(group) => html! {
                                <li class="rule-row nested-group" key={index.to_string()}>
                                    { format!("Groupe imbriqué ({} règle(s))", group.rule_count()) }
                                    <button onclick={link.callback(move |_| Msg::RemoveRule(index))}>{"✕"}</button>
                                </li>
                            },
                        }
                    }).collect::<Html>()
                }
            </ul>
            <button class="add-rule" onclick={link.callback(|_| Msg::AddRule)}>{"+ Ajouter un critère"}</button>
            <div class="builder-actions">
                <button onclick={link.callback(|_| Msg::Save)}>{"Enregistrer"}</button>
                <button onclick={link.callback(|_| Msg::Cancel)}>{"Annuler"}</button>
            </div>
        </div>
    }
}

fn build_combinator_bar(component: &RuleBuilder, link: &Scope<RuleBuilder>) -> Html {
    let choice = |combinator: Combinator, label: &str| {
        let active = component.program.criteres.combinator == combinator;
        html! {
            <button
                class={classes!("combinator-btn", active.then_some("active"))}
                onclick={link.callback(move |_| Msg::SetCombinator(combinator))}
            >
                { label }
            </button>
        }
    };
    html! {
        <div class="combinator-bar">
            <span>{"Combiner les critères avec"}</span>
            { choice(Combinator::And, "ET") }
            { choice(Combinator::Or, "OU") }
        </div>
    }
}

fn build_rule_row(
    component: &RuleBuilder,
    link: &Scope<RuleBuilder>,
    index: usize,
    rule: &Rule,
) -> Html {
    let onfield = link.callback(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::SetField(index, select.value())
    });
    let onoperator = link.callback(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::SetOperator(index, operator_from_tag(&select.value()))
    });
    html! {
        <li class="rule-row" key={rule.id.clone().unwrap_or_else(|| index.to_string())}>
            <select onchange={onfield}>
                {
                    fields::FIELDS.iter().map(|def| {
                        let selected = def.id == rule.field;
                        html! { <option value={def.id} {selected}>{ def.label }</option> }
                    }).collect::<Html>()
                }
            </select>
            <select onchange={onoperator}>
                {
                    OPERATORS.iter().map(|(operator, tag)| {
                        let selected = *operator == rule.operator;
                        html! { <option value={*tag} {selected}>{ *tag }</option> }
                    }).collect::<Html>()
                }
            </select>
            { build_value_editor(component, link, index, rule) }
            <button class="remove-rule" onclick={link.callback(move |_| Msg::RemoveRule(index))}>{"✕"}</button>
        </li>
    }
}

fn build_value_editor(
    component: &RuleBuilder,
    link: &Scope<RuleBuilder>,
    index: usize,
    rule: &Rule,
) -> Html {
    match builder::editor_kind(&rule.field, rule.operator) {
        EditorKind::Between => build_between(link, index, rule),
        EditorKind::MultiSelect => build_multi_select(component, link, index, rule),
        EditorKind::Select => build_single_select(component, link, index, rule),
        EditorKind::Text => {
            let oninput = link.callback(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                Msg::SetText(index, input.value())
            });
            html! { <input type="text" value={rule.value.as_text()} {oninput} /> }
        }
    }
}

/// Two independently editable inputs bound to `value[0]` and `value[1]`.
fn build_between(link: &Scope<RuleBuilder>, index: usize, rule: &Rule) -> Html {
    let bound_value = |position: usize| match &rule.value {
        RuleValue::List(items) => items
            .get(position)
            .map(RuleValue::as_text)
            .unwrap_or_default(),
        _ => String::new(),
    };
    let bound_input = |position: usize, placeholder: &str| {
        let oninput = link.callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::SetBound(index, position, input.value())
        });
        html! {
            <input
                type="text"
                placeholder={placeholder.to_string()}
                value={bound_value(position)}
                {oninput}
            />
        }
    };
    html! {
        <span class="between-editor">
            { bound_input(0, "min") }
            { "et" }
            { bound_input(1, "max") }
        </span>
    }
}

fn build_multi_select(
    component: &RuleBuilder,
    link: &Scope<RuleBuilder>,
    index: usize,
    rule: &Rule,
) -> Html {
    let options = fields::options(&rule.field);
    let filter = component.filter(index);
    let visible = builder::visible_options(&options, filter);
    let selected = builder::selected_texts(&rule.value);

    let onfilter = link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SetFilter(index, input.value())
    });

    html! {
        <div class="multi-select">
            <div class="chips">
                {
                    selected.iter().map(|chip| {
                        let value = chip.clone();
                        let onremove = link.callback(move |_| Msg::ToggleOption(index, value.clone()));
                        html! {
                            <span class="chip" key={chip.clone()}>
                                { chip }
                                <button onclick={onremove}>{"✕"}</button>
                            </span>
                        }
                    }).collect::<Html>()
                }
            </div>
            <input
                type="search"
                placeholder="Filtrer…"
                value={filter.to_string()}
                oninput={onfilter}
            />
            // Bulk actions apply to the filtered subset, not the full
            // option list.
            <div class="bulk-actions">
                <button onclick={link.callback(move |_| Msg::SelectAllVisible(index))}>
                    {"Tout sélectionner"}
                </button>
                <button onclick={link.callback(move |_| Msg::DeselectAllVisible(index))}>
                    {"Tout désélectionner"}
                </button>
            </div>
            <ul class="option-list">
                {
                    visible.iter().map(|option| {
                        let value = option.to_string();
                        let checked = selected.iter().any(|chip| chip == option);
                        let ontoggle = link.callback(move |_| Msg::ToggleOption(index, value.clone()));
                        html! {
                            <li key={*option}>
                                <label>
                                    <input type="checkbox" {checked} onchange={ontoggle} />
                                    { *option }
                                </label>
                            </li>
                        }
                    }).collect::<Html>()
                }
            </ul>
        </div>
    }
}

fn build_single_select(
    component: &RuleBuilder,
    link: &Scope<RuleBuilder>,
    index: usize,
    rule: &Rule,
) -> Html {
    let options = fields::options(&rule.field);
    let filter = component.filter(index);
    let visible = builder::visible_options(&options, filter);
    let current = rule.value.as_text();

    let onfilter = link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SetFilter(index, input.value())
    });
    let onchange = link.callback(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        let value = select.value();
        if value.is_empty() {
            Msg::ClearSelection(index)
        } else {
            Msg::SetText(index, value)
        }
    });

    html! {
        <span class="single-select">
            <input
                type="search"
                placeholder="Filtrer…"
                value={filter.to_string()}
                oninput={onfilter}
            />
            <select {onchange}>
                <option value="" selected={current.is_empty()}>{"— effacer la sélection —"}</option>
                {
                    visible.iter().map(|option| {
                        let selected = current == *option;
                        html! { <option value={*option} {selected}>{ *option }</option> }
                    }).collect::<Html>()
                }
            </select>
        </span>
    }
}
