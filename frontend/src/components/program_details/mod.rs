//! Read-only program details, criteria tree included.
//!
//! Nested groups render recursively with their own combinator label,
//! so a tree authored with sub-groups displays faithfully instead of
//! assuming a flat rule list.

use common::model::program::Program;
use common::model::rule::{Combinator, RuleGroup, RuleNode};
use yew::prelude::*;

use crate::components::rule_builder::operator_label;

#[derive(Properties, PartialEq, Clone)]
pub struct ProgramDetailsProps {
    pub program: Program,
    pub on_close: Callback<()>,
}

pub struct ProgramDetailsModal;

impl Component for ProgramDetailsModal {
    type Message = ();
    type Properties = ProgramDetailsProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let program = &ctx.props().program;
        let on_close = ctx.props().on_close.clone();
        html! {
            <div class="modal-backdrop">
                <div class="modal details-modal">
                    <h3>{ &program.nom }</h3>
                    <p>{ &program.description }</p>
                    <p class="program-meta">
                        { &program.organisme }
                        { if program.published { " · publié" } else { " · brouillon" } }
                    </p>
                    <h4>{"Critères d'éligibilité"}</h4>
                    {
                        if program.criteres.rules.is_empty() {
                            html! { <p>{"Aucune contrainte"}</p> }
                        } else {
                            render_group(&program.criteres)
                        }
                    }
                    <button onclick={Callback::from(move |_| on_close.emit(()))}>{"Fermer"}</button>
                </div>
            </div>
        }
    }
}

fn render_group(group: &RuleGroup) -> Html {
    let label = match group.combinator {
        Combinator::And => "toutes les conditions",
        Combinator::Or => "au moins une condition",
    };
    html! {
        <div class="criteria-group">
            <span class="combinator-label">{ label }</span>
            <ul>
                {
                    group.rules.iter().enumerate().map(|(index, node)| html! {
                        <li key={index.to_string()}>
                            {
                                match node {
                                    RuleNode::Rule(rule) => {
                                        let field_label = common::fields::field(&rule.field)
                                            .map(|def| def.label)
                                            .unwrap_or(rule.field.as_str());
                                        html! {
                                            <span>
                                                { field_label }
                                                { " " }
                                                { operator_label(rule.operator) }
                                                { " " }
                                                { rule.value.as_text() }
                                            </span>
                                        }
                                    }
                                    RuleNode::Group(inner) => render_group(inner),
                                }
                            }
                        </li>
                    }).collect::<Html>()
                }
            </ul>
        </div>
    }
}
