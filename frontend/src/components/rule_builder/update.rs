use common::builder;
use common::fields;
use common::model::rule::{Rule, RuleNode, RuleValue};
use yew::prelude::*;

use super::messages::Msg;
use super::state::RuleBuilder;

pub fn update(component: &mut RuleBuilder, ctx: &Context<RuleBuilder>, msg: Msg) -> bool {
    match msg {
        Msg::SetCombinator(combinator) => {
            component.program.criteres.combinator = combinator;
            true
        }
        Msg::AddRule => {
            let field = fields::FIELDS[0].id;
            component.program.criteres.rules.push(RuleNode::Rule(Rule {
                id: Some(uuid::Uuid::new_v4().to_string()),
                field: field.to_string(),
                operator: common::model::rule::Operator::Eq,
                value: RuleValue::Text(String::new()),
                value_source: None,
            }));
            true
        }
        Msg::RemoveRule(index) => {
            if index < component.program.criteres.rules.len() {
                component.program.criteres.rules.remove(index);
                // Positions shifted; stale filters are just dropped.
                component.filters.clear();
                true
            } else {
                false
            }
        }
        Msg::SetField(index, field) => {
            if let Some(rule) = component.rule_at(index) {
                rule.field = field;
                // The option set changed, the old value is meaningless.
                rule.value = builder::default_value(rule.operator);
                true
            } else {
                false
            }
        }
        Msg::SetOperator(index, operator) => {
            if let Some(rule) = component.rule_at(index) {
                rule.operator = operator;
                rule.value = builder::default_value(operator);
                true
            } else {
                false
            }
        }
        Msg::SetText(index, raw) => {
            if let Some(rule) = component.rule_at(index) {
                rule.value = RuleValue::from_input(&raw);
                true
            } else {
                false
            }
        }
        Msg::SetBound(index, bound, raw) => {
            if let Some(rule) = component.rule_at(index) {
                builder::set_between_bound(&mut rule.value, bound, &raw);
                true
            } else {
                false
            }
        }
        Msg::ToggleOption(index, option) => {
            if let Some(rule) = component.rule_at(index) {
                builder::toggle_list_value(&mut rule.value, &option);
                true
            } else {
                false
            }
        }
        Msg::SelectAllVisible(index) => bulk_visible(component, index, builder::select_all_visible),
        Msg::DeselectAllVisible(index) => {
            bulk_visible(component, index, builder::deselect_all_visible)
        }
        Msg::ClearSelection(index) => {
            if let Some(rule) = component.rule_at(index) {
                rule.value = RuleValue::Text(String::new());
                true
            } else {
                false
            }
        }
        Msg::SetFilter(index, text) => {
            component.filters.insert(index, text);
            true
        }
        Msg::Save => {
            ctx.props().on_save.emit(component.program.clone());
            false
        }
        Msg::Cancel => {
            ctx.props().on_cancel.emit(());
            false
        }
    }
}

/// Applies a bulk action scoped to the currently visible (filtered)
/// option subset of the rule's field.
fn bulk_visible(
    component: &mut RuleBuilder,
    index: usize,
    action: fn(&mut RuleValue, &[&str]),
) -> bool {
    let filter = component.filter(index).to_string();
    let Some(rule) = component.rule_at(index) else {
        return false;
    };
    let options = fields::options(&rule.field);
    let visible = builder::visible_options(&options, &filter);
    action(&mut rule.value, &visible);
    true
}
