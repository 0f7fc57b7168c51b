//! Pure editing operations behind the visual rule builder.
//!
//! The Yew component is a thin shell over these functions so the
//! value-shape guarantees (notably that `between` always keeps a
//! 2-element `[min, max]` list) hold independently of the DOM.

use crate::fields::{self, FieldInput};
use crate::model::rule::{Operator, RuleValue};

/// The editor shape the builder renders for a `(field, operator)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKind {
    /// Two independent inputs bound to `value[0]` and `value[1]`.
    Between,
    /// Multi-select with search filter, bulk actions and chips.
    MultiSelect,
    /// Single searchable dropdown with a clear-selection sentinel.
    Select,
    /// Free text or numeric input.
    Text,
}

/// No client-side validation ties the operator to the field's declared
/// type; `between` on a select field simply gets the between editor.
pub fn editor_kind(field_id: &str, operator: Operator) -> EditorKind {
    if operator == Operator::Between {
        return EditorKind::Between;
    }
    let closed = matches!(
        fields::field(field_id).map(|def| def.input),
        Some(FieldInput::Select(_))
    );
    match operator {
        Operator::In | Operator::NotIn if closed => EditorKind::MultiSelect,
        _ if closed => EditorKind::Select,
        _ => EditorKind::Text,
    }
}

/// Fresh value for a newly chosen `(field, operator)` pair.
pub fn default_value(operator: Operator) -> RuleValue {
    match operator {
        Operator::Between => RuleValue::List(vec![
            RuleValue::Text(String::new()),
            RuleValue::Text(String::new()),
        ]),
        Operator::In | Operator::NotIn => RuleValue::List(Vec::new()),
        _ => RuleValue::Text(String::new()),
    }
}

/// Sets one bound of a `between` value, coercing the value to a
/// 2-element list first. The untouched bound is always preserved.
pub fn set_between_bound(value: &mut RuleValue, index: usize, raw: &str) {
    debug_assert!(index < 2);
    let mut bounds = match std::mem::replace(value, RuleValue::Null) {
        RuleValue::List(items) => items,
        // A scalar left over from a previous operator becomes the min.
        scalar @ (RuleValue::Number(_) | RuleValue::Text(_) | RuleValue::Bool(_)) => vec![scalar],
        RuleValue::Null => Vec::new(),
    };
    bounds.resize(2, RuleValue::Text(String::new()));
    bounds.truncate(2);
    if index < 2 {
        bounds[index] = RuleValue::from_input(raw);
    }
    *value = RuleValue::List(bounds);
}

/// Adds the option to an `in`/`notIn` selection, or removes it when
/// already selected (chip removal goes through here too).
pub fn toggle_list_value(value: &mut RuleValue, option: &str) {
    let mut items = take_list(value);
    let before = items.len();
    items.retain(|item| item.as_text() != option);
    if items.len() == before {
        items.push(RuleValue::Text(option.to_string()));
    }
    *value = RuleValue::List(items);
}

/// Selects every option of the current filtered subset; options outside
/// the filter keep their state.
pub fn select_all_visible(value: &mut RuleValue, visible: &[&str]) {
    let mut items = take_list(value);
    for option in visible {
        if !items.iter().any(|item| item.as_text() == *option) {
            items.push(RuleValue::Text((*option).to_string()));
        }
    }
    *value = RuleValue::List(items);
}

/// Deselects every option of the current filtered subset only.
pub fn deselect_all_visible(value: &mut RuleValue, visible: &[&str]) {
    let mut items = take_list(value);
    items.retain(|item| !visible.contains(&item.as_text().as_str()));
    *value = RuleValue::List(items);
}

/// Case-insensitive substring filter over a field's option list.
pub fn visible_options(options: &[&'static str], filter: &str) -> Vec<&'static str> {
    let needle = filter.trim().to_lowercase();
    if needle.is_empty() {
        return options.to_vec();
    }
    options
        .iter()
        .copied()
        .filter(|option| option.to_lowercase().contains(&needle))
        .collect()
}

/// Current selection as displayable chip labels.
pub fn selected_texts(value: &RuleValue) -> Vec<String> {
    match value {
        RuleValue::List(items) => items.iter().map(RuleValue::as_text).collect(),
        RuleValue::Null => Vec::new(),
        scalar => vec![scalar.as_text()],
    }
}

fn take_list(value: &mut RuleValue) -> Vec<RuleValue> {
    match std::mem::replace(value, RuleValue::Null) {
        RuleValue::List(items) => items,
        RuleValue::Null => Vec::new(),
        scalar => vec![scalar],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::rule::Operator;

    #[test]
    fn between_keeps_both_bounds() {
        let mut value = default_value(Operator::Between);
        set_between_bound(&mut value, 0, "100");
        set_between_bound(&mut value, 1, "500");
        assert_eq!(
            value,
            RuleValue::List(vec![RuleValue::Number(100.0), RuleValue::Number(500.0)])
        );
        // Re-editing min must not lose max.
        set_between_bound(&mut value, 0, "250");
        assert_eq!(
            value,
            RuleValue::List(vec![RuleValue::Number(250.0), RuleValue::Number(500.0)])
        );
    }

    #[test]
    fn between_coerces_scalar_leftovers_to_a_pair() {
        let mut value = RuleValue::Number(42.0);
        set_between_bound(&mut value, 1, "99");
        assert_eq!(
            value,
            RuleValue::List(vec![RuleValue::Number(42.0), RuleValue::Number(99.0)])
        );
    }

    #[test]
    fn between_never_collapses_to_a_scalar() {
        let mut value = default_value(Operator::Between);
        set_between_bound(&mut value, 1, "10");
        match &value {
            RuleValue::List(items) => assert_eq!(items.len(), 2),
            other => panic!("expected a 2-element list, got {other:?}"),
        }
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut value = default_value(Operator::In);
        toggle_list_value(&mut value, "Oriental");
        toggle_list_value(&mut value, "Souss-Massa");
        assert_eq!(selected_texts(&value), vec!["Oriental", "Souss-Massa"]);
        toggle_list_value(&mut value, "Oriental");
        assert_eq!(selected_texts(&value), vec!["Souss-Massa"]);
    }

    #[test]
    fn bulk_actions_are_scoped_to_the_visible_subset() {
        let mut value = default_value(Operator::In);
        toggle_list_value(&mut value, "Oriental");

        // "Select all" over a filtered subset keeps the prior selection.
        select_all_visible(&mut value, &["Fès-Meknès", "Marrakech-Safi"]);
        assert_eq!(
            selected_texts(&value),
            vec!["Oriental", "Fès-Meknès", "Marrakech-Safi"]
        );

        // "Deselect all" removes only what is currently visible.
        deselect_all_visible(&mut value, &["Fès-Meknès", "Marrakech-Safi"]);
        assert_eq!(selected_texts(&value), vec!["Oriental"]);
    }

    #[test]
    fn select_all_does_not_duplicate_existing_selection() {
        let mut value = default_value(Operator::In);
        toggle_list_value(&mut value, "Oriental");
        select_all_visible(&mut value, &["Oriental"]);
        assert_eq!(selected_texts(&value), vec!["Oriental"]);
    }

    #[test]
    fn filter_is_case_insensitive() {
        let visible = visible_options(crate::fields::REGIONS, "oRiEnt");
        assert_eq!(visible, vec!["Oriental"]);
        assert_eq!(visible_options(crate::fields::REGIONS, "").len(), 12);
    }

    #[test]
    fn editor_kind_follows_field_and_operator() {
        assert_eq!(editor_kind("region", Operator::In), EditorKind::MultiSelect);
        assert_eq!(editor_kind("region", Operator::Eq), EditorKind::Select);
        assert_eq!(editor_kind("age", Operator::Gte), EditorKind::Text);
        // Nothing prevents `between` on a select field.
        assert_eq!(editor_kind("region", Operator::Between), EditorKind::Between);
        assert_eq!(editor_kind("age", Operator::Between), EditorKind::Between);
    }
}
