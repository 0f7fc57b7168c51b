use common::model::rule::{Combinator, Operator};

pub enum Msg {
    SetCombinator(Combinator),
    AddRule,
    RemoveRule(usize),
    SetField(usize, String),
    SetOperator(usize, Operator),
    /// Free-text / single-select value.
    SetText(usize, String),
    /// One bound of a `between` pair.
    SetBound(usize, usize, String),
    ToggleOption(usize, String),
    SelectAllVisible(usize),
    DeselectAllVisible(usize),
    /// The clear-selection sentinel of the single-select editor.
    ClearSelection(usize),
    SetFilter(usize, String),
    Save,
    Cancel,
}

/// Operators in display order, with their wire tags.
pub const OPERATORS: &[(Operator, &str)] = &[
    (Operator::Eq, "="),
    (Operator::Neq, "!="),
    (Operator::Lt, "<"),
    (Operator::Gt, ">"),
    (Operator::Lte, "<="),
    (Operator::Gte, ">="),
    (Operator::In, "in"),
    (Operator::NotIn, "notIn"),
    (Operator::Between, "between"),
];

pub fn operator_from_tag(tag: &str) -> Operator {
    OPERATORS
        .iter()
        .find(|(_, candidate)| *candidate == tag)
        .map(|(operator, _)| *operator)
        .unwrap_or(Operator::Eq)
}

/// Human label used by read-only views.
pub fn operator_label(operator: Operator) -> &'static str {
    match operator {
        Operator::Eq => "=",
        Operator::Neq => "≠",
        Operator::Lt => "<",
        Operator::Gt => ">",
        Operator::Lte => "≤",
        Operator::Gte => "≥",
        Operator::In => "parmi",
        Operator::NotIn => "hors de",
        Operator::Between => "entre",
    }
}

