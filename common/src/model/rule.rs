use serde::{Deserialize, Serialize};

/// How the children of a [`RuleGroup`] combine.
///
/// Absent on the wire means `and`, which is also what the admin form
/// starts new criteria trees with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Combinator {
    #[default]
    And,
    Or,
}

/// Comparison operators a criteria rule may carry.
///
/// Wire names follow the query-builder document format the admin UI
/// produces (`=`, `!=`, `<`, `>`, `<=`, `>=`, `in`, `notIn`, `between`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "=")]
    Eq,
    #[serde(rename = "!=")]
    Neq,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = "<=")]
    Lte,
    #[serde(rename = ">=")]
    Gte,
    #[serde(rename = "in")]
    In,
    #[serde(rename = "notIn")]
    NotIn,
    #[serde(rename = "between")]
    Between,
}

impl Operator {
    /// Operators whose value is a list of scalars rather than a scalar.
    pub fn takes_list(self) -> bool {
        matches!(self, Operator::In | Operator::NotIn | Operator::Between)
    }
}

/// The value side of a rule. Shape depends on the operator: scalar for
/// comparisons, `[min, max]` for `between`, a scalar list for `in`/`notIn`.
///
/// Kept untagged so criteria documents round-trip byte-for-byte through
/// the backend, which persists them verbatim next to the program row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<RuleValue>),
}

impl Default for RuleValue {
    fn default() -> Self {
        RuleValue::Text(String::new())
    }
}

impl RuleValue {
    /// Scalar rendering used by chips, the details modal and the engine.
    pub fn as_text(&self) -> String {
        match self {
            RuleValue::Null => String::new(),
            RuleValue::Bool(b) => b.to_string(),
            RuleValue::Number(n) => {
                if n.fract() == 0.0 {
                    format!("{}", *n as i64)
                } else {
                    n.to_string()
                }
            }
            RuleValue::Text(s) => s.clone(),
            RuleValue::List(items) => items
                .iter()
                .map(RuleValue::as_text)
                .collect::<Vec<_>>()
                .join(", "),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            RuleValue::Number(n) => Some(*n),
            RuleValue::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Parses user input into a number when it looks like one,
    /// otherwise keeps it as text.
    pub fn from_input(raw: &str) -> RuleValue {
        match raw.trim().parse::<f64>() {
            Ok(n) if !raw.trim().is_empty() => RuleValue::Number(n),
            _ => RuleValue::Text(raw.to_string()),
        }
    }
}

/// A single field/operator/value eligibility condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// UI identity only, never semantically load-bearing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub field: String,
    pub operator: Operator,
    #[serde(default)]
    pub value: RuleValue,
    /// Present in the query-builder document format; the admin UI only
    /// ever authors literal values.
    #[serde(
        rename = "valueSource",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub value_source: Option<String>,
}

impl Rule {
    pub fn new(field: &str, operator: Operator, value: RuleValue) -> Self {
        Rule {
            id: None,
            field: field.to_string(),
            operator,
            value,
            value_source: None,
        }
    }
}

/// A child of a group: either a leaf rule or a nested group.
///
/// Group is tried first during deserialization; only objects carrying a
/// `rules` key can match it, so leaf rules fall through unambiguously.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleNode {
    Group(RuleGroup),
    Rule(Rule),
}

/// A recursive boolean expression: a combinator over an ordered list of
/// rules and nested groups. Order is preserved for display but carries
/// no evaluation semantics (both combinators are commutative).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleGroup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub combinator: Combinator,
    pub rules: Vec<RuleNode>,
}

impl Default for RuleGroup {
    fn default() -> Self {
        RuleGroup {
            id: None,
            combinator: Combinator::And,
            rules: Vec::new(),
        }
    }
}

impl RuleGroup {
    /// An empty `and` group: the "no constraint" criteria tree new
    /// programs start with.
    pub fn new() -> Self {
        RuleGroup::default()
    }

    /// Total number of leaf rules, nested groups included.
    pub fn rule_count(&self) -> usize {
        self.rules
            .iter()
            .map(|node| match node {
                RuleNode::Rule(_) => 1,
                RuleNode::Group(group) => group.rule_count(),
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region_group() -> RuleGroup {
        RuleGroup {
            id: None,
            combinator: Combinator::And,
            rules: vec![RuleNode::Rule(Rule::new(
                "region",
                Operator::In,
                RuleValue::List(vec![
                    RuleValue::Text("Rabat-Salé-Kénitra".to_string()),
                    RuleValue::Text("Oriental".to_string()),
                ]),
            ))],
        }
    }

    #[test]
    fn round_trip_preserves_fields_and_order() {
        let group = region_group();
        let json = serde_json::to_string(&group).unwrap();
        let back: RuleGroup = serde_json::from_str(&json).unwrap();
        assert_eq!(group, back);
    }

    #[test]
    fn round_trip_preserves_rule_order() {
        let group = RuleGroup {
            id: None,
            combinator: Combinator::Or,
            rules: vec![
                RuleNode::Rule(Rule::new("age", Operator::Gte, RuleValue::Number(18.0))),
                RuleNode::Rule(Rule::new(
                    "sexe",
                    Operator::Eq,
                    RuleValue::Text("femme".to_string()),
                )),
            ],
        };
        let back: RuleGroup =
            serde_json::from_str(&serde_json::to_string(&group).unwrap()).unwrap();
        let fields: Vec<&str> = back
            .rules
            .iter()
            .map(|node| match node {
                RuleNode::Rule(rule) => rule.field.as_str(),
                RuleNode::Group(_) => "group",
            })
            .collect();
        assert_eq!(fields, vec!["age", "sexe"]);
    }

    #[test]
    fn missing_combinator_defaults_to_and() {
        let group: RuleGroup = serde_json::from_str(r#"{"rules": []}"#).unwrap();
        assert_eq!(group.combinator, Combinator::And);
    }

    #[test]
    fn operator_wire_names() {
        let json = serde_json::to_string(&Operator::NotIn).unwrap();
        assert_eq!(json, r#""notIn""#);
        let op: Operator = serde_json::from_str(r#""between""#).unwrap();
        assert_eq!(op, Operator::Between);
    }

    #[test]
    fn nested_groups_round_trip() {
        let group = RuleGroup {
            id: Some("root".to_string()),
            combinator: Combinator::And,
            rules: vec![
                RuleNode::Rule(Rule::new(
                    "type_personne",
                    Operator::Eq,
                    RuleValue::Text("morale".to_string()),
                )),
                RuleNode::Group(RuleGroup {
                    id: None,
                    combinator: Combinator::Or,
                    rules: vec![RuleNode::Rule(Rule::new(
                        "chiffre_affaire",
                        Operator::Between,
                        RuleValue::List(vec![
                            RuleValue::Number(100000.0),
                            RuleValue::Number(500000.0),
                        ]),
                    ))],
                }),
            ],
        };
        let back: RuleGroup =
            serde_json::from_str(&serde_json::to_string(&group).unwrap()).unwrap();
        assert_eq!(group, back);
        assert_eq!(back.rule_count(), 2);
        match &back.rules[1] {
            RuleNode::Group(inner) => assert_eq!(inner.combinator, Combinator::Or),
            RuleNode::Rule(_) => panic!("expected nested group"),
        }
    }

    #[test]
    fn empty_group_is_valid() {
        let group: RuleGroup = serde_json::from_str(r#"{"combinator":"or","rules":[]}"#).unwrap();
        assert_eq!(group.rule_count(), 0);
        assert_eq!(group.combinator, Combinator::Or);
    }
}
