//! Evaluates program criteria trees against a submitted questionnaire.
//!
//! Scalar comparison is numeric when both sides parse as numbers and
//! lexicographic otherwise. A rule whose field is absent from the
//! context is false, whatever its operator. An empty `and` group is
//! true and an empty `or` group is false (the identity element of each
//! combinator).

use std::collections::HashMap;

use common::model::program::Program;
use common::model::rule::{Combinator, Operator, Rule, RuleGroup, RuleNode, RuleValue};
use common::model::submission::{ApplicantType, EligibilitySubmission};
use common::years;
use rayon::prelude::*;

/// Field id -> value derived from one submission.
pub type Context = HashMap<&'static str, RuleValue>;

/// Maps a questionnaire onto the closed field vocabulary. Blank
/// answers stay out of the context so rules on them evaluate false.
pub fn context_from(form: &EligibilitySubmission) -> Context {
    let mut ctx = Context::new();

    if let Some(applicant_type) = form.applicant_type {
        let tag = match applicant_type {
            ApplicantType::Physique => "physique",
            ApplicantType::Morale => "morale",
        };
        ctx.insert("type_personne", RuleValue::Text(tag.to_string()));
    }

    for (field, raw) in [
        ("sexe", &form.sexe),
        ("secteur_activite", &form.secteur_travail),
        ("branche_activite", &form.branche),
        ("region", &form.region),
        ("statut_juridique", &form.statut_juridique),
    ] {
        if !raw.trim().is_empty() {
            ctx.insert(field, RuleValue::Text(raw.trim().to_string()));
        }
    }

    for (field, raw) in [
        ("age", &form.age),
        ("montant_investissement", &form.montant_investissement),
    ] {
        if let Ok(n) = raw.trim().parse::<f64>() {
            ctx.insert(field, RuleValue::Number(n));
        }
    }

    // The sentinel enters the context as 2021 so numeric comparisons
    // against the creation year keep working.
    if form.annee_creation == years::BEFORE_2022 {
        ctx.insert("annee_creation", RuleValue::Number(2021.0));
    } else if let Ok(year) = form.annee_creation.trim().parse::<f64>() {
        ctx.insert("annee_creation", RuleValue::Number(year));
    }

    if let Some(revenue) = form.latest_revenue() {
        ctx.insert("chiffre_affaire", RuleValue::Number(revenue));
    }

    ctx
}

fn scalars_equal(a: &RuleValue, b: &RuleValue) -> bool {
    match (a.as_number(), b.as_number()) {
        (Some(x), Some(y)) => x == y,
        _ => a.as_text() == b.as_text(),
    }
}

fn compare(a: &RuleValue, b: &RuleValue) -> std::cmp::Ordering {
    match (a.as_number(), b.as_number()) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(std::cmp::Ordering::Equal),
        _ => a.as_text().cmp(&b.as_text()),
    }
}

pub fn rule_matches(rule: &Rule, ctx: &Context) -> bool {
    let Some(actual) = ctx.get(rule.field.as_str()) else {
        return false;
    };
    match rule.operator {
        Operator::Eq => scalars_equal(actual, &rule.value),
        Operator::Neq => !scalars_equal(actual, &rule.value),
        Operator::Lt => compare(actual, &rule.value).is_lt(),
        Operator::Gt => compare(actual, &rule.value).is_gt(),
        Operator::Lte => compare(actual, &rule.value).is_le(),
        Operator::Gte => compare(actual, &rule.value).is_ge(),
        Operator::In => match &rule.value {
            RuleValue::List(items) => items.iter().any(|item| scalars_equal(actual, item)),
            _ => false,
        },
        Operator::NotIn => match &rule.value {
            RuleValue::List(items) => !items.iter().any(|item| scalars_equal(actual, item)),
            _ => false,
        },
        Operator::Between => match &rule.value {
            // Inclusive on both bounds; an inverted [min, max] matches
            // nothing.
            RuleValue::List(bounds) if bounds.len() == 2 => {
                compare(actual, &bounds[0]).is_ge() && compare(actual, &bounds[1]).is_le()
            }
            _ => false,
        },
    }
}

pub fn group_matches(group: &RuleGroup, ctx: &Context) -> bool {
    let node = |node: &RuleNode| match node {
        RuleNode::Rule(rule) => rule_matches(rule, ctx),
        RuleNode::Group(inner) => group_matches(inner, ctx),
    };
    match group.combinator {
        Combinator::And => group.rules.iter().all(node),
        Combinator::Or => group.rules.iter().any(node),
    }
}

/// Published programs whose criteria accept the submission, evaluated
/// in parallel.
pub fn matching_programs(programs: Vec<Program>, ctx: &Context) -> Vec<Program> {
    programs
        .into_par_iter()
        .filter(|program| program.published && group_matches(&program.criteres, ctx))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::rule::RuleValue::{Number, Text};

    fn ctx() -> Context {
        let mut ctx = Context::new();
        ctx.insert("region", Text("Oriental".to_string()));
        ctx.insert("age", Number(30.0));
        ctx.insert("chiffre_affaire", Number(250000.0));
        ctx
    }

    fn rule(field: &str, operator: Operator, value: RuleValue) -> Rule {
        Rule::new(field, operator, value)
    }

    #[test]
    fn every_operator_behaves() {
        let ctx = ctx();
        let cases = [
            (rule("region", Operator::Eq, Text("Oriental".into())), true),
            (rule("region", Operator::Neq, Text("Oriental".into())), false),
            (rule("age", Operator::Lt, Number(40.0)), true),
            (rule("age", Operator::Gt, Number(40.0)), false),
            (rule("age", Operator::Lte, Number(30.0)), true),
            (rule("age", Operator::Gte, Number(31.0)), false),
            (
                rule(
                    "region",
                    Operator::In,
                    RuleValue::List(vec![Text("Oriental".into()), Text("Souss-Massa".into())]),
                ),
                true,
            ),
            (
                rule(
                    "region",
                    Operator::NotIn,
                    RuleValue::List(vec![Text("Oriental".into())]),
                ),
                false,
            ),
            (
                rule(
                    "chiffre_affaire",
                    Operator::Between,
                    RuleValue::List(vec![Number(100000.0), Number(500000.0)]),
                ),
                true,
            ),
        ];
        for (rule, expected) in cases {
            assert_eq!(rule_matches(&rule, &ctx), expected, "rule {rule:?}");
        }
    }

    #[test]
    fn numeric_comparison_wins_over_lexicographic() {
        let mut ctx = Context::new();
        ctx.insert("age", Text("9".to_string()));
        // Lexicographically "9" > "10"; numerically it is not.
        assert!(!rule_matches(
            &rule("age", Operator::Gt, Number(10.0)),
            &ctx
        ));
    }

    #[test]
    fn missing_field_is_false_for_every_operator() {
        let ctx = Context::new();
        for operator in [
            Operator::Eq,
            Operator::Neq,
            Operator::NotIn,
            Operator::Between,
        ] {
            assert!(!rule_matches(
                &rule("sexe", operator, Text("femme".into())),
                &ctx
            ));
        }
    }

    #[test]
    fn inverted_between_bounds_match_nothing() {
        let ctx = ctx();
        assert!(!rule_matches(
            &rule(
                "age",
                Operator::Between,
                RuleValue::List(vec![Number(40.0), Number(20.0)]),
            ),
            &ctx
        ));
    }

    #[test]
    fn empty_and_group_is_true_empty_or_group_is_false() {
        let ctx = ctx();
        let and_group = RuleGroup::new();
        assert!(group_matches(&and_group, &ctx));

        let or_group = RuleGroup {
            combinator: Combinator::Or,
            ..RuleGroup::new()
        };
        assert!(!group_matches(&or_group, &ctx));
    }

    #[test]
    fn nested_groups_evaluate_recursively() {
        let ctx = ctx();
        let group = RuleGroup {
            id: None,
            combinator: Combinator::And,
            rules: vec![
                RuleNode::Rule(rule("region", Operator::Eq, Text("Oriental".into()))),
                RuleNode::Group(RuleGroup {
                    id: None,
                    combinator: Combinator::Or,
                    rules: vec![
                        RuleNode::Rule(rule("age", Operator::Gte, Number(60.0))),
                        RuleNode::Rule(rule("chiffre_affaire", Operator::Lte, Number(300000.0))),
                    ],
                }),
            ],
        };
        assert!(group_matches(&group, &ctx));
    }

    #[test]
    fn context_maps_sentinel_and_latest_revenue() {
        let mut form = EligibilitySubmission {
            applicant_type: Some(ApplicantType::Morale),
            annee_creation: years::BEFORE_2022.to_string(),
            secteur_travail: "tourisme".to_string(),
            ..Default::default()
        };
        form.chiffre_affaires.insert(2023, "100000".to_string());
        form.chiffre_affaires.insert(2024, "300000".to_string());

        let ctx = context_from(&form);
        assert_eq!(ctx.get("annee_creation"), Some(&Number(2021.0)));
        assert_eq!(ctx.get("chiffre_affaire"), Some(&Number(300000.0)));
        assert_eq!(ctx.get("type_personne"), Some(&Text("morale".into())));
        // Blank answers stay out of the context.
        assert!(!ctx.contains_key("sexe"));
    }

    #[test]
    fn only_published_programs_match() {
        let mut form = EligibilitySubmission::default();
        form.region = "Oriental".to_string();
        let ctx = context_from(&form);

        let accept_all = Program {
            nom: "Amorçage".to_string(),
            published: true,
            ..Default::default()
        };
        let draft = Program {
            nom: "Brouillon".to_string(),
            published: false,
            ..Default::default()
        };
        let matched = matching_programs(vec![accept_all, draft], &ctx);
        let names: Vec<&str> = matched.iter().map(|p| p.nom.as_str()).collect();
        assert_eq!(names, vec!["Amorçage"]);
    }
}
