use serde::{Deserialize, Serialize};

use crate::model::rule::RuleGroup;

/// A grant program with its rule-based eligibility criteria.
///
/// `criteres` is authored by the rule builder and persisted verbatim;
/// the evaluation engine is its only other reader.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Program {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub nom: String,
    pub description: String,
    /// Granting body.
    pub organisme: String,
    /// External information page.
    pub lien: String,
    pub criteres: RuleGroup,
    /// Unpublished programs never participate in evaluation.
    pub published: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero: Option<ProgramHero>,
}

/// Homepage marketing copy for a featured program, in both site
/// languages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgramHero {
    pub titre_fr: String,
    pub titre_ar: String,
    pub accroche_fr: String,
    pub accroche_ar: String,
    pub featured: bool,
}
