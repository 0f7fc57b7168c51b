use std::collections::HashMap;

use common::model::program::Program;
use common::model::rule::{Rule, RuleNode};

pub struct RuleBuilder {
    /// Working copy, emitted on save.
    pub program: Program,
    /// Search-filter text per rule position (multi- and single-select
    /// editors).
    pub filters: HashMap<usize, String>,
}

impl RuleBuilder {
    pub fn new(program: Program) -> Self {
        Self {
            program,
            filters: HashMap::new(),
        }
    }

    pub fn filter(&self, index: usize) -> &str {
        self.filters.get(&index).map(String::as_str).unwrap_or("")
    }

    /// The editable leaf at `index`; nested groups are displayed but
    /// not edited here.
    pub fn rule_at(&mut self, index: usize) -> Option<&mut Rule> {
        match self.program.criteres.rules.get_mut(index) {
            Some(RuleNode::Rule(rule)) => Some(rule),
            _ => None,
        }
    }
}
