//! Free-text intent classification over an ordered keyword rule table.
//!
//! Rules are evaluated top to bottom against the trimmed, lower-cased input
//! and the first match wins. Every table ends in a rule that always matches,
//! so classification is total. Empty input never reaches the table and gets
//! its own reply.

mod rules;

use serde::Serialize;
use tracing::debug;

pub use rules::{EMPTY_INPUT_REPLY, FALLBACK_REPLY};

pub const FALLBACK_RULE_ID: &str = "fallback";

/// Predicate over normalized (trimmed, lower-cased) text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleTest {
    /// Case-insensitive substring containment of any keyword.
    ContainsAny(&'static [&'static str]),
    Always,
}

impl RuleTest {
    pub fn matches(&self, normalized: &str) -> bool {
        match self {
            Self::ContainsAny(keywords) => {
                keywords.iter().any(|keyword| normalized.contains(keyword.to_lowercase().as_str()))
            }
            Self::Always => true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClassificationRule {
    pub id: &'static str,
    pub test: RuleTest,
    pub reply: &'static str,
}

/// Declared-order rule list with a terminal always-matching fallback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleTable {
    rules: Vec<ClassificationRule>,
    fallback: ClassificationRule,
}

impl RuleTable {
    pub fn new(rules: Vec<ClassificationRule>, fallback_reply: &'static str) -> Self {
        Self {
            rules,
            fallback: ClassificationRule {
                id: FALLBACK_RULE_ID,
                test: RuleTest::Always,
                reply: fallback_reply,
            },
        }
    }

    pub fn builtin() -> Self {
        rules::builtin_table()
    }

    /// All rules in evaluation order, fallback last.
    pub fn iter(&self) -> impl Iterator<Item = &ClassificationRule> {
        self.rules.iter().chain(std::iter::once(&self.fallback))
    }

    pub fn len(&self) -> usize {
        self.rules.len() + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn fallback(&self) -> &ClassificationRule {
        &self.fallback
    }

    /// Lowest-index rule whose test matches, with its index.
    pub fn first_match(&self, normalized: &str) -> (usize, &ClassificationRule) {
        self.iter()
            .enumerate()
            .find(|(_, rule)| rule.test.matches(normalized))
            .unwrap_or((self.rules.len(), &self.fallback))
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchedRule {
    EmptyInput,
    Rule { index: usize, id: &'static str },
}

impl MatchedRule {
    pub fn rule_id(&self) -> Option<&'static str> {
        match self {
            Self::EmptyInput => None,
            Self::Rule { id, .. } => Some(*id),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.rule_id() == Some(FALLBACK_RULE_ID)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub reply: String,
    /// Citation slots; the classifier itself never fills them.
    pub sources: Vec<String>,
    #[serde(skip)]
    pub matched: MatchedRule,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntentClassifier {
    table: RuleTable,
    empty_input_reply: &'static str,
}

impl IntentClassifier {
    pub fn new(table: RuleTable) -> Self {
        Self { table, empty_input_reply: EMPTY_INPUT_REPLY }
    }

    pub fn builtin() -> Self {
        Self::new(RuleTable::builtin())
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    pub fn classify(&self, raw_text: &str) -> Classification {
        let normalized = normalize(raw_text);
        if normalized.is_empty() {
            return Classification {
                reply: self.empty_input_reply.to_string(),
                sources: Vec::new(),
                matched: MatchedRule::EmptyInput,
            };
        }

        let (index, rule) = self.table.first_match(&normalized);
        debug!(
            event_name = "core.classify.rule_matched",
            rule_id = rule.id,
            rule_index = index,
            "classification rule matched"
        );

        Classification {
            reply: rule.reply.to_string(),
            sources: Vec::new(),
            matched: MatchedRule::Rule { index, id: rule.id },
        }
    }
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Trims whitespace and byte-order marks, then lower-cases.
pub fn normalize(raw_text: &str) -> String {
    raw_text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}').to_lowercase()
}
