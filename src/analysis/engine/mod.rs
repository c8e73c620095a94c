//! Generic rule evaluator, score aggregator, and action recommender.
//!
//! The engine is type-parameterized over the snapshot: a domain module
//! supplies an ordered list of insight rules, a score model, and an ordered
//! list of action rules, all built once at startup. Every stage is a pure
//! function over the snapshot; the three stages never read each other's
//! output, so a single call can evaluate them in any order.

mod score;

pub use score::{Adjustment, ScoreComponent, ScoreModel};

use std::collections::HashSet;

use serde::Serialize;

/// Classification attached to a single observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    Success,
    Warning,
    Suggestion,
}

impl InsightKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Suggestion => "suggestion",
        }
    }
}

/// One classified observation about an entity snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insight {
    pub id: &'static str,
    pub kind: InsightKind,
    pub title: String,
    pub description: String,
}

/// A remediation the caller may offer. The engine only describes the action;
/// carrying it out is entirely the caller's business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestedAction {
    pub id: &'static str,
    pub title: String,
    pub description: String,
    pub confidence: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_label: Option<&'static str>,
}

/// Read-only output of one analysis call.
///
/// The score is reported even when `insights` is empty; the stages are
/// computed independently and need not agree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    pub insights: Vec<Insight>,
    pub score: u8,
    pub actions: Vec<SuggestedAction>,
}

type Produce<S> = Box<dyn Fn(&S) -> Option<(String, String)> + Send + Sync>;

/// Insight-producing predicate with a fixed id and kind.
///
/// The closure yields only the title and description, so a rule cannot emit
/// an insight under a foreign id or shift its kind between evaluations.
pub struct Rule<S> {
    id: &'static str,
    kind: InsightKind,
    produce: Produce<S>,
}

impl<S> Rule<S> {
    pub fn new(
        id: &'static str,
        kind: InsightKind,
        produce: impl Fn(&S) -> Option<(String, String)> + Send + Sync + 'static,
    ) -> Self {
        Self {
            id,
            kind,
            produce: Box::new(produce),
        }
    }

    pub const fn id(&self) -> &'static str {
        self.id
    }

    fn evaluate(&self, snapshot: &S) -> Option<Insight> {
        (self.produce)(snapshot).map(|(title, description)| Insight {
            id: self.id,
            kind: self.kind,
            title,
            description,
        })
    }
}

/// Ordered, immutable registry of insight rules for one entity kind.
pub struct RuleSet<S> {
    rules: Vec<Rule<S>>,
}

impl<S> RuleSet<S> {
    /// Panics when two rules declare the same id. Registration happens once
    /// at startup; a duplicate id is a defect, not a runtime condition.
    pub fn new(rules: Vec<Rule<S>>) -> Self {
        assert_unique_ids("insight rule", rules.iter().map(Rule::id));
        Self { rules }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Invokes every rule once, in registration order, collecting the
    /// insights that fire. Rules that stay silent contribute nothing.
    pub fn evaluate(&self, snapshot: &S) -> Vec<Insight> {
        self.rules
            .iter()
            .filter_map(|rule| rule.evaluate(snapshot))
            .collect()
    }
}

/// Action-producing predicate. Confidence and the optional UI label are
/// fixed per rule; only the descriptive text may vary with the snapshot.
pub struct ActionRule<S> {
    id: &'static str,
    confidence: u8,
    action_label: Option<&'static str>,
    produce: Produce<S>,
}

impl<S> ActionRule<S> {
    pub fn new(
        id: &'static str,
        confidence: u8,
        produce: impl Fn(&S) -> Option<(String, String)> + Send + Sync + 'static,
    ) -> Self {
        assert!(
            confidence <= 100,
            "action rule `{id}` declares confidence {confidence}, outside 0..=100"
        );
        Self {
            id,
            confidence,
            action_label: None,
            produce: Box::new(produce),
        }
    }

    pub fn with_label(mut self, label: &'static str) -> Self {
        self.action_label = Some(label);
        self
    }

    pub const fn id(&self) -> &'static str {
        self.id
    }

    fn evaluate(&self, snapshot: &S) -> Option<SuggestedAction> {
        (self.produce)(snapshot).map(|(title, description)| SuggestedAction {
            id: self.id,
            title,
            description,
            confidence: self.confidence,
            action_label: self.action_label,
        })
    }
}

/// Ordered, immutable registry of action rules for one entity kind.
///
/// Registration order is the priority order; the list is never re-sorted.
/// The engine enforces no mutual exclusivity between guards: overlapping
/// rules legitimately produce multiple suggestions, and keeping guards
/// disjoint is the rule author's responsibility.
pub struct ActionRuleSet<S> {
    rules: Vec<ActionRule<S>>,
}

impl<S> ActionRuleSet<S> {
    pub fn new(rules: Vec<ActionRule<S>>) -> Self {
        assert_unique_ids("action rule", rules.iter().map(ActionRule::id));
        Self { rules }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn evaluate(&self, snapshot: &S) -> Vec<SuggestedAction> {
        self.rules
            .iter()
            .filter_map(|rule| rule.evaluate(snapshot))
            .collect()
    }
}

/// Bundles the three stages for one entity kind.
///
/// Stateless after construction; arbitrarily many analyses may run against
/// one analyzer concurrently without coordination.
pub struct Analyzer<S> {
    insights: RuleSet<S>,
    score: ScoreModel<S>,
    actions: ActionRuleSet<S>,
}

impl<S> Analyzer<S> {
    pub fn new(insights: RuleSet<S>, score: ScoreModel<S>, actions: ActionRuleSet<S>) -> Self {
        Self {
            insights,
            score,
            actions,
        }
    }

    /// Evaluates all three stages against one snapshot.
    pub fn analyze(&self, snapshot: &S) -> AnalysisResult {
        AnalysisResult {
            insights: self.insights.evaluate(snapshot),
            score: self.score.score(snapshot),
            actions: self.actions.evaluate(snapshot),
        }
    }

    /// Per-adjustment score trail in declared order, for audits and tests.
    pub fn score_breakdown(&self, snapshot: &S) -> Vec<ScoreComponent> {
        self.score.breakdown(snapshot)
    }
}

pub(crate) fn assert_unique_ids(what: &str, ids: impl Iterator<Item = &'static str>) {
    let mut seen = HashSet::new();
    for id in ids {
        assert!(seen.insert(id), "duplicate {what} id `{id}`");
    }
}
