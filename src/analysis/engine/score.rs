use serde::Serialize;

type Delta<S> = Box<dyn Fn(&S) -> i16 + Send + Sync>;

/// One signed contribution to the composite score, gated on a snapshot
/// condition inside the closure.
pub struct Adjustment<S> {
    id: &'static str,
    delta: Delta<S>,
}

impl<S> Adjustment<S> {
    pub fn new(id: &'static str, delta: impl Fn(&S) -> i16 + Send + Sync + 'static) -> Self {
        Self {
            id,
            delta: Box::new(delta),
        }
    }

    pub const fn id(&self) -> &'static str {
        self.id
    }
}

/// Audit trail entry: what an adjustment contributed to one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreComponent {
    pub id: &'static str,
    pub delta: i16,
}

/// Domain baseline plus an ordered list of signed integer adjustments,
/// clamped to `0..=100`.
///
/// All arithmetic is integral; the clamp is the only nonlinearity. Addition
/// commutes, so the declared order never changes the number; it fixes the
/// order of the audit breakdown.
pub struct ScoreModel<S> {
    baseline: i16,
    adjustments: Vec<Adjustment<S>>,
}

impl<S> ScoreModel<S> {
    /// Panics when two adjustments declare the same id, matching the
    /// registration-time validation of the rule sets.
    pub fn new(baseline: i16, adjustments: Vec<Adjustment<S>>) -> Self {
        super::assert_unique_ids("score adjustment", adjustments.iter().map(Adjustment::id));
        Self {
            baseline,
            adjustments,
        }
    }

    pub const fn baseline(&self) -> i16 {
        self.baseline
    }

    /// Recomputes the score from scratch: baseline, every delta in declared
    /// order, then `max(0, min(100, raw))`.
    pub fn score(&self, snapshot: &S) -> u8 {
        let raw = self
            .adjustments
            .iter()
            .fold(self.baseline, |total, adjustment| {
                total + (adjustment.delta)(snapshot)
            });
        raw.clamp(0, 100) as u8
    }

    /// Per-adjustment trail in declared order, including zero deltas.
    pub fn breakdown(&self, snapshot: &S) -> Vec<ScoreComponent> {
        self.adjustments
            .iter()
            .map(|adjustment| ScoreComponent {
                id: adjustment.id,
                delta: (adjustment.delta)(snapshot),
            })
            .collect()
    }
}
