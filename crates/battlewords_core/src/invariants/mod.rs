//! First-class invariants for puzzles and game sessions.
//!
//! Invariants are logical properties that must hold for every value the crate
//! hands out. They are testable independently and composable into sets.

mod puzzle;
mod session;

pub use puzzle::{
    ConsistentLettersInvariant, DisjointCellsInvariant, DistinctTextsInvariant,
    GridSizeInvariant, InBoundsInvariant, RadarInvariant, WordCountsInvariant,
};
pub use session::{GuessedRevealedInvariant, PhaseInvariant, ScoreLedgerInvariant};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of up to six invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1);
impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);
impl_invariant_set!(I1, I2, I3, I4, I5);
impl_invariant_set!(I1, I2, I3, I4, I5, I6);

/// Invariants every puzzle satisfies regardless of overlap policy.
pub type PuzzleInvariants = (
    GridSizeInvariant,
    WordCountsInvariant,
    InBoundsInvariant,
    DistinctTextsInvariant,
    RadarInvariant,
    ConsistentLettersInvariant,
);

/// Invariants every game session satisfies between operations.
pub type SessionInvariants = (
    GuessedRevealedInvariant,
    ScoreLedgerInvariant,
    PhaseInvariant,
);
