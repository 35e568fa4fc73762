//! `Selector` — Scores every candidate and classifies the outcome
//!
//! The selector is the entry point for a request: look up the action's
//! overload set, score each candidate against the available arguments, and
//! return exactly one winner or a structured failure. Each call is a single
//! synchronous pass; no state survives it.

use crate::{
    score_candidate, ArgumentSource, CandidateSignature, Catalog, MatchResult, MatchVerdict,
    Score,
};
use std::sync::Arc;

/// The result of one selection pass.
///
/// `NoMatch` and `Ambiguous` are informational outcomes, not faults of the
/// selector: the host decides how to surface them (typically a 404-class
/// response for `NoMatch` and a 5xx-class configuration report for
/// `Ambiguous`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// Exactly one candidate achieved the top score.
    Selected(CandidateSignature),

    /// No candidates were registered, or every candidate was disqualified.
    NoMatch,

    /// Two or more candidates share the identical top score, in registration
    /// order. The overload set is genuinely ambiguous for this request; the
    /// selector never guesses.
    Ambiguous(Vec<CandidateSignature>),
}

impl SelectionOutcome {
    /// The winning signature, if exactly one was selected.
    #[must_use]
    pub fn selected(&self) -> Option<&CandidateSignature> {
        match self {
            Self::Selected(signature) => Some(signature),
            _ => None,
        }
    }

    /// Returns `true` for the `Selected` variant.
    #[must_use]
    pub fn is_selected(&self) -> bool {
        matches!(self, Self::Selected(_))
    }

    /// Returns `true` for the `NoMatch` variant.
    #[must_use]
    pub fn is_no_match(&self) -> bool {
        matches!(self, Self::NoMatch)
    }

    /// Returns `true` for the `Ambiguous` variant.
    #[must_use]
    pub fn is_ambiguous(&self) -> bool {
        matches!(self, Self::Ambiguous(_))
    }
}

/// Best-overload selector over an immutable catalog snapshot.
///
/// Selection is a pure function of `(catalog, action, arguments)`: stateless,
/// lock-free, and safely callable from any number of threads. Holding the
/// catalog as an `Arc` makes per-request construction from a
/// [`SharedCatalog`](crate::SharedCatalog) snapshot a pointer copy.
///
/// # Full evaluation
///
/// Every candidate is scored — there is no short-circuit on first match —
/// because a later candidate can outrank an earlier one or tie with it and
/// force an ambiguity report.
#[derive(Debug, Clone)]
pub struct Selector {
    catalog: Arc<Catalog>,
}

impl Selector {
    /// Create a selector over a catalog snapshot.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// The catalog this selector reads.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Pick the best overload of `action` for the available arguments.
    ///
    /// Repeated calls with the same catalog and source return the identical
    /// outcome.
    pub fn select<S>(&self, action: &str, source: &S) -> SelectionOutcome
    where
        S: ArgumentSource + ?Sized,
    {
        let candidates = self.catalog.candidates_for(action);

        let mut qualified: Vec<(usize, Score)> = Vec::with_capacity(candidates.len());
        for (index, candidate) in candidates.iter().enumerate() {
            if let MatchVerdict::Qualified { score, .. } = score_candidate(candidate, source) {
                qualified.push((index, score));
            }
        }

        let Some(top) = qualified.iter().map(|(_, s)| *s).max() else {
            return SelectionOutcome::NoMatch;
        };

        let mut winners = qualified
            .into_iter()
            .filter(|(_, score)| *score == top)
            .map(|(index, _)| candidates[index].clone());

        // Exactly-one is the common case; avoid collecting until we know
        // there is a tie.
        let first = winners.next().expect("top score implies a winner");
        match winners.next() {
            None => SelectionOutcome::Selected(first),
            Some(second) => {
                let mut tied = vec![first, second];
                tied.extend(winners);
                SelectionOutcome::Ambiguous(tied)
            }
        }
    }

    /// Score every registered overload of `action` without classifying.
    ///
    /// Hosts use this for diagnostics surfaces where the full verdict list
    /// matters, not just the winner; [`select`](Self::select) is the
    /// request-path entry point.
    pub fn match_results<S>(&self, action: &str, source: &S) -> Vec<MatchResult>
    where
        S: ArgumentSource + ?Sized,
    {
        self.catalog
            .candidates_for(action)
            .iter()
            .map(|candidate| MatchResult {
                candidate: candidate.clone(),
                verdict: score_candidate(candidate, source),
            })
            .collect()
    }

    /// Like [`select`](Self::select), additionally capturing a per-candidate
    /// scoring record for diagnostics.
    ///
    /// The trace's `outcome` equals what `select` returns for the same
    /// inputs; prefer `select` on the hot path.
    pub fn select_with_trace<S>(&self, action: &str, source: &S) -> crate::SelectionTrace
    where
        S: ArgumentSource + ?Sized,
    {
        let candidates = self
            .catalog
            .candidates_for(action)
            .iter()
            .map(|candidate| crate::CandidateTrace::capture(candidate, source))
            .collect();

        crate::SelectionTrace {
            action: action.to_string(),
            outcome: self.select(action, source),
            candidates,
        }
    }
}
