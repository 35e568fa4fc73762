//! Selection trace types for debugging overload resolution.
//!
//! Trace types mirror the runtime scoring pass but capture per-candidate and
//! per-parameter results instead of just the winner. Use
//! [`Selector::select_with_trace`](crate::Selector::select_with_trace) to see
//! why a given overload won, lost, or tied.
//!
//! # Invariant
//!
//! A trace's `outcome` always equals the plain
//! [`select()`](crate::Selector::select) result for the same inputs.

use crate::{
    score_candidate, ArgumentSource, CandidateSignature, Compatibility, MatchVerdict,
    SelectionOutcome,
};

/// How one declared parameter fared against the available arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterTrace {
    /// The parameter's name.
    pub parameter: String,
    /// Display form of the declared type.
    pub declared: String,
    /// Display form of what the caller supplied: a type name, `"untyped"`,
    /// or `"absent"`.
    pub supplied: String,
    /// The compatibility tier, or `None` when nothing was there to classify
    /// (absent argument).
    pub tier: Option<Compatibility>,
}

/// One candidate's full scoring record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateTrace {
    /// Rendered signature shape, e.g. `get_parameters(a: string, b: int)`.
    pub shape: String,
    /// The candidate's verdict (score or disqualification reason).
    pub verdict: MatchVerdict,
    /// Per-parameter detail, in declaration order (trailing variadic
    /// excluded — it absorbs anything and is never classified).
    pub parameters: Vec<ParameterTrace>,
}

impl CandidateTrace {
    /// Score one candidate and capture the per-parameter detail.
    #[must_use]
    pub fn capture<S>(candidate: &CandidateSignature, source: &S) -> Self
    where
        S: ArgumentSource + ?Sized,
    {
        let parameters = candidate
            .fixed_parameters()
            .iter()
            .map(|parameter| {
                let argument = source.lookup(parameter.name()).filter(|a| a.has_value());
                let (supplied, tier) = match argument {
                    None => ("absent".to_string(), None),
                    Some(argument) => {
                        let tier = Compatibility::classify(
                            parameter.declared_type(),
                            argument.value_type(),
                        );
                        let supplied = argument
                            .value_type()
                            .map_or_else(|| "untyped".to_string(), ToString::to_string);
                        (supplied, Some(tier))
                    }
                };
                ParameterTrace {
                    parameter: parameter.name().to_string(),
                    declared: parameter.declared_type().to_string(),
                    supplied,
                    tier,
                }
            })
            .collect();

        Self {
            shape: candidate.shape(),
            verdict: score_candidate(candidate, source),
            parameters,
        }
    }

    /// Returns `true` if the candidate qualified.
    #[must_use]
    pub fn is_qualified(&self) -> bool {
        self.verdict.is_qualified()
    }
}

/// Trace of a full selection pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionTrace {
    /// The action that was selected against.
    pub action: String,
    /// The classified outcome — identical to what `select()` returns.
    pub outcome: SelectionOutcome,
    /// One record per registered candidate, in registration order.
    pub candidates: Vec<CandidateTrace>,
}
