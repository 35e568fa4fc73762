//! Overload scoring — match quality of one candidate against one request
//!
//! Scoring answers two questions per candidate: *can* this overload be
//! called with the available arguments at all (coverage), and *how well* do
//! the argument types fit the declared parameter types (tiers). The result
//! is either a disqualification with a named reason, or a composite
//! [`Score`] whose ordering encodes the whole tie-break policy.
//!
//! The ordering is lexicographic — a higher-priority factor completely
//! dominates lower ones:
//!
//! 1. more exact type matches
//! 2. more assignable (widened) matches
//! 3. fewer unknown-type matches
//! 4. non-variadic before variadic (the catch-all is the resolution of last
//!    resort)
//! 5. fewer total parameters (the most specific signature wins)

use crate::{ArgumentSource, CandidateSignature, TypeTag};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

/// How well one supplied argument fits one declared parameter.
///
/// Ordered from best to worst; `Incompatible` disqualifies the whole
/// candidate rather than merely scoring low.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compatibility {
    /// Declared and supplied types are identical.
    Exact,
    /// Supplied type widens into the declared type (`Int` → `Float`,
    /// anything → `Object`).
    Assignable,
    /// The supplied value's type is not statically known — a weak pass.
    Unknown,
    /// The supplied type cannot bind to the declared type.
    Incompatible,
}

impl Compatibility {
    /// Classify `supplied` against a parameter declared as `declared`.
    #[must_use]
    pub fn classify(declared: &TypeTag, supplied: Option<&TypeTag>) -> Self {
        match supplied {
            None => Self::Unknown,
            Some(s) if s == declared => Self::Exact,
            Some(s) if declared.widens_from(s) => Self::Assignable,
            Some(_) => Self::Incompatible,
        }
    }
}

impl fmt::Display for Compatibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Exact => "exact",
            Self::Assignable => "assignable",
            Self::Unknown => "unknown",
            Self::Incompatible => "incompatible",
        })
    }
}

/// Composite match quality of one qualified candidate.
///
/// Compared lexicographically per the module-level ordering; **greater is
/// better**. Two equal scores on distinct candidates mean the overload set
/// is genuinely ambiguous for this request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    /// Number of parameters matched at [`Compatibility::Exact`].
    pub exact: u32,
    /// Number of parameters matched at [`Compatibility::Assignable`].
    pub assignable: u32,
    /// Number of parameters matched at [`Compatibility::Unknown`].
    pub unknown: u32,
    /// Whether the candidate carries a trailing catch-all parameter.
    pub variadic: bool,
    /// Total declared parameter count, trailing variadic included.
    pub arity: u32,
}

impl Ord for Score {
    fn cmp(&self, other: &Self) -> Ordering {
        self.exact
            .cmp(&other.exact)
            .then_with(|| self.assignable.cmp(&other.assignable))
            // fewer unknown matches wins
            .then_with(|| other.unknown.cmp(&self.unknown))
            // non-variadic outranks variadic at equal coverage
            .then_with(|| other.variadic.cmp(&self.variadic))
            // fewer total parameters wins
            .then_with(|| other.arity.cmp(&self.arity))
    }
}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Why a candidate was disqualified outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisqualifyReason {
    /// A required parameter has no available argument with a value.
    MissingArgument {
        /// The unsatisfied parameter.
        parameter: String,
    },
    /// A supplied argument's type cannot bind to its parameter.
    IncompatibleType {
        /// The mismatched parameter.
        parameter: String,
        /// The parameter's declared type.
        declared: TypeTag,
        /// The argument's supplied type.
        supplied: TypeTag,
    },
}

impl fmt::Display for DisqualifyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingArgument { parameter } => {
                write!(f, "no value available for required parameter \"{parameter}\"")
            }
            Self::IncompatibleType {
                parameter,
                declared,
                supplied,
            } => {
                write!(
                    f,
                    "parameter \"{parameter}\" declared as {declared} cannot \
                     bind a {supplied} value"
                )
            }
        }
    }
}

/// The verdict of scoring one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchVerdict {
    /// The candidate can be called; `score` orders it against its rivals.
    Qualified {
        /// Composite match quality.
        score: Score,
        /// Names of the parameters that bound an argument.
        matched: BTreeSet<String>,
    },
    /// The candidate cannot be called with these arguments.
    Disqualified {
        /// The first rule violation encountered, for diagnostics.
        reason: DisqualifyReason,
    },
}

impl MatchVerdict {
    /// The score, if the candidate qualified.
    #[must_use]
    pub fn score(&self) -> Option<Score> {
        match self {
            Self::Qualified { score, .. } => Some(*score),
            Self::Disqualified { .. } => None,
        }
    }

    /// Returns `true` if the candidate qualified.
    #[must_use]
    pub fn is_qualified(&self) -> bool {
        matches!(self, Self::Qualified { .. })
    }
}

/// One scored candidate, as surfaced in traces and diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// The candidate that was scored.
    pub candidate: CandidateSignature,
    /// Its verdict against the request's arguments.
    pub verdict: MatchVerdict,
}

/// Score one candidate against the available arguments.
///
/// The pass walks the candidate's fixed parameters (a trailing variadic
/// absorbs anything and is excluded from coverage and typing):
///
/// - required parameter without a valued argument ⇒ disqualified
/// - supplied argument with an incompatible type ⇒ disqualified
/// - optional parameter without an argument ⇒ skipped (no score, no penalty)
/// - otherwise the parameter contributes its [`Compatibility`] tier
///
/// Available arguments that no parameter names are ignored: requests
/// routinely carry values the signature does not bind.
pub fn score_candidate<S>(candidate: &CandidateSignature, source: &S) -> MatchVerdict
where
    S: ArgumentSource + ?Sized,
{
    let mut score = Score {
        exact: 0,
        assignable: 0,
        unknown: 0,
        variadic: candidate.is_variadic(),
        arity: candidate.arity() as u32,
    };
    let mut matched = BTreeSet::new();

    for parameter in candidate.fixed_parameters() {
        let argument = source.lookup(parameter.name()).filter(|a| a.has_value());

        let Some(argument) = argument else {
            if parameter.is_optional() {
                continue;
            }
            return MatchVerdict::Disqualified {
                reason: DisqualifyReason::MissingArgument {
                    parameter: parameter.name().to_string(),
                },
            };
        };

        match Compatibility::classify(parameter.declared_type(), argument.value_type()) {
            Compatibility::Exact => score.exact += 1,
            Compatibility::Assignable => score.assignable += 1,
            Compatibility::Unknown => score.unknown += 1,
            Compatibility::Incompatible => {
                // Incompatible implies the supplied type was known.
                let supplied = argument.value_type().cloned().unwrap_or(TypeTag::Object);
                return MatchVerdict::Disqualified {
                    reason: DisqualifyReason::IncompatibleType {
                        parameter: parameter.name().to_string(),
                        declared: parameter.declared_type().clone(),
                        supplied,
                    },
                };
            }
        }
        matched.insert(parameter.name().to_string());
    }

    MatchVerdict::Qualified { score, matched }
}
