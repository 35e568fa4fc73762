//! finer — finer-grained action selection for overloaded dispatch targets
//!
//! An engine that picks the single best-matching overload for a named action,
//! given the set of argument values a caller can supply.
//!
//! # Architecture
//!
//! The selection pipeline is a chain of small, immutable pieces:
//!
//! - [`TypeTag`] — The type vocabulary shared by declared parameters and
//!   supplied values (primitives + an `Object` top type + nominal tags)
//! - [`AvailableArgument`] / [`ArgumentSource`] — The per-request snapshot of
//!   named values a caller can supply, independent of where they came from
//! - [`CandidateSignature`] — One overload: an action name plus an ordered
//!   parameter list
//! - [`Catalog`] — All registered overloads, grouped by action, in
//!   registration order
//! - [`Score`] — Composite, lexicographically ordered match quality
//! - [`Selector`] — Scores every candidate and classifies the result into a
//!   [`SelectionOutcome`]
//!
//! # Key Design Insights
//!
//! 1. **Every candidate is scored**: there is no first-match-wins shortcut.
//!    A later overload can outrank an earlier one, or tie with it and force
//!    an ambiguity report.
//!
//! 2. **Ambiguity is an outcome, not a guess**: when two overloads share the
//!    identical top score, the selector returns all of them. Silently picking
//!    one would turn a configuration problem into a wrong dispatch.
//!
//! 3. **Validation happens at registration**: duplicate signatures and
//!    malformed parameter lists are rejected when the [`Catalog`] is built,
//!    so the per-request path never re-validates.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use finer::prelude::*;
//!
//! let catalog = Catalog::builder()
//!     .signature(CandidateSignature::new(
//!         "greet",
//!         vec![ParameterDescriptor::required("name", TypeTag::String)],
//!     ).unwrap())
//!     .signature(CandidateSignature::new(
//!         "greet",
//!         vec![
//!             ParameterDescriptor::required("name", TypeTag::String),
//!             ParameterDescriptor::required("times", TypeTag::Int),
//!         ],
//!     ).unwrap())
//!     .build()
//!     .unwrap();
//!
//! let selector = Selector::new(Arc::new(catalog));
//!
//! let args = ArgumentSet::new()
//!     .with_typed("name", TypeTag::String)
//!     .with_typed("times", TypeTag::Int);
//!
//! match selector.select("greet", &args) {
//!     SelectionOutcome::Selected(sig) => assert_eq!(sig.arity(), 2),
//!     other => panic!("expected a selection, got {other:?}"),
//! }
//! ```
//!
//! # Extensions
//!
//! Domain-specific functionality lives in separate crates:
//!
//! - [`finer-http`](https://docs.rs/finer-http) — HTTP request adaptation and
//!   component dispatch (separate crate)
//! - [`finer-test`](https://docs.rs/finer-test) — Test argument sources and
//!   conformance fixtures (internal)

// ═══════════════════════════════════════════════════════════════════════════════
// Modules
// ═══════════════════════════════════════════════════════════════════════════════

mod argument;
mod catalog;
mod score;
mod selector;
mod signature;
mod trace;
mod type_tag;

#[cfg(feature = "config")]
mod config;

// ═══════════════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════════════

// Core types
pub use argument::{ArgumentSet, ArgumentSource, AvailableArgument};
pub use catalog::{Catalog, CatalogBuilder, SharedCatalog};
pub use score::{
    score_candidate, Compatibility, DisqualifyReason, MatchResult, MatchVerdict, Score,
};
pub use selector::{SelectionOutcome, Selector};
pub use signature::{CandidateSignature, ParameterDescriptor};
pub use type_tag::TypeTag;

// Config (feature-gated)
#[cfg(feature = "config")]
pub use config::{ActionConfig, CatalogConfig, OverloadConfig, ParameterConfig};

// Trace types
pub use trace::{CandidateTrace, ParameterTrace, SelectionTrace};

// ═══════════════════════════════════════════════════════════════════════════════
// Prelude
// ═══════════════════════════════════════════════════════════════════════════════

/// Prelude module for convenient imports.
///
/// ```
/// use finer::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        ArgumentSet,
        ArgumentSource,
        AvailableArgument,
        CandidateSignature,
        // Trace types
        CandidateTrace,
        Catalog,
        CatalogBuilder,
        Compatibility,
        DisqualifyReason,
        MatchResult,
        MatchVerdict,
        ParameterDescriptor,
        ParameterTrace,
        Score,
        SelectionOutcome,
        SelectionTrace,
        Selector,
        // Errors
        SelectorError,
        SharedCatalog,
        TypeTag,
    };
}

// ═══════════════════════════════════════════════════════════════════════════════
// Constants
// ═══════════════════════════════════════════════════════════════════════════════

/// Maximum number of overloads a single action may register.
///
/// Selection evaluates every candidate, so an unbounded overload set makes
/// the per-request cost unbounded too. Validated when the [`Catalog`] is
/// built.
pub const MAX_OVERLOADS_PER_ACTION: usize = 64;

/// Maximum number of parameters a single signature may declare.
///
/// Validated by [`CandidateSignature::new`]; keeps signature shapes (and the
/// per-candidate scoring pass) bounded.
pub const MAX_PARAMETERS_PER_SIGNATURE: usize = 32;

// ═══════════════════════════════════════════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════════════════════════════════════════

/// Errors from catalog construction and config loading.
///
/// These errors are caught at registration/config time, not selection time.
/// Fix the overload set and rebuild the catalog; the per-request selection
/// path assumes a validated catalog and never re-checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// An overload set already contains a signature with the same parameter
    /// names and arity.
    DuplicateSignature {
        /// The action whose overload set is invalid.
        action: String,
        /// Rendered shape of the conflicting signature.
        shape: String,
    },
    /// A signature declares the same parameter name twice.
    DuplicateParameterName {
        /// The action the signature belongs to.
        action: String,
        /// The repeated parameter name.
        parameter: String,
    },
    /// A variadic parameter appears anywhere but the last position.
    VariadicNotLast {
        /// The action the signature belongs to.
        action: String,
        /// The misplaced variadic parameter.
        parameter: String,
    },
    /// Too many overloads registered for one action.
    TooManyOverloads {
        /// The action whose overload set is too wide.
        action: String,
        /// Actual overload count.
        count: usize,
        /// Maximum allowed.
        max: usize,
    },
    /// A signature declares too many parameters.
    TooManyParameters {
        /// The action the signature belongs to.
        action: String,
        /// Actual parameter count.
        count: usize,
        /// Maximum allowed.
        max: usize,
    },
    /// Configuration deserialization or construction failed.
    InvalidConfig {
        /// The underlying error message.
        source: String,
    },
}

impl std::fmt::Display for SelectorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateSignature { action, shape } => {
                write!(
                    f,
                    "overload set for \"{action}\" already contains a signature \
                     with the parameters of {shape}"
                )
            }
            Self::DuplicateParameterName { action, parameter } => {
                write!(
                    f,
                    "signature for \"{action}\" declares parameter \"{parameter}\" twice"
                )
            }
            Self::VariadicNotLast { action, parameter } => {
                write!(
                    f,
                    "variadic parameter \"{parameter}\" of \"{action}\" must be \
                     the last parameter"
                )
            }
            Self::TooManyOverloads { action, count, max } => {
                write!(
                    f,
                    "action \"{action}\" has {count} overloads, but maximum allowed is {max}"
                )
            }
            Self::TooManyParameters { action, count, max } => {
                write!(
                    f,
                    "signature for \"{action}\" has {count} parameters, but \
                     maximum allowed is {max}"
                )
            }
            Self::InvalidConfig { source } => {
                write!(f, "invalid config: {source}")
            }
        }
    }
}

impl std::error::Error for SelectorError {}
