//! `Catalog` — The registered overload sets, grouped by action
//!
//! The catalog is built once at startup and read-only thereafter; selection
//! never mutates it. Lookups for unknown actions return an empty slice —
//! absence of candidates is a normal input to the selector, not a fault.
//!
//! [`SharedCatalog`] adds the late-registration capability: a copy-on-write
//! wrapper whose appends become visible to subsequent selections without
//! pausing in-flight ones.

use crate::{CandidateSignature, SelectorError, MAX_OVERLOADS_PER_ACTION};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// All registered overloads, grouped by action name, in registration order.
///
/// # Invariants
///
/// - Within one overload set, no two signatures share a parameter-name
///   multiset and arity ([`CatalogBuilder::build`] rejects duplicates).
/// - `candidates_for` and `actions` iterate in registration order, so
///   repeated runs see identical orderings.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    // Insertion-ordered groups plus a name index; HashMap iteration order
    // would leak into diagnostics output otherwise.
    groups: Vec<(String, Vec<CandidateSignature>)>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Start building a catalog.
    #[must_use]
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// An empty catalog (every lookup returns no candidates).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// All overloads registered under `action`, in registration order.
    ///
    /// Unknown names yield an empty slice, never an error.
    #[must_use]
    pub fn candidates_for(&self, action: &str) -> &[CandidateSignature] {
        self.index
            .get(action)
            .map_or(&[], |&i| self.groups[i].1.as_slice())
    }

    /// Action names in registration order.
    pub fn actions(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(name, _)| name.as_str())
    }

    /// Every registered signature, grouped by action, in registration order.
    pub fn signatures(&self) -> impl Iterator<Item = &CandidateSignature> {
        self.groups.iter().flat_map(|(_, sigs)| sigs.iter())
    }

    /// Number of distinct actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns `true` if no actions are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Builder for constructing a validated [`Catalog`].
///
/// Register signatures in any order, then call [`build()`](Self::build).
/// Validation of the cross-signature invariants (duplicate overloads,
/// overload-set width) happens once here, so the selection path never
/// re-validates.
///
/// # Example
///
/// ```
/// use finer::{Catalog, CandidateSignature, ParameterDescriptor, TypeTag};
///
/// let catalog = Catalog::builder()
///     .signature(CandidateSignature::new(
///         "echo",
///         vec![ParameterDescriptor::required("message", TypeTag::String)],
///     ).unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(catalog.candidates_for("echo").len(), 1);
/// assert!(catalog.candidates_for("unknown").is_empty());
/// ```
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    signatures: Vec<CandidateSignature>,
}

impl CatalogBuilder {
    /// Create a new empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one overload.
    #[must_use]
    pub fn signature(mut self, signature: CandidateSignature) -> Self {
        self.signatures.push(signature);
        self
    }

    /// Register several overloads.
    #[must_use]
    pub fn signatures(mut self, signatures: impl IntoIterator<Item = CandidateSignature>) -> Self {
        self.signatures.extend(signatures);
        self
    }

    /// Validate and produce the immutable catalog.
    ///
    /// # Errors
    ///
    /// - [`SelectorError::DuplicateSignature`] if two registered signatures
    ///   share an action, arity, and parameter-name multiset
    /// - [`SelectorError::TooManyOverloads`] if one action exceeds
    ///   [`MAX_OVERLOADS_PER_ACTION`]
    pub fn build(self) -> Result<Catalog, SelectorError> {
        let mut catalog = Catalog::default();

        for signature in self.signatures {
            let i = match catalog.index.get(signature.action()).copied() {
                Some(i) => i,
                None => {
                    let i = catalog.groups.len();
                    catalog.index.insert(signature.action().to_string(), i);
                    catalog
                        .groups
                        .push((signature.action().to_string(), Vec::new()));
                    i
                }
            };
            let group = &mut catalog.groups[i].1;

            if let Some(existing) = group.iter().find(|s| s.collides_with(&signature)) {
                return Err(SelectorError::DuplicateSignature {
                    action: signature.action().to_string(),
                    shape: existing.shape(),
                });
            }
            if group.len() == MAX_OVERLOADS_PER_ACTION {
                return Err(SelectorError::TooManyOverloads {
                    action: signature.action().to_string(),
                    count: group.len() + 1,
                    max: MAX_OVERLOADS_PER_ACTION,
                });
            }
            group.push(signature);
        }

        Ok(catalog)
    }
}

/// A copy-on-write catalog handle supporting late registration.
///
/// Steady-state selection takes a [`snapshot`](Self::snapshot) (an `Arc`
/// clone) and never contends with writers. [`append`](Self::append) rebuilds
/// the catalog from the current generation plus the new signatures —
/// re-running the full builder validation — and atomically swaps it in.
/// In-flight selections keep the snapshot they started with.
///
/// # Example
///
/// ```
/// use finer::{CandidateSignature, Catalog, SharedCatalog, TypeTag, ParameterDescriptor};
///
/// let shared = SharedCatalog::new(Catalog::empty());
/// assert!(shared.snapshot().candidates_for("late").is_empty());
///
/// shared.append([CandidateSignature::new(
///     "late",
///     vec![ParameterDescriptor::required("x", TypeTag::Int)],
/// ).unwrap()]).unwrap();
///
/// assert_eq!(shared.snapshot().candidates_for("late").len(), 1);
/// ```
#[derive(Debug)]
pub struct SharedCatalog {
    current: RwLock<Arc<Catalog>>,
}

impl SharedCatalog {
    /// Wrap an already-built catalog.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            current: RwLock::new(Arc::new(catalog)),
        }
    }

    /// The current catalog generation. Cheap (`Arc` clone); hold it for the
    /// duration of one selection pass.
    ///
    /// # Panics
    ///
    /// Panics if a previous writer panicked while holding the lock.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Catalog> {
        self.current.read().expect("catalog lock poisoned").clone()
    }

    /// Append overloads, validating the combined catalog before publishing.
    ///
    /// On error nothing is published; the previous generation stays current.
    ///
    /// # Errors
    ///
    /// Same errors as [`CatalogBuilder::build`], evaluated against the union
    /// of the existing and appended signatures.
    ///
    /// # Panics
    ///
    /// Panics if a previous writer panicked while holding the lock.
    pub fn append(
        &self,
        signatures: impl IntoIterator<Item = CandidateSignature>,
    ) -> Result<(), SelectorError> {
        let mut current = self.current.write().expect("catalog lock poisoned");
        let rebuilt = Catalog::builder()
            .signatures(current.signatures().cloned())
            .signatures(signatures)
            .build()?;
        *current = Arc::new(rebuilt);
        Ok(())
    }
}
