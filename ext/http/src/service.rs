//! Component dispatch: serving plain objects as HTTP actions.
//!
//! A component is just a bundle of operations — no framework base type to
//! inherit from. Each operation pairs a [`CandidateSignature`] (what the
//! selector chooses among) with a [`Handler`] (how the host actually calls
//! it). The service owns both tables and translates selection outcomes into
//! responses or status-mapped errors.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};

use finer::{
    Catalog, CandidateSignature, SelectionOutcome, Selector, SelectorError, SharedCatalog,
};
use tracing::{debug, warn};

use crate::HttpRequest;

/// Invokes one operation of a component.
///
/// The handler receives the raw request and does its own binding: the
/// selector's job ends at choosing *which* overload to call. Handlers return
/// a JSON payload; status codes and serialization framing belong to the
/// server front-end.
pub trait Handler: Send + Sync {
    /// Bind arguments from the request and run the operation.
    fn invoke(&self, request: &HttpRequest) -> serde_json::Value;
}

impl<F> Handler for F
where
    F: Fn(&HttpRequest) -> serde_json::Value + Send + Sync,
{
    fn invoke(&self, request: &HttpRequest) -> serde_json::Value {
        self(request)
    }
}

/// Dispatch failures, each mapped to an HTTP status class.
///
/// `UnknownAction` and `NoOverload` are client-facing not-found conditions;
/// `Ambiguous` and `MissingHandler` are server-side configuration problems.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// No operations are registered under the requested action name.
    UnknownAction {
        /// The requested action.
        action: String,
    },
    /// Overloads exist, but none can be called with the request's values.
    NoOverload {
        /// The requested action.
        action: String,
    },
    /// Two or more overloads tie for best match — the overload set is
    /// genuinely ambiguous for this request.
    Ambiguous {
        /// The requested action.
        action: String,
        /// Shapes of the tied overloads, in registration order.
        candidates: Vec<String>,
    },
    /// A signature won selection but no handler is registered for it.
    MissingHandler {
        /// Shape of the winning signature.
        shape: String,
    },
}

impl ServiceError {
    /// The HTTP status code class this error maps to.
    #[must_use]
    pub fn status(&self) -> u16 {
        match self {
            Self::UnknownAction { .. } | Self::NoOverload { .. } => 404,
            Self::Ambiguous { .. } | Self::MissingHandler { .. } => 500,
        }
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownAction { action } => {
                write!(f, "no operations registered for action \"{action}\"")
            }
            Self::NoOverload { action } => {
                write!(
                    f,
                    "no overload of \"{action}\" accepts the supplied values"
                )
            }
            Self::Ambiguous { action, candidates } => {
                write!(
                    f,
                    "ambiguous overloads for \"{action}\": {}",
                    candidates.join(", ")
                )
            }
            Self::MissingHandler { shape } => {
                write!(f, "no handler registered for {shape}")
            }
        }
    }
}

impl std::error::Error for ServiceError {}

/// Serves registered component operations over HTTP-shaped requests.
///
/// Operations can be registered at startup and appended later — the catalog
/// is copy-on-write, so in-flight dispatches keep the generation they started
/// with while new requests see the appended operations.
///
/// # Example
///
/// ```
/// use finer::{CandidateSignature, ParameterDescriptor, TypeTag};
/// use finer_http::{ComponentService, HttpRequest};
///
/// let service = ComponentService::new();
/// service.operation(
///     CandidateSignature::new(
///         "echo",
///         vec![ParameterDescriptor::required("message", TypeTag::String)],
///     ).unwrap(),
///     |request: &HttpRequest| serde_json::json!(request.value("message")),
/// ).unwrap();
///
/// let request = HttpRequest::builder("GET", "/component/echo")
///     .query("message", "hi")
///     .build();
/// assert_eq!(service.dispatch(&request).unwrap(), serde_json::json!("hi"));
/// ```
pub struct ComponentService {
    catalog: SharedCatalog,
    handlers: RwLock<HashMap<String, Arc<dyn Handler>>>,
}

impl Default for ComponentService {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentService {
    /// Create a service with no registered operations.
    #[must_use]
    pub fn new() -> Self {
        Self {
            catalog: SharedCatalog::new(Catalog::empty()),
            handlers: RwLock::new(HashMap::new()),
        }
    }

    /// Register one operation: a signature for the selector and a handler
    /// for the invocation. Safe to call after the service is live; new
    /// requests see the operation immediately.
    ///
    /// # Errors
    ///
    /// Any catalog validation error, e.g.
    /// [`SelectorError::DuplicateSignature`] when the overload set already
    /// contains the signature's parameter shape. On error nothing is
    /// registered.
    ///
    /// # Panics
    ///
    /// Panics if the handler table lock is poisoned.
    pub fn operation(
        &self,
        signature: CandidateSignature,
        handler: impl Handler + 'static,
    ) -> Result<(), SelectorError> {
        let shape = signature.shape();
        self.catalog.append([signature])?;
        self.handlers
            .write()
            .expect("handler table lock poisoned")
            .insert(shape, Arc::new(handler));
        Ok(())
    }

    /// Route one request: select the best overload for its action and invoke
    /// the matching handler.
    ///
    /// # Errors
    ///
    /// See [`ServiceError`]; use [`ServiceError::status`] for the HTTP
    /// mapping.
    ///
    /// # Panics
    ///
    /// Panics if the handler table lock is poisoned.
    pub fn dispatch(&self, request: &HttpRequest) -> Result<serde_json::Value, ServiceError> {
        let action = request.action().to_string();
        let catalog = self.catalog.snapshot();

        if catalog.candidates_for(&action).is_empty() {
            debug!(%action, "unknown action");
            return Err(ServiceError::UnknownAction { action });
        }

        let arguments = request.to_arguments();
        let selector = Selector::new(catalog);

        match selector.select(&action, &arguments) {
            SelectionOutcome::Selected(signature) => {
                let shape = signature.shape();
                debug!(%action, %shape, "overload selected");

                let handler = self
                    .handlers
                    .read()
                    .expect("handler table lock poisoned")
                    .get(&shape)
                    .cloned();
                match handler {
                    Some(handler) => Ok(handler.invoke(request)),
                    None => {
                        warn!(%shape, "selected overload has no handler");
                        Err(ServiceError::MissingHandler { shape })
                    }
                }
            }
            SelectionOutcome::NoMatch => {
                debug!(%action, "no overload accepts the supplied values");
                Err(ServiceError::NoOverload { action })
            }
            SelectionOutcome::Ambiguous(tied) => {
                let candidates: Vec<String> =
                    tied.iter().map(CandidateSignature::shape).collect();
                warn!(%action, ?candidates, "ambiguous overload set");
                Err(ServiceError::Ambiguous { action, candidates })
            }
        }
    }
}

impl fmt::Debug for ComponentService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let handlers = self
            .handlers
            .read()
            .map(|h| h.len())
            .unwrap_or_default();
        f.debug_struct("ComponentService")
            .field("handlers", &handlers)
            .finish()
    }
}
