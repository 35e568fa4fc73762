//! finer-http: serving plain components as HTTP actions
//!
//! This crate provides two layers:
//!
//! 1. **Argument compilation**: request values → typed argument snapshot
//! 2. **Dispatch**: selection outcome → handler invocation or status-mapped
//!    error
//!
//! # Architecture
//!
//! ```text
//! HttpRequest (route values + query + form)
//!         ↓ to_arguments()           value-type inference
//! finer ArgumentSet
//!         ↓ Selector::select()
//! SelectionOutcome
//!         ↓ ComponentService::dispatch()
//! handler invocation | 404 | 500
//! ```
//!
//! # Example
//!
//! ```
//! use finer::{CandidateSignature, ParameterDescriptor, TypeTag};
//! use finer_http::prelude::*;
//!
//! let service = ComponentService::new();
//! service.operation(
//!     CandidateSignature::new(
//!         "add",
//!         vec![
//!             ParameterDescriptor::required("x", TypeTag::Int),
//!             ParameterDescriptor::required("y", TypeTag::Int),
//!         ],
//!     ).unwrap(),
//!     |request: &HttpRequest| {
//!         let x: i64 = request.value("x").unwrap().parse().unwrap();
//!         let y: i64 = request.value("y").unwrap().parse().unwrap();
//!         serde_json::json!(x + y)
//!     },
//! ).unwrap();
//!
//! let request = HttpRequest::builder("GET", "/calc/add")
//!     .query("x", "2")
//!     .query("y", "3")
//!     .build();
//! assert_eq!(service.dispatch(&request).unwrap(), serde_json::json!(5));
//! ```

mod arguments;
mod request;
mod service;

pub use arguments::infer_type;
pub use request::{HttpRequest, HttpRequestBuilder};
pub use service::{ComponentService, Handler, ServiceError};

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::{
        infer_type, ComponentService, Handler, HttpRequest, HttpRequestBuilder, ServiceError,
    };
    pub use finer::prelude::*;
}
