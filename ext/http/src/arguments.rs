//! Request argument compilation: textual values to a typed argument snapshot.
//!
//! HTTP carries text; the selector scores types. The bridge is inference:
//! each request value gets the narrowest tag its text parses as, so an
//! overload declared `(a: string, b: int)` is distinguishable from
//! `(a: string, b: string)` by the shape of the actual request.

use finer::{ArgumentSet, TypeTag};

use crate::HttpRequest;

/// Infer the narrowest [`TypeTag`] a textual value satisfies.
///
/// `i64` text is `Int`, other `f64` text is `Float`, `true`/`false` is
/// `Bool`, everything else (including empty text) is `String`.
///
/// # Example
///
/// ```
/// use finer::TypeTag;
/// use finer_http::infer_type;
///
/// assert_eq!(infer_type("5"), TypeTag::Int);
/// assert_eq!(infer_type("2.5"), TypeTag::Float);
/// assert_eq!(infer_type("true"), TypeTag::Bool);
/// assert_eq!(infer_type("x"), TypeTag::String);
/// ```
#[must_use]
pub fn infer_type(value: &str) -> TypeTag {
    if value.parse::<i64>().is_ok() {
        TypeTag::Int
    } else if value.parse::<f64>().is_ok() {
        TypeTag::Float
    } else if value == "true" || value == "false" {
        TypeTag::Bool
    } else {
        TypeTag::String
    }
}

impl HttpRequest {
    /// Compile this request's values into the selector's argument snapshot.
    ///
    /// Sources contribute in precedence order — route values, then query,
    /// then form — and [`ArgumentSet`] lookup takes the first entry per
    /// name, so a route value shadows a query value of the same name.
    #[must_use]
    pub fn to_arguments(&self) -> ArgumentSet {
        self.route_values()
            .iter()
            .chain(self.query())
            .chain(self.form())
            .map(|(name, value)| {
                finer::AvailableArgument::typed(name.clone(), infer_type(value))
            })
            .collect()
    }
}
