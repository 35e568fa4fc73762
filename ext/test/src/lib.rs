//! finer-test: Test domain for conformance testing
//!
//! Provides a string-driven [`ArgumentSource`] for building selection
//! scenarios from plain names, plus (behind `feature = "fixtures"`) a YAML
//! fixture runner. This is the reference harness the conformance suite is
//! written against.
//!
//! # Example
//!
//! ```
//! use finer_test::prelude::*;
//!
//! // ArgumentMap builds arguments from plain type names
//! let args = ArgumentMap::new()
//!     .with("a", "string")
//!     .with("b", "int")
//!     .untyped("c");
//!
//! assert_eq!(
//!     args.lookup("b").unwrap().value_type(),
//!     Some(&TypeTag::Int)
//! );
//! ```

use finer::prelude::*;

#[cfg(feature = "fixtures")]
pub mod fixture;

/// A string-driven argument builder for tests.
///
/// Wraps an [`ArgumentSet`], accepting type names instead of [`TypeTag`]
/// values so test scenarios and fixtures stay readable.
#[derive(Debug, Clone, Default)]
pub struct ArgumentMap {
    set: ArgumentSet,
}

impl ArgumentMap {
    /// Create an empty argument map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a present argument with the named type (builder pattern).
    ///
    /// Unrecognized type names become nominal tags, matching the config
    /// loader's behavior.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, type_name: &str) -> Self {
        self.set = self.set.with_typed(name, TypeTag::from(type_name));
        self
    }

    /// Add a present argument of unknown type (builder pattern).
    #[must_use]
    pub fn untyped(mut self, name: impl Into<String>) -> Self {
        self.set = self.set.with_untyped(name);
        self
    }

    /// Add a known name with no value (builder pattern).
    #[must_use]
    pub fn absent(mut self, name: impl Into<String>) -> Self {
        self.set = self.set.with_absent(name);
        self
    }

    /// The underlying argument set.
    #[must_use]
    pub fn into_set(self) -> ArgumentSet {
        self.set
    }
}

impl ArgumentSource for ArgumentMap {
    fn lookup(&self, name: &str) -> Option<&AvailableArgument> {
        self.set.lookup(name)
    }

    fn arguments(&self) -> &[AvailableArgument] {
        self.set.arguments()
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::ArgumentMap;
    pub use finer::prelude::*;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_argument_map_builder() {
        let args = ArgumentMap::new().with("a", "string").with("b", "customer_id");

        assert_eq!(args.lookup("a").unwrap().value_type(), Some(&TypeTag::String));
        assert_eq!(
            args.lookup("b").unwrap().value_type(),
            Some(&TypeTag::Named("customer_id".into()))
        );
        assert!(args.lookup("missing").is_none());
    }

    #[test]
    fn test_untyped_and_absent_entries() {
        let args = ArgumentMap::new().untyped("u").absent("x");

        assert!(args.lookup("u").unwrap().has_value());
        assert!(args.lookup("u").unwrap().value_type().is_none());
        assert!(!args.lookup("x").unwrap().has_value());
    }

    #[test]
    fn test_full_selection_round() {
        let catalog = Catalog::builder()
            .signature(
                CandidateSignature::new(
                    "echo",
                    vec![ParameterDescriptor::required("message", TypeTag::String)],
                )
                .unwrap(),
            )
            .build()
            .unwrap();
        let selector = Selector::new(Arc::new(catalog));

        let args = ArgumentMap::new().with("message", "string");
        assert_eq!(
            selector.select("echo", &args).selected().unwrap().shape(),
            "echo(message: string)"
        );
    }
}
