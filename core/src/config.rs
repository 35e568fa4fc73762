//! Config types for declarative catalog construction.
//!
//! These types mirror the runtime catalog types but are serde-deserializable,
//! so overload sets can be declared in JSON/YAML and loaded at startup.
//!
//! # Relationship to runtime types
//!
//! | Config type | Runtime type | Loader method |
//! |-------------|-------------|---------------|
//! | [`CatalogConfig`] | [`Catalog`](crate::Catalog) | `CatalogConfig::build()` |
//! | [`OverloadConfig`] | [`CandidateSignature`](crate::CandidateSignature) | via `build()` |
//! | [`ParameterConfig`] | [`ParameterDescriptor`](crate::ParameterDescriptor) | via `build()` |
//!
//! All catalog invariants (duplicate overloads, duplicate parameter names,
//! variadic placement, width limits) are enforced by `build()`, so a config
//! that loads is a catalog that is valid.

use crate::{
    Catalog, CandidateSignature, ParameterDescriptor, SelectorError, TypeTag,
};
use serde::Deserialize;

/// Configuration for a whole [`Catalog`].
///
/// ```yaml
/// actions:
///   - name: get_parameters
///     overloads:
///       - parameters:
///           - { name: a, type: string }
///           - { name: b, type: int }
///       - parameters:
///           - { name: args, type: object, variadic: true }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// The registered actions, in registration order.
    pub actions: Vec<ActionConfig>,
}

/// One action and its overload set.
#[derive(Debug, Clone, Deserialize)]
pub struct ActionConfig {
    /// The action name. Case-sensitive.
    pub name: String,

    /// The overloads, in registration order.
    pub overloads: Vec<OverloadConfig>,
}

/// One overload's parameter list.
#[derive(Debug, Clone, Deserialize)]
pub struct OverloadConfig {
    /// The formal parameters, in declaration order. Empty for a nullary
    /// overload.
    #[serde(default)]
    pub parameters: Vec<ParameterConfig>,
}

/// One formal parameter.
#[derive(Debug, Clone, Deserialize)]
pub struct ParameterConfig {
    /// The parameter name.
    pub name: String,

    /// The declared type. Unrecognized names become nominal
    /// [`TypeTag::Named`] tags. Defaults to `object`.
    #[serde(rename = "type", default = "default_type")]
    pub declared_type: TypeTag,

    /// Whether the parameter may be left unbound.
    #[serde(default)]
    pub optional: bool,

    /// Whether this is the trailing catch-all parameter.
    #[serde(default)]
    pub variadic: bool,
}

fn default_type() -> TypeTag {
    TypeTag::Object
}

impl CatalogConfig {
    /// Parse a config from a JSON string.
    ///
    /// YAML callers deserialize [`CatalogConfig`] with their own parser; the
    /// types are format-agnostic.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::InvalidConfig`] when the JSON does not match
    /// the config shape.
    pub fn from_json(json: &str) -> Result<Self, SelectorError> {
        serde_json::from_str(json).map_err(|e| SelectorError::InvalidConfig {
            source: e.to_string(),
        })
    }

    /// Build the validated runtime [`Catalog`].
    ///
    /// # Errors
    ///
    /// Any [`CandidateSignature::new`] or
    /// [`CatalogBuilder::build`](crate::CatalogBuilder::build) error for the
    /// declared overload sets.
    pub fn build(&self) -> Result<Catalog, SelectorError> {
        let mut builder = Catalog::builder();
        for action in &self.actions {
            for overload in &action.overloads {
                builder = builder.signature(overload.build(&action.name)?);
            }
        }
        builder.build()
    }
}

impl OverloadConfig {
    fn build(&self, action: &str) -> Result<CandidateSignature, SelectorError> {
        let parameters = self.parameters.iter().map(ParameterConfig::build).collect();
        CandidateSignature::new(action, parameters)
    }
}

impl ParameterConfig {
    fn build(&self) -> ParameterDescriptor {
        if self.variadic {
            ParameterDescriptor::variadic(&self.name, self.declared_type.clone())
        } else if self.optional {
            ParameterDescriptor::optional(&self.name, self.declared_type.clone())
        } else {
            ParameterDescriptor::required(&self.name, self.declared_type.clone())
        }
    }
}
