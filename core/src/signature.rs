//! `CandidateSignature` — One overload of a dispatchable action
//!
//! A signature is an action name plus an ordered parameter list. Multiple
//! signatures sharing an action name form that action's overload set.
//! Signatures are immutable once constructed and structurally validated up
//! front, so the per-request scoring path can trust them.

use crate::{SelectorError, TypeTag, MAX_PARAMETERS_PER_SIGNATURE};
use std::fmt;

/// One formal parameter of a candidate signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterDescriptor {
    name: String,
    declared_type: TypeTag,
    optional: bool,
    variadic: bool,
}

impl ParameterDescriptor {
    /// A required parameter: selection disqualifies any candidate whose
    /// required parameter has no matching argument.
    pub fn required(name: impl Into<String>, declared_type: TypeTag) -> Self {
        Self {
            name: name.into(),
            declared_type,
            optional: false,
            variadic: false,
        }
    }

    /// An optional parameter: absence of a matching argument neither
    /// disqualifies nor scores.
    ///
    /// Optionality is a property the registration layer attaches; the scorer
    /// merely reads it.
    pub fn optional(name: impl Into<String>, declared_type: TypeTag) -> Self {
        Self {
            name: name.into(),
            declared_type,
            optional: true,
            variadic: false,
        }
    }

    /// A trailing catch-all parameter that absorbs any number of extra
    /// values. `element_type` is the element type of the collected rest.
    ///
    /// Must be the last parameter of its signature; [`CandidateSignature::new`]
    /// rejects anything else.
    pub fn variadic(name: impl Into<String>, element_type: TypeTag) -> Self {
        Self {
            name: name.into(),
            declared_type: element_type,
            optional: true,
            variadic: true,
        }
    }

    /// The parameter's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared type (element type, for a variadic parameter).
    #[must_use]
    pub fn declared_type(&self) -> &TypeTag {
        &self.declared_type
    }

    /// Whether the parameter may be left unbound.
    #[must_use]
    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// Whether this is the trailing catch-all parameter.
    #[must_use]
    pub fn is_variadic(&self) -> bool {
        self.variadic
    }
}

impl fmt::Display for ParameterDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.declared_type)?;
        if self.variadic {
            f.write_str("...")?;
        } else if self.optional {
            f.write_str("?")?;
        }
        Ok(())
    }
}

/// One overload: an action name plus an ordered parameter list.
///
/// Immutable once constructed. Structural rules are enforced here, not on the
/// request path:
///
/// - parameter names are unique within the signature
/// - at most one variadic parameter, and only in last position
/// - the parameter count stays within [`MAX_PARAMETERS_PER_SIGNATURE`]
///
/// # Example
///
/// ```
/// use finer::{CandidateSignature, ParameterDescriptor, TypeTag};
///
/// let sig = CandidateSignature::new(
///     "get_parameters",
///     vec![
///         ParameterDescriptor::required("a", TypeTag::String),
///         ParameterDescriptor::required("b", TypeTag::Int),
///     ],
/// ).unwrap();
///
/// assert_eq!(sig.shape(), "get_parameters(a: string, b: int)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSignature {
    action: String,
    parameters: Vec<ParameterDescriptor>,
}

impl CandidateSignature {
    /// Create a validated signature.
    ///
    /// # Errors
    ///
    /// - [`SelectorError::DuplicateParameterName`] if two parameters share a name
    /// - [`SelectorError::VariadicNotLast`] if a variadic parameter is not last
    /// - [`SelectorError::TooManyParameters`] if the parameter list is too long
    pub fn new(
        action: impl Into<String>,
        parameters: Vec<ParameterDescriptor>,
    ) -> Result<Self, SelectorError> {
        let action = action.into();

        if parameters.len() > MAX_PARAMETERS_PER_SIGNATURE {
            return Err(SelectorError::TooManyParameters {
                action,
                count: parameters.len(),
                max: MAX_PARAMETERS_PER_SIGNATURE,
            });
        }

        for (i, parameter) in parameters.iter().enumerate() {
            if parameter.is_variadic() && i + 1 != parameters.len() {
                return Err(SelectorError::VariadicNotLast {
                    action,
                    parameter: parameter.name().to_string(),
                });
            }
            if parameters[..i].iter().any(|p| p.name() == parameter.name()) {
                return Err(SelectorError::DuplicateParameterName {
                    action,
                    parameter: parameter.name().to_string(),
                });
            }
        }

        Ok(Self { action, parameters })
    }

    /// A signature with no parameters.
    pub fn nullary(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            parameters: Vec::new(),
        }
    }

    /// The action name this overload belongs to. Case-sensitive.
    #[must_use]
    pub fn action(&self) -> &str {
        &self.action
    }

    /// All parameters, in declaration order.
    #[must_use]
    pub fn parameters(&self) -> &[ParameterDescriptor] {
        &self.parameters
    }

    /// The parameters that participate in coverage and typing — everything
    /// except a trailing variadic.
    #[must_use]
    pub fn fixed_parameters(&self) -> &[ParameterDescriptor] {
        match self.parameters.last() {
            Some(last) if last.is_variadic() => &self.parameters[..self.parameters.len() - 1],
            _ => &self.parameters,
        }
    }

    /// Total number of declared parameters, trailing variadic included.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }

    /// Whether the last parameter is a catch-all.
    #[must_use]
    pub fn is_variadic(&self) -> bool {
        self.parameters.last().is_some_and(ParameterDescriptor::is_variadic)
    }

    /// Human-readable rendering, e.g. `get_parameters(a: string, b: int)`.
    ///
    /// Used in diagnostics, traces, and conformance fixtures; two signatures
    /// in one overload set never share a shape (the catalog rejects
    /// duplicates).
    #[must_use]
    pub fn shape(&self) -> String {
        self.to_string()
    }

    /// Returns `true` if `other` would collide with this signature in one
    /// overload set: same action, same arity, same parameter-name multiset.
    #[must_use]
    pub(crate) fn collides_with(&self, other: &CandidateSignature) -> bool {
        if self.action != other.action || self.parameters.len() != other.parameters.len() {
            return false;
        }
        // Parameter names are unique within a signature, so multiset
        // comparison reduces to mutual containment.
        self.parameters
            .iter()
            .all(|p| other.parameters.iter().any(|q| q.name() == p.name()))
    }
}

impl fmt::Display for CandidateSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.action)?;
        for (i, parameter) in self.parameters.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{parameter}")?;
        }
        f.write_str(")")
    }
}
