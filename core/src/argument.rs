//! `AvailableArgument` / `ArgumentSource` — The per-request value snapshot
//!
//! An [`ArgumentSource`] is the seam between the selection core and whatever
//! supplied the request's values (route data, query string, body). The core
//! only needs to know, per name: is a value present, and what type is it when
//! that is known.

use crate::TypeTag;
use std::fmt::Debug;

/// One piece of data the caller can supply, independent of where it
/// physically came from.
///
/// `value_type` is `None` when the argument's type is not statically known;
/// the scorer treats such matches as a weak pass rather than disqualifying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailableArgument {
    name: String,
    has_value: bool,
    value_type: Option<TypeTag>,
}

impl AvailableArgument {
    /// An argument whose value is present and whose type is known.
    pub fn typed(name: impl Into<String>, value_type: TypeTag) -> Self {
        Self {
            name: name.into(),
            has_value: true,
            value_type: Some(value_type),
        }
    }

    /// An argument whose value is present but whose type is not statically
    /// known.
    pub fn untyped(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            has_value: true,
            value_type: None,
        }
    }

    /// A name the caller knows about but has no value for.
    ///
    /// Useful for sources that distinguish "key present, value empty" from
    /// "key absent"; the scorer treats both as unable to satisfy a required
    /// parameter.
    pub fn absent(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            has_value: false,
            value_type: None,
        }
    }

    /// The argument's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether a value is actually available under this name.
    #[must_use]
    pub fn has_value(&self) -> bool {
        self.has_value
    }

    /// The value's type, when statically known.
    #[must_use]
    pub fn value_type(&self) -> Option<&TypeTag> {
        self.value_type.as_ref()
    }
}

/// Supplies the set of named values available for the current request.
///
/// # Purity
///
/// Implementations must behave as a data snapshot: no mutation, and identical
/// results across repeated calls within one selection pass. The selector may
/// query the source once per candidate parameter.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `ArgumentSource`",
    label = "this type cannot supply named arguments for selection",
    note = "ArgumentSource is a pure per-request snapshot — use ArgumentSet, or implement `lookup` and `arguments` over your own request data"
)]
pub trait ArgumentSource: Send + Sync + Debug {
    /// Find the argument with the given name, if the caller supplied one.
    fn lookup(&self, name: &str) -> Option<&AvailableArgument>;

    /// All available arguments, in a stable order.
    fn arguments(&self) -> &[AvailableArgument];
}

// Blanket implementation for boxed ArgumentSources
#[diagnostic::do_not_recommend]
impl ArgumentSource for Box<dyn ArgumentSource> {
    fn lookup(&self, name: &str) -> Option<&AvailableArgument> {
        (**self).lookup(name)
    }

    fn arguments(&self) -> &[AvailableArgument] {
        (**self).arguments()
    }
}

/// An ordered, concrete [`ArgumentSource`].
///
/// Entries keep insertion order; when two entries share a name, the first
/// one wins on [`lookup`](ArgumentSource::lookup). Argument sets are small
/// (one per request parameter), so lookup is a linear scan.
///
/// # Example
///
/// ```
/// use finer::{ArgumentSet, ArgumentSource, TypeTag};
///
/// let args = ArgumentSet::new()
///     .with_typed("a", TypeTag::String)
///     .with_untyped("b");
///
/// assert!(args.lookup("a").unwrap().has_value());
/// assert!(args.lookup("b").unwrap().value_type().is_none());
/// assert!(args.lookup("c").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentSet {
    entries: Vec<AvailableArgument>,
}

impl ArgumentSet {
    /// Create an empty argument set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an argument (builder pattern).
    #[must_use]
    pub fn with(mut self, argument: AvailableArgument) -> Self {
        self.entries.push(argument);
        self
    }

    /// Add a present, typed argument (builder pattern).
    #[must_use]
    pub fn with_typed(self, name: impl Into<String>, value_type: TypeTag) -> Self {
        self.with(AvailableArgument::typed(name, value_type))
    }

    /// Add a present argument of unknown type (builder pattern).
    #[must_use]
    pub fn with_untyped(self, name: impl Into<String>) -> Self {
        self.with(AvailableArgument::untyped(name))
    }

    /// Add a known name with no value (builder pattern).
    #[must_use]
    pub fn with_absent(self, name: impl Into<String>) -> Self {
        self.with(AvailableArgument::absent(name))
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ArgumentSource for ArgumentSet {
    fn lookup(&self, name: &str) -> Option<&AvailableArgument> {
        self.entries.iter().find(|a| a.name() == name)
    }

    fn arguments(&self) -> &[AvailableArgument] {
        &self.entries
    }
}

impl FromIterator<AvailableArgument> for ArgumentSet {
    fn from_iter<I: IntoIterator<Item = AvailableArgument>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_name() {
        let args = ArgumentSet::new()
            .with_typed("a", TypeTag::String)
            .with_typed("b", TypeTag::Int);

        assert_eq!(args.lookup("a").unwrap().value_type(), Some(&TypeTag::String));
        assert_eq!(args.lookup("b").unwrap().value_type(), Some(&TypeTag::Int));
        assert!(args.lookup("missing").is_none());
    }

    #[test]
    fn test_first_entry_wins_on_duplicate_names() {
        let args = ArgumentSet::new()
            .with_typed("a", TypeTag::String)
            .with_typed("a", TypeTag::Int);

        assert_eq!(args.lookup("a").unwrap().value_type(), Some(&TypeTag::String));
        assert_eq!(args.len(), 2);
    }

    #[test]
    fn test_absent_argument_has_no_value() {
        let args = ArgumentSet::new().with_absent("a");
        let arg = args.lookup("a").unwrap();
        assert!(!arg.has_value());
        assert!(arg.value_type().is_none());
    }

    #[test]
    fn test_arguments_preserve_insertion_order() {
        let args = ArgumentSet::new()
            .with_untyped("z")
            .with_untyped("a")
            .with_untyped("m");

        let names: Vec<&str> = args.arguments().iter().map(AvailableArgument::name).collect();
        assert_eq!(names, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_from_iterator() {
        let args: ArgumentSet = vec![
            AvailableArgument::typed("a", TypeTag::Bool),
            AvailableArgument::untyped("b"),
        ]
        .into_iter()
        .collect();

        assert_eq!(args.len(), 2);
        assert_eq!(args.lookup("a").unwrap().value_type(), Some(&TypeTag::Bool));
    }

    #[test]
    fn test_argument_set_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ArgumentSet>();
        assert_send_sync::<Box<dyn ArgumentSource>>();
    }
}
