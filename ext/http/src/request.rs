//! Minimal HTTP request model for component dispatch.
//!
//! Deliberately transport-free: whatever server front-end the application
//! uses, it populates an [`HttpRequest`] from its own parsed request and
//! hands it to the dispatch service. Route values come from the host's
//! URL matching, query pairs from the query string, form pairs from the
//! body.

/// An HTTP request reduced to what selection and binding need.
///
/// The action name is the final path segment: `/diagnostics/get_parameters`
/// dispatches the `get_parameters` action.
#[derive(Debug, Clone, Default)]
pub struct HttpRequest {
    method: String,
    path: String,
    route_values: Vec<(String, String)>,
    query: Vec<(String, String)>,
    form: Vec<(String, String)>,
}

impl HttpRequest {
    /// Start building a request.
    #[must_use]
    pub fn builder(method: impl Into<String>, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder {
            request: HttpRequest {
                method: method.into(),
                path: path.into(),
                ..HttpRequest::default()
            },
        }
    }

    /// The request method, as given.
    #[must_use]
    pub fn method(&self) -> &str {
        &self.method
    }

    /// The request path, as given.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The action name: the final path segment, empty for a bare `/`.
    #[must_use]
    pub fn action(&self) -> &str {
        self.path
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or("")
    }

    /// Route values produced by the host's URL matching.
    #[must_use]
    pub fn route_values(&self) -> &[(String, String)] {
        &self.route_values
    }

    /// Query string pairs.
    #[must_use]
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// Form body pairs.
    #[must_use]
    pub fn form(&self) -> &[(String, String)] {
        &self.form
    }

    /// Look up a value by name: route values first, then query, then form.
    /// Within a source, the first occurrence wins.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&str> {
        self.route_values
            .iter()
            .chain(&self.query)
            .chain(&self.form)
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Builder for [`HttpRequest`].
///
/// # Example
///
/// ```
/// use finer_http::HttpRequest;
///
/// let request = HttpRequest::builder("GET", "/diagnostics/get_parameters")
///     .query("a", "x")
///     .query("b", "5")
///     .build();
///
/// assert_eq!(request.action(), "get_parameters");
/// assert_eq!(request.value("b"), Some("5"));
/// ```
#[derive(Debug, Clone)]
pub struct HttpRequestBuilder {
    request: HttpRequest,
}

impl HttpRequestBuilder {
    /// Add a route value (from the host's URL matching).
    #[must_use]
    pub fn route_value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.request.route_values.push((name.into(), value.into()));
        self
    }

    /// Add a query string pair.
    #[must_use]
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.request.query.push((name.into(), value.into()));
        self
    }

    /// Add a form body pair.
    #[must_use]
    pub fn form(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.request.form.push((name.into(), value.into()));
        self
    }

    /// Finish building.
    #[must_use]
    pub fn build(self) -> HttpRequest {
        self.request
    }
}
