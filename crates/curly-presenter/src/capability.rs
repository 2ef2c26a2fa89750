use serde::Serialize;

/// Positional shape of a presenter method.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Arity {
    /// Takes no positional argument.
    None,
    /// Takes exactly one positional argument, which must be supplied.
    Required,
    /// Takes one positional argument that has a default.
    Optional,
    /// Declares more than one positional parameter. References can never
    /// supply more than one, so such a method is never callable.
    Unsupported(usize),
}

impl Arity {
    #[must_use]
    pub fn accepts_parameter(self) -> bool {
        matches!(self, Arity::Required | Arity::Optional)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
struct KeywordParam {
    name: String,
    required: bool,
}

/// The declared call shape of one presenter method.
///
/// Built with chained calls at registration time:
///
/// ```
/// use curly_presenter::{Arity, Capability};
///
/// let widget = Capability::new("widget")
///     .keyword("size")
///     .optional_keyword("color");
/// assert_eq!(widget.arity(), Arity::None);
/// assert!(widget.declares_keyword("color"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Capability {
    identifier: String,
    required_params: usize,
    optional_params: usize,
    keywords: Vec<KeywordParam>,
}

impl Capability {
    #[must_use]
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            required_params: 0,
            optional_params: 0,
            keywords: Vec::new(),
        }
    }

    /// Declare a required positional parameter.
    #[must_use]
    pub fn param(mut self) -> Self {
        self.required_params += 1;
        self
    }

    /// Declare a positional parameter with a default value.
    #[must_use]
    pub fn optional_param(mut self) -> Self {
        self.optional_params += 1;
        self
    }

    /// Declare a required keyword parameter.
    #[must_use]
    pub fn keyword(self, name: impl Into<String>) -> Self {
        self.with_keyword(name.into(), true)
    }

    /// Declare a keyword parameter with a default value.
    #[must_use]
    pub fn optional_keyword(self, name: impl Into<String>) -> Self {
        self.with_keyword(name.into(), false)
    }

    fn with_keyword(mut self, name: String, required: bool) -> Self {
        // Redeclaring a keyword replaces it in place.
        if let Some(existing) = self.keywords.iter_mut().find(|kw| kw.name == name) {
            existing.required = required;
        } else {
            self.keywords.push(KeywordParam { name, required });
        }
        self
    }

    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    #[must_use]
    pub fn arity(&self) -> Arity {
        match (self.required_params, self.optional_params) {
            (0, 0) => Arity::None,
            (1, 0) => Arity::Required,
            (0, 1) => Arity::Optional,
            (required, optional) => Arity::Unsupported(required + optional),
        }
    }

    /// Keyword parameters without a default, in declaration order.
    pub fn required_keywords(&self) -> impl Iterator<Item = &str> {
        self.keywords
            .iter()
            .filter(|kw| kw.required)
            .map(|kw| kw.name.as_str())
    }

    /// Keyword parameters with a default, in declaration order.
    pub fn optional_keywords(&self) -> impl Iterator<Item = &str> {
        self.keywords
            .iter()
            .filter(|kw| !kw.required)
            .map(|kw| kw.name.as_str())
    }

    #[must_use]
    pub fn declares_keyword(&self, name: &str) -> bool {
        self.keywords.iter().any(|kw| kw.name == name)
    }

    /// Whether this is shaped like a predicate (`even?`) and may drive a
    /// conditional.
    #[must_use]
    pub fn is_predicate(&self) -> bool {
        self.identifier.ends_with('?')
    }
}
