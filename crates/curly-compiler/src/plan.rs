use curly_presenter::Arguments;
use curly_presenter::Presenter;
use curly_presenter::Value;
use serde::Serialize;

use crate::errors::RenderError;

/// A validated call to one presenter method.
///
/// Plans only exist for references that passed validation, carry only
/// arguments the target capability declares, and are never re-validated.
/// They hold no presenter state, so a single plan can be shared across
/// threads and executed against any number of presenter instances.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct InvocationPlan {
    identifier: String,
    argument: Option<String>,
    keywords: Vec<(String, String)>,
}

impl InvocationPlan {
    pub(crate) fn new(
        identifier: String,
        argument: Option<String>,
        keywords: Vec<(String, String)>,
    ) -> Self {
        Self {
            identifier,
            argument,
            keywords,
        }
    }

    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The positional argument, if the reference supplied one.
    #[must_use]
    pub fn argument(&self) -> Option<&str> {
        self.argument.as_deref()
    }

    #[must_use]
    pub fn keywords(&self) -> &[(String, String)] {
        &self.keywords
    }

    #[must_use]
    pub fn arguments(&self) -> Arguments<'_> {
        Arguments::new(self.argument.as_deref(), &self.keywords)
    }

    /// Call the method on `presenter` and return its value untouched.
    pub fn execute<P: Presenter>(&self, presenter: &P) -> Result<Value, RenderError> {
        let descriptor = P::descriptor();
        let handler =
            descriptor
                .handler(&self.identifier)
                .ok_or_else(|| RenderError::UnknownMethod {
                    presenter: descriptor.name().to_string(),
                    identifier: self.identifier.clone(),
                })?;

        Ok(handler(presenter, &self.arguments())?)
    }
}

/// A plan whose result drives a conditional section.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ConditionalPlan {
    plan: InvocationPlan,
}

impl ConditionalPlan {
    pub(crate) fn new(plan: InvocationPlan) -> Self {
        Self { plan }
    }

    #[must_use]
    pub fn plan(&self) -> &InvocationPlan {
        &self.plan
    }

    /// Execute and coerce: only `false` and null are false.
    pub fn execute<P: Presenter>(&self, presenter: &P) -> Result<bool, RenderError> {
        self.plan
            .execute(presenter)
            .map(|value| value.is_truthy())
    }
}
