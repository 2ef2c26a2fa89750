use std::fmt;

use rustc_hash::FxHashMap;
use rustc_hash::FxHashSet;

use crate::arguments::Arguments;
use crate::capability::Capability;
use crate::error::PresenterError;
use crate::error::UnavailableMethod;
use crate::value::Value;

/// A registered presenter method body.
pub type Handler<P> = dyn Fn(&P, &Arguments<'_>) -> Result<Value, PresenterError> + Send + Sync;

/// Read-only view of a presenter type's capabilities, consumed by the
/// reference compiler.
pub trait Signatures {
    /// Display name of the presenter type, used in diagnostics.
    fn presenter_name(&self) -> &str;

    /// The capability registered under `identifier`, ignoring availability.
    fn declared(&self, identifier: &str) -> Option<&Capability>;

    /// Whether the presenter explicitly withholds a declared method.
    fn withholds(&self, _identifier: &str) -> bool {
        false
    }

    fn available(&self, identifier: &str) -> bool {
        self.declared(identifier).is_some() && !self.withholds(identifier)
    }

    fn capability_of(&self, identifier: &str) -> Result<&Capability, UnavailableMethod> {
        match self.declared(identifier) {
            Some(capability) if !self.withholds(identifier) => Ok(capability),
            _ => Err(UnavailableMethod {
                presenter: self.presenter_name().to_string(),
                identifier: identifier.to_string(),
            }),
        }
    }
}

/// A type templates can be bound to.
///
/// Implementors return a descriptor registered once, typically from a
/// `LazyLock` static:
///
/// ```
/// use std::sync::LazyLock;
///
/// use curly_presenter::{Capability, Presenter, PresenterDescriptor};
///
/// struct Greeting;
///
/// impl Presenter for Greeting {
///     fn descriptor() -> &'static PresenterDescriptor<Self> {
///         static DESCRIPTOR: LazyLock<PresenterDescriptor<Greeting>> = LazyLock::new(|| {
///             PresenterDescriptor::builder("Greeting")
///                 .method(Capability::new("title"), |_, _| Ok("Welcome!".into()))
///                 .build()
///         });
///         &DESCRIPTOR
///     }
/// }
/// ```
pub trait Presenter: Sized + 'static {
    fn descriptor() -> &'static PresenterDescriptor<Self>;
}

struct Method<P> {
    capability: Capability,
    handler: Box<Handler<P>>,
}

/// The immutable capability table of one presenter type.
pub struct PresenterDescriptor<P> {
    name: String,
    methods: FxHashMap<String, Method<P>>,
    withheld: FxHashSet<String>,
}

impl<P> PresenterDescriptor<P> {
    #[must_use]
    pub fn builder(name: impl Into<String>) -> DescriptorBuilder<P> {
        DescriptorBuilder {
            name: name.into(),
            methods: FxHashMap::default(),
            withheld: FxHashSet::default(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The handler for an available method.
    #[must_use]
    pub fn handler(&self, identifier: &str) -> Option<&Handler<P>> {
        if self.withheld.contains(identifier) {
            return None;
        }
        self.methods
            .get(identifier)
            .map(|method| method.handler.as_ref())
    }

    /// Available capabilities, sorted by identifier.
    #[must_use]
    pub fn capabilities(&self) -> Vec<&Capability> {
        let mut capabilities: Vec<_> = self
            .methods
            .iter()
            .filter(|(identifier, _)| !self.withheld.contains(identifier.as_str()))
            .map(|(_, method)| &method.capability)
            .collect();
        capabilities.sort_by(|a, b| a.identifier().cmp(b.identifier()));
        capabilities
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

impl<P> Signatures for PresenterDescriptor<P> {
    fn presenter_name(&self) -> &str {
        &self.name
    }

    fn declared(&self, identifier: &str) -> Option<&Capability> {
        self.methods.get(identifier).map(|method| &method.capability)
    }

    fn withholds(&self, identifier: &str) -> bool {
        self.withheld.contains(identifier)
    }
}

impl<P> fmt::Debug for PresenterDescriptor<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PresenterDescriptor")
            .field("name", &self.name)
            .field("capabilities", &self.capabilities())
            .field("withheld", &self.withheld)
            .finish()
    }
}

pub struct DescriptorBuilder<P> {
    name: String,
    methods: FxHashMap<String, Method<P>>,
    withheld: FxHashSet<String>,
}

impl<P> DescriptorBuilder<P> {
    /// Register a method. Registering the same identifier twice keeps the
    /// later registration.
    #[must_use]
    pub fn method<F>(mut self, capability: Capability, handler: F) -> Self
    where
        F: Fn(&P, &Arguments<'_>) -> Result<Value, PresenterError> + Send + Sync + 'static,
    {
        let identifier = capability.identifier().to_string();
        let method = Method {
            capability,
            handler: Box::new(handler),
        };
        if self.methods.insert(identifier.clone(), method).is_some() {
            tracing::warn!(
                presenter = %self.name,
                identifier = %identifier,
                "method registered twice, keeping the later registration"
            );
        }
        self
    }

    /// Hide a method from templates even though it is registered.
    #[must_use]
    pub fn withhold(mut self, identifier: impl Into<String>) -> Self {
        self.withheld.insert(identifier.into());
        self
    }

    #[must_use]
    pub fn build(self) -> PresenterDescriptor<P> {
        tracing::debug!(
            presenter = %self.name,
            methods = self.methods.len(),
            withheld = self.withheld.len(),
            "registered presenter"
        );
        PresenterDescriptor {
            name: self.name,
            methods: self.methods,
            withheld: self.withheld,
        }
    }
}
