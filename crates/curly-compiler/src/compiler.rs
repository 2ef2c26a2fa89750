//! Static validation of references against presenter signatures.
//!
//! Checks run in a fixed order so a reference with several problems always
//! reports the same one:
//!
//! 1. the identifier is available (`C100`)
//! 2. the method has at most one positional parameter (`C101`)
//! 3. a parameter is supplied exactly when the method needs one (`C102`, `C103`)
//! 4. no attribute key repeats, unless configured otherwise (`C104`)
//! 5. every attribute is a declared keyword (`C105`)
//! 6. every required keyword is supplied (`C106`)
//!
//! Conditionals additionally require a `?` identifier, checked first (`C107`).

use curly_conf::DuplicateAttributes;
use curly_conf::Settings;
use curly_presenter::Arity;
use curly_presenter::Capability;
use curly_presenter::Signatures;

use crate::errors::CompileError;
use crate::errors::Reason;
use crate::plan::ConditionalPlan;
use crate::plan::InvocationPlan;
use crate::reference::Reference;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CompileOptions {
    pub duplicate_attributes: DuplicateAttributes,
}

impl From<&Settings> for CompileOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            duplicate_attributes: settings.attributes.duplicates,
        }
    }
}

pub struct ReferenceCompiler<'a, S: ?Sized> {
    signatures: &'a S,
    options: CompileOptions,
}

impl<'a, S: Signatures + ?Sized> ReferenceCompiler<'a, S> {
    #[must_use]
    pub fn new(signatures: &'a S) -> Self {
        Self {
            signatures,
            options: CompileOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: CompileOptions) -> Self {
        self.options = options;
        self
    }

    pub fn compile_reference(&self, reference: &Reference) -> Result<InvocationPlan, CompileError> {
        let plan = self
            .compile(reference)
            .map_err(|reason| CompileError::new(reference, reason))?;
        tracing::debug!(
            presenter = self.signatures.presenter_name(),
            reference = reference.text(),
            "compiled reference"
        );
        Ok(plan)
    }

    pub fn compile_conditional(
        &self,
        reference: &Reference,
    ) -> Result<ConditionalPlan, CompileError> {
        if !reference.is_predicate() {
            return Err(CompileError::new(
                reference,
                Reason::NotBooleanShaped {
                    identifier: reference.identifier().to_string(),
                },
            ));
        }
        self.compile_reference(reference).map(ConditionalPlan::new)
    }

    fn compile(&self, reference: &Reference) -> Result<InvocationPlan, Reason> {
        let identifier = reference.identifier();
        let capability = self
            .signatures
            .capability_of(identifier)
            .map_err(|err| Reason::UnavailableMethod {
                presenter: err.presenter,
                identifier: err.identifier,
            })?;

        let argument = check_parameter(capability, reference.parameter())?;
        let keywords = self.check_attributes(capability, reference.attributes())?;

        Ok(InvocationPlan::new(
            identifier.to_string(),
            argument.map(str::to_string),
            keywords,
        ))
    }

    fn check_attributes(
        &self,
        capability: &Capability,
        attributes: &[(String, String)],
    ) -> Result<Vec<(String, String)>, Reason> {
        let mut keywords: Vec<(String, String)> = Vec::with_capacity(attributes.len());

        for (name, value) in attributes {
            match keywords.iter_mut().find(|(key, _)| key == name) {
                None => keywords.push((name.clone(), value.clone())),
                Some(_) if self.options.duplicate_attributes == DuplicateAttributes::Error => {
                    return Err(Reason::DuplicateAttribute { name: name.clone() });
                }
                Some(existing) => {
                    tracing::warn!(
                        identifier = capability.identifier(),
                        attribute = %name,
                        "attribute given more than once, keeping the last value"
                    );
                    existing.1.clone_from(value);
                }
            }
        }

        if let Some((name, _)) = keywords
            .iter()
            .find(|(name, _)| !capability.declares_keyword(name))
        {
            return Err(Reason::UnknownAttribute {
                identifier: capability.identifier().to_string(),
                name: name.clone(),
            });
        }

        if let Some(name) = capability
            .required_keywords()
            .find(|required| !keywords.iter().any(|(key, _)| key == required))
        {
            return Err(Reason::MissingRequiredAttribute {
                identifier: capability.identifier().to_string(),
                name: name.to_string(),
            });
        }

        Ok(keywords)
    }
}

fn check_parameter<'r>(
    capability: &Capability,
    parameter: Option<&'r str>,
) -> Result<Option<&'r str>, Reason> {
    let identifier = || capability.identifier().to_string();

    match (capability.arity(), parameter) {
        (Arity::Unsupported(count), _) => Err(Reason::UnsupportedArity {
            identifier: identifier(),
            count,
        }),
        (Arity::None, Some(_)) => Err(Reason::UnexpectedParameter {
            identifier: identifier(),
        }),
        (Arity::Required, None) => Err(Reason::MissingParameter {
            identifier: identifier(),
        }),
        (Arity::None | Arity::Optional, None) => Ok(None),
        (Arity::Required | Arity::Optional, Some(parameter)) => Ok(Some(parameter)),
    }
}

/// Compile a value-producing reference with default options.
pub fn compile_reference<S: Signatures + ?Sized>(
    signatures: &S,
    reference: &Reference,
) -> Result<InvocationPlan, CompileError> {
    ReferenceCompiler::new(signatures).compile_reference(reference)
}

/// Compile a conditional reference with default options.
pub fn compile_conditional<S: Signatures + ?Sized>(
    signatures: &S,
    reference: &Reference,
) -> Result<ConditionalPlan, CompileError> {
    ReferenceCompiler::new(signatures).compile_conditional(reference)
}
