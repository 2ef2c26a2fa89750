//! Shared cache of compiled plans.
//!
//! Plans are keyed by presenter type and raw reference text. Compilation is
//! pure, so two threads racing on the same key may both compile; whichever
//! plan is inserted first is kept and the other is dropped. Errors are
//! never cached.

use std::any::TypeId;
use std::sync::Arc;

use curly_presenter::Presenter;
use dashmap::DashMap;
use rustc_hash::FxBuildHasher;

use crate::compiler::CompileOptions;
use crate::compiler::ReferenceCompiler;
use crate::errors::ReferenceError;
use crate::plan::ConditionalPlan;
use crate::plan::InvocationPlan;
use crate::reference::Reference;

type PlanKey = (TypeId, String);

#[derive(Debug, Default)]
pub struct PlanCache {
    options: CompileOptions,
    references: DashMap<PlanKey, Arc<InvocationPlan>, FxBuildHasher>,
    conditionals: DashMap<PlanKey, Arc<ConditionalPlan>, FxBuildHasher>,
}

impl PlanCache {
    #[must_use]
    pub fn new(options: CompileOptions) -> Self {
        Self {
            options,
            references: DashMap::with_hasher(FxBuildHasher),
            conditionals: DashMap::with_hasher(FxBuildHasher),
        }
    }

    #[must_use]
    pub fn options(&self) -> CompileOptions {
        self.options
    }

    /// The plan for a value-producing reference on presenter type `P`.
    pub fn reference<P: Presenter>(&self, text: &str) -> Result<Arc<InvocationPlan>, ReferenceError> {
        let key = (TypeId::of::<P>(), text.to_string());
        if let Some(plan) = self.references.get(&key) {
            tracing::trace!(reference = text, "plan cache hit");
            return Ok(Arc::clone(plan.value()));
        }

        let reference = parse(text)?;
        let plan = ReferenceCompiler::new(P::descriptor())
            .with_options(self.options)
            .compile_reference(&reference)?;

        let entry = self.references.entry(key).or_insert(Arc::new(plan));
        Ok(Arc::clone(entry.value()))
    }

    /// The plan for a conditional reference on presenter type `P`.
    pub fn conditional<P: Presenter>(
        &self,
        text: &str,
    ) -> Result<Arc<ConditionalPlan>, ReferenceError> {
        let key = (TypeId::of::<P>(), text.to_string());
        if let Some(plan) = self.conditionals.get(&key) {
            tracing::trace!(reference = text, "plan cache hit");
            return Ok(Arc::clone(plan.value()));
        }

        let reference = parse(text)?;
        let plan = ReferenceCompiler::new(P::descriptor())
            .with_options(self.options)
            .compile_conditional(&reference)?;

        let entry = self.conditionals.entry(key).or_insert(Arc::new(plan));
        Ok(Arc::clone(entry.value()))
    }

    /// Number of cached plans of both kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.references.len() + self.conditionals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.references.is_empty() && self.conditionals.is_empty()
    }

    pub fn clear(&self) {
        self.references.clear();
        self.conditionals.clear();
    }
}

fn parse(text: &str) -> Result<Reference, ReferenceError> {
    Reference::parse(text).map_err(|source| ReferenceError::Parse {
        text: text.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::LazyLock;

    use curly_conf::DuplicateAttributes;
    use curly_presenter::Capability;
    use curly_presenter::PresenterDescriptor;
    use curly_presenter::Value;

    use super::*;

    struct Numbers;

    impl Presenter for Numbers {
        fn descriptor() -> &'static PresenterDescriptor<Self> {
            static DESCRIPTOR: LazyLock<PresenterDescriptor<Numbers>> = LazyLock::new(|| {
                PresenterDescriptor::builder("NumbersPresenter")
                    .method(Capability::new("double").keyword("number"), |_, args| {
                        Ok(Value::from(args.parse_keyword::<i64>("number")? * 2))
                    })
                    .method(Capability::new("even?").param(), |_, args| {
                        Ok(Value::from(args.parse_positional::<i64>()? % 2 == 0))
                    })
                    .build()
            });
            &DESCRIPTOR
        }
    }

    struct Other;

    impl Presenter for Other {
        fn descriptor() -> &'static PresenterDescriptor<Self> {
            static DESCRIPTOR: LazyLock<PresenterDescriptor<Other>> = LazyLock::new(|| {
                PresenterDescriptor::builder("OtherPresenter")
                    .method(Capability::new("double"), |_, _| Ok(Value::from("twice")))
                    .build()
            });
            &DESCRIPTOR
        }
    }

    #[test]
    fn repeated_lookups_share_one_plan() {
        let cache = PlanCache::default();
        let first = cache.reference::<Numbers>("double number=3").unwrap();
        let second = cache.reference::<Numbers>("double number=3").unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
        assert_eq!(first.execute(&Numbers), Ok(Value::from(6)));
    }

    #[test]
    fn keyed_by_presenter_type() {
        let cache = PlanCache::default();
        let numbers = cache.reference::<Numbers>("double number=3").unwrap();
        let other = cache.reference::<Other>("double");

        assert!(other.is_ok());
        assert!(cache.reference::<Other>("double number=3").is_err());
        assert_eq!(numbers.execute(&Numbers), Ok(Value::from(6)));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn conditionals_are_cached_separately() {
        let cache = PlanCache::default();
        let even = cache.conditional::<Numbers>("even.42?").unwrap();

        assert_eq!(even.execute(&Numbers), Ok(true));
        assert!(cache.reference::<Numbers>("even.42?").is_ok());
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn errors_are_not_cached() {
        let cache = PlanCache::default();

        let err = cache.reference::<Numbers>("double").unwrap_err();
        assert_eq!(err.diagnostic_code(), "C106");
        let err = cache.reference::<Numbers>("double number").unwrap_err();
        assert_eq!(err.diagnostic_code(), "C001");
        assert!(cache.is_empty());
    }

    #[test]
    fn options_apply_to_compiled_plans() {
        let cache = PlanCache::new(CompileOptions {
            duplicate_attributes: DuplicateAttributes::LastWins,
        });
        let plan = cache
            .reference::<Numbers>("double number=1 number=4")
            .unwrap();
        assert_eq!(plan.execute(&Numbers), Ok(Value::from(8)));

        cache.clear();
        assert!(cache.is_empty());
    }
}
