//! Reference and conditional compilation.
//!
//! Turns a parsed [`Reference`] into an [`InvocationPlan`] (or a
//! [`ConditionalPlan`]) after checking it against the presenter's declared
//! signatures. Compilation never runs presenter code; plans are plain data
//! executed later against live presenter instances.
//!
//! ```
//! use std::sync::LazyLock;
//!
//! use curly_compiler::{compile_reference, Reference};
//! use curly_presenter::{Capability, Presenter, PresenterDescriptor, Value};
//!
//! struct Strings;
//!
//! impl Presenter for Strings {
//!     fn descriptor() -> &'static PresenterDescriptor<Self> {
//!         static DESCRIPTOR: LazyLock<PresenterDescriptor<Strings>> = LazyLock::new(|| {
//!             PresenterDescriptor::builder("Strings")
//!                 .method(Capability::new("reverse").param(), |_, args| {
//!                     let text = args.required_positional()?;
//!                     Ok(text.chars().rev().collect::<String>().into())
//!                 })
//!                 .build()
//!         });
//!         &DESCRIPTOR
//!     }
//! }
//!
//! let reference = Reference::parse("reverse.123").unwrap();
//! let plan = compile_reference(Strings::descriptor(), &reference).unwrap();
//! assert_eq!(plan.execute(&Strings).unwrap(), Value::from("321"));
//! ```

mod cache;
mod compiler;
mod errors;
mod plan;
mod quotes;
mod reference;

pub use cache::PlanCache;
pub use compiler::compile_conditional;
pub use compiler::compile_reference;
pub use compiler::CompileOptions;
pub use compiler::ReferenceCompiler;
pub use errors::CompileError;
pub use errors::Reason;
pub use errors::ReferenceError;
pub use errors::RenderError;
pub use plan::ConditionalPlan;
pub use plan::InvocationPlan;
pub use reference::ParseError;
pub use reference::Reference;
