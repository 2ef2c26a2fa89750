//! Presenter-bound templates.
//!
//! Templates are plain text with `{{ reference }}` components. Each reference
//! names a method the bound presenter explicitly exposes, and every one is
//! validated against that method's signature when the template is compiled,
//! so rendering never fails on a bad reference.
//!
//! ```
//! use std::sync::LazyLock;
//!
//! use curly::{Capability, Engine, Presenter, PresenterDescriptor};
//!
//! struct Article {
//!     title: String,
//! }
//!
//! impl Presenter for Article {
//!     fn descriptor() -> &'static PresenterDescriptor<Self> {
//!         static DESCRIPTOR: LazyLock<PresenterDescriptor<Article>> = LazyLock::new(|| {
//!             PresenterDescriptor::builder("ArticlePresenter")
//!                 .method(Capability::new("title"), |article: &Article, _| {
//!                     Ok(article.title.clone().into())
//!                 })
//!                 .build()
//!         });
//!         &DESCRIPTOR
//!     }
//! }
//!
//! let engine = Engine::default();
//! let template = engine.compile::<Article>("<h1>{{title}}</h1>").unwrap();
//! let article = Article { title: "Tom & Jerry".to_string() };
//! assert_eq!(template.render(&article).unwrap(), "<h1>Tom &amp; Jerry</h1>");
//! ```

mod error;
mod lexer;
pub mod logging;
mod output;
mod template;

pub use curly_compiler::compile_conditional;
pub use curly_compiler::compile_reference;
pub use curly_compiler::ConditionalPlan;
pub use curly_compiler::InvocationPlan;
pub use curly_compiler::Reference;
pub use curly_conf::Settings;
pub use curly_presenter::Arguments;
pub use curly_presenter::Capability;
pub use curly_presenter::Presenter;
pub use curly_presenter::PresenterDescriptor;
pub use curly_presenter::PresenterError;
pub use curly_presenter::Value;
pub use error::TemplateError;
pub use lexer::Lexer;
pub use lexer::Span;
pub use lexer::Token;
pub use output::write_value;
pub use template::Engine;
pub use template::Template;
