use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use curly_compiler::CompileOptions;
use curly_compiler::InvocationPlan;
use curly_compiler::PlanCache;
use curly_conf::OutputFormat;
use curly_conf::Settings;
use curly_presenter::Presenter;

use crate::error::TemplateError;
use crate::lexer::Lexer;
use crate::lexer::Token;
use crate::output::write_value;

/// Compiles templates for any presenter type, sharing one plan cache.
#[derive(Debug, Default)]
pub struct Engine {
    settings: Settings,
    cache: PlanCache,
}

impl Engine {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        let cache = PlanCache::new(CompileOptions::from(&settings));
        Self { settings, cache }
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn cache(&self) -> &PlanCache {
        &self.cache
    }

    /// Compile `source` for presenter type `P`.
    ///
    /// Every reference is validated up front; if any one is invalid the
    /// whole template fails and nothing is returned.
    pub fn compile<P: Presenter>(&self, source: &str) -> Result<Template<P>, TemplateError> {
        let tokens = Lexer::new(source).tokenize()?;

        let mut nodes = Vec::with_capacity(tokens.len());
        for token in tokens {
            let node = match token {
                Token::Text(text) => Node::Text(text),
                Token::Reference { content, span } => {
                    let plan = self
                        .cache
                        .reference::<P>(&content)
                        .map_err(|source| TemplateError::Reference { source, span })?;
                    Node::Reference(plan)
                }
            };
            nodes.push(node);
        }

        tracing::debug!(
            presenter = P::descriptor().name(),
            nodes = nodes.len(),
            "compiled template"
        );

        Ok(Template {
            nodes,
            output: self.settings.output,
            presenter: PhantomData,
        })
    }
}

enum Node {
    Text(String),
    Reference(Arc<InvocationPlan>),
}

/// A compiled template bound to presenter type `P`.
pub struct Template<P> {
    nodes: Vec<Node>,
    output: OutputFormat,
    presenter: PhantomData<fn(&P)>,
}

impl<P: Presenter> Template<P> {
    pub fn render(&self, presenter: &P) -> Result<String, TemplateError> {
        let mut out = String::new();
        for node in &self.nodes {
            match node {
                Node::Text(text) => out.push_str(text),
                Node::Reference(plan) => {
                    let value =
                        plan.execute(presenter)
                            .map_err(|source| TemplateError::Render {
                                identifier: plan.identifier().to_string(),
                                source,
                            })?;
                    write_value(&mut out, &value, self.output);
                }
            }
        }
        Ok(out)
    }
}

impl<P> Template<P> {
    /// Number of references this template calls per render.
    #[must_use]
    pub fn reference_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|node| matches!(node, Node::Reference(_)))
            .count()
    }
}

impl<P> fmt::Debug for Template<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Template")
            .field("nodes", &self.nodes.len())
            .field("references", &self.reference_count())
            .field("output", &self.output)
            .finish()
    }
}
