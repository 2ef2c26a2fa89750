mod fixtures;
mod presenter;

pub use fixtures::reference_fixtures;
pub use fixtures::template_fixtures;
pub use fixtures::ReferenceFixture;
pub use fixtures::TemplateFixture;
pub use presenter::Article;
