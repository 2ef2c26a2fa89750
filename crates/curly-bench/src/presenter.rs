use std::sync::LazyLock;

use curly_presenter::Capability;
use curly_presenter::Presenter;
use curly_presenter::PresenterDescriptor;
use curly_presenter::Value;

/// Presenter exercising every arity the compiler validates.
pub struct Article {
    pub title: String,
    pub author: String,
    pub body: String,
    pub tags: Vec<String>,
    pub published: bool,
}

impl Article {
    #[must_use]
    pub fn sample() -> Self {
        Self {
            title: "A Clockwork Orange".to_string(),
            author: "Anthony Burgess".to_string(),
            body: "What's it going to be then, eh? <em>Real horrorshow.</em>".to_string(),
            tags: vec!["novel".to_string(), "dystopia".to_string(), "1962".to_string()],
            published: true,
        }
    }
}

impl Presenter for Article {
    fn descriptor() -> &'static PresenterDescriptor<Self> {
        static DESCRIPTOR: LazyLock<PresenterDescriptor<Article>> = LazyLock::new(|| {
            PresenterDescriptor::builder("ArticlePresenter")
                .method(Capability::new("title"), |article: &Article, _| {
                    Ok(article.title.as_str().into())
                })
                .method(Capability::new("author"), |article: &Article, _| {
                    Ok(article.author.as_str().into())
                })
                .method(Capability::new("body"), |article: &Article, _| {
                    Ok(article.body.as_str().into())
                })
                .method(
                    Capability::new("tags").optional_keyword("separator"),
                    |article: &Article, args| {
                        let separator = args.keyword("separator").unwrap_or(", ");
                        Ok(article.tags.join(separator).into())
                    },
                )
                .method(Capability::new("tag").param(), |article: &Article, args| {
                    let index: usize = args.parse_positional()?;
                    Ok(article.tags.get(index).cloned().into())
                })
                .method(
                    Capability::new("i18n").param().optional_keyword("fallback"),
                    |_, args| {
                        let key = args.required_positional()?;
                        Ok(args.keyword("fallback").unwrap_or(key).into())
                    },
                )
                .method(
                    Capability::new("link")
                        .keyword("href")
                        .optional_keyword("title"),
                    |_, args| {
                        let href = args.required_keyword("href")?;
                        let title = args.keyword("title").unwrap_or(href);
                        Ok(Value::safe(format!("<a href=\"{href}\">{title}</a>")))
                    },
                )
                .method(Capability::new("published?"), |article: &Article, _| {
                    Ok(article.published.into())
                })
                .build()
        });
        &DESCRIPTOR
    }
}
