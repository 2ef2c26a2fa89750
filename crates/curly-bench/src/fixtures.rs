use std::fmt;
use std::sync::OnceLock;

#[derive(Clone)]
pub struct ReferenceFixture {
    pub label: &'static str,
    pub text: &'static str,
}

impl fmt::Display for ReferenceFixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

#[derive(Clone)]
pub struct TemplateFixture {
    pub label: String,
    pub source: String,
}

impl fmt::Display for TemplateFixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

#[must_use]
pub fn reference_fixtures() -> &'static [ReferenceFixture] {
    &[
        ReferenceFixture {
            label: "bare",
            text: "title",
        },
        ReferenceFixture {
            label: "parameter",
            text: "tag.1",
        },
        ReferenceFixture {
            label: "optional_keyword",
            text: "tags separator=\" / \"",
        },
        ReferenceFixture {
            label: "parameter_and_keyword",
            text: "i18n.home.welcome fallback=\"Welcome!\"",
        },
        ReferenceFixture {
            label: "keywords",
            text: "link href=\"/articles/1\" title=\"Read more\"",
        },
    ]
}

pub fn template_fixtures() -> &'static [TemplateFixture] {
    static FIXTURES: OnceLock<Vec<TemplateFixture>> = OnceLock::new();
    FIXTURES.get_or_init(build_template_fixtures).as_slice()
}

const ARTICLE: &str = r#"<article>
  <h1>{{ title }}</h1>
  <p class="byline">{{i18n.article.by fallback="by"}} {{author}}</p>
  <div>{{ body }}</div>
  <footer>{{tags separator=" / "}} {{tag.0}} {{link href="/articles" title="All articles"}}</footer>
</article>
"#;

fn build_template_fixtures() -> Vec<TemplateFixture> {
    let mut fixtures = vec![
        TemplateFixture {
            label: "single".to_string(),
            source: "{{title}}".to_string(),
        },
        TemplateFixture {
            label: "article".to_string(),
            source: ARTICLE.to_string(),
        },
    ];

    for repeat in [10, 100] {
        fixtures.push(TemplateFixture {
            label: format!("article_x{repeat}"),
            source: ARTICLE.repeat(repeat),
        });
    }

    fixtures
}
