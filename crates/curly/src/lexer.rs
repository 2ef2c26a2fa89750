use serde::Serialize;

use crate::error::TemplateError;

const TAG_START: &str = "{{";
const TAG_END: &str = "}}";

/// Byte range of a token within the template source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    pub start: u32,
    pub length: u32,
}

impl Span {
    #[must_use]
    pub fn new(start: u32, length: u32) -> Self {
        Self { start, length }
    }

    fn from_range(start: usize, end: usize) -> Self {
        let start_u32 = u32::try_from(start).unwrap_or(u32::MAX);
        let length = u32::try_from(end.saturating_sub(start)).unwrap_or(u32::MAX);
        Self::new(start_u32, length)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Token {
    Text(String),
    /// The trimmed content of `{{ ... }}` and the span of the whole tag.
    Reference { content: String, span: Span },
}

pub struct Lexer<'s> {
    source: &'s str,
    current: usize,
}

impl<'s> Lexer<'s> {
    #[must_use]
    pub fn new(source: &'s str) -> Self {
        Lexer { source, current: 0 }
    }

    pub fn tokenize(mut self) -> Result<Vec<Token>, TemplateError> {
        let mut tokens = Vec::new();

        while !self.is_at_end() {
            if self.rest().starts_with(TAG_START) {
                if let Some(token) = self.lex_tag()? {
                    tokens.push(token);
                }
            } else {
                tokens.push(self.lex_text());
            }
        }

        Ok(tokens)
    }

    fn lex_tag(&mut self) -> Result<Option<Token>, TemplateError> {
        let start = self.current;
        let content_start = start + TAG_START.len();

        let Some(len) = self.source[content_start..].find(TAG_END) else {
            return Err(TemplateError::Unterminated {
                span: Span::from_range(start, self.source.len()),
            });
        };
        let content_end = content_start + len;
        self.current = content_end + TAG_END.len();

        let span = Span::from_range(start, self.current);
        let content = self.source[content_start..content_end].trim();

        match content.chars().next() {
            Some('!') => Ok(None),
            Some(sigil @ ('#' | '/' | '^' | '*' | '@' | '<' | '>')) => {
                Err(TemplateError::UnsupportedTag {
                    tag: sigil.to_string(),
                    span,
                })
            }
            _ => Ok(Some(Token::Reference {
                content: content.to_string(),
                span,
            })),
        }
    }

    fn lex_text(&mut self) -> Token {
        let start = self.current;
        let end = self
            .rest()
            .find(TAG_START)
            .map_or(self.source.len(), |offset| start + offset);
        self.current = end;
        Token::Text(self.source[start..end].to_string())
    }

    #[inline]
    fn rest(&self) -> &'s str {
        &self.source[self.current..]
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }
}
