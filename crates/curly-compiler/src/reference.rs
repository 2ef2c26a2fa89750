use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::quotes::split_on_whitespace;
use crate::quotes::unquote;

#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize)]
pub enum ParseError {
    #[error("empty reference")]
    Empty,

    #[error("invalid identifier `{0}`")]
    InvalidIdentifier(String),

    #[error("empty parameter in `{0}`")]
    EmptyParameter(String),

    #[error("invalid parameter `{0}`")]
    InvalidParameter(String),

    #[error("malformed attribute `{0}`, expected `key=value`")]
    MalformedAttribute(String),
}

/// A reference as written inside `{{ }}`: an identifier, an optional
/// parameter and `key=value` attributes.
///
/// The grammar is `identifier[.parameter][?] [key=value ...]`. Everything
/// after the first `.` is the parameter, and a trailing `?` always belongs
/// to the identifier, so `even.42?` calls `even?` with `42`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Reference {
    text: String,
    identifier: String,
    parameter: Option<String>,
    attributes: Vec<(String, String)>,
}

impl Reference {
    /// Build a reference from already-parsed parts.
    ///
    /// Parts are held to the same rules as [`Reference::parse`], so
    /// [`Reference::text`] always parses back to an equal reference. A
    /// parameter may not contain whitespace or quotes, or end in `?`.
    pub fn new(
        identifier: impl Into<String>,
        parameter: Option<String>,
        attributes: Vec<(String, String)>,
    ) -> Result<Self, ParseError> {
        let identifier = identifier.into();
        validate_identifier(&identifier)?;
        if let Some(parameter) = &parameter {
            let bare = identifier.strip_suffix('?').unwrap_or(&identifier);
            validate_parameter(bare, parameter)?;
        }
        if let Some((key, value)) = attributes.iter().find(|(key, _)| !is_attribute_key(key)) {
            return Err(ParseError::MalformedAttribute(format!("{key}={value}")));
        }

        let text = canonical_text(&identifier, parameter.as_deref(), &attributes);
        Ok(Self {
            text,
            identifier,
            parameter,
            attributes,
        })
    }

    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let text = text.trim();
        let mut pieces = split_on_whitespace(text).into_iter();
        let name = pieces.next().ok_or(ParseError::Empty)?;

        let (identifier, parameter) = split_name(name)?;
        let attributes = pieces.map(parse_attribute).collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            text: text.to_string(),
            identifier,
            parameter,
            attributes,
        })
    }

    /// The reference text diagnostics refer to.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    #[must_use]
    pub fn parameter(&self) -> Option<&str> {
        self.parameter.as_deref()
    }

    /// Attributes in source order, duplicates included.
    #[must_use]
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    #[must_use]
    pub fn is_predicate(&self) -> bool {
        self.identifier.ends_with('?')
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

fn split_name(name: &str) -> Result<(String, Option<String>), ParseError> {
    let Some((head, rest)) = name.split_once('.') else {
        validate_identifier(name)?;
        return Ok((name.to_string(), None));
    };

    let (identifier, parameter) = match rest.strip_suffix('?') {
        Some(parameter) => (format!("{head}?"), parameter),
        None => (head.to_string(), rest),
    };
    validate_parameter(head, parameter)?;
    validate_identifier(&identifier)?;

    Ok((identifier, Some(parameter.to_string())))
}

fn validate_identifier(identifier: &str) -> Result<(), ParseError> {
    let bare = identifier.strip_suffix('?').unwrap_or(identifier);
    let valid = !bare.is_empty()
        && bare
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');
    if valid {
        Ok(())
    } else {
        Err(ParseError::InvalidIdentifier(identifier.to_string()))
    }
}

fn validate_parameter(head: &str, parameter: &str) -> Result<(), ParseError> {
    if parameter.is_empty() {
        return Err(ParseError::EmptyParameter(format!("{head}.")));
    }
    let valid = !parameter.ends_with('?')
        && !parameter.contains(|c: char| c.is_whitespace() || c == '"' || c == '\'');
    if valid {
        Ok(())
    } else {
        Err(ParseError::InvalidParameter(parameter.to_string()))
    }
}

fn is_attribute_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

fn parse_attribute(piece: &str) -> Result<(String, String), ParseError> {
    let malformed = || ParseError::MalformedAttribute(piece.to_string());

    let (key, raw_value) = piece.split_once('=').ok_or_else(malformed)?;
    if !is_attribute_key(key) {
        return Err(malformed());
    }
    let value = unquote(raw_value).ok_or_else(malformed)?;

    Ok((key.to_string(), value))
}

fn canonical_text(identifier: &str, parameter: Option<&str>, attributes: &[(String, String)]) -> String {
    let mut text = match (identifier.strip_suffix('?'), parameter) {
        (Some(bare), Some(parameter)) => format!("{bare}.{parameter}?"),
        (None, Some(parameter)) => format!("{identifier}.{parameter}"),
        (_, None) => identifier.to_string(),
    };
    for (key, value) in attributes {
        text.push(' ');
        text.push_str(key);
        text.push('=');
        if value.is_empty() || value.contains(|c: char| c.is_whitespace() || c == '"' || c == '\'') {
            text.push('"');
            for c in value.chars() {
                if c == '"' || c == '\\' {
                    text.push('\\');
                }
                text.push(c);
            }
            text.push('"');
        } else {
            text.push_str(value);
        }
    }
    text
}
