use std::fmt::Display;
use std::str::FromStr;

use crate::error::PresenterError;

/// The arguments a compiled reference passes to a presenter method.
///
/// The compiler guarantees the shape matches the method's [`Capability`],
/// so `required_*` accessors only fail when a handler asks for something
/// its capability never declared.
///
/// [`Capability`]: crate::Capability
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Arguments<'a> {
    positional: Option<&'a str>,
    keywords: &'a [(String, String)],
}

impl<'a> Arguments<'a> {
    #[must_use]
    pub fn new(positional: Option<&'a str>, keywords: &'a [(String, String)]) -> Self {
        Self {
            positional,
            keywords,
        }
    }

    #[must_use]
    pub fn positional(&self) -> Option<&'a str> {
        self.positional
    }

    pub fn required_positional(&self) -> Result<&'a str, PresenterError> {
        self.positional.ok_or(PresenterError::MissingPositional)
    }

    #[must_use]
    pub fn keyword(&self, name: &str) -> Option<&'a str> {
        self.keywords
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn required_keyword(&self, name: &str) -> Result<&'a str, PresenterError> {
        self.keyword(name)
            .ok_or_else(|| PresenterError::MissingKeyword(name.to_string()))
    }

    /// Parse a required keyword argument, e.g. `number=3` as an `i64`.
    pub fn parse_keyword<T>(&self, name: &str) -> Result<T, PresenterError>
    where
        T: FromStr,
        T::Err: Display,
    {
        let raw = self.required_keyword(name)?;
        parse(name, raw)
    }

    /// Parse the required positional argument.
    pub fn parse_positional<T>(&self) -> Result<T, PresenterError>
    where
        T: FromStr,
        T::Err: Display,
    {
        let raw = self.required_positional()?;
        parse("parameter", raw)
    }

    pub fn keywords(&self) -> impl Iterator<Item = (&'a str, &'a str)> {
        self.keywords
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

fn parse<T>(name: &str, raw: &str) -> Result<T, PresenterError>
where
    T: FromStr,
    T::Err: Display,
{
    raw.parse().map_err(|err: T::Err| PresenterError::InvalidArgument {
        name: name.to_string(),
        value: raw.to_string(),
        reason: err.to_string(),
    })
}
