use crate::fields::{FieldHalf, FieldValues};
use crate::format::token::Token;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormatSegment {
    Token(Token),
    Literal(char),
}

/// A token layout such as `Y-m-d H:i:s`.
///
/// Every character of the alphabet `Y y m d H h i s` is a token, anything else
/// is printed literally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct FormatString {
    source: String,
    segments: Vec<FormatSegment>,
}

impl FormatString {
    pub fn new(source: &str) -> Self {
        let segments = source
            .chars()
            .map(|c| match Token::from_char(c) {
                Some(token) => FormatSegment::Token(token),
                None => FormatSegment::Literal(c),
            })
            .collect();
        FormatString {
            source: source.to_string(),
            segments,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn tokens(&self) -> impl Iterator<Item = Token> + '_ {
        self.segments.iter().filter_map(|segment| match segment {
            FormatSegment::Token(token) => Some(*token),
            FormatSegment::Literal(_) => None,
        })
    }

    pub fn has_half(&self, half: FieldHalf) -> bool {
        self.tokens().any(|token| token.half() == half)
    }

    /// Splits a datetime layout on its first space into the date and time layouts.
    pub fn split_halves(&self) -> Option<(FormatString, FormatString)> {
        self.source
            .split_once(' ')
            .map(|(date, time)| (FormatString::new(date), FormatString::new(time)))
    }

    /// Substitutes every token with the matching field value.
    ///
    /// Works on token positions, so a substituted value is never scanned again.
    /// Tokens without a value are printed as their own character.
    pub fn render(&self, values: &FieldValues) -> String {
        let mut output = String::with_capacity(self.source.len() + 8);
        for segment in &self.segments {
            match segment {
                FormatSegment::Literal(c) => output.push(*c),
                FormatSegment::Token(token) => match values.get(&token.kind()) {
                    Some(value) => output.push_str(&token.render(value)),
                    None => output.push(token.as_char()),
                },
            }
        }
        output
    }
}

impl From<String> for FormatString {
    fn from(source: String) -> Self {
        FormatString::new(&source)
    }
}

impl From<&str> for FormatString {
    fn from(source: &str) -> Self {
        FormatString::new(source)
    }
}

impl From<FormatString> for String {
    fn from(format: FormatString) -> Self {
        format.source
    }
}

impl FromStr for FormatString {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(FormatString::new(s))
    }
}

impl fmt::Display for FormatString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
