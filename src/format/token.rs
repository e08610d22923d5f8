use crate::fields::{FieldHalf, FieldKind, pad_two_digits};

/// A single format character standing for one date or time component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// `Y`, the year at its natural width.
    FullYear,
    /// `y`, the last two digits of the year.
    ShortYear,
    /// `m`
    Month,
    /// `d`
    Day,
    /// `H`
    Hour,
    /// `h`, rendered exactly like `H`.
    HourAlt,
    /// `i`
    Minutes,
    /// `s`
    Seconds,
}

impl Token {
    pub const ALL: &'static [Token] = &[
        Token::FullYear,
        Token::ShortYear,
        Token::Month,
        Token::Day,
        Token::Hour,
        Token::HourAlt,
        Token::Minutes,
        Token::Seconds,
    ];

    pub fn from_char(c: char) -> Option<Token> {
        Token::ALL.iter().copied().find(|token| token.as_char() == c)
    }

    pub fn as_char(&self) -> char {
        match self {
            Token::FullYear => 'Y',
            Token::ShortYear => 'y',
            Token::Month => 'm',
            Token::Day => 'd',
            Token::Hour => 'H',
            Token::HourAlt => 'h',
            Token::Minutes => 'i',
            Token::Seconds => 's',
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Token::FullYear | Token::ShortYear => FieldKind::Year,
            Token::Month => FieldKind::Month,
            Token::Day => FieldKind::Day,
            Token::Hour | Token::HourAlt => FieldKind::Hours,
            Token::Minutes => FieldKind::Minutes,
            Token::Seconds => FieldKind::Seconds,
        }
    }

    pub fn half(&self) -> FieldHalf {
        self.kind().half()
    }

    /// Formats a stored field value the way this token prints it.
    pub fn render(&self, value: &str) -> String {
        match self {
            Token::FullYear => value.to_string(),
            Token::ShortYear => {
                let digits: Vec<char> = value.chars().collect();
                if digits.len() >= 2 {
                    digits[digits.len() - 2..].iter().collect()
                } else {
                    pad_two_digits(value)
                }
            }
            Token::Month => value.to_string(),
            Token::Day | Token::Hour | Token::HourAlt | Token::Minutes | Token::Seconds => {
                pad_two_digits(value)
            }
        }
    }
}

impl TryFrom<char> for Token {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Token::from_char(c).ok_or(c)
    }
}
