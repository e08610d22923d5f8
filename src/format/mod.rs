pub mod codec;
pub mod error;
mod format_string;
pub use self::format_string::FormatString;
mod token;
pub use self::token::Token;
