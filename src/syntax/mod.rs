pub mod lexer;
mod source;

pub use lexer::{Keyword, MagicConstant, Token, TokenKind};
pub use source::{Files, Memory, Source, TokenSource};
