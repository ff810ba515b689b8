//! Text preprocessing: phrase → ordered tokens.
//!
//! - **token.rs**: `Token`, its `TokenKind`, and the punctuation classifier
//! - **tokenizer.rs**: splitting a phrase into upper-cased words and marks

pub mod token;
pub mod tokenizer;

pub use token::{classify, punctuation_class, PunctuationClass, Token, TokenKind};
pub use tokenizer::tokenize;
