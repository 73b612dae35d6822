//! This is the Lexing or Tokenization module, split into three submodules.
//!
//! - [tokens] specifies the data types making up the tokens of HASM, along
//!   with the keyword and instruction tables.
//! - [literals] holds the escape table and turns literal text into values.
//! - [lexer] contains the scanning engine and the errors that can occur
//!   during this phase.
pub mod lexer;
pub mod literals;
pub mod tokens;
