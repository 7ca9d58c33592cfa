use std::fmt::{self, Debug, Display, Formatter};

/// A lexeme classified as a grammar symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token<S> {
  pub symbol: S,
  /// `None` for tokens synthesized by the parser
  pub lexeme: Option<String>,
}

impl<S> Token<S> {
  pub fn new(symbol: S, lexeme: impl Into<String>) -> Self {
    Token {
      symbol,
      lexeme: Some(lexeme.into()),
    }
  }

  pub fn synthetic(symbol: S) -> Self {
    Token {
      symbol,
      lexeme: None,
    }
  }

  pub fn lexeme(&self) -> Option<&str> {
    self.lexeme.as_deref()
  }
}

impl<S: Debug> Display for Token<S> {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match &self.lexeme {
      Some(lexeme) => write!(f, "{{{:?} {}}}", self.symbol, lexeme),
      None => write!(f, "{{{:?}}}", self.symbol),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;
  use crate::symbol::Symbol;

  #[test]
  fn equality_covers_lexeme() {
    assert_eq!(Token::new(Symbol::Time, "10:00"), Token::new(Symbol::Time, "10:00"));
    assert_ne!(Token::new(Symbol::Time, "10:00"), Token::new(Symbol::Time, "11:00"));
    assert_ne!(Token::new(Symbol::EndOfInput, ""), Token::synthetic(Symbol::EndOfInput));
  }

  #[test]
  fn display() {
    assert_eq!(Token::new(Symbol::Monday, "Mon").to_string(), "{Monday Mon}".to_owned());
    assert_eq!(Token::synthetic(Symbol::EndOfInput).to_string(), "{EndOfInput}".to_owned());
  }
}
