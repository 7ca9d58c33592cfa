use crate::compiler;
use crate::error::{CompileError, Error};
use crate::grammar::default_grammar;
use crate::lexer::Tokenizer;
use crate::locale::LocalizedTokens;
use crate::parser::{Parser, Validation};
use crate::schedule::WeeklySchedule;
use crate::symbol::Symbol;
use crate::token::Token;

/// Tokenizer, validator and compiler for one locale, ready to be shared.
pub struct OpeningHours {
  tokenizer: Tokenizer,
  parser: Parser<Symbol>,
}

impl OpeningHours {
  /// English weekday names.
  pub fn new() -> Result<Self, Error> {
    Self::with_tokens(LocalizedTokens::english()?)
  }

  pub fn with_locale(tag: &str) -> Result<Self, Error> {
    Self::with_tokens(LocalizedTokens::for_locale(tag)?)
  }

  pub fn with_tokens(tokens: LocalizedTokens) -> Result<Self, Error> {
    Ok(OpeningHours {
      tokenizer: Tokenizer::new(tokens),
      parser: Parser::new(default_grammar()?)?,
    })
  }

  pub fn parser(&self) -> &Parser<Symbol> {
    &self.parser
  }

  pub fn tokenize(&self, input: &str) -> Vec<Token<Symbol>> {
    self.tokenizer.tokenize(input)
  }

  pub fn validate(&self, tokens: &[Token<Symbol>]) -> Validation {
    self.parser.validate(tokens)
  }

  /// See `compiler::compile`; `tokens` should have passed `validate`.
  pub fn compile(
    &self,
    tokens: &[Token<Symbol>],
  ) -> Result<WeeklySchedule, CompileError> {
    compiler::compile(tokens)
  }

  /// Tokenizes, validates and compiles `input` in one go.
  pub fn parse(&self, input: &str) -> Result<WeeklySchedule, Error> {
    let tokens = self.tokenize(input);
    let validation = self.validate(&tokens);
    if !validation.is_valid() {
      return Err(Error::Invalid {
        explanation: validation.explanation().map(str::to_owned),
      });
    }
    Ok(self.compile(&tokens)?)
  }
}
