use log::trace;
use crate::error::LocaleError;
use crate::locale::LocalizedTokens;
use crate::symbol::Symbol;
use crate::token::Token;

/// Splits opening hours text into tokens of one locale.
#[derive(Debug, Clone)]
pub struct Tokenizer {
  tokens: LocalizedTokens,
}

impl Tokenizer {
  pub fn new(tokens: LocalizedTokens) -> Self {
    Tokenizer { tokens }
  }

  pub fn english() -> Result<Self, LocaleError> {
    Ok(Self::new(LocalizedTokens::english()?))
  }

  pub fn localized_tokens(&self) -> &LocalizedTokens {
    &self.tokens
  }

  /// Grows a window one character at a time from the last boundary and
  /// emits a token as soon as the window matches any pattern. Text left
  /// over at the end becomes a single `Unknown` token. Whitespace is
  /// dropped.
  pub fn tokenize(&self, input: &str) -> Vec<Token<Symbol>> {
    let mut tokens = Vec::new();
    let mut start = 0;

    for (i, c) in input.char_indices() {
      let end = i + c.len_utf8();
      if let Some(token) = self.tokens.match_candidate(&input[start..end]) {
        trace!("{}..{}: {}", start, end, token);
        tokens.push(token);
        start = end;
      }
    }
    if start < input.len() {
      trace!("{}..: unknown", start);
      tokens.push(Token::new(Symbol::Unknown, &input[start..]));
    }

    tokens.retain(|t| t.symbol != Symbol::WhiteSpace);
    tokens
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;
  use crate::symbol::Symbol::*;

  fn tokenize(input: &str) -> Vec<Token<Symbol>> {
    Tokenizer::english().unwrap().tokenize(input)
  }

  fn t(symbol: Symbol, lexeme: &str) -> Token<Symbol> {
    Token::new(symbol, lexeme)
  }

  #[test]
  fn english_tokenizer() {
    let tokenizer = Tokenizer::english().unwrap();
    let names = tokenizer.localized_tokens()
      .patterns()
      .take(7)
      .map(|(p, _)| p)
      .collect::<Vec<_>>();

    assert_eq!(names, vec!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
    assert_eq!(tokenizer.tokenize("Sun"), vec![t(Sunday, "Sun")]);
  }

  #[test]
  fn one_single_day() {
    assert_eq!(tokenize("Mon 10:00-18:00"), vec![
      t(Monday, "Mon"),
      t(Time, "10:00"),
      t(RangeIndicator, "-"),
      t(Time, "18:00"),
    ]);
  }

  #[test]
  fn two_day_ranges() {
    assert_eq!(tokenize("Mon-Wed 10:00-18:00, Thu-Sun 12:00-20:00"), vec![
      t(Monday, "Mon"),
      t(RangeIndicator, "-"),
      t(Wednesday, "Wed"),
      t(Time, "10:00"),
      t(RangeIndicator, "-"),
      t(Time, "18:00"),
      t(ScheduleSeparator, ","),
      t(Thursday, "Thu"),
      t(RangeIndicator, "-"),
      t(Sunday, "Sun"),
      t(Time, "12:00"),
      t(RangeIndicator, "-"),
      t(Time, "20:00"),
    ]);
  }

  #[test]
  fn surrounding_spaces() {
    assert_eq!(tokenize(" Fri -  Sun   09:00  - 22:00  "), vec![
      t(Friday, "Fri"),
      t(RangeIndicator, "-"),
      t(Sunday, "Sun"),
      t(Time, "09:00"),
      t(RangeIndicator, "-"),
      t(Time, "22:00"),
    ]);
  }

  #[test]
  fn empty_input() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("   ").is_empty());
  }

  #[test]
  fn unmatched_tail_is_one_unknown_token() {
    assert_eq!(tokenize("Foo 10:00-12:00"), vec![
      t(Unknown, "Foo 10:00-12:00"),
    ]);
    assert_eq!(tokenize("Mon 10:00-1"), vec![
      t(Monday, "Mon"),
      t(Time, "10:00"),
      t(RangeIndicator, "-"),
      t(Unknown, "1"),
    ]);
  }

  #[test]
  fn first_matching_window_wins() {
    // "to" (Thursday) commits before "tors" can grow.
    let tokenizer = Tokenizer::new(
      LocalizedTokens::new(["mån", "tis", "ons", "to", "fre", "lör", "sön"])
        .unwrap());

    assert_eq!(tokenizer.tokenize("tors"), vec![
      t(Thursday, "to"),
      t(Unknown, "rs"),
    ]);
  }

  #[test]
  fn multibyte_weekdays() {
    let tokenizer = Tokenizer::new(LocalizedTokens::for_locale("sv").unwrap());

    assert_eq!(tokenizer.tokenize("mån-lör 10:00-16:00"), vec![
      t(Monday, "mån"),
      t(RangeIndicator, "-"),
      t(Saturday, "lör"),
      t(Time, "10:00"),
      t(RangeIndicator, "-"),
      t(Time, "16:00"),
    ]);
  }
}
