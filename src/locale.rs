use indexmap::map::{Entry, IndexMap};
use log::debug;
use regex::RegexSet;
use crate::error::LocaleError;
use crate::symbol::{Symbol, WEEKDAYS};
use crate::token::Token;

const ENGLISH: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const FINNISH: [&str; 7] = ["ma", "ti", "ke", "to", "pe", "la", "su"];
const SWEDISH: [&str; 7] = ["mån", "tis", "ons", "tors", "fre", "lör", "sön"];
const GERMAN: [&str; 7] = ["Mo.", "Di.", "Mi.", "Do.", "Fr.", "Sa.", "So."];

/// Patterns every locale shares, after the weekday names.
const INVARIANT: [(&str, Symbol); 4] = [
  ("-", Symbol::RangeIndicator),
  ("[0-9][0-9]:[0-9][0-9]", Symbol::Time),
  (r"\s", Symbol::WhiteSpace),
  (",", Symbol::ScheduleSeparator),
];

/// The lexical patterns of one locale.
///
/// A candidate matches a pattern only if the whole candidate does; when
/// several patterns match, the earliest one wins.
#[derive(Debug, Clone)]
pub struct LocalizedTokens {
  patterns: IndexMap<String, Symbol>,
  set: RegexSet,
}

impl LocalizedTokens {
  /// Builds the table from weekday abbreviations, Monday first.
  pub fn new<T: AsRef<str>>(weekdays: [T; 7]) -> Result<Self, LocaleError> {
    let mut patterns = IndexMap::new();
    for (i, (name, &sym)) in weekdays.iter().zip(WEEKDAYS.iter()).enumerate() {
      let name = name.as_ref();
      if name.is_empty() {
        return Err(LocaleError::EmptyWeekdayName(i + 1));
      }
      insert_unique(&mut patterns, regex::escape(name), sym, name)?;
    }
    for &(pattern, sym) in INVARIANT.iter() {
      insert_unique(&mut patterns, pattern.to_owned(), sym, pattern)?;
    }

    let set = RegexSet::new(patterns.keys().map(|p| format!("^(?:{})$", p)))?;
    // a weekday name must match its own pattern and nothing else
    for (i, name) in weekdays.iter().enumerate() {
      let name = name.as_ref();
      if set.matches(name).iter().any(|ix| ix != i) {
        return Err(LocaleError::DuplicatePattern(name.to_owned()));
      }
    }
    Ok(LocalizedTokens {
      patterns,
      set,
    })
  }

  pub fn english() -> Result<Self, LocaleError> {
    Self::new(ENGLISH)
  }

  /// Looks up built-in weekday names by language tag (`fi`, `sv-SE`,
  /// `de_DE`, ...).
  pub fn for_locale(tag: &str) -> Result<Self, LocaleError> {
    let language = tag.split(|c: char| c == '-' || c == '_')
      .next()
      .unwrap_or_default()
      .to_ascii_lowercase();
    let names = match language.as_str() {
      "en" => ENGLISH,
      "fi" => FINNISH,
      "sv" => SWEDISH,
      "de" => GERMAN,
      _ => return Err(LocaleError::Unsupported(tag.to_owned())),
    };
    debug!("using {} weekday names for locale `{}`", language, tag);
    Self::new(names)
  }

  pub fn patterns(&self) -> impl Iterator<Item = (&str, Symbol)> {
    self.patterns.iter().map(|(p, &sym)| (p.as_str(), sym))
  }

  pub fn match_candidate(&self, candidate: &str) -> Option<Token<Symbol>> {
    self.set.matches(candidate)
      .iter()
      .next()
      .and_then(|ix| self.patterns.get_index(ix))
      .map(|(_, &sym)| Token::new(sym, candidate))
  }
}

fn insert_unique(
  patterns: &mut IndexMap<String, Symbol>,
  pattern: String,
  sym: Symbol,
  source: &str,
) -> Result<(), LocaleError> {
  match patterns.entry(pattern) {
    Entry::Occupied(_) => Err(LocaleError::DuplicatePattern(source.to_owned())),
    Entry::Vacant(e) => {
      e.insert(sym);
      Ok(())
    }
  }
}
