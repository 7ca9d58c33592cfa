use std::fmt::{self, Debug, Display, Formatter};
use std::hash::Hash;
use indexmap::IndexSet;
use crate::error::GrammarError;
use crate::symbol::Symbol;

/// A grammar symbol the LL(1) engine can work with.
///
/// The engine needs nothing more than telling terminals from nonterminals
/// and naming the two markers it inserts itself.
pub trait GrammarSymbol: Copy + Eq + Hash + Debug {
  /// Right hand side of an empty production.
  const EPSILON: Self;
  /// Appended to every input, expected below the start symbol.
  const END_OF_INPUT: Self;

  fn is_terminal(self) -> bool;

  /// Tokens carrying an unknown symbol are rejected before parsing.
  fn is_unknown(self) -> bool {
    false
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rule<S> {
  lhs: S,
  /// non-empty; `[EPSILON]` is the empty production
  rhs: Vec<S>,
}

impl<S: GrammarSymbol> Rule<S> {
  pub fn new(lhs: S, rhs: impl Into<Vec<S>>) -> Result<Self, GrammarError> {
    let rhs = rhs.into();
    if lhs.is_terminal() {
      return Err(GrammarError::TerminalOnLeft(format!("{:?}", lhs)));
    }
    if rhs.is_empty() {
      return Err(GrammarError::EmptyRightSide(format!("{:?}", lhs)));
    }
    if rhs.len() > 1 && rhs.contains(&S::EPSILON) {
      return Err(GrammarError::MisplacedEpsilon(format!("{:?}", lhs)));
    }
    Ok(Rule { lhs, rhs })
  }

  pub fn lhs(&self) -> S {
    self.lhs
  }

  pub fn rhs(&self) -> &[S] {
    &self.rhs
  }

  pub fn is_epsilon(&self) -> bool {
    self.rhs == [S::EPSILON]
  }
}

impl<S: Debug> Display for Rule<S> {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{:?} ->", self.lhs)?;
    for sym in &self.rhs {
      write!(f, " {:?}", sym)?;
    }
    Ok(())
  }
}

#[derive(Debug, Clone)]
pub struct Grammar<S> {
  start: S,
  rules: Vec<Rule<S>>,
}

impl<S: GrammarSymbol> Grammar<S> {
  pub fn new(start: S, rules: Vec<Rule<S>>) -> Result<Self, GrammarError> {
    if rules.is_empty() {
      return Err(GrammarError::NoRules);
    }
    if start.is_terminal() {
      return Err(GrammarError::StartIsTerminal(format!("{:?}", start)));
    }

    let defined = rules.iter().map(|r| r.lhs).collect::<IndexSet<_>>();
    let undefined = std::iter::once(start)
      .chain(rules.iter().flat_map(|r| r.rhs.iter().copied()))
      .find(|sym| !sym.is_terminal() && !defined.contains(sym));
    if let Some(sym) = undefined {
      return Err(GrammarError::UndefinedNonterminal(format!("{:?}", sym)));
    }

    Ok(Grammar { start, rules })
  }

  pub fn start(&self) -> S {
    self.start
  }

  pub fn rules(&self) -> &[Rule<S>] {
    &self.rules
  }
}

/// The opening hours language:
///
/// ```text
/// OpeningHours -> Schedule
/// Schedule -> WeekdayExpression TimeRange MoreSchedules
/// MoreSchedules -> ScheduleSeparator Schedule | ε
/// WeekdayExpression -> Weekday WeekdayRange
/// Weekday -> Monday | Tuesday | ... | Sunday
/// WeekdayRange -> RangeIndicator Weekday | ε
/// TimeRange -> Time RangeIndicator Time
/// ```
pub fn default_grammar() -> Result<Grammar<Symbol>, GrammarError> {
  use Symbol as S;

  let mut rules = vec![
    Rule::new(S::OpeningHours, [S::Schedule])?,
    Rule::new(S::Schedule,
      [S::WeekdayExpression, S::TimeRange, S::MoreSchedules])?,
    Rule::new(S::MoreSchedules, [S::ScheduleSeparator, S::Schedule])?,
    Rule::new(S::MoreSchedules, [S::Epsilon])?,
    Rule::new(S::WeekdayExpression, [S::Weekday, S::WeekdayRange])?,
  ];
  for &day in &crate::symbol::WEEKDAYS {
    rules.push(Rule::new(S::Weekday, [day])?);
  }
  rules.push(Rule::new(S::WeekdayRange, [S::RangeIndicator, S::Weekday])?);
  rules.push(Rule::new(S::WeekdayRange, [S::Epsilon])?);
  rules.push(Rule::new(S::TimeRange, [S::Time, S::RangeIndicator, S::Time])?);

  Grammar::new(crate::symbol::START, rules)
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;
  use crate::symbol::Symbol as S;

  #[test]
  fn terminal_on_left() {
    assert_eq!(
      Rule::new(S::Time, [S::Monday]),
      Err(GrammarError::TerminalOnLeft("Time".to_owned())));
  }

  #[test]
  fn empty_right_side() {
    assert_eq!(
      Rule::new(S::Weekday, Vec::<S>::new()),
      Err(GrammarError::EmptyRightSide("Weekday".to_owned())));
  }

  #[test]
  fn misplaced_epsilon() {
    assert_eq!(
      Rule::new(S::WeekdayRange, [S::Epsilon, S::Monday]),
      Err(GrammarError::MisplacedEpsilon("WeekdayRange".to_owned())));
  }

  #[test]
  fn undefined_nonterminal() {
    let rules = vec![
      Rule::new(S::OpeningHours, [S::Schedule]).unwrap(),
    ];
    assert_eq!(
      Grammar::new(S::OpeningHours, rules).unwrap_err(),
      GrammarError::UndefinedNonterminal("Schedule".to_owned()));
  }

  #[test]
  fn start_must_be_nonterminal() {
    let rules = vec![
      Rule::new(S::Weekday, [S::Monday]).unwrap(),
    ];
    assert_eq!(
      Grammar::new(S::Monday, rules).unwrap_err(),
      GrammarError::StartIsTerminal("Monday".to_owned()));
    assert_eq!(
      Grammar::<S>::new(S::Weekday, vec![]).unwrap_err(),
      GrammarError::NoRules);
  }

  #[test]
  fn default_grammar_rules() {
    let grammar = default_grammar().unwrap();
    let rules = grammar.rules().iter()
      .map(|r| r.to_string())
      .collect::<Vec<_>>();
    let rules = rules.iter().map(String::as_str).collect::<Vec<_>>();

    assert_eq!(grammar.start(), S::OpeningHours);
    assert_eq!(rules, vec![
      "OpeningHours -> Schedule",
      "Schedule -> WeekdayExpression TimeRange MoreSchedules",
      "MoreSchedules -> ScheduleSeparator Schedule",
      "MoreSchedules -> Epsilon",
      "WeekdayExpression -> Weekday WeekdayRange",
      "Weekday -> Monday",
      "Weekday -> Tuesday",
      "Weekday -> Wednesday",
      "Weekday -> Thursday",
      "Weekday -> Friday",
      "Weekday -> Saturday",
      "Weekday -> Sunday",
      "WeekdayRange -> RangeIndicator Weekday",
      "WeekdayRange -> Epsilon",
      "TimeRange -> Time RangeIndicator Time",
    ]);
    assert!(grammar.rules()[3].is_epsilon());
  }
}
