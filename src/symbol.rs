//! The symbol catalog of the opening hours language.
//!
//! `Symbol` is plain data. What a symbol *is* (terminal, weekday, marker)
//! is answered by the lookup functions below rather than by the enum.

use chrono::Weekday;
use crate::grammar::GrammarSymbol;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
  Monday,
  Tuesday,
  Wednesday,
  Thursday,
  Friday,
  Saturday,
  Sunday,
  Time,
  RangeIndicator,
  ScheduleSeparator,
  WhiteSpace,
  EndOfInput,
  Epsilon,
  Unknown,

  OpeningHours,
  Schedule,
  MoreSchedules,
  WeekdayExpression,
  Weekday,
  WeekdayRange,
  TimeRange,
}

pub const START: Symbol = Symbol::OpeningHours;

/// Weekday terminals in ISO order, Monday first.
pub const WEEKDAYS: [Symbol; 7] = [
  Symbol::Monday,
  Symbol::Tuesday,
  Symbol::Wednesday,
  Symbol::Thursday,
  Symbol::Friday,
  Symbol::Saturday,
  Symbol::Sunday,
];

const DAYS: [Weekday; 7] = [
  Weekday::Mon,
  Weekday::Tue,
  Weekday::Wed,
  Weekday::Thu,
  Weekday::Fri,
  Weekday::Sat,
  Weekday::Sun,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flags {
  pub terminal: bool,
  pub weekday: bool,
  pub epsilon: bool,
  pub end_of_input: bool,
  pub unknown: bool,
}

const NONTERMINAL: Flags = Flags {
  terminal: false,
  weekday: false,
  epsilon: false,
  end_of_input: false,
  unknown: false,
};

const TERMINAL: Flags = Flags {
  terminal: true,
  ..NONTERMINAL
};

pub fn flags(sym: Symbol) -> Flags {
  use Symbol as S;

  match sym {
    S::Monday | S::Tuesday | S::Wednesday | S::Thursday | S::Friday
      | S::Saturday | S::Sunday => Flags { weekday: true, ..TERMINAL },
    S::Time | S::RangeIndicator | S::ScheduleSeparator | S::WhiteSpace =>
      TERMINAL,
    S::EndOfInput => Flags { end_of_input: true, ..TERMINAL },
    S::Epsilon => Flags { epsilon: true, ..TERMINAL },
    S::Unknown => Flags { unknown: true, ..TERMINAL },
    S::OpeningHours | S::Schedule | S::MoreSchedules | S::WeekdayExpression
      | S::Weekday | S::WeekdayRange | S::TimeRange => NONTERMINAL,
  }
}

pub fn is_terminal(sym: Symbol) -> bool {
  flags(sym).terminal
}

pub fn is_weekday(sym: Symbol) -> bool {
  flags(sym).weekday
}

pub fn weekday(sym: Symbol) -> Option<Weekday> {
  WEEKDAYS.iter()
    .position(|&s| s == sym)
    .map(|ix| DAYS[ix])
}

pub fn weekday_symbol(day: Weekday) -> Symbol {
  WEEKDAYS[day.num_days_from_monday() as usize]
}

/// ISO 8601 ordinal of a weekday terminal, 1 (Monday) to 7 (Sunday).
pub fn iso_ordinal(sym: Symbol) -> Option<u32> {
  weekday(sym).map(|day| day.number_from_monday())
}

pub fn from_iso_ordinal(ordinal: u32) -> Option<Weekday> {
  match ordinal {
    1..=7 => Some(DAYS[ordinal as usize - 1]),
    _ => None,
  }
}

impl GrammarSymbol for Symbol {
  const EPSILON: Self = Symbol::Epsilon;
  const END_OF_INPUT: Self = Symbol::EndOfInput;

  fn is_terminal(self) -> bool {
    flags(self).terminal
  }

  fn is_unknown(self) -> bool {
    flags(self).unknown
  }
}
