use chrono::NaiveTime;
use log::debug;
use crate::error::CompileError;
use crate::schedule::{DailySchedule, WeeklySchedule};
use crate::symbol::{self, Symbol};
use crate::token::Token;

/// Turns a validated token stream into a weekly schedule.
///
/// Validity is not re-checked; tokens that would leave a clause without a
/// weekday or a time are reported as errors instead of being guessed at.
/// Each clause overwrites what earlier clauses set for the same days, and
/// a descending day range (`Sun-Mon`) sets nothing.
pub fn compile(tokens: &[Token<Symbol>]) -> Result<WeeklySchedule, CompileError> {
  let mut builder = WeeklySchedule::builder();
  let mut days: Option<(u32, u32)> = None;
  let mut start_time: Option<NaiveTime> = None;

  for token in tokens {
    if let Some(ordinal) = symbol::iso_ordinal(token.symbol) {
      days = Some(match days {
        None => (ordinal, ordinal),
        Some((first, _)) => (first, ordinal),
      });
      continue;
    }
    if token.symbol != Symbol::Time {
      continue;
    }

    let time = parse_time(token)?;
    let open = match start_time.take() {
      None => {
        start_time = Some(time);
        continue;
      }
      Some(open) => open,
    };

    let (first, last) = days.take()
      .ok_or_else(|| CompileError::MissingWeekday(format!("{}-{}",
        open.format("%H:%M"), time.format("%H:%M"))))?;
    debug!("days {}..={} open {}-{}", first, last, open, time);
    for day in (first..=last).filter_map(symbol::from_iso_ordinal) {
      builder = builder.add(day, DailySchedule::new(open, time));
    }
  }

  if days.is_some() || start_time.is_some() {
    return Err(CompileError::IncompleteClause);
  }
  Ok(builder.build())
}

fn parse_time(token: &Token<Symbol>) -> Result<NaiveTime, CompileError> {
  let lexeme = token.lexeme().ok_or(CompileError::MissingLexeme)?;
  NaiveTime::parse_from_str(lexeme, "%H:%M")
    .map_err(|_| CompileError::InvalidTime(lexeme.to_owned()))
}
