use std::fmt::{self, Display, Formatter};
use std::hash::{Hash, Hasher};
use chrono::{NaiveTime, Weekday};
use crate::symbol;

/// Opening hours of one day: closed, or open from `open` until `close`.
///
/// Equality and hashing look at the `(open, close)` pair only.
#[derive(Debug, Clone, Copy)]
pub struct DailySchedule {
  open: Option<NaiveTime>,
  close: Option<NaiveTime>,
  closed: bool,
}

impl DailySchedule {
  pub fn new(open: NaiveTime, close: NaiveTime) -> Self {
    DailySchedule {
      open: Some(open),
      close: Some(close),
      closed: false,
    }
  }

  pub fn closed() -> Self {
    DailySchedule {
      open: None,
      close: None,
      closed: true,
    }
  }

  pub fn open_time(&self) -> Option<NaiveTime> {
    self.open
  }

  pub fn close_time(&self) -> Option<NaiveTime> {
    self.close
  }

  pub fn is_closed(&self) -> bool {
    self.closed
  }
}

impl PartialEq for DailySchedule {
  fn eq(&self, other: &Self) -> bool {
    (self.open, self.close) == (other.open, other.close)
  }
}

impl Eq for DailySchedule {}

impl Hash for DailySchedule {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.open.hash(state);
    self.close.hash(state);
  }
}

impl Display for DailySchedule {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match (self.closed, self.open, self.close) {
      (false, Some(open), Some(close)) => write!(f, "Open {}-{}",
        open.format("%H:%M"), close.format("%H:%M")),
      _ => f.write_str("Closed"),
    }
  }
}

/// Opening hours for every day of the week.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WeeklySchedule {
  /// indexed by days from Monday
  days: [DailySchedule; 7],
}

impl WeeklySchedule {
  pub fn builder() -> Builder {
    Builder::new()
  }

  pub fn get(&self, day: Weekday) -> &DailySchedule {
    &self.days[day.num_days_from_monday() as usize]
  }

  /// Days with their schedules, Monday first.
  pub fn iter(&self) -> impl Iterator<Item = (Weekday, &DailySchedule)> {
    self.days.iter()
      .enumerate()
      .filter_map(|(i, schedule)| symbol::from_iso_ordinal(i as u32 + 1)
        .map(|day| (day, schedule)))
  }
}

/// Starts with every day closed.
#[derive(Debug, Clone)]
pub struct Builder {
  days: [DailySchedule; 7],
}

impl Builder {
  pub fn new() -> Self {
    Builder {
      days: [DailySchedule::closed(); 7],
    }
  }

  /// Replaces whatever was set for `day` before.
  pub fn add(mut self, day: Weekday, schedule: DailySchedule) -> Self {
    self.days[day.num_days_from_monday() as usize] = schedule;
    self
  }

  pub fn build(self) -> WeeklySchedule {
    WeeklySchedule {
      days: self.days,
    }
  }
}

impl Default for Builder {
  fn default() -> Self {
    Self::new()
  }
}
