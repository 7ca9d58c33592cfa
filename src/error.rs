use thiserror::Error;

/// Errors raised while building a grammar or its parsing table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
  #[error("terminal symbol {0} cannot appear at the left hand side of a rule")]
  TerminalOnLeft(String),

  #[error("rule for {0} has an empty right hand side")]
  EmptyRightSide(String),

  #[error("epsilon must be the only symbol of a right hand side in rule for {0}")]
  MisplacedEpsilon(String),

  #[error("grammar has no rules")]
  NoRules,

  #[error("start symbol {0} is a terminal")]
  StartIsTerminal(String),

  #[error("nonterminal {0} has no production")]
  UndefinedNonterminal(String),

  #[error("the given grammar is not LL(1): `{existing}` and `{conflicting}` both \
    expand {nonterminal} on {lookahead}")]
  Conflict {
    nonterminal: String,
    lookahead: String,
    existing: String,
    conflicting: String,
  },
}

#[derive(Debug, Error)]
pub enum LocaleError {
  #[error("no weekday names available for locale `{0}`")]
  Unsupported(String),

  #[error("weekday name #{0} is empty")]
  EmptyWeekdayName(usize),

  #[error("`{0}` is matched by more than one token pattern")]
  DuplicatePattern(String),

  #[error("invalid token pattern: {0}")]
  Pattern(#[from] regex::Error),
}

/// Errors raised when compiling a token stream that does not satisfy the
/// opening hours grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
  #[error("`{0}` is not a valid time of day")]
  InvalidTime(String),

  #[error("time token has no text")]
  MissingLexeme,

  #[error("time range {0} has no preceding weekday")]
  MissingWeekday(String),

  #[error("input ends in the middle of a schedule")]
  IncompleteClause,
}

#[derive(Debug, Error)]
pub enum Error {
  #[error(transparent)]
  Grammar(#[from] GrammarError),

  #[error(transparent)]
  Locale(#[from] LocaleError),

  #[error(transparent)]
  Compile(#[from] CompileError),

  #[error("invalid opening hours{}", suffix(.explanation))]
  Invalid {
    explanation: Option<String>,
  },
}

fn suffix(explanation: &Option<String>) -> String {
  match explanation {
    Some(explanation) => format!(": {}", explanation),
    None => String::new(),
  }
}
