pub mod compiler;
pub mod error;
pub mod grammar;
pub mod lexer;
pub mod locale;
pub mod opening_hours;
pub mod parser;
pub mod schedule;
pub mod symbol;
pub mod token;
mod bnf;

pub use compiler::compile;
pub use error::{CompileError, Error, GrammarError, LocaleError};
pub use grammar::{Grammar, GrammarSymbol, Rule};
pub use lexer::Tokenizer;
pub use locale::LocalizedTokens;
pub use opening_hours::OpeningHours;
pub use parser::{Parser, Validation};
pub use schedule::{DailySchedule, WeeklySchedule};
pub use symbol::Symbol;
pub use token::Token;

pub fn build<S: GrammarSymbol>(grammar: Grammar<S>) -> Result<Parser<S>, GrammarError> {
  Parser::new(grammar)
}
