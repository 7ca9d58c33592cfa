use std::hash::{Hash, Hasher};
use log::debug;
use crate::bnf::{self, Bnf, TermId};
use crate::error::GrammarError;
use crate::grammar::{Grammar, GrammarSymbol, Rule};
use crate::token::Token;
use self::table::ParsingTable;
use self::token_set::TokenSet;

mod sets;
mod table;
mod token_set;

/// A table-driven LL(1) recognizer for one grammar.
///
/// Everything is computed in `new` and read-only afterwards, so a parser
/// can be shared between threads and reused for any number of inputs.
pub struct Parser<S> {
  grammar: Grammar<S>,
  bnf: Bnf<S>,
  first: Vec<TokenSet>,
  follow: Vec<TokenSet>,
  table: ParsingTable,
}

/// Outcome of `Parser::validate`.
///
/// Two results are equal when they agree on validity; the explanation is
/// informational only.
#[derive(Debug, Clone)]
pub struct Validation {
  valid: bool,
  explanation: Option<String>,
}

impl Validation {
  pub fn accepted() -> Self {
    Validation {
      valid: true,
      explanation: None,
    }
  }

  pub fn rejected() -> Self {
    Validation {
      valid: false,
      explanation: None,
    }
  }

  pub fn rejected_with(explanation: impl Into<String>) -> Self {
    Validation {
      valid: false,
      explanation: Some(explanation.into()),
    }
  }

  pub fn is_valid(&self) -> bool {
    self.valid
  }

  pub fn explanation(&self) -> Option<&str> {
    self.explanation.as_deref()
  }
}

impl PartialEq for Validation {
  fn eq(&self, other: &Self) -> bool {
    self.valid == other.valid
  }
}

impl Eq for Validation {}

impl Hash for Validation {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.valid.hash(state);
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expected {
  Term(TermId),
  Nonterm(bnf::NontermId),
}

impl<S: GrammarSymbol> Parser<S> {
  /// Builds the FIRST/FOLLOW sets and the parsing table. Fails if the
  /// grammar is not LL(1).
  pub fn new(grammar: Grammar<S>) -> Result<Self, GrammarError> {
    let bnf = Bnf::from(&grammar);
    let first = sets::gen_first(&bnf);
    let follow = sets::gen_follow(&bnf, &first);
    let table = table::gen_table(&grammar, &bnf, &first, &follow)?;

    for (ix, set) in first.iter().enumerate() {
      if set.is_empty() {
        debug!("nonterminal {:?} derives no terminal string",
          bnf.nonterms[ix]);
      }
    }
    debug!("built LL(1) table: {} rules, {} nonterminals, {} terminals",
      grammar.rules().len(), bnf.nonterms.len(), bnf.terms.len());

    Ok(Parser {
      grammar,
      bnf,
      first,
      follow,
      table,
    })
  }

  pub fn grammar(&self) -> &Grammar<S> {
    &self.grammar
  }

  /// FIRST set of a single symbol. A terminal is its own FIRST set; a
  /// symbol unknown to the grammar has an empty one.
  pub fn first_set(&self, sym: S) -> Vec<S> {
    if sym.is_terminal() {
      return vec![sym];
    }
    match self.bnf.nonterm_id(sym) {
      Some(id) => self.symbols(&self.first[id.0 as usize]),
      None => vec![],
    }
  }

  /// FIRST set of a symbol sequence, `EPSILON` included when every symbol
  /// of it is nullable.
  pub fn first_of_sequence(&self, syms: &[S]) -> Vec<S> {
    let mut result = Vec::new();
    for &sym in syms {
      let first = self.first_set(sym);
      let nullable = first.contains(&S::EPSILON);
      for t in first {
        if t != S::EPSILON && !result.contains(&t) {
          result.push(t);
        }
      }
      if !nullable {
        return result;
      }
    }
    result.insert(0, S::EPSILON);
    result
  }

  /// FOLLOW set of a nonterminal, `None` for symbols the grammar doesn't
  /// define.
  pub fn follow_set(&self, nonterm: S) -> Option<Vec<S>> {
    self.bnf.nonterm_id(nonterm)
      .map(|id| self.symbols(&self.follow[id.0 as usize]))
  }

  /// The rule predicted for `nonterm` on `lookahead`, `None` for a syntax
  /// error cell.
  pub fn table_entry(&self, nonterm: S, lookahead: S) -> Option<&Rule<S>> {
    let nt = self.bnf.nonterm_id(nonterm)?;
    let t = self.bnf.term_id(lookahead)?;
    self.table.get(nt, t).map(|ix| &self.grammar.rules()[ix])
  }

  fn symbols(&self, set: &TokenSet) -> Vec<S> {
    set.iter().map(|id| self.bnf.term(id)).collect()
  }

  /// Runs the pushdown automaton over `tokens`.
  ///
  /// An empty input is accepted. Any token with an unknown symbol rejects
  /// the input up front, with an explanation naming its lexeme.
  pub fn validate(&self, tokens: &[Token<S>]) -> Validation {
    if tokens.is_empty() {
      return Validation::accepted();
    }
    if let Some(token) = tokens.iter().find(|t| t.symbol.is_unknown()) {
      debug!("rejecting unknown token {:?}", token.lexeme);
      return Validation::rejected_with(format!("Unknown token '{}'",
        token.lexeme().unwrap_or_default()));
    }

    let mut input = Vec::with_capacity(tokens.len() + 1);
    for token in tokens {
      match self.bnf.term_id(token.symbol) {
        Some(id) if token.symbol.is_terminal() => input.push(id),
        _ => {
          debug!("{:?} is not a terminal of the grammar", token.symbol);
          return Validation::rejected();
        }
      }
    }
    if input.last() != Some(&bnf::END_OF_INPUT) {
      input.push(bnf::END_OF_INPUT);
    }

    let mut stack = vec![
      Expected::Term(bnf::END_OF_INPUT),
      Expected::Nonterm(self.bnf.start),
    ];
    let mut pos = 0;
    loop {
      let (top, next) = match (stack.last(), input.get(pos)) {
        (Some(&top), Some(&next)) => (top, next),
        _ => return Validation::rejected(),
      };

      match top {
        Expected::Term(t) if t == next => {
          if t == bnf::END_OF_INPUT {
            return Validation::accepted();
          }
          stack.pop();
          pos += 1;
        }
        Expected::Term(t) => {
          debug!("expected {:?}, found {:?} at token {}",
            self.bnf.term(t), self.bnf.term(next), pos);
          return Validation::rejected();
        }
        Expected::Nonterm(nt) => {
          let prod_ix = match self.table.get(nt, next) {
            Some(ix) => ix,
            None => {
              debug!("no rule for {:?} on {:?} at token {}",
                self.bnf.nonterm(nt), self.bnf.term(next), pos);
              return Validation::rejected();
            }
          };
          stack.pop();
          stack.extend(self.bnf.prods[prod_ix].symbols.iter().rev()
            .map(|sym| match *sym {
              bnf::Symbol::Term(id) => Expected::Term(id),
              bnf::Symbol::Nonterm(id) => Expected::Nonterm(id),
            }));
        }
      }
    }
  }
}
