use log::trace;
use crate::bnf::*;
use crate::error::GrammarError;
use crate::grammar::{Grammar, GrammarSymbol};
use super::sets::compute_first_for_symbols;
use super::token_set::TokenSet;

/// Predictive parsing table: (nonterminal, lookahead) -> production index.
pub(super) struct ParsingTable {
  num_terms: usize,
  /// `nonterms * terms` cells, row-major by nonterminal
  cells: Box<[Option<u32>]>,
}

impl ParsingTable {
  pub(super) fn get(&self, nonterm: NontermId, term: TermId) -> Option<usize> {
    self.cells[self.index(nonterm, term)].map(|ix| ix as usize)
  }

  fn index(&self, nonterm: NontermId, term: TermId) -> usize {
    nonterm.0 as usize * self.num_terms + term.0 as usize
  }
}

pub(super) fn gen_table<S: GrammarSymbol>(
  grammar: &Grammar<S>,
  bnf: &Bnf<S>,
  first: &[TokenSet],
  follow: &[TokenSet],
) -> Result<ParsingTable, GrammarError> {
  let num_terms = bnf.terms.len();
  let mut table = ParsingTable {
    num_terms,
    cells: vec![None; bnf.nonterms.len() * num_terms].into_boxed_slice(),
  };

  let mut buf = TokenSet::new(num_terms);
  for (prod_ix, prod) in bnf.prods.iter().enumerate() {
    buf.clear();
    compute_first_for_symbols(&mut buf, first, &prod.symbols);

    for term in buf.iter().filter(|&t| t != EPSILON) {
      set_cell(grammar, bnf, &mut table, prod.nonterm_id, term, prod_ix)?;
    }
    if buf.contains(EPSILON) {
      for term in follow[prod.nonterm_id.0 as usize].iter() {
        set_cell(grammar, bnf, &mut table, prod.nonterm_id, term, prod_ix)?;
      }
    }
  }

  Ok(table)
}

fn set_cell<S: GrammarSymbol>(
  grammar: &Grammar<S>,
  bnf: &Bnf<S>,
  table: &mut ParsingTable,
  nonterm: NontermId,
  term: TermId,
  prod_ix: usize,
) -> Result<(), GrammarError> {
  let ix = table.index(nonterm, term);
  match table.cells[ix] {
    Some(existing) if existing as usize != prod_ix => {
      Err(GrammarError::Conflict {
        nonterminal: format!("{:?}", bnf.nonterm(nonterm)),
        lookahead: format!("{:?}", bnf.term(term)),
        existing: grammar.rules()[existing as usize].to_string(),
        conflicting: grammar.rules()[prod_ix].to_string(),
      })
    }
    _ => {
      trace!("table[{:?}][{:?}] = {}",
        bnf.nonterm(nonterm), bnf.term(term), grammar.rules()[prod_ix]);
      table.cells[ix] = Some(prod_ix as u32);
      Ok(())
    }
  }
}
