use log::trace;
use crate::bnf::*;
use super::token_set::TokenSet;

/// FIRST sets of all nonterminals, `EPSILON` included for nullable ones.
pub(super) fn gen_first<S>(
  bnf: &Bnf<S>,
) -> Vec<TokenSet> {
  let mut buf = TokenSet::new(bnf.terms.len());
  let mut first = vec![buf.clone(); bnf.nonterms.len()];

  for round in 0.. {
    let mut changed = false;
    for prod in &bnf.prods {
      buf.clear();
      compute_first_for_symbols(&mut buf, &first, &prod.symbols);
      changed |= first[prod.nonterm_id.0 as usize].union_with(&buf);
    }
    if !changed {
      trace!("FIRST sets converged after {} rounds", round + 1);
      break;
    }
  }

  first
}

/// FIRST of a symbol sequence. `EPSILON` is added iff every symbol is
/// nullable, so the empty sequence yields `{EPSILON}`.
pub(super) fn compute_first_for_symbols(
  result: &mut TokenSet,
  first: &[TokenSet],
  symbols: &[Symbol],
) {
  for sym in symbols {
    match *sym {
      Symbol::Term(id) => {
        result.insert(id);
        return;
      }
      Symbol::Nonterm(id) => {
        let set = &first[id.0 as usize];
        result.union_without(set, EPSILON);
        if !set.contains(EPSILON) {
          return;
        }
      }
    }
  }

  result.insert(EPSILON);
}

pub(super) fn gen_follow<S>(
  bnf: &Bnf<S>,
  first: &[TokenSet],
) -> Vec<TokenSet> {
  let num_terms = bnf.terms.len();
  let mut buf = TokenSet::new(num_terms);
  let mut follow = vec![buf.clone(); bnf.nonterms.len()];
  follow[bnf.start.0 as usize] = TokenSet::from_token(num_terms, END_OF_INPUT);

  for round in 0.. {
    let mut changed = false;
    for prod in &bnf.prods {
      let lhs = prod.nonterm_id.0 as usize;
      for (i, sym) in prod.symbols.iter().enumerate() {
        let id = match *sym {
          Symbol::Nonterm(id) => id.0 as usize,
          Symbol::Term(_) => continue,
        };

        buf.clear();
        compute_first_for_symbols(&mut buf, first, &prod.symbols[i + 1..]);
        changed |= follow[id].union_without(&buf, EPSILON);

        if buf.contains(EPSILON) && id != lhs {
          let inherited = follow[lhs].clone();
          changed |= follow[id].union_with(&inherited);
        }
      }
    }
    if !changed {
      trace!("FOLLOW sets converged after {} rounds", round + 1);
      break;
    }
  }

  follow
}
