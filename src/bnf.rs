use indexmap::IndexSet;
use crate::grammar::*;

/// A grammar lowered to dense ids, the form the set and table computations
/// work on.
pub(crate) struct Bnf<S> {
  /// `EPSILON` and `END_OF_INPUT` first, then terminals in order of first
  /// appearance.
  pub(crate) terms: IndexSet<S>,
  /// in order of first appearance as a left hand side
  pub(crate) nonterms: IndexSet<S>,
  pub(crate) start: NontermId,
  /// one per grammar rule, same order
  pub(crate) prods: Vec<Production>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Symbol {
  Term(TermId),
  Nonterm(NontermId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct TermId(pub(crate) u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NontermId(pub(crate) u32);

pub(crate) const EPSILON: TermId = TermId(0);
pub(crate) const END_OF_INPUT: TermId = TermId(1);

#[derive(Debug, Clone)]
pub(crate) struct Production {
  pub(crate) nonterm_id: NontermId,
  /// empty for an epsilon production
  pub(crate) symbols: Vec<Symbol>,
}

impl<S: GrammarSymbol> From<&Grammar<S>> for Bnf<S> {
  fn from(grammar: &Grammar<S>) -> Bnf<S> {
    let nonterms = grammar.rules().iter()
      .map(|rule| rule.lhs())
      .collect::<IndexSet<_>>();

    let mut terms = IndexSet::new();
    terms.insert(S::EPSILON);
    terms.insert(S::END_OF_INPUT);

    let mut prods = Vec::with_capacity(grammar.rules().len());
    for rule in grammar.rules() {
      let symbols = if rule.is_epsilon() {
        vec![]
      } else {
        rule.rhs().iter()
          .map(|&sym| gen_sym(&mut terms, &nonterms, sym))
          .collect()
      };
      prods.push(Production {
        nonterm_id: nonterm_id(&nonterms, rule.lhs()),
        symbols,
      });
    }

    Bnf {
      start: nonterm_id(&nonterms, grammar.start()),
      terms,
      nonterms,
      prods,
    }
  }
}

fn gen_sym<S: GrammarSymbol>(
  terms: &mut IndexSet<S>,
  nonterms: &IndexSet<S>,
  sym: S,
) -> Symbol {
  if sym.is_terminal() {
    let (ix, _) = terms.insert_full(sym);
    Symbol::Term(TermId(ix as u32))
  } else {
    Symbol::Nonterm(nonterm_id(nonterms, sym))
  }
}

// `Grammar::new` guarantees every nonterminal has a production.
fn nonterm_id<S: GrammarSymbol>(nonterms: &IndexSet<S>, sym: S) -> NontermId {
  NontermId(nonterms.get_index_of(&sym).unwrap_or_default() as u32)
}

impl<S: GrammarSymbol> Bnf<S> {
  pub(crate) fn term_id(&self, sym: S) -> Option<TermId> {
    self.terms.get_index_of(&sym).map(|ix| TermId(ix as u32))
  }

  pub(crate) fn nonterm_id(&self, sym: S) -> Option<NontermId> {
    self.nonterms.get_index_of(&sym).map(|ix| NontermId(ix as u32))
  }

  pub(crate) fn term(&self, id: TermId) -> S {
    self.terms[id.0 as usize]
  }

  pub(crate) fn nonterm(&self, id: NontermId) -> S {
    self.nonterms[id.0 as usize]
  }
}
