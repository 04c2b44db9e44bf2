//! Lets `peg` grammars run over a `logos` token stream.
//!
//! Positions are token indices; [`Parse::position_repr`] turns them back into
//! byte offsets so parse errors can be located in the source text.

use peg::{Parse, ParseElem, ParseSlice, RuleResult};

use crate::util::span::{Span, Spanned};

pub struct SpannedToks<'a, T: 'a> {
    pub src: &'a str,
    pub toks: Vec<Spanned<T>>,
}

impl<'a, T: 'a> SpannedToks<'a, T> {
    /// Byte span covered by the tokens `start..end`. An empty range sits at
    /// the start of token `start`, or at the end of the input.
    pub fn byte_span(&self, start: usize, end: usize) -> Span {
        let first = self.byte_offset(start);
        if end <= start {
            return first..first;
        }
        let last = self
            .toks
            .get(end - 1)
            .map(|t| t.span.end)
            .unwrap_or(self.src.len());
        first..last
    }

    fn byte_offset(&self, pos: usize) -> usize {
        match self.toks.get(pos) {
            Some(t) => t.span.start,
            None => self.src.len(),
        }
    }
}

impl<'a, T> Parse for SpannedToks<'a, T> {
    type PositionRepr = usize;

    fn start<'input>(&'input self) -> usize {
        0
    }

    fn is_eof<'input>(&'input self, pos: usize) -> bool {
        pos >= self.toks.len()
    }

    fn position_repr<'input>(&'input self, pos: usize) -> Self::PositionRepr {
        self.byte_offset(pos)
    }
}

impl<'input, T: 'input + Copy> ParseElem<'input> for SpannedToks<'input, T> {
    type Element = T;

    fn parse_elem(&'input self, pos: usize) -> RuleResult<T> {
        match self.toks.get(pos) {
            Some(c) => RuleResult::Matched(pos + 1, c.val),
            None => RuleResult::Failed,
        }
    }
}

impl<'input, T: 'input> ParseSlice<'input> for SpannedToks<'input, T> {
    type Slice = &'input str;
    fn parse_slice(&'input self, p1: usize, p2: usize) -> &'input str {
        &self.src[self.byte_span(p1, p2)]
    }
}
