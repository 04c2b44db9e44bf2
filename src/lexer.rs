use logos::{Lexer, Logos};
use thiserror::Error;

use crate::util::{
    peg_logos::SpannedToks,
    span::{Span, Spanned},
};

#[derive(Debug, PartialEq, Clone, Default, Error)]
pub enum LexingError {
    #[default]
    #[error("unexpected character")]
    Other,
}

pub type LexerError = Spanned<LexingError>;

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\f]+")]
#[logos(error = LexingError)]
pub enum Token<'a> {
    #[token("Digraph")]
    Digraph,
    #[token("{")]
    BraceL,
    #[token("}")]
    BraceR,
    #[token("->")]
    Arrow,
    #[token(";")]
    Semicolon,

    // Node labels are opaque: anything up to the next blank or delimiter.
    #[regex(r"[^ \t\f\r\n{};]+")]
    Ident(&'a str),

    #[regex("\n|\r\n")]
    NewLine,
}

pub fn lex_plain(s: &str) -> impl Iterator<Item = (Result<Token<'_>, LexingError>, Span)> + '_ {
    let lex: Lexer<Token<'_>> = Token::lexer(s);
    lex.spanned()
}

pub fn lex(src: &str) -> Result<SpannedToks<'_, Token<'_>>, LexerError> {
    let toks = lex_plain(src)
        .map(|(tok, span)| match tok {
            Ok(tok) => Ok(Spanned::new(tok, span)),
            Err(e) => Err(Spanned::new(e, span)),
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(SpannedToks { src, toks })
}

impl<'a> Token<'a> {
    pub fn to_str(&self) -> &'static str {
        match self {
            Token::Digraph => "Digraph",
            Token::BraceL => "{",
            Token::BraceR => "}",
            Token::Arrow => "->",
            Token::Semicolon => ";",
            Token::Ident(_) => "node label",
            Token::NewLine => "end of line",
        }
    }
}
