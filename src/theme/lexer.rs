//! Lexer for the theme stylesheet, feeding the lalrpop parser

use logos::Logos;
use thiserror::Error;

use crate::theme::types::{Distance, DistanceUnit};

#[derive(Error, Debug, Clone, PartialEq, Default)]
pub enum LexerError {
    #[default]
    #[error("invalid token")]
    InvalidToken,
}

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(error = LexerError)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"//[^\n]*")]
#[logos(skip r"/\*([^*]|\*[^/])*\*/")]
pub enum Token {
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(":")]
    Colon,
    #[token(";")]
    Semi,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("*")]
    Star,

    // logos takes the longest match, so "10px" lexes as one distance token
    // rather than a number followed by an ident.
    #[regex(r"-?[0-9]+(\.[0-9]+)?(px|em|mm|%)", |lex| parse_distance(lex.slice()))]
    Distance(Distance),

    #[regex(r"-?[0-9]+(\.[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),

    #[regex(r#""[^"]*""#, |lex| {
        let s = lex.slice();
        s[1..s.len() - 1].to_string()
    })]
    String(String),

    #[regex(r"[A-Za-z_][A-Za-z0-9_-]*", |lex| lex.slice().to_string())]
    Ident(String),
}

fn parse_distance(slice: &str) -> Option<Distance> {
    let split = slice.find(|c: char| c.is_ascii_alphabetic() || c == '%')?;
    let value: f64 = slice[..split].parse().ok()?;
    let unit = DistanceUnit::from_suffix(&slice[split..])?;
    Some(Distance { value, unit })
}

pub type Spanned<Tok, Loc, Error> = Result<(Loc, Tok, Loc), Error>;

/// Adapts the logos token stream to the spanned triples lalrpop expects.
pub struct Lexer<'input> {
    token_stream: logos::SpannedIter<'input, Token>,
}

impl<'input> Lexer<'input> {
    pub fn new(input: &'input str) -> Self {
        Self {
            token_stream: Token::lexer(input).spanned(),
        }
    }
}

impl<'input> Iterator for Lexer<'input> {
    type Item = Spanned<Token, usize, LexerError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.token_stream.next().map(|(token, span)| match token {
            Ok(token) => Ok((span.start, token, span.end)),
            Err(err) => Err(err),
        })
    }
}
