use std::rc::Rc;

use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, PUNCTUATION_LOOKUP};

pub type RegexHandler<'src> = fn(&mut Lexer<'src>, &Regex);

pub struct RegexPattern<'src> {
    regex: Regex,
    handler: RegexHandler<'src>,
}

pub struct Lexer<'src> {
    patterns: Vec<RegexPattern<'src>>,
    tokens: Vec<Token<'src>>,
    source: &'src str,
    pos: usize,
    file: Rc<String>,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str, file: Option<String>) -> Lexer<'src> {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            pos: 0,
            tokens: vec![],
            patterns: vec![
                RegexPattern {
                    regex: Regex::new("[a-zA-Z_][a-zA-Z0-9_]*").unwrap(),
                    handler: identifier_handler,
                },
                RegexPattern {
                    regex: Regex::new("[0-9]+").unwrap(),
                    handler: integer_handler,
                },
                RegexPattern {
                    regex: Regex::new("\\s+").unwrap(),
                    handler: whitespace_handler,
                },
                RegexPattern {
                    regex: Regex::new("[;=()+*/-]").unwrap(),
                    handler: punctuation_handler,
                },
            ],
            source,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token<'src>) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> char {
        self.remainder().chars().next().unwrap_or('\0')
    }

    /// The untokenized tail of the source buffer.
    pub fn remainder(&self) -> &'src str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn span_here(&self, len: usize) -> Span {
        Span {
            start: Position(self.pos as u32, Rc::clone(&self.file)),
            end: Position((self.pos + len) as u32, Rc::clone(&self.file)),
        }
    }
}

fn identifier_handler<'src>(lexer: &mut Lexer<'src>, regex: &Regex) {
    let text = regex.find(lexer.remainder()).unwrap().as_str();

    let span = lexer.span_here(text.len());
    lexer.push(MK_TOKEN!(TokenKind::Identifier, text, span));
    lexer.advance_n(text.len());
}

fn integer_handler<'src>(lexer: &mut Lexer<'src>, regex: &Regex) {
    let text = regex.find(lexer.remainder()).unwrap().as_str();

    let span = lexer.span_here(text.len());
    lexer.push(MK_TOKEN!(TokenKind::Integer, text, span));
    lexer.advance_n(text.len());
}

fn whitespace_handler<'src>(lexer: &mut Lexer<'src>, regex: &Regex) {
    // Whitespace is kept as a token rather than skipped, so the stream still
    // covers every byte of the source. The parser filters it out.
    let text = regex.find(lexer.remainder()).unwrap().as_str();

    let span = lexer.span_here(text.len());
    lexer.push(MK_TOKEN!(TokenKind::Whitespace, text, span));
    lexer.advance_n(text.len());
}

fn punctuation_handler<'src>(lexer: &mut Lexer<'src>, regex: &Regex) {
    let text = regex.find(lexer.remainder()).unwrap().as_str();

    // The punctuation pattern and the lookup table cover the same characters
    let kind = *PUNCTUATION_LOOKUP.get(text).unwrap();

    let span = lexer.span_here(text.len());
    lexer.push(MK_TOKEN!(kind, text, span));
    lexer.advance_n(text.len());
}

/// Tokenizes the whole source buffer in a single left-to-right pass.
///
/// Every byte of the source ends up in exactly one token (whitespace
/// included), so concatenating the `text` of each token reproduces the
/// source. A trailing `EOF` token with an empty lexeme is appended. The
/// first unrecognised character aborts the pass.
pub fn tokenize<'src>(source: &'src str, file: Option<String>) -> Result<Vec<Token<'src>>, Error> {
    let mut lex = Lexer::new(source, file);

    while !lex.at_eof() {
        let mut matched = false;

        for i in 0..lex.patterns.len() {
            let match_here = lex.patterns[i].regex.find(lex.remainder());

            if let Some(found) = match_here {
                if found.start() == 0 {
                    let handler = lex.patterns[i].handler;
                    let regex = lex.patterns[i].regex.clone();
                    handler(&mut lex, &regex);
                    matched = true;
                    break;
                }
            }
        }

        if !matched {
            return Err(Error::new(
                ErrorImpl::UnrecognisedCharacter { character: lex.at() },
                Position(lex.pos as u32, Rc::clone(&lex.file)),
            ));
        }
    }

    let eof_span = lex.span_here(0);
    lex.push(MK_TOKEN!(TokenKind::EOF, &source[source.len()..], eof_span));
    Ok(lex.tokens)
}
