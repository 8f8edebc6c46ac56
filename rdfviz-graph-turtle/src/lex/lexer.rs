//! Source text to tokens.
//!
//! The whole document is tokenized before parsing starts; the first bad
//! character stops it with a line/column and the offending line.

use std::sync::Arc;

use winnow::combinator::{alt, opt, preceded};
use winnow::error::{ContextError, ErrMode};
use winnow::stream::{AsChar, Location, Stream};
use winnow::token::{any, one_of, take_till, take_while};
use winnow::{LocatingSlice, ModalResult, Parser};

use super::chars::*;
use super::token::{NumberKind, Token, TokenKind};
use crate::error::{line_col, snippet, Result, TurtleError};

type Input<'a> = LocatingSlice<&'a str>;

/// Tokenize a Turtle document. The last token is always `Eof`.
pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    let mut input = Input::new(source);
    let mut tokens = Vec::new();

    loop {
        trivia(&mut input);
        let start = input.current_token_start();
        if input.is_empty() {
            tokens.push(Token::new(TokenKind::Eof, start..start));
            return Ok(tokens);
        }
        let kind = token(&mut input).map_err(|_| lex_error(source, start))?;
        tokens.push(Token::new(kind, start..input.current_token_start()));
    }
}

fn lex_error(source: &str, at: usize) -> TurtleError {
    let (line, col) = line_col(source, at);
    let what = match source[at..].chars().next() {
        Some('"' | '\'') => "unterminated or invalid string literal".to_string(),
        Some('<') => "invalid or unterminated IRI".to_string(),
        Some(c) if c.is_ascii() => format!("unexpected character '{c}'"),
        Some(c) => format!("unexpected character '{c}' (U+{:04X})", c as u32),
        None => "unexpected end of input".to_string(),
    };
    TurtleError::lexer(source, at, format!("{what}{}", snippet(source, line, col)))
}

fn backtrack<T>() -> ModalResult<T> {
    Err(ErrMode::Backtrack(ContextError::new()))
}

/// Whitespace and `#` comments.
fn trivia(input: &mut Input<'_>) {
    loop {
        let skipped: ModalResult<&str> = alt((
            take_while(1.., is_ws),
            ('#', take_till(0.., ['\r', '\n'])).take(),
        ))
        .parse_next(input);
        if skipped.is_err() {
            break;
        }
    }
}

fn token(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    let Some(next) = input.chars().next() else {
        return backtrack();
    };
    match next {
        '<' => iri(input),
        '"' | '\'' => string(input),
        '@' => at_keyword(input),
        '_' => blank_label(input),
        '[' => alt((anon, punct)).parse_next(input),
        '(' => alt((nil, punct)).parse_next(input),
        '^' => "^^".value(TokenKind::Carets).parse_next(input),
        '+' | '-' | '0'..='9' => number(input),
        '.' => alt((number, punct)).parse_next(input),
        _ => alt((name, punct)).parse_next(input),
    }
}

fn iri(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    '<'.parse_next(input)?;
    let mut text = String::new();
    loop {
        let chunk: &str = take_while(0.., is_iri_char).parse_next(input)?;
        text.push_str(chunk);
        let c: char = any.parse_next(input)?;
        match c {
            '>' => return Ok(TokenKind::Iri(text.into())),
            '\\' => text.push(uchar(input)?),
            _ => return backtrack(),
        }
    }
}

/// `uXXXX` or `UXXXXXXXX` after a backslash.
fn uchar(input: &mut Input<'_>) -> ModalResult<char> {
    let marker: char = one_of(['u', 'U']).parse_next(input)?;
    hex_char(input, if marker == 'u' { 4 } else { 8 })
}

fn hex_char(input: &mut Input<'_>, width: usize) -> ModalResult<char> {
    take_while(width..=width, AsChar::is_hex_digit)
        .verify_map(|hex: &str| u32::from_str_radix(hex, 16).ok().and_then(char::from_u32))
        .parse_next(input)
}

/// `'...'`, `"..."` and their triple-quoted long forms.
fn string(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    let quote: char = one_of(['"', '\'']).parse_next(input)?;
    let long = opt((quote, quote)).parse_next(input)?.is_some();

    let mut text = String::new();
    loop {
        let chunk: &str = take_till(0.., |c: char| {
            c == quote || c == '\\' || (!long && matches!(c, '\n' | '\r'))
        })
        .parse_next(input)?;
        text.push_str(chunk);

        let c: char = any.parse_next(input)?;
        if c == '\\' {
            text.push(string_escape(input)?);
        } else if c != quote {
            // line break inside a short string
            return backtrack();
        } else if !long || opt((quote, quote)).parse_next(input)?.is_some() {
            return Ok(TokenKind::String(text.into()));
        } else {
            text.push(c);
        }
    }
}

fn string_escape(input: &mut Input<'_>) -> ModalResult<char> {
    if input.starts_with(['u', 'U']) {
        return uchar(input);
    }
    let c: char = any.parse_next(input)?;
    match c {
        't' => Ok('\t'),
        'b' => Ok('\u{8}'),
        'n' => Ok('\n'),
        'r' => Ok('\r'),
        'f' => Ok('\u{c}'),
        '"' | '\'' | '\\' => Ok(c),
        _ => backtrack(),
    }
}

/// `@prefix`, `@base`, or a language tag.
fn at_keyword(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    let word: &str = preceded(
        '@',
        take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '-'),
    )
    .parse_next(input)?;
    Ok(match word {
        "prefix" => TokenKind::Prefix { sparql: false },
        "base" => TokenKind::Base { sparql: false },
        tag => TokenKind::LangTag(Arc::from(tag)),
    })
}

fn blank_label(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    "_:".parse_next(input)?;
    let label = dotted_name(input, |c| is_pn_chars_u(c) || c.is_ascii_digit());
    if label.is_empty() {
        return backtrack();
    }
    Ok(TokenKind::BlankLabel(Arc::from(label)))
}

fn anon(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    ('[', take_while(0.., is_ws), ']')
        .value(TokenKind::Anon)
        .parse_next(input)
}

fn nil(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    ('(', take_while(0.., is_ws), ')')
        .value(TokenKind::Nil)
        .parse_next(input)
}

/// `prefix:local`, `prefix:`, `:local`, or one of the bare keywords.
fn name(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    let prefix = dotted_name(input, is_pn_prefix_start);
    if opt(':').parse_next(input)?.is_none() {
        return keyword(prefix);
    }
    let local = pn_local(input);
    Ok(TokenKind::PName {
        prefix: Arc::from(prefix),
        local: Arc::from(local),
    })
}

fn keyword(word: &str) -> ModalResult<TokenKind> {
    match word {
        "a" => Ok(TokenKind::A),
        "true" => Ok(TokenKind::Boolean(true)),
        "false" => Ok(TokenKind::Boolean(false)),
        _ if word.eq_ignore_ascii_case("prefix") => Ok(TokenKind::Prefix { sparql: true }),
        _ if word.eq_ignore_ascii_case("base") => Ok(TokenKind::Base { sparql: true }),
        _ => backtrack(),
    }
}

/// Consume a prefix or blank label: `first` for the opening char, then
/// PN_CHARS with dots allowed inside but not at the end.
fn dotted_name<'a>(input: &mut Input<'a>, first: fn(char) -> bool) -> &'a str {
    let mut len = 0;
    for (i, c) in input.char_indices() {
        let ok = if i == 0 { first(c) } else { c == '.' || is_pn_chars(c) };
        if !ok {
            break;
        }
        if c != '.' {
            len = i + c.len_utf8();
        }
    }
    input.next_slice(len)
}

/// Local part of a prefixed name, `\` escapes removed and `%xx` kept.
/// Empty when there is none.
fn pn_local(input: &mut Input<'_>) -> String {
    let len = pn_local_len(&input[..]);
    let raw: &str = input.next_slice(len);
    let mut local = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            local.extend(chars.next());
        } else {
            local.push(c);
        }
    }
    local
}

fn pn_local_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut end = 0;
    let mut pos = 0;
    while let Some(c) = s[pos..].chars().next() {
        let step = match c {
            '%' if bytes
                .get(pos + 1..pos + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit)) =>
            {
                3
            }
            '\\' => match s[pos + 1..].chars().next() {
                Some(e) if is_local_escape(e) => 1 + e.len_utf8(),
                _ => break,
            },
            // a dot only counts once something follows it
            '.' if pos > 0 => {
                pos += 1;
                continue;
            }
            c if pos == 0 && is_pn_local_start(c) => c.len_utf8(),
            c if pos > 0 && (is_pn_chars(c) || c == ':') => c.len_utf8(),
            _ => break,
        };
        pos += step;
        end = pos;
    }
    end
}

/// INTEGER, DECIMAL or DOUBLE, kept as written.
fn number(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    let Some((len, kind)) = number_len(input.as_bytes()) else {
        return backtrack();
    };
    let text: &str = input.next_slice(len);
    Ok(TokenKind::Number(Arc::from(text), kind))
}

fn number_len(b: &[u8]) -> Option<(usize, NumberKind)> {
    let digits = |from: usize| b[from..].iter().take_while(|c| c.is_ascii_digit()).count();

    let mut i = usize::from(matches!(b.first(), Some(b'+' | b'-')));
    let whole = digits(i);
    i += whole;

    let mut kind = NumberKind::Integer;
    if b.get(i) == Some(&b'.') {
        let fraction = digits(i + 1);
        // `30.` is an integer followed by the statement dot
        if fraction > 0 || (whole > 0 && exponent_len(&b[i + 1..]) > 0) {
            i += 1 + fraction;
            kind = NumberKind::Decimal;
        }
    }
    if whole == 0 && kind == NumberKind::Integer {
        return None;
    }

    let exponent = exponent_len(&b[i..]);
    if exponent > 0 {
        i += exponent;
        kind = NumberKind::Double;
    }
    Some((i, kind))
}

fn exponent_len(b: &[u8]) -> usize {
    if !matches!(b.first(), Some(b'e' | b'E')) {
        return 0;
    }
    let sign = usize::from(matches!(b.get(1), Some(b'+' | b'-')));
    let digits = b[1 + sign..].iter().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        0
    } else {
        1 + sign + digits
    }
}

fn punct(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    let c: char = any.parse_next(input)?;
    let kind = match c {
        '.' => TokenKind::Dot,
        ',' => TokenKind::Comma,
        ';' => TokenKind::Semicolon,
        '[' => TokenKind::LBracket,
        ']' => TokenKind::RBracket,
        '(' => TokenKind::LParen,
        ')' => TokenKind::RParen,
        _ => return backtrack(),
    };
    Ok(kind)
}
