//! Character classes from the Turtle grammar.
//!
//! Productions PN_CHARS_BASE, PN_CHARS_U and PN_CHARS (shared with SPARQL)
//! decide what may appear in prefixes, local names and blank node labels.

/// `PN_CHARS_BASE`: ASCII letters plus the Unicode letter ranges.
pub fn is_pn_chars_base(c: char) -> bool {
    matches!(c,
        'A'..='Z' |
        'a'..='z' |
        '\u{00C0}'..='\u{00D6}' |
        '\u{00D8}'..='\u{00F6}' |
        '\u{00F8}'..='\u{02FF}' |
        '\u{0370}'..='\u{037D}' |
        '\u{037F}'..='\u{1FFF}' |
        '\u{200C}'..='\u{200D}' |
        '\u{2070}'..='\u{218F}' |
        '\u{2C00}'..='\u{2FEF}' |
        '\u{3001}'..='\u{D7FF}' |
        '\u{F900}'..='\u{FDCF}' |
        '\u{FDF0}'..='\u{FFFD}' |
        '\u{10000}'..='\u{EFFFF}'
    )
}

/// `PN_CHARS_U ::= PN_CHARS_BASE | '_'`
pub fn is_pn_chars_u(c: char) -> bool {
    is_pn_chars_base(c) || c == '_'
}

/// `PN_CHARS ::= PN_CHARS_U | '-' | [0-9] | #x00B7 | [#x0300-#x036F] | [#x203F-#x2040]`
pub fn is_pn_chars(c: char) -> bool {
    is_pn_chars_u(c)
        || c == '-'
        || c.is_ascii_digit()
        || c == '\u{00B7}'
        || matches!(c, '\u{0300}'..='\u{036F}' | '\u{203F}'..='\u{2040}')
}

/// First character of a `PN_PREFIX`.
pub fn is_pn_prefix_start(c: char) -> bool {
    is_pn_chars_base(c)
}

/// First character of a `PN_LOCAL` (escapes and `%` handled by the caller).
pub fn is_pn_local_start(c: char) -> bool {
    is_pn_chars_u(c) || c == ':' || c.is_ascii_digit()
}

/// Turtle whitespace.
pub fn is_ws(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Characters allowed unescaped inside `<...>`.
pub fn is_iri_char(c: char) -> bool {
    !matches!(c, '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\' | '\x00'..='\x20')
}

/// Characters that may follow `\` in a local name.
pub fn is_local_escape(c: char) -> bool {
    "_~.-!$&'()*+,;=/?#@%".contains(c)
}
