//! Relative IRI resolution (RFC 3986 section 5.2).

/// Components of an IRI reference; fragment split off first, then query.
struct Parts<'a> {
    scheme: Option<&'a str>,
    authority: Option<&'a str>,
    path: &'a str,
    query: Option<&'a str>,
    fragment: Option<&'a str>,
}

impl<'a> Parts<'a> {
    fn parse(reference: &'a str) -> Self {
        let (rest, fragment) = split_off(reference, '#');
        let (rest, query) = split_off(rest, '?');
        let (scheme, rest) = match rest.split_once(':') {
            Some((scheme, rest)) if is_scheme(scheme) => (Some(scheme), rest),
            _ => (None, rest),
        };
        let (authority, path) = match rest.strip_prefix("//") {
            Some(hier) => {
                let end = hier.find('/').unwrap_or(hier.len());
                (Some(&hier[..end]), &hier[end..])
            }
            None => (None, rest),
        };
        Self {
            scheme,
            authority,
            path,
            query,
            fragment,
        }
    }
}

fn split_off(s: &str, at: char) -> (&str, Option<&str>) {
    match s.split_once(at) {
        Some((head, tail)) => (head, Some(tail)),
        None => (s, None),
    }
}

/// `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`
fn is_scheme(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// True when `reference` carries its own scheme and needs no base.
pub(crate) fn is_absolute(reference: &str) -> bool {
    Parts::parse(reference).scheme.is_some()
}

/// Resolve `reference` against the absolute IRI `base`.
pub(crate) fn resolve(base: &str, reference: &str) -> String {
    let r = Parts::parse(reference);
    if r.scheme.is_some() {
        return reference.to_string();
    }
    let b = Parts::parse(base);

    let (authority, path, query) = if r.authority.is_some() {
        (r.authority, remove_dot_segments(r.path), r.query)
    } else if r.path.is_empty() {
        (b.authority, b.path.to_string(), r.query.or(b.query))
    } else if r.path.starts_with('/') {
        (b.authority, remove_dot_segments(r.path), r.query)
    } else {
        (b.authority, remove_dot_segments(&merge(&b, r.path)), r.query)
    };

    let mut out = String::with_capacity(base.len() + reference.len());
    if let Some(scheme) = b.scheme {
        out.push_str(scheme);
        out.push(':');
    }
    if let Some(authority) = authority {
        out.push_str("//");
        out.push_str(authority);
    }
    out.push_str(&path);
    for (sep, part) in [('?', query), ('#', r.fragment)] {
        if let Some(part) = part {
            out.push(sep);
            out.push_str(part);
        }
    }
    out
}

fn merge(base: &Parts<'_>, path: &str) -> String {
    if base.authority.is_some() && base.path.is_empty() {
        return format!("/{path}");
    }
    let dir = base.path.rfind('/').map_or("", |i| &base.path[..=i]);
    format!("{dir}{path}")
}

/// Section 5.2.4, applied segment by segment.
fn remove_dot_segments(path: &str) -> String {
    let mut input = path;
    let mut output = String::with_capacity(path.len());

    while !input.is_empty() {
        if let Some(rest) = input.strip_prefix("../").or_else(|| input.strip_prefix("./")) {
            input = rest;
        } else if input.starts_with("/./") {
            input = &input[2..];
        } else if input == "/." {
            input = "/";
        } else if input.starts_with("/../") {
            input = &input[3..];
            pop_segment(&mut output);
        } else if input == "/.." {
            input = "/";
            pop_segment(&mut output);
        } else if input == "." || input == ".." {
            input = "";
        } else {
            let skip = usize::from(input.starts_with('/'));
            let end = input[skip..].find('/').map_or(input.len(), |i| i + skip);
            output.push_str(&input[..end]);
            input = &input[end..];
        }
    }
    output
}

fn pop_segment(output: &mut String) {
    let cut = output.rfind('/').unwrap_or(0);
    output.truncate(cut);
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://a/b/c/d;p?q";

    #[test]
    fn test_rfc_examples() {
        let cases = [
            ("g", "http://a/b/c/g"),
            ("./g", "http://a/b/c/g"),
            ("g/", "http://a/b/c/g/"),
            ("/g", "http://a/g"),
            ("//g", "http://g"),
            ("?y", "http://a/b/c/d;p?y"),
            ("g?y", "http://a/b/c/g?y"),
            ("#s", "http://a/b/c/d;p?q#s"),
            ("", "http://a/b/c/d;p?q"),
            (".", "http://a/b/c/"),
            ("..", "http://a/b/"),
            ("../g", "http://a/b/g"),
            ("../..", "http://a/"),
            ("../../../g", "http://a/g"),
            ("g;x=1/../y", "http://a/b/c/y"),
            ("urn:x:y", "urn:x:y"),
        ];
        for (reference, expected) in cases {
            assert_eq!(resolve(BASE, reference), expected, "reference {reference:?}");
        }
    }

    #[test]
    fn test_base_fragment_is_dropped() {
        assert_eq!(resolve("http://ex.org/doc#top", "other"), "http://ex.org/other");
    }

    #[test]
    fn test_is_absolute() {
        assert!(is_absolute("http://example.org/"));
        assert!(is_absolute("urn:isbn:1"));
        assert!(!is_absolute("alice"));
        assert!(!is_absolute("a/b:c"));
        assert!(!is_absolute("#frag"));
    }

    #[test]
    fn test_remove_dot_segments() {
        assert_eq!(remove_dot_segments("/a/b/c/./../../g"), "/a/g");
        assert_eq!(remove_dot_segments("/a/b/.."), "/a/");
        assert_eq!(remove_dot_segments("/../g"), "/g");
        assert_eq!(remove_dot_segments("mid/content=5/../6"), "mid/6");
    }
}
