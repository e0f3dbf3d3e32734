//! String utilities - case conversion, padding, truncation and escaping.
//!
//! Every function works on `char` boundaries, so multi-byte text never
//! panics and lengths are counted in characters, not bytes.

use std::borrow::Cow;

/// Splits a string into words for the case converters.
///
/// Non-alphanumeric characters separate words. An uppercase letter starts a
/// new word after a lowercase letter or digit, and at the end of an acronym
/// (`"XMLHttp"` -> `["XML", "Http"]`).
fn split_words(s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_numeric() || (prev.is_uppercase() && next_is_lower) {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Uppercases the first character and lowercases the rest.
///
/// ```
/// assert_eq!(utilkit::string::capitalize("hELLO"), "Hello");
/// ```
pub fn capitalize(s: &str) -> String {
    upper_first(s)
}

/// `"foo-bar_baz qux"` -> `"fooBarBazQux"`
pub fn camel_case(s: &str) -> String {
    split_words(s)
        .iter()
        .enumerate()
        .map(|(i, w)| if i == 0 { w.to_lowercase() } else { upper_first(w) })
        .collect()
}

/// `"fooBar baz"` -> `"FooBarBaz"`
pub fn pascal_case(s: &str) -> String {
    split_words(s).iter().map(|w| upper_first(w)).collect()
}

/// `"fooBar_baz"` -> `"foo-bar-baz"`
pub fn kebab_case(s: &str) -> String {
    join_lower(s, "-")
}

/// `"fooBar-baz"` -> `"foo_bar_baz"`
pub fn snake_case(s: &str) -> String {
    join_lower(s, "_")
}

fn join_lower(s: &str, sep: &str) -> String {
    split_words(s)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(sep)
}

/// Truncates `s` to at most `length` characters, ending with `suffix`.
///
/// The suffix counts toward `length`. Strings that already fit are returned
/// unchanged.
///
/// ```
/// use utilkit::string::truncate;
/// assert_eq!(truncate("hello world", 8, "..."), "hello...");
/// assert_eq!(truncate("short", 8, "..."), "short");
/// ```
pub fn truncate(s: &str, length: usize, suffix: &str) -> String {
    if s.chars().count() <= length {
        return s.to_string();
    }
    let keep = length.saturating_sub(suffix.chars().count());
    let mut out: String = s.chars().take(keep).collect();
    out.push_str(suffix);
    out
}

/// Trims any of `chars` from both ends. An empty set trims whitespace.
pub fn trim_chars<'a>(s: &'a str, chars: &str) -> &'a str {
    if chars.is_empty() {
        return s.trim();
    }
    s.trim_matches(|c| chars.contains(c))
}

/// Trims any of `chars` from the start. An empty set trims whitespace.
pub fn trim_start_chars<'a>(s: &'a str, chars: &str) -> &'a str {
    if chars.is_empty() {
        return s.trim_start();
    }
    s.trim_start_matches(|c| chars.contains(c))
}

/// Trims any of `chars` from the end. An empty set trims whitespace.
pub fn trim_end_chars<'a>(s: &'a str, chars: &str) -> &'a str {
    if chars.is_empty() {
        return s.trim_end();
    }
    s.trim_end_matches(|c| chars.contains(c))
}

pub fn repeat(s: &str, count: usize) -> String {
    s.repeat(count)
}

#[inline]
fn escape_char(c: char) -> Option<&'static str> {
    match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

/// Escapes `& < > " '` as HTML entities.
///
/// Borrows the input when nothing needs escaping.
pub fn escape_html(s: &str) -> Cow<'_, str> {
    if !s.chars().any(|c| escape_char(c).is_some()) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 16);
    for c in s.chars() {
        match escape_char(c) {
            Some(entity) => out.push_str(entity),
            None => out.push(c),
        }
    }
    Cow::Owned(out)
}

const ENTITIES: [(&str, char); 7] = [
    ("&amp;", '&'),
    ("&lt;", '<'),
    ("&gt;", '>'),
    ("&quot;", '"'),
    ("&#39;", '\''),
    ("&#x27;", '\''),
    ("&nbsp;", '\u{a0}'),
];

/// Reverses [`escape_html`]. Unknown entities are left as-is.
pub fn unescape_html(s: &str) -> Cow<'_, str> {
    if !s.contains('&') {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        match ENTITIES.iter().find(|(entity, _)| rest.starts_with(entity)) {
            Some((entity, c)) => {
                out.push(*c);
                rest = &rest[entity.len()..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

fn padding(current: usize, target: usize, fill: &str) -> String {
    if current >= target || fill.is_empty() {
        return String::new();
    }
    fill.chars().cycle().take(target - current).collect()
}

/// Pads the start of `s` with `fill` (repeated and cut to fit) up to
/// `length` characters.
///
/// ```
/// assert_eq!(utilkit::string::pad_start("5", 3, "0"), "005");
/// ```
pub fn pad_start(s: &str, length: usize, fill: &str) -> String {
    let mut out = padding(s.chars().count(), length, fill);
    out.push_str(s);
    out
}

/// Pads the end of `s` with `fill` up to `length` characters.
pub fn pad_end(s: &str, length: usize, fill: &str) -> String {
    let mut out = s.to_string();
    out.push_str(&padding(s.chars().count(), length, fill));
    out
}

/// Whether `s` starts with `target` at character `position` (0 when `None`).
pub fn starts_with(s: &str, target: &str, position: Option<usize>) -> bool {
    match s.char_indices().nth(position.unwrap_or(0)) {
        Some((byte, _)) => s[byte..].starts_with(target),
        None => target.is_empty(),
    }
}

/// Whether `s`, cut to its first `position` characters, ends with `target`.
pub fn ends_with(s: &str, target: &str, position: Option<usize>) -> bool {
    let head = match position.and_then(|p| s.char_indices().nth(p)) {
        Some((byte, _)) => &s[..byte],
        None => s,
    };
    head.ends_with(target)
}

/// Number of whitespace-separated words.
pub fn word_count(s: &str) -> usize {
    s.split_whitespace().count()
}
