//! Resolving XML character references back into text.
//!
//! Accepts the five predefined entities and numeric references in decimal
//! (`&#39;`) or hexadecimal (`&#x27;`) form, so output from other escapers
//! that prefer numeric references for quotes also decodes.
use std::borrow::Cow;

/// Offsets are byte positions of the `&` that starts the reference.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum UnescapeError {
    #[error("unterminated character reference at byte {offset}")]
    Unterminated { offset: usize },
    #[error("unknown entity {name:?} at byte {offset}")]
    UnknownEntity { name: String, offset: usize },
    #[error("invalid character reference {reference:?} at byte {offset}")]
    InvalidCharRef { reference: String, offset: usize },
}

/// Replace all character references in `text` with the characters they stand for.
///
/// ```
/// use encode_for_xml::unescape::unescape;
///
/// assert_eq!(unescape("a &lt; b &amp;&amp; c").unwrap(), "a < b && c");
/// assert_eq!(unescape("&#39;&#x27;&apos;").unwrap(), "'''");
/// assert!(unescape("fish & chips").is_err());
/// ```
pub fn unescape(text: &str) -> Result<Cow<str>, UnescapeError> {
    let Some(first) = text.find('&') else {
        return Ok(Cow::Borrowed(text));
    };

    let mut unescaped = String::with_capacity(text.len());
    unescaped.push_str(&text[..first]);

    let mut pos = first;
    while let Some(found) = text[pos..].find('&') {
        let start = pos + found;
        unescaped.push_str(&text[pos..start]);

        let (c, len) = parse_reference(&text[start..], start)?;
        unescaped.push(c);
        pos = start + len;
    }
    unescaped.push_str(&text[pos..]);

    Ok(Cow::Owned(unescaped))
}

/// Number of character references in `text`.
///
/// Stray `&` characters are not counted; use [unescape] to validate.
pub fn count_references(text: &str) -> usize {
    text.match_indices('&')
        .filter(|(i, _)| parse_reference(&text[*i..], *i).is_ok())
        .count()
}

/// Parse the reference at the start of `s`, returning the character and the
/// byte length of the reference including `&` and `;`.
fn parse_reference(s: &str, offset: usize) -> Result<(char, usize), UnescapeError> {
    debug_assert!(s.starts_with('&'));
    let body = &s[1..];

    let end = body
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '#'))
        .filter(|&i| i > 0 && body[i..].starts_with(';'))
        .ok_or(UnescapeError::Unterminated { offset })?;
    let name = &body[..end];
    let len = end + 2;

    let c = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        _ => match name.strip_prefix('#') {
            Some(number) => parse_char_ref(number).ok_or_else(|| {
                UnescapeError::InvalidCharRef {
                    reference: s[..len].to_owned(),
                    offset,
                }
            })?,
            None => {
                return Err(UnescapeError::UnknownEntity {
                    name: name.to_owned(),
                    offset,
                })
            }
        },
    };

    Ok((c, len))
}

fn parse_char_ref(number: &str) -> Option<char> {
    let code = match number.strip_prefix(['x', 'X']) {
        Some(hex) if hex.chars().all(|c| c.is_ascii_hexdigit()) => u32::from_str_radix(hex, 16),
        None if number.chars().all(|c| c.is_ascii_digit()) => number.parse(),
        _ => return None,
    }
    .ok()?;

    // NUL is not a legal XML character.
    if code == 0 {
        return None;
    }
    char::from_u32(code)
}
