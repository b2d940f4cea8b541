//! Escaping of the five characters that are reserved in XML text and attribute values.
use std::borrow::Cow;

/// The character reference that replaces `c`, if `c` is reserved.
///
/// ```
/// use encode_for_xml::escape::entity_for;
///
/// assert_eq!(entity_for('&'), Some("&amp;"));
/// assert_eq!(entity_for('\''), Some("&apos;"));
/// assert_eq!(entity_for('é'), None);
/// ```
pub fn entity_for(c: char) -> Option<&'static str> {
    match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&quot;"),
        '\'' => Some("&apos;"),
        _ => None,
    }
}

fn is_reserved(c: char) -> bool {
    entity_for(c).is_some()
}

/// Replace every reserved character in `text` with its character reference.
///
/// Text without any reserved characters is returned as-is without allocating.
///
/// ```
/// use encode_for_xml::escape::escape;
///
/// assert_eq!(escape("a < b && c"), "a &lt; b &amp;&amp; c");
/// assert_eq!(escape("println 'hi'"), "println &apos;hi&apos;");
/// ```
///
/// Existing references are escaped again, so this is not idempotent:
///
/// ```
/// # use encode_for_xml::escape::escape;
/// assert_eq!(escape("&amp;"), "&amp;amp;");
/// ```
pub fn escape(text: &str) -> Cow<str> {
    let Some(first) = text.find(is_reserved) else {
        return Cow::Borrowed(text);
    };

    // Most scripts only have a handful of reserved characters per line.
    let mut escaped = String::with_capacity(text.len() + text.len() / 8);
    escaped.push_str(&text[..first]);
    escape_into(&text[first..], &mut escaped);
    Cow::Owned(escaped)
}

/// Append the escaped form of `text` to `dest`.
pub fn escape_into(text: &str, dest: &mut String) {
    for c in text.chars() {
        match entity_for(c) {
            Some(entity) => dest.push_str(entity),
            None => dest.push(c),
        }
    }
}

/// Number of characters in `text` that [escape] would replace.
pub fn count_reserved(text: &str) -> usize {
    text.chars().filter(|&c| is_reserved(c)).count()
}
