//! Percent-encoding of fragment values.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use std::borrow::Cow;

/// Characters escaped in serialized fragment values.
///
/// Includes the fragment's own syntax characters (`&`, `=`, `#`, `?`), the
/// escape character itself (`%`), and the characters browsers will not keep
/// verbatim in a fragment. Non-ASCII bytes are always escaped.
const VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'\'')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'`');

/// Percent-encode a fragment value.
pub fn encode_value(value: &str) -> Cow<'_, str> {
    utf8_percent_encode(value, VALUE).into()
}

/// Percent-decode a fragment value.
///
/// Tolerant: every valid `%XX` sequence is decoded; if the decoded bytes are
/// not valid UTF-8 the original, still-escaped text is returned unchanged.
/// `+` is left alone; fragments are not form data.
pub fn decode_value(value: &str) -> String {
    match percent_decode_str(value).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => value.to_owned(),
    }
}
