use std::{borrow::Cow, str::Utf8Error};

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Bytes escaped when a parameter value is written into a path segment.
///
/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )` is escaped, which is the same set the
/// ECMAScript `encodeURIComponent` function leaves alone. Non-ASCII input is always escaped as its
/// UTF-8 bytes.
pub(crate) const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Appends the percent-encoded form of `val` to `buf`.
pub(crate) fn quote_into(buf: &mut String, val: &str) {
    buf.extend(utf8_percent_encode(val, COMPONENT));
}

/// Fully percent-decodes a captured path segment.
///
/// Invalid/incomplete percent-encoding sequences are passed unmodified. Fails only when the decoded
/// bytes are not valid UTF-8.
pub(crate) fn unquote(val: &str) -> Result<Cow<'_, str>, Utf8Error> {
    percent_decode_str(val).decode_utf8()
}
