//! Abstraction over `regex` and `regex-lite` depending on whether we have `unicode` crate feature
//! enabled.

#[cfg(feature = "unicode")]
pub(crate) use regex::{escape, Regex};
#[cfg(not(feature = "unicode"))]
pub(crate) use regex_lite::{escape, Regex};

/// Compiles an anchored template pattern.
///
/// The error is flattened into its message because the two engines do not share an error type.
pub(crate) fn compile(pattern: &str) -> Result<Regex, String> {
    Regex::new(pattern).map_err(|err| err.to_string())
}

/// Runs `re` against `path` and collects the text of every capture group after the implicit
/// whole-match group, in order.
///
/// Returns `None` when `path` does not match.
pub(crate) fn capture_spans<'p>(re: &Regex, path: &'p str) -> Option<Vec<&'p str>> {
    let captures = re.captures(path)?;

    captures
        .iter()
        .skip(1)
        .map(|group| group.map(|m| m.as_str()))
        .collect()
}
