use std::borrow::Cow;
use std::io::Read;

use crate::error::Error;
use crate::model::Vault;

/// Parse dotenv text into a vault.
///
/// Lines without `=` (blank lines, comment-only lines, garbage) are skipped
/// silently; this never fails.
pub fn parse_str(input: &str) -> Vault {
    let normalized = normalize_line_endings(input);
    let lines = split_lines(&normalized);

    let mut vault = Vault::new();
    for (key, value) in entries(&lines) {
        vault.insert(key.to_owned(), value.to_owned());
    }
    vault
}

/// Parse dotenv bytes into a vault.
///
/// Bytes are decoded as UTF-8; invalid sequences become U+FFFD rather than
/// failing the parse.
pub fn parse_bytes(input: &[u8]) -> Vault {
    parse_str(&String::from_utf8_lossy(input))
}

/// Read `reader` to the end and parse its contents.
pub fn parse_reader<R: Read>(mut reader: R) -> Result<Vault, Error> {
    let mut buf = Vec::new();
    reader
        .read_to_end(&mut buf)
        .map_err(|err| Error::io("<reader>", err))?;
    Ok(parse_bytes(&buf))
}

/// Replace `\r\n` and lone `\r` with `\n`.
///
/// Borrows the input when it contains no carriage return.
pub fn normalize_line_endings(input: &str) -> Cow<'_, str> {
    if !input.contains('\r') {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\r' {
            out.push('\n');
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            continue;
        }
        out.push(ch);
    }

    Cow::Owned(out)
}

/// Split normalized text on `\n`.
///
/// A single trailing empty line left by a final newline is dropped, so
/// `"a\n"` yields `["a"]` while `"a\n\n"` yields `["a", ""]`.
pub fn split_lines(input: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = input.split('\n').collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}

/// Extract a trimmed `(key, value)` pair from one line.
///
/// Everything from the first `#` on is dropped, then the rest is split at the
/// first `=`. Returns `None` when no `=` remains. The key may be empty
/// (`"=value"` yields `("", "value")`).
pub fn parse_line(line: &str) -> Option<(&str, &str)> {
    let content = line.split_once('#').map_or(line, |(head, _)| head);
    let (key, value) = content.split_once('=')?;
    Some((key.trim(), value.trim()))
}

pub(crate) fn entries<'a>(
    lines: &'a [&'a str],
) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
    lines.iter().enumerate().filter_map(|(idx, line)| {
        let parsed = parse_line(line);
        if parsed.is_none() {
            tracing::trace!(line = idx + 1, "skipping line without `=`");
        }
        parsed
    })
}
