//! G-Code line parsing
//!
//! Comments are stripped before tokenizing. Both comment styles are
//! handled: `;` truncates the rest of the line, `( ... )` spans are
//! removed in place, and an unmatched `(` swallows the rest of the line.
//! Comment text is kept on the record so it survives re-emission.

use penkit_core::{GcodeError, GcodeLine, Result, Word};

/// Parse a whole G-code source into ordered command records.
///
/// Blank lines, `%` program markers, and comment-only lines produce no
/// record. A malformed word fails the whole parse; no partial result is
/// returned.
pub fn parse(text: &str) -> Result<Vec<GcodeLine>> {
    let mut lines = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        if let Some(line) = parse_line(raw, index as u32 + 1)? {
            lines.push(line);
        }
    }
    Ok(lines)
}

/// Parse a single G-code line.
///
/// Returns `Ok(None)` for lines that carry no command (blank, `%`, or
/// comment-only).
pub fn parse_line(raw: &str, line_number: u32) -> Result<Option<GcodeLine>> {
    let (code, comment) = split_comment(raw);
    let code = code.trim();
    if code.is_empty() || code == "%" {
        if comment.is_some() {
            tracing::debug!(line_number, "skipping comment-only line");
        }
        return Ok(None);
    }

    let mut words = tokenize(code, line_number)?.into_iter();
    let (letter, value) = words.next().expect("non-empty code yields a word");
    if value < 0.0 || value.fract() != 0.0 || value > f64::from(u16::MAX) {
        return Err(GcodeError::InvalidSyntax {
            line_number,
            reason: format!("unsupported command number '{}{}'", letter, value),
        }
        .into());
    }

    let mut line = GcodeLine::new(Word::new(letter, value as u16));
    for (letter, value) in words {
        line.params.insert(letter, value);
    }
    line.comment = comment;
    Ok(Some(line))
}

/// Split a raw line into its code part and accumulated comment text.
fn split_comment(raw: &str) -> (String, Option<String>) {
    let mut comment = String::new();

    let rest = match raw.find(';') {
        Some(pos) => {
            push_comment(&mut comment, raw[pos + 1..].trim());
            &raw[..pos]
        }
        None => raw,
    };

    let mut code = rest.to_string();
    while let Some(start) = code.find('(') {
        match code[start..].find(')') {
            Some(offset) => {
                let end = start + offset;
                push_comment(&mut comment, code[start + 1..end].trim());
                code.replace_range(start..=end, " ");
            }
            None => {
                // Unmatched parenthesis swallows the rest of the line.
                push_comment(&mut comment, code[start + 1..].trim());
                code.truncate(start);
            }
        }
    }

    let comment = if comment.is_empty() {
        None
    } else {
        Some(comment)
    };
    (code, comment)
}

fn push_comment(buf: &mut String, text: &str) {
    if text.is_empty() {
        return;
    }
    if !buf.is_empty() {
        buf.push(' ');
    }
    buf.push_str(text);
}

/// Tokenize a comment-free code fragment into (letter, value) words.
///
/// Words need not be whitespace-separated (`G1X10Y20` is valid).
fn tokenize(code: &str, line_number: u32) -> Result<Vec<(char, f64)>> {
    let mut words = Vec::new();
    let mut chars = code.char_indices().peekable();

    while let Some((index, ch)) = chars.next() {
        if ch.is_whitespace() {
            continue;
        }
        if !ch.is_ascii_alphabetic() {
            return Err(GcodeError::InvalidSyntax {
                line_number,
                reason: format!("unexpected character '{}'", ch),
            }
            .into());
        }

        let start = index + ch.len_utf8();
        let mut end = start;
        while let Some(&(next_index, next_ch)) = chars.peek() {
            if next_ch.is_ascii_digit() || matches!(next_ch, '.' | '+' | '-') {
                end = next_index + next_ch.len_utf8();
                chars.next();
            } else {
                break;
            }
        }

        let value: f64 = code[start..end].parse().map_err(|_| GcodeError::InvalidSyntax {
            line_number,
            reason: format!("invalid value '{}' for word '{}'", &code[start..end], ch),
        })?;
        words.push((ch.to_ascii_uppercase(), value));
    }

    Ok(words)
}
