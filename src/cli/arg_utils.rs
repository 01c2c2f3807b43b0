// arg_utils.rs — Token classification and small string helpers shared by the
// parser, the help printer and the host settings reader.

/// Shape of a raw argv token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `-X`: exactly two bytes, the first being `-`.
    Short,
    /// `--name`: more than two bytes, starting with `--`.
    Long,
    /// Anything else.
    Value,
}

/// `true` for a two-byte token starting with `-`.
///
/// The second byte is not checked against the catalog here, so `--` and
/// `-7` are both short-option tokens. Lengths are in bytes: `-é` is three
/// bytes long and therefore a plain value.
pub fn is_short_option(token: &str) -> bool {
    token.len() == 2 && token.starts_with('-')
}

/// `true` for a token longer than two bytes starting with `--`.
pub fn is_long_option(token: &str) -> bool {
    token.len() > 2 && token.starts_with("--")
}

/// `true` if `token` has either option shape.
pub fn is_option_shaped(token: &str) -> bool {
    is_short_option(token) || is_long_option(token)
}

pub fn classify(token: &str) -> TokenKind {
    if is_short_option(token) {
        TokenKind::Short
    } else if is_long_option(token) {
        TokenKind::Long
    } else {
        TokenKind::Value
    }
}

/// Returns the last path component of `path`, handling both `/` and `\` separators.
///
/// Used to print `argv[0]` in usage text without its directory.
pub fn last_name_from_path(path: &str) -> &str {
    let after_slash = match path.rfind('/') {
        Some(pos) => &path[pos + 1..],
        None => path,
    };
    match after_slash.rfind('\\') {
        Some(pos) => &after_slash[pos + 1..],
        None => after_slash,
    }
}

/// Parses an unsigned 32-bit integer from the start of `s`, optionally
/// followed by a size suffix. Returns `None` if there are no leading digits
/// or the value overflows, otherwise `Some((value, remainder))` where
/// `remainder` is the unconsumed tail of `s`.
///
/// Recognised suffixes (case-sensitive):
///   `K` / `KB` / `KiB`  → multiply by 1 024
///   `M` / `MB` / `MiB`  → multiply by 1 048 576
pub fn read_u32_from_str(s: &str) -> Option<(u32, &str)> {
    let digits = s.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }

    let mut value: u32 = 0;
    for b in s[..digits].bytes() {
        value = value.checked_mul(10)?.checked_add(u32::from(b - b'0'))?;
    }

    let rest = &s[digits..];
    let (shift, rest) = match rest.as_bytes().first() {
        Some(b'K') => (10, &rest[1..]),
        Some(b'M') => (20, &rest[1..]),
        _ => return Some((value, rest)),
    };
    if value.leading_zeros() < shift {
        return None;
    }
    let rest = rest.strip_prefix('i').unwrap_or(rest);
    let rest = rest.strip_prefix('B').unwrap_or(rest);
    Some((value << shift, rest))
}
