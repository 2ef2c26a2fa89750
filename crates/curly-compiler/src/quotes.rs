/// Split reference text on whitespace, keeping quoted regions (with `\`
/// escapes) inside a single piece.
///
/// A quote only opens a region at the start of a piece or right after `=`;
/// anywhere else it is an ordinary character, so `size=Tom's color=red` is
/// still two pieces.
///
/// `widget title="Hello world" size=2` yields
/// `["widget", "title=\"Hello world\"", "size=2"]`.
pub(crate) fn split_on_whitespace(s: &str) -> Vec<&str> {
    let mut pieces = Vec::with_capacity((s.len() / 8).clamp(2, 8));
    let mut start = None;
    let mut quote: Option<char> = None;
    let mut escape = false;
    let mut prev: Option<char> = None;

    for (idx, ch) in s.char_indices() {
        if escape {
            escape = false;
            continue;
        }
        match ch {
            '\\' if quote.is_some() => escape = true,
            '"' | '\'' if quote == Some(ch) => quote = None,
            '"' | '\'' if quote.is_none() && (start.is_none() || prev == Some('=')) => {
                quote = Some(ch);
            }
            _ if quote.is_none() && ch.is_whitespace() => {
                if let Some(piece_start) = start.take() {
                    pieces.push(&s[piece_start..idx]);
                }
                prev = None;
                continue;
            }
            _ => {}
        }
        start.get_or_insert(idx);
        prev = Some(ch);
    }
    if let Some(piece_start) = start {
        pieces.push(&s[piece_start..]);
    }
    pieces
}

/// Strip one level of matching quotes and resolve `\` escapes inside them.
///
/// Returns `None` when the value opens a quote it never closes, or when an
/// unquoted value contains a quote character.
pub(crate) fn unquote(raw: &str) -> Option<String> {
    let Some(quote) = raw.chars().next().filter(|c| *c == '"' || *c == '\'') else {
        return (!raw.contains(['"', '\''])).then(|| raw.to_string());
    };

    let inner = &raw[1..];
    let mut value = String::with_capacity(inner.len());
    let mut chars = inner.chars();

    while let Some(ch) = chars.next() {
        match ch {
            '\\' => value.push(chars.next()?),
            c if c == quote => {
                // Anything after the closing quote makes the value malformed.
                return chars.as_str().is_empty().then_some(value);
            }
            c => value.push(c),
        }
    }
    None
}
