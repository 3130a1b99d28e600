use crate::literal::is_c_space;

fn is_separator(byte: Option<&u8>) -> bool {
    match byte {
        None => true,
        Some(b) => *b == b'|' || is_c_space(*b),
    }
}

/// Find the first bounded occurrence of `token` in `range`
///
/// Returns the byte offset of the match. After an occurrence fails the
/// boundary test, the search resumes past that whole occurrence. An empty
/// token never matches.
pub fn find_token(range: &str, token: &str) -> Option<usize> {
    if token.is_empty() {
        return None;
    }

    let bytes = range.as_bytes();
    range.match_indices(token).map(|(pos, _)| pos).find(|&pos| {
        let before = pos.checked_sub(1).map(|i| &bytes[i]);
        let after = bytes.get(pos + token.len());
        (pos == 0 || is_separator(before)) && is_separator(after)
    })
}

/// Ordinal of the list entry containing byte offset `position`
pub fn index_of(range: &str, position: usize) -> usize {
    range.as_bytes()[..position.min(range.len())]
        .iter()
        .filter(|b| **b == b'|')
        .count()
}

/// Zero-based ordinal of `token` within `range`, if present
pub fn index(range: &str, token: &str) -> Option<usize> {
    find_token(range, token).map(|pos| index_of(range, pos))
}

const FIELD_DELIMITERS: [char; 3] = [' ', '\t', '\n'];

/// Iterator over fields separated by runs of space, tab or newline
#[derive(Debug, Clone)]
pub struct TokenIter<'a> {
    rest: &'a str,
}

impl<'a> Iterator for TokenIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let trimmed = self.rest.trim_start_matches(FIELD_DELIMITERS);
        if trimmed.is_empty() {
            self.rest = trimmed;
            return None;
        }

        let end = trimmed.find(FIELD_DELIMITERS).unwrap_or(trimmed.len());
        let (field, rest) = trimmed.split_at(end);
        self.rest = rest;
        Some(field)
    }
}

/// Split a value into its whitespace-separated fields
pub fn tokenize(text: &str) -> TokenIter<'_> {
    TokenIter { rest: text }
}
