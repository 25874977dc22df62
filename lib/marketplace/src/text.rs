use std::borrow::Cow;

/// Longest card description shown before it gets cut.
pub const DESCRIPTION_MAX_LENGTH: usize = 55;

pub const ELLIPSIS: char = '…';

/// Cuts `text` to at most `max_length` characters, appending [`ELLIPSIS`] when
/// anything was removed.
///
/// The cut happens exactly at the character boundary, words are not preserved.
pub fn truncate(text: &str, max_length: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_length) {
        None => Cow::Borrowed(text),
        Some((byte_index, _)) => {
            let mut truncated = String::with_capacity(byte_index + ELLIPSIS.len_utf8());
            truncated.push_str(&text[..byte_index]);
            truncated.push(ELLIPSIS);
            Cow::Owned(truncated)
        }
    }
}

pub fn truncate_description(text: &str) -> String {
    truncate(text, DESCRIPTION_MAX_LENGTH).into_owned()
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::{truncate, truncate_description, DESCRIPTION_MAX_LENGTH, ELLIPSIS};

    #[test_case("", 5 => ""; "empty")]
    #[test_case("Hello", 5 => "Hello"; "exactly at limit")]
    #[test_case("Hello world", 5 => "Hello…"; "cut mid sentence")]
    #[test_case("Hello world", 7 => "Hello w…"; "cut mid word")]
    #[test_case("Ünïcödé text", 4 => "Ünïc…"; "multi byte characters")]
    #[test_case("abc", 0 => "…"; "zero length")]
    fn should_truncate(text: &str, max_length: usize) -> String {
        truncate(text, max_length).into_owned()
    }

    #[test]
    fn should_keep_short_descriptions_verbatim() {
        let description = "Deploy static sites with a global CDN";
        assert_eq!(description, truncate_description(description));
    }

    #[test]
    fn should_cut_long_descriptions_to_limit() {
        let description = "A".repeat(100);
        let truncated = truncate_description(&description);

        assert_eq!(DESCRIPTION_MAX_LENGTH + 1, truncated.chars().count());
        assert!(truncated.ends_with(ELLIPSIS));
        assert_eq!("A".repeat(DESCRIPTION_MAX_LENGTH), truncated.trim_end_matches(ELLIPSIS));
    }
}
