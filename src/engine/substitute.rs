#[inline]
fn is_word_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
}

/// Replace every whole-word, case-insensitive occurrence of `word` with
/// `replacement`. Occurrences embedded in longer identifiers are left alone,
/// so a parameter named `a` never touches `abs`.
pub(crate) fn replace_word(text: &str, word: &str, replacement: &str) -> String {
    if word.is_empty() {
        return text.to_string();
    }

    let bytes = text.as_bytes();
    let word_len = word.len();
    let mut result = String::with_capacity(text.len());
    let mut i = 0;

    while i < text.len() {
        let starts_word = i == 0 || !is_word_byte(bytes[i - 1]);
        let end = i + word_len;
        // `i` always sits on a char boundary; `end` may not when the text
        // holds multi-byte characters, which must fall through untouched so
        // the tokenizer can reject them
        if starts_word
            && end <= text.len()
            && text.is_char_boundary(end)
            && text[i..end].eq_ignore_ascii_case(word)
            && (end == text.len() || !is_word_byte(bytes[end]))
        {
            result.push_str(replacement);
            i = end;
        } else if let Some(c) = text[i..].chars().next() {
            result.push(c);
            i += c.len_utf8();
        } else {
            break;
        }
    }

    result
}
