//! Punctuation-driven sentence splitting
//!
//! A sentence ends at a run of terminal punctuation (`. ; ? !`) that is
//! followed by whitespace or by the end of the input. Punctuation followed by
//! anything else (`3.14`, `e.g.x`) does not end a sentence. This is a
//! deliberately simple character-class rule, not a language model:
//! abbreviations and quoted punctuation are not special-cased.

/// Characters that can end a sentence
pub const TERMINATORS: [char; 4] = ['.', ';', '?', '!'];

/// Whether `ch` is terminal punctuation
#[inline]
pub fn is_terminator(ch: char) -> bool {
    matches!(ch, '.' | ';' | '?' | '!')
}

/// Whether `text` contains any terminal punctuation
#[inline]
pub fn contains_terminator(text: &str) -> bool {
    text.contains(TERMINATORS)
}

/// Split `text` into sentence fragments
///
/// Fragments are contiguous slices of `text`; whitespace that follows a
/// boundary belongs to the next fragment. The last fragment may lack a
/// terminator. A whitespace-only tail is not returned, so the concatenated
/// fragments equal `text` up to trailing whitespace.
///
/// ```rust
/// use flowseg_core::split_sentences;
///
/// assert_eq!(
///     split_sentences("Hello world. This is great! Done"),
///     vec!["Hello world.", " This is great!", " Done"]
/// );
/// assert!(split_sentences("   ").is_empty());
/// ```
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((_, ch)) = chars.next() {
        if !is_terminator(ch) {
            continue;
        }

        // Consume the whole terminator run as a single boundary
        while chars.next_if(|&(_, next)| is_terminator(next)).is_some() {}

        let (end, complete) = match chars.peek() {
            Some(&(index, next)) => (index, next.is_whitespace()),
            None => (text.len(), true),
        };

        if complete {
            sentences.push(&text[start..end]);
            start = end;
        }
    }

    let rest = &text[start..];
    if !rest.trim().is_empty() {
        sentences.push(rest);
    }

    sentences
}
