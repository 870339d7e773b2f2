//! Per-container text accumulation
//!
//! One `LineBuffer` lives for exactly one container pass. Text nodes are fed
//! line by line: punctuation completes sentences, a newline is a hard
//! boundary, and whatever is left over waits for the next sibling.

use crate::block::ContentBlock;
use crate::splitter::{contains_terminator, split_sentences};

/// Text accumulated across a container's child nodes
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LineBuffer {
    text: String,
}

impl LineBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw buffered text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether nothing but whitespace is buffered
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Append text verbatim
    pub fn push_str(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Feed the raw content of one text node
    ///
    /// Every line except the last is force-flushed once processed; the last
    /// line stays buffered so it can join the following siblings.
    pub fn feed(&mut self, content: &str, out: &mut Vec<ContentBlock>) {
        let mut lines = content.split('\n').peekable();

        while let Some(line) = lines.next() {
            self.feed_line(line, out);

            if lines.peek().is_some() {
                self.flush(out);
            }
        }
    }

    /// Append one line and emit the sentences it completes
    ///
    /// The new buffer is the last fragment together with any whitespace-only
    /// tail the splitter dropped after it, so no input characters are lost
    /// between text nodes.
    fn feed_line(&mut self, line: &str, out: &mut Vec<ContentBlock>) {
        self.text.push_str(line);
        if !contains_terminator(line) {
            return;
        }

        let joined = std::mem::take(&mut self.text);
        let fragments = split_sentences(&joined);
        let Some((_last, complete)) = fragments.split_last() else {
            return;
        };

        let mut consumed = 0;
        for fragment in complete {
            push_sentence(fragment, out);
            consumed += fragment.len();
        }

        self.text = joined[consumed..].to_string();
    }

    /// Emit everything buffered as text blocks and clear the buffer
    ///
    /// Incomplete trailing fragments are emitted too.
    pub fn flush(&mut self, out: &mut Vec<ContentBlock>) {
        for fragment in split_sentences(&self.text) {
            push_sentence(fragment, out);
        }
        self.text.clear();
    }
}

fn push_sentence(fragment: &str, out: &mut Vec<ContentBlock>) {
    let sentence = fragment.trim();
    if !sentence.is_empty() {
        out.push(ContentBlock::Text(sentence.to_string()));
    }
}
