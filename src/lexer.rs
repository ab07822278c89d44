//! Whitespace tokenization of input lines.

/// Token separators: space, tab, carriage return, newline, bell.
const DELIMITERS: [char; 5] = [' ', '\t', '\r', '\n', '\x07'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexingState {
    Start,
    ReadingWord,
}

struct LexingFSM {
    input: Vec<char>,
    pos: usize,
    state: LexingState,
    buffer: String,
}

impl LexingFSM {
    fn new(line: &str) -> Self {
        LexingFSM {
            input: line.chars().collect(),
            pos: 0,
            state: LexingState::Start,
            buffer: String::new(),
        }
    }

    fn make_tokens(&mut self) -> Vec<String> {
        let mut out = Vec::new();

        while let Some(ch) = self.read_char() {
            match self.state {
                LexingState::Start => self.handle_start(ch),
                LexingState::ReadingWord => self.handle_word(ch, &mut out),
            }
        }

        // A word still in the buffer ends at end of line.
        if !self.buffer.is_empty() {
            out.push(std::mem::take(&mut self.buffer));
        }

        out
    }

    fn read_char(&mut self) -> Option<char> {
        let ch = self.input.get(self.pos).copied();
        if ch.is_some() {
            self.pos += 1;
        }
        ch
    }

    fn handle_start(&mut self, ch: char) {
        if !is_delimiter(ch) {
            self.buffer.push(ch);
            self.state = LexingState::ReadingWord;
        }
    }

    fn handle_word(&mut self, ch: char, out: &mut Vec<String>) {
        if is_delimiter(ch) {
            out.push(std::mem::take(&mut self.buffer));
            self.state = LexingState::Start;
        } else {
            self.buffer.push(ch);
        }
    }
}

fn is_delimiter(ch: char) -> bool {
    DELIMITERS.contains(&ch)
}

/// Splits a line into whitespace-delimited tokens.
///
/// Maximal runs of non-delimiter characters become tokens; runs of
/// consecutive delimiters collapse, so no empty tokens are produced. Quote
/// characters have no special meaning and stay part of their token.
pub(crate) fn split_into_tokens(line: &str) -> Vec<String> {
    let mut lexer = LexingFSM::new(line);
    lexer.make_tokens()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_line_yields_no_tokens() {
        assert!(split_into_tokens("").is_empty());
    }

    #[test]
    fn delimiter_only_line_yields_no_tokens() {
        assert!(split_into_tokens("   \t \r  \x07 ").is_empty());
    }

    #[test]
    fn consecutive_delimiters_collapse() {
        assert_eq!(split_into_tokens("  ls   -la  "), ["ls", "-la"]);
    }

    #[test]
    fn every_delimiter_separates() {
        assert_eq!(
            split_into_tokens("a b\tc\rd\ne\x07f"),
            ["a", "b", "c", "d", "e", "f"]
        );
    }

    #[test]
    fn single_word_round_trips() {
        assert_eq!(split_into_tokens("pwd"), ["pwd"]);
    }

    #[test]
    fn quotes_are_ordinary_characters() {
        assert_eq!(
            split_into_tokens("echo \"a b\" 'c d'"),
            ["echo", "\"a", "b\"", "'c", "d'"]
        );
    }

    #[test]
    fn long_token_survives_intact() {
        let word = "x".repeat(64 * 1024);
        let line = format!("  {}  ", word);
        assert_eq!(split_into_tokens(&line), [word]);
    }

    #[test]
    fn many_tokens_keep_their_order() {
        let words: Vec<String> = (0..500).map(|i| format!("arg{}", i)).collect();
        let line = words.join(" \t ");
        assert_eq!(split_into_tokens(&line), words);
    }
}
