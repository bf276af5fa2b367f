//! Lexer splitting free-form date text into words, numbers, whitespace and separators.

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    Initial,
    Word,
    Number,
}

/// Split a date string into lexical tokens.
///
/// Consecutive letters form a word, consecutive ASCII digits form a number, any run of
/// whitespace collapses to a single `" "` and every other character is its own token.
/// A number immediately followed by letters is split in two, so `"1st"` yields `["1", "st"]`
/// and `"9am"` yields `["9", "am"]`.
pub(crate) fn split(input: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    let mut token = String::new();
    let mut state = State::Initial;

    for c in input.chars() {
        let next_state = if c.is_alphabetic() {
            State::Word
        } else if c.is_ascii_digit() {
            State::Number
        } else {
            State::Initial
        };

        if state != State::Initial && next_state != state {
            tokens.push(std::mem::take(&mut token));
        }

        match next_state {
            State::Word | State::Number => token.push(c),
            State::Initial => {
                if c.is_whitespace() {
                    if tokens.last().map_or(true, |t| t != " ") {
                        tokens.push(" ".to_string());
                    }
                } else if c != '\0' {
                    tokens.push(c.to_string());
                }
            }
        }
        state = next_state;
    }
    if !token.is_empty() {
        tokens.push(token);
    }
    tokens
}

/// Returns whether the token is a non-empty run of ASCII digits.
pub(crate) fn is_number(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}
