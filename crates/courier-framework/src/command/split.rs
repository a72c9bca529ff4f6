//! Message text tokenization.

/// Splits message text on single spaces.
///
/// There is no quoting and no collapsing of whitespace runs: consecutive
/// spaces produce empty tokens, and an empty message yields one empty token.
/// Those empty tokens count as arguments during binding.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(' ').map(str::to_string).collect()
}

/// Re-joins a trailing run of tokens with single spaces.
pub fn join_tokens(tokens: &[String]) -> String {
    tokens.join(" ")
}
