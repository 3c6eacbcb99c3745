#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Must(String),
    Should(String),
    MustNot(String),
}

/// Split search-box text into tag tokens. Never fails: degenerate tokens
/// are dropped, not reported.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();

    for word in input.split_whitespace() {
        // A prefix with nothing behind it is a no-op, not an empty tag.
        if word == "~" || word == "-" {
            continue;
        }

        if let Some(rest) = word.strip_prefix('~') {
            if let Some(tag) = decode_trimmed(rest) {
                tokens.push(Token::Should(tag));
            }
        } else if let Some(rest) = word.strip_prefix('-') {
            if let Some(tag) = decode_trimmed(rest) {
                tokens.push(Token::MustNot(tag));
            }
        } else {
            // Plain tokens keep whatever the underscores decode to,
            // boundary spaces included.
            tokens.push(Token::Must(word.replace('_', " ")));
        }
    }

    tokens
}

fn decode_trimmed(raw: &str) -> Option<String> {
    let decoded = raw.replace('_', " ");
    let tag = decoded.trim();

    if tag.is_empty() {
        None
    } else {
        Some(tag.to_string())
    }
}
