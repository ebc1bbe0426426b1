//! Command encoding
//!
//! Builds outbound command lines. The server tokenizer splits on whitespace
//! and honours double quotes, so the quoting here has to be exact.

/// Quote a single argument for the wire
///
/// Arguments with no whitespace and no `"` are emitted bare. Everything else
/// is wrapped in double quotes with each inner `"` escaped as `\"`.
pub fn quote_argument(arg: &str) -> String {
    let needs_quotes = arg.chars().any(|c| c.is_whitespace() || c == '"');
    if !needs_quotes {
        return arg.to_string();
    }

    let mut quoted = String::with_capacity(arg.len() + 2);
    quoted.push('"');
    for c in arg.chars() {
        if c == '"' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

/// Encode a command and its arguments into one newline-terminated line
pub fn encode_command(name: &str, args: &[&str]) -> String {
    let capacity = name.len() + 1 + args.iter().map(|a| a.len() + 3).sum::<usize>();
    let mut line = String::with_capacity(capacity);
    line.push_str(name);
    for arg in args {
        line.push(' ');
        line.push_str(&quote_argument(arg));
    }
    line.push('\n');
    line
}

/// Split a command line back into its tokens
///
/// The inverse of [`encode_command`]: whitespace separates tokens, a double
/// quote opens or closes a quoted token, and inside quotes `\"` stands for a
/// literal quote. Any other backslash is kept as-is.
pub fn tokenize_line(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut chars = line.trim_end_matches(['\n', '\r']).chars().peekable();

    loop {
        while chars.peek().is_some_and(|c| c.is_whitespace()) {
            chars.next();
        }

        let Some(&first) = chars.peek() else {
            break;
        };

        let mut token = String::new();
        if first == '"' {
            chars.next();
            while let Some(c) = chars.next() {
                match c {
                    '\\' if chars.peek() == Some(&'"') => {
                        chars.next();
                        token.push('"');
                    }
                    '"' => break,
                    _ => token.push(c),
                }
            }
        } else {
            while let Some(&c) = chars.peek() {
                if c.is_whitespace() {
                    break;
                }
                token.push(c);
                chars.next();
            }
        }
        tokens.push(token);
    }

    tokens
}
