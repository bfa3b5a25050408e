// A Token is the smallest logical unit of input to `smallsh`.  It is created by
// breaking a line on spaces.  There is no quoting and no escaping: an
// unescaped space always splits.  The operators `&`, `<` and `>` are only
// recognized when they stand alone.

use nix::unistd::Pid;
use unicode_segmentation::UnicodeSegmentation;

mod expansion;
use expansion::expand_pid;

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Token {
    Argument(String),       // `$$` already expanded
    Background,             // &
    InputRedirect(String),  // < path
    OutputRedirect(String), // > path
}

// Breaks `rawline` into tokens, substituting `pid` for `$$` in arguments.
// A redirection operator consumes the following part as its path; when no
// part follows, the redirection is dropped.
pub fn get_tokens(rawline: &str, pid: Pid) -> Vec<Token> {
    if rawline.is_empty() {
        return vec![Token::Argument(String::new())];
    }

    let mut tokens = Vec::<Token>::new();
    let mut parts = get_parts(rawline).into_iter();

    while let Some(part) = parts.next() {
        match part.as_str() {
            "&" => tokens.push(Token::Background),
            "<" => {
                if let Some(path) = parts.next() {
                    tokens.push(Token::InputRedirect(path));
                }
            }
            ">" => {
                if let Some(path) = parts.next() {
                    tokens.push(Token::OutputRedirect(path));
                }
            }
            _ => tokens.push(Token::Argument(expand_pid(&part, pid))),
        }
    }

    tokens
}

// Runs of spaces separate parts; empty parts are never produced.
// A space always splits, even when a combining mark clusters onto it;
// the mark then starts the next part.
fn get_parts(rawline: &str) -> Vec<String> {
    let mut parts = Vec::<String>::new();
    let mut part = String::new();

    for grapheme in rawline.graphemes(true) {
        if let Some(rest) = grapheme.strip_prefix(' ') {
            if !part.is_empty() {
                parts.push(part);
                part = String::new();
            }
            part.push_str(rest.trim_start_matches(' '));
        } else {
            part.push_str(grapheme);
        }
    }

    if !part.is_empty() {
        parts.push(part);
    }

    parts
}
