//! Lightweight, line-oriented syntax highlighting.
//!
//! A pure pass from (language, line) to kinded tokens: running it
//! twice over the same input yields identical output, and unknown
//! languages or lines without code degrade to a single plain token.
//! Kinds are abstract so the TUI layer decides the actual styling.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Keyword,
    String,
    Comment,
    Number,
    Plain,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
}

static KEYWORDS: Lazy<HashMap<&'static str, HashSet<&'static str>>> = Lazy::new(|| {
    let mut map = HashMap::new();
    map.insert(
        "javascript",
        HashSet::from([
            "const", "let", "var", "function", "return", "if", "else", "for", "while", "class",
            "new", "async", "await", "require", "import", "export", "try", "catch", "throw",
            "typeof", "true", "false", "null", "undefined",
        ]),
    );
    map.insert(
        "rust",
        HashSet::from([
            "fn", "let", "mut", "pub", "use", "mod", "struct", "enum", "impl", "match", "if",
            "else", "for", "while", "loop", "return", "true", "false", "self", "Self",
        ]),
    );
    map.insert(
        "bash",
        HashSet::from([
            "if", "then", "else", "fi", "for", "do", "done", "echo", "export", "cd", "mkdir",
            "npm", "node", "cargo",
        ]),
    );
    map.insert("toml", HashSet::from(["true", "false"]));
    map
});

fn comment_prefix(language: &str) -> Option<&'static str> {
    match language {
        "javascript" | "rust" => Some("//"),
        "bash" | "toml" => Some("#"),
        _ => None,
    }
}

/// Tokenize one line of code. Safe for any input: a language without a
/// keyword table produces a single Plain token.
pub fn highlight(language: &str, line: &str) -> Vec<Token> {
    if line.is_empty() {
        return vec![plain(String::new())];
    }

    let Some(keywords) = KEYWORDS.get(language) else {
        return vec![plain(line.to_string())];
    };

    if let Some(prefix) = comment_prefix(language)
        && let Some(at) = line.find(prefix)
        && !inside_string(&line[..at])
    {
        let mut tokens = if at > 0 {
            tokenize_code(&line[..at], keywords)
        } else {
            Vec::new()
        };
        tokens.push(Token {
            text: line[at..].to_string(),
            kind: TokenKind::Comment,
        });
        return tokens;
    }

    tokenize_code(line, keywords)
}

fn tokenize_code(line: &str, keywords: &HashSet<&str>) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut rest = line;

    while !rest.is_empty() {
        // String literal: consume up to the matching quote.
        if let Some(quote) = rest.chars().next().filter(|c| *c == '"' || *c == '\'') {
            let end = rest[1..]
                .find(quote)
                .map(|i| i + 2)
                .unwrap_or(rest.len());
            push(&mut tokens, &rest[..end], TokenKind::String);
            rest = &rest[end..];
            continue;
        }

        // Word: keyword, number, or plain identifier.
        let word_len = rest
            .find(|c: char| !c.is_alphanumeric() && c != '_')
            .unwrap_or(rest.len());
        if word_len > 0 {
            let word = &rest[..word_len];
            let kind = if keywords.contains(word) {
                TokenKind::Keyword
            } else if word.chars().all(|c| c.is_ascii_digit()) {
                TokenKind::Number
            } else {
                TokenKind::Plain
            };
            push(&mut tokens, word, kind);
            rest = &rest[word_len..];
            continue;
        }

        // Single non-word character.
        let ch_len = rest.chars().next().map(char::len_utf8).unwrap_or(1);
        push(&mut tokens, &rest[..ch_len], TokenKind::Plain);
        rest = &rest[ch_len..];
    }

    tokens
}

/// Crude check for an unclosed quote before a comment marker.
fn inside_string(prefix: &str) -> bool {
    let double = prefix.matches('"').count();
    let single = prefix.matches('\'').count();
    double % 2 == 1 || single % 2 == 1
}

fn push(tokens: &mut Vec<Token>, text: &str, kind: TokenKind) {
    // Merge runs of plain text so a line does not explode into
    // one-character tokens.
    if kind == TokenKind::Plain
        && let Some(last) = tokens.last_mut()
        && last.kind == TokenKind::Plain
    {
        last.text.push_str(text);
        return;
    }
    tokens.push(Token {
        text: text.to_string(),
        kind,
    });
}

fn plain(text: String) -> Token {
    Token {
        text,
        kind: TokenKind::Plain,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(language: &str, line: &str) -> Vec<(String, TokenKind)> {
        highlight(language, line)
            .into_iter()
            .map(|token| (token.text, token.kind))
            .collect()
    }

    #[test]
    fn keywords_and_strings_are_tagged() {
        let tokens = kinds("javascript", "const app = require('express');");
        assert_eq!(tokens[0], ("const".to_string(), TokenKind::Keyword));
        assert!(tokens.contains(&("'express'".to_string(), TokenKind::String)));
    }

    #[test]
    fn comments_swallow_the_rest_of_the_line() {
        let tokens = kinds("javascript", "app.listen(3000); // start");
        assert_eq!(
            tokens.last().unwrap(),
            &("// start".to_string(), TokenKind::Comment)
        );
    }

    #[test]
    fn comment_marker_inside_a_string_is_not_a_comment() {
        let tokens = kinds("javascript", "const url = 'http://example.com';");
        assert!(!tokens.iter().any(|(_, kind)| *kind == TokenKind::Comment));
    }

    #[test]
    fn unknown_language_is_plain() {
        let tokens = kinds("brainfuck", "+++ ---");
        assert_eq!(tokens, vec![("+++ ---".to_string(), TokenKind::Plain)]);
    }

    #[test]
    fn highlighting_is_idempotent_and_lossless() {
        let line = "app.get('/api/tasks', (req, res) => { return res.json({}); });";
        let first = highlight("javascript", line);
        let second = highlight("javascript", line);
        assert_eq!(first, second);

        let rebuilt: String = first.into_iter().map(|token| token.text).collect();
        assert_eq!(rebuilt, line);
    }

    #[test]
    fn numbers_are_tagged() {
        let tokens = kinds("javascript", "const PORT = 3000;");
        assert!(tokens.contains(&("3000".to_string(), TokenKind::Number)));
    }

    #[test]
    fn empty_line_is_a_single_plain_token() {
        assert_eq!(
            kinds("javascript", ""),
            vec![(String::new(), TokenKind::Plain)]
        );
    }
}
