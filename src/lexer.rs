use std::iter::Peekable;
use std::str::Chars;

/// The token alphabet of the declaration grammar. Everything the scanner does
/// not need (operators, parentheses, numbers, commas) is dropped as trivia;
/// string literals and comments are skipped wholesale so brace characters
/// inside them cannot corrupt depth tracking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Ident(String),
    LBrace,
    RBrace,
    Colon,
}

pub fn tokenize(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = source.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' => tokens.push(Token::LBrace),
            '}' => tokens.push(Token::RBrace),
            ':' => tokens.push(Token::Colon),
            '"' => skip_string(&mut chars),
            '/' => match chars.peek() {
                Some('/') => skip_line_comment(&mut chars),
                Some('*') => skip_block_comment(&mut chars),
                _ => {}
            },
            c if is_ident_start(c) => {
                let mut ident = String::new();
                ident.push(c);
                while let Some(&next) = chars.peek() {
                    if !is_ident_continue(next) {
                        break;
                    }
                    ident.push(next);
                    chars.next();
                }
                tokens.push(Token::Ident(ident));
            }
            _ => {}
        }
    }

    tokens
}

fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic()
}

fn is_ident_continue(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}

/// Called after the opening quote. Handles `""` empty strings, single-line
/// strings with backslash escapes, and `"""` multiline strings. An
/// unterminated literal simply consumes to end of line (single-line) or end
/// of input (multiline).
fn skip_string(chars: &mut Peekable<Chars>) {
    if chars.peek() != Some(&'"') {
        skip_single_line_string(chars);
        return;
    }
    chars.next();

    if chars.peek() != Some(&'"') {
        // Just an empty "" literal.
        return;
    }
    chars.next();
    skip_multiline_string(chars);
}

fn skip_single_line_string(chars: &mut Peekable<Chars>) {
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            '"' | '\n' => return,
            _ => {}
        }
    }
}

fn skip_multiline_string(chars: &mut Peekable<Chars>) {
    let mut quotes = 0;
    while let Some(c) = chars.next() {
        match c {
            '"' => {
                quotes += 1;
                if quotes == 3 {
                    return;
                }
            }
            '\\' => {
                chars.next();
                quotes = 0;
            }
            _ => quotes = 0,
        }
    }
}

fn skip_line_comment(chars: &mut Peekable<Chars>) {
    for c in chars.by_ref() {
        if c == '\n' {
            return;
        }
    }
}

fn skip_block_comment(chars: &mut Peekable<Chars>) {
    chars.next();
    let mut last = ' ';
    for c in chars.by_ref() {
        if last == '*' && c == '/' {
            return;
        }
        last = c;
    }
}
