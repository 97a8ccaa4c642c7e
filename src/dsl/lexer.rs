//! Lexer (tokenizer) for the diagram DSL.

use crate::error::{BreadboardError, Result};

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// The token's text
    pub text: String,
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

/// Token types in the DSL.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// An identifier (kind keyword, element name, flag word, etc.)
    Identifier,
    /// A number (integer or floating point, possibly with suffix)
    Number,
    /// A directive (starts with '.')
    Directive,
    /// Equals sign '='
    Equals,
    /// Newline
    Newline,
    /// End of file
    Eof,
}

/// Lexer for tokenizing diagram DSL input.
pub struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            line: 1,
            column: 1,
        }
    }

    /// Get the next token.
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace_and_comments();

        let line = self.line;
        let column = self.column;
        let token = |kind, text: String| Token {
            kind,
            text,
            line,
            column,
        };

        let ch = match self.chars.peek().copied() {
            Some(ch) => ch,
            None => return Ok(token(TokenKind::Eof, String::new())),
        };

        match ch {
            '\n' => {
                self.advance();
                Ok(token(TokenKind::Newline, "\n".to_string()))
            }
            '.' => {
                self.advance();
                let text = self.read_identifier();
                if text.is_empty() {
                    return Err(BreadboardError::lexer(line, column, "expected directive name after '.'"));
                }
                Ok(token(TokenKind::Directive, format!(".{}", text)))
            }
            '=' => {
                self.advance();
                Ok(token(TokenKind::Equals, "=".to_string()))
            }
            '-' | '+' | '0'..='9' => {
                let text = self.read_number();
                if parse_value(&text).is_none() {
                    return Err(BreadboardError::lexer(line, column, format!("malformed number '{}'", text)));
                }
                Ok(token(TokenKind::Number, text))
            }
            _ if ch.is_alphabetic() || ch == '_' => {
                let text = self.read_identifier();
                Ok(token(TokenKind::Identifier, text))
            }
            _ => Err(BreadboardError::lexer(
                line,
                column,
                format!("unexpected character '{}'", ch),
            )),
        }
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.chars.peek() {
                Some(' ' | '\t' | '\r') => {
                    self.advance();
                }
                Some('#' | ';') => {
                    self.read_while(|c| c != '\n');
                }
                _ => return,
            }
        }
    }

    /// Consume characters while `keep` holds and return them.
    fn read_while(&mut self, keep: impl Fn(char) -> bool) -> String {
        let mut text = String::new();
        while let Some(&ch) = self.chars.peek() {
            if !keep(ch) {
                break;
            }
            text.push(ch);
            self.advance();
        }
        text
    }

    fn read_identifier(&mut self) -> String {
        self.read_while(|c| c.is_alphanumeric() || c == '_')
    }

    /// Consume one character if it is in `set`.
    fn read_one_of(&mut self, set: &[char]) -> Option<char> {
        let ch = *self.chars.peek()?;
        if set.contains(&ch) {
            self.advance();
            Some(ch)
        } else {
            None
        }
    }

    /// Sign, mantissa, exponent, then at most one SI suffix.
    fn read_number(&mut self) -> String {
        let mut text = String::new();
        text.extend(self.read_one_of(&['-', '+']));
        text += &self.read_while(|c| c.is_ascii_digit());

        if let Some(dot) = self.read_one_of(&['.']) {
            text.push(dot);
            text += &self.read_while(|c| c.is_ascii_digit());
        }
        if let Some(e) = self.read_one_of(&['e', 'E']) {
            text.push(e);
            text.extend(self.read_one_of(&['-', '+']));
            text += &self.read_while(|c| c.is_ascii_digit());
        }

        let suffixes: Vec<char> = SI_SUFFIXES.iter().map(|(c, _)| *c).collect();
        text.extend(self.read_one_of(&suffixes));
        text
    }
}

/// Scale factors for value suffixes.
const SI_SUFFIXES: [(char, f64); 9] = [
    ('p', 1e-12),
    ('n', 1e-9),
    ('u', 1e-6),
    ('µ', 1e-6),
    ('m', 1e-3),
    ('k', 1e3),
    ('K', 1e3),
    ('M', 1e6),
    ('G', 1e9),
];

/// Parse a number with an optional SI suffix, e.g. `4.7k` or `100n`.
pub fn parse_value(text: &str) -> Option<f64> {
    let text = text.trim();
    let (digits, scale) = match text.chars().last() {
        Some(last) => match SI_SUFFIXES.iter().find(|(c, _)| *c == last) {
            Some((_, scale)) => (&text[..text.len() - last.len_utf8()], *scale),
            None => (text, 1.0),
        },
        None => return None,
    };
    digits.parse::<f64>().ok().map(|v| v * scale)
}
