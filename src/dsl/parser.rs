//! Parser for the diagram DSL.

use super::ast::*;
use super::lexer::{parse_value, Lexer, Token, TokenKind};
use crate::circuit::{Orientation, Polarity};
use crate::components::{ElementKind, ParamValue};
use crate::error::{BreadboardError, Result};

/// Parser for diagram DSL.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
}

impl<'a> Parser<'a> {
    /// Create a new parser with the given lexer.
    pub fn new(lexer: Lexer<'a>) -> Self {
        Self {
            lexer,
            current: Token {
                kind: TokenKind::Newline,
                text: String::new(),
                line: 1,
                column: 1,
            },
        }
    }

    /// Parse the entire diagram description.
    pub fn parse(&mut self) -> Result<DiagramAst> {
        let mut ast = DiagramAst::new();
        self.advance()?;

        while self.current.kind != TokenKind::Eof {
            match self.current.kind {
                // Skip empty lines
                TokenKind::Newline => {
                    self.advance()?;
                    continue;
                }
                TokenKind::Directive => self.parse_directive(&mut ast)?,
                TokenKind::Identifier => {
                    let element = self.parse_element()?;
                    if ast.elements.iter().any(|e| e.name == element.name) {
                        return Err(BreadboardError::DuplicateElement { id: element.name });
                    }
                    ast.elements.push(element);
                }
                _ => {
                    return Err(BreadboardError::parse(
                        self.current.line,
                        format!("unexpected token: {:?}", self.current.text),
                    ));
                }
            }

            // Every statement ends the line
            match self.current.kind {
                TokenKind::Newline => self.advance()?,
                TokenKind::Eof => {}
                _ => {
                    return Err(BreadboardError::parse(
                        self.current.line,
                        format!("unexpected trailing token: {:?}", self.current.text),
                    ));
                }
            }
        }

        Ok(ast)
    }

    fn advance(&mut self) -> Result<()> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    fn expect(&mut self, kind: TokenKind, what: &str) -> Result<Token> {
        if self.current.kind == kind {
            let tok = self.current.clone();
            self.advance()?;
            Ok(tok)
        } else {
            Err(BreadboardError::parse(
                self.current.line,
                format!("expected {}, got {:?}", what, self.current.text),
            ))
        }
    }

    fn expect_number(&mut self, what: &str) -> Result<f64> {
        let tok = self.expect(TokenKind::Number, what)?;
        parse_value(&tok.text)
            .ok_or_else(|| BreadboardError::parse(tok.line, format!("invalid number: {}", tok.text)))
    }

    fn parse_directive(&mut self, ast: &mut DiagramAst) -> Result<()> {
        let directive = self.current.text.clone();
        let line = self.current.line;
        self.advance()?;

        match directive.to_lowercase().as_str() {
            ".wire" => {
                let source = self.expect(TokenKind::Identifier, "wire source")?.text;
                let target = self.expect(TokenKind::Identifier, "wire target")?.text;
                let id = if self.current.kind == TokenKind::Identifier {
                    let tok = self.current.text.clone();
                    self.advance()?;
                    Some(tok)
                } else {
                    None
                };
                ast.wires.push(WireDef {
                    source,
                    target,
                    id,
                    line,
                });
            }
            _ => {
                return Err(BreadboardError::parse(
                    line,
                    format!("unknown directive: {}", directive),
                ));
            }
        }

        Ok(())
    }

    fn parse_element(&mut self) -> Result<ElementDef> {
        let keyword = self.current.text.clone();
        let line = self.current.line;
        let kind = ElementKind::from_keyword(&keyword).ok_or_else(|| {
            BreadboardError::UnknownElementKind {
                kind: keyword.clone(),
                line,
            }
        })?;
        self.advance()?;

        let name = self.expect(TokenKind::Identifier, "element name")?.text;
        let x = self.expect_number("x coordinate")?;
        let y = self.expect_number("y coordinate")?;

        let mut orientation = None;
        let mut polarity = None;
        let mut params: Vec<(String, ParamValue)> = Vec::new();

        // Options until end of line
        while self.current.kind == TokenKind::Identifier {
            let word = self.current.text.clone();
            self.advance()?;

            if self.current.kind == TokenKind::Equals {
                self.advance()?;
                let value = self.parse_param_value(&name, line)?;
                let key = word.to_lowercase();
                if params.iter().any(|(k, _)| *k == key) {
                    return Err(BreadboardError::invalid_element(
                        &name,
                        line,
                        format!("parameter '{}' given twice", key),
                    ));
                }
                params.push((key, value));
            } else if let Some(o) = Orientation::from_keyword(&word) {
                orientation = Some(o);
            } else if let Some(p) = Polarity::from_keyword(&word) {
                polarity = Some(p);
            } else {
                return Err(BreadboardError::invalid_element(
                    &name,
                    line,
                    format!("unexpected option '{}'", word),
                ));
            }
        }

        Ok(ElementDef {
            kind,
            name,
            x,
            y,
            orientation,
            polarity,
            params,
            line,
        })
    }

    fn parse_param_value(&mut self, name: &str, line: usize) -> Result<ParamValue> {
        let tok = self.current.clone();
        let value = match tok.kind {
            TokenKind::Number => parse_value(&tok.text).map(ParamValue::Number),
            TokenKind::Identifier => ParamValue::flag_from_keyword(&tok.text),
            _ => None,
        };
        let value = value.ok_or_else(|| {
            BreadboardError::invalid_element(name, line, format!("invalid parameter value {:?}", tok.text))
        })?;
        self.advance()?;
        Ok(value)
    }
}
