//! DSL parser for circuit diagram files.
//!
//! Diagrams can be saved and loaded as a small line-oriented text format.
//! Each line places one element or draws one wire; everything the editor
//! derives (footprints, anchors, ids of unnamed wires) is rebuilt on load.
//!
//! # Grammar Overview
//!
//! ```text
//! diagram     = { line }
//! line        = comment | directive | element | empty
//! comment     = ('#' | ';') { any_char }
//! directive   = ".wire" source target [wire_id]
//! element     = kind name x y { option }
//! option      = orientation | polarity | param
//!
//! kind        = "power_source" | "resistor" | "bulb" | "switch" | "capacitor"
//!             | "polar_capacitor" | "diode" | "ammeter" | "voltmeter"
//!             | "ohmmeter" | "galvanometer"
//! orientation = "hor" | "ver"
//! polarity    = "pos" | "neg"
//! param       = identifier '=' (number | "on" | "off")
//!
//! number      = ['-'|'+'] digit+ ['.' digit+] [('e'|'E') ['-'|'+'] digit+] [unit_suffix]
//! unit_suffix = 'p' | 'n' | 'u' | 'm' | 'k' | 'M' | 'G'
//! identifier  = (letter | '_') { letter | digit | '_' }
//! ```
//!
//! `battery`, `lamp` and `led` are accepted as aliases for `power_source`,
//! `bulb` and `diode`. Polarity is only allowed on polar kinds.
//!
//! # Example
//!
//! ```text
//! # Lamp with a switch
//! power_source ps 140 0   hor power=9
//! switch       sw 220 40  ver switch_state=on
//! bulb         b1 140 120
//! resistor     r1 100 40  ver resistance=4.7k
//!
//! .wire ps sw
//! .wire sw b1
//! .wire b1 r1
//! .wire r1 ps
//! ```

mod ast;
mod lexer;
mod parser;

pub use ast::*;
pub use lexer::{parse_value, Lexer, Token, TokenKind};
pub use parser::Parser;

use crate::error::Result;

/// Parse a diagram DSL string into an AST.
pub fn parse(input: &str) -> Result<DiagramAst> {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer);
    parser.parse()
}

/// Parse a diagram DSL file.
#[cfg(feature = "cli")]
pub fn parse_file(path: &std::path::Path) -> Result<DiagramAst> {
    let content =
        std::fs::read_to_string(path).map_err(|e| crate::error::BreadboardError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;
    parse(&content)
}
