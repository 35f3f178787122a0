//! Parser for `.tfc` netlists.
//!
//! Recognised lines:
//!
//! - `.v a,b,c`: wire declaration, first name is wire 0
//! - any other `.x ...` directive, `BEGIN`, `END`: accepted and ignored
//! - `t<k> w1,...,wk`: multi-controlled flip, last operand is the target
//! - `f<k> ...`: Fredkin family, rejected

use tracing::trace;

use crate::ast::{GateLine, Netlist};
use crate::error::{TfcError, TfcResult};
use crate::lexer::{SpannedToken, Token, tokenize};

/// Parse a netlist source string.
pub fn parse(source: &str) -> TfcResult<Netlist> {
    let mut parser = Parser::new(source)?;
    parser.parse_netlist()
}

/// Parser state.
struct Parser {
    tokens: Vec<SpannedToken>,
    pos: usize,
}

impl Parser {
    fn new(source: &str) -> TfcResult<Self> {
        let mut tokens = Vec::new();
        for result in tokenize(source) {
            match result {
                Ok(t) => tokens.push(t),
                Err((line, message)) => return Err(TfcError::Lexer { line, message }),
            }
        }
        Ok(Self { tokens, pos: 0 })
    }

    fn peek(&self) -> Option<&SpannedToken> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<SpannedToken> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn parse_netlist(&mut self) -> TfcResult<Netlist> {
        let mut netlist = Netlist::default();
        let mut declared = false;

        while let Some(first) = self.advance() {
            let line = first.line;
            match first.token {
                Token::Newline => {}
                Token::Directive(name) if name == "v" => {
                    if declared {
                        return Err(TfcError::DuplicateDeclaration { line });
                    }
                    declared = true;
                    for name in self.parse_operands(line)? {
                        if netlist.wires.contains(&name) {
                            return Err(TfcError::DuplicateWire { line, name });
                        }
                        netlist.wires.push(name);
                    }
                }
                Token::Directive(name) => {
                    trace!(line, directive = %name, "Skipping directive");
                    self.skip_line();
                }
                Token::Word(word)
                    if word.eq_ignore_ascii_case("begin") || word.eq_ignore_ascii_case("end") =>
                {
                    self.expect_end_of_line(line)?;
                }
                Token::Word(word) => {
                    let gate = self.parse_gate(line, word)?;
                    netlist.gates.push(gate);
                }
                Token::Comma => {
                    return Err(TfcError::UnexpectedToken {
                        line,
                        expected: "a directive or gate".into(),
                        found: Token::Comma.to_string(),
                    });
                }
            }
        }

        if !declared {
            return Err(TfcError::MissingDeclaration);
        }
        Ok(netlist)
    }

    /// Parse `t<k>` operands after the mnemonic.
    fn parse_gate(&mut self, line: usize, mnemonic: String) -> TfcResult<GateLine> {
        let arity = if let Some(digits) = mnemonic.strip_prefix('t') {
            digits.parse::<usize>().ok()
        } else if mnemonic
            .strip_prefix('f')
            .is_some_and(|digits| digits.parse::<usize>().is_ok())
        {
            return Err(TfcError::UnsupportedGate {
                line,
                gate: mnemonic,
            });
        } else {
            None
        };
        let Some(arity) = arity else {
            return Err(TfcError::UnexpectedToken {
                line,
                expected: "a directive or gate".into(),
                found: mnemonic,
            });
        };
        if arity == 0 {
            return Err(TfcError::EmptyGate {
                line,
                gate: mnemonic,
            });
        }

        let operands = self.parse_operands(line)?;
        if operands.len() != arity {
            return Err(TfcError::OperandCountMismatch {
                line,
                gate: mnemonic,
                expected: arity,
                got: operands.len(),
            });
        }
        Ok(GateLine {
            line,
            arity,
            operands,
        })
    }

    /// Parse `name (, name)*` up to the end of the line.
    fn parse_operands(&mut self, line: usize) -> TfcResult<Vec<String>> {
        let mut names = Vec::new();
        loop {
            match self.advance().map(|t| t.token) {
                Some(Token::Word(name)) => names.push(name),
                Some(Token::Newline) | None if names.is_empty() => return Ok(names),
                other => return Err(unexpected(line, "a wire name", other)),
            }
            match self.advance().map(|t| t.token) {
                Some(Token::Comma) => {}
                Some(Token::Newline) | None => return Ok(names),
                other => return Err(unexpected(line, "',' or end of line", other)),
            }
        }
    }

    fn expect_end_of_line(&mut self, line: usize) -> TfcResult<()> {
        match self.advance().map(|t| t.token) {
            Some(Token::Newline) | None => Ok(()),
            other => Err(unexpected(line, "end of line", other)),
        }
    }

    fn skip_line(&mut self) {
        while let Some(t) = self.peek() {
            let done = t.token == Token::Newline;
            self.pos += 1;
            if done {
                break;
            }
        }
    }
}

fn unexpected(line: usize, expected: &str, found: Option<Token>) -> TfcError {
    TfcError::UnexpectedToken {
        line,
        expected: expected.to_string(),
        found: found.map_or_else(|| "end of input".to_string(), |t| t.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HALF_ADDER: &str = "\
# half adder
.v a,b,c
.i a,b
.o b,c
BEGIN
t3 a,b,c
t2 a,b
END
";

    #[test]
    fn test_parse_half_adder() {
        let netlist = parse(HALF_ADDER).unwrap();
        assert_eq!(netlist.wires, vec!["a", "b", "c"]);
        assert_eq!(netlist.gates.len(), 2);

        let toffoli = &netlist.gates[0];
        assert_eq!(toffoli.line, 6);
        assert_eq!(toffoli.arity, 3);
        assert_eq!(toffoli.controls(), &["a".to_string(), "b".to_string()]);
        assert_eq!(toffoli.target(), "c");

        let cnot = &netlist.gates[1];
        assert_eq!(cnot.controls(), &["a".to_string()]);
        assert_eq!(cnot.target(), "b");
    }

    #[test]
    fn test_gate_before_declaration_is_allowed() {
        let netlist = parse("t1 x\n.v x\n").unwrap();
        assert_eq!(netlist.num_wires(), 1);
        assert_eq!(netlist.gates[0].target(), "x");
    }

    #[test]
    fn test_missing_declaration() {
        assert!(matches!(parse("t1 a\n"), Err(TfcError::MissingDeclaration)));
        assert!(matches!(parse(""), Err(TfcError::MissingDeclaration)));
    }

    #[test]
    fn test_duplicate_declarations() {
        assert!(matches!(
            parse(".v a\n.v b\n"),
            Err(TfcError::DuplicateDeclaration { line: 2 })
        ));
        assert!(matches!(
            parse(".v a,b,a\n"),
            Err(TfcError::DuplicateWire { line: 1, ref name }) if name == "a"
        ));
    }

    #[test]
    fn test_operand_count_mismatch() {
        let err = parse(".v a,b,c\nt3 a,b\n").unwrap_err();
        assert!(matches!(
            err,
            TfcError::OperandCountMismatch {
                line: 2,
                expected: 3,
                got: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_t0_rejected() {
        assert!(matches!(
            parse(".v a\nt0\n"),
            Err(TfcError::EmptyGate { line: 2, .. })
        ));
    }

    #[test]
    fn test_fredkin_rejected() {
        let err = parse(".v a,b,c\nf3 a,b,c\n").unwrap_err();
        assert!(matches!(err, TfcError::UnsupportedGate { line: 2, ref gate } if gate == "f3"));
        assert!(err.is_malformed());
    }

    #[test]
    fn test_unknown_statement_rejected() {
        assert!(matches!(
            parse(".v a\nh a\n"),
            Err(TfcError::UnexpectedToken { line: 2, .. })
        ));
        assert!(matches!(
            parse(".v a\ntx a\n"),
            Err(TfcError::UnexpectedToken { line: 2, .. })
        ));
    }

    #[test]
    fn test_directive_payloads_and_punctuated_names() {
        let source = ".version 1.0\n.v a-1,b\n.c 0,-\n.ol x.y\nt2 a-1,b\n";
        let netlist = parse(source).unwrap();
        assert_eq!(netlist.wires, vec!["a-1", "b"]);
        assert_eq!(netlist.gates.len(), 1);
        assert_eq!(netlist.gates[0].line, 5);
        assert_eq!(netlist.gates[0].controls(), &["a-1".to_string()]);
    }

    #[test]
    fn test_non_ascii_leading_word_rejected() {
        assert!(matches!(
            parse(".v a\nλ a\n"),
            Err(TfcError::UnexpectedToken { line: 2, .. })
        ));
    }

    #[test]
    fn test_malformed_operand_lists() {
        assert!(matches!(
            parse(".v a,b\nt2 a b\n"),
            Err(TfcError::UnexpectedToken { line: 2, .. })
        ));
        assert!(matches!(
            parse(".v a,b\nt2 a,\n"),
            Err(TfcError::UnexpectedToken { line: 2, .. })
        ));
        assert!(matches!(
            parse(".v a,b\nBEGIN a\n"),
            Err(TfcError::UnexpectedToken { line: 2, .. })
        ));
    }
}
