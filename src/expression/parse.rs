//! Reference reader for the textual form of an [`Expression`]
//!
//! Grammar: `expr := int (op int)*`, `int := '-'? digit+`, whitespace ignored.
//! A `-` directly after an operator (or at the start) is read as a sign.

use std::iter::Peekable;
use std::str::{CharIndices, FromStr};

use log::debug;

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;
use crate::expression::operator::Operator;
use crate::expression::value::{Value, integer};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Number(i64),
    Op(Operator),
}

struct Lexer<'a> {
    chars: Peekable<CharIndices<'a>>,
    expect_operand: bool,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            chars: input.char_indices().peekable(),
            expect_operand: true,
        }
    }

    fn skip_whitespace(&mut self) {
        while self.chars.next_if(|(_, c)| c.is_whitespace()).is_some() {}
    }

    fn read_number(&mut self, start: usize) -> Result<Token, ExpressionError> {
        let mut literal = String::new();
        if self.chars.next_if(|&(_, c)| c == '-').is_some() {
            literal.push('-');
        }
        while let Some((_, c)) = self.chars.next_if(|(_, c)| c.is_ascii_digit()) {
            literal.push(c);
        }

        literal
            .parse::<i64>()
            .map(Token::Number)
            .map_err(|e| ExpressionError::Parse {
                position: start,
                message: format!("invalid number '{}': {}", literal, e),
            })
    }

    fn next_token(&mut self) -> Option<Result<(usize, Token), ExpressionError>> {
        self.skip_whitespace();
        let &(position, c) = self.chars.peek()?;

        let token = if self.expect_operand {
            self.read_number(position)
        } else {
            self.chars.next();
            Operator::try_from(c)
                .map(Token::Op)
                .map_err(|e| ExpressionError::Parse {
                    position,
                    message: e.to_string(),
                })
        };
        self.expect_operand = !self.expect_operand;

        Some(token.map(|t| (position, t)))
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<(usize, Token), ExpressionError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

fn tokenize(input: &str) -> Result<Vec<(usize, Token)>, ExpressionError> {
    let tokens = Lexer::new(input).collect::<Result<Vec<_>, _>>()?;

    match tokens.last().map(|&(_, token)| token) {
        None => Err(ExpressionError::Parse {
            position: 0,
            message: "empty expression".to_string(),
        }),
        Some(Token::Op(op)) => Err(ExpressionError::Parse {
            position: input.len(),
            message: format!("expression ends with operator '{}'", op),
        }),
        Some(Token::Number(_)) => Ok(tokens),
    }
}

impl FromStr for Expression {
    type Err = ExpressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        debug!("Parsing expression text: '{}'", s);

        let mut numbers = Vec::new();
        let mut operators = Vec::new();
        for (_, token) in tokenize(s)? {
            match token {
                Token::Number(n) => numbers.push(n),
                Token::Op(op) => operators.push(op),
            }
        }

        Expression::build(&numbers, &operators)
    }
}

/// Evaluate expression text by precedence climbing over its token stream
///
/// Shares no code with [`Expression::evaluate`] beyond the operator
/// arithmetic, so the two can be checked against each other.
///
/// # Errors
///
/// Returns a parse error for malformed text and an arithmetic error for a
/// zero divisor or an overflowing result.
pub fn evaluate_text(input: &str) -> Result<Value, ExpressionError> {
    let tokens = tokenize(input)?;
    let mut stream = tokens.into_iter().peekable();
    climb(&mut stream, 1, input.len())
}

fn climb<I>(
    tokens: &mut Peekable<I>,
    min_precedence: u8,
    end: usize,
) -> Result<Value, ExpressionError>
where
    I: Iterator<Item = (usize, Token)>,
{
    let mut left = match tokens.next() {
        Some((_, Token::Number(n))) => integer(n),
        Some((position, Token::Op(op))) => {
            return Err(ExpressionError::Parse {
                position,
                message: format!("expected number, found operator '{}'", op),
            });
        }
        None => {
            return Err(ExpressionError::Parse {
                position: end,
                message: "expected number, found end of input".to_string(),
            });
        }
    };

    while let Some(&(_, Token::Op(op))) = tokens.peek() {
        if op.precedence() < min_precedence {
            break;
        }
        tokens.next();
        let right = climb(tokens, op.precedence() + 1, end)?;
        left = op.apply(&left, &right)?;
    }

    Ok(left)
}
