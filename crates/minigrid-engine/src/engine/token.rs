//! Expression tokenizer.
//!
//! Expressions are split on the four operator characters, keeping each
//! operator as its own token. Tokens are classified lazily by the evaluator
//! so the first error it reports is the first one it meets.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

use super::{CellRef, EvalError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn from_symbol(c: char) -> Option<Operator> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    /// Apply the operator with checked integer arithmetic.
    /// Division truncates toward zero.
    pub fn apply(self, lhs: i64, rhs: i64) -> Result<i64, EvalError> {
        match self {
            Operator::Add => lhs.checked_add(rhs).ok_or(EvalError::Overflow),
            Operator::Sub => lhs.checked_sub(rhs).ok_or(EvalError::Overflow),
            Operator::Mul => lhs.checked_mul(rhs).ok_or(EvalError::Overflow),
            Operator::Div => {
                if rhs == 0 {
                    return Err(EvalError::DivisionByZero);
                }
                lhs.checked_div(rhs).ok_or(EvalError::Overflow)
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token {
    Number(i64),
    Reference(CellRef),
    Operator(Operator),
}

impl Token {
    /// Classify a single lexeme produced by [`tokenize`].
    pub fn classify(lexeme: &str) -> Result<Token, EvalError> {
        if number_re().is_match(lexeme) {
            return lexeme
                .parse::<i64>()
                .map(Token::Number)
                .map_err(|_| EvalError::NumberOutOfRange(lexeme.to_string()));
        }

        if reference_re().is_match(lexeme) {
            // "A0" has the right shape but names no cell.
            return CellRef::from_str(lexeme)
                .map(Token::Reference)
                .ok_or_else(|| EvalError::UndefinedCell(lexeme.to_string()));
        }

        let mut chars = lexeme.chars();
        if let (Some(c), None) = (chars.next(), chars.next())
            && let Some(op) = Operator::from_symbol(c)
        {
            return Ok(Token::Operator(op));
        }

        Err(EvalError::UnknownToken(lexeme.to_string()))
    }
}

/// Split an expression into operand and operator lexemes.
///
/// Empty fragments between adjacent operators are dropped, so `3++4` yields
/// `["3", "+", "+", "4"]`.
pub fn tokenize(expression: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;

    for (idx, c) in expression.char_indices() {
        if Operator::from_symbol(c).is_some() {
            if start < idx {
                tokens.push(&expression[start..idx]);
            }
            let end = idx + c.len_utf8();
            tokens.push(&expression[idx..end]);
            start = end;
        }
    }
    if start < expression.len() {
        tokens.push(&expression[start..]);
    }

    tokens
}

/// Uppercase an expression and strip all whitespace from it.
pub fn normalize(expression: &str) -> String {
    expression
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

fn number_re() -> &'static Regex {
    static NUMBER_RE: OnceLock<Regex> = OnceLock::new();
    NUMBER_RE.get_or_init(|| Regex::new(r"^[0-9]+$").expect("number token regex must compile"))
}

/// Expression references are one letter and exactly one digit, so rows past
/// 9 can be loaded and rendered but not referenced.
fn reference_re() -> &'static Regex {
    static REFERENCE_RE: OnceLock<Regex> = OnceLock::new();
    REFERENCE_RE
        .get_or_init(|| Regex::new(r"^[A-Z][0-9]$").expect("reference token regex must compile"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_keeps_operators() {
        assert_eq!(tokenize("4-2+6/2"), vec!["4", "-", "2", "+", "6", "/", "2"]);
        assert_eq!(tokenize("A1*B2"), vec!["A1", "*", "B2"]);
    }

    #[test]
    fn test_tokenize_drops_empty_fragments() {
        assert_eq!(tokenize("3++4"), vec!["3", "+", "+", "4"]);
        assert_eq!(tokenize("+3"), vec!["+", "3"]);
        assert_eq!(tokenize("3+4+"), vec!["3", "+", "4", "+"]);
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(" a2 + 3\t"), "A2+3");
        assert_eq!(normalize("b2*4-2"), "B2*4-2");
    }

    #[test]
    fn test_classify_operands() {
        assert_eq!(Token::classify("42"), Ok(Token::Number(42)));
        assert_eq!(
            Token::classify("B2"),
            Ok(Token::Reference(CellRef::new(1, 1)))
        );
        assert_eq!(Token::classify("/"), Ok(Token::Operator(Operator::Div)));
    }

    #[test]
    fn test_classify_rejects_multi_digit_rows() {
        assert_eq!(
            Token::classify("A10"),
            Err(EvalError::UnknownToken("A10".to_string()))
        );
        assert_eq!(
            Token::classify("A0"),
            Err(EvalError::UndefinedCell("A0".to_string()))
        );
    }

    #[test]
    fn test_classify_unknown_tokens() {
        assert_eq!(
            Token::classify("AB"),
            Err(EvalError::UnknownToken("AB".to_string()))
        );
        assert_eq!(
            Token::classify("99999999999999999999"),
            Err(EvalError::NumberOutOfRange("99999999999999999999".to_string()))
        );
    }

    #[test]
    fn test_apply() {
        assert_eq!(Operator::Sub.apply(1, 5), Ok(-4));
        assert_eq!(Operator::Div.apply(7, 2), Ok(3));
        assert_eq!(Operator::Div.apply(-7, 2), Ok(-3));
        assert_eq!(Operator::Div.apply(1, 0), Err(EvalError::DivisionByZero));
        assert_eq!(Operator::Mul.apply(i64::MAX, 2), Err(EvalError::Overflow));
        assert_eq!(Operator::Div.apply(i64::MIN, -1), Err(EvalError::Overflow));
    }
}
