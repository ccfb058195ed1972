use crate::BinaryOp::*;
use crate::_expression_parser::FnUpdateTemp;
use crate::_expression_parser::FnUpdateTemp::*;
use std::convert::TryFrom;
use std::iter::Peekable;
use std::str::Chars;

impl TryFrom<&str> for FnUpdateTemp {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let tokens = tokenize_group(&mut value.chars().peekable(), true)?;
        Ok(*(parse_formula(&tokens)?))
    }
}

/// **(internal)** An enum of possible tokens occurring in a string representation of
/// a Boolean expression.
#[derive(Debug, Eq, PartialEq)]
enum Token {
    Not,                // '!' or '~'
    And,                // '&'
    Or,                 // '|'
    Xor,                // '^'
    Imp,                // '=>'
    Iff,                // '<=>'
    Name(String),       // 'name'
    Tokens(Vec<Token>), // A block of tokens inside parentheses
}

/// **(internal)** Process a peekable iterator of characters into a vector of `Token`s.
///
/// The outer method always consumes the opening parenthesis and the recursive call consumes the
/// closing parenthesis. Use `top_level` to indicate that there will be no closing parenthesis.
fn tokenize_group(data: &mut Peekable<Chars>, top_level: bool) -> Result<Vec<Token>, String> {
    let mut output = Vec::new();
    while let Some(c) = data.next() {
        match c {
            c if c.is_whitespace() => { /* Skip whitespace */ }
            '!' | '~' => output.push(Token::Not),
            '&' => output.push(Token::And),
            '|' => output.push(Token::Or),
            '^' => output.push(Token::Xor),
            '=' => {
                if Some('>') == data.next() {
                    output.push(Token::Imp);
                } else {
                    return Err("Expected '>' after '='.".to_string());
                }
            }
            '<' => {
                if Some('=') != data.next() {
                    return Err("Expected '=' after '<'.".to_string());
                }
                if Some('>') != data.next() {
                    return Err("Expected '>' after '<='.".to_string());
                }
                output.push(Token::Iff);
            }
            ')' => {
                return if !top_level {
                    Ok(output)
                } else {
                    Err("Unexpected ')'.".to_string())
                };
            }
            '(' => {
                let tokens = tokenize_group(data, false)?;
                output.push(Token::Tokens(tokens));
            }
            c if is_valid_in_name(c) => {
                let mut name = vec![c];
                while let Some(c) = data.peek() {
                    if !is_valid_in_name(*c) {
                        break;
                    }
                    name.push(*c);
                    data.next();
                }
                output.push(Token::Name(name.into_iter().collect()));
            }
            _ => return Err(format!("Unexpected '{}'.", c)),
        }
    }
    if top_level {
        Ok(output)
    } else {
        Err("Expected ')'.".to_string())
    }
}

/// **(internal)** Check if given char can appear in a name.
fn is_valid_in_name(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '{' || c == '}' || c == '.'
}

/// **(internal)** Parse a `FnUpdateTemp` using the recursive steps.
fn parse_formula(data: &[Token]) -> Result<Box<FnUpdateTemp>, String> {
    iff(data)
}

/// **(internal)** Utility method to find first occurrence of a specific token in the token tree.
fn index_of_first(data: &[Token], token: Token) -> Option<usize> {
    data.iter().position(|t| *t == token)
}

/// **(internal)** Recursive parsing step 1: extract `<=>` operators.
fn iff(data: &[Token]) -> Result<Box<FnUpdateTemp>, String> {
    Ok(if let Some(i) = index_of_first(data, Token::Iff) {
        Box::new(Binary(Iff, imp(&data[..i])?, iff(&data[(i + 1)..])?))
    } else {
        imp(data)?
    })
}

/// **(internal)** Recursive parsing step 2: extract `=>` operators.
fn imp(data: &[Token]) -> Result<Box<FnUpdateTemp>, String> {
    Ok(if let Some(i) = index_of_first(data, Token::Imp) {
        Box::new(Binary(Imp, or(&data[..i])?, imp(&data[(i + 1)..])?))
    } else {
        or(data)?
    })
}

/// **(internal)** Recursive parsing step 3: extract `|` operators.
fn or(data: &[Token]) -> Result<Box<FnUpdateTemp>, String> {
    Ok(if let Some(i) = index_of_first(data, Token::Or) {
        Box::new(Binary(Or, and(&data[..i])?, or(&data[(i + 1)..])?))
    } else {
        and(data)?
    })
}

/// **(internal)** Recursive parsing step 4: extract `&` operators.
fn and(data: &[Token]) -> Result<Box<FnUpdateTemp>, String> {
    Ok(if let Some(i) = index_of_first(data, Token::And) {
        Box::new(Binary(And, xor(&data[..i])?, and(&data[(i + 1)..])?))
    } else {
        xor(data)?
    })
}

/// **(internal)** Recursive parsing step 5: extract `^` operators.
fn xor(data: &[Token]) -> Result<Box<FnUpdateTemp>, String> {
    Ok(if let Some(i) = index_of_first(data, Token::Xor) {
        Box::new(Binary(Xor, terminal(&data[..i])?, xor(&data[(i + 1)..])?))
    } else {
        terminal(data)?
    })
}

/// **(internal)** Recursive parsing step 6: extract terminals and negations.
fn terminal(data: &[Token]) -> Result<Box<FnUpdateTemp>, String> {
    if data.is_empty() {
        return Err("Expected formula, found nothing.".to_string());
    }
    if data[0] == Token::Not {
        return Ok(Box::new(Not(terminal(&data[1..])?)));
    }
    if data.len() == 1 {
        match &data[0] {
            Token::Name(name) => {
                return Ok(Box::new(match name.as_str() {
                    "true" | "1" => Const(true),
                    "false" | "0" => Const(false),
                    _ => Var(name.clone()),
                }));
            }
            Token::Tokens(inner) => return parse_formula(inner),
            _ => {} // otherwise, fall through to the error at the end.
        }
    }
    Err(format!("Unexpected: {:?}. Expecting formula.", data))
}

#[cfg(test)]
mod tests {
    use crate::_expression_parser::FnUpdateTemp;
    use crate::BinaryOp;
    use std::convert::TryFrom;

    #[test]
    fn parse_formula_basic() {
        let inputs = vec![
            "var",
            "!foo",
            "(var | x)",
            "(xyz123 & abc)",
            "(a ^ b)",
            "(a => b)",
            "(a <=> b)",
            "(a <=> !((a & b) => (c ^ d)))",
            "(p53.active & {x})",
        ];
        for str in inputs {
            assert_eq!(str, format!("{}", FnUpdateTemp::try_from(str).unwrap()))
        }
    }

    #[test]
    fn formula_constants_and_tilde() {
        assert_eq!(
            FnUpdateTemp::try_from("0").unwrap(),
            FnUpdateTemp::Const(false)
        );
        assert_eq!(
            FnUpdateTemp::try_from("true").unwrap(),
            FnUpdateTemp::Const(true)
        );
        assert_eq!(
            FnUpdateTemp::try_from("~a | 1").unwrap(),
            FnUpdateTemp::Binary(
                BinaryOp::Or,
                Box::new(FnUpdateTemp::Not(Box::new(FnUpdateTemp::Var(
                    "a".to_string()
                )))),
                Box::new(FnUpdateTemp::Const(true)),
            )
        );
    }

    #[test]
    fn test_invalid_input() {
        assert!(FnUpdateTemp::try_from("a = b").is_err());
        assert!(FnUpdateTemp::try_from("a > b").is_err());
        assert!(FnUpdateTemp::try_from("a <= b").is_err());
        assert!(FnUpdateTemp::try_from("a ? b").is_err());
        assert!(FnUpdateTemp::try_from("f(a, b)").is_err());
        assert!(FnUpdateTemp::try_from("a & (b <=> c").is_err());
        assert!(FnUpdateTemp::try_from("(f => g))").is_err());
        assert!(FnUpdateTemp::try_from("a & | g").is_err());
        assert!(FnUpdateTemp::try_from("a & !").is_err());
        assert!(FnUpdateTemp::try_from("a & a b c").is_err());
        assert!(FnUpdateTemp::try_from("").is_err());
    }

    #[test]
    fn operator_priority_test() {
        let formula = "a & b | c => d ^ e <=> f";
        let expected = "((((a & b) | c) => (d ^ e)) <=> f)".to_string();
        assert_eq!(
            expected,
            FnUpdateTemp::try_from(formula).unwrap().to_string()
        );
    }
}
