//! Arithmetic calculator tool
//!
//! Evaluates a restricted arithmetic grammar with a recursive-descent
//! parser. Input is first checked against a character whitelist; any
//! character outside it rejects the expression without evaluating.
//! All failures are returned in-band as strings, never as `Err`.

use async_trait::async_trait;

use crate::error::Result;
use crate::tools::traits::Tool;

const ALLOWED_CHARS: &str = "0123456789.+-*/() ";

/// Performs arithmetic calculations for the agent.
pub struct CalculatorTool;

impl CalculatorTool {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CalculatorTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for CalculatorTool {
    fn name(&self) -> &str {
        "Calculator"
    }

    fn description(&self) -> &str {
        "Performs arithmetic calculations. Usage: Calculator[expression]"
    }

    async fn execute(&self, input: &str) -> Result<String> {
        if !input.chars().all(|c| ALLOWED_CHARS.contains(c)) {
            return Ok("Invalid expression".to_string());
        }
        Ok(match evaluate(input) {
            Ok(value) => format_value(value),
            Err(reason) => format!("Error: {reason}"),
        })
    }
}

/// Integral results print without a fractional part.
fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Evaluate an expression with standard precedence and parentheses.
fn evaluate(input: &str) -> std::result::Result<f64, String> {
    let mut parser = Parser::new(input);
    let value = parser.expression()?;
    parser.skip_whitespace();
    match parser.peek() {
        Some(c) => Err(format!("unexpected character '{}'", c as char)),
        None => Ok(value),
    }
}

// expression := term (('+' | '-') term)*
// term       := factor (('*' | '/') factor)*
// factor     := ('+' | '-')* primary
// primary    := number | '(' expression ')'
struct Parser<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            bytes: input.as_bytes(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while self.peek() == Some(b' ') {
            self.pos += 1;
        }
    }

    fn expression(&mut self) -> std::result::Result<f64, String> {
        let mut value = self.term()?;
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some(b'+') => {
                    self.pos += 1;
                    value += self.term()?;
                }
                Some(b'-') => {
                    self.pos += 1;
                    value -= self.term()?;
                }
                _ => return Ok(value),
            }
        }
    }

    fn term(&mut self) -> std::result::Result<f64, String> {
        let mut value = self.factor()?;
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some(b'*') => {
                    self.pos += 1;
                    value *= self.factor()?;
                }
                Some(b'/') => {
                    self.pos += 1;
                    let divisor = self.factor()?;
                    if divisor == 0.0 {
                        return Err("division by zero".to_string());
                    }
                    value /= divisor;
                }
                _ => return Ok(value),
            }
        }
    }

    fn factor(&mut self) -> std::result::Result<f64, String> {
        self.skip_whitespace();
        match self.peek() {
            Some(b'+') => {
                self.pos += 1;
                self.factor()
            }
            Some(b'-') => {
                self.pos += 1;
                Ok(-self.factor()?)
            }
            _ => self.primary(),
        }
    }

    fn primary(&mut self) -> std::result::Result<f64, String> {
        self.skip_whitespace();
        match self.peek() {
            Some(b'(') => {
                self.pos += 1;
                let value = self.expression()?;
                self.skip_whitespace();
                if self.peek() != Some(b')') {
                    return Err("missing closing parenthesis".to_string());
                }
                self.pos += 1;
                Ok(value)
            }
            Some(c) if c.is_ascii_digit() || c == b'.' => self.number(),
            Some(c) => Err(format!("unexpected character '{}'", c as char)),
            None => Err("unexpected end of expression".to_string()),
        }
    }

    fn number(&mut self) -> std::result::Result<f64, String> {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() || c == b'.' {
                self.pos += 1;
            } else {
                break;
            }
        }
        // Whitelisted bytes only, always valid UTF-8.
        let text = std::str::from_utf8(&self.bytes[start..self.pos])
            .map_err(|_| "invalid number".to_string())?;
        text.parse::<f64>()
            .map_err(|_| format!("invalid number '{text}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn run(input: &str) -> String {
        CalculatorTool::new().execute(input).await.unwrap()
    }

    #[tokio::test]
    async fn evaluates_valid_expressions() {
        assert_eq!(run("123*456").await, "56088");
        assert_eq!(run("2 + 3 * 4").await, "14");
        assert_eq!(run("(2 + 3) * 4").await, "20");
        assert_eq!(run("1/2").await, "0.5");
        assert_eq!(run("6/2").await, "3");
        assert_eq!(run("-3 + 5").await, "2");
        assert_eq!(run("10 - 2 - 3").await, "5");
    }

    #[tokio::test]
    async fn rejects_characters_outside_whitelist() {
        assert_eq!(run("2 + x").await, "Invalid expression");
        assert_eq!(run("__import__('os')").await, "Invalid expression");
        assert_eq!(run("1;2").await, "Invalid expression");
    }

    #[tokio::test]
    async fn reports_evaluation_failures_in_band() {
        assert_eq!(run("1/0").await, "Error: division by zero");
        assert!(run("1+*2").await.starts_with("Error:"));
        assert!(run("(1+2").await.starts_with("Error:"));
        assert!(run("").await.starts_with("Error:"));
        assert!(run("1.2.3").await.starts_with("Error:"));
    }

    #[tokio::test]
    async fn trailing_garbage_is_an_error() {
        assert!(run("1 2").await.starts_with("Error:"));
        assert!(run("(1)2").await.starts_with("Error:"));
    }
}
