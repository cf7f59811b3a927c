//! Restricted literal grammar for mapping/sequence text.
//!
//! Accepts quoted strings (single or double, adjacent literals concatenate),
//! integers and floats, `True`/`False`/`None` (and `true`/`false`/`null`),
//! lists `[..]`, tuples `(..)`, and mappings `{key: value}`. Trailing commas
//! and `#` comments are allowed. Any other bare name is a syntax error.

use super::DagValue;

/// Nesting deeper than this is rejected rather than recursed into.
const MAX_DEPTH: usize = 64;

/// Syntax error in literal text.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message} at offset {offset}")]
pub struct LiteralError {
    /// Character offset into the input.
    pub offset: usize,
    pub message: String,
}

/// Parse `text` as a single literal value.
pub fn parse_literal(text: &str) -> Result<DagValue, LiteralError> {
    let mut parser = Parser::new(text);
    parser.skip_trivia();
    let value = parser.parse_value(0)?;
    parser.skip_trivia();
    if let Some(c) = parser.peek() {
        return Err(parser.error(format!("unexpected {c:?} after the value")));
    }
    Ok(value)
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
}

impl Parser {
    fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        Some(c)
    }

    fn error(&self, message: impl Into<String>) -> LiteralError {
        LiteralError {
            offset: self.pos,
            message: message.into(),
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), LiteralError> {
        match self.peek() {
            Some(c) if c == expected => {
                self.pos += 1;
                Ok(())
            }
            Some(c) => Err(self.error(format!("expected {expected:?}, found {c:?}"))),
            None => Err(self.error(format!("expected {expected:?}, found end of input"))),
        }
    }

    /// Skip whitespace and `#` line comments.
    fn skip_trivia(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.pos += 1;
            } else if c == '#' {
                while let Some(c) = self.bump() {
                    if c == '\n' {
                        break;
                    }
                }
            } else {
                break;
            }
        }
    }

    fn parse_value(&mut self, depth: usize) -> Result<DagValue, LiteralError> {
        if depth > MAX_DEPTH {
            return Err(self.error("nesting too deep"));
        }
        match self.peek() {
            Some('{') => self.parse_map(depth),
            Some('[') => self
                .parse_sequence(depth, ']')
                .map(|(items, _)| DagValue::List(items)),
            Some('(') => self.parse_tuple(depth),
            Some('\'') | Some('"') => self.parse_strings().map(DagValue::Str),
            Some(c) if c.is_ascii_digit() || c == '-' || c == '+' || c == '.' => self.parse_number(),
            Some(c) if c.is_alphabetic() || c == '_' => self.parse_keyword(),
            Some(c) => Err(self.error(format!("unexpected {c:?}"))),
            None => Err(self.error("unexpected end of input")),
        }
    }

    fn parse_map(&mut self, depth: usize) -> Result<DagValue, LiteralError> {
        self.expect('{')?;
        let mut entries = Vec::new();
        loop {
            self.skip_trivia();
            if self.peek() == Some('}') {
                self.pos += 1;
                return Ok(DagValue::Map(entries));
            }
            let key = self.parse_value(depth + 1)?;
            self.skip_trivia();
            match self.peek() {
                Some(':') => self.pos += 1,
                Some(',') | Some('}') => {
                    return Err(self.error("sets are not supported; expected ':' after the key"))
                }
                _ => return Err(self.error("expected ':' after the key")),
            }
            self.skip_trivia();
            let value = self.parse_value(depth + 1)?;
            entries.push((key, value));
            self.skip_trivia();
            match self.peek() {
                Some(',') => self.pos += 1,
                Some('}') => {}
                Some(c) => return Err(self.error(format!("expected ',' or '}}', found {c:?}"))),
                None => return Err(self.error("unterminated mapping")),
            }
        }
    }

    /// Comma-separated values up to `close`, plus whether any separator was seen.
    /// The opening bracket is consumed here.
    fn parse_sequence(
        &mut self,
        depth: usize,
        close: char,
    ) -> Result<(Vec<DagValue>, bool), LiteralError> {
        self.bump();
        let mut items = Vec::new();
        let mut saw_comma = false;
        loop {
            self.skip_trivia();
            if self.peek() == Some(close) {
                self.pos += 1;
                return Ok((items, saw_comma));
            }
            items.push(self.parse_value(depth + 1)?);
            self.skip_trivia();
            match self.peek() {
                Some(',') => {
                    saw_comma = true;
                    self.pos += 1;
                }
                Some(c) if c == close => {}
                Some(c) => {
                    return Err(self.error(format!("expected ',' or {close:?}, found {c:?}")))
                }
                None => return Err(self.error("unterminated sequence")),
            }
        }
    }

    /// `(x)` is grouping; `()`, `(x,)` and `(x, y)` are sequences.
    fn parse_tuple(&mut self, depth: usize) -> Result<DagValue, LiteralError> {
        let (mut items, saw_comma) = self.parse_sequence(depth, ')')?;
        if items.len() == 1 && !saw_comma {
            return Ok(items.remove(0));
        }
        Ok(DagValue::List(items))
    }

    /// One or more adjacent string literals, concatenated.
    fn parse_strings(&mut self) -> Result<String, LiteralError> {
        let mut out = self.parse_string()?;
        loop {
            let save = self.pos;
            self.skip_trivia();
            match self.peek() {
                Some('\'') | Some('"') => out.push_str(&self.parse_string()?),
                _ => {
                    self.pos = save;
                    return Ok(out);
                }
            }
        }
    }

    fn parse_string(&mut self) -> Result<String, LiteralError> {
        let quote = match self.bump() {
            Some(q @ ('\'' | '"')) => q,
            _ => return Err(self.error("expected a quoted string")),
        };
        let mut out = String::new();
        loop {
            match self.bump() {
                None | Some('\n') => return Err(self.error("unterminated string")),
                Some(c) if c == quote => return Ok(out),
                Some('\\') => self.parse_escape(&mut out)?,
                Some(c) => out.push(c),
            }
        }
    }

    fn parse_escape(&mut self, out: &mut String) -> Result<(), LiteralError> {
        match self.bump() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            Some('\\') => out.push('\\'),
            Some('\'') => out.push('\''),
            Some('"') => out.push('"'),
            Some('/') => out.push('/'),
            Some('u') => {
                let mut code = 0u32;
                for _ in 0..4 {
                    let digit = self
                        .bump()
                        .and_then(|c| c.to_digit(16))
                        .ok_or_else(|| self.error("invalid \\u escape"))?;
                    code = code * 16 + digit;
                }
                let c = char::from_u32(code).ok_or_else(|| self.error("invalid \\u code point"))?;
                out.push(c);
            }
            // Unknown escapes are kept verbatim.
            Some(c) => {
                out.push('\\');
                out.push(c);
            }
            None => return Err(self.error("unterminated string")),
        }
        Ok(())
    }

    fn parse_number(&mut self) -> Result<DagValue, LiteralError> {
        let start = self.pos;
        if matches!(self.peek(), Some('-') | Some('+')) {
            self.pos += 1;
        }
        let mut is_float = false;
        while let Some(c) = self.peek() {
            match c {
                '0'..='9' | '_' => self.pos += 1,
                '.' => {
                    is_float = true;
                    self.pos += 1;
                }
                'e' | 'E' => {
                    is_float = true;
                    self.pos += 1;
                    if matches!(self.peek(), Some('-') | Some('+')) {
                        self.pos += 1;
                    }
                }
                _ => break,
            }
        }
        let text: String = self.chars[start..self.pos]
            .iter()
            .filter(|c| **c != '_')
            .collect();
        let invalid = || LiteralError {
            offset: start,
            message: format!("invalid number {text:?}"),
        };
        if is_float {
            text.parse::<f64>().map(DagValue::Float).map_err(|_| invalid())
        } else {
            text.parse::<i64>()
                .map(DagValue::Int)
                .or_else(|_| text.parse::<f64>().map(DagValue::Float))
                .map_err(|_| invalid())
        }
    }

    fn parse_keyword(&mut self) -> Result<DagValue, LiteralError> {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_alphanumeric() || c == '_' {
                self.pos += 1;
            } else {
                break;
            }
        }
        let word: String = self.chars[start..self.pos].iter().collect();
        match word.as_str() {
            "True" | "true" => Ok(DagValue::Bool(true)),
            "False" | "false" => Ok(DagValue::Bool(false)),
            "None" | "null" => Ok(DagValue::Null),
            _ => Err(LiteralError {
                offset: start,
                message: format!("bare name {word:?} is not a literal; quote it"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &str) -> DagValue {
        DagValue::Str(v.to_string())
    }

    #[test]
    fn parses_single_quoted_mapping() {
        let value = parse_literal("{'smoking': ['lung cancer'], 'air pollution exposure': ['lung cancer']}")
            .unwrap();
        assert_eq!(
            value,
            DagValue::Map(vec![
                (s("smoking"), DagValue::List(vec![s("lung cancer")])),
                (s("air pollution exposure"), DagValue::List(vec![s("lung cancer")])),
            ])
        );
    }

    #[test]
    fn accepts_trailing_commas_comments_and_tuples() {
        let value = parse_literal("{\n  'a': ('b', 'c',),  # edges\n  'd': 'e',\n}").unwrap();
        assert_eq!(
            value,
            DagValue::Map(vec![
                (s("a"), DagValue::List(vec![s("b"), s("c")])),
                (s("d"), s("e")),
            ])
        );
    }

    #[test]
    fn parenthesized_value_is_grouping() {
        assert_eq!(parse_literal("('x')").unwrap(), s("x"));
        assert_eq!(parse_literal("('x',)").unwrap(), DagValue::List(vec![s("x")]));
        assert_eq!(parse_literal("()").unwrap(), DagValue::List(vec![]));
        assert_eq!(parse_literal("('a,b')").unwrap(), s("a,b"));
    }

    #[test]
    fn keywords_and_numbers() {
        assert_eq!(
            parse_literal("[True, False, None, -3, 0.5, 1e3]").unwrap(),
            DagValue::List(vec![
                DagValue::Bool(true),
                DagValue::Bool(false),
                DagValue::Null,
                DagValue::Int(-3),
                DagValue::Float(0.5),
                DagValue::Float(1000.0),
            ])
        );
    }

    #[test]
    fn non_string_keys_survive_parsing() {
        assert_eq!(
            parse_literal("{1: ['a']}").unwrap(),
            DagValue::Map(vec![(DagValue::Int(1), DagValue::List(vec![s("a")]))])
        );
    }

    #[test]
    fn escapes_and_concatenation() {
        assert_eq!(parse_literal(r#"'it\'s' " fine""#).unwrap(), s("it's fine"));
        assert_eq!(parse_literal(r#""tab\there""#).unwrap(), s("tab\there"));
    }

    #[test]
    fn rejects_code() {
        assert!(parse_literal("__import__('os').system('ls')").is_err());
        assert!(parse_literal("{'a': open('x')}").is_err());
        assert!(parse_literal("[x for x in range(3)]").is_err());
    }

    #[test]
    fn rejects_sets_and_garbage() {
        assert!(parse_literal("{'a', 'b'}").is_err());
        assert!(parse_literal("{'a': ['b']} extra").is_err());
        assert!(parse_literal("{'a': ['b'").is_err());
        assert!(parse_literal("'unterminated").is_err());
    }

    #[test]
    fn rejects_excessive_nesting() {
        let deep = "[".repeat(200) + &"]".repeat(200);
        let err = parse_literal(&deep).unwrap_err();
        assert!(err.message.contains("too deep"));
    }
}
