//! Lexer for result-file records using logos

use logos::Logos;

use crate::error::Span;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\f]+")]
pub enum Token {
    /// Vertical-line marker in the slope field
    #[token("inf")]
    Inf,

    #[regex(r"[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),
}

impl Token {
    /// The numeric value, if this is a number
    pub fn number(&self) -> Option<f64> {
        match self {
            Token::Number(n) => Some(*n),
            Token::Inf => None,
        }
    }
}

/// A lexed token, or the word that failed to lex
pub type Lexed<'a> = Result<Token, &'a str>;

/// Field separators, the same set the lexer skips
pub fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\x0c')
}

/// Lex one line word by word, with spans relative to the line
///
/// A word is a run between separators and must lex as exactly one token.
/// Anything else, including tokens glued together like `1-2`, comes back
/// as `Err(word)` so the reader can report the whole word.
pub fn lex_line(line: &str) -> impl Iterator<Item = (Lexed<'_>, Span)> + '_ {
    let mut offset = 0;
    line.split(is_separator).filter_map(move |word| {
        let start = offset;
        offset += word.len() + 1;
        if word.is_empty() {
            return None;
        }
        Some((lex_word(word), start..start + word.len()))
    })
}

fn lex_word(word: &str) -> Lexed<'_> {
    let mut lexer = Token::lexer(word);
    let first = lexer.next();
    match first {
        Some(Ok(token)) if lexer.span() == (0..word.len()) => Ok(token),
        _ => Err(word),
    }
}

/// Human-readable name of a token for diagnostics
pub fn describe(token: &Lexed<'_>) -> String {
    match token {
        Ok(Token::Inf) => "marker 'inf'".to_string(),
        Ok(Token::Number(n)) => format!("number {}", n),
        Err(text) => format!("'{}'", text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(line: &str) -> Vec<Lexed<'_>> {
        lex_line(line).map(|(t, _)| t).collect()
    }

    #[test]
    fn test_numbers() {
        assert_eq!(
            tokens("0 4 -2.5 3."),
            vec![
                Ok(Token::Number(0.0)),
                Ok(Token::Number(4.0)),
                Ok(Token::Number(-2.5)),
                Ok(Token::Number(3.0)),
            ]
        );
    }

    #[test]
    fn test_exponent_and_leading_dot() {
        assert_eq!(
            tokens("1e+06 .5 +2E-3"),
            vec![
                Ok(Token::Number(1e6)),
                Ok(Token::Number(0.5)),
                Ok(Token::Number(2e-3)),
            ]
        );
    }

    #[test]
    fn test_inf_marker() {
        assert_eq!(
            tokens("inf 2.0 -5.0 5.0"),
            vec![
                Ok(Token::Inf),
                Ok(Token::Number(2.0)),
                Ok(Token::Number(-5.0)),
                Ok(Token::Number(5.0)),
            ]
        );
    }

    #[test]
    fn test_trailing_whitespace_and_crlf() {
        assert_eq!(tokens("24.0  \r"), vec![Ok(Token::Number(24.0))]);
        assert!(tokens("   \t").is_empty());
    }

    #[test]
    fn test_invalid_token_is_kept() {
        let lexed: Vec<_> = lex_line("1 abc").collect();
        assert_eq!(lexed[0].0, Ok(Token::Number(1.0)));
        assert_eq!(lexed[1], (Err("abc"), 2..5));
    }

    #[test]
    fn test_glued_tokens_are_one_bad_word() {
        let lexed: Vec<_> = lex_line("1-2 3 1.2.3 inf2").collect();
        assert_eq!(
            lexed,
            vec![
                (Err("1-2"), 0..3),
                (Ok(Token::Number(3.0)), 4..5),
                (Err("1.2.3"), 6..11),
                (Err("inf2"), 12..16),
            ]
        );
    }

    #[test]
    fn test_only_lexer_whitespace_separates() {
        let lexed: Vec<_> = lex_line("0\u{a0}3\x0c4").collect();
        assert_eq!(
            lexed,
            vec![(Err("0\u{a0}3"), 0..4), (Ok(Token::Number(4.0)), 5..6)]
        );
    }

    #[test]
    fn test_describe() {
        assert_eq!(describe(&Ok(Token::Inf)), "marker 'inf'");
        assert_eq!(describe(&Ok(Token::Number(1.5))), "number 1.5");
        assert_eq!(describe(&Err("x")), "'x'");
    }
}
