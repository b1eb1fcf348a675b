use super::token::*;

pub fn lex(s: &str) -> Vec<Token> {
    BeepLexer::lex(s)
}

fn is_beep_whitespace(c: char) -> bool {
    c.is_whitespace()
}

fn is_beep_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_beep_symbol(c: char) -> bool {
    !is_beep_whitespace(c) && !is_beep_word(c) && c != '"'
}

/// Every token is one whitespace-delimited run of the line. A quoted
/// run may hold spaces but must end at its closing quote.
trait Tokenizers<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>>;

    fn whitespace(&mut self) {
        while let Some(pk) = self.chars().peek() {
            if !is_beep_whitespace(*pk) {
                break;
            }
            self.chars().next();
        }
    }

    fn rest_of_run(&mut self, s: &mut String) {
        while let Some(pk) = self.chars().peek() {
            if is_beep_whitespace(*pk) {
                break;
            }
            s.push(*pk);
            self.chars().next();
        }
    }

    fn string(&mut self) -> Option<Token> {
        let mut s = String::new();
        self.chars().next();
        loop {
            match self.chars().next() {
                Some('"') => break,
                Some(ch) => s.push(ch),
                None => return Some(Token::Unknown(format!("\"{}", s))),
            }
        }
        match self.chars().peek() {
            Some(pk) if !is_beep_whitespace(*pk) => {
                let mut raw = format!("\"{}\"", s);
                self.rest_of_run(&mut raw);
                Some(Token::Unknown(raw))
            }
            _ => Some(Token::Literal(Literal::String(s))),
        }
    }

    fn word(&mut self, first: bool) -> Option<Token> {
        let mut s = String::new();
        while let Some(pk) = self.chars().peek() {
            if !is_beep_word(*pk) {
                break;
            }
            s.push(*pk);
            self.chars().next();
        }
        if first {
            if let Some(':') = self.chars().peek() {
                self.chars().next();
                return Some(Token::Label(s.to_ascii_uppercase()));
            }
        }
        match self.chars().peek() {
            Some(pk) if !is_beep_whitespace(*pk) => {
                self.rest_of_run(&mut s);
                return Some(Token::Unknown(s));
            }
            _ => {}
        }
        if s.chars().all(|c| c.is_ascii_digit()) {
            return Some(Token::Literal(Literal::Integer(s)));
        }
        if let Ok(word) = s.parse::<Word>() {
            return Some(Token::Word(word));
        }
        Some(Token::Ident(s))
    }

    fn symbol(&mut self) -> Option<Token> {
        let mut s = String::new();
        self.rest_of_run(&mut s);
        if s.chars().all(is_beep_symbol) {
            Some(Token::Operator(Operator::from(s.as_str())))
        } else {
            Some(Token::Unknown(s))
        }
    }
}

struct BeepLexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    first: bool,
}

impl<'a> Tokenizers<'a> for BeepLexer<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>> {
        &mut self.chars
    }
}

impl<'a> Iterator for BeepLexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.whitespace();
        let pk = *self.chars.peek()?;
        let first = std::mem::replace(&mut self.first, false);
        if pk == '"' {
            return self.string();
        }
        if is_beep_word(pk) {
            return self.word(first);
        }
        self.symbol()
    }
}

impl<'a> BeepLexer<'a> {
    fn lex(s: &str) -> Vec<Token> {
        BeepLexer {
            chars: s.chars().peekable(),
            first: true,
        }
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_prefix() {
        assert_eq!(
            lex("loop: GOTO loop"),
            vec![
                Token::Label("LOOP".to_string()),
                Token::Word(Word::Goto),
                Token::Ident("loop".to_string()),
            ]
        );
        assert_eq!(
            lex("loop:print x"),
            vec![
                Token::Label("LOOP".to_string()),
                Token::Word(Word::Print),
                Token::Ident("x".to_string()),
            ]
        );
    }

    #[test]
    fn test_colon_only_labels_first_word() {
        let tokens = lex("PRINT a: b");
        assert_eq!(tokens[1], Token::Unknown("a:".to_string()));
        assert_eq!(tokens[2], Token::Ident("b".to_string()));
    }

    #[test]
    fn test_string_keeps_spaces_and_case() {
        assert_eq!(
            lex(r#"PRINT "Hello World" 12"#),
            vec![
                Token::Word(Word::Print),
                Token::Literal(Literal::String("Hello World".to_string())),
                Token::Literal(Literal::Integer("12".to_string())),
            ]
        );
    }

    #[test]
    fn test_unterminated_string() {
        assert_eq!(
            lex(r#"PRINT "oops"#)[1],
            Token::Unknown("\"oops".to_string())
        );
    }

    #[test]
    fn test_operators() {
        let tokens = lex("IF >= a b done\r\n");
        assert_eq!(tokens[0], Token::Word(Word::If));
        assert_eq!(tokens[1], Token::Operator(Operator::GreaterEqual));
        assert_eq!(tokens.len(), 5);
        assert_eq!(
            lex("ASSIGN x % 1 2")[2],
            Token::Operator(Operator::Unknown("%".to_string()))
        );
    }

    #[test]
    fn test_runs_are_not_split() {
        assert_eq!(
            lex(r#"PRINT "a"b x! +y"#),
            vec![
                Token::Word(Word::Print),
                Token::Unknown(r#""a"b"#.to_string()),
                Token::Unknown("x!".to_string()),
                Token::Unknown("+y".to_string()),
            ]
        );
    }
}
