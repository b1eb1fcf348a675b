use super::{ast::*, token::*};

/// Sort one lexed line into a [`Statement`], returning the label
/// prefix separately. A line that is not structurally one of the
/// known statement forms becomes [`Statement::Unrecognized`].
pub fn classify(tokens: &[Token]) -> (Option<Ident>, Statement) {
    Classifier::classify(tokens)
}

struct Classifier<'a> {
    token_stream: std::iter::Peekable<std::slice::Iter<'a, Token>>,
}

impl<'a> Classifier<'a> {
    fn classify(tokens: &'a [Token]) -> (Option<Ident>, Statement) {
        if tokens.is_empty() {
            return (None, Statement::Blank);
        }
        let mut this = Classifier {
            token_stream: tokens.iter().peekable(),
        };
        let label = match this.peek() {
            Some(Token::Label(s)) => {
                let label = Ident::new(s);
                this.next();
                Some(label)
            }
            _ => None,
        };
        let statement = match this.next() {
            Some(Token::Word(Word::Assign)) => this.assign(),
            Some(Token::Word(Word::Print)) => this.print(),
            Some(Token::Word(Word::Goto)) => this.goto(),
            Some(Token::Word(Word::If)) => this.branch(),
            Some(Token::Word(Word::Var)) => this.declare(),
            _ => None,
        };
        (label, statement.unwrap_or(Statement::Unrecognized))
    }

    fn next(&mut self) -> Option<&'a Token> {
        self.token_stream.next()
    }

    fn peek(&mut self) -> Option<&&'a Token> {
        self.token_stream.peek()
    }

    fn is_end(&mut self) -> bool {
        self.peek().is_none()
    }

    fn name(&mut self) -> Option<Ident> {
        match self.next()? {
            Token::Ident(s) => Some(Ident::new(s)),
            Token::Literal(Literal::Integer(s)) => Some(Ident::new(s)),
            Token::Word(w) => Some(Ident::new(&w.to_string())),
            _ => None,
        }
    }

    fn operand(&mut self) -> Option<Operand> {
        let token = self.next()?;
        if token.is_operand() {
            Some(Operand::from(token))
        } else {
            None
        }
    }

    fn assign(&mut self) -> Option<Statement> {
        let target = self.name()?;
        let op = match self.peek() {
            Some(Token::Operator(op)) => {
                let op = op.clone();
                self.next();
                Some(op)
            }
            _ => None,
        };
        let mut operands = vec![];
        while !self.is_end() {
            operands.push(self.operand()?);
        }
        if operands.len() > 2 {
            return None;
        }
        Some(Statement::Assign(target, op, operands))
    }

    fn print(&mut self) -> Option<Statement> {
        Some(Statement::Print(
            self.token_stream.by_ref().map(Operand::from).collect(),
        ))
    }

    fn goto(&mut self) -> Option<Statement> {
        let label = self.name()?;
        if !self.is_end() {
            return None;
        }
        Some(Statement::Goto(label))
    }

    fn branch(&mut self) -> Option<Statement> {
        let op = match self.next()? {
            Token::Operator(op) => op.clone(),
            _ => return None,
        };
        let lhs = self.operand()?;
        let rhs = self.operand()?;
        let label = self.name()?;
        if !self.is_end() {
            return None;
        }
        Some(Statement::If(op, lhs, rhs, label))
    }

    fn declare(&mut self) -> Option<Statement> {
        let var_type = self.name()?;
        let var_name = self.name()?;
        if self.is_end() {
            return None;
        }
        let value: Vec<String> = self
            .token_stream
            .by_ref()
            .map(|t| match t {
                Token::Literal(Literal::String(s)) => s.clone(),
                _ => t.to_string(),
            })
            .collect();
        Some(Statement::Declare(
            var_type,
            var_name,
            value.join(" ").into(),
        ))
    }
}
