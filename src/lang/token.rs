use std::str::FromStr;

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Unknown(String),
    Label(String),
    Literal(Literal),
    Word(Word),
    Operator(Operator),
    Ident(String),
}

impl Token {
    /// Tokens that may stand in operand position. Reserved words are
    /// accepted there too since variable lookup goes by spelling, and
    /// malformed runs are kept whole so evaluation can name them.
    pub fn is_operand(&self) -> bool {
        matches!(
            self,
            Token::Ident(_) | Token::Literal(_) | Token::Word(_) | Token::Unknown(_)
        )
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Unknown(s) => write!(f, "{}", s),
            Label(s) => write!(f, "{}:", s),
            Literal(s) => write!(f, "{}", s),
            Word(s) => write!(f, "{}", s),
            Operator(s) => write!(f, "{}", s),
            Ident(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Literal {
    Integer(String),
    String(String),
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Literal::*;
        match self {
            Integer(s) => write!(f, "{}", s),
            String(s) => write!(f, "\"{}\"", s),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Word {
    Assign,
    Goto,
    If,
    Print,
    Var,
}

impl FromStr for Word {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use Word::*;
        match s.to_ascii_uppercase().as_str() {
            "ASSIGN" => Ok(Assign),
            "GOTO" => Ok(Goto),
            "IF" => Ok(If),
            "PRINT" => Ok(Print),
            "VAR" => Ok(Var),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Word::*;
        let s = match self {
            Assign => "ASSIGN",
            Goto => "GOTO",
            If => "IF",
            Print => "PRINT",
            Var => "VAR",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Operator {
    Replicate,
    Add,
    Subtract,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,
    Concat,
    Unknown(String),
}

impl From<&str> for Operator {
    fn from(s: &str) -> Operator {
        use Operator::*;
        match s {
            "*" => Replicate,
            "+" => Add,
            "-" => Subtract,
            ">" => Greater,
            ">=" => GreaterEqual,
            "<" => Less,
            "<=" => LessEqual,
            "&" => Concat,
            _ => Unknown(s.to_string()),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Replicate => write!(f, "*"),
            Add => write!(f, "+"),
            Subtract => write!(f, "-"),
            Greater => write!(f, ">"),
            GreaterEqual => write!(f, ">="),
            Less => write!(f, "<"),
            LessEqual => write!(f, "<="),
            Concat => write!(f, "&"),
            Unknown(s) => write!(f, "{}", s),
        }
    }
}
