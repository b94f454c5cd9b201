use logos::Logos;
use std::fmt;

/// Byte range in the template source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// A template token and where it sits in the source
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Tokens of a SQL method template
#[derive(Logos, Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// `{{ ... }}` with the trimmed inner text
    #[regex(r"\{\{[^}]*\}\}", |lex| {
        let s = lex.slice();
        s[2..s.len() - 2].trim().to_string()
    })]
    Clause(String),

    /// `{{` with no closing `}}`
    #[token("{{")]
    OpenClause,

    /// `@@name`
    #[regex(r"@@[A-Za-z_][A-Za-z0-9_.]*", |lex| lex.slice()[2..].to_string())]
    Data(String),

    /// `@name`
    #[regex(r"@[A-Za-z_][A-Za-z0-9_.]*", |lex| lex.slice()[1..].to_string())]
    Variable(String),

    /// `@` or `@@` not followed by a name
    #[regex(r"@@?")]
    At,

    /// Quoted SQL literal; placeholders inside are not expanded
    #[regex(r"'(?:[^'\\]|\\.)*'")]
    #[regex(r#""(?:[^"\\]|\\.)*""#)]
    Quoted,

    /// Quote whose closing pair never appears
    #[regex(r"'(?:[^'\\]|\\.)*")]
    #[regex(r#""(?:[^"\\]|\\.)*"#)]
    UnterminatedLiteral,

    /// Plain SQL text or a lone brace
    #[regex(r#"[^@{'"]+"#)]
    #[token("{")]
    Text,

    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Clause(inner) => write!(f, "{{{{{}}}}}", inner),
            TokenKind::OpenClause => write!(f, "{{{{"),
            TokenKind::Data(name) => write!(f, "@@{}", name),
            TokenKind::Variable(name) => write!(f, "@{}", name),
            TokenKind::At => write!(f, "@"),
            TokenKind::Quoted => write!(f, "quoted literal"),
            TokenKind::UnterminatedLiteral => write!(f, "unterminated literal"),
            TokenKind::Text => write!(f, "text"),
            TokenKind::Eof => write!(f, "EOF"),
        }
    }
}

/// Lexer for SQL method templates
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, TokenKind>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            inner: TokenKind::lexer(source),
        }
    }

    pub fn next_token(&mut self) -> Token {
        match self.inner.next() {
            Some(Ok(kind)) => {
                let span = self.inner.span();
                Token::new(kind, Span::new(span.start, span.end))
            }
            Some(Err(_)) => {
                // Anything the rules miss is kept as text
                let span = self.inner.span();
                Token::new(TokenKind::Text, Span::new(span.start, span.end))
            }
            None => {
                let end = self.inner.source().len();
                Token::new(TokenKind::Eof, Span::new(end, end))
            }
        }
    }

    pub fn source(&self) -> &'a str {
        self.inner.source()
    }
}

/// Tokenize a whole template; the last token is always [`TokenKind::Eof`]
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let is_eof = token.kind == TokenKind::Eof;
        tokens.push(token);
        if is_eof {
            break;
        }
    }
    tokens
}
