//! SQL method template splitting
//!
//! Generated query methods are declared with a SQL template in their doc
//! comment:
//!
//! ```text
//! SELECT * FROM @@table
//! {{where}}
//!   {{if name != ""}} name = @name {{end}}
//! {{end}}
//! ```
//!
//! [`Template::parse`] splits such a template into a flat list of
//! [`Clause`]s that the method emitter turns into code. Runs of plain SQL are
//! normalized through [`SqlBuffer`], so the emitted query text never contains
//! more than one consecutive space.
//!
//! # Example
//!
//! ```rust
//! use modelgen::model::ClauseStatus;
//! use modelgen::template::Template;
//!
//! let template = Template::parse("SELECT * FROM @@table\n  WHERE id = @id").unwrap();
//! let statuses: Vec<_> = template.clauses().iter().map(|c| c.status).collect();
//! assert_eq!(
//!     statuses,
//!     vec![ClauseStatus::Sql, ClauseStatus::Data, ClauseStatus::Sql, ClauseStatus::Variable]
//! );
//! assert_eq!(template.clauses()[2].value, " WHERE id = ");
//! ```

mod error;
pub mod lexer;

pub use error::{TemplateError, TemplateResult};
pub use lexer::{tokenize, Lexer, Span, Token, TokenKind};

use crate::model::{ClauseStatus, SqlBuffer, GENERATOR_KEYWORDS};

/// One fragment of a split template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    pub status: ClauseStatus,
    /// SQL text, placeholder name, or block condition
    pub value: String,
    pub span: Span,
}

impl Clause {
    pub fn new(status: ClauseStatus, value: impl Into<String>, span: Span) -> Self {
        Self {
            status,
            value: value.into(),
            span,
        }
    }
}

/// A parsed SQL method template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    clauses: Vec<Clause>,
}

impl Template {
    /// Split `source` into clauses and check that blocks are balanced
    pub fn parse(source: &str) -> TemplateResult<Self> {
        let clauses = Splitter::new(source).split()?;
        Ok(Self {
            source: source.to_string(),
            clauses,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Names of bound parameters, in order of appearance
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.clauses
            .iter()
            .filter(|c| c.status == ClauseStatus::Variable)
            .map(|c| c.value.as_str())
    }

    /// True if the template text mentions a helper name used by generated
    /// method bodies anywhere, including inside literals and conditions
    pub fn references_generator_keyword(&self) -> bool {
        GENERATOR_KEYWORDS.contain(&self.source)
    }
}

struct Splitter<'a> {
    lexer: Lexer<'a>,
    buffer: SqlBuffer,
    sql_start: Option<usize>,
    clauses: Vec<Clause>,
    open_blocks: Vec<ClauseStatus>,
}

impl<'a> Splitter<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            lexer: Lexer::new(source),
            buffer: SqlBuffer::new(),
            sql_start: None,
            clauses: Vec::new(),
            open_blocks: Vec::new(),
        }
    }

    fn split(mut self) -> TemplateResult<Vec<Clause>> {
        loop {
            let token = self.lexer.next_token();
            match token.kind {
                TokenKind::Eof => {
                    self.flush_sql(token.span.start);
                    break;
                }
                TokenKind::Text | TokenKind::Quoted => {
                    let text = &self.lexer.source()[token.span.start..token.span.end];
                    self.sql_start.get_or_insert(token.span.start);
                    self.buffer.write_sql_str(text);
                }
                TokenKind::Data(name) => {
                    self.flush_sql(token.span.start);
                    self.clauses.push(Clause::new(ClauseStatus::Data, name, token.span));
                }
                TokenKind::Variable(name) => {
                    if GENERATOR_KEYWORDS.full_match(&name) {
                        return Err(TemplateError::ReservedVariable { name });
                    }
                    self.flush_sql(token.span.start);
                    self.clauses.push(Clause::new(ClauseStatus::Variable, name, token.span));
                }
                TokenKind::At => {
                    return Err(TemplateError::EmptyVariable {
                        offset: token.span.start,
                    });
                }
                TokenKind::UnterminatedLiteral => {
                    return Err(TemplateError::UnterminatedLiteral {
                        offset: token.span.start,
                    });
                }
                TokenKind::OpenClause => {
                    return Err(TemplateError::UnterminatedClause {
                        offset: token.span.start,
                    });
                }
                TokenKind::Clause(inner) => {
                    self.flush_sql(token.span.start);
                    let clause = self.block_clause(&inner, token.span)?;
                    self.clauses.push(clause);
                }
            }
        }

        if let Some(status) = self.open_blocks.pop() {
            return Err(TemplateError::UnclosedBlock { status });
        }
        Ok(self.clauses)
    }

    /// Emit buffered SQL text; whitespace-only runs are dropped
    fn flush_sql(&mut self, end: usize) {
        let sql = self.buffer.dump();
        if let Some(start) = self.sql_start.take() {
            if !sql.trim().is_empty() {
                self.clauses
                    .push(Clause::new(ClauseStatus::Sql, sql, Span::new(start, end)));
            }
        }
    }

    fn block_clause(&mut self, inner: &str, span: Span) -> TemplateResult<Clause> {
        let (keyword, rest) = match inner.find(char::is_whitespace) {
            Some(idx) => (&inner[..idx], &inner[idx..]),
            None => (inner, ""),
        };
        let status = match keyword.to_lowercase().as_str() {
            "if" => ClauseStatus::If,
            "else" => ClauseStatus::Else,
            "where" => ClauseStatus::Where,
            "set" => ClauseStatus::Set,
            "for" => ClauseStatus::For,
            "trim" => ClauseStatus::Trim,
            "end" => ClauseStatus::End,
            _ => {
                return Err(TemplateError::UnknownClause {
                    name: keyword.to_string(),
                    offset: span.start,
                })
            }
        };

        match status {
            ClauseStatus::End => {
                if self.open_blocks.pop().is_none() {
                    return Err(TemplateError::UnexpectedEnd { offset: span.start });
                }
            }
            ClauseStatus::Else => {
                if self.open_blocks.last() != Some(&ClauseStatus::If) {
                    return Err(TemplateError::MisplacedElse { offset: span.start });
                }
            }
            _ if status.opens_block() => self.open_blocks.push(status),
            _ => {}
        }

        self.buffer.write_sql_str(rest.trim());
        let condition = self.buffer.dump();
        tracing::trace!(?status, condition = %condition, "template clause");
        Ok(Clause::new(status, condition, span))
    }
}
