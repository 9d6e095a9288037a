//! The quoted description token and the replacement produced for it.

use super::matcher;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Byte range of a token within the host's source text.
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A description string argument as it appears in source, quotes included.
pub struct DescriptionToken {
    source: String,
    span: Span,
}

impl DescriptionToken {
    pub fn new(source: impl Into<String>, span: Span) -> Self {
        Self {
            source: source.into(),
            span,
        }
    }

    /// Token whose span covers exactly its own source.
    pub fn from_source(source: impl Into<String>) -> Self {
        let source = source.into();
        let span = Span::new(0, source.len());
        Self { source, span }
    }

    /// Double-quoted token wrapping `content` verbatim.
    pub fn quoted(content: &str) -> Self {
        Self::from_source(format!("\"{}\"", content))
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn span(&self) -> Span {
        self.span
    }

    /// Literal text between the quotes.
    pub fn content(&self) -> &str {
        matcher::string_content(&self.source)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Replacement text for a token's span.
pub struct TokenReplacement {
    pub span: Span,
    pub text: String,
}

impl TokenReplacement {
    /// Splice the replacement into `source`. `None` when the span does not
    /// fall on character boundaries inside `source`.
    pub fn apply(&self, source: &str) -> Option<String> {
        let head = source.get(..self.span.start)?;
        let tail = source.get(self.span.end..)?;
        Some(format!("{}{}{}", head, self.text, tail))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_content_and_span() {
        let tok = DescriptionToken::quoted("Internet file retriever");
        assert_eq!(tok.source(), "\"Internet file retriever\"");
        assert_eq!(tok.content(), "Internet file retriever");
        assert_eq!(tok.span(), Span::new(0, 25));
    }

    #[test]
    fn test_replacement_apply() {
        let src = "  desc \"a tool.\"\n";
        let rep = TokenReplacement {
            span: Span::new(7, 16),
            text: "\"Tool\"".into(),
        };
        assert_eq!(rep.apply(src).as_deref(), Some("  desc \"Tool\"\n"));

        let out_of_range = TokenReplacement {
            span: Span::new(7, 99),
            text: String::new(),
        };
        assert_eq!(out_of_range.apply(src), None);
    }
}
