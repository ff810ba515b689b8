use std::fmt;

/// Marks that glue onto the word before them and close a sentence.
pub const END_PUNCTUATION: [char; 3] = ['.', '?', '!'];

/// How a single non-word character behaves during tokenization and layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PunctuationClass {
    /// Sentence-ending mark, glued to the preceding word.
    End,
    /// Any other mark; always stands alone and forms its own block.
    Split,
}

pub fn punctuation_class(mark: char) -> PunctuationClass {
    if END_PUNCTUATION.contains(&mark) {
        PunctuationClass::End
    } else {
        PunctuationClass::Split
    }
}

/// Character that may appear inside a word token.
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-'
}

/// Layout category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Letters and digits (inner hyphens allowed), e.g. `ГДЕ-ТО`.
    Word,
    /// A word carrying a glued sentence-ending mark, e.g. `МИР!`.
    TerminalWord,
    /// One or more marks without any letter or digit.
    Punctuation,
}

impl TokenKind {
    /// Anchors of this kind close their block right after being planted.
    pub fn ends_block(self) -> bool {
        matches!(self, TokenKind::TerminalWord | TokenKind::Punctuation)
    }

    /// Standalone marks stop the crossing loop of the current block.
    pub fn is_punctuation(self) -> bool {
        self == TokenKind::Punctuation
    }

    /// Whether the token starts with a letter or digit.
    pub fn leads_with_word(self) -> bool {
        matches!(self, TokenKind::Word | TokenKind::TerminalWord)
    }
}

/// Pure token → category classification.
///
/// Swapping the layout heuristics for punctuation only requires changing this
/// function and [`punctuation_class`].
pub fn classify(text: &str) -> TokenKind {
    if !text.chars().any(char::is_alphanumeric) {
        return TokenKind::Punctuation;
    }

    match text.chars().last() {
        Some(last) if !is_word_char(last) && punctuation_class(last) == PunctuationClass::End => {
            TokenKind::TerminalWord
        }
        _ => TokenKind::Word,
    }
}

/// Immutable token produced by the tokenizer.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct Token {
    text: String,
    kind: TokenKind,
}

impl Token {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let kind = classify(&text);
        Self { text, kind }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Length in characters, which is also the number of grid cells it covers.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl PartialEq<&str> for Token {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}
