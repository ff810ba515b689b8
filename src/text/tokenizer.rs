use super::token::{is_word_char, punctuation_class, PunctuationClass, Token};
use unicode_segmentation::UnicodeSegmentation;

fn flush_word(word: &mut String, raw: &mut Vec<String>) {
    if !word.is_empty() {
        raw.push(std::mem::take(word));
    }
}

/// Splits a phrase into word runs and single-character marks, dropping whitespace.
///
/// Word-bound segments made only of word characters are concatenated so that
/// hyphenated words (`где-то`) survive as one run.
fn split_raw(phrase: &str) -> Vec<String> {
    let mut raw = Vec::new();
    let mut word = String::new();

    for segment in phrase.split_word_bounds() {
        if segment.chars().all(is_word_char) {
            word.push_str(segment);
            continue;
        }

        for c in segment.chars() {
            if c.is_whitespace() {
                flush_word(&mut word, &mut raw);
            } else if is_word_char(c) {
                word.push(c);
            } else {
                flush_word(&mut word, &mut raw);
                raw.push(c.to_string());
            }
        }
    }
    flush_word(&mut word, &mut raw);

    raw
}

fn is_end_mark(raw: &str) -> bool {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => !is_word_char(c) && punctuation_class(c) == PunctuationClass::End,
        _ => false,
    }
}

/// Tokenizes a phrase for layout.
///
/// Words are upper-cased; a sentence-ending mark directly after a word is glued
/// onto it (`мир!` → `МИР!`); every other mark becomes its own token.
pub fn tokenize(phrase: &str) -> Vec<Token> {
    let raw = split_raw(phrase);
    let mut tokens = Vec::with_capacity(raw.len());
    let mut pieces = raw.into_iter().peekable();

    while let Some(piece) = pieces.next() {
        if !piece.chars().any(char::is_alphanumeric) {
            tokens.push(Token::new(piece));
            continue;
        }

        let mut word = piece.to_uppercase();
        if let Some(mark) = pieces.next_if(|next| is_end_mark(next)) {
            word.push_str(&mark);
        }
        tokens.push(Token::new(word));
    }

    tokens
}
