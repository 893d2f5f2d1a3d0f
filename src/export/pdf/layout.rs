//! Text preparation for PDF comment blocks.
//!
//! The renderer wraps paragraphs on spaces using font metrics, but it drops
//! any word wider than the line together with the rest of its paragraph.
//! Text is therefore prepared first: embedded newlines become separate
//! paragraphs, whitespace runs collapse to single spaces, and every word
//! that does not fit the measured line width is split into pieces that do.

use std::mem;

use crate::youtube::ExtractError;

/// One line of a comment block as handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockLine {
    /// A paragraph of text to be word-wrapped.
    Text(String),
    /// An empty line from the original comment.
    Blank,
}

/// Splits a comment into renderable lines.
///
/// `fits` reports whether a word can be set on a line of its own. Every
/// non-whitespace character of `comment` appears in the output in its
/// original order; only whitespace is normalised.
///
/// # Errors
///
/// Returns [`ExtractError::Document`] when a single character is wider than
/// the line, so the text cannot be laid out without losing it.
pub fn comment_block<F>(comment: &str, fits: F) -> Result<Vec<BlockLine>, ExtractError>
where
    F: Fn(&str) -> bool,
{
    let mut lines = Vec::new();
    for line in comment.lines() {
        let mut words = Vec::new();
        for word in line.split_whitespace() {
            if fits(word) {
                words.push(word.to_owned());
            } else {
                words.extend(split_to_fit(word, &fits)?);
            }
        }
        lines.push(if words.is_empty() {
            BlockLine::Blank
        } else {
            BlockLine::Text(words.join(" "))
        });
    }

    while lines.last() == Some(&BlockLine::Blank) {
        lines.pop();
    }
    if lines.is_empty() {
        lines.push(BlockLine::Blank);
    }
    Ok(lines)
}

/// Greedily cuts `word` into the longest pieces that still fit.
fn split_to_fit<F>(word: &str, fits: &F) -> Result<Vec<String>, ExtractError>
where
    F: Fn(&str) -> bool,
{
    let mut pieces = Vec::new();
    let mut current = String::new();
    for ch in word.chars() {
        current.push(ch);
        if fits(&current) {
            continue;
        }
        current.pop();
        if !current.is_empty() {
            pieces.push(mem::take(&mut current));
        }
        current.push(ch);
        if !fits(&current) {
            return Err(ExtractError::Document {
                message: format!("character {ch:?} is wider than the text area"),
            });
        }
    }
    if !current.is_empty() {
        pieces.push(current);
    }
    Ok(pieces)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{BlockLine, comment_block};
    use crate::youtube::ExtractError;

    fn text(value: &str) -> BlockLine {
        BlockLine::Text(value.to_owned())
    }

    /// Fits anything up to `limit` characters.
    fn chars_up_to(limit: usize) -> impl Fn(&str) -> bool {
        move |word: &str| word.chars().count() <= limit
    }

    /// Counts `W` as three units and everything else as one.
    fn weighted_up_to(limit: usize) -> impl Fn(&str) -> bool {
        move |word: &str| {
            let width: usize = word.chars().map(|c| if c == 'W' { 3 } else { 1 }).sum();
            width <= limit
        }
    }

    #[rstest]
    fn single_line_comment_is_one_paragraph() {
        let block = comment_block("Great video!", chars_up_to(40)).expect("layout");
        assert_eq!(block, vec![text("Great video!")]);
    }

    #[rstest]
    fn newlines_start_new_paragraphs_and_keep_inner_blanks() {
        let block = comment_block("first\n\nthird\r\n", chars_up_to(40)).expect("layout");
        assert_eq!(block, vec![text("first"), BlockLine::Blank, text("third")]);
    }

    #[rstest]
    fn whitespace_runs_inside_a_line_collapse_to_one_space() {
        let block = comment_block("  spaced\t\tout   words ", chars_up_to(40)).expect("layout");
        assert_eq!(block, vec![text("spaced out words")]);
    }

    #[rstest]
    fn empty_comment_still_occupies_a_line() {
        assert_eq!(
            comment_block("   ", chars_up_to(40)).expect("layout"),
            vec![BlockLine::Blank]
        );
        assert_eq!(
            comment_block("", chars_up_to(40)).expect("layout"),
            vec![BlockLine::Blank]
        );
    }

    #[rstest]
    fn words_wider_than_the_line_are_split_into_fitting_pieces() {
        let block =
            comment_block("see https://example.com/abcdefghij", chars_up_to(10)).expect("layout");
        assert_eq!(block, vec![text("see https://ex ample.com/ abcdefghij")]);
    }

    #[rstest]
    fn splitting_follows_measured_width_not_character_count() {
        let block = comment_block("WWWWaaaa", weighted_up_to(7)).expect("layout");
        assert_eq!(block, vec![text("WW Waaaa")]);
    }

    #[rstest]
    fn splitting_counts_characters_not_bytes() {
        let block = comment_block("日本語のコメントです", chars_up_to(4)).expect("layout");
        assert_eq!(block, vec![text("日本語の コメント です")]);
    }

    #[rstest]
    fn character_wider_than_the_line_is_an_error() {
        let result = comment_block("ok WWW", weighted_up_to(2));
        assert!(
            matches!(&result, Err(ExtractError::Document { message }) if message.contains("'W'")),
            "expected a document error, got {result:?}"
        );
    }

    #[rstest]
    #[case("Hello there, this is a comment.\nWith a second line!")]
    #[case("supercalifragilisticexpialidocious and more")]
    #[case("emoji 🎉🎉🎉 and ümlauts WWWWWWWWWWWW")]
    fn no_visible_character_is_dropped(#[case] comment: &str) {
        let block = comment_block(comment, weighted_up_to(8)).expect("layout");
        let rendered: String = block
            .iter()
            .filter_map(|line| match line {
                BlockLine::Text(value) => Some(value.as_str()),
                BlockLine::Blank => None,
            })
            .collect::<Vec<_>>()
            .join(" ");

        let strip = |value: &str| value.chars().filter(|c| !c.is_whitespace()).collect::<String>();
        assert_eq!(strip(&rendered), strip(comment));
    }
}
