//! Prompt templates.
//!
//! The exact wording is an external contract: regenerating a book against
//! previously produced output depends on these prompts staying stable.

use crate::Chapter;

/// Default prompt for generating the table of contents for a titled book.
pub fn default_toc_prompt(title: &str) -> String {
    format!(
        "Create a detailed and logical table of contents for a book titled '{title}'. \
         Include 4-6 chapter titles with 2-4 relevant subchapter titles under each chapter. \
         Format the output as a valid JSON list of dictionaries. \
         Each dictionary must have 'title' (string) and 'subchapters' (list of strings) keys. \
         Output ONLY the JSON list, without any introductory text or code fences. Example: \
         [{{\"title\": \"Chapter 1: Introduction to Topic\", \"subchapters\": [\"Subtopic 1.1\", \"Subtopic 1.2\", \"Subtopic 1.3\"]}}, \
         {{\"title\": \"Chapter 2: Core Concepts\", \"subchapters\": [\"Concept 2.1\", \"Concept 2.2\"]}}]"
    )
}

/// Prompt for a chapter introduction.
///
/// Always contains the chapter's 1-based number, its title, and the book
/// title.
pub fn intro_prompt(book_title: &str, chapter: &Chapter) -> String {
    format!(
        "Write a concise introduction for Chapter {}: '{}' in a book titled '{}'.",
        chapter.number(),
        chapter.title(),
        book_title
    )
}

/// Prompt for a subchapter body.
///
/// Always contains the chapter number, the subchapter's 1-based position
/// within its chapter, the subchapter title, the chapter title, and the book
/// title.
pub fn subchapter_prompt(
    book_title: &str,
    chapter: &Chapter,
    subchapter_index: usize,
    subchapter_title: &str,
) -> String {
    format!(
        "Write a detailed section for Chapter {number}.{index}: '{sub}' \
         within Chapter {number}: '{title}' in a book titled '{book}'.",
        number = chapter.number(),
        index = subchapter_index,
        sub = subchapter_title,
        title = chapter.title(),
        book = book_title
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chapter() -> Chapter {
        Chapter::new("Ch1", vec!["S1".to_string(), "S2".to_string()], 1)
    }

    #[test]
    fn intro_prompt_references_chapter_and_book() {
        let prompt = intro_prompt("My Book", &chapter());
        assert!(prompt.contains("Chapter 1"));
        assert!(prompt.contains("'Ch1'"));
        assert!(prompt.contains("'My Book'"));
    }

    #[test]
    fn subchapter_prompt_references_position_and_titles() {
        let prompt = subchapter_prompt("My Book", &chapter(), 2, "S2");
        assert!(prompt.contains("Chapter 1.2"));
        assert!(prompt.contains("'S2'"));
        assert!(prompt.contains("Chapter 1: 'Ch1'"));
        assert!(prompt.contains("'My Book'"));
    }

    #[test]
    fn toc_prompt_embeds_title_and_format_instructions() {
        let prompt = default_toc_prompt("Advanced AI");
        assert!(prompt.contains("'Advanced AI'"));
        assert!(prompt.contains("JSON list"));
    }
}
