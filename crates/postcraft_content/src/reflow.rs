//! Paragraph reflow for long posts.

/// Sentences grouped into each paragraph.
pub const SENTENCES_PER_PARAGRAPH: usize = 3;

const TERMINAL_PUNCTUATION: [char; 5] = ['.', '!', '?', '…', ':'];

/// Regroups text into paragraphs of at most three sentences.
///
/// Sentences are split on `". "`. Each paragraph is closed with a period
/// unless it already ends in terminal punctuation, and paragraphs are
/// separated by a blank line.
///
/// # Examples
///
/// ```
/// use postcraft_content::format_long_content;
///
/// let text = "One. Two. Three. Four";
/// assert_eq!(format_long_content(text), "One. Two. Three.\n\nFour.");
/// ```
pub fn format_long_content(content: &str) -> String {
    if content.trim().is_empty() {
        return content.to_string();
    }

    let sentences: Vec<&str> = content.split(". ").collect();
    sentences
        .chunks(SENTENCES_PER_PARAGRAPH)
        .map(|group| close_paragraph(group.join(". ")))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn close_paragraph(paragraph: String) -> String {
    let trimmed = paragraph.trim_end();
    if trimmed.ends_with(TERMINAL_PUNCTUATION) {
        trimmed.to_string()
    } else {
        format!("{}.", trimmed)
    }
}
