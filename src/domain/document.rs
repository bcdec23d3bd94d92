// ============================================================
// Layer 3 — Scraped Page Domain Type
// ============================================================
// One URL's worth of extracted content, kept in document order.
// The fetcher builds these; `render` flattens a page into the
// structured document buffer that the normalizers read:
//
//   \n\n### Content from <url> ###\n\n
//   \n\n**Heading**\n\n
//   Paragraph text\n\n
//   ...


/// A single structural element of a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Text of an h1–h3 element, already trimmed
    Heading(String),
    /// Text of a p element, already trimmed
    Paragraph(String),
}

/// All blocks scraped from one URL.
#[derive(Debug, Clone)]
pub struct ScrapedPage {
    /// The URL the blocks were fetched from
    pub url: String,

    /// Heading and paragraph blocks in document order
    pub blocks: Vec<Block>,
}

impl ScrapedPage {
    pub fn new(url: impl Into<String>, blocks: Vec<Block>) -> Self {
        Self {
            url: url.into(),
            blocks,
        }
    }

    /// Append this page to a structured document buffer.
    ///
    /// Headings are always written (even when empty) while empty
    /// paragraphs are skipped, matching how the buffer has always
    /// been produced.
    pub fn render_into(&self, buffer: &mut String) {
        buffer.push_str(&format!("\n\n### Content from {} ###\n\n", self.url));

        for block in &self.blocks {
            match block {
                Block::Heading(text) => {
                    buffer.push_str(&format!("\n\n**{text}**\n\n"));
                }
                Block::Paragraph(text) if !text.is_empty() => {
                    buffer.push_str(text);
                    buffer.push_str("\n\n");
                }
                Block::Paragraph(_) => {}
            }
        }
    }
}
