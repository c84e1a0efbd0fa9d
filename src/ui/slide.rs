use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::bootstrap::Presentation;
use crate::constants::{classes, ui};
use crate::document::{BlockKind, Element};
use crate::navigator::Visibility;
use crate::stylesheet::Stylesheet;

/// Styled lines for a slide element, with a blank line after each heading.
pub fn slide_lines<'a>(element: &'a Element, sheet: &Stylesheet) -> Vec<Line<'a>> {
    let mut lines = Vec::with_capacity(element.blocks.len() * 2);
    for block in &element.blocks {
        match block.kind {
            BlockKind::Heading(level) => {
                lines.push(Line::from(Span::styled(block.text.as_str(), sheet.heading_style(level))));
                lines.push(Line::raw(""));
            }
            BlockKind::Paragraph => lines.push(Line::raw(block.text.as_str())),
        }
    }
    if matches!(lines.last(), Some(line) if line.spans.is_empty() || line.width() == 0) {
        lines.pop();
    }
    lines
}

/// Rows `lines` occupy once word-wrapped to `width` columns.
fn wrapped_height(lines: &[Line<'_>], width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows: usize = lines
        .iter()
        .map(|line| {
            let text: String = line.spans.iter().map(|span| span.content.as_ref()).collect();
            wrapped_rows(&text, width)
        })
        .sum();
    u16::try_from(rows).unwrap_or(u16::MAX)
}

/// Greedy word wrap; a word wider than the row is split across rows.
fn wrapped_rows(text: &str, width: usize) -> usize {
    let mut rows = 1;
    let mut used = 0;
    for word in text.split_whitespace() {
        let word_width = word.width();
        if used > 0 && used + 1 + word_width <= width {
            used += 1 + word_width;
            continue;
        }
        if used > 0 {
            rows += 1;
        }
        let extra = word_width.saturating_sub(1) / width;
        rows += extra;
        used = word_width - extra * width;
    }
    rows
}

/// Draw the themed background, every visible slide and the footer.
pub fn draw_slides(f: &mut Frame, presentation: &Presentation, sheet: &Stylesheet, area: Rect) {
    let body_style = sheet.body_style(&presentation.document().body.classes);
    f.render_widget(Block::default().style(body_style), area);

    if area.height < 2 {
        return;
    }
    let content = Rect {
        x: area.x + ui::SLIDE_PADDING.min(area.width / 4),
        y: area.y,
        width: area.width.saturating_sub(2 * ui::SLIDE_PADDING.min(area.width / 4)),
        height: area.height - 1,
    };
    let footer = Rect { y: area.bottom() - 1, height: 1, ..area };

    let navigator = presentation.navigator();
    if navigator.is_empty() {
        let empty = Paragraph::new("No slides")
            .alignment(Alignment::Center)
            .style(sheet.class_style(classes::FOOTER));
        f.render_widget(empty, Rect { y: content.y + content.height / 2, height: 1, ..content });
        return;
    }

    for slide in navigator.slides().iter().filter(|s| s.is_visible()) {
        let lines = slide_lines(slide.element(), sheet);
        let height = wrapped_height(&lines, content.width).min(content.height);
        let top = content.y + (content.height - height) / 2;
        // Run to the bottom of the content area so a short estimate never clips.
        let height = content.bottom() - top;
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(Style::default());
        f.render_widget(paragraph, Rect { y: top, height, ..content });
    }

    let settings = presentation.settings();
    let label = format!(
        "{} · v{} · {}/{} ",
        settings.title,
        settings.version,
        navigator.cursor() + 1,
        navigator.len()
    );
    let footer_text = Paragraph::new(label)
        .alignment(Alignment::Right)
        .style(sheet.class_style(classes::FOOTER));
    f.render_widget(footer_text, footer);
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::document::Document;

    #[test]
    fn test_slide_lines_headings_get_spacing() {
        let doc = Document::parse("<page><h1>Title</h1><p>Body</p></page>").unwrap();
        let sheet = Stylesheet::generate();
        let lines = slide_lines(&doc.body.pages[0], &sheet);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].spans[0].style, sheet.heading_style(1));
        assert_eq!(lines[2].width(), 4);
    }

    #[test]
    fn test_slide_lines_drop_trailing_blank() {
        let doc = Document::parse("<page><h2>Only</h2></page>").unwrap();
        let lines = slide_lines(&doc.body.pages[0], &Stylesheet::generate());
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn test_wrapped_height() {
        let lines = vec![Line::raw("abcdefghij"), Line::raw("")];
        assert_eq!(wrapped_height(&lines, 4), 4);
    }

    #[test]
    fn test_wrapped_height_breaks_at_words() {
        let lines = vec![Line::raw("aaa bbb ccc")];
        assert_eq!(wrapped_height(&lines, 7), 2);
        assert_eq!(wrapped_height(&lines, 6), 3);
        assert_eq!(wrapped_height(&lines, 11), 1);
    }
}
