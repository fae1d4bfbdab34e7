use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::theme::Theme;

/// Bordered single-line input. Editing is append/backspace only (the same
/// model the command buffer uses); when the value overflows, the tail stays
/// visible so the cursor never scrolls out of view.
#[allow(clippy::too_many_arguments)]
pub fn render(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    placeholder: &str,
    focused: bool,
    masked: bool,
    theme: &Theme,
) {
    let border = if focused {
        theme.focus_style()
    } else {
        theme.border_style()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {title} "))
        .border_style(border);

    let inner_width = area.width.saturating_sub(2) as usize;
    let cursor_cols = usize::from(focused);

    let shown: String = if masked {
        "\u{2022}".repeat(value.chars().count())
    } else {
        value.to_string()
    };
    let shown = tail_fit(&shown, inner_width.saturating_sub(cursor_cols));

    let line = if value.is_empty() && !focused {
        Line::from(Span::styled(placeholder.to_string(), theme.muted_style()))
    } else {
        let mut spans = vec![Span::styled(shown, theme.text_style())];
        if focused {
            spans.push(Span::styled("\u{2588}", theme.focus_style()));
        }
        Line::from(spans)
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Keep the trailing portion of `s` that fits in `width` columns.
fn tail_fit(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }
    let mut out = String::new();
    let mut cols = 0;
    for ch in s.chars().rev() {
        let w = UnicodeWidthStr::width(ch.encode_utf8(&mut [0u8; 4]) as &str);
        if cols + w > width {
            break;
        }
        cols += w;
        out.insert(0, ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn tail_fit_keeps_the_end() {
        assert_eq!(tail_fit("hello world", 5), "world");
        assert_eq!(tail_fit("hi", 5), "hi");
        assert_eq!(tail_fit("abc", 0), "");
    }

    #[test]
    fn renders_masked_and_plain() {
        let backend = TestBackend::new(30, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::dark();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render(frame, area, "Value", "secret", "", true, true, &theme);
            })
            .unwrap();
        let buf = terminal.backend().buffer().clone();
        let row: String = (0..30).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert!(row.contains('\u{2022}'));
        assert!(!row.contains("secret"));
    }
}
