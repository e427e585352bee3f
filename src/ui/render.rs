use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::format::FieldMask;
use crate::ui::app::App;
use crate::ui::controls::{ChoiceInput, FieldControl, LabelPlacement, MaskedInput};
use crate::ui::form::Section;
use crate::ui::layout::{centered_rect, layout_regions, section_columns};
use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_TEXT, LABEL_TEXT, POPUP_BORDER, STATUS_ERROR, STATUS_OK,
    STATUS_PENDING,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const INDENT: u16 = 1;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(header_widget(app), header);
    frame.render_widget(Clear, body);

    let focused = app.session().focused_field();
    for (section, column) in Section::ALL.into_iter().zip(section_columns(body, Section::ALL.len())) {
        let block = Block::default()
            .title(format!(" {} ", section.title()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER));
        let inner = block.inner(column);
        frame.render_widget(block, column);

        let mut lines = Vec::new();
        let mut cursor = None;
        for (field, control) in app
            .session()
            .controls()
            .filter(|(field, _)| field.section() == section)
        {
            let is_focused = field == focused;
            let rendered = field_lines(control, is_focused);
            if let Some((row, col)) = rendered.cursor {
                cursor = Some((lines.len() + row, col));
            }
            lines.extend(rendered.lines);
        }

        if let Some((row, col)) = cursor {
            let row = row as u16;
            if app.notice().is_none() && row < inner.height {
                let x = inner.x + INDENT + (col as u16).min(inner.width.saturating_sub(INDENT + 1));
                frame.set_cursor_position((x, inner.y + row));
            }
        }
        frame.render_widget(Paragraph::new(lines), inner);
    }

    frame.render_widget(footer_widget(footer), footer);

    if let Some(notice) = app.notice() {
        let color = if notice.is_success() {
            STATUS_OK
        } else {
            STATUS_ERROR
        };
        let popup = centered_rect(60, 7, area);
        frame.render_widget(Clear, popup);
        frame.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled(notice.to_string(), Style::default().fg(color))),
                Line::from(""),
                Line::from(Span::styled(
                    "Enter/Esc: dismiss",
                    Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
                )),
            ])
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .title(" Submission ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(POPUP_BORDER)),
            ),
            popup,
        );
    }
}

struct FieldLines {
    lines: Vec<Line<'static>>,
    /// Row within `lines` and column within the value, when the caret shows.
    cursor: Option<(usize, usize)>,
}

fn label_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(LABEL_TEXT)
    }
}

fn indent() -> Span<'static> {
    Span::raw(" ".repeat(INDENT as usize))
}

fn field_lines(control: &FieldControl, focused: bool) -> FieldLines {
    match control {
        FieldControl::Masked(input) => masked_lines(input, focused),
        FieldControl::Choice(choice) => choice_lines(choice, focused),
    }
}

fn masked_lines(input: &MaskedInput<FieldMask>, focused: bool) -> FieldLines {
    let height = input.size().height() as usize;
    let value_style = Style::default().fg(HEADER_TEXT);
    let mut lines = Vec::with_capacity(height);

    let value_line = match input.label_placement() {
        LabelPlacement::Floating => {
            Line::from(vec![indent(), Span::styled(input.display().to_string(), value_style)])
        }
        LabelPlacement::Inline => Line::from(vec![
            indent(),
            Span::styled(
                input.label().to_string(),
                label_style(false).add_modifier(Modifier::DIM),
            ),
        ]),
    };

    let hint = input
        .visible_error()
        .map(str::to_string)
        .or_else(|| {
            input
                .last_rejection()
                .filter(|_| focused)
                .map(|rejection| rejection.to_string())
        })
        .map(|text| Span::styled(text, Style::default().fg(STATUS_ERROR)));

    let value_row = if height == 1 {
        let mut line = value_line;
        if input.label_placement() == LabelPlacement::Floating {
            line.spans.insert(
                1,
                Span::styled(format!("{}: ", input.label()), label_style(focused)),
            );
        }
        if let Some(hint) = hint.clone() {
            line.spans.push(Span::raw("  "));
            line.spans.push(hint);
        }
        lines.push(line);
        0
    } else {
        let label_line = match input.label_placement() {
            LabelPlacement::Floating => Line::from(vec![
                indent(),
                Span::styled(input.label().to_string(), label_style(focused)),
            ]),
            LabelPlacement::Inline => Line::from(""),
        };
        lines.push(label_line);
        let mut value_line = value_line;
        if height == 2 {
            if let Some(hint) = hint.clone() {
                value_line.spans.push(Span::raw("  "));
                value_line.spans.push(hint);
            }
        }
        lines.push(value_line);
        if height >= 3 {
            let hint_line = match hint {
                Some(hint) => Line::from(vec![indent(), hint]),
                None => Line::from(""),
            };
            lines.push(hint_line);
        }
        1
    };

    let cursor = if focused {
        let offset = if height == 1 {
            input.label().chars().count() + 2
        } else {
            0
        };
        Some((value_row, offset + input.cursor()))
    } else {
        None
    };
    FieldLines { lines, cursor }
}

fn choice_lines(choice: &ChoiceInput, focused: bool) -> FieldLines {
    let value = if choice.value().is_empty() {
        Span::styled(
            "Select…",
            Style::default().fg(LABEL_TEXT).add_modifier(Modifier::DIM),
        )
    } else {
        Span::styled(choice.value().to_string(), Style::default().fg(HEADER_TEXT))
    };
    let mut value_line = vec![indent()];
    if focused {
        value_line.push(Span::styled("‹ ", Style::default().fg(ACCENT)));
        value_line.push(value);
        value_line.push(Span::styled(" ›", Style::default().fg(ACCENT)));
    } else {
        value_line.push(value);
    }
    FieldLines {
        lines: vec![
            Line::from(vec![
                indent(),
                Span::styled(choice.label().to_string(), label_style(focused)),
            ]),
            Line::from(value_line),
        ],
        cursor: None,
    }
}

fn header_widget(app: &App) -> Paragraph<'static> {
    let text_style = Style::default().fg(HEADER_TEXT);
    let (status, color) = if app.is_submitting() {
        ("Submitting…", STATUS_PENDING)
    } else if let Some(notice) = app.notice() {
        if notice.is_success() {
            ("Submitted", STATUS_OK)
        } else {
            ("Failed", STATUS_ERROR)
        }
    } else {
        ("Ready", STATUS_OK)
    };
    let focused = app.session().focused_field();

    let line = Line::from(vec![
        Span::styled("  Loan Intake", text_style.add_modifier(Modifier::BOLD)),
        Span::styled("  │  ", Style::default().fg(GLOBAL_BORDER)),
        Span::styled(status, Style::default().fg(color)),
        Span::styled("  │  ", Style::default().fg(GLOBAL_BORDER)),
        Span::styled(focused.to_string(), text_style.add_modifier(Modifier::DIM)),
    ]);

    Paragraph::new(line).block(
        Block::default()
            .borders(Borders::TOP | Borders::BOTTOM)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

fn footer_widget(area: Rect) -> Paragraph<'static> {
    let hints = " Tab/Shift+Tab: Move │ ←/→: Cursor or choice │ Enter/Ctrl+S: Submit │ Esc/Ctrl+Q: Quit";
    let version = format!("v{} ", VERSION);

    let hints_width = hints.chars().count();
    let version_width = version.chars().count();
    let content_width = area.width.saturating_sub(2) as usize;
    let padding = content_width
        .saturating_sub(hints_width)
        .saturating_sub(version_width);

    let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
    Paragraph::new(Line::from(vec![
        Span::styled(hints, text_style),
        Span::styled(" ".repeat(padding), text_style),
        Span::styled(version, text_style),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}
