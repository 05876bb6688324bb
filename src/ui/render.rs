use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::layout::{counter_regions, layout_regions};
use crate::ui::theme::{ACCENT, BUTTON_BG, BUTTON_BORDER, GLOBAL_BORDER, TEXT};
use crate::ui::view::{NodeKind, ViewNode};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (body, footer) = layout_regions(area, app.show_footer());

    frame.render_widget(Clear, body);
    draw_view(frame, &app.render(), body);

    if app.show_footer() && footer.height > 0 {
        frame.render_widget(Footer::new().widget(footer), footer);
    }
}

/// Paint a counter view tree into `body`.
///
/// The root container gets a frame; headings go to the display slot and
/// buttons to the button slot computed by `counter_regions`.
fn draw_view(frame: &mut Frame<'_>, root: &ViewNode, body: Rect) {
    let regions = counter_regions(body);

    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER))
            .title(Span::styled(" Counter ", Style::default().fg(ACCENT))),
        body,
    );

    for node in &root.children {
        match node.kind {
            NodeKind::Heading => {
                let widget = Paragraph::new(node.text.clone())
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(TEXT).add_modifier(Modifier::BOLD));
                // Vertically centre the single line in the display slot
                let line = Rect {
                    y: regions.display.y + regions.display.height / 2,
                    height: regions.display.height.min(1),
                    ..regions.display
                };
                frame.render_widget(widget, line);
            }
            NodeKind::Button => {
                let widget = Paragraph::new(node.text.clone())
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(TEXT).bg(BUTTON_BG))
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .border_type(BorderType::Rounded)
                            .border_style(Style::default().fg(BUTTON_BORDER)),
                    );
                frame.render_widget(widget, regions.button);
            }
            NodeKind::Container => draw_view(frame, node, body),
        }
    }
}
