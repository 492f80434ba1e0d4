//! 通用 UI 组件
//!
//! 对话框、输入框、金额格式化等通用组件

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

/// 金额格式化为两位小数，带货币符号
pub fn format_currency(symbol: &str, amount: f64) -> String {
    format!("{}{:.2}", symbol, amount)
}

/// [组件] 弹窗基础框架，返回内容区域
pub fn render_dialog_framework(frame: &mut Frame, area: Rect, title: &str) -> Rect {
    frame.render_widget(Clear, area);
    let title = Line::from(title)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .centered();
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// [组件] 带有标题和样式的单行输入框，聚焦时显示光标
pub fn render_input_widget(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    is_focused: bool,
    active_color: Color,
) {
    let style = if is_focused {
        Style::default()
            .fg(active_color)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let input = Paragraph::new(value)
        .style(style)
        .block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(input, area);

    if is_focused {
        let x = area.x + 1 + value.chars().count() as u16;
        if x < area.right().saturating_sub(1) {
            frame.set_cursor_position((x, area.y + 1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency("$", 59.0), "$59.00");
        assert_eq!(format_currency("$", 29.5), "$29.50");
        assert_eq!(format_currency("$", 0.0), "$0.00");
        assert_eq!(format_currency("EUR ", 61.7), "EUR 61.70");
        assert_eq!(format_currency("$", 1.0 / 3.0), "$0.33");
    }
}
