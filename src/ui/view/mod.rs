//! 视图层模块
//!
//! 包含主渲染入口和各个屏幕区域的视图函数

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};

use super::state::{App, AppMode, Focus};
use components::{format_currency, render_dialog_framework, render_input_widget};
use layouts::centered_rect;

const HEADER_BG: Color = Color::Rgb(0xE9, 0xD7, 0xF7);
const FOCUS_COLOR: Color = Color::Yellow;

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // 人均金额
            Constraint::Min(5),    // 账单表单
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_bill_form(frame, app, chunks[1]);
    render_help(frame, app, chunks[2]);

    if app.mode == AppMode::Help {
        render_help_dialog(frame);
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let total = format_currency(&app.currency_symbol, app.total_per_person);
    let header = Paragraph::new(vec![
        Line::from("Total Per Person"),
        Line::from(Span::styled(total, Style::default().add_modifier(Modifier::BOLD))),
    ])
    .centered()
    .style(Style::default().fg(Color::Black).bg(HEADER_BG))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn render_bill_form(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 账单输入
            Constraint::Length(1), // 分摊人数
            Constraint::Length(1), // 小费金额
            Constraint::Length(1), // 百分比
            Constraint::Length(1), // 滑块
            Constraint::Length(1), // 刻度
            Constraint::Min(0),
        ])
        .split(inner);

    render_input_widget(
        frame,
        chunks[0],
        "Enter Bill",
        &app.bill_text,
        app.focus == Focus::Bill && app.mode == AppMode::Normal,
        FOCUS_COLOR,
    );

    // 账单无效时隐藏计算面板
    if !app.panel_visible() {
        return;
    }

    render_split(frame, app, chunks[1]);
    render_tip(frame, app, chunks[2]);
    render_slider(frame, app, chunks[3], chunks[4]);
    render_ticks(frame, app, chunks[5]);
}

fn row_style(app: &App, focus: Focus) -> Style {
    if app.focus == focus {
        Style::default().fg(FOCUS_COLOR).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

/// 左侧标签 + 右侧数值的一行
fn render_row(frame: &mut Frame, area: Rect, label: &str, value: Line, style: Style) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(12), Constraint::Min(0)])
        .split(area);

    frame.render_widget(Paragraph::new(label).style(style), chunks[0]);
    frame.render_widget(Paragraph::new(value).right_aligned().style(style), chunks[1]);
}

fn render_split(frame: &mut Frame, app: &App, area: Rect) {
    let stepper = Line::from(vec![
        Span::raw("[-]"),
        Span::raw(format!(" {} ", app.split)),
        Span::raw("[+]"),
    ]);
    render_row(frame, area, "Split", stepper, row_style(app, Focus::Split));
}

fn render_tip(frame: &mut Frame, app: &App, area: Rect) {
    let amount = format_currency(&app.currency_symbol, app.tip_amount);
    render_row(frame, area, "Tip", Line::from(amount), Style::default());
}

fn render_slider(frame: &mut Frame, app: &App, label_area: Rect, gauge_area: Rect) {
    let style = row_style(app, Focus::Tip);
    frame.render_widget(
        Paragraph::new(app.tip_percentage.to_string())
            .centered()
            .style(style),
        label_area,
    );

    let gauge_color = if app.focus == Focus::Tip {
        FOCUS_COLOR
    } else {
        Color::Magenta
    };
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(gauge_color).bg(Color::DarkGray))
        .ratio(f64::from(app.slider.position()).clamp(0.0, 1.0))
        .label("");
    frame.render_widget(gauge, gauge_area);
}

/// 在滑块下方标出停靠点（连续滑块不显示）
fn render_ticks(frame: &mut Frame, app: &App, area: Rect) {
    if app.slider.steps() == 0 || area.width < 2 {
        return;
    }

    let width = usize::from(area.width);
    let stops = app.slider.stop_count() as usize;
    let current = app.slider.stop_index() as usize;
    let mut spans = vec![Span::raw(" "); width];
    for i in 0..stops {
        let x = (i * (width - 1) + (stops - 1) / 2) / (stops - 1);
        spans[x] = if i == current {
            Span::styled("^", row_style(app, Focus::Tip))
        } else {
            Span::styled("'", Style::default().fg(Color::DarkGray))
        };
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match &app.mode {
        AppMode::Help => "[Esc] close help",
        AppMode::Normal => match app.focus {
            Focus::Bill if app.panel_visible() => "type the bill  [Enter/Tab] next  [Ctrl-C] quit",
            Focus::Bill => "type the bill  [Ctrl-U] clear  [Ctrl-C] quit",
            Focus::Split => "[-/+] split  [Tab] next  [?] help  [q] quit",
            Focus::Tip => "[h/l] tip  [0-9] jump  [Home/End] 0%/100%  [Tab] next  [q] quit",
        },
    };

    let message = app.message.as_deref().unwrap_or("");
    let text = if message.is_empty() {
        help_text.to_string()
    } else {
        format!("{}  |  {}", help_text, message)
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}

fn render_help_dialog(frame: &mut Frame) {
    let area = centered_rect(44, 12, frame.area());
    let inner = render_dialog_framework(frame, area, "Keys");

    let lines = vec![
        Line::from("Tab / Shift-Tab   move between fields"),
        Line::from("Enter             leave the bill field"),
        Line::from("Ctrl-U            clear the bill"),
        Line::from("- / +             change split"),
        Line::from("h / l             move tip slider"),
        Line::from("0 - 9             tip 0% .. 90%"),
        Line::from("Home / End        tip 0% / 100%"),
        Line::from("Esc               close, clear message"),
        Line::from("q / Ctrl-C        quit"),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
