mod config;
mod models;
mod ui;

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::{Config, config_path};
use crate::ui::{App, render};
use crate::ui::view::components::format_currency;

/// 获取数据目录路径 (~/.local/share/tipsplit/)，用于存放日志
fn get_data_dir() -> io::Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "cannot locate data directory"))?
        .join("tipsplit");

    fs::create_dir_all(&data_dir)?;

    Ok(data_dir)
}

/// 初始化日志：终端归 UI 使用，日志写入文件，级别由 RUST_LOG 控制
fn init_logging(log_path: &Path) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(log_path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();

    Ok(())
}

fn main() -> io::Result<()> {
    let log_path = get_data_dir()?.join("tipsplit.log");
    init_logging(&log_path)?;

    let config_path = config_path()?;
    let config = Config::load(&config_path).inspect_err(|e| {
        warn!(path = %config_path.display(), error = %e, "failed to load config");
    })?;
    info!(
        config_file = %config_path.display(),
        currency_symbol = %config.currency_symbol,
        slider_steps = config.slider_steps,
        "tipsplit starting"
    );

    // 创建应用状态
    let mut app = App::new(&config);

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        warn!(error = %e, "event loop failed");
    }

    let total = format_currency(&app.currency_symbol, app.total_per_person);
    info!(total_per_person = %total, split = app.split.get(), "tipsplit exiting");
    if app.bill().is_some() {
        println!("Total per person: {}", total);
    }

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && ui::handle_key_event(app, key)? {
                break;
            }
        }
    }
    Ok(())
}
