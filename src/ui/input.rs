//! 键盘事件映射 (Input -> Action)
//!
//! 将按键事件转换为 Action

use std::io;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::actions::Action;
use super::state::{App, AppMode, Focus};

/// 根据当前模式、焦点和按键获取对应的 Action
pub fn get_action(mode: &AppMode, focus: Focus, key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('u') if focus == Focus::Bill => Some(Action::ClearBill),
            _ => None,
        };
    }

    match mode {
        AppMode::Help => match key.code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Enter => Some(Action::ToggleHelp),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        },
        AppMode::Normal => match focus {
            Focus::Bill => match key.code {
                KeyCode::Esc => Some(Action::Cancel),
                KeyCode::Enter => Some(Action::Submit),
                KeyCode::Backspace => Some(Action::DeleteChar),
                KeyCode::Tab => Some(Action::FocusNext),
                KeyCode::BackTab => Some(Action::FocusPrev),
                KeyCode::Char(c) => Some(Action::Input(c)),
                _ => None,
            },
            Focus::Split => match key.code {
                KeyCode::Char('q') => Some(Action::Quit),
                KeyCode::Char('?') => Some(Action::ToggleHelp),
                KeyCode::Esc => Some(Action::Cancel),
                KeyCode::Tab | KeyCode::Enter => Some(Action::FocusNext),
                KeyCode::BackTab => Some(Action::FocusPrev),
                KeyCode::Char('+') | KeyCode::Char('l') | KeyCode::Right | KeyCode::Up => {
                    Some(Action::IncrementSplit)
                }
                KeyCode::Char('-') | KeyCode::Char('h') | KeyCode::Left | KeyCode::Down => {
                    Some(Action::DecrementSplit)
                }
                _ => None,
            },
            Focus::Tip => match key.code {
                KeyCode::Char('q') => Some(Action::Quit),
                KeyCode::Char('?') => Some(Action::ToggleHelp),
                KeyCode::Esc => Some(Action::Cancel),
                KeyCode::Tab | KeyCode::Enter => Some(Action::FocusNext),
                KeyCode::BackTab => Some(Action::FocusPrev),
                KeyCode::Char('l') | KeyCode::Right => Some(Action::SlideRight),
                KeyCode::Char('h') | KeyCode::Left => Some(Action::SlideLeft),
                KeyCode::Home => Some(Action::SlideToMin),
                KeyCode::End | KeyCode::Char('$') => Some(Action::SlideToMax),
                // 数字键直接跳到 0%..90%
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    let digit = c.to_digit(10).unwrap_or(0);
                    Some(Action::SetSliderPosition(digit as f32 / 10.0))
                }
                _ => None,
            },
        },
    }
}

/// 处理按键事件，返回 true 表示退出
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> io::Result<bool> {
    if let Some(action) = get_action(&app.mode, app.focus, key) {
        Ok(app.dispatch(action))
    } else {
        Ok(false)
    }
}
