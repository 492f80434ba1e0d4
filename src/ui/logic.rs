//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑以及每次输入变化后的重新计算

use tracing::debug;

use super::actions::Action;
use super::state::{App, AppMode, Focus};
use crate::models::{BillSplit, TipSlider, compute_tip, compute_total_per_person};

impl App {
    /// 核心逻辑分发，返回 true 表示退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::FocusNext => self.move_focus(Focus::next),
            Action::FocusPrev => self.move_focus(Focus::prev),

            Action::Input(c) => {
                self.bill_text.push(c);
                self.on_bill_changed();
            }
            Action::DeleteChar => {
                if self.bill_text.pop().is_some() {
                    self.on_bill_changed();
                }
            }
            Action::ClearBill => {
                self.bill_text.clear();
                self.on_bill_changed();
            }
            Action::Submit => self.submit_bill(),

            Action::SlideLeft => self.slide(|slider| slider.step_by(-1)),
            Action::SlideRight => self.slide(|slider| slider.step_by(1)),
            Action::SlideToMin => self.slide(|slider| slider.to_min()),
            Action::SlideToMax => self.slide(|slider| slider.to_max()),
            Action::SetSliderPosition(position) => {
                self.slide(|slider| slider.set_position(position))
            }

            Action::IncrementSplit => {
                if self.panel_visible() {
                    self.split.increment();
                    self.on_split_changed();
                }
            }
            Action::DecrementSplit => {
                if self.panel_visible() {
                    self.split.decrement();
                    self.on_split_changed();
                }
            }

            Action::ToggleHelp => {
                self.mode = match self.mode {
                    AppMode::Normal => AppMode::Help,
                    AppMode::Help => AppMode::Normal,
                };
            }
            Action::Cancel => self.cancel(),
        }
        false
    }

    // ============ 焦点相关 ============

    /// 切换焦点，计算面板隐藏时焦点固定在账单输入框
    fn move_focus(&mut self, step: fn(Focus) -> Focus) {
        if self.panel_visible() {
            self.focus = step(self.focus);
        }
    }

    /// 在账单输入框按下 Enter：账单有效时离开输入框
    pub fn submit_bill(&mut self) {
        if self.focus == Focus::Bill && self.panel_visible() {
            self.focus = Focus::Split;
        }
    }

    // ============ 重新计算 ============

    /// 账单文本变化：可解析时重新计算小费与人均，否则保留原值
    pub fn on_bill_changed(&mut self) {
        let Some(bill) = self.bill() else {
            debug!(bill_text = %self.bill_text, "bill not parseable, skipping recompute");
            self.focus = Focus::Bill;
            return;
        };

        let result = BillSplit::calculate(bill, self.tip_percentage, self.split);
        self.tip_amount = result.tip_amount;
        self.total_per_person = result.total_per_person;
        debug!(
            bill = bill.value(),
            tip_percentage = self.tip_percentage.value(),
            split = self.split.get(),
            tip_amount = self.tip_amount,
            total_per_person = self.total_per_person,
            "recomputed after bill change"
        );
    }

    /// 移动滑块后依次更新百分比、小费、人均
    fn slide(&mut self, apply: impl FnOnce(&mut TipSlider)) {
        let Some(bill) = self.bill() else {
            return;
        };

        apply(&mut self.slider);
        self.tip_percentage = self.slider.percentage();
        self.tip_amount = compute_tip(bill.value(), self.tip_percentage);
        self.total_per_person = compute_total_per_person(bill.value(), self.tip_amount, self.split);
        debug!(
            position = self.slider.position(),
            tip_percentage = self.tip_percentage.value(),
            tip_amount = self.tip_amount,
            total_per_person = self.total_per_person,
            "recomputed after slider move"
        );
    }

    /// 分摊人数变化：只重新计算人均
    fn on_split_changed(&mut self) {
        if let Some(bill) = self.bill() {
            self.total_per_person =
                compute_total_per_person(bill.value(), self.tip_amount, self.split);
        }
        self.message = Some(if self.split.get() == 1 {
            "Paying alone".to_string()
        } else {
            format!("Split between {} people", self.split)
        });
        debug!(
            split = self.split.get(),
            total_per_person = self.total_per_person,
            "recomputed after split change"
        );
    }

    // ============ 通用操作 ============

    /// 取消：关闭帮助并清除提示信息
    pub fn cancel(&mut self) {
        self.mode = AppMode::Normal;
        self.message = None;
    }
}
