//! App 状态定义 (Model)
//!
//! 包含应用状态结构体及相关枚举

use crate::config::Config;
use crate::models::{BillAmount, SplitCount, TipPercentage, TipSlider};

/// 应用状态
pub struct App {
    pub bill_text: String,
    pub split: SplitCount,
    pub slider: TipSlider,
    pub tip_percentage: TipPercentage,
    pub tip_amount: f64,
    pub total_per_person: f64,
    pub focus: Focus,
    pub mode: AppMode,
    pub message: Option<String>,
    pub currency_symbol: String,
}

/// 应用模式
#[derive(Debug, Clone, PartialEq)]
pub enum AppMode {
    Normal,
    Help,
}

/// 当前焦点所在的输入控件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Bill,
    Split,
    Tip,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Bill => Focus::Split,
            Focus::Split => Focus::Tip,
            Focus::Tip => Focus::Bill,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Bill => Focus::Tip,
            Focus::Split => Focus::Bill,
            Focus::Tip => Focus::Split,
        }
    }
}

impl App {
    /// 创建新的应用实例
    pub fn new(config: &Config) -> Self {
        let slider = TipSlider::new(config.slider_steps);
        Self {
            bill_text: String::new(),
            split: SplitCount::new(),
            tip_percentage: slider.percentage(),
            slider,
            tip_amount: 0.0,
            total_per_person: 0.0,
            focus: Focus::Bill,
            mode: AppMode::Normal,
            message: None,
            currency_symbol: config.currency_symbol.clone(),
        }
    }

    /// 当前账单金额，无效输入返回 None
    pub fn bill(&self) -> Option<BillAmount> {
        BillAmount::parse(&self.bill_text)
    }

    /// 计算面板是否可见
    pub fn panel_visible(&self) -> bool {
        self.bill().is_some()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
