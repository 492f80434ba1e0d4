//! Action 枚举定义 (Intent)
//!
//! 用户交互转化为明确的语义化 Action

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    FocusNext,
    FocusPrev,

    // 账单输入
    Input(char), // 输入字符
    DeleteChar,  // Backspace
    ClearBill,   // Ctrl-U
    Submit,      // Enter

    // 小费滑块
    SlideLeft,
    SlideRight,
    SlideToMin,
    SlideToMax,
    SetSliderPosition(f32),

    // 分摊人数
    IncrementSplit,
    DecrementSplit,

    ToggleHelp,
    Cancel, // Esc
}
