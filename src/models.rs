use std::fmt;
use std::num::NonZeroU32;

/// 小费门槛：账单金额必须严格大于该值才计算小费
pub const TIP_FLOOR: f64 = 1.0;

/// 账单金额（非负、有限）
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct BillAmount(f64);

impl BillAmount {
    /// 从用户输入解析账单金额
    ///
    /// 空串、无法解析、负数以及 `inf`/`NaN` 均视为"尚未输入"
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let value: f64 = text.parse().ok()?;
        if !value.is_finite() || value < 0.0 {
            return None;
        }

        Some(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

/// 小费百分比 [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct TipPercentage(u8);

impl TipPercentage {
    /// 超过 100 的值按 100 处理
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for TipPercentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// 分摊人数，最小为 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SplitCount(NonZeroU32);

impl SplitCount {
    pub fn new() -> Self {
        Self(NonZeroU32::MIN)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// 人数加一
    pub fn increment(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    /// 人数减一，已为 1 时不变
    pub fn decrement(&mut self) {
        if let Some(n) = NonZeroU32::new(self.0.get() - 1) {
            self.0 = n;
        }
    }
}

impl Default for SplitCount {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SplitCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 小费滑块
///
/// `steps` 为中间刻度数（不含两端），共 `steps + 2` 个停靠点；
/// `steps == 0` 表示连续滑块，精度 1%。状态只保存停靠点序号
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TipSlider {
    index: u32,
    steps: u8,
}

impl TipSlider {
    pub const DEFAULT_STEPS: u8 = 5;
    pub const MAX_STEPS: u8 = 99;

    pub fn new(steps: u8) -> Self {
        Self {
            index: 0,
            steps: steps.min(Self::MAX_STEPS),
        }
    }

    /// 滑块位置 [0, 1]，仅用于绘制
    pub fn position(&self) -> f32 {
        self.index as f32 / self.intervals() as f32
    }

    pub fn steps(&self) -> u8 {
        self.steps
    }

    /// 当前位置对应的百分比：序号 × 100 / 间隔数，整数除法即截断
    pub fn percentage(&self) -> TipPercentage {
        TipPercentage::new((self.index * 100 / self.intervals()) as u8)
    }

    /// 停靠点间隔数（连续滑块按 100 计）
    fn intervals(&self) -> u32 {
        if self.steps == 0 {
            100
        } else {
            u32::from(self.steps) + 1
        }
    }

    /// 当前所在停靠点序号
    pub fn stop_index(&self) -> u32 {
        self.index
    }

    /// 停靠点总数
    pub fn stop_count(&self) -> u32 {
        self.intervals() + 1
    }

    /// 设置位置并吸附到最近的停靠点
    pub fn set_position(&mut self, position: f32) {
        let position = if position.is_nan() {
            0.0
        } else {
            position.clamp(0.0, 1.0)
        };
        self.index = (position * self.intervals() as f32).round() as u32;
    }

    /// 移动若干个停靠点（负数向左）
    pub fn step_by(&mut self, delta: i32) {
        let intervals = i64::from(self.intervals());
        self.index = (i64::from(self.index) + i64::from(delta)).clamp(0, intervals) as u32;
    }

    pub fn to_min(&mut self) {
        self.index = 0;
    }

    pub fn to_max(&mut self) {
        self.index = self.intervals();
    }
}

impl Default for TipSlider {
    fn default() -> Self {
        Self::new(Self::DEFAULT_STEPS)
    }
}

/// 计算小费：账单不超过门槛时为 0
pub fn compute_tip(bill: f64, tip: TipPercentage) -> f64 {
    if bill > TIP_FLOOR {
        bill * f64::from(tip.value()) / 100.0
    } else {
        0.0
    }
}

/// 计算人均金额
pub fn compute_total_per_person(bill: f64, tip_amount: f64, split: SplitCount) -> f64 {
    (bill + tip_amount) / f64::from(split.get())
}

/// 一次计算的结果
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BillSplit {
    pub tip_amount: f64,
    pub total_per_person: f64,
}

impl BillSplit {
    pub fn calculate(bill: BillAmount, tip: TipPercentage, split: SplitCount) -> Self {
        let tip_amount = compute_tip(bill.value(), tip);
        Self {
            tip_amount,
            total_per_person: compute_total_per_person(bill.value(), tip_amount, split),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_parse_bill() {
        assert_eq!(BillAmount::parse("50.00").map(BillAmount::value), Some(50.0));
        assert_eq!(BillAmount::parse(" 12 ").map(BillAmount::value), Some(12.0));
        assert_eq!(BillAmount::parse("0").map(BillAmount::value), Some(0.0));
        assert!(BillAmount::parse("").is_none());
        assert!(BillAmount::parse("   ").is_none());
        assert!(BillAmount::parse("12.3.4").is_none());
        assert!(BillAmount::parse("abc").is_none());
        assert!(BillAmount::parse("-5").is_none());
        assert!(BillAmount::parse("inf").is_none());
        assert!(BillAmount::parse("NaN").is_none());
    }

    #[test]
    fn test_tip_below_floor() {
        for bill in [-10.0, 0.0, 0.5, 1.0] {
            for pct in [0u8, 18, 50, 100] {
                assert_eq!(compute_tip(bill, TipPercentage::new(pct)), 0.0);
            }
        }
    }

    #[test]
    fn test_tip_above_floor() {
        let tip = TipPercentage::new(18);
        assert_eq!(tip.value(), 18);
        assert!(approx_eq(compute_tip(50.0, tip), 9.0));
        assert!(approx_eq(compute_tip(1.01, TipPercentage::new(100)), 1.01));
        assert!(approx_eq(compute_tip(123.45, TipPercentage::new(50)), 61.725));
    }

    #[test]
    fn test_total_per_person() {
        let mut split = SplitCount::new();
        assert!(approx_eq(compute_total_per_person(50.0, 9.0, split), 59.0));

        split.increment();
        assert!(approx_eq(compute_total_per_person(50.0, 9.0, split), 29.5));
    }

    #[test]
    fn test_split_floor() {
        let mut split = SplitCount::new();
        split.decrement();
        assert_eq!(split.get(), 1);

        split.increment();
        split.increment();
        assert_eq!(split.get(), 3);
        split.decrement();
        assert_eq!(split.get(), 2);
    }

    #[test]
    fn test_percentage_bounds() {
        assert_eq!(TipPercentage::new(0).to_string(), "0%");
        assert_eq!(TipPercentage::new(100).to_string(), "100%");
        assert_eq!(TipPercentage::new(150).value(), 100);
    }

    #[test]
    fn test_default_slider_stops() {
        let mut slider = TipSlider::default();
        assert_eq!(slider.stop_count(), 7);

        let mut seen = vec![slider.percentage().value()];
        for _ in 0..10 {
            slider.step_by(1);
            seen.push(slider.percentage().value());
        }
        assert_eq!(seen[..7], [0u8, 16, 33, 50, 66, 83, 100]);
        // 到达右端后不再移动
        assert!(seen[7..].iter().all(|&p| p == 100));

        slider.step_by(-1);
        assert_eq!(slider.percentage().value(), 83);
    }

    #[test]
    fn test_slider_snaps() {
        let mut slider = TipSlider::default();
        slider.set_position(0.18);
        assert_eq!(slider.percentage().value(), 16);

        let mut continuous = TipSlider::new(0);
        continuous.set_position(0.18);
        assert_eq!(continuous.percentage().value(), 18);
        continuous.step_by(1);
        assert_eq!(continuous.percentage().value(), 19);
    }

    #[test]
    fn test_continuous_slider_reaches_every_percent() {
        let mut slider = TipSlider::new(0);
        assert_eq!(slider.stop_count(), 101);

        for expected in 1..=100u8 {
            slider.step_by(1);
            assert_eq!(slider.percentage().value(), expected);
        }
        slider.step_by(1);
        assert_eq!(slider.percentage().value(), 100);

        for expected in (0..100u8).rev() {
            slider.step_by(-1);
            assert_eq!(slider.percentage().value(), expected);
        }
    }

    #[test]
    fn test_slider_bounds() {
        let mut slider = TipSlider::default();
        slider.to_max();
        assert_eq!(slider.percentage().to_string(), "100%");
        assert_eq!(slider.position(), 1.0);
        slider.to_min();
        assert_eq!(slider.percentage().to_string(), "0%");
        assert_eq!(slider.position(), 0.0);

        slider.set_position(f32::NAN);
        assert_eq!(slider.stop_index(), 0);
        slider.set_position(7.0);
        assert_eq!(slider.stop_index(), 6);
    }

    #[test]
    fn test_bill_split_scenario() {
        let bill = BillAmount::parse("50.00").unwrap();
        let tip = TipPercentage::new(18);
        let mut split = SplitCount::new();

        let result = BillSplit::calculate(bill, tip, split);
        assert!(approx_eq(result.tip_amount, 9.0));
        assert!(approx_eq(result.total_per_person, 59.0));

        split.increment();
        let result = BillSplit::calculate(bill, tip, split);
        assert!(approx_eq(result.total_per_person, 29.5));

        let result = BillSplit::calculate(BillAmount::parse("1").unwrap(), tip, split);
        assert_eq!(result.tip_amount, 0.0);
    }
}
