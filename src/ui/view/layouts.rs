//! 布局辅助函数

use ratatui::layout::Rect;

/// 在给定区域中居中一个固定大小（单元格）的矩形，区域不足时收缩
pub fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect::new(
        r.x + (r.width - width) / 2,
        r.y + (r.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 70, 24);
        assert_eq!(centered_rect(44, 12, area), Rect::new(13, 6, 44, 12));

        let offset = Rect::new(5, 2, 20, 10);
        assert_eq!(centered_rect(10, 4, offset), Rect::new(10, 5, 10, 4));
    }

    #[test]
    fn test_centered_rect_shrinks() {
        let area = Rect::new(0, 0, 30, 8);
        assert_eq!(centered_rect(44, 12, area), area);
    }
}
