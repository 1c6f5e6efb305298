//! Tests for widgets/popup

use super::*;

#[test]
fn test_centered_popup_basic() {
    let frame = Rect {
        x: 0,
        y: 0,
        width: 100,
        height: 50,
    };

    let popup = centered_popup(frame, 40, 20);

    assert_eq!(popup.x, 30);
    assert_eq!(popup.y, 15);
    assert_eq!(popup.width, 40);
    assert_eq!(popup.height, 20);
}

#[test]
fn test_centered_popup_too_large_is_clamped() {
    let frame = Rect {
        x: 0,
        y: 0,
        width: 100,
        height: 50,
    };

    let popup = centered_popup(frame, 200, 100);

    assert_eq!(popup, frame);
}

#[test]
fn test_centered_popup_respects_area_offset() {
    let area = Rect {
        x: 10,
        y: 4,
        width: 20,
        height: 10,
    };

    let popup = centered_popup(area, 10, 4);

    assert_eq!(popup.x, 15);
    assert_eq!(popup.y, 7);
}

#[test]
fn test_inset_rect_basic() {
    let area = Rect {
        x: 10,
        y: 20,
        width: 100,
        height: 50,
    };

    let inset = inset_rect(area, 5, 3);

    assert_eq!(inset.x, 15);
    assert_eq!(inset.y, 23);
    assert_eq!(inset.width, 90);
    assert_eq!(inset.height, 44);
}

#[test]
fn test_inset_rect_saturates() {
    let area = Rect {
        x: 0,
        y: 0,
        width: 10,
        height: 10,
    };

    let inset = inset_rect(area, 20, 20);

    assert_eq!(inset.width, 0);
    assert_eq!(inset.height, 0);
    assert!(inset.x <= 5);
}

#[test]
fn test_truncate_short_text_unchanged() {
    assert_eq!(truncate_to_width("火锅", 10), "火锅");
    assert_eq!(truncate_to_width("火锅", 4), "火锅");
}

#[test]
fn test_truncate_counts_wide_chars_as_two() {
    assert_eq!(truncate_to_width("麻辣香锅套餐", 7), "麻辣香…");
    assert_eq!(truncate_to_width("abcdef", 4), "abc…");
}

#[test]
fn test_truncate_to_zero_is_empty() {
    assert_eq!(truncate_to_width("火锅", 0), "");
}
