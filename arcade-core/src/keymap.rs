//! Fixed button tables and the keycode mapper.
//!
//! [`PIN_MAP`] and [`KEY_MAP`] are index-aligned: the button wired to GPIO
//! `PIN_MAP[i]` reports `KEY_MAP[i]`. Both are compile-time constants, and
//! their order is the report priority order.

use heapless::Vec;
use usbd_hid::descriptor::KeyboardUsage;

use crate::report::{KeyReport, MAX_KEYS, MAX_USAGE};
use crate::types::PressedSet;

/// Number of buttons.
pub const KEY_COUNT: usize = 8;

/// GPIO number of each button.
pub const PIN_MAP: [u8; KEY_COUNT] = [2, 3, 4, 5, 6, 7, 8, 9];

/// HID usage reported for each button.
pub const KEY_MAP: [u8; KEY_COUNT] = [
    KeyboardUsage::KeyboardWw as u8,
    KeyboardUsage::KeyboardSs as u8,
    KeyboardUsage::KeyboardAa as u8,
    KeyboardUsage::KeyboardDd as u8,
    KeyboardUsage::KeyboardSpacebar as u8,
    KeyboardUsage::KeyboardEnter as u8,
    KeyboardUsage::KeyboardLeftArrow as u8,
    KeyboardUsage::KeyboardRightArrow as u8,
];

const _: () = {
    assert!(KEY_COUNT <= u8::BITS as usize);
    let mut i = 0;
    while i < KEY_COUNT {
        assert!(KEY_MAP[i] != 0 && KEY_MAP[i] <= MAX_USAGE);
        i += 1;
    }
};

/// Position of a GPIO number in [`PIN_MAP`].
#[must_use]
pub const fn pin_index(gpio: u8) -> Option<usize> {
    let mut i = 0;
    while i < KEY_COUNT {
        if PIN_MAP[i] == gpio {
            return Some(i);
        }
        i += 1;
    }
    None
}

/// Convert the pressed buttons of one cycle into a keyboard report.
///
/// Buttons are visited in [`PIN_MAP`] order and collection stops once six
/// keys are held, so with more than six pressed the lowest-index buttons
/// win and the rest are dropped for this cycle.
#[must_use]
pub fn map_pressed(pressed: PressedSet) -> KeyReport {
    let mut keys: Vec<u8, MAX_KEYS> = Vec::new();

    for index in pressed.iter() {
        if keys.push(KEY_MAP[index]).is_err() {
            break;
        }
    }

    KeyReport::from_keys(&keys)
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: u8 = 0x1A;
    const S: u8 = 0x16;
    const A: u8 = 0x04;
    const D: u8 = 0x07;
    const SPACE: u8 = 0x2C;
    const ENTER: u8 = 0x28;
    const LEFT: u8 = 0x50;
    const RIGHT: u8 = 0x4F;

    #[test]
    fn test_key_map_values() {
        assert_eq!(KEY_MAP, [W, S, A, D, SPACE, ENTER, LEFT, RIGHT]);
    }

    #[test]
    fn test_pin_index() {
        assert_eq!(pin_index(2), Some(0));
        assert_eq!(pin_index(6), Some(4));
        assert_eq!(pin_index(9), Some(7));
        assert_eq!(pin_index(25), None);
    }

    #[test]
    fn test_no_input() {
        let report = map_pressed(PressedSet::NONE);
        assert_eq!(report.as_bytes(), [0; 8]);
    }

    #[test]
    fn test_single_input() {
        let report = map_pressed(PressedSet::NONE.with(0));
        assert_eq!(report.as_bytes(), [0, 0, W, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_keys_follow_pin_order() {
        let report = map_pressed(PressedSet::NONE.with(7).with(2).with(5));
        assert_eq!(report.keys(), &[A, ENTER, RIGHT, 0, 0, 0]);
    }

    #[test]
    fn test_exactly_six_pressed() {
        let report = map_pressed(PressedSet::from_bits(0b0011_1111));
        assert_eq!(report.keys(), &[W, S, A, D, SPACE, ENTER]);
    }

    #[test]
    fn test_rollover_drops_highest_index() {
        // Everything except Left (index 6) held.
        let pressed = PressedSet::from_bits(0b1011_1111);
        assert_eq!(pressed.len(), 7);

        let report = map_pressed(pressed);
        assert_eq!(report.keys(), &[W, S, A, D, SPACE, ENTER]);
        assert!(!report.keys().contains(&RIGHT));
    }

    #[test]
    fn test_all_pressed_keeps_first_six() {
        let report = map_pressed(PressedSet::ALL);
        assert_eq!(report.keys(), &[W, S, A, D, SPACE, ENTER]);
    }
}
