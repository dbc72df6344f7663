//! Core input types: PressedSet.

use core::ops::{BitAnd, BitOr, BitOrAssign};

use crate::keymap::KEY_COUNT;

/// Pressed/released state of every button for one poll cycle.
///
/// Bit `i` corresponds to index `i` of [`PIN_MAP`](crate::keymap::PIN_MAP).
/// A set is rebuilt from live GPIO reads every cycle and never carried over.
///
/// # Example
///
/// ```
/// use arcade_core::PressedSet;
///
/// let pressed = PressedSet::NONE.with(0).with(3);
/// assert!(pressed.is_pressed(0));
/// assert!(pressed.is_pressed(3));
/// assert!(!pressed.is_pressed(1));
/// assert_eq!(pressed.len(), 2);
/// ```
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PressedSet(u8);

impl PressedSet {
    /// No buttons pressed.
    pub const NONE: Self = Self(0);

    /// Every button pressed.
    pub const ALL: Self = Self(((1u16 << KEY_COUNT) - 1) as u8);

    /// Build a set from a raw bitfield.
    #[inline]
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Get the raw bitfield.
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Return a copy with the button at `index` marked pressed.
    ///
    /// Indices outside the pin map are ignored.
    #[inline]
    #[must_use]
    pub const fn with(self, index: usize) -> Self {
        if index < KEY_COUNT {
            Self(self.0 | (1 << index))
        } else {
            self
        }
    }

    /// Check if the button at `index` is pressed.
    #[inline]
    #[must_use]
    pub const fn is_pressed(self, index: usize) -> bool {
        index < KEY_COUNT && (self.0 & (1 << index)) != 0
    }

    /// Set or clear the button at `index`.
    #[inline]
    pub fn set(&mut self, index: usize, pressed: bool) {
        if index >= KEY_COUNT {
            return;
        }
        if pressed {
            self.0 |= 1 << index;
        } else {
            self.0 &= !(1 << index);
        }
    }

    /// Number of pressed buttons.
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Check if no buttons are pressed.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate over the pressed indices in ascending order.
    pub fn iter(self) -> impl Iterator<Item = usize> {
        (0..KEY_COUNT).filter(move |&i| self.is_pressed(i))
    }
}

impl BitOr for PressedSet {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for PressedSet {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for PressedSet {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}
