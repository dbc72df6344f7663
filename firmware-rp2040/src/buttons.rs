//! Button inputs.
//!
//! Every button is an input with the internal pull-up enabled and shorts
//! its pin to ground when held.

use arcade_core::KEY_COUNT;
use embassy_rp::gpio::Input;

/// Button inputs ordered like [`PIN_MAP`](arcade_core::PIN_MAP).
pub type ButtonPins = [Input<'static>; KEY_COUNT];

/// Configure the listed pins as pulled-up inputs, in the order given.
///
/// ```ignore
/// let buttons: ButtonPins = button_pins!(p; PIN_2, PIN_3, PIN_4, PIN_5, PIN_6, PIN_7, PIN_8, PIN_9);
/// ```
#[macro_export]
macro_rules! button_pins {
    ($p:ident; $($pin:ident),* $(,)?) => {
        [ $(::embassy_rp::gpio::Input::new($p.$pin, ::embassy_rp::gpio::Pull::Up)),* ]
    };
}
