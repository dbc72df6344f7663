#![no_std]
#![no_main]

use arcade_stick_rp2040::{
    button_pins, config, configure_usb_hid, ButtonPins, DiagnosticOutput, GpioSampler,
    KeyboardBridge, KeyboardRequestHandler, Mode, UsbHidOutput,
};
use defmt::info;
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::USB;
use embassy_rp::uart::{Config as UartConfig, UartTx};
use embassy_rp::usb::Driver;
use embassy_time::{Delay, Timer};
use embassy_usb::class::hid::State;
use embassy_usb::{Builder, Config as UsbConfig, UsbDevice};
use static_cell::StaticCell;

#[cfg(feature = "dev-panic")]
use panic_probe as _;
#[cfg(feature = "prod-panic")]
use panic_reset as _;

bind_interrupts!(struct Irqs {
    USBCTRL_IRQ => embassy_rp::usb::InterruptHandler<USB>;
});

/// USB device configuration buffer.
static CONFIG_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static BOS_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static MSOS_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static CONTROL_BUF: StaticCell<[u8; 64]> = StaticCell::new();

/// HID state.
static HID_STATE: StaticCell<State> = StaticCell::new();
static REQUEST_HANDLER: StaticCell<KeyboardRequestHandler> = StaticCell::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Arcade stick starting...");

    let p = embassy_rp::init(embassy_rp::config::Config::default());

    // Order must match PIN_MAP.
    let mut buttons: ButtonPins =
        button_pins!(p; PIN_2, PIN_3, PIN_4, PIN_5, PIN_6, PIN_7, PIN_8, PIN_9);

    // Let the pull-ups bring released buttons high before the boot sample.
    Timer::after_micros(config::PULL_UP_SETTLE_US).await;

    let mode = Mode::boot(
        cfg!(feature = "dual-boot"),
        &mut buttons[config::MODE_SELECT_INDEX],
    );
    info!("Boot mode: {}", mode);

    mode.dispatch(
        move || start_keyboard(spawner, Driver::new(p.USB, Irqs), buttons),
        move || {
            let mut uart_config = UartConfig::default();
            uart_config.baudrate = config::DIAGNOSTIC_BAUD_RATE;
            let uart = UartTx::new_blocking(p.UART0, p.PIN_0, uart_config);
            let led = Output::new(p.PIN_25, Level::Low);
            spawner.spawn(diagnostic_task(DiagnosticOutput::new(uart, led)).unwrap());
        },
    );
}

/// Bring up USB and start polling the buttons.
fn start_keyboard(spawner: Spawner, driver: Driver<'static, USB>, buttons: ButtonPins) {
    let mut usb_config = UsbConfig::new(config::USB_VID, config::USB_PID);
    usb_config.manufacturer = Some(config::USB_MANUFACTURER);
    usb_config.product = Some(config::USB_PRODUCT);
    usb_config.serial_number = Some(config::USB_SERIAL_NUMBER);
    usb_config.max_power = config::USB_MAX_POWER_MA;
    usb_config.max_packet_size_0 = 64;
    // Class is declared on the HID interface, not the device.
    usb_config.device_class = 0x00;
    usb_config.device_sub_class = 0x00;
    usb_config.device_protocol = 0x00;
    usb_config.composite_with_iads = false;

    let config_descriptor = CONFIG_DESCRIPTOR.init([0; 256]);
    let bos_descriptor = BOS_DESCRIPTOR.init([0; 256]);
    let msos_descriptor = MSOS_DESCRIPTOR.init([0; 256]);
    let control_buf = CONTROL_BUF.init([0; 64]);

    let mut builder = Builder::new(
        driver,
        usb_config,
        config_descriptor,
        bos_descriptor,
        msos_descriptor,
        control_buf,
    );

    // Configure HID class
    let hid_state = HID_STATE.init(State::new());
    let request_handler = REQUEST_HANDLER.init(KeyboardRequestHandler);
    let hid_writer = configure_usb_hid(&mut builder, hid_state, request_handler);

    // Build the USB device
    let usb_device = builder.build();

    spawner.spawn(usb_task(usb_device).unwrap());
    spawner.spawn(keyboard_task(buttons, UsbHidOutput::new(hid_writer)).unwrap());
}

/// USB device task - runs the USB stack.
#[embassy_executor::task]
async fn usb_task(mut device: UsbDevice<'static, Driver<'static, USB>>) {
    device.run().await;
}

/// Keyboard task - sample, map, emit, then wait out the poll interval.
#[embassy_executor::task]
async fn keyboard_task(buttons: ButtonPins, mut output: UsbHidOutput<'static>) {
    // Wait for USB to be ready
    output.wait_ready().await;
    info!(
        "USB HID ready, polling buttons every {} ms",
        config::POLL_INTERVAL_MS
    );

    let mut bridge = KeyboardBridge::new(GpioSampler::new(buttons), output);
    bridge.run(Delay).await
}

/// Diagnostic task - serial heartbeat and LED blink.
#[embassy_executor::task]
async fn diagnostic_task(mut output: DiagnosticOutput<'static>) {
    output.run().await
}
