#![no_std]
#![no_main]

use adc_to_joystick::{
    configure_usb_hid, ButtonPins, HidSharedState, JoystickBridge, JoystickRequestHandler,
    StickAdc, StickSampler, UsbHidOutput,
};
use defmt::{error, info};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig, InterruptHandler as AdcInterruptHandler};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::peripherals::USB;
use embassy_rp::usb::{Driver, InterruptHandler as UsbInterruptHandler};
use embassy_time::Timer;
use embassy_usb::class::hid::State;
use embassy_usb::{Builder, Config as UsbConfig};
use static_cell::StaticCell;

#[cfg(feature = "dev-panic")]
use panic_probe as _;
#[cfg(feature = "prod-panic")]
use panic_reset as _;

bind_interrupts!(struct Irqs {
    ADC_IRQ_FIFO => AdcInterruptHandler;
    USBCTRL_IRQ => UsbInterruptHandler<USB>;
});

/// Latest report snapshot and idle rate, shared between the sampling
/// loop and the USB control pipe (lock-free).
static HID_SHARED: HidSharedState = HidSharedState::new();

/// USB device configuration buffers.
static CONFIG_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static BOS_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static MSOS_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static CONTROL_BUF: StaticCell<[u8; 64]> = StaticCell::new();

/// HID state and control request handler.
static HID_STATE: StaticCell<State> = StaticCell::new();
static REQUEST_HANDLER: StaticCell<JoystickRequestHandler> = StaticCell::new();

type Bridge = JoystickBridge<
    StickSampler<StickAdc<'static>, ButtonPins<'static>>,
    UsbHidOutput<'static>,
>;

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("adc-to-joystick starting...");

    let p = embassy_rp::init(embassy_rp::config::Config::default());

    // --- Analog axes on ADC0..2 ---
    let adc = Adc::new(p.ADC, Irqs, AdcConfig::default());
    let y = Channel::new_pin(p.PIN_26, Pull::None);
    let x = Channel::new_pin(p.PIN_27, Pull::None);
    let z = Channel::new_pin(p.PIN_28, Pull::None);
    let stick = StickAdc::new(adc, x, y, z);

    // --- Button lines, active low with internal pull-ups ---
    let buttons = ButtonPins::new([
        Input::new(p.PIN_2, Pull::Up),
        Input::new(p.PIN_3, Pull::Up),
        Input::new(p.PIN_4, Pull::Up),
        Input::new(p.PIN_5, Pull::Up),
        Input::new(p.PIN_6, Pull::Up),
        Input::new(p.PIN_7, Pull::Up),
    ]);

    let sampler = StickSampler::new(stick, buttons);

    // --- USB Setup ---
    let usb_driver = Driver::new(p.USB, Irqs);

    let mut usb_config = UsbConfig::new(0x1209, 0x0001); // pid.codes test VID/PID
    usb_config.manufacturer = Some("Rust Joystick");
    usb_config.product = Some("Analog Joystick");
    usb_config.serial_number = Some("001");
    usb_config.max_power = 100;
    usb_config.max_packet_size_0 = 64;

    let config_descriptor = CONFIG_DESCRIPTOR.init([0; 256]);
    let bos_descriptor = BOS_DESCRIPTOR.init([0; 256]);
    let msos_descriptor = MSOS_DESCRIPTOR.init([0; 256]);
    let control_buf = CONTROL_BUF.init([0; 64]);

    let mut builder = Builder::new(
        usb_driver,
        usb_config,
        config_descriptor,
        bos_descriptor,
        msos_descriptor,
        control_buf,
    );

    // Configure HID class with the control request handler
    let hid_state = HID_STATE.init(State::new());
    let request_handler = REQUEST_HANDLER.init(JoystickRequestHandler::new(&HID_SHARED));
    let hid_writer = configure_usb_hid(&mut builder, hid_state, request_handler);

    // Build the USB device
    let usb_device = builder.build();

    // Create the sampling/reporting loop
    let usb_output = UsbHidOutput::new(hid_writer, &HID_SHARED);
    let bridge = JoystickBridge::new(sampler, usb_output);

    // On-board LED for error indication
    let led = Output::new(p.PIN_25, Level::Low);

    spawner.spawn(usb_task(usb_device)).unwrap();
    spawner.spawn(stick_task(bridge, led)).unwrap();

    info!("adc-to-joystick initialized");
}

/// USB device task - runs the USB stack.
#[embassy_executor::task]
async fn usb_task(mut device: embassy_usb::UsbDevice<'static, Driver<'static, USB>>) {
    device.run().await;
}

/// Sampling task - one cycle per iteration: sample the axes, read the
/// buttons, send the report. The HID writer paces the loop at the host
/// poll rate.
#[embassy_executor::task]
async fn stick_task(mut bridge: Bridge, mut led: Output<'static>) {
    // Wait for enumeration before pushing reports
    bridge.output_mut().wait_ready().await;
    info!("USB HID ready, reporting at the host poll rate");

    loop {
        if let Err(e) = bridge.process_one().await {
            error!("cycle error: {:?}", e);
            led.toggle();
            Timer::after_millis(1).await;
        }
    }
}
