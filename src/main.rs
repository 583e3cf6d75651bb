//! Memory-match firmware: main entry point.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  JoystickAdapter   GraphicsDisplay   LogEventSink   Esp32Time  │
//! │  (InputPort)       (DisplayPort)     (EventSink)    (clock)    │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │            GameService (pure logic)                    │    │
//! │  │  InputPoller · FSM · Screens                           │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

// ── Imports ───────────────────────────────────────────────────
use anyhow::Result;
use esp_idf_hal::delay::{Ets, FreeRtos};
use esp_idf_hal::gpio::PinDriver;
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_hal::spi::config::Config as SpiConfig;
use esp_idf_hal::spi::{SpiDeviceDriver, SpiDriverConfig};
use esp_idf_hal::units::FromValueType;
use log::info;
use mipidsi::interface::SpiInterface;
use mipidsi::models::ILI9341Rgb565;
use mipidsi::options::{Orientation, Rotation};

use memory_match::adapters::graphics::GraphicsDisplay;
use memory_match::adapters::joystick::{Adc1Axis, GpioInput, JoystickAdapter};
use memory_match::adapters::log_sink::LogEventSink;
use memory_match::adapters::time::Esp32TimeAdapter;
use memory_match::app::service::GameService;
use memory_match::config::GameConfig;
use memory_match::drivers::hw_init;
use memory_match::error::Error;
use memory_match::pins;

/// ADC readings folded into the shuffle seed.
const SEED_SAMPLES: u32 = 64;

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  Memory Match v{}                  ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Configuration ──────────────────────────────────────
    let mut config = GameConfig::default();
    config.joystick.invert_horizontal = pins::JOY_INVERT_HORIZONTAL;
    config.validate()?;

    // ── 3. Joystick peripherals + RNG seed ────────────────────
    hw_init::init_peripherals()?;
    let seed = hw_init::entropy_seed(pins::SEED_ADC_CH, SEED_SAMPLES);
    info!("Shuffle seed: {:#018x}", seed);

    let mut joystick = JoystickAdapter::new(
        Adc1Axis::new(pins::JOY_HORIZ_ADC_CH),
        Adc1Axis::new(pins::JOY_VERT_ADC_CH),
        GpioInput::new(pins::JOY_SEL_GPIO),
    );

    // ── 4. TFT panel (ILI9341 over SPI2, landscape) ───────────
    // SCLK 12, MOSI 11, MISO 13, CS 10, DC 9, RST 8
    let peripherals = Peripherals::take()?;
    let spi = SpiDeviceDriver::new_single(
        peripherals.spi2,
        peripherals.pins.gpio12,
        peripherals.pins.gpio11,
        Some(peripherals.pins.gpio13),
        Some(peripherals.pins.gpio10),
        &SpiDriverConfig::new(),
        &SpiConfig::new().baudrate(pins::TFT_SPI_HZ.Hz()),
    )?;
    let dc = PinDriver::output(peripherals.pins.gpio9)?;
    let rst = PinDriver::output(peripherals.pins.gpio8)?;

    let mut spi_buffer = [0u8; 512];
    let interface = SpiInterface::new(spi, dc, &mut spi_buffer);
    let panel = mipidsi::Builder::new(ILI9341Rgb565, interface)
        .reset_pin(rst)
        .orientation(Orientation::new().rotate(Rotation::Deg90))
        .init(&mut Ets)
        .map_err(|_| Error::Init("ILI9341 panel"))?;
    let mut display = GraphicsDisplay::new(panel);

    // ── 5. Game service ───────────────────────────────────────
    let mut sink = LogEventSink::new();
    let clock = Esp32TimeAdapter::new();
    let mut service = GameService::new(config, seed);
    service.start(&mut display, &mut sink);

    info!("System ready. Entering game loop.");

    // ── 6. Game loop ──────────────────────────────────────────
    let tick_ms = service.config().tick_interval_ms;
    loop {
        service.tick(&mut joystick, &mut display, &mut sink, clock.uptime_ms());
        FreeRtos::delay_ms(tick_ms);
    }
}
