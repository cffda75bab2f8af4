//! ST7789 panel bring-up for the gauge.
//!
//! The panel hangs off SPI0 (clock GPIO18, data GPIO19) with chip select on
//! GPIO17, data/command on GPIO16 and the backlight on GPIO20. Its reset line
//! follows the board's RUN pin, so the driver gets no reset pin. GPIO27 is left
//! free for the DHT22.

use defmt::panic;
use display_interface_spi::SPIInterface;
use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{Blocking, Config as SpiConfig, Spi};
use embedded_hal_bus::spi::ExclusiveDevice;
use mipidsi::models::ST7789;
use mipidsi::options::{ColorInversion, Orientation, Rotation};
use mipidsi::{Builder, NoResetPin};
use thermo_gauge::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Display type alias for the ST7789 panel (no reset pin).
pub type PanelDisplay<'d> = mipidsi::Display<
    SPIInterface<ExclusiveDevice<Spi<'d, SPI0, Blocking>, Output<'d>, embedded_hal_bus::spi::NoDelay>, Output<'d>>,
    ST7789,
    NoResetPin,
>;

/// Initialize the panel in landscape orientation.
///
/// There is no recovery path for a panel that fails to initialize; the
/// firmware halts with a defmt message.
pub fn init_display<'d>(
    spi: Spi<'d, SPI0, Blocking>,
    cs: Output<'d>,
    dc: Output<'d>,
) -> PanelDisplay<'d> {
    // Output pins cannot fail, so the chip-select setup is infallible
    let Ok(spi_device) = ExclusiveDevice::new_no_delay(spi, cs);

    let di = SPIInterface::new(spi_device, dc);

    // Native panel is 240x320 (portrait), rotated 90° for 320x240 (landscape)
    let display = Builder::new(ST7789, di)
        .display_size(SCREEN_HEIGHT as u16, SCREEN_WIDTH as u16)
        .orientation(Orientation::new().rotate(Rotation::Deg90))
        .invert_colors(ColorInversion::Inverted)
        .init(&mut embassy_time::Delay);

    match display {
        Ok(display) => display,
        Err(_) => panic!("ST7789 init failed"),
    }
}

/// SPI configuration for the ST7789 display.
///
/// The ST7789 supports up to 62.5MHz SPI clock.
/// We use 40MHz for reliable operation.
pub fn display_spi_config() -> SpiConfig {
    let mut config = SpiConfig::default();
    config.frequency = 40_000_000; // 40MHz
    config
}
