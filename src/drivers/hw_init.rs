//! One-shot peripheral initialization for the joystick.
//!
//! Configures the ADC1 oneshot unit (two stick axes plus one unconnected
//! channel used as an entropy source) and the push-button GPIO using raw
//! ESP-IDF sys calls. Called once from `main()` before the game loop.
//!
//! On host builds every function is a stub that reports a centred stick
//! and a released button.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;
#[cfg(target_os = "espidf")]
use log::{info, warn};

use crate::error::{Error, InputError};
#[cfg(target_os = "espidf")]
use crate::pins;

/// Full-scale reading of the 12-bit ADC.
pub const ADC_MAX: u16 = 4095;

#[cfg(target_os = "espidf")]
pub fn init_peripherals() -> Result<(), Error> {
    // SAFETY: Called once from main() before the game loop; single-threaded.
    unsafe {
        init_adc()?;
        init_button()?;
    }
    info!("hw_init: joystick peripherals configured");
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_peripherals() -> Result<(), Error> {
    log::info!("hw_init(sim): peripheral init skipped");
    Ok(())
}

// ── ADC (oneshot) ─────────────────────────────────────────────

#[cfg(target_os = "espidf")]
static mut ADC1_HANDLE: adc_oneshot_unit_handle_t = core::ptr::null_mut();

/// SAFETY: Must be called only from the single-threaded init path or the
/// main-loop read path.  `init_adc()` completes before the loop starts.
#[cfg(target_os = "espidf")]
unsafe fn adc1_handle() -> adc_oneshot_unit_handle_t {
    unsafe { ADC1_HANDLE }
}

#[cfg(target_os = "espidf")]
unsafe fn init_adc() -> Result<(), Error> {
    let init_cfg = adc_oneshot_unit_init_cfg_t {
        unit_id: adc_unit_t_ADC_UNIT_1,
        ulp_mode: adc_ulp_mode_t_ADC_ULP_MODE_DISABLE,
        ..Default::default()
    };
    // SAFETY: ADC1_HANDLE is only written here, once at boot.
    let ret = unsafe { adc_oneshot_new_unit(&init_cfg, &raw mut ADC1_HANDLE) };
    if ret != ESP_OK as i32 {
        warn!("hw_init: adc_oneshot_new_unit rc={}", ret);
        return Err(Error::Init("ADC1 unit"));
    }

    let chan_cfg = adc_oneshot_chan_cfg_t {
        atten: adc_atten_t_ADC_ATTEN_DB_12,
        bitwidth: adc_bitwidth_t_ADC_BITWIDTH_12,
    };

    for channel in [pins::JOY_HORIZ_ADC_CH, pins::JOY_VERT_ADC_CH, pins::SEED_ADC_CH] {
        let ret = unsafe { adc_oneshot_config_channel(adc1_handle(), channel, &chan_cfg) };
        if ret != ESP_OK as i32 {
            warn!("hw_init: ADC1 channel {} rc={}", channel, ret);
            return Err(Error::Init("ADC1 channel"));
        }
    }

    info!(
        "hw_init: ADC1 configured (CH{}=X, CH{}=Y, CH{}=seed)",
        pins::JOY_HORIZ_ADC_CH,
        pins::JOY_VERT_ADC_CH,
        pins::SEED_ADC_CH
    );
    Ok(())
}

/// Read one ADC1 channel (0 – 4095).
#[cfg(target_os = "espidf")]
pub fn adc1_read(channel: u32) -> Result<u16, InputError> {
    let mut raw: i32 = 0;
    // SAFETY: adc1_handle() contract: single-threaded main-loop access only.
    let ret = unsafe { adc_oneshot_read(adc1_handle(), channel, &mut raw) };
    if ret != ESP_OK as i32 {
        return Err(InputError::AdcReadFailed);
    }
    Ok(raw.clamp(0, i32::from(ADC_MAX)) as u16)
}

/// Host stub: the stick rests at mid-scale.
#[cfg(not(target_os = "espidf"))]
pub fn adc1_read(_channel: u32) -> Result<u16, InputError> {
    Ok(ADC_MAX / 2)
}

// ── Button GPIO ───────────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_button() -> Result<(), Error> {
    let btn_cfg = gpio_config_t {
        pin_bit_mask: 1u64 << pins::JOY_SEL_GPIO,
        mode: gpio_mode_t_GPIO_MODE_INPUT,
        pull_up_en: gpio_pullup_t_GPIO_PULLUP_ENABLE,
        pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
        intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
    };
    let ret = unsafe { gpio_config(&btn_cfg) };
    if ret != ESP_OK as i32 {
        warn!("hw_init: gpio_config rc={}", ret);
        return Err(Error::Init("button GPIO"));
    }

    info!("hw_init: button GPIO{} configured (pull-up)", pins::JOY_SEL_GPIO);
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn gpio_read(pin: i32) -> bool {
    // SAFETY: gpio_get_level is a read-only register access on an
    // already-configured input pin; safe to call from main context.
    (unsafe { gpio_get_level(pin) }) != 0
}

/// Host stub: pulled up, i.e. released.
#[cfg(not(target_os = "espidf"))]
pub fn gpio_read(_pin: i32) -> bool {
    true
}

// ── Entropy ───────────────────────────────────────────────────

/// Fold several readings of an unconnected ADC pin into a 64-bit seed.
///
/// Only the noisy low bits carry entropy, so each reading contributes
/// its bottom nibble. A failed read contributes nothing.
pub fn entropy_seed(channel: u32, samples: u32) -> u64 {
    let mut seed: u64 = 0x9E37_79B9_7F4A_7C15;
    for _ in 0..samples {
        if let Ok(raw) = adc1_read(channel) {
            seed = seed.rotate_left(4) ^ u64::from(raw & 0x0F);
            seed = seed.wrapping_mul(0x0100_0000_01B3);
        }
    }
    seed
}
