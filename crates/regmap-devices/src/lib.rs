//! Register-map catalogues for instrumentation devices.
//!
//! Each catalogue transcribes a chip's register tables — addresses, bit
//! windows, access modes, enumerated value meanings — into a populated
//! [`regmap_core::DeviceBuilder`]. The caller attaches whatever
//! [`regmap_core::RegisterSpace`] fits: an in-memory space for CI and
//! dry-runs, or a hardware bridge supplied by the host environment.
//!
//! ```no_run
//! use regmap_core::MemSpace;
//!
//! # fn main() -> regmap_core::Result<()> {
//! let mut clock = regmap_devices::si5345()?.attach(MemSpace::new(regmap_devices::SI5345_SIZE));
//! clock.write("IN_SEL", "IN2")?;
//! clock.execute("SOFT_RST_ALL")?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::too_many_lines)] // catalogues are one long table each

mod gige_mac;
mod si5345;

pub use gige_mac::{gige_mac, GIGE_MAC_SIZE};
pub use si5345::{si5345, SI5345_SIZE};

use regmap_core::{DeviceBuilder, Result};

/// Look up a built-in catalogue by name
///
/// Returns `None` if no catalogue matches; the inner `Result` carries
/// any definition failure (which would be a catalogue bug).
pub fn catalogue(name: &str) -> Option<Result<DeviceBuilder>> {
    match name {
        "si5345" => Some(si5345()),
        "gige-mac" => Some(gige_mac()),
        _ => None,
    }
}

/// Names of the built-in catalogues, with register-space sizes in bytes
#[must_use]
pub fn catalogue_names() -> &'static [(&'static str, u32)] {
    &[("si5345", SI5345_SIZE), ("gige-mac", GIGE_MAC_SIZE)]
}
