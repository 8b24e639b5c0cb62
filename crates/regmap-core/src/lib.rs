//! Typed bit-field register-map model for memory-mapped instrumentation
//! devices.
//!
//! Hardware device drivers in instrumentation stacks are mostly tables:
//! a clock chip or a MAC status block is hundreds of named bit fields —
//! byte address, bit window, access mode, enumerated value meanings —
//! over a flat 32-bit register space. This crate is the model those
//! tables plug into: define each field once, then read and write through
//! a uniform get/set surface that handles bit masking, enum translation,
//! and verify-after-write.
//!
//! # Layers
//!
//! ```text
//! regmap-devices        per-chip catalogues (Si5345, GigE MAC, ...)
//!   regmap-core         field model, device builder, bulk loader   (this crate)
//!     RegisterSpace     transport seam — MemSpace for CI, hardware
//!                       bridges supplied by the host environment
//! ```
//!
//! # Quick start
//!
//! ```
//! use regmap_core::{AccessMode, DeviceBuilder, FieldDef, MemSpace, Value};
//!
//! # fn main() -> regmap_core::Result<()> {
//! let mut builder = DeviceBuilder::new("demo", 0x100);
//! builder.field(
//!     FieldDef::new("CLK_SEL", 0x0C, 0, 2, AccessMode::ReadWrite)
//!         .labels(&[(0, "IN0"), (1, "IN1"), (2, "IN2"), (3, "IN3")]),
//! )?;
//!
//! let mut dev = builder.attach(MemSpace::new(0x100));
//! dev.write("CLK_SEL", "IN2")?;
//! assert_eq!(dev.read("CLK_SEL")?, Value::Label("IN2".into()));
//! # Ok(())
//! # }
//! ```
//!
//! Failure semantics: every error is local and synchronous — unknown
//! name, wrong access mode, unmapped label, verify mismatch, or a
//! transport fault. Nothing is retried or recovered at this layer.

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod device;
mod error;
mod field;
pub mod loader;
mod space;

pub use device::{CommandDef, Device, DeviceBuilder};
pub use error::{RegMapError, Result};
pub use field::{AccessMode, EnumMap, FieldDef, Value, ValueBase};
pub use space::{MemSpace, RegisterSpace};

/// Commonly used types.
pub mod prelude {
    pub use crate::{
        AccessMode, CommandDef, Device, DeviceBuilder, FieldDef, MemSpace, RegMapError,
        RegisterSpace, Result, Value, ValueBase,
    };
}
