//! GigE MAC status and monitoring register catalogue
//!
//! Unlike the clock catalogues, this block addresses registers by byte
//! offset directly; nothing is shifted. The 48-bit MAC address straddles
//! two registers and is exposed as a 32-bit low word and a 16-bit high
//! word, since a field never spans registers.

use regmap_core::AccessMode::{ReadOnly, ReadWrite, WriteOnly};
use regmap_core::{DeviceBuilder, FieldDef, Result, ValueBase};

/// Register space size in bytes
pub const GIGE_MAC_SIZE: u32 = 0x1000;

/// Build the GigE MAC catalogue
///
/// # Errors
///
/// Fails only on a table bug (duplicate name or malformed bit window).
pub fn gige_mac() -> Result<DeviceBuilder> {
    let mut b = DeviceBuilder::new("GigEMac", GIGE_MAC_SIZE);

    for i in 0..9u32 {
        b.field(
            FieldDef::new(&format!("StatusCounters[{i}]"), 4 * i, 0, 32, ReadOnly)
                .describe("Free-running status counter.")
                .base(ValueBase::Hex),
        )?;
    }
    b.field(
        FieldDef::new("StatusVector", 0x100, 0, 9, ReadOnly)
            .describe("Live status bits behind the counters.")
            .base(ValueBase::Hex),
    )?;
    b.field(
        FieldDef::new("PhyStatus", 0x108, 0, 8, ReadOnly)
            .describe("PHY status vector.")
            .base(ValueBase::Hex),
    )?;
    b.field(
        FieldDef::new("MacAddressLo", 0x200, 0, 32, ReadOnly)
            .describe("MAC address bytes 3:0 (big-endian on the wire).")
            .base(ValueBase::Hex),
    )?;
    b.field(
        FieldDef::new("MacAddressHi", 0x204, 0, 16, ReadOnly)
            .describe("MAC address bytes 5:4 (big-endian on the wire).")
            .base(ValueBase::Hex),
    )?;
    b.field(
        FieldDef::new("PauseTime", 0x21C, 0, 16, ReadOnly)
            .describe("Pause time sent in flow-control frames.")
            .base(ValueBase::Hex),
    )?;
    b.field(
        FieldDef::new("FilterEnable", 0x228, 0, 1, ReadOnly).base(ValueBase::Bool),
    )?;
    b.field(
        FieldDef::new("PauseEnable", 0x22C, 0, 1, ReadOnly).base(ValueBase::Bool),
    )?;
    b.field(
        FieldDef::new("RollOverEn", 0xF00, 0, 9, ReadWrite)
            .describe("Per-counter roll-over enable mask.")
            .base(ValueBase::Hex),
    )?;

    // Write-one strobes; the hardware clears them itself, so there is
    // nothing to read back
    b.field(
        FieldDef::new("CounterReset", 0xFF4, 0, 1, WriteOnly)
            .describe("Write 1 to reset the status counters.")
            .no_verify(),
    )?;
    b.field(
        FieldDef::new("SoftReset", 0xFF8, 0, 1, WriteOnly)
            .describe("Write 1 to reset the MAC logic, keeping configuration.")
            .no_verify(),
    )?;
    b.field(
        FieldDef::new("HardReset", 0xFFC, 0, 1, WriteOnly)
            .describe("Write 1 to reset the whole block to power-up state.")
            .no_verify(),
    )?;

    Ok(b)
}
