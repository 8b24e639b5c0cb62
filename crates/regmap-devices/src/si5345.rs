//! Si5345 clock multiplier / jitter attenuator register catalogue
//!
//! Transcribed from the Si5345 reference manual register tables
//! (section 15.1, pages 0–B). Addresses are the manual's 16-bit register
//! indices shifted left by 2 into the framework's byte addressing.
//!
//! Two transcription fixes relative to older copies of this table:
//! `IN_PRIORITY` enum keys are the distinct priorities 0–4, and
//! `R3_REG` sits at `0x0253` (the R-divider banks step by three
//! registers; `0x0256` belongs to `R4_REG`).

use regmap_core::AccessMode::{self, ReadOnly, ReadWrite, WriteOnly};
use regmap_core::{CommandDef, DeviceBuilder, FieldDef, Result, ValueBase};

/// Register space size in bytes (0x1000 registers)
pub const SI5345_SIZE: u32 = 0x1000 << 2;

/// Register index to byte address
const fn reg(index: u32) -> u32 {
    index << 2
}

fn field(name: &str, index: u32, bit_offset: u8, bit_width: u8, mode: AccessMode) -> FieldDef {
    FieldDef::new(name, reg(index), bit_offset, bit_width, mode)
}

fn bit(name: &str, index: u32, bit_offset: u8, mode: AccessMode) -> FieldDef {
    field(name, index, bit_offset, 1, mode).base(ValueBase::Bool)
}

fn byte(name: &str, index: u32, mode: AccessMode) -> FieldDef {
    field(name, index, 0, 8, mode)
}

fn toggle(name: &str, index: u32, bit_offset: u8) -> CommandDef {
    CommandDef::new(name, reg(index), bit_offset, 1)
}

/// Build the Si5345 catalogue
///
/// # Errors
///
/// Fails only on a table bug (duplicate name or malformed bit window);
/// the catalogue tests exercise a full build.
pub fn si5345() -> Result<DeviceBuilder> {
    let mut b = DeviceBuilder::new("Si5345", SI5345_SIZE);

    // ── Page 0: identification ───────────────────────────────────────────────

    b.field(byte("PN_BASE_LO", 0x0002, ReadOnly)
        .describe("Four-digit base part number, one nibble per digit."))?;
    b.field(byte("PN_BASE_HI", 0x0003, ReadOnly)
        .describe("Four-digit base part number, one nibble per digit."))?;
    b.field(byte("GRADE", 0x0004, ReadOnly)
        .describe("One ASCII character indicating the device speed/synthesis mode.")
        .labels(&[(0x0, "A"), (0x1, "B"), (0x2, "C"), (0x3, "D")]))?;
    b.field(byte("DEVICE_REV", 0x0005, ReadOnly)
        .describe("One ASCII character indicating the device revision level.")
        .labels(&[(0x0, "A"), (0x1, "B"), (0x2, "C"), (0x3, "D")]))?;
    for i in 0..3u32 {
        b.field(byte(&format!("TOOL_VERSION[{i}]"), 0x0006 + i, ReadWrite)
            .describe("Version of the software tool that created the power-up register values."))?;
    }
    b.field(byte("TEMP_GRADE", 0x0009, ReadWrite)
        .describe("Device temperature grading, 0 = Industrial (-40 C to 85 C)."))?;
    b.field(byte("PKG_ID", 0x000A, ReadWrite).describe("Package ID, 0 = 9x9 mm 64 QFN."))?;
    b.field(field("I2C_ADDR", 0x000B, 0, 7, ReadOnly)
        .describe("Upper five bits of the 7-bit I2C address."))?;

    // ── Page 0: live status ──────────────────────────────────────────────────

    b.field(bit("SYSINCAL", 0x000C, 0, ReadOnly).describe("1 if the device is calibrating."))?;
    b.field(bit("LOSXAXB", 0x000C, 1, ReadOnly)
        .describe("1 if there is no signal at the XAXB pins."))?;
    b.field(bit("XAXB_ERR", 0x000C, 3, ReadOnly)
        .describe("1 if there is a problem locking to the XAXB input signal."))?;
    b.field(bit("SMBUS_TIMEOUT", 0x000C, 5, ReadOnly)
        .describe("1 if there is an SMBus timeout error."))?;
    b.field(field("LOS", 0x000D, 0, 4, ReadOnly)
        .describe("1 if the clock input is currently LOS."))?;
    b.field(field("OOF", 0x000D, 4, 4, ReadOnly)
        .describe("1 if the clock input is currently OOF."))?;
    b.field(bit("LOL", 0x000E, 1, ReadOnly).describe("1 if the DSPLL is out of lock."))?;
    b.field(bit("HOLD", 0x000E, 5, ReadOnly)
        .describe("1 if the DSPLL is in holdover (or free run)."))?;
    b.field(bit("CAL_PLL", 0x000F, 5, ReadOnly)
        .describe("1 if the DSPLL internal calibration is busy."))?;

    // ── Page 0: sticky flags (write 0 to clear) ──────────────────────────────

    b.field(bit("SYSINCAL_FLG", 0x0011, 0, ReadWrite).describe("Sticky version of SYSINCAL."))?;
    b.field(bit("LOSXAXB_FLG", 0x0011, 1, ReadWrite).describe("Sticky version of LOSXAXB."))?;
    b.field(bit("XAXB_ERR_FLG", 0x0011, 3, ReadWrite).describe("Sticky version of XAXB_ERR."))?;
    b.field(bit("SMBUS_TIMEOUT_FLG", 0x0011, 5, ReadWrite)
        .describe("Sticky version of SMBUS_TIMEOUT."))?;
    b.field(field("LOS_FLG", 0x0012, 0, 4, ReadWrite)
        .describe("1 if the clock input has been LOS."))?;
    b.field(field("OOF_FLG", 0x0012, 4, 4, ReadWrite)
        .describe("1 if the clock input has been OOF."))?;
    b.field(bit("LOL_FLG", 0x0013, 1, ReadWrite).describe("1 if the DSPLL was unlocked."))?;
    b.field(bit("HOLD_FLG", 0x0013, 5, ReadWrite)
        .describe("1 if the DSPLL was in holdover or free run."))?;
    b.field(bit("CAL_PLL_FLG", 0x0014, 5, ReadWrite)
        .describe("1 if the internal calibration was busy."))?;
    b.field(bit("LOL_ON_HOLD", 0x0016, 1, ReadWrite).hidden())?;

    // ── Page 0: interrupt masks ──────────────────────────────────────────────

    b.field(bit("SYSINCAL_INTR_MSK", 0x0017, 0, ReadWrite)
        .describe("1 to mask SYSINCAL_FLG from causing an interrupt."))?;
    b.field(bit("LOSXAXB_INTR_MSK", 0x0017, 1, ReadWrite)
        .describe("1 to mask LOSXAXB_FLG from causing an interrupt."))?;
    b.field(bit("SMBUS_TIMEOUT_FLG_MSK", 0x0017, 5, ReadWrite)
        .describe("1 to mask SMBUS_TIMEOUT_FLG from the interrupt."))?;
    b.field(field("STATUS_FLG_RESERVED", 0x0017, 6, 2, WriteOnly)
        .describe("Factory set to 1 to mask reserved bits from causing an interrupt.")
        .fixed(0x3)
        .hidden()
        .no_verify())?;
    b.field(field("LOS_INTR_MSK", 0x0018, 0, 4, ReadWrite)
        .describe("1 to mask the clock input LOS flag."))?;
    b.field(field("OOF_INTR_MSK", 0x0018, 4, 4, ReadWrite)
        .describe("1 to mask the clock input OOF flag."))?;
    b.field(bit("LOL_INTR_MSK", 0x0019, 1, ReadWrite)
        .describe("1 to mask the clock input LOL flag."))?;
    b.field(bit("HOLD_INTR_MSK", 0x0019, 5, ReadWrite).describe("1 to mask the holdover flag."))?;
    b.field(bit("CAL_INTR_MSK", 0x001A, 5, ReadWrite)
        .describe("1 to mask the DSPLL internal calibration busy flag."))?;

    // ── Page 0: resets and frequency stepping ────────────────────────────────

    b.command(toggle("SOFT_RST_ALL", 0x001C, 0)
        .describe("Initialize and calibrate the entire device."))?;
    b.command(toggle("SOFT_RST", 0x001C, 2).describe("Initialize the outer loop."))?;
    b.command(toggle("FINC", 0x001D, 0)
        .describe("Increment the selected MultiSynth output frequency by Nx_FSTEPW."))?;
    b.command(toggle("FDEC", 0x001D, 1)
        .describe("Decrement the selected MultiSynth output frequency by Nx_FSTEPW."))?;
    b.field(bit("PDN", 0x001E, 0, ReadWrite)
        .describe("1 to put the device into low power mode."))?;
    b.field(bit("HARD_RST", 0x001E, 1, ReadWrite)
        .describe("1 causes a hard reset, the same as power up except serial port access."))?;
    b.command(toggle("SYNC", 0x001E, 2)
        .describe("Reset all output R dividers to the same state."))?;
    b.field(bit("SPI_3WIRE", 0x002B, 3, ReadWrite)
        .describe("0 for 4-wire SPI, 1 for 3-wire SPI."))?;
    b.field(bit("AUTO_NDIV_UPDATE", 0x002B, 5, ReadWrite).hidden())?;

    // ── Page 0: LOS detection ────────────────────────────────────────────────

    b.field(field("LOS_EN", 0x002C, 0, 4, ReadWrite)
        .describe("1 to enable LOS for a clock input."))?;
    b.field(bit("LOSXAXB_DIS", 0x002C, 4, ReadWrite)
        .describe("0: enable LOS detection (default)."))?;
    for i in 0..4u32 {
        b.field(field(&format!("LOS_VAL_TIME[{i}]"), 0x002D, 2 * i as u8, 2, ReadWrite)
            .describe("LOS validation time for the clock input.")
            .labels(&[(0x0, "2ms"), (0x1, "100ms"), (0x2, "200ms"), (0x3, "1000ms")]))?;
    }
    for i in 0..4u32 {
        b.field(byte(&format!("LOS_TRG_THR_LO[{i}]"), 0x002E + 2 * i, ReadWrite)
            .describe("Trigger threshold, 16-bit value."))?;
        b.field(byte(&format!("LOS_TRG_THR_HI[{i}]"), 0x002F + 2 * i, ReadWrite)
            .describe("Trigger threshold, 16-bit value."))?;
    }
    for i in 0..4u32 {
        b.field(byte(&format!("LOS_CLR_THR_LO[{i}]"), 0x0036 + 2 * i, ReadWrite)
            .describe("Clear threshold, 16-bit value."))?;
        b.field(byte(&format!("LOS_CLR_THR_HI[{i}]"), 0x0037 + 2 * i, ReadWrite)
            .describe("Clear threshold, 16-bit value."))?;
    }

    // ── Page 0: OOF detection ────────────────────────────────────────────────

    b.field(field("OOF_EN", 0x003F, 0, 4, ReadWrite).describe("1 to enable, 0 to disable."))?;
    b.field(field("FAST_OOF_EN", 0x003F, 4, 4, ReadWrite)
        .describe("1 to enable, 0 to disable."))?;
    b.field(field("OOF_REF_SEL", 0x0040, 0, 3, ReadOnly)
        .describe("OOF reference select.")
        .labels(&[(0x0, "CLKIN0"), (0x1, "CLKIN1"), (0x2, "CLKIN2"), (0x3, "CLKIN3"), (0x4, "XAXB")]))?;
    for i in 0..4u32 {
        b.field(field(&format!("OOF_DIV_SEL[{i}]"), 0x0041 + i, 0, 5, ReadWrite).hidden())?;
    }
    b.field(field("OOFXO_DIV_SEL", 0x0045, 0, 5, ReadWrite).hidden())?;
    for i in 0..4u32 {
        b.field(byte(&format!("OOF_SET_THR[{i}]"), 0x0046 + i, ReadWrite)
            .describe("OOF set threshold. Up to 500 ppm in steps of 1/16 ppm."))?;
    }
    for i in 0..4u32 {
        b.field(byte(&format!("OOF_CLR_THR[{i}]"), 0x004A + i, ReadWrite)
            .describe("OOF clear threshold. Up to 500 ppm in steps of 1/16 ppm."))?;
    }
    for i in 0..4u32 {
        let (index, bit_offset) = (0x004E + i / 2, 4 * (i % 2) as u8);
        b.field(field(&format!("OOF_DETWIN_SEL[{i}]"), index, bit_offset, 3, ReadWrite).hidden())?;
    }
    b.field(field("OOF_ON_LOS", 0x0050, 0, 4, ReadWrite).hidden())?;
    for i in 0..4u32 {
        b.field(field(&format!("FAST_OOF_SET_THR[{i}]"), 0x0051 + i, 0, 4, ReadWrite)
            .describe("(1 + value) x 1000 ppm."))?;
    }
    for i in 0..4u32 {
        b.field(field(&format!("FAST_OOF_CLR_THR[{i}]"), 0x0055 + i, 0, 4, ReadWrite)
            .describe("(1 + value) x 1000 ppm."))?;
    }
    for i in 0..4u32 {
        b.field(field(&format!("FAST_OOF_DETWIN_SEL[{i}]"), 0x0059, 2 * i as u8, 2, ReadWrite)
            .hidden())?;
    }
    for bank in 0..4u32 {
        for i in 0..4u32 {
            b.field(byte(&format!("OOF{bank}_RATIO_REF[{i}]"), 0x005A + 4 * bank + i, ReadWrite)
                .hidden())?;
        }
    }

    // ── Page 0: LOL detection ────────────────────────────────────────────────

    b.field(bit("LOL_FST_EN", 0x0092, 1, ReadWrite)
        .describe("Enables fast detection of LOL for large input frequency errors."))?;
    b.field(field("LOL_FST_DETWIN_SEL", 0x0093, 4, 4, ReadWrite).hidden())?;
    b.field(field("LOL_FST_VALWIN_SEL", 0x0095, 2, 2, ReadWrite).hidden())?;
    b.field(field("LOL_FST_SET_THR_SEL", 0x0096, 4, 4, ReadWrite))?;
    b.field(field("LOL_FST_CLR_THR_SEL", 0x0098, 4, 4, ReadWrite))?;
    b.field(bit("LOL_SLOW_EN_PLL", 0x009A, 1, ReadWrite)
        .describe("1 to enable LOL, 0 to disable LOL."))?;
    b.field(field("LOL_SLW_DETWIN_SEL", 0x009B, 4, 4, ReadWrite))?;
    b.field(field("LOL_SLW_VALWIN_SEL", 0x009D, 2, 2, ReadWrite).hidden())?;
    let ppm_thresholds: &[(u32, &str)] = &[
        (0x0, "0.1 ppm"),
        (0x1, "0.3 ppm"),
        (0x2, "1 ppm"),
        (0x3, "3 ppm"),
        (0x4, "10 ppm"),
        (0x5, "30 ppm"),
        (0x6, "100 ppm"),
        (0x7, "300 ppm"),
        (0x8, "1000 ppm"),
        (0x9, "3000 ppm"),
        (0xA, "10000 ppm"),
    ];
    b.field(field("LOL_SLW_SET_THR", 0x009E, 4, 4, ReadWrite)
        .describe("Configures the loss of lock set threshold.")
        .labels(ppm_thresholds))?;
    b.field(field("LOL_SLW_CLR_THR", 0x00A0, 4, 4, ReadWrite)
        .describe("Configures the loss of lock clear threshold.")
        .labels(ppm_thresholds))?;
    b.field(bit("LOL_TIMER_EN", 0x00A2, 1, ReadWrite).describe("0 to disable, 1 to enable."))?;
    for i in 0..4u32 {
        b.field(byte(&format!("LOL_CLR_DELAY_DIV256[{i}]"), 0x00A9 + i, ReadWrite).hidden())?;
    }

    // ── Page 0: NVM ──────────────────────────────────────────────────────────

    b.field(byte("ACTIVE_NVM_BANK", 0x00E2, ReadOnly)
        .describe("Number of user bank writes carried out so far.")
        .labels(&[(0x00, "zero"), (0x03, "one"), (0x0F, "two"), (0x3F, "three")]))?;
    b.field(byte("NVM_WRITE", 0x00E3, ReadWrite)
        .describe("Write 0xC7 to initiate an NVM bank burn."))?;
    b.command(toggle("NVM_READ_BANK", 0x00E4, 0)
        .describe("Read the NVM down into volatile memory."))?;
    b.field(bit("FASTLOCK_EXTEND_EN", 0x00E5, 5, ReadWrite)
        .describe("1 to extend the Fastlock bandwidth period past LOL clear (default)."))?;
    for i in 0..4u32 {
        b.field(byte(&format!("FASTLOCK_EXTEND[{i}]"), 0x00EA + i, ReadWrite).hidden())?;
    }

    // ── Page 0: interrupt status ─────────────────────────────────────────────

    b.field(bit("REG_0xF7_INTR", 0x00F6, 0, ReadWrite).hidden())?;
    b.field(bit("REG_0xF8_INTR", 0x00F6, 1, ReadWrite).hidden())?;
    b.field(bit("REG_0xF9_INTR", 0x00F6, 2, ReadOnly).hidden())?;
    b.field(bit("SYSINCAL_INTR", 0x00F7, 0, ReadOnly).hidden())?;
    b.field(bit("LOSXAXB_INTR", 0x00F7, 1, ReadOnly).hidden())?;
    b.field(bit("LOSREF_INTR", 0x00F7, 2, ReadOnly).hidden())?;
    b.field(bit("LOSVCO_INTR", 0x00F7, 4, ReadOnly).hidden())?;
    b.field(bit("SMBUS_TIME_OUT_INTR", 0x00F7, 5, ReadOnly).hidden())?;
    b.field(field("LOS_INTR", 0x00F8, 0, 4, ReadOnly).hidden())?;
    b.field(field("OOF_INTR", 0x00F8, 4, 4, ReadOnly).hidden())?;
    b.field(bit("LOL_INTR", 0x00F9, 1, ReadOnly).hidden())?;
    b.field(bit("HOLD_INTR", 0x00F9, 5, ReadOnly).hidden())?;
    b.field(byte("DEVICE_READY", 0x00FE, ReadOnly)
        .describe("Reads 0x0F when registers can safely be accessed. Repeated on every page."))?;

    // ── Page 1: output drivers ───────────────────────────────────────────────

    b.field(bit("OUTALL_DISABLE_LOW", 0x0102, 0, ReadWrite)
        .describe("1 passes through the output enables, 0 disables all output drivers."))?;
    for i in 0..10u32 {
        // OUT9 skips a register in the datasheet layout
        let base = if i == 9 { 0x0108 + 5 * i + 5 } else { 0x0108 + 5 * i };
        b.field(bit(&format!("OUT_PDN[{i}]"), base, 0, ReadWrite)
            .describe("0 powers up the output driver regulator, 1 powers it down."))?;
        b.field(bit(&format!("OUT_OE[{i}]"), base, 1, ReadWrite)
            .describe("0 to disable the output, 1 to enable the output."))?;
        b.field(bit(&format!("OUT_RDIV_FORCE2[{i}]"), base, 2, ReadWrite)
            .describe("0: R divider value set by R_REG, 1: R divider forced to divide by 2."))?;
        b.field(field(&format!("OUT_FORMAT[{i}]"), base + 1, 0, 3, ReadWrite)
            .labels(&[
                (0x0, "Undefined"),
                (0x1, "swing mode (normal swing) differential"),
                (0x2, "swing mode (high swing) differential"),
                (0x4, "LVCMOS single ended"),
                (0x5, "LVCMOS (+pin only)"),
                (0x6, "LVCMOS (-pin only)"),
            ]))?;
        b.field(bit(&format!("OUT_SYNC_EN[{i}]"), base + 1, 3, ReadWrite)
            .describe("Synchronize power down and output enable to the output clock."))?;
        b.field(field(&format!("OUT_DIS_STATE[{i}]"), base + 1, 4, 2, ReadWrite)
            .describe("State of the output driver when disabled.")
            .labels(&[(0x0, "Disable low"), (0x1, "Disable high")]))?;
        b.field(field(&format!("OUT_CMOS_DRV[{i}]"), base + 1, 6, 2, ReadWrite)
            .describe("LVCMOS output impedance.")
            .labels(&[(0x0, "CMOS1"), (0x1, "CMOS2"), (0x2, "CMOS3")]))?;
        b.field(field(&format!("OUT_CM[{i}]"), base + 2, 0, 4, ReadWrite)
            .describe("Common-mode voltage; applies when OUT_FORMAT is 1 or 2."))?;
        b.field(field(&format!("OUT_AMPL[{i}]"), base + 2, 4, 3, ReadWrite)
            .describe("Differential amplitude; applies when OUT_FORMAT is 1, 2, or 3."))?;
        b.field(field(&format!("OUT_MUX_SEL[{i}]"), base + 3, 0, 3, ReadWrite)
            .describe("Selects which Multisynth drives this output.")
            .labels(&[(0x0, "N0"), (0x1, "N1"), (0x2, "N2"), (0x3, "N3"), (0x4, "N4")]))?;
        b.field(bit(&format!("OUT_VDD_SEL_EN[{i}]"), base + 3, 3, ReadWrite)
            .describe("1 = enable OUT_VDD_SEL."))?;
        b.field(field(&format!("OUT_VDD_SEL[{i}]"), base + 3, 4, 2, ReadWrite)
            .describe("Must be set to the output supply voltage.")
            .labels(&[(0x0, "3.3 V"), (0x1, "1.8 V"), (0x2, "2.5 V")]))?;
        b.field(field(&format!("OUT_INV[{i}]"), base + 3, 6, 2, ReadWrite)
            .labels(&[
                (0x0, "CLK and CLK_N not inverted"),
                (0x1, "CLK inverted"),
                (0x2, "CLK and CLK_N inverted"),
                (0x3, "CLK_N inverted"),
            ]))?;
    }
    b.field(byte("OUTX_ALWAYS_ON[0]", 0x013F, ReadWrite).hidden())?;
    b.field(field("OUTX_ALWAYS_ON[1]", 0x0140, 0, 4, ReadWrite).hidden())?;
    b.field(bit("OUT_DIS_MSK", 0x0141, 1, ReadWrite).hidden())?;
    b.field(bit("OUT_DIS_LOL_MSK", 0x0141, 5, ReadWrite).hidden())?;
    b.field(bit("OUT_DIS_LOSXAXB_MSK", 0x0141, 6, ReadWrite)
        .describe("0: all outputs disabled on LOSXAXB, 1: outputs remain enabled."))?;
    b.field(bit("OUT_DIS_MSK_LOS_PFD", 0x0141, 7, ReadWrite).hidden())?;
    b.field(bit("OUT_DIS_MSK_LOL", 0x0142, 1, ReadWrite)
        .describe("0: LOL disables all connected outputs, 1: LOL disables none."))?;
    b.field(bit("OUT_DIS_MSK_HOLD", 0x0142, 5, ReadWrite).hidden())?;
    b.field(bit("OUT_PDN_ALL", 0x0145, 0, ReadWrite)
        .describe("0: no effect, 1: all drivers powered down."))?;

    // ── Page 2: input P dividers and MXAXB ───────────────────────────────────

    b.field(field("PXAXB", 0x0206, 0, 2, ReadOnly)
        .describe("Prescale divider for the input clock on XAXB.")
        .labels(&[
            (0x0, "pre-scale value 1"),
            (0x1, "pre-scale value 2"),
            (0x2, "pre-scale value 4"),
            (0x3, "pre-scale value 8"),
        ]))?;
    let p_dividers: [(u32, u32); 4] = [(0x0208, 0x020E), (0x0212, 0x0218), (0x021C, 0x0222), (0x0226, 0x022C)];
    for (p, (num, den)) in p_dividers.iter().enumerate() {
        for i in 0..6u32 {
            b.field(byte(&format!("P{p}_NUM[{i}]"), num + i, ReadWrite)
                .describe("Input divider numerator."))?;
        }
        for i in 0..4u32 {
            b.field(byte(&format!("P{p}_DEN[{i}]"), den + i, ReadWrite)
                .describe("Input divider denominator."))?;
        }
    }
    b.field(field("Px_UPDATE", 0x0230, 0, 4, ReadWrite)
        .describe("0: no update of the P-divider value, 1: update the P-divider value."))?;
    for i in 0..4u32 {
        b.field(field(&format!("P_FRACN_MODE[{i}]"), 0x0231 + i, 0, 4, ReadWrite)
            .describe("Input divider fractional mode. Must be 0xB for proper operation."))?;
        b.field(bit(&format!("P_FRAC_EN[{i}]"), 0x0231 + i, 4, ReadWrite)
            .describe("0: integer-only division, 1: fractional (or integer) division."))?;
    }
    for i in 0..6u32 {
        b.field(byte(&format!("MXAXB_NUM[{i}]"), 0x0235 + i, ReadWrite)
            .describe("MXAXB divider numerator."))?;
    }
    for i in 0..4u32 {
        b.field(byte(&format!("MXAXB_DEN[{i}]"), 0x023B + i, ReadWrite)
            .describe("MXAXB divider denominator."))?;
    }
    b.command(toggle("MXAXB_UPDATE", 0x023F, 0)
        .describe("Update the MXAXB_NUM and MXAXB_DEN values. A SOFT_RST also applies them."))?;

    // ── Page 2: output R dividers ────────────────────────────────────────────

    let r_bases: [u32; 10] = [
        0x024A, 0x024D, 0x0250, 0x0253, 0x0256, 0x0259, 0x025C, 0x025F, 0x0262, 0x0268,
    ];
    for (r, base) in r_bases.iter().enumerate() {
        for i in 0..3u32 {
            b.field(byte(&format!("R{r}_REG[{i}]"), base + i, ReadWrite)
                .describe("R divider: divide value = (REG + 1) x 2."))?;
        }
    }
    for i in 0..8u32 {
        b.field(byte(&format!("DESIGN_ID[{i}]"), 0x026B + i, ReadWrite).hidden())?;
    }
    for i in 0..5u32 {
        b.field(byte(&format!("OPN_ID[{i}]"), 0x0278 + i, ReadWrite).hidden())?;
    }
    b.field(byte("OPN_REVISION", 0x027D, ReadWrite))?;

    // ── Page 3: output N dividers ────────────────────────────────────────────

    let n_dividers: [(u32, u32, u32); 5] = [
        (0x0302, 0x0308, 0x030C),
        (0x030D, 0x0313, 0x0317),
        (0x0318, 0x031E, 0x0322),
        (0x0323, 0x0329, 0x032D),
        (0x032E, 0x0334, 0x0338),
    ];
    for (n, (num, den, update)) in n_dividers.iter().enumerate() {
        for i in 0..6u32 {
            b.field(byte(&format!("N{n}_NUM[{i}]"), num + i, ReadWrite)
                .describe("Output Multisynth numerator."))?;
        }
        for i in 0..4u32 {
            b.field(byte(&format!("N{n}_DEN[{i}]"), den + i, ReadWrite)
                .describe("Output Multisynth denominator."))?;
        }
        b.command(toggle(&format!("N{n}_UPDATE"), *update, 0)
            .describe("Update the N divider."))?;
    }
    b.command(toggle("N_UPDATE_ALL", 0x0338, 1).describe("Update all five N dividers."))?;
    b.field(field("N_FSTEP_MSK", 0x0339, 0, 5, ReadWrite)
        .describe("0: Nx divider responds to FINC/FDEC, 1: Nx divider masked."))?;
    for n in 0..5u32 {
        for i in 0..6u32 {
            b.field(byte(&format!("N{n}_FSTEPW[{i}]"), 0x033B + 6 * n + i, ReadWrite)
                .describe("Frequency step word for FINC/FDEC."))?;
        }
    }

    // ── Page 4: zero delay mode ──────────────────────────────────────────────

    b.field(bit("ZDM_EN", 0x0487, 0, ReadWrite)
        .describe("0 to disable ZD mode, 1 to enable ZD mode."))?;
    b.field(field("ZDM_IN_SEL", 0x0487, 1, 2, ReadWrite)
        .describe("Clock input select in ZD mode; the feedback clock comes into IN3.")
        .labels(&[(0x0, "IN0"), (0x1, "IN1"), (0x2, "IN2")]))?;
    b.field(bit("ZDM_AUTOSW_EN", 0x0487, 4, ReadWrite).hidden())?;

    // ── Page 5: DSPLL loop, input selection, holdover ────────────────────────

    b.field(field("IN_ACTV", 0x0507, 6, 2, ReadOnly)
        .describe("Currently selected DSPLL input clock.")
        .labels(&[(0x0, "IN0"), (0x1, "IN1"), (0x2, "IN2"), (0x3, "IN3")]))?;
    for i in 0..6u32 {
        b.field(field(&format!("BW_PLL[{i}]"), 0x0508 + i, 0, 6, ReadWrite)
            .describe("PLL loop bandwidth parameter."))?;
    }
    for i in 0..6u32 {
        b.field(field(&format!("FAST_LOCK_BW_PLL[{i}]"), 0x050E + i, 0, 6, ReadWrite)
            .describe("PLL fast lock loop bandwidth parameter."))?;
    }
    b.command(toggle("BW_UPDATE_PLL", 0x0514, 0)
        .describe("Update the BWx_PLL and FAST_BWx_PLL parameters."))?;
    for i in 0..7u32 {
        b.field(byte(&format!("M_NUM[{i}]"), 0x0515 + i, ReadWrite)
            .describe("M feedback divider numerator."))?;
    }
    for i in 0..4u32 {
        b.field(byte(&format!("M_DEN[{i}]"), 0x051C + i, ReadWrite)
            .describe("M feedback divider denominator."))?;
    }
    b.command(toggle("M_UPDATE", 0x0520, 0).describe("Update the M divider."))?;
    b.field(field("M_FRAC_MODE", 0x0521, 0, 4, WriteOnly)
        .describe("M feedback divider fractional mode. Must be 0xB for proper operation.")
        .fixed(0xB)
        .hidden()
        .no_verify())?;
    b.field(bit("M_FRAC_EN", 0x0521, 4, ReadWrite)
        .describe("0: integer-only division, 1: fractional division (required for DCO)."))?;
    b.field(field("M_FRAC_RESERVED", 0x0521, 5, 1, WriteOnly)
        .describe("Must be set to 1 for DSPLL B.")
        .fixed(0x1)
        .hidden()
        .no_verify())?;
    b.field(bit("IN_SEL_REGCTRL", 0x052A, 0, ReadWrite)
        .describe("0 for pin controlled clock selection, 1 for register controlled."))?;
    b.field(field("IN_SEL", 0x052A, 1, 2, ReadWrite)
        .describe("Select the DSPLL input clock.")
        .labels(&[(0x0, "IN0"), (0x1, "IN1"), (0x2, "IN2"), (0x3, "IN3")]))?;
    b.field(bit("FASTLOCK_AUTO_EN", 0x052B, 0, ReadWrite)
        .describe("1 to enable auto fast lock when the DSPLL is out of lock."))?;
    b.field(bit("FASTLOCK_MAN", 0x052B, 1, ReadWrite)
        .describe("0 for normal operation, 1 to force fast lock."))?;
    b.field(bit("HOLD_EN", 0x052C, 0, ReadWrite)
        .describe("0: holdover disabled, 1: holdover enabled (default)."))?;
    b.field(bit("HOLD_RAMP_BYP", 0x052C, 3, ReadWrite))?;
    b.field(bit("HOLDEXIT_BW_SEL1", 0x052C, 4, ReadWrite)
        .describe("Holdover exit bandwidth select."))?;
    b.field(field("RAMP_STEP_INTERVAL", 0x052C, 5, 3, ReadWrite).hidden())?;
    b.field(bit("HOLD_RAMPBYP_NOHIST", 0x052D, 1, ReadWrite).hidden())?;
    b.field(field("HOLD_HIST_LEN", 0x052E, 0, 5, ReadWrite).hidden())?;
    b.field(field("HOLD_HIST_DELAY", 0x052F, 0, 5, ReadWrite).hidden())?;
    b.field(field("HOLD_REF_COUNT_FRC_PLLB", 0x0531, 0, 5, ReadWrite).hidden())?;
    for i in 0..3u32 {
        b.field(byte(&format!("HOLD_15M_CYC_COUNT_PLLB[{i}]"), 0x0532 + i, ReadWrite).hidden())?;
    }
    b.field(bit("FORCE_HOLD", 0x0535, 0, ReadWrite)
        .describe("0 for normal operation, 1 to force holdover."))?;
    b.field(field("CLK_SWTCH_MODE", 0x0536, 0, 2, ReadWrite)
        .describe("Clock switching mode.")
        .labels(&[
            (0x0, "manual"),
            (0x1, "automatic_non-revertive"),
            (0x2, "automatic_revertive"),
        ]))?;
    b.field(bit("HSW_EN", 0x0536, 2, ReadWrite)
        .describe("0: glitchless switching, 1: hitless switching (phase buildout on)."))?;
    b.field(field("IN_LOS_MSK", 0x0537, 0, 4, ReadWrite)
        .describe("1 to mask the input's LOS alarm from the clock selection logic."))?;
    b.field(field("IN_OOF_MSK", 0x0537, 4, 4, ReadWrite)
        .describe("1 to mask the input's OOF alarm from the clock selection logic."))?;
    for i in 0..4u32 {
        let (index, bit_offset) = (0x0538 + i / 2, 4 * (i % 2) as u8);
        b.field(field(&format!("IN_PRIORITY[{i}]"), index, bit_offset, 3, ReadWrite)
            .describe("Priority for the clock input in automatic selection.")
            .labels(&[
                (0x0, "no priority"),
                (0x1, "priority 1"),
                (0x2, "priority 2"),
                (0x3, "priority 3"),
                (0x4, "priority 4"),
            ]))?;
    }
    b.field(field("HSW_MODE", 0x053A, 0, 2, WriteOnly)
        .describe("2: default setting, do not modify.")
        .fixed(0x2)
        .hidden()
        .no_verify())?;
    b.field(field("HSW_PHMEAS_CTRL", 0x053A, 2, 2, WriteOnly)
        .describe("0: default setting, do not modify.")
        .fixed(0x0)
        .hidden()
        .no_verify())?;
    for i in 0..2u32 {
        b.field(byte(&format!("HSW_PHMEAS_THR[{i}]"), 0x053B + i, ReadWrite).hidden())?;
    }
    b.field(field("HSW_COARSE_PM_LEN", 0x053D, 0, 5, ReadWrite).hidden())?;
    b.field(field("HSW_COARSE_PM_DLY", 0x053E, 0, 5, ReadWrite).hidden())?;
    b.field(bit("HOLD_HIST_VALID", 0x053F, 1, ReadOnly)
        .describe("1 = enough historical frequency data collected for valid holdover."))?;
    b.field(bit("FASTLOCK_STATUS", 0x053F, 2, ReadOnly)
        .describe("1 = PLL is in fast lock operation."))?;
    b.field(field("HSW_FINE_PM_LEN", 0x0588, 0, 4, ReadWrite).hidden())?;
    for i in 0..2u32 {
        b.field(byte(&format!("PFD_EN_DELAY[{i}]"), 0x0589 + i, ReadWrite).hidden())?;
    }
    b.field(bit("INIT_LP_CLOSE_HO", 0x059B, 1, ReadWrite)
        .describe("1: ramp on initial lock, 0: no ramp on initial lock."))?;
    b.field(bit("HOLD_PRESERVE_HIST", 0x059B, 4, ReadWrite).hidden())?;
    b.field(bit("HOLD_FRZ_WITH_INTONLY", 0x059B, 5, ReadWrite).hidden())?;
    b.field(bit("HOLD_EXIT_BW_SEL0", 0x059B, 6, ReadWrite).hidden())?;
    b.field(bit("HOLD_EXIT_STD_BO", 0x059B, 7, ReadWrite).hidden())?;
    for i in 0..6u32 {
        b.field(field(&format!("HOLDEXIT_BW[{i}]"), 0x059D + i, 0, 6, ReadWrite).hidden())?;
    }
    b.field(field("RAMP_STEP_SIZE", 0x05A6, 0, 3, ReadWrite).hidden())?;
    b.field(bit("RAMP_SWITCH_EN", 0x05A6, 3, ReadWrite)
        .describe("0: disable ramp switching, 1: enable ramp switching (default)."))?;

    // ── Page 9: input buffers ────────────────────────────────────────────────

    b.field(bit("XAXB_EXTCLK_EN", 0x090E, 0, ReadWrite)
        .describe("0 for a crystal at the XAXB pins, 1 for an external clock source."))?;
    b.field(bit("IO_VDD_SEL", 0x0943, 0, ReadWrite)
        .describe("0 for 1.8 V external connections, 1 for 3.3 V."))?;
    b.field(field("IN_EN", 0x0949, 0, 4, ReadWrite)
        .describe("0: disable and power down the input buffer, 1: enable for IN3-IN0."))?;
    b.field(field("IN_PULSED_CMOS_EN", 0x0949, 4, 4, ReadWrite)
        .describe("0: standard input format, 1: pulsed CMOS input format for IN3-IN0."))?;
    b.field(field("INX_TO_PFD_EN", 0x094A, 0, 4, ReadWrite).hidden())?;
    for i in 0..2u32 {
        b.field(byte(&format!("REFCLK_HYS_SEL[{i}]"), 0x094E + i, ReadWrite).hidden())?;
    }
    b.field(bit("MXAXB_INTEGER", 0x095E, 0, ReadWrite).hidden())?;

    // ── Page A: N divider power and routing ──────────────────────────────────

    b.field(field("N_ADD_0P5", 0x0A02, 0, 5, ReadWrite).hidden())?;
    b.field(field("N_CLK_TO_OUTX_EN", 0x0A03, 0, 5, ReadWrite)
        .describe("Routes Multisynth outputs to the output driver muxes."))?;
    b.field(field("N_PIBYP", 0x0A04, 0, 5, ReadWrite)
        .describe("0: Nx divider is fractional, 1: Nx divider is integer."))?;
    b.field(field("N_PDNB", 0x0A05, 0, 5, ReadWrite)
        .describe("0 powers down unused N dividers; must be 1 for all active N dividers."))?;
    for i in 0..5u32 {
        b.field(field(&format!("N_HIGH_FREQ[{i}]"), 0x0A14 + i, 0, 3, ReadWrite).hidden())?;
    }

    // ── Page B: clock gating ─────────────────────────────────────────────────

    b.field(field("PDIV_FRACN_CLK_DIS_PLL", 0x0B44, 0, 4, ReadWrite)
        .describe("Disable digital clocks to the input P fractional dividers."))?;
    b.field(bit("FRACN_CLK_DIS_PLL", 0x0B44, 5, ReadWrite)
        .describe("Disable the digital clock to the M fractional divider."))?;
    b.field(field("LOS_CLK_DIS", 0x0B46, 0, 4, ReadWrite)
        .describe("Set to 0 for normal operation."))?;
    b.field(field("OOF_CLK_DIS", 0x0B47, 0, 5, ReadWrite)
        .describe("Set to 0 for normal operation."))?;
    b.field(field("OOF_DIV_CLK_DIS", 0x0B48, 0, 5, ReadWrite)
        .describe("Set to 0 for normal operation."))?;
    b.field(field("N_CLK_DIS", 0x0B4A, 0, 5, ReadWrite)
        .describe("Disable digital clocks to the N dividers; must be 0 to use a divider."))?;
    for i in 0..2u32 {
        b.field(byte(&format!("VCO_RESET_CALCODE[{i}]"), 0x0B57 + i, ReadWrite)
            .describe("12-bit value controlling the VCO frequency when a reset occurs."))?;
    }

    Ok(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_builds() {
        let b = si5345().expect("table must have unique names and valid windows");
        assert!(b.field_count() > 300, "got {}", b.field_count());
        assert_eq!(b.command_count(), 15);
    }

    #[test]
    fn r_divider_banks_do_not_collide() {
        let b = si5345().unwrap();
        let r3 = b.fields().find(|f| f.name() == "R3_REG[0]").unwrap();
        let r4 = b.fields().find(|f| f.name() == "R4_REG[0]").unwrap();
        assert_eq!(r3.address(), reg(0x0253));
        assert_eq!(r4.address(), reg(0x0256));
    }

    #[test]
    fn in_priority_keys_are_distinct() {
        let b = si5345().unwrap();
        let f = b.fields().find(|f| f.name() == "IN_PRIORITY[0]").unwrap();
        let map = f.enums().unwrap();
        assert_eq!(map.len(), 5);
        assert_eq!(map.raw("priority 4"), Some(4));
    }
}
