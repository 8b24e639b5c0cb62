//! Catalogue-level checks: the transcribed tables build, spot-checked
//! entries match the reference manuals, and the special-cased fields
//! behave over an in-memory space

use std::collections::HashMap;

use regmap_core::{AccessMode, DeviceBuilder, MemSpace, RegisterSpace, Value};
use regmap_devices::{catalogue, catalogue_names, gige_mac, si5345, GIGE_MAC_SIZE, SI5345_SIZE};

/// No two fields may claim the same bits of a register. The builder
/// does not police this at runtime, so the suite does. Commands are
/// exempt: strobe bits legitimately share registers with fields.
fn assert_no_overlaps(b: &DeviceBuilder) {
    let mut claimed: HashMap<u32, (u32, String)> = HashMap::new();
    for f in b.fields() {
        let entry = claimed.entry(f.address()).or_insert((0, String::new()));
        assert_eq!(
            entry.0 & f.mask(),
            0,
            "{} overlaps {} at {:#x}",
            f.name(),
            entry.1,
            f.address()
        );
        entry.0 |= f.mask();
        entry.1.push_str(f.name());
        entry.1.push(' ');
    }
}

#[test]
fn si5345_table_has_no_overlapping_fields() {
    assert_no_overlaps(&si5345().unwrap());
}

#[test]
fn gige_mac_table_has_no_overlapping_fields() {
    assert_no_overlaps(&gige_mac().unwrap());
}

#[test]
fn si5345_spot_checks_against_reference_manual() {
    let b = si5345().unwrap();
    let by_name: HashMap<&str, _> = b.fields().map(|f| (f.name(), f)).collect();

    // Addresses are register indices shifted into byte addressing
    let grade = by_name["GRADE"];
    assert_eq!(grade.address(), 0x0004 << 2);
    assert_eq!(grade.mode(), AccessMode::ReadOnly);

    let oof = by_name["OOF"];
    assert_eq!(oof.address(), 0x000D << 2);
    assert_eq!(oof.bit_offset(), 4);
    assert_eq!(oof.bit_width(), 4);

    // The R dividers step by three registers
    for (r, index) in [(0, 0x024Au32), (3, 0x0253), (4, 0x0256), (9, 0x0268)] {
        let f = by_name[format!("R{r}_REG[0]").as_str()];
        assert_eq!(f.address(), index << 2, "R{r}_REG[0]");
    }

    // OUT9 skips a register relative to the five-register stride
    assert_eq!(by_name["OUT_PDN[8]"].address(), (0x0108 + 5 * 8) << 2);
    assert_eq!(by_name["OUT_PDN[9]"].address(), (0x0108 + 5 * 9 + 5) << 2);
}

#[test]
fn si5345_fixed_fields_are_write_only_and_unverified() {
    let b = si5345().unwrap();
    for name in ["STATUS_FLG_RESERVED", "M_FRAC_MODE", "M_FRAC_RESERVED", "HSW_MODE", "HSW_PHMEAS_CTRL"] {
        let f = b.fields().find(|f| f.name() == name).unwrap();
        assert_eq!(f.mode(), AccessMode::WriteOnly, "{name}");
        assert!(f.fixed_value().is_some(), "{name}");
        assert!(f.is_hidden(), "{name}");
        assert!(!f.verify_after_write(), "{name}");
    }
}

#[test]
fn si5345_hidden_fields_are_excluded_from_default_listing() {
    let b = si5345().unwrap();
    let visible = b.fields().filter(|f| !f.is_hidden()).count();
    let hidden = b.fields().filter(|f| f.is_hidden()).count();
    assert!(hidden > 50, "got {hidden}");
    assert!(visible > hidden, "got {visible} visible, {hidden} hidden");
}

#[test]
fn si5345_toggle_leaves_strobe_register_clear() {
    let mut clock = si5345().unwrap().attach(MemSpace::new(SI5345_SIZE));
    clock.write("PDN", true).unwrap();
    clock.execute("SYNC").unwrap(); // shares register 0x001E with PDN
    assert_eq!(clock.space_mut().read32(0x001E << 2).unwrap(), 0b01);
    assert_eq!(clock.read("PDN").unwrap(), Value::Raw(1));
}

#[test]
fn si5345_enum_translation_round_trip() {
    let mut clock = si5345().unwrap().attach(MemSpace::new(SI5345_SIZE));
    clock.write("CLK_SWTCH_MODE", "automatic_revertive").unwrap();
    assert_eq!(
        clock.read("CLK_SWTCH_MODE").unwrap(),
        Value::Label("automatic_revertive".into())
    );
    clock.write("IN_PRIORITY[2]", "priority 1").unwrap();
    assert_eq!(clock.read_raw("IN_PRIORITY[2]").unwrap(), 1);
}

#[test]
fn gige_mac_spot_checks() {
    let b = gige_mac().unwrap();
    let by_name: HashMap<&str, _> = b.fields().map(|f| (f.name(), f)).collect();

    // This block is byte addressed; nothing is shifted
    assert_eq!(by_name["StatusCounters[8]"].address(), 0x20);
    assert_eq!(by_name["StatusVector"].address(), 0x100);
    assert_eq!(by_name["StatusVector"].bit_width(), 9);
    assert_eq!(by_name["RollOverEn"].mode(), AccessMode::ReadWrite);
    assert_eq!(by_name["HardReset"].mode(), AccessMode::WriteOnly);
}

#[test]
fn gige_mac_counters_are_read_only() {
    let mut mac = gige_mac().unwrap().attach(MemSpace::new(GIGE_MAC_SIZE));
    mac.space_mut().write32(0x08, 0x1234).unwrap();
    assert_eq!(mac.read_raw("StatusCounters[2]").unwrap(), 0x1234);
    assert!(mac.write("StatusCounters[2]", 0u32).is_err());
}

#[test]
fn lookup_by_name_matches_direct_constructors() {
    for (name, size) in catalogue_names() {
        let b = catalogue(name).expect("listed catalogue must resolve").unwrap();
        assert_eq!(b.size(), *size, "{name}");
        assert!(b.field_count() > 0, "{name}");
    }
    assert!(catalogue("si5399").is_none());
}
