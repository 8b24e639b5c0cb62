//! Field descriptors: named bit windows into 32-bit registers
//!
//! A `FieldDef` is pure metadata — it names a contiguous bit range inside
//! one register, its access mode, and how its raw value is presented
//! (plain integer, hex, boolean, or an enumerated label). The descriptor
//! never touches the transport; `Device` does that.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Field access mode, as declared in the device datasheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    /// Read-only status field
    ReadOnly,
    /// Write-only control field (no read-back possible)
    WriteOnly,
    /// Read-write configuration field
    ReadWrite,
}

impl AccessMode {
    /// Whether a read of the containing register is permitted
    #[must_use]
    pub const fn can_read(self) -> bool {
        !matches!(self, Self::WriteOnly)
    }

    /// Whether a write to the containing register is permitted
    #[must_use]
    pub const fn can_write(self) -> bool {
        !matches!(self, Self::ReadOnly)
    }
}

impl fmt::Display for AccessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Datasheet notation
        match self {
            Self::ReadOnly => write!(f, "RO"),
            Self::WriteOnly => write!(f, "WO"),
            Self::ReadWrite => write!(f, "RW"),
        }
    }
}

/// Display/interpretation base for a field's raw value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueBase {
    /// Unsigned integer
    #[default]
    Uint,
    /// Hexadecimal
    Hex,
    /// Single-bit boolean
    Bool,
    /// Enumerated label (see [`EnumMap`])
    Label,
}

/// Mapping between raw field values and human-readable labels
///
/// The reverse map is built once here, at definition time, so label
/// writes don't scan the forward map per call.
#[derive(Debug, Clone, Default)]
pub struct EnumMap {
    forward: BTreeMap<u32, String>,
    reverse: HashMap<String, u32>,
}

impl EnumMap {
    /// Build from `(raw, label)` pairs
    #[must_use]
    pub fn from_pairs(pairs: &[(u32, &str)]) -> Self {
        let mut forward = BTreeMap::new();
        let mut reverse = HashMap::new();
        for &(raw, label) in pairs {
            forward.insert(raw, label.to_string());
            reverse.insert(label.to_string(), raw);
        }
        Self { forward, reverse }
    }

    /// Label for a raw value, if the value is in the map's domain
    #[must_use]
    pub fn label(&self, raw: u32) -> Option<&str> {
        self.forward.get(&raw).map(String::as_str)
    }

    /// Raw value for a label, if the label exists
    #[must_use]
    pub fn raw(&self, label: &str) -> Option<u32> {
        self.reverse.get(label).copied()
    }

    /// Iterate `(raw, label)` pairs in raw-value order
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.forward.iter().map(|(&raw, label)| (raw, label.as_str()))
    }

    /// Number of mapped values
    #[must_use]
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// Whether the map is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}

/// A typed application-level value for a field
///
/// Reads return `Label` when the field has an enum map and the raw value
/// is in its domain, `Raw` otherwise. Writes accept either form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Raw register value
    Raw(u32),
    /// Enumerated label
    Label(String),
}

impl From<u32> for Value {
    fn from(raw: u32) -> Self {
        Self::Raw(raw)
    }
}

impl From<&str> for Value {
    fn from(label: &str) -> Self {
        Self::Label(label.to_string())
    }
}

impl From<String> for Value {
    fn from(label: String) -> Self {
        Self::Label(label)
    }
}

impl From<bool> for Value {
    fn from(bit: bool) -> Self {
        Self::Raw(u32::from(bit))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raw(raw) => write!(f, "{raw:#x}"),
            Self::Label(label) => write!(f, "{label}"),
        }
    }
}

/// Descriptor for one named bit field
///
/// `address` is a byte offset into the device's register space, always
/// aligned to a 32-bit register (the catalogues shift a logical register
/// index left by 2). The bit window is little-endian within the register
/// and must satisfy `bit_offset + bit_width <= 32`.
#[derive(Debug, Clone)]
pub struct FieldDef {
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) address: u32,
    pub(crate) bit_offset: u8,
    pub(crate) bit_width: u8,
    pub(crate) mode: AccessMode,
    pub(crate) base: ValueBase,
    pub(crate) enums: Option<EnumMap>,
    pub(crate) fixed_value: Option<u32>,
    pub(crate) hidden: bool,
    pub(crate) verify: bool,
}

impl FieldDef {
    /// Define a field at `address` with the given bit window and mode
    ///
    /// The window must satisfy `bit_width >= 1` and
    /// `bit_offset + bit_width <= 32`. The descriptor does not check this
    /// itself; [`crate::DeviceBuilder::field`] rejects bad geometry, and
    /// the mask helpers below assume it holds (a wider window overflows
    /// the shift).
    #[must_use]
    pub fn new(name: &str, address: u32, bit_offset: u8, bit_width: u8, mode: AccessMode) -> Self {
        Self {
            name: name.to_string(),
            description: String::new(),
            address,
            bit_offset,
            bit_width,
            mode,
            base: ValueBase::Uint,
            enums: None,
            fixed_value: None,
            hidden: false,
            verify: true,
        }
    }

    /// Attach a datasheet description
    #[must_use]
    pub fn describe(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Set the display base
    #[must_use]
    pub fn base(mut self, base: ValueBase) -> Self {
        self.base = base;
        self
    }

    /// Attach an enum map from `(raw, label)` pairs; implies `ValueBase::Label`
    #[must_use]
    pub fn labels(mut self, pairs: &[(u32, &str)]) -> Self {
        self.enums = Some(EnumMap::from_pairs(pairs));
        self.base = ValueBase::Label;
        self
    }

    /// Mark the value as fixed by hardware contract (not user-settable)
    #[must_use]
    pub fn fixed(mut self, value: u32) -> Self {
        self.fixed_value = Some(value);
        self
    }

    /// Hide the field from default display surfaces
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Skip read-back verification after writes (self-clearing or
    /// side-effecting bits)
    #[must_use]
    pub fn no_verify(mut self) -> Self {
        self.verify = false;
        self
    }

    /// Field name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Datasheet description
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Byte address of the containing register
    #[must_use]
    pub const fn address(&self) -> u32 {
        self.address
    }

    /// Bit offset of the window within the register
    #[must_use]
    pub const fn bit_offset(&self) -> u8 {
        self.bit_offset
    }

    /// Bit width of the window
    #[must_use]
    pub const fn bit_width(&self) -> u8 {
        self.bit_width
    }

    /// Access mode
    #[must_use]
    pub const fn mode(&self) -> AccessMode {
        self.mode
    }

    /// Display base
    #[must_use]
    pub const fn value_base(&self) -> ValueBase {
        self.base
    }

    /// Enum map, if one is attached
    #[must_use]
    pub const fn enums(&self) -> Option<&EnumMap> {
        self.enums.as_ref()
    }

    /// Hardware-fixed value, if declared
    #[must_use]
    pub const fn fixed_value(&self) -> Option<u32> {
        self.fixed_value
    }

    /// Whether the field is hidden from default display
    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Whether writes are verified by read-back
    #[must_use]
    pub const fn verify_after_write(&self) -> bool {
        self.verify
    }

    /// Largest raw value the window can hold
    #[must_use]
    pub const fn max_value(&self) -> u32 {
        if self.bit_width >= 32 {
            u32::MAX
        } else {
            (1u32 << self.bit_width) - 1
        }
    }

    /// Window mask positioned within the register
    ///
    /// Assumes the window invariant from [`FieldDef::new`], as do
    /// [`FieldDef::extract`] and [`FieldDef::insert`].
    #[must_use]
    pub const fn mask(&self) -> u32 {
        self.max_value() << self.bit_offset
    }

    /// Extract this field's raw value from a register word
    #[must_use]
    pub const fn extract(&self, word: u32) -> u32 {
        (word >> self.bit_offset) & self.max_value()
    }

    /// Mask this field's raw value into a register word, preserving
    /// sibling bits
    #[must_use]
    pub const fn insert(&self, word: u32, value: u32) -> u32 {
        (word & !self.mask()) | ((value & self.max_value()) << self.bit_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_mask_math() {
        let f = FieldDef::new("OOF", 0x0D << 2, 4, 4, AccessMode::ReadOnly);
        assert_eq!(f.max_value(), 0xF);
        assert_eq!(f.mask(), 0xF0);
        assert_eq!(f.extract(0xA5), 0xA);
        assert_eq!(f.insert(0xA5, 0x3), 0x35);
    }

    #[test]
    fn full_width_window() {
        let f = FieldDef::new("COUNTER", 0x00, 0, 32, AccessMode::ReadOnly);
        assert_eq!(f.max_value(), u32::MAX);
        assert_eq!(f.mask(), u32::MAX);
        assert_eq!(f.extract(0xDEAD_BEEF), 0xDEAD_BEEF);
    }

    #[test]
    fn insert_preserves_siblings() {
        let lo = FieldDef::new("LO", 0x00, 0, 1, AccessMode::ReadWrite);
        let hi = FieldDef::new("HI", 0x00, 1, 1, AccessMode::ReadWrite);
        let word = hi.insert(0, 1);
        let word = lo.insert(word, 1);
        assert_eq!(word, 0b11);
        let word = lo.insert(word, 0);
        assert_eq!(hi.extract(word), 1);
    }

    #[test]
    fn enum_reverse_lookup_built_once() {
        let map = EnumMap::from_pairs(&[(0, "2ms"), (1, "100ms"), (2, "200ms"), (3, "1000ms")]);
        assert_eq!(map.raw("200ms"), Some(2));
        assert_eq!(map.label(3), Some("1000ms"));
        assert_eq!(map.label(7), None);
        assert_eq!(map.raw("5ms"), None);
        assert_eq!(map.len(), 4);
    }

    #[test]
    fn value_conversions() {
        assert_eq!(Value::from(3u32), Value::Raw(3));
        assert_eq!(Value::from("IN0"), Value::Label("IN0".to_string()));
        assert_eq!(Value::from(true), Value::Raw(1));
        assert_eq!(Value::Raw(0xAB).to_string(), "0xab");
    }
}
