//! Device model: a named catalogue of fields over one register space
//!
//! A device is populated once, at configuration time, from a static
//! table ([`DeviceBuilder`]); after [`DeviceBuilder::attach`] the field
//! set never changes, only the register contents behind it. Access is
//! synchronous request/response with no locking — serializing concurrent
//! callers is the caller's or the transport's job.

use std::collections::HashMap;

use tracing::{debug, error, trace};

use crate::error::{RegMapError, Result};
use crate::field::{FieldDef, Value};
use crate::loader;
use crate::space::RegisterSpace;

/// A self-clearing action bit: toggled (written 1 then 0) to produce a
/// pulse, e.g. a soft reset or a divider-update strobe
#[derive(Debug, Clone)]
pub struct CommandDef {
    name: String,
    description: String,
    address: u32,
    bit_offset: u8,
    bit_width: u8,
}

impl CommandDef {
    /// Define a toggle command at `address` with the given bit window
    #[must_use]
    pub fn new(name: &str, address: u32, bit_offset: u8, bit_width: u8) -> Self {
        Self {
            name: name.to_string(),
            description: String::new(),
            address,
            bit_offset,
            bit_width,
        }
    }

    /// Attach a datasheet description
    #[must_use]
    pub fn describe(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Command name
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

    const fn max_value(&self) -> u32 {
        if self.bit_width >= 32 {
            u32::MAX
        } else {
            (1u32 << self.bit_width) - 1
        }
    }

    const fn mask(&self) -> u32 {
        self.max_value() << self.bit_offset
    }

    const fn insert(&self, word: u32, value: u32) -> u32 {
        (word & !self.mask()) | ((value & self.max_value()) << self.bit_offset)
    }
}

/// Name-index entry; fields and commands share one namespace, as the
/// source device trees do
#[derive(Debug, Clone, Copy)]
enum Slot {
    Field(usize),
    Command(usize),
}

/// Populates a device's field catalogue before a register space is
/// attached
#[derive(Debug, Clone)]
pub struct DeviceBuilder {
    name: String,
    size: u32,
    fields: Vec<FieldDef>,
    commands: Vec<CommandDef>,
    index: HashMap<String, Slot>,
}

impl DeviceBuilder {
    /// Start a catalogue for a device with a register space of `size` bytes
    #[must_use]
    pub fn new(name: &str, size: u32) -> Self {
        Self {
            name: name.to_string(),
            size,
            fields: Vec::new(),
            commands: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Register a field descriptor
    ///
    /// Validates the bit window; does not validate address overlap
    /// between fields (overlaps are a catalogue bug caught by tests, not
    /// at runtime).
    ///
    /// # Errors
    ///
    /// Returns `DuplicateFieldName` if the name is taken, `InvalidWindow`
    /// if the window is empty or extends past bit 31. The existing
    /// catalogue is left intact on failure.
    pub fn field(&mut self, def: FieldDef) -> Result<&mut Self> {
        check_window(def.name(), def.bit_offset(), def.bit_width())?;
        self.claim_name(def.name())?;
        self.index
            .insert(def.name().to_string(), Slot::Field(self.fields.len()));
        self.fields.push(def);
        Ok(self)
    }

    /// Register a toggle command
    ///
    /// # Errors
    ///
    /// Same failure modes as [`DeviceBuilder::field`]; commands share the
    /// field namespace.
    pub fn command(&mut self, def: CommandDef) -> Result<&mut Self> {
        check_window(def.name(), def.bit_offset, def.bit_width)?;
        self.claim_name(def.name())?;
        self.index
            .insert(def.name().to_string(), Slot::Command(self.commands.len()));
        self.commands.push(def);
        Ok(self)
    }

    fn claim_name(&self, name: &str) -> Result<()> {
        if self.index.contains_key(name) {
            return Err(RegMapError::duplicate(&self.name, name));
        }
        Ok(())
    }

    /// Device name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register space size in bytes
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Number of fields defined so far
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Number of commands defined so far
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Iterate the field descriptors in definition order
    pub fn fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter()
    }

    /// Iterate the command descriptors in definition order
    pub fn commands(&self) -> impl Iterator<Item = &CommandDef> {
        self.commands.iter()
    }

    /// Freeze the catalogue over a register space
    pub fn attach<S: RegisterSpace>(self, space: S) -> Device<S> {
        debug!(
            device = %self.name,
            fields = self.fields.len(),
            commands = self.commands.len(),
            "attached register space"
        );
        Device {
            name: self.name,
            size: self.size,
            space,
            fields: self.fields,
            commands: self.commands,
            index: self.index,
        }
    }
}

fn check_window(name: &str, bit_offset: u8, bit_width: u8) -> Result<()> {
    if bit_width == 0 || bit_offset as u32 + bit_width as u32 > 32 {
        return Err(RegMapError::InvalidWindow {
            name: name.to_string(),
            bit_offset,
            bit_width,
        });
    }
    Ok(())
}

/// A device: an immutable field catalogue plus the register space it
/// addresses into
#[derive(Debug)]
pub struct Device<S: RegisterSpace> {
    name: String,
    size: u32,
    space: S,
    fields: Vec<FieldDef>,
    commands: Vec<CommandDef>,
    index: HashMap<String, Slot>,
}

impl<S: RegisterSpace> Device<S> {
    /// Device name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register space size in bytes
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Look up a field descriptor by name
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        match self.index.get(name) {
            Some(&Slot::Field(i)) => Some(&self.fields[i]),
            _ => None,
        }
    }

    /// Iterate the field descriptors in definition order
    pub fn fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter()
    }

    /// Iterate the command descriptors in definition order
    pub fn commands(&self) -> impl Iterator<Item = &CommandDef> {
        self.commands.iter()
    }

    /// Direct access to the underlying register space
    pub fn space_mut(&mut self) -> &mut S {
        &mut self.space
    }

    /// Consume the device, returning the register space
    pub fn into_space(self) -> S {
        self.space
    }

    /// Read a field, translating through its enum map when the raw value
    /// is in the map's domain
    ///
    /// # Errors
    ///
    /// `UnknownField` if the name does not exist, `InvalidAccess` on
    /// write-only fields (no register access is performed), or any
    /// transport failure.
    pub fn read(&mut self, name: &str) -> Result<Value> {
        let raw = self.read_raw(name)?;
        let field = self.lookup_field(name)?;
        if let Some(label) = field.enums().and_then(|map| map.label(raw)) {
            return Ok(Value::Label(label.to_string()));
        }
        Ok(Value::Raw(raw))
    }

    /// Read a field's raw value with no enum translation
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Device::read`].
    pub fn read_raw(&mut self, name: &str) -> Result<u32> {
        let field = self.lookup_field(name)?;
        if !field.mode().can_read() {
            return Err(RegMapError::invalid_access(name, field.mode(), "read"));
        }
        let (address, field) = (field.address(), field.clone());
        let word = self.space.read32(address)?;
        let raw = field.extract(word);
        trace!(device = %self.name, field = name, raw = format_args!("{raw:#x}"), "read");
        Ok(raw)
    }

    /// Write a field, resolving a label through the enum map, with
    /// read-modify-write and optional verify-after-write
    ///
    /// # Errors
    ///
    /// `UnknownField`, `InvalidAccess` on read-only fields (no register
    /// access is performed), `UnknownEnumLabel` for an unmapped label,
    /// `ValueTooWide` if the raw value exceeds the bit window,
    /// `VerifyMismatch` if the read-back disagrees, or any transport
    /// failure.
    pub fn write(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        let field = self.lookup_field(name)?.clone();
        if !field.mode().can_write() {
            return Err(RegMapError::invalid_access(name, field.mode(), "written"));
        }

        let raw = match value.into() {
            Value::Raw(raw) => raw,
            Value::Label(label) => field
                .enums()
                .and_then(|map| map.raw(&label))
                .ok_or_else(|| RegMapError::unknown_label(name, label))?,
        };
        if raw > field.max_value() {
            return Err(RegMapError::ValueTooWide {
                name: name.to_string(),
                value: raw,
                bit_width: field.bit_width(),
            });
        }

        // Read-modify-write so sibling fields in the same register are
        // preserved. Write-only registers cannot be read back; the window
        // is shifted into a zero word instead.
        let word = if field.mode().can_read() {
            self.space.read32(field.address())?
        } else {
            0
        };
        self.space.write32(field.address(), field.insert(word, raw))?;
        debug!(device = %self.name, field = name, raw = format_args!("{raw:#x}"), "write");

        if field.verify_after_write() && field.mode().can_read() {
            let read_back = field.extract(self.space.read32(field.address())?);
            if read_back != raw {
                error!(
                    device = %self.name,
                    field = name,
                    wrote = format_args!("{raw:#x}"),
                    read_back = format_args!("{read_back:#x}"),
                    "verify mismatch"
                );
                return Err(RegMapError::VerifyMismatch {
                    name: name.to_string(),
                    wrote: raw,
                    read_back,
                });
            }
        }
        Ok(())
    }

    /// Execute a toggle command: pulse the window high then low
    ///
    /// Both edges go through read-modify-write so sibling bits in the
    /// strobe register survive. Toggles are never verified — the bits
    /// are self-clearing by contract.
    ///
    /// # Errors
    ///
    /// `UnknownField` if no command with this name exists, or any
    /// transport failure.
    pub fn execute(&mut self, name: &str) -> Result<()> {
        let command = match self.index.get(name) {
            Some(&Slot::Command(i)) => self.commands[i].clone(),
            _ => return Err(RegMapError::unknown_field(name)),
        };
        debug!(device = %self.name, command = name, "toggle");
        let word = self.space.read32(command.address())?;
        self.space.write32(command.address(), command.insert(word, 1))?;
        let word = self.space.read32(command.address())?;
        self.space.write32(command.address(), command.insert(word, 0))?;
        Ok(())
    }

    /// Apply ordered `(byte_address, raw_word)` rows straight to the
    /// register space — no field-level interpretation, no
    /// transactionality (see [`loader::load_rows`])
    ///
    /// # Errors
    ///
    /// Propagates the first transport failure; prior rows stay applied.
    pub fn load_table(&mut self, rows: &[(u32, u32)]) -> Result<usize> {
        loader::load_rows(&mut self.space, rows.iter().copied())
    }

    /// Parse an `Address,Data` configuration export and apply it (see
    /// [`loader::load_file`])
    ///
    /// # Errors
    ///
    /// Propagates I/O, parse, and transport failures; rows already
    /// written stay applied.
    pub fn load_table_file(&mut self, path: impl AsRef<std::path::Path>) -> Result<usize> {
        loader::load_file(&mut self.space, path)
    }

    fn lookup_field(&self, name: &str) -> Result<&FieldDef> {
        match self.index.get(name) {
            Some(&Slot::Field(i)) => Ok(&self.fields[i]),
            _ => Err(RegMapError::unknown_field(name)),
        }
    }
}
