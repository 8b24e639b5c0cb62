//! `regmap` — command-line explorer for the register-map catalogues.
//!
//! ```text
//! USAGE:
//!   regmap devices                       List the built-in catalogues
//!   regmap fields <device> [--all]       List a catalogue's fields
//!   regmap load <device> <file>          Dry-run an Address,Data export
//!   regmap read <device> <field> [--load <file>]
//!                                        Read one field after an optional load
//! ```
//!
//! Everything runs against an in-memory register space; this tool is
//! for inspecting catalogues and sanity-checking configuration exports
//! before they go near hardware.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use regmap_core::{Device, DeviceBuilder, MemSpace};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "regmap", about = "Register-map catalogue explorer", version)]
struct Cli {
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// List the built-in device catalogues.
    Devices,
    /// List a catalogue's fields and toggle commands.
    Fields {
        /// Catalogue name (see `regmap devices`).
        device: String,
        /// Include hidden fields (factory/CBPro-managed entries).
        #[arg(long)]
        all: bool,
    },
    /// Parse an Address,Data export and apply it to an in-memory space.
    Load {
        /// Catalogue name.
        device: String,
        /// Path to the configuration export.
        file: String,
    },
    /// Read one field from an in-memory space, optionally after a load.
    Read {
        /// Catalogue name.
        device: String,
        /// Field name (e.g. IN_SEL or StatusVector).
        field: String,
        /// Configuration export to apply first.
        #[arg(long)]
        load: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Cmd::Devices => cmd_devices(),
        Cmd::Fields { device, all } => cmd_fields(&device, all),
        Cmd::Load { device, file } => cmd_load(&device, &file),
        Cmd::Read { device, field, load } => cmd_read(&device, &field, load.as_deref()),
    }
}

fn lookup(device: &str) -> Result<DeviceBuilder> {
    regmap_devices::catalogue(device)
        .ok_or_else(|| anyhow!("no catalogue named '{device}' (try `regmap devices`)"))?
        .map_err(Into::into)
}

fn attach(device: &str) -> Result<Device<MemSpace>> {
    let builder = lookup(device)?;
    let size = builder.size();
    Ok(builder.attach(MemSpace::new(size)))
}

fn cmd_devices() -> Result<()> {
    println!("Built-in catalogues:");
    println!();
    for (name, size) in regmap_devices::catalogue_names() {
        let builder = lookup(name)?;
        println!(
            "  {name:<10}  {:>4} fields  {:>2} commands  {size:#7x} byte space",
            builder.field_count(),
            builder.command_count()
        );
    }
    Ok(())
}

fn cmd_fields(device: &str, all: bool) -> Result<()> {
    let builder = lookup(device)?;

    println!("{} fields:", builder.name());
    for f in builder.fields() {
        if f.is_hidden() && !all {
            continue;
        }
        let window = if f.bit_width() == 1 {
            format!("bit {}", f.bit_offset())
        } else {
            format!("bits {}..{}", f.bit_offset(), f.bit_offset() + f.bit_width() - 1)
        };
        print!("  {:<28} {:#06x}  {:<11} {}", f.name(), f.address(), window, f.mode());
        if let Some(map) = f.enums() {
            let labels: Vec<&str> = map.iter().map(|(_, label)| label).collect();
            print!("  [{}]", labels.join(", "));
        }
        if f.is_hidden() {
            print!("  (hidden)");
        }
        println!();
    }

    if builder.command_count() > 0 {
        println!();
        println!("{} commands:", builder.name());
        for c in builder.commands() {
            println!("  {:<28} {:#06x}  {}", c.name(), c.address(), c.description());
        }
    }
    Ok(())
}

fn cmd_load(device: &str, file: &str) -> Result<()> {
    let mut dev = attach(device)?;
    let applied = dev.load_table_file(file)?;
    println!("Applied {applied} rows from {file} to an in-memory {} space", dev.name());

    // Show what the load produced, field by field
    let names: Vec<String> = dev
        .fields()
        .filter(|f| !f.is_hidden() && f.mode().can_read())
        .map(|f| f.name().to_string())
        .collect();
    let mut nonzero = 0;
    for name in names {
        if dev.read_raw(&name)? != 0 {
            println!("  {name:<28} {}", dev.read(&name)?);
            nonzero += 1;
        }
    }
    if nonzero == 0 {
        println!("  (all readable fields are zero)");
    }
    Ok(())
}

fn cmd_read(device: &str, field: &str, load: Option<&str>) -> Result<()> {
    let mut dev = attach(device)?;
    if let Some(file) = load {
        let applied = dev.load_table_file(file)?;
        println!("Applied {applied} rows from {file}");
    }
    let value = dev.read(field)?;
    println!("{field} = {value}");
    Ok(())
}
