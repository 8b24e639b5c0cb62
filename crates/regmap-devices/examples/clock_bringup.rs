//! Si5345 bring-up walkthrough against an in-memory register space
//!
//! Demonstrates the full field surface: labelled writes, read-back,
//! toggle commands, and a bulk configuration load.

use regmap_core::{MemSpace, Result};
use regmap_devices::{si5345, SI5345_SIZE};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("regmap_core=debug")
        .init();

    println!("🕐 Si5345 bring-up (in-memory dry run)\n");

    let builder = si5345()?;
    println!(
        "Catalogue: {} fields, {} commands",
        builder.field_count(),
        builder.command_count()
    );

    let mut clock = builder.attach(MemSpace::new(SI5345_SIZE));

    // Select input IN2 under register control
    clock.write("IN_SEL_REGCTRL", true)?;
    clock.write("IN_SEL", "IN2")?;
    println!("Input select: {}", clock.read("IN_SEL")?);

    // Enable LOS monitoring on all four inputs with a 100 ms
    // validation time
    clock.write("LOS_EN", 0xFu32)?;
    for i in 0..4 {
        clock.write(&format!("LOS_VAL_TIME[{i}]"), "100ms")?;
    }
    println!("LOS enable:   {}", clock.read("LOS_EN")?);

    // Apply a configuration export, then calibrate
    let rows = [(0x0536 << 2, 0x02), (0x0949 << 2, 0x0F)];
    let applied = clock.load_table(&rows)?;
    println!("Loaded {applied} configuration rows");

    clock.execute("SOFT_RST_ALL")?;
    println!("Switch mode:  {}", clock.read("CLK_SWTCH_MODE")?);

    println!("\n✅ Bring-up sequence complete");
    Ok(())
}
