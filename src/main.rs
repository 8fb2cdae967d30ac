use chip8vm::config::Config;
use chip8vm::consts;
use chip8vm::external::emulator::Emulator;
use chip8vm::{Processor, Rom, Variant};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "CHIP-8 interpreter", long_about = None)]
struct Args {
    /// Path to the ROM image
    rom: PathBuf,

    /// Quirk set: chip8, schip or xochip
    #[arg(short, long, default_value_t = Variant::Baseline)]
    variant: Variant,

    /// Instructions per second
    #[arg(short, long, default_value_t = 700, value_parser = clap::value_parser!(u32).range(1..))]
    ips: u32,

    /// Host pixels per CHIP-8 pixel
    #[arg(short, long, default_value_t = 20)]
    scale: u32,

    /// Draw lit pixels without a background-coloured outline
    #[arg(long)]
    no_outlines: bool,

    /// Square-wave amplitude
    #[arg(
        long,
        default_value_t = 2500,
        value_parser = clap::value_parser!(i16).range(0..=consts::MAX_VOLUME as i64)
    )]
    volume: i16,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let config = Config {
        scale_factor: args.scale,
        pixel_outlines: !args.no_outlines,
        inst_per_second: args.ips,
        volume: args.volume,
        variant: args.variant,
        ..Default::default()
    };

    let rom = Rom::new(&args.rom)?;
    let mut chip8 = Processor::new(config.variant);
    chip8.load_rom(&rom)?;

    let mut emulator = Emulator::new(chip8, config)?;
    emulator.run()?;
    Ok(())
}
