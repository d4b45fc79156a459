use clap::Parser;
use mic_finder::{CpalSource, ListArgs, MicRegistry, telemetry};

fn main() -> anyhow::Result<()> {
    let args = ListArgs::parse();
    telemetry::init_tracing(&args.log_level);

    let source = CpalSource::new(args.host.as_deref())?;
    let registry = MicRegistry::new(&source)?;

    println!("Available input devices ({}):", source.host_name());
    for mic in registry.microphones() {
        println!(" - [{}] {}", mic.index, mic.name);
    }

    match source.default_input_name()? {
        Some(name) => println!("Default input: {}", name),
        None => println!("No default input device."),
    }
    Ok(())
}
