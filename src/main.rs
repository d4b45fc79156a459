use clap::Parser;
use mic_finder::{CliArgs, CpalSource, MicRegistry, Query, telemetry, ui};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    telemetry::init_tracing(&args.log_level);

    // === 検索条件の検証 (デバイス列挙より先に行う) ===
    let query = Query::from_selectors(args.name, args.index)?;

    // === デバイス一覧の取得 ===
    let source = CpalSource::new(args.host.as_deref())?;
    let registry = MicRegistry::new(&source)?;
    tracing::info!(
        host = source.host_name(),
        count = registry.len(),
        "input devices enumerated"
    );

    // === 検索と出力 ===
    let outcome = registry.search(&query);
    tracing::info!(found = outcome.is_found(), "search finished");
    if args.json {
        println!("{}", ui::render_json(&outcome)?);
    } else {
        ui::print_outcome(&outcome);
    }
    Ok(())
}
