use clap::Parser;
use keyseq2midi::{converter, logging, Args, ConvertResult, Settings};

fn main() {
    let args = parse_command_line_arguments();
    initialize_logging(args.verbose);

    if let Err(e) = run(&args) {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn initialize_logging(verbose: bool) {
    if let Err(e) = logging::init_logger(verbose) {
        eprintln!("Logger initialization failed: {}", e);
    }
    log::info!("Application starting");
}

fn parse_command_line_arguments() -> Args {
    Args::parse()
}

fn run(args: &Args) -> ConvertResult<()> {
    let settings = Settings::resolve(args)?;
    let summary = converter::run(&settings)?;
    log::info!(
        "Conversion finished: {} tokens, {} notes, {} unmapped characters, tempo {}",
        summary.token_count,
        summary.note_count,
        summary.unknown_chars,
        summary.tempo
    );
    println!("{}", summary);
    Ok(())
}
