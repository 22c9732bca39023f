use anyhow::Result;
use cratecheck::{
    commands::{check_command, list_command},
    parse_args,
};
use tracing::debug;

fn main() -> Result<()> {
    // Initialize tracing based on RUST_LOG env var; stdout is reserved for the report
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args();
    debug!("Parsed arguments: {:?}", args);

    if args.no_color {
        colored::control::set_override(false);
    }

    if args.list {
        return list_command(&args);
    }

    let code = check_command(&args)?;
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
