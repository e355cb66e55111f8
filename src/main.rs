use clap::{crate_authors, crate_description, crate_name, crate_version, Arg, ArgAction, Command};
use std::path::Path;

// The CLI layer should only parse inputs and forward them to library code.
fn main() -> miette::Result<()> {
    let matches = Command::new(crate_name!())
        .about(crate_description!())
        .author(crate_authors!())
        .version(crate_version!())
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .get_matches();

    let is_verbose = matches.get_flag("verbose");

    let mut builder = env_logger::Builder::from_default_env();
    if is_verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();

    // scaffold into the invocation directory
    medichain_setup::run(Path::new("."))?;

    Ok(())
}
