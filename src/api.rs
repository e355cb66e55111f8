use crate::{layout, scaffold, tree};
use colored::Colorize;
use std::path::Path;

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum SetupError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Scaffold(#[from] scaffold::ScaffoldError),
}

/// Scaffolds the MediChain frontend layout into `destination`.
///
/// Runs directory creation first so that every file write in the second pass
/// finds its parent in place, then prints the closing summary. Re-running is
/// safe: existing directories are kept and generated files are reset to their
/// defaults.
///
/// # Errors
///
/// Returns a [`SetupError`] if:
///
/// - A directory cannot be created (e.g. a regular file occupies the path).
/// - A file cannot be written (e.g. permissions deny it).
///
/// The first failure aborts the run; entries materialized before it are left
/// in place.
pub fn run(destination: &Path) -> Result<(), SetupError> {
    println!(
        "{}",
        "MediChain Healthcare Frontend Setup".bold().bright_blue()
    );
    println!();

    println!("{}", "Creating folder structure...".bold());

    scaffold::ensure_directories(destination, layout::DIRECTORIES)?;

    println!();
    println!("{}", "Creating configuration files...".bold());

    scaffold::write_files(destination, layout::FILES)?;

    log::debug!("all entries materialized under {}", destination.display());

    print_summary(destination);

    Ok(())
}

fn print_summary(destination: &Path) {
    println!();
    println!("{}", "Setup complete!".bold().green());
    println!();

    tree::render(destination);

    println!();
    println!("{}", "Next steps:".bold());
    println!("  1. Copy the component files into their folders under src/");
    println!("  2. Copy App.jsx to src/App.jsx");
    println!("  3. Run: npm run dev");
    println!("  4. Open http://localhost:5173 in your browser");
    println!();
    println!("Backend expected at: http://localhost:5000");
}
