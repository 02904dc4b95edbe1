use clap::Parser;
use vcard_tools::Result;
use vcard_tools::config::ExportConfig;
use vcard_tools::{export, logging};

fn main() {
    let _cli = Cli::parse();
    if let Err(error) = run() {
        eprintln!("error: {error}");
        if error.is_input_error() {
            eprintln!("Halting execution due to an error reading the Excel file.");
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    logging::init()?;
    export::run(&ExportConfig::default())?;
    Ok(())
}

// Input, output, and column names are fixed in `ExportConfig::default`; the
// command line only answers `--help` and `--version`.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Convert the contacts in phone_list.xlsx into a deduplicated contacts.vcf."
)]
struct Cli {}
