use crate::types::SelectionMode;
use clap::Parser;
use std::path::PathBuf;

/// Sort and filter a student records file
#[derive(Parser, Debug)]
#[command(name = "student-records")]
#[command(about = "Sort a student records file and write a filtered subset", long_about = None)]
pub struct CliArgs {
    /// Input file containing one student record per line
    #[arg(value_name = "INPUT", help = "Path to the input records file")]
    pub input_file: PathBuf,

    /// Output file receiving the sorted, filtered records
    #[arg(value_name = "OUTPUT", help = "Path to the output file")]
    pub output_file: PathBuf,

    /// Which records to write
    #[arg(
        value_name = "MODE",
        value_parser = parse_mode,
        help = "Output selection: 1 = domestic only, 2 = international only, 3 = all"
    )]
    pub mode: SelectionMode,
}

/// Map the integer mode selector onto [`SelectionMode`].
fn parse_mode(arg: &str) -> Result<SelectionMode, String> {
    match arg {
        "1" => Ok(SelectionMode::DomesticOnly),
        "2" => Ok(SelectionMode::InternationalOnly),
        "3" => Ok(SelectionMode::All),
        _ => Err(format!("invalid mode '{arg}': expected 1, 2, or 3")),
    }
}
