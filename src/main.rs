//! Student Records Engine CLI
//!
//! Command-line interface for sorting and filtering student records files.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- students.txt sorted.txt 3
//! cargo run -- students.txt domestic.txt 1
//! cargo run -- students.txt international.txt 2
//! ```
//!
//! The program reads student records from the input file, sorts them with
//! the multi-key comparator, and writes the subset selected by MODE
//! (1 = domestic only, 2 = international only, 3 = all) to the output file.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - non-zero: wrong arguments, file not found, or the first invalid
//!   record; the diagnostic is written to `error_output.txt` and stderr

use std::process;
use student_records::cli;
use student_records::core::pipeline;
use student_records::io::reporter;

fn main() {
    // Wrong arity or an invalid mode never reach here: clap prints the
    // usage message and exits non-zero on its own
    let args = cli::parse_args();

    if let Err(e) = pipeline::run(&args.input_file, &args.output_file, args.mode) {
        // the fixed diagnostics file gets the single failure line; if
        // even that write fails, stderr still carries the message
        if let Err(report_err) = reporter::report_failure(&e) {
            eprintln!("Failed to write {}: {}", reporter::ERROR_FILE, report_err);
        }
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
