use std::env::args_os;
use std::process::ExitCode;

use pixel_reporter::{report_pixels, CLIParser};

fn main() -> ExitCode {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    match report_pixels(&arguments) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Pixel report failed because of: {}", e);
            ExitCode::FAILURE
        }
    }
}
