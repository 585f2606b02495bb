use clap::Parser;
use jpeg_shrink::imaging::{Quality, RustBackend, resize};
use jpeg_shrink::types::ResizeRequest;
use jpeg_shrink::{output, prompt};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jpeg-shrink")]
#[command(about = "Shrink a JPEG image by a percentage")]
#[command(long_about = "\
Shrink a JPEG image by a percentage

Run with no arguments to be prompted for the input path, output path, and
percentage. The percentage prompt repeats until it gets a number strictly
between 0 and 100.

Alternatively, pass all three values as arguments for non-interactive use:

  jpeg-shrink photo.jpg small.jpg 50

In argument mode an out-of-range percentage is an immediate usage error
instead of a re-prompt. The output is always encoded as JPEG, whatever
extension the output filename carries.")]
#[command(version)]
struct Cli {
    /// Path to the input JPEG (omit all three arguments to be prompted)
    input: Option<PathBuf>,

    /// Path to save the resized image, including the filename
    output: Option<PathBuf>,

    /// Resize percentage, strictly between 0 and 100
    #[arg(value_parser = parse_percentage_arg)]
    percentage: Option<f64>,

    /// JPEG encoding quality (1-100)
    #[arg(long, default_value_t = 90)]
    quality: u32,
}

fn parse_percentage_arg(text: &str) -> Result<f64, String> {
    prompt::parse_percentage(text).map_err(|e| e.to_string())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let request = match (cli.input, cli.output, cli.percentage) {
        (Some(input), Some(output), Some(percentage)) => ResizeRequest {
            input,
            output,
            percentage,
        },
        (None, None, None) => {
            let stdin = io::stdin();
            prompt::collect_request(&mut stdin.lock(), &mut io::stdout())?
        }
        _ => {
            return Err("provide INPUT, OUTPUT and PERCENTAGE together, \
                        or no arguments to be prompted"
                .into());
        }
    };

    let backend = RustBackend::new();
    match resize(&backend, &request, Quality::new(cli.quality)) {
        Ok(outcome) => println!("{}", output::format_outcome(&outcome)),
        // Reported, not propagated: a failed attempt is not a process failure
        Err(error) => println!("{}", output::format_error(&error)),
    }

    Ok(())
}
