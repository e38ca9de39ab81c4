use anyhow::Result;
use env_logger::Builder;
use findbits::config::{usage, Command};
use findbits::generator::{render_json, render_text};
use findbits::utils::bits::validate_bitstream;
use log::{debug, warn, LevelFilter};
use std::io::Write;
use std::process::ExitCode;

// Simple CLI without clap
fn main() -> Result<ExitCode> {
    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or(findbits::constants::PROGRAM_NAME);

    let config = match Command::parse(args.iter().skip(1)) {
        Ok(Command::Run(config)) => config,
        Ok(Command::Version) => {
            println!("findbits v{}", findbits::VERSION);
            return Ok(ExitCode::SUCCESS);
        }
        Ok(Command::Usage) => {
            println!("{}", usage(program));
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    // Initialize logger
    Builder::new()
        .format(|buf, record| {
            let secs = std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or_default();
            writeln!(buf, "{} [{}] - {}", secs, record.level(), record.args())
        })
        .filter(None, if config.verbose { LevelFilter::Debug } else { LevelFilter::Warn })
        .init();

    if !config.ignored.is_empty() {
        warn!("Ignoring extra arguments: {}", config.ignored.join(" "));
    }

    if config.strict {
        if let Err(e) = validate_bitstream(&config.bitstream) {
            eprintln!("Error: {}", e);
            return Ok(ExitCode::FAILURE);
        }
    }

    debug!("Searching for '{}' in {} bits", config.literal, config.bitstream.chars().count());
    let report = findbits::find_bits(&config.literal, &config.bitstream);

    if config.json {
        println!("{}", render_json(&report)?);
    } else {
        print!("{}", render_text(&report));
    }

    Ok(ExitCode::SUCCESS)
}
