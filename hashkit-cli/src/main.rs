mod config;
mod error;
mod input;
mod output;

use hashkit_lib::{digest, hmac, version, Algorithm, HashValue};
use log::{debug, warn};

use clap::Parser;

use crate::error::CliError;
use crate::input::{select_key_source, select_sources};

#[derive(Parser, Debug)]
#[command(version, about = "Compute SHA-2 digests and HMACs")]
struct Args {
    /// Files to hash, reads stdin when none are given
    #[arg(value_name = "file")]
    files: Vec<String>,

    /// sha224, sha256, sha384 or sha512
    #[arg(short, long, value_name = "name")]
    algorithm: Option<String>,

    /// Hash a string instead of files
    #[arg(short, long, value_name = "text")]
    string: Option<String>,

    /// HMAC key
    #[arg(short, long, value_name = "text")]
    key: Option<String>,

    /// Read the HMAC key from a file
    #[arg(long, value_name = "file")]
    key_file: Option<String>,

    /// Prompt for the HMAC key
    #[arg(short = 'p', long, default_value_t = false)]
    key_prompt: bool,

    /// Print results as json
    #[arg(short, long, default_value_t = false)]
    json: bool,

    /// Expected digest as hex, exits with 1 on mismatch
    #[arg(short, long, value_name = "hex")]
    expect: Option<String>,

    /// Copy the last digest to the clipboard
    #[arg(short, long, default_value_t = false)]
    copy: bool,

    /// Print the hashing library versions
    #[arg(long, default_value_t = false)]
    lib_version: bool,
}

fn copy_to_clipboard(text: &str) -> Result<(), CliError> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text)?;

    Ok(())
}

// Ok(false) when an expected digest was given and did not match
fn run(args: Args) -> Result<bool, CliError> {
    if args.lib_version {
        let (primitive, library) = version();
        println!("{}", output::format_version(primitive, library));
        return Ok(true);
    }

    let config = config::get_config();

    let algorithm = match &args.algorithm {
        Some(name) => match name.parse::<Algorithm>() {
            Ok(algorithm) => algorithm,
            Err(error) => return Err(CliError::InvalidArguments(error.to_string())),
        },
        None => config.algorithm,
    };
    let as_json = args.json || config.json;

    let sources = select_sources(&args.files, args.string)?;
    let key = match select_key_source(args.key, args.key_file, args.key_prompt)? {
        Some(source) => Some(source.read()?),
        None => None,
    };

    let expected = match &args.expect {
        Some(hex) if sources.len() != 1 => {
            return Err(CliError::InvalidArguments(format!(
                "expected digest {} given for {} inputs",
                hex,
                sources.len()
            )))
        }
        Some(hex) => Some(HashValue::from_hex(algorithm, hex)?),
        None => None,
    };

    let mut last = None;
    for source in &sources {
        let data = source.read()?;
        debug!("hashing {} ({} bytes)", source.name(), data.len());

        let value = match &key {
            Some(key) => hmac(algorithm, key, &data)?,
            None => digest(algorithm, &data)?,
        };

        if as_json {
            println!("{}", output::format_json(&value, source.name(), key.is_some()));
        } else {
            println!("{}", output::format_line(&value, source.name()));
        }

        last = Some(value);
    }

    if args.copy {
        if let Some(value) = &last {
            copy_to_clipboard(&value.to_hex())?;
        }
    }

    if let (Some(expected), Some(value)) = (expected, last) {
        if expected != value {
            warn!("digest mismatch, expected {}", expected);
            return Ok(false);
        }
    }

    Ok(true)
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    match run(args) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(error) => {
            eprintln!("{}", error);
            std::process::exit(1);
        }
    }
}
