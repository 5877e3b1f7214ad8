//! Convert the structure tree of a tagged document to HTML.
//!
//! Usage:
//!   pdfstructtohtml [--opw PASSWORD] [--upw PASSWORD] <INPUT> [OUTPUT]
//!
//! INPUT is a structure dump, or `-` for standard input. Without OUTPUT the
//! HTML goes to standard output. Set `RUST_LOG=debug` for diagnostics.

use clap::error::ErrorKind;
use clap::Parser;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tagged_html::{Error, HtmlOptions, OpenOptions, TaggedDocument};

/// Process exit statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
enum Exit {
    Success = 0,
    OpenFailed = 1,
    OutputFailed = 2,
    WrongPassword = 3,
    NotTagged = 4,
    Usage = 99,
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        ExitCode::from(exit as u8)
    }
}

#[derive(Parser)]
#[command(name = "pdfstructtohtml")]
#[command(about = "Convert the logical structure of a tagged PDF to HTML")]
#[command(version)]
struct Cli {
    /// Owner password (for encrypted files)
    #[arg(long = "opw", visible_alias = "owner-password", value_name = "PASSWORD")]
    owner_password: Option<String>,

    /// User password (for encrypted files)
    #[arg(long = "upw", visible_alias = "user-password", value_name = "PASSWORD")]
    user_password: Option<String>,

    /// Input structure dump, `-` for standard input
    input: PathBuf,

    /// Output HTML file (default: standard output)
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => Exit::Success,
                _ => Exit::Usage,
            }
            .into();
        },
    };

    run(&cli).into()
}

fn run(cli: &Cli) -> Exit {
    let mut options = OpenOptions::new();
    if let Some(password) = &cli.owner_password {
        options = options.with_owner_password(password);
    }
    if let Some(password) = &cli.user_password {
        options = options.with_user_password(password);
    }

    let doc = match TaggedDocument::open(&cli.input, &options) {
        Ok(doc) => doc,
        Err(Error::WrongPassword) => {
            eprintln!("Error: incorrect password for {}", cli.input.display());
            return Exit::WrongPassword;
        },
        Err(e) => {
            eprintln!("Error: cannot open {}: {}", cli.input.display(), e);
            return Exit::OpenFailed;
        },
    };

    // Converted in memory first so an untagged document never creates the output file
    let html = match doc.to_html(&HtmlOptions::default()) {
        Ok(html) => html,
        Err(Error::NoStructureTree) => {
            eprintln!("{}: document is not tagged, nothing to convert", cli.input.display());
            return Exit::NotTagged;
        },
        Err(e) => {
            eprintln!("Error: {}", e);
            return Exit::OpenFailed;
        },
    };

    let written = match &cli.output {
        Some(path) => write_file(path, &html),
        None => std::io::stdout()
            .lock()
            .write_all(html.as_bytes())
            .map_err(|source| Error::OutputUnavailable {
                path: PathBuf::from("<stdout>"),
                source,
            }),
    };

    match written {
        Ok(()) => Exit::Success,
        Err(e) => {
            eprintln!("Error: {}", e);
            Exit::OutputFailed
        },
    }
}

fn write_file(path: &Path, html: &str) -> Result<(), Error> {
    let to_error = |source| Error::OutputUnavailable {
        path: path.to_path_buf(),
        source,
    };
    let mut file = std::fs::File::create(path).map_err(to_error)?;
    file.write_all(html.as_bytes()).map_err(to_error)?;
    log::debug!("Wrote {} bytes to {}", html.len(), path.display());
    Ok(())
}
