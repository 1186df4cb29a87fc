use crate::*;
use crate::config::{self, Config};
use clap::{builder::BoolishValueParser, ArgAction, Parser};
use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};
use tracing::debug;

/// Decompress a gzipped JSON file and open it in your editor
#[derive(Debug, Parser)]
#[command(name = "jsonx", version)]
pub struct Args {
    /// Pretty-print the output with tabs; `-p=false` writes compact JSON
    #[arg(
        short,
        long,
        value_name = "BOOL",
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new(),
        default_value_t = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub pretty: bool,

    /// Save NAME as the editor to open files with, then exit
    #[arg(long, value_name = "NAME", default_value = "")]
    pub default_editor: String,

    /// Write here instead of next to the input
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print the output path instead of launching the editor
    #[arg(long)]
    pub no_open: bool,

    /// Gzip-compressed JSON file
    pub file: Option<PathBuf>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Mode {
    /// Persist a new editor preference. No file is touched.
    SetEditor(String),
    Process {
        input: PathBuf,
        output: Option<PathBuf>,
        pretty: bool,
        open: bool,
    },
}

impl Args {
    /// Parses the process arguments, accepting the single-dash spelling of
    /// `--default-editor` as well.
    pub fn from_env() -> Self {
        Self::parse_from(normalize(std::env::args_os()))
    }

    /// A non-empty `--default-editor` wins over everything else.
    #[throws]
    pub fn mode(self) -> Mode {
        match (self.default_editor, self.file) {
            (editor, _) if !editor.is_empty() => Mode::SetEditor(editor),
            (_, Some(input)) => Mode::Process {
                input,
                output: self.output,
                pretty: self.pretty,
                open: !self.no_open,
            },
            (_, None) => throw!(Error::Usage(
                "missing filename argument, see --help".to_string()
            )),
        }
    }
}

/// Rewrites `-default-editor` and `-default-editor=NAME` to their `--` form.
/// Arguments after a `--` terminator are left alone.
pub fn normalize<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    let mut terminated = false;
    args.into_iter()
        .map(|arg| {
            let arg: OsString = arg.into();
            let single_dash = !terminated
                && arg.to_str().map_or(false, |flag| {
                    flag == "-default-editor" || flag.starts_with("-default-editor=")
                });
            terminated = terminated || arg == "--";
            if single_dash {
                let mut long = OsString::from("-");
                long.push(arg);
                long
            } else {
                arg
            }
        })
        .collect()
}

/// Runs `mode` against the config file at `config_path`, returning the
/// decompressed file in process mode.
#[throws]
pub fn run(mode: Mode, config_path: &Path) -> Option<PathBuf> {
    match mode {
        Mode::SetEditor(editor) => {
            config::save_to(config_path, &Config::new(editor))?;
            None
        }
        Mode::Process {
            input,
            output,
            pretty,
            open,
        } => {
            let config = config::load_from(config_path)?;
            debug!("Using editor {:?}", config.editor);

            let output = match output {
                Some(output) => {
                    pipeline::process_to(&input, &output, pretty)?;
                    output
                }
                None => pipeline::process(&input, pretty)?,
            };

            if open {
                launcher::launch(&config.editor, &output)?;
            } else {
                println!("{}", output.display());
            }
            Some(output)
        }
    }
}
