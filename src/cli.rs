use clap::Parser;
use std::ffi::OsString;

use crate::error::UsageError;

#[derive(Parser, Debug)]
#[command(name = "tmpl", author, version, about = "Render .tmpl files with JSON data", long_about = None)]
pub struct Cli {
    /// JSON value applied to every template (object, array or scalar)
    #[arg(long, value_name = "JSON", allow_hyphen_values = true)]
    pub data: Option<String>,

    /// Log each rendered file to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Template files; each must end in .tmpl
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,
}

/// Everything a run needs, resolved from the command line.
#[derive(Debug, Clone, Default)]
pub struct Invocation {
    pub paths: Vec<String>,
    pub data: Option<serde_json::Value>,
    pub verbose: bool,
}

impl Invocation {
    /// Resolves the raw process arguments, program name included.
    pub fn from_args<I, T>(args: I) -> Result<Self, UsageError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let cli = Cli::try_parse_from(normalize_args(args))?;
        let data = parse_data(cli.data.as_deref().unwrap_or(""))?;
        Ok(Self {
            paths: cli.paths,
            data,
            verbose: cli.verbose,
        })
    }
}

/// Decodes the `-data` flag. An empty string means no data.
pub fn parse_data(text: &str) -> Result<Option<serde_json::Value>, UsageError> {
    if text.is_empty() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_str(text)?))
}

/// Rewrites Go-style single-dash long flags (`-data`, `-verbose`) to the
/// double-dash form clap expects. Arguments after `--` are left alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    const LONG_FLAGS: [&str; 2] = ["data", "verbose"];

    let mut out = Vec::new();
    let mut flags_done = false;
    for (i, arg) in args.into_iter().map(Into::into).enumerate() {
        if i == 0 || flags_done {
            out.push(arg);
            continue;
        }
        let Some(text) = arg.to_str() else {
            out.push(arg);
            continue;
        };
        if text == "--" {
            flags_done = true;
            out.push(arg);
            continue;
        }
        let rewritten = text.strip_prefix('-').filter(|rest| {
            let name = rest.split_once('=').map_or(*rest, |(name, _)| name);
            LONG_FLAGS.contains(&name)
        });
        match rewritten {
            Some(rest) => out.push(OsString::from(format!("--{rest}"))),
            None => out.push(arg),
        }
    }
    out
}
