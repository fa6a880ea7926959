//! Command-line driver.
//!
//! ```text
//! calcule [--rpn] [--no-opt] [--quiet] <expr> [name=value ...]
//! ```
//!
//! Arguments are parsed by hand. Exit status is 0 on success, 1 when the
//! expression fails to compile or evaluate, and 2 on a usage error.

use std::io::{self, Write};
use std::sync::Once;

use ariadne::{Config, Label, Report, ReportKind, Source};
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{compile, evaluate, format_ratio, optimize, parse_const, render, CompileError, Syntax, Value};

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_USAGE: u8 = 2;

pub const USAGE: &str = "\
Usage: calcule [options] <expr> [name=value ...]

Options:
  --rpn       Read <expr> as postfix (default: infix)
  --no-opt    Evaluate the expression as compiled, without optimizing
  --quiet     Print only the result
  --          Treat every following argument as positional
  -h, --help  Print this message

Bindings use the numeral grammar: 42, -0x1f, 3/4, 1.5e-3.
Set CALCULE_LOG (or RUST_LOG) to enable tracing, e.g. CALCULE_LOG=calc_opt=debug.";

static TRACING_INIT: Once = Once::new();

/// Install a tracing subscriber writing to stderr.
///
/// Filter directives come from `CALCULE_LOG`, else `RUST_LOG`. Nothing is
/// installed when neither is set. Safe to call multiple times.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = match std::env::var("CALCULE_LOG") {
            Ok(directives) => EnvFilter::new(directives),
            Err(_) if std::env::var("RUST_LOG").is_ok() => EnvFilter::from_default_env(),
            Err(_) => return,
        };
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr).with_target(true).with_level(true))
            .with(filter)
            .init();
    });
}

/// Invalid command line.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    #[error("missing expression")]
    MissingExpression,
    #[error("unknown option `{0}`")]
    UnknownOption(String),
    #[error("binding `{0}` is not of the form name=value")]
    BadBinding(String),
    #[error("cannot parse value `{value}` for `{name}`")]
    BadValue { name: String, value: String },
}

/// A parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Run(Options),
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Options {
    pub syntax: Syntax,
    pub optimize: bool,
    pub quiet: bool,
    pub source: String,
    pub bindings: FxHashMap<String, Value>,
}

/// Parse the arguments following the program name.
pub fn parse_args<I>(args: I) -> Result<Command, UsageError>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut options = Options {
        optimize: true,
        ..Options::default()
    };
    let mut source = None;
    let mut flags = true;

    for arg in args {
        let arg: String = arg.into();
        if flags {
            match arg.as_str() {
                "--rpn" => {
                    options.syntax = Syntax::Postfix;
                    continue;
                }
                "--no-opt" => {
                    options.optimize = false;
                    continue;
                }
                "--quiet" | "-q" => {
                    options.quiet = true;
                    continue;
                }
                "-h" | "--help" => return Ok(Command::Help),
                "--" => {
                    flags = false;
                    continue;
                }
                _ if arg.starts_with("--") => return Err(UsageError::UnknownOption(arg)),
                _ => {}
            }
        }
        if source.is_none() {
            source = Some(arg);
        } else {
            let (name, value) = parse_binding(&arg)?;
            options.bindings.insert(name, value);
        }
    }

    options.source = source.ok_or(UsageError::MissingExpression)?;
    Ok(Command::Run(options))
}

fn parse_binding(arg: &str) -> Result<(String, Value), UsageError> {
    let Some((name, text)) = arg.split_once('=') else {
        return Err(UsageError::BadBinding(arg.to_owned()));
    };
    let name = name.trim();
    if name.is_empty() {
        return Err(UsageError::BadBinding(arg.to_owned()));
    }
    let value = parse_const(text.trim()).ok_or_else(|| UsageError::BadValue {
        name: name.to_owned(),
        value: text.to_owned(),
    })?;
    Ok((name.to_owned(), value))
}

/// Compile, optionally optimize, and evaluate. Returns the exit status.
pub fn run(options: &Options, out: &mut impl Write, err: &mut impl Write) -> io::Result<u8> {
    let compiled = match compile(&options.source, options.syntax) {
        Ok(compiled) => compiled,
        Err(error) => {
            report_compile_error(&options.source, &error, err)?;
            return Ok(EXIT_FAILURE);
        }
    };
    if let Some(warning) = &compiled.warning {
        report_compile_error(&options.source, warning, err)?;
    }

    let expr = compiled.expr;
    if !options.quiet {
        writeln!(out, "compiled:  {}", render(&expr))?;
    }
    let expr = if options.optimize {
        let optimized = optimize(&expr);
        if !options.quiet {
            writeln!(out, "optimized: {}", render(&optimized))?;
        }
        optimized
    } else {
        expr
    };

    match evaluate(&expr, &options.bindings) {
        Ok(result) => {
            let result = format_ratio(&result);
            if options.quiet {
                writeln!(out, "{result}")?;
            } else {
                writeln!(out, "result:    {result}")?;
            }
            Ok(EXIT_SUCCESS)
        }
        Err(error) => {
            debug!(code = %error.code(), "evaluation failed");
            writeln!(err, "error[{}]: {error}", error.code())?;
            Ok(EXIT_FAILURE)
        }
    }
}

/// Write a compile error or warning. Errors with a span are rendered with
/// a source snippet, the rest as a single `error[CODE]: message` line.
pub fn report_compile_error(source: &str, error: &CompileError, err: &mut impl Write) -> io::Result<()> {
    let Some(span) = error.span() else {
        let severity = if error.is_warning() { "warning" } else { "error" };
        return writeln!(err, "{severity}[{}]: {error}", error.code());
    };
    let range = span.to_range();
    let last = source.chars().count();
    let start = char_offset(source, range.start).min(last);
    let end = char_offset(source, range.end).clamp(start, last).max(start + 1);
    let kind = if error.is_warning() {
        ReportKind::Warning
    } else {
        ReportKind::Error
    };
    Report::build(kind, (), start)
        .with_config(Config::default().with_color(false))
        .with_code(error.code())
        .with_message(error.to_string())
        .with_label(Label::new(start..end).with_message(label(error)))
        .finish()
        .write(Source::from(source), &mut *err)
}

fn label(error: &CompileError) -> &'static str {
    match error {
        CompileError::BadToken { .. } => "not understood",
        CompileError::BadCall { .. } => "wrong number of arguments",
        CompileError::StackUnderflow { .. } => "not enough operands",
        CompileError::NotImplemented { .. } => "not implemented",
        _ => "here",
    }
}

/// Byte offset to char offset, as ariadne indexes by char.
fn char_offset(source: &str, byte: usize) -> usize {
    match source.get(..byte) {
        Some(prefix) => prefix.chars().count(),
        None => source.chars().count(),
    }
}

#[cfg(test)]
mod tests;
