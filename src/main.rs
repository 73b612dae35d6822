//! # hasm - An assembler for the Hadron Assembly Language
//!
//! HASM is the assembly dialect of the Hadron CPU, a processor built inside
//! Minecraft. The goal of this crate is to turn HASM source files into machine
//! code and, optionally, into Minecraft schematics that can be pasted next to
//! the CPU's program memory.
//!
//! ## State
//!
//! Only the lexical front-end exists so far: source files are read, tokenized
//! and checked, and any lexical problem is reported with the offending line and
//! a caret under the offending column. The parser, encoder, symbol resolution
//! and output writers will consume the [token](hasm::token::tokens::Token)
//! stream produced here.
//!
//! ## Diagnostics
//!
//! Diagnostics are written to standard error through `tracing`. Warnings can
//! be tuned with `-W`:
//!
//! - `-Wall` shows every warning.
//! - `-Werr` displays warnings as errors. This does not change the exit status.
//! - `-Wmultiline-strings` / `-Wno-multiline-strings` toggle the warning about
//!   string literals continued over several lines (on by default).
//!
//! Fatal errors end the process, with an exit status that identifies the
//! cause (see [`ErrorId`](hasm::errors::ErrorId)).
//!
//! ## Guidelines
//!
//! - `#![deny(warnings)]`, including most optional lints and also a lot from clippy.
//!   Circumventing these via `#[expect(...)]` should be taken as a last precaution,
//!   where the alternative would complicate or make the code less readable.
//! - Every diagnostic carries an identifier that tooling can rely on.
#![deny(
    warnings,
)]
#![deny(
    future_incompatible,
    keyword_idents,
    let_underscore,
    nonstandard_style,
    refining_impl_trait,
)]
#![deny(
    rust_2018_compatibility,
    rust_2021_compatibility,
    rust_2024_compatibility,
)]
#![deny(
    clippy::all,
    clippy::pedantic,
)]
#![deny(
    clippy::absolute_paths,
    clippy::alloc_instead_of_core,
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::arithmetic_side_effects,
    clippy::as_conversions,
    clippy::as_underscore,
    clippy::assertions_on_result_states,
    clippy::big_endian_bytes,
    clippy::cfg_not_test,
    clippy::clone_on_ref_ptr,
    clippy::create_dir,
    clippy::dbg_macro,
    clippy::decimal_literal_representation,
    clippy::default_numeric_fallback,
    clippy::default_union_representation,
    clippy::deref_by_slicing,
    clippy::disallowed_script_idents,
    clippy::else_if_without_else,
    clippy::empty_drop,
    clippy::empty_enum_variants_with_brackets,
    clippy::empty_structs_with_brackets,
    clippy::error_impl_error,
    clippy::exhaustive_enums,
    clippy::exhaustive_structs,
    clippy::exit,
    clippy::field_scoped_visibility_modifiers,
    clippy::filetype_is_file,
    clippy::float_arithmetic,
    clippy::float_cmp_const,
    clippy::fn_to_numeric_cast_any,
    clippy::get_unwrap,
    clippy::host_endian_bytes,
    clippy::if_then_some_else_none,
    clippy::impl_trait_in_params,
    clippy::indexing_slicing,
    clippy::infinite_loop,
    clippy::inline_asm_x86_att_syntax,
    clippy::inline_asm_x86_intel_syntax,
    clippy::integer_division,
    clippy::integer_division_remainder_used,
    clippy::iter_over_hash_type,
    clippy::large_include_file,
    clippy::let_underscore_must_use,
    clippy::let_underscore_untyped,
    clippy::little_endian_bytes,
    clippy::lossy_float_literal,
    clippy::map_err_ignore,
    clippy::mem_forget,
    clippy::min_ident_chars,
    clippy::missing_assert_message,
    clippy::missing_asserts_for_indexing,
    clippy::missing_docs_in_private_items,
    clippy::missing_inline_in_public_items,
    clippy::missing_trait_methods,
    clippy::mixed_read_write_in_expression,
    clippy::module_name_repetitions,
    clippy::modulo_arithmetic,
    clippy::multiple_inherent_impl,
    clippy::multiple_unsafe_ops_per_block,
    clippy::mutex_atomic,
    clippy::mutex_integer,
    clippy::needless_raw_strings,
    clippy::non_ascii_literal,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::partial_pub_fields,
    clippy::pathbuf_init_then_push,
    clippy::pattern_type_mismatch,
    clippy::pub_with_shorthand,
    clippy::pub_without_shorthand,
    clippy::rc_buffer,
    clippy::rc_mutex,
    clippy::redundant_type_annotations,
    clippy::renamed_function_params,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::same_name_method,
    clippy::self_named_module_files,
    clippy::semicolon_inside_block,
    clippy::semicolon_outside_block,
    clippy::separated_literal_suffix,
    clippy::single_char_lifetime_names,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    clippy::str_to_string,
    clippy::string_add,
    clippy::string_lit_chars_any,
    clippy::string_slice,
    clippy::string_to_string,
    clippy::suspicious_xor_used_as_pow,
    clippy::tests_outside_test_module,
    clippy::todo,
    clippy::try_err,
    clippy::undocumented_unsafe_blocks,
    clippy::unimplemented,
    clippy::unnecessary_safety_comment,
    clippy::unnecessary_safety_doc,
    clippy::unnecessary_self_imports,
    clippy::unneeded_field_pattern,
    clippy::unreachable,
    clippy::unused_result_ok,
    clippy::unwrap_in_result,
    clippy::unwrap_used,
    clippy::verbose_file_reads,
    clippy::wildcard_enum_match_arm
)]
#![warn(unused)]
#![allow(
    edition_2024_expr_fragment_specifier,
    reason = "the macros expect the 2024 edition behaviour."
)]
pub mod hasm;

use clap::{ArgAction, ArgGroup, Parser, ValueEnum};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use hasm::diagnostic::{self, Diagnostics};
use hasm::diagnostic::warnings::WarningSet;
use hasm::errors::AssemblyError;
use hasm::token::lexer;

use std::fs;
use std::io::{IsTerminal, stderr};
use std::path::{Path, PathBuf};
use std::process::{ExitCode, Termination};

/// Load a file and run it through the front-end.
// TODO: Hand the tokens to the parser once it exists.
fn run_file(path: &Path, warnings: WarningSet, print_tokens: bool) -> Result<(), AssemblyError> {
    let name = path.display().to_string();
    // The file handle is closed before scanning starts.
    let source = fs::read_to_string(path).map_err(|err| {
        let err = AssemblyError::from_io(path.to_owned(), err);
        diagnostic::error(Some(name.as_str()), &err, err.id());
        err
    })?;
    tracing::info!(file = name.as_str(), bytes = source.len(), "loaded source");

    let mut diag = Diagnostics::new(&name, &source, warnings);
    let tokens = lexer::tokenize(&mut diag)?;

    if print_tokens {
        for token in &tokens {
            println!("{token}");
        }
    }
    Ok(())
}

/// Installs the stderr subscriber all diagnostics go to.
///
/// `HASM_LOG` takes precedence over the level derived from the
/// command line.
fn init_logging(level: &str) -> Result<(), AssemblyError> {
    let filter = EnvFilter::try_from_env("HASM_LOG").unwrap_or_else(|_| EnvFilter::new(level));
    let layer = fmt::layer()
        .with_writer(stderr)
        .with_ansi(stderr().is_terminal())
        .with_target(false)
        .without_time();

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|err| AssemblyError::LoggerSetup(err.to_string()))
}

/// Isomorphic to `Result<T, AssemblyError>`,
/// this allows for overriding the [Termination]
/// trait impl and report custom exit codes instead.
///
/// As this is only supposed to be used on the very
/// outer shell, T defaults to `()`.
#[derive(Debug)]
enum EngineResult<T = ()> {
    /// Ok variant.
    Ok(T),
    /// Error variant, already reported to the user.
    Err(AssemblyError),
}

impl Termination for EngineResult {
    fn report(self) -> ExitCode {
        match self {
            EngineResult::Ok(()) => ExitCode::SUCCESS,
            EngineResult::Err(err) => {
                tracing::info!("compilation terminated.");
                err.into()
            }
        }
    }
}

impl<T, E> From<Result<T, E>> for EngineResult<T>
where
    AssemblyError: From<E>,
{
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(value) => EngineResult::Ok(value),
            Err(err) => EngineResult::Err(err.into()),
        }
    }
}

/// Assemble Hadron Assembly Language source file(s) into machine code
/// and/or Minecraft schematics.
///
/// For now, source files are tokenized and checked for lexical errors.
#[derive(Parser, Debug)]
#[command(name = "hasm", version, about, long_about = None)]
#[command(group(ArgGroup::new("log-level").args(["debug", "verbose", "quiet"])))]
struct HasmArgs {
    /// Print out debug information, including every token.
    #[arg(short, long)]
    debug: bool,

    /// Print out additional information. Can be used multiple times.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except for errors.
    #[arg(short, long)]
    quiet: bool,

    /// Enable a warning or warning policy, e.g. -Wall or -Werr.
    #[arg(
        short = 'W',
        value_name = "WARNING",
        value_enum,
        action = ArgAction::Append,
        value_delimiter = ',',
        env = "HASM_WARNINGS"
    )]
    warnings: Vec<WarningFlag>,

    /// Print the token stream of each file to standard output.
    #[arg(short, long)]
    tokens: bool,

    /// Input files to assemble.
    #[arg(required = true, value_name = "FILE")]
    files: Vec<PathBuf>,
}

impl HasmArgs {
    /// The log filter directive selected by -d/-v/-q.
    fn log_level(&self) -> &'static str {
        if self.debug {
            "trace"
        } else if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                _ => "debug",
            }
        }
    }

    /// The enabled-warning set, starting from the default-on warnings.
    fn warning_set(&self) -> WarningSet {
        self.warnings
            .iter()
            .fold(WarningSet::DEFAULT, |set, flag| match *flag {
                WarningFlag::All => set | WarningSet::ALL,
                WarningFlag::Error => set | WarningSet::AS_ERRORS,
                WarningFlag::MultilineStrings => set | WarningSet::MULTILINE_STRINGS,
                WarningFlag::NoMultilineStrings => set - WarningSet::MULTILINE_STRINGS,
            })
    }
}

/// Values accepted by `-W`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum WarningFlag {
    /// Print out all encountered warnings.
    All,
    /// Display warnings as errors.
    #[value(name = "err")]
    Error,
    /// Warn about string literals spanning several lines (default).
    MultilineStrings,
    /// Do not warn about string literals spanning several lines.
    NoMultilineStrings,
}

/// Parses the command line, sets up logging and assembles every file
/// in order, stopping at the first fatal error.
fn main() -> EngineResult {
    let args = HasmArgs::parse();

    if let Err(err) = init_logging(args.log_level()) {
        eprintln!("{err}");
        return EngineResult::Err(err);
    }
    tracing::debug!(?args, "parsed command line");

    let warnings = args.warning_set();
    args.files
        .iter()
        .try_for_each(|path| run_file(path, warnings, args.tokens))
        .into()
}

#[cfg(test)]
mod test {
    use clap::{CommandFactory, Parser};

    use super::{HasmArgs, WarningFlag};
    use crate::hasm::diagnostic::warnings::WarningSet;

    fn parse(args: &[&str]) -> HasmArgs {
        HasmArgs::try_parse_from(args).expect("valid command line")
    }

    #[test]
    fn command_is_consistent() {
        HasmArgs::command().debug_assert();
    }

    #[test]
    fn attached_warning_flags() {
        let args = parse(&["hasm", "-Wall", "-Werr", "main.hasm"]);
        assert_eq!(args.warnings, vec![WarningFlag::All, WarningFlag::Error]);
        assert_eq!(
            args.warning_set(),
            WarningSet::DEFAULT | WarningSet::ALL | WarningSet::AS_ERRORS
        );
    }

    #[test]
    fn multiline_warning_is_default_on() {
        assert_eq!(parse(&["hasm", "a.hasm"]).warning_set(), WarningSet::DEFAULT);
        assert_eq!(
            parse(&["hasm", "-Wno-multiline-strings", "a.hasm"]).warning_set(),
            WarningSet::empty()
        );
        assert_eq!(
            parse(&["hasm", "-Wno-multiline-strings", "-Wmultiline-strings", "a.hasm"])
                .warning_set(),
            WarningSet::MULTILINE_STRINGS
        );
    }

    #[test]
    fn log_levels() {
        assert_eq!(parse(&["hasm", "a.hasm"]).log_level(), "warn");
        assert_eq!(parse(&["hasm", "-v", "a.hasm"]).log_level(), "info");
        assert_eq!(parse(&["hasm", "-vv", "a.hasm"]).log_level(), "debug");
        assert_eq!(parse(&["hasm", "-q", "a.hasm"]).log_level(), "error");
        assert_eq!(parse(&["hasm", "-d", "a.hasm"]).log_level(), "trace");
    }

    #[test]
    fn log_level_flags_are_exclusive() {
        assert!(HasmArgs::try_parse_from(["hasm", "-d", "-q", "a.hasm"]).is_err());
        assert!(HasmArgs::try_parse_from(["hasm", "-v", "-q", "a.hasm"]).is_err());
    }

    #[test]
    fn files_are_required() {
        assert!(HasmArgs::try_parse_from(["hasm"]).is_err());
        assert!(HasmArgs::try_parse_from(["hasm", "-Wbogus", "a.hasm"]).is_err());
    }
}
