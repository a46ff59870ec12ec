// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use std::{env, path::PathBuf};

use crate::commands::{self, run::RunOptions};
use crate::infra::t;

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for a `--lang <VALUE>` argument.
fn pre_parse_language() -> String {
    let args: Vec<String> = env::args().collect();
    if let Some(pos) = args.iter().position(|arg| arg == "--lang") {
        if let Some(lang) = args.get(pos + 1) {
            return lang.clone();
        }
    }
    // Fallback to system language detection
    sys_locale::get_locale().unwrap_or_else(|| "en".to_string())
}

fn build_cli(locale: &str) -> Command {
    Command::new("gui-test-runner")
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli_about", locale = locale).to_string())
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli_lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help(t!("arg_config", locale = locale).to_string())
                .value_name("CONFIG")
                .default_value("tools/build_test_gui.toml")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("root")
                .long("root")
                .help(t!("arg_root", locale = locale).to_string())
                .value_name("ROOT")
                .default_value(".")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("artifact-dir")
                .long("artifact-dir")
                .help(t!("arg_artifact_dir", locale = locale).to_string())
                .value_name("ARTIFACT_DIR")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("header")
                .long("header")
                .help(t!("arg_header", locale = locale).to_string())
                .value_name("HEADER")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("platform")
                .long("platform")
                .help(t!("arg_platform", locale = locale).to_string())
                .value_name("PLATFORM")
                .default_value(env::consts::OS)
                .action(ArgAction::Set),
        )
}

pub async fn run() -> Result<()> {
    // Pre-parse language and initialize i18n first.
    let language = pre_parse_language();
    rust_i18n::set_locale(&language);

    let matches = build_cli(&language).get_matches();

    let config = matches
        .get_one::<PathBuf>("config")
        .unwrap() // Has default
        .clone();
    let root = matches
        .get_one::<PathBuf>("root")
        .unwrap() // Has default
        .clone();
    let artifact_dir = matches.get_one::<PathBuf>("artifact-dir").cloned();
    let header = matches.get_one::<PathBuf>("header").cloned();
    let platform = matches
        .get_one::<String>("platform")
        .unwrap() // Has default
        .clone();

    commands::run::execute(RunOptions {
        config,
        root,
        artifact_dir,
        header,
        platform,
    })
    .await?;

    Ok(())
}
