//! # Command Line Interface
//!
//! Defines the CLI structure for label-gate. Both subcommands resolve into the
//! same [`GateConfig`] and share one gate implementation.

mod check;
mod ci;

use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{ArgAction, Parser, Subcommand};
use label_gate_gh::consts::API_BASE_URL;

pub use self::check::CheckArgs;
pub use self::ci::CiArgs;
use crate::clients::GitHubSource;
use crate::config::{CiEnvironment, GateConfig};
use crate::consts::ENV_GITHUB_API_URL;
use crate::gate::{GateError, Verdict, evaluate};
use crate::utils::output::ColorMode;

/// Top-level CLI command for label-gate
#[derive(Parser)]
#[command(name = "label-gate")]
#[command(about = "Fail a CI build unless the pull request carries the required labels")]
#[command(
  long_about = "Fetches a GitHub pull request and checks that every required label is attached.\n\n\
        Exit codes: 0 labels matched (or default branch), 1 labels missing,\n\
        2 GitHub could not provide the pull request, 3 no pull request could be identified."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(propagate_version = true)]
#[command(subcommand_required(true))]
#[command(disable_help_subcommand = true)]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightGreen.on_default().bold().underline())
    .usage(AnsiColor::Green.on_default().bold())
    .literal(AnsiColor::BrightGreen.on_default().bold())
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
    .valid(AnsiColor::Green.on_default())
    .invalid(AnsiColor::BrightRed.on_default().bold())
)]
pub struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    global = true,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Controls when colored output is used
  #[arg(
    long,
    value_enum,
    ignore_case = true,
    global = true,
    default_value_t = ColorMode::Auto,
  )]
  pub colors: ColorMode,

  /// Root of the GitHub REST API
  #[arg(long, global = true, env = ENV_GITHUB_API_URL, default_value = API_BASE_URL, value_name = "URL")]
  pub api_url: String,

  /// Subcommands
  #[command(subcommand)]
  pub command: Commands,
}

/// Subcommands for label-gate
#[derive(Subcommand)]
pub enum Commands {
  /// Check the pull request of the current CI build
  #[command(long_about = "Check the pull request of the current CI build.\n\n\
            Organization, project and pull request are taken from CIRCLE_PROJECT_USERNAME,\n\
            CIRCLE_PROJECT_REPONAME and CIRCLE_PULL_REQUEST, falling back to --org, --project\n\
            and --pr. Builds on a default branch (CIRCLE_BRANCH listed in DEFAULT_BRANCHES,\n\
            default development,staging,master) pass without a check.")]
  Ci(CiArgs),

  /// Check an explicitly named pull request
  #[command(long_about = "Check an explicitly named pull request.\n\n\
            Organization, project, pull request number and labels are all given as\n\
            arguments. No default-branch bypass applies.")]
  Check(CheckArgs),
}

impl Cli {
  /// Merge the parsed arguments with the environment snapshot
  pub fn resolve(&self, env: &CiEnvironment) -> GateConfig {
    match &self.command {
      Commands::Ci(args) => args.resolve(env, &self.api_url),
      Commands::Check(args) => args.resolve(env, &self.api_url),
    }
  }
}

/// Handle the parsed command line and run the gate once
pub fn handle_cli(cli: Cli) -> Result<Verdict, GateError> {
  cli.colors.apply();

  let env = CiEnvironment::from_env();
  let config = cli.resolve(&env);
  let source = GitHubSource::from_config(&config);

  evaluate(&config, &source)
}
