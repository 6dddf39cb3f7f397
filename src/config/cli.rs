use crate::config::toml_config::DemConfig;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use std::ffi::{OsStr, OsString};

#[derive(Debug, Clone, Parser)]
#[command(name = "demapp")]
#[command(about = "DEMApp - Discrete Element Method Application")]
#[command(version)]
pub struct CliConfig {
    /// Simulation input file; prompts for it when omitted.
    /// A path starting with '-' must come after `--`, e.g. `demapp -- -case.inp`
    #[arg(value_name = "INPUT_FILE", trailing_var_arg = true)]
    pub args: Vec<OsString>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Longest accepted input path in bytes (0 removes the limit)
    #[arg(long)]
    pub max_path_length: Option<usize>,

    /// Do not print the banner before prompting
    #[arg(long)]
    pub no_banner: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,
}

impl CliConfig {
    /// Argument list in process order: `program` followed by the positionals.
    pub fn argv(&self, program: &OsStr) -> Vec<OsString> {
        std::iter::once(program.to_os_string())
            .chain(self.args.iter().cloned())
            .collect()
    }

    /// Defaults, then the `--config` file, then command-line overrides.
    pub fn load_config(&self) -> Result<DemConfig> {
        let mut config = match &self.config {
            Some(path) => DemConfig::from_file(path)?,
            None => DemConfig::default(),
        };

        if let Some(max) = self.max_path_length {
            config.input.max_path_length = max;
        }
        if self.no_banner {
            config.console.show_banner = false;
        }

        config.validate()?;
        Ok(config)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}
