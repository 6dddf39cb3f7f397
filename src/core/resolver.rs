use crate::config::toml_config::DemConfig;
use crate::domain::model::{InputFileReference, InputSource};
use crate::domain::ports::Console;
use crate::utils::error::{DemError, Result};
use std::ffi::OsStr;

pub const BANNER: &str = concat!(
    "\n\n",
    "\t --------------------------------------------   \n",
    "\t DEMApp - Discrete Element Method Application   \n",
    "\t -------------------------------------------- \n\n",
);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverSettings {
    pub max_path_length: Option<usize>,
    pub show_banner: bool,
    pub prompt: String,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self::from(&DemConfig::default())
    }
}

impl From<&DemConfig> for ResolverSettings {
    fn from(config: &DemConfig) -> Self {
        Self {
            max_path_length: config.input.capacity(),
            show_banner: config.console.show_banner,
            prompt: config.console.prompt.clone(),
        }
    }
}

/// Decides which file the run works on: the first command-line argument
/// when there is one, otherwise whatever the user types at the prompt.
pub struct InputResolver<C: Console> {
    console: C,
    settings: ResolverSettings,
}

impl<C: Console> InputResolver<C> {
    pub fn new(console: C, settings: ResolverSettings) -> Self {
        Self { console, settings }
    }

    pub fn into_console(self) -> C {
        self.console
    }

    /// `args` is the full argument list, program name first. Tokens may be
    /// any OS string; the first one after the program name is kept byte for byte.
    pub fn resolve_input_file<A: AsRef<OsStr>>(
        &mut self,
        args: &[A],
    ) -> Result<InputFileReference> {
        match args.get(1) {
            Some(token) => self.take_argument(token.as_ref(), &args[2..]),
            None => self.ask_user(),
        }
    }

    fn take_argument<A: AsRef<OsStr>>(
        &self,
        token: &OsStr,
        ignored: &[A],
    ) -> Result<InputFileReference> {
        if !ignored.is_empty() {
            let extras: Vec<_> = ignored
                .iter()
                .map(|a| a.as_ref().to_string_lossy())
                .collect();
            tracing::warn!(
                "Ignoring {} extra argument(s): {}",
                ignored.len(),
                extras.join(" ")
            );
        }

        let reference = InputFileReference::new(
            token,
            InputSource::CommandLine,
            self.settings.max_path_length,
        )?;
        tracing::debug!("Input file taken from the command line: {}", reference);
        Ok(reference)
    }

    fn ask_user(&mut self) -> Result<InputFileReference> {
        tracing::debug!("No input file argument, prompting");

        if self.settings.show_banner {
            self.console.write_banner(BANNER)?;
        }

        let line = self
            .console
            .prompt_line(&self.settings.prompt)?
            .ok_or(DemError::MissingInput)?;

        let reference = InputFileReference::from_bytes(
            line.trim_ascii().to_vec(),
            InputSource::Interactive,
            self.settings.max_path_length,
        )?;
        tracing::debug!("Input file entered at the prompt: {}", reference);
        Ok(reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Scripted console that records what was shown.
    #[derive(Default)]
    struct ScriptedConsole {
        lines: Vec<Vec<u8>>,
        shown: String,
    }

    impl ScriptedConsole {
        fn with_lines(lines: &[&str]) -> Self {
            Self {
                lines: lines.iter().rev().map(|l| l.as_bytes().to_vec()).collect(),
                shown: String::new(),
            }
        }
    }

    impl Console for ScriptedConsole {
        fn write_banner(&mut self, banner: &str) -> Result<()> {
            self.shown.push_str(banner);
            Ok(())
        }

        fn prompt_line(&mut self, prompt: &str) -> Result<Option<Vec<u8>>> {
            self.shown.push_str(prompt);
            Ok(self.lines.pop())
        }
    }

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_command_line_argument_is_used_verbatim() {
        let mut resolver = InputResolver::new(ScriptedConsole::default(), ResolverSettings::default());
        let reference = resolver
            .resolve_input_file(&args(&["demapp", " case1.inp "]))
            .unwrap();

        assert_eq!(reference.to_str(), Some(" case1.inp "));
        assert_eq!(reference.source(), InputSource::CommandLine);
        assert!(resolver.into_console().shown.is_empty());
    }

    #[test]
    fn test_extra_arguments_are_ignored() {
        let mut resolver = InputResolver::new(ScriptedConsole::default(), ResolverSettings::default());
        let reference = resolver
            .resolve_input_file(&args(&["demapp", "a.inp", "b.inp", "--flag"]))
            .unwrap();
        assert_eq!(reference.to_str(), Some("a.inp"));
    }

    #[test]
    fn test_prompt_shows_banner_then_prompt() {
        let console = ScriptedConsole::with_lines(&["  model.dem  "]);
        let mut resolver = InputResolver::new(console, ResolverSettings::default());
        let reference = resolver.resolve_input_file(&args(&["demapp"])).unwrap();

        assert_eq!(reference.to_str(), Some("model.dem"));
        assert_eq!(reference.source(), InputSource::Interactive);
        assert_eq!(
            resolver.into_console().shown,
            format!("{}Enter input file name: ", BANNER)
        );
    }

    #[test]
    fn test_banner_can_be_suppressed() {
        let settings = ResolverSettings {
            show_banner: false,
            prompt: "> ".to_string(),
            ..ResolverSettings::default()
        };
        let mut resolver = InputResolver::new(ScriptedConsole::with_lines(&["x.inp"]), settings);
        resolver.resolve_input_file(&args(&["demapp"])).unwrap();
        assert_eq!(resolver.into_console().shown, "> ");
    }

    #[test]
    fn test_end_of_input_is_missing_input() {
        let mut resolver = InputResolver::new(ScriptedConsole::default(), ResolverSettings::default());
        let err = resolver.resolve_input_file(&args(&["demapp"])).unwrap_err();
        assert!(matches!(err, DemError::MissingInput));
    }

    #[test]
    fn test_blank_line_is_missing_input() {
        let console = ScriptedConsole::with_lines(&["   "]);
        let mut resolver = InputResolver::new(console, ResolverSettings::default());
        assert!(matches!(
            resolver.resolve_input_file(&args(&["demapp"])),
            Err(DemError::MissingInput)
        ));
    }

    #[test]
    fn test_empty_argument_list_prompts() {
        let console = ScriptedConsole::with_lines(&["fallback.inp"]);
        let mut resolver = InputResolver::new(console, ResolverSettings::default());
        let reference = resolver.resolve_input_file::<String>(&[]).unwrap();
        assert_eq!(reference.to_str(), Some("fallback.inp"));
    }

    #[test]
    fn test_long_paths_fail_in_both_branches() {
        let long = "p".repeat(81);

        let mut resolver = InputResolver::new(ScriptedConsole::default(), ResolverSettings::default());
        assert!(matches!(
            resolver.resolve_input_file(&args(&["demapp", long.as_str()])),
            Err(DemError::PathTooLong { length: 81, max: 80 })
        ));

        let console = ScriptedConsole::with_lines(&[long.as_str()]);
        let mut resolver = InputResolver::new(console, ResolverSettings::default());
        assert!(matches!(
            resolver.resolve_input_file(&args(&["demapp"])),
            Err(DemError::PathTooLong { .. })
        ));
    }

    #[test]
    fn test_settings_follow_config() {
        let mut config = DemConfig::default();
        config.input.max_path_length = 0;
        config.console.prompt = "File: ".to_string();

        let settings = ResolverSettings::from(&config);
        assert_eq!(settings.max_path_length, None);
        assert_eq!(settings.prompt, "File: ");
        assert!(settings.show_banner);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_paths_survive_both_branches() {
        use std::ffi::OsString;
        use std::os::unix::ffi::{OsStrExt, OsStringExt};

        let token = OsString::from_vec(b"case\xff.inp".to_vec());
        let mut resolver = InputResolver::new(ScriptedConsole::default(), ResolverSettings::default());
        let reference = resolver
            .resolve_input_file(&[OsString::from("demapp"), token])
            .unwrap();
        assert_eq!(reference.as_os_str().as_bytes(), b"case\xff.inp");

        let console = ScriptedConsole {
            lines: vec![b"  ca\xffse.inp \t".to_vec()],
            shown: String::new(),
        };
        let mut resolver = InputResolver::new(console, ResolverSettings::default());
        let reference = resolver.resolve_input_file(&args(&["demapp"])).unwrap();
        assert_eq!(reference.as_os_str().as_bytes(), b"ca\xffse.inp");
        assert_eq!(reference.source(), InputSource::Interactive);
    }
}
