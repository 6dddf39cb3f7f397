use crate::utils::error::Result;

/// Terminal the resolver talks to in interactive mode.
pub trait Console {
    fn write_banner(&mut self, banner: &str) -> Result<()>;

    /// Shows `prompt` and reads one line as raw bytes. `Ok(None)` means end
    /// of input. The returned line has its terminator removed.
    fn prompt_line(&mut self, prompt: &str) -> Result<Option<Vec<u8>>>;
}

impl<C: Console + ?Sized> Console for &mut C {
    fn write_banner(&mut self, banner: &str) -> Result<()> {
        (**self).write_banner(banner)
    }

    fn prompt_line(&mut self, prompt: &str) -> Result<Option<Vec<u8>>> {
        (**self).prompt_line(prompt)
    }
}
