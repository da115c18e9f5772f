#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    /// 0 prints everything, 1 prints bare results, 2 also hides warnings.
    pub quiet: u8,
    /// Skips the version banner.
    pub no_banner: bool,
}

impl Config {
    pub fn is_quiet(&self) -> bool {
        self.quiet > 0
    }
}
