pub(crate) const HELP_FLAGS: &str = "-h, --help";
pub(crate) const HELP_MESSAGE: &str = "Display this help and usage information.";
