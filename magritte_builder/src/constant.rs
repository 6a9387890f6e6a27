pub(crate) const HELP_NAME: &str = "help";
pub(crate) const HELP_MESSAGE: &str = "Show this help message and exit.";

// Token vocabulary for `-name VALUE` boolean syntax.
pub(crate) const TRUTHY: [&str; 6] = ["y", "yes", "t", "true", "on", "1"];
pub(crate) const FALSY: [&str; 6] = ["n", "no", "f", "false", "off", "0"];

pub(crate) const NONE_TOKEN: &str = "None";
