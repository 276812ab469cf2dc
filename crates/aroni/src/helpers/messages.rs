//! Print messages to the terminal.
use colored::Colorize;

/// Print a success message.
pub fn success(msg: impl AsRef<str>) {
    println!("{} {}", "✓".green(), msg.as_ref());
}

/// Print an informational message.
pub fn info(msg: impl AsRef<str>) {
    println!("{}", msg.as_ref().bold());
}

/// Print an error message to stderr and exit the process.
pub fn fail(msg: impl AsRef<str>) -> ! {
    eprintln!("{} {}", "error:".red(), msg.as_ref());
    std::process::exit(1);
}
