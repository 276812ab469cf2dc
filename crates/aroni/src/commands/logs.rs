use crate::{helpers::messages::info, AroniConfig, Result};

/// Print log file status, optionally deleting old log files.
pub fn logs(config: &AroniConfig, delete: bool) -> Result<()> {
    let logger = config.logger();
    if delete {
        logger.delete_logs()?;
    }
    let status = logger.status()?;
    info(format!("current: {}", status.current.display()));
    for file in &status.log_files {
        println!("{}", file.display());
    }
    println!("{} files, {} bytes", status.log_files.len(), status.total);
    Ok(())
}
