//! Utilities
use log::*;
use std::{env, fs, collections::HashMap, io::Write};
use anyhow::{Result, Context};

use crate::DEFAULT_MASTERS;
use crate::DEFAULT_TIMEOUT;

/// Resolve the master addresses: the --masters option, else YBXC_MASTERS (via
/// dotenv().ok()), else [DEFAULT_MASTERS]. Empty entries are dropped.
pub fn set_masters(
    option: &Option<String>,
    changed_options: &mut HashMap<&str, String>,
) -> Vec<String>
{
    let masters_string = if let Some(masters) = option {
        info!("masters argument set: using: {}", masters);
        // insert into changed_options to be written later on.
        changed_options.insert("YBXC_MASTERS", masters.to_string());
        masters.to_string()
    } else {
        match env::var("YBXC_MASTERS") {
            Ok(set_var) => {
                info!("masters not set: set via .env: YBXC_MASTERS: {}", set_var);
                changed_options.insert("YBXC_MASTERS", set_var.to_owned());
                set_var
            }
            Err(_e) => {
                info!("masters not set: and not set via .env: using DEFAULT_MASTERS: {}", DEFAULT_MASTERS);
                DEFAULT_MASTERS.to_string()
            }
        }
    };
    masters_string
        .split(',')
        .map(|address| address.trim().to_string())
        .filter(|address| !address.is_empty())
        .collect()
}

/// Resolve the timeout in seconds: the --timeout option, else YBXC_TIMEOUT (via
/// dotenv().ok()), else [DEFAULT_TIMEOUT].
pub fn set_timeout(
    option: &Option<String>,
    changed_options: &mut HashMap<&str, String>,
) -> Result<u64>
{
    let timeout_string = if let Some(timeout) = option {
        info!("timeout argument set: using: {}", timeout);
        // insert into changed_options to be written later on.
        changed_options.insert("YBXC_TIMEOUT", timeout.to_string());
        timeout.to_string()
    } else {
        match env::var("YBXC_TIMEOUT") {
            Ok(set_var) => {
                info!("timeout not set: set via .env: YBXC_TIMEOUT: {}", set_var);
                changed_options.insert("YBXC_TIMEOUT", set_var.to_owned());
                set_var
            }
            Err(_e) => {
                info!("timeout not set: and not set via .env: using DEFAULT_TIMEOUT: {}", DEFAULT_TIMEOUT);
                DEFAULT_TIMEOUT.to_string()
            }
        }
    };
    timeout_string
        .parse()
        .with_context(|| format!("invalid timeout: {}", timeout_string))
}

/// Persist the resolved settings to .env when asked, so the next invocation picks them
/// up without options. The file is rewritten whole, not appended to.
pub fn dotenv_writer(
    write_dotenv: bool,
    changed_options: HashMap<&str, String>,
) -> Result<()>
{
    if write_dotenv && !changed_options.is_empty() {
        info!("writing resolved settings to .env");
        let mut file = fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(".env")
            .with_context(|| "cannot open .env for writing")?;

        for (key, value) in changed_options {
            writeln!(file, "{}={}", key, value)
                .with_context(|| format!("cannot write {} to .env", key))?;
            info!("{}={}", key, value);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_set_masters_from_option_splits_and_trims() {
        let mut changed_options = HashMap::new();
        let masters = set_masters(
            &Some("master-1:7000, master-2:7000,,master-3:7000".to_string()),
            &mut changed_options,
        );
        assert_eq!(masters, vec!["master-1:7000", "master-2:7000", "master-3:7000"]);
        assert_eq!(changed_options.get("YBXC_MASTERS").map(String::as_str), Some("master-1:7000, master-2:7000,,master-3:7000"));
    }

    #[test]
    fn unit_set_timeout_from_option() {
        let mut changed_options = HashMap::new();
        let timeout = set_timeout(&Some("5".to_string()), &mut changed_options).unwrap();
        assert_eq!(timeout, 5);
        assert_eq!(changed_options.get("YBXC_TIMEOUT").map(String::as_str), Some("5"));
    }

    #[test]
    fn unit_dotenv_writer_without_changed_options_writes_nothing() {
        // no options resolved means nothing to persist, whatever the flag says.
        assert!(dotenv_writer(true, HashMap::new()).is_ok());
        assert!(dotenv_writer(false, HashMap::new()).is_ok());
    }

    #[test]
    fn unit_set_timeout_rejects_garbage() {
        let mut changed_options = HashMap::new();
        let result = set_timeout(&Some("soon".to_string()), &mut changed_options);
        assert!(result.is_err());
    }
}
