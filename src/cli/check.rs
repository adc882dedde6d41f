//! `blogconf check`: validate the config and print every problem.

use anyhow::Result;

use crate::asset::check_assets;
use crate::cli::CheckArgs;
use crate::config::{BlogConfig, ConfigError};
use crate::log;

pub fn check_config(config: &BlogConfig, args: &CheckArgs) -> Result<()> {
    let mut diag = config.diagnose();

    if args.assets {
        check_assets(config, &mut diag);
    }
    if args.strict {
        diag.promote_warnings();
    }

    diag.print_hints_and_warnings();

    if diag.has_errors() {
        return Err(ConfigError::Diagnostics(diag).into());
    }

    log!("check"; "{} is valid", config.config_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn args(strict: bool, assets: bool) -> CheckArgs {
        CheckArgs {
            strict,
            assets,
            verbose: false,
        }
    }

    #[test]
    fn test_valid_config_passes() {
        let config = test_parse_config("");
        assert!(check_config(&config, &args(false, false)).is_ok());
    }

    #[test]
    fn test_strict_fails_on_warnings() {
        let config = test_parse_config("[nav]\nlinks = [\"home\", \"home\"]");
        assert!(check_config(&config, &args(false, false)).is_ok());
        assert!(check_config(&config, &args(true, false)).is_err());
    }

    #[test]
    fn test_assets_flag_checks_files() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut config =
            test_parse_config("[site.banner]\nenable = true\nsrc = \"assets/images/background.jpg\"");
        config.set_root(dir.path());

        assert!(check_config(&config, &args(false, false)).is_ok());
        let err = check_config(&config, &args(false, true)).unwrap_err();
        assert!(err.to_string().contains("site.banner.src"));
    }
}
