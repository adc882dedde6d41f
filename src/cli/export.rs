//! `blogconf export`: write the consumed records to stdout or a file.

use std::fs;

use anyhow::{Context, Result};

use crate::cli::ExportArgs;
use crate::config::BlogConfig;
use crate::export::ExportedConfig;
use crate::log;

pub fn export_config(config: &BlogConfig, args: &ExportArgs) -> Result<()> {
    let formatted = ExportedConfig::from_config(config, args.resolved)
        .render(args.format, args.pretty)?;

    // Output to file or stdout
    if let Some(ref output_path) = args.output {
        let mut content = formatted;
        if !content.ends_with('\n') {
            content.push('\n');
        }
        fs::write(output_path, content)
            .with_context(|| format!("Failed to write '{}'", output_path.display()))?;
        log!("export"; "wrote {}", output_path.display());
    } else if formatted.ends_with('\n') {
        print!("{}", formatted);
    } else {
        println!("{}", formatted);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::export::ExportFormat;
    use tempfile::TempDir;

    #[test]
    fn test_export_to_file() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("config.json");
        let args = ExportArgs {
            format: ExportFormat::Json,
            resolved: true,
            pretty: true,
            output: Some(output.clone()),
        };

        export_config(&test_parse_config(""), &args).unwrap();

        let content = fs::read_to_string(&output).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["siteConfig"]["title"], "Test");
        assert_eq!(value["navBarConfig"]["links"][1]["url"], "/archive/");
    }
}
