use crate::cli::args::Command;
use crate::cli::params::{MirrorParams, ServeParams};
use crate::config::{Config, load_config};
use crate::download::MirrorOptions;
use crate::error::DamSyncError;
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone)]
pub enum ResolvedCommand {
    Serve(ServeParams),
    Mirror(MirrorParams),
}

pub fn resolve_command(command: Command) -> Result<ResolvedCommand, DamSyncError> {
    match command {
        Command::Serve {
            config_path,
            bind_address,
        } => {
            let mut config = load_optional_config(config_path.as_deref())?;
            if let Some(bind_address) = bind_address {
                config.server.bind_address = bind_address;
            }

            Ok(ResolvedCommand::Serve(ServeParams { config }))
        }
        Command::Mirror {
            config_path,
            path,
            base_url,
            output_dir,
            batch_size,
            batch_delay_ms,
            alias_tree,
        } => {
            if path.is_empty() {
                return Err(DamSyncError::CliArgumentValidation {
                    details: "path must not be empty.".to_string(),
                });
            }

            let config = load_optional_config(config_path.as_deref())?;
            let mut options = MirrorOptions::from_config(&config, base_url);
            if let Some(output_dir) = output_dir {
                options.output_dir = output_dir.into();
            }
            if let Some(batch_size) = batch_size {
                options.batch_size = batch_size;
            }
            if let Some(batch_delay_ms) = batch_delay_ms {
                options.batch_delay = Duration::from_millis(batch_delay_ms);
            }
            if alias_tree {
                options.alias_tree = true;
            }

            if options.batch_size == 0 {
                return Err(DamSyncError::CliArgumentValidation {
                    details: "batch-size must be greater than 0.".to_string(),
                });
            }
            Url::parse(&options.base_url).map_err(|e| DamSyncError::CliArgumentValidation {
                details: format!("Invalid base URL {}: {e}", options.base_url),
            })?;

            let manifest_url = format!("{}{}", options.base_url, path);

            Ok(ResolvedCommand::Mirror(MirrorParams {
                manifest_url,
                options,
            }))
        }
    }
}

fn load_optional_config(config_path: Option<&str>) -> Result<Config, DamSyncError> {
    match config_path {
        Some(config_path) => load_config(config_path),
        None => Ok(Config::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mirror_command() -> Command {
        Command::Mirror {
            config_path: None,
            path: "/.rest/delivery/assets".to_string(),
            base_url: Some("https://repo.example.com".to_string()),
            output_dir: Some("/srv/mirror".to_string()),
            batch_size: Some(4),
            batch_delay_ms: Some(250),
            alias_tree: false,
        }
    }

    #[test]
    fn test_mirror_command_composes_manifest_url() {
        let resolved = resolve_command(mirror_command()).unwrap();
        let ResolvedCommand::Mirror(params) = resolved else {
            panic!("expected mirror params");
        };

        assert_eq!(
            params.manifest_url,
            "https://repo.example.com/.rest/delivery/assets"
        );
        assert_eq!(params.options.batch_size, 4);
        assert_eq!(params.options.batch_delay, Duration::from_millis(250));
        assert_eq!(params.options.output_dir, std::path::PathBuf::from("/srv/mirror"));
    }

    #[test]
    fn test_zero_batch_size_is_rejected() {
        let Command::Mirror { path, .. } = mirror_command() else {
            unreachable!()
        };
        let command = Command::Mirror {
            config_path: None,
            path,
            base_url: None,
            output_dir: None,
            batch_size: Some(0),
            batch_delay_ms: None,
            alias_tree: false,
        };

        let err = resolve_command(command).unwrap_err();
        assert!(matches!(err, DamSyncError::CliArgumentValidation { .. }));
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let command = Command::Mirror {
            config_path: None,
            path: "/assets".to_string(),
            base_url: Some("not a url".to_string()),
            output_dir: None,
            batch_size: None,
            batch_delay_ms: None,
            alias_tree: false,
        };

        let err = resolve_command(command).unwrap_err();
        assert!(matches!(err, DamSyncError::CliArgumentValidation { .. }));
    }

    #[test]
    fn test_empty_path_is_rejected() {
        let command = Command::Mirror {
            config_path: None,
            path: String::new(),
            base_url: None,
            output_dir: None,
            batch_size: None,
            batch_delay_ms: None,
            alias_tree: false,
        };

        let err = resolve_command(command).unwrap_err();
        assert!(matches!(err, DamSyncError::CliArgumentValidation { .. }));
    }
}
