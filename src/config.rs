use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "postview", version, about = "Terminal view of a post and its comments")]
pub struct Config {
    /// Post document to show. Without one the built-in sample is used.
    #[arg(env = "POSTVIEW_POST")]
    pub post_path: Option<PathBuf>,

    #[arg(long = "log", env = "POSTVIEW_LOG", default_value = "postview.log")]
    pub log_path: PathBuf,

    #[arg(long, env = "POSTVIEW_LOG_LEVEL", default_value = "info", value_parser = parse_level)]
    pub log_level: LevelFilter,
}

fn parse_level(value: &str) -> Result<LevelFilter, String> {
    value
        .parse()
        .map_err(|_| "expected off, error, warn, info, debug or trace".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["postview"]).unwrap();
        assert_eq!(config.log_path, PathBuf::from("postview.log"));
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_arguments() {
        let config = Config::try_parse_from([
            "postview",
            "post.json",
            "--log",
            "/tmp/pv.log",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(config.post_path, Some(PathBuf::from("post.json")));
        assert_eq!(config.log_path, PathBuf::from("/tmp/pv.log"));
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_env_fallback_and_argument_precedence() {
        std::env::set_var("POSTVIEW_POST", "env.json");
        let from_env = Config::try_parse_from(["postview"]).unwrap();
        let from_arg = Config::try_parse_from(["postview", "arg.json"]).unwrap();
        std::env::remove_var("POSTVIEW_POST");

        assert_eq!(from_env.post_path, Some(PathBuf::from("env.json")));
        assert_eq!(from_arg.post_path, Some(PathBuf::from("arg.json")));
    }

    #[test]
    fn test_help_is_not_a_post_path() {
        let err = Config::try_parse_from(["postview", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_invalid_log_level() {
        let err = Config::try_parse_from(["postview", "--log-level", "loud"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }
}
