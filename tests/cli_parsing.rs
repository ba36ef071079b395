use awesome_gen::cli::{Cli, Commands, DEFAULT_CONFIG_PATH};
use awesome_gen::LogFormat;
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_parse_check_with_default_path() {
    temp_env::with_var_unset("AWESOME_GEN_CONFIG", || {
        let cli = Cli::try_parse_from(["awesome-gen", "check"]).unwrap();

        assert!(!cli.json);
        assert_eq!(cli.log_level, "warn");
        assert_eq!(cli.log_format, LogFormat::Pretty);
        match cli.command {
            Commands::Check(args) => assert_eq!(args.config, PathBuf::from(DEFAULT_CONFIG_PATH)),
            Commands::Show(_) => panic!("Wrong command"),
        }
    });
}

#[test]
fn test_parse_check_with_config_flag() {
    let cli = Cli::try_parse_from(["awesome-gen", "--json", "check", "--config", "awesome.yml"])
        .unwrap();

    assert!(cli.json);
    match cli.command {
        Commands::Check(args) => assert_eq!(args.config, PathBuf::from("awesome.yml")),
        Commands::Show(_) => panic!("Wrong command"),
    }
}

#[test]
fn test_parse_config_from_env() {
    temp_env::with_var("AWESOME_GEN_CONFIG", Some("/etc/awesome.yml"), || {
        let cli = Cli::try_parse_from(["awesome-gen", "check"]).unwrap();
        match cli.command {
            Commands::Check(args) => assert_eq!(args.config, PathBuf::from("/etc/awesome.yml")),
            Commands::Show(_) => panic!("Wrong command"),
        }
    });
}

#[test]
fn test_parse_show_with_otp() {
    temp_env::with_var_unset("AWESOME_GEN_OTP", || {
        let cli = Cli::try_parse_from([
            "awesome-gen",
            "show",
            "-c",
            "config.yml",
            "--otp",
            "123456",
            "--log-format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.log_format, LogFormat::Json);
        match cli.command {
            Commands::Show(args) => {
                assert_eq!(args.source.config, PathBuf::from("config.yml"));
                assert_eq!(args.otp.as_deref(), Some("123456"));
            }
            Commands::Check(_) => panic!("Wrong command"),
        }
    });
}

#[test]
fn test_parse_show_otp_from_env() {
    temp_env::with_var("AWESOME_GEN_OTP", Some("654321"), || {
        let cli = Cli::try_parse_from(["awesome-gen", "show"]).unwrap();
        match cli.command {
            Commands::Show(args) => assert_eq!(args.otp.as_deref(), Some("654321")),
            Commands::Check(_) => panic!("Wrong command"),
        }
    });
}

#[test]
fn test_missing_subcommand_fails() {
    assert!(Cli::try_parse_from(["awesome-gen"]).is_err());
}

#[test]
fn test_unknown_log_format_fails() {
    assert!(Cli::try_parse_from(["awesome-gen", "--log-format", "xml", "check"]).is_err());
}
