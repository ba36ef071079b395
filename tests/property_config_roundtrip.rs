use awesome_gen::{AuthConfig, Config, ConfigLoader};
use proptest::prelude::*;

const TOP_LEVEL_KEYS: &[&str] = &["auth", "format", "topic", "sub_topics", "output_file"];
const AUTH_KEYS: &[&str] = &["username", "password", "access_token"];

fn value() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), "[a-z][a-z0-9_./-]{0,15}"]
}

fn config() -> impl Strategy<Value = Config> {
    (
        (value(), value(), value()),
        value(),
        value(),
        prop::collection::vec(value(), 0..5),
        value(),
    )
        .prop_map(
            |((username, password, access_token), format, topic, sub_topics, output_file)| Config {
                auth: AuthConfig {
                    username,
                    password,
                    otp: String::new(),
                    access_token,
                },
                format,
                topic,
                sub_topics,
                output_file,
            },
        )
}

proptest! {
    /// Property: rendering then loading reproduces the configuration
    #[test]
    fn prop_render_round_trip(config in config()) {
        let rendered = ConfigLoader::render(&config);
        let reloaded = ConfigLoader::load_from_str(&rendered).unwrap();
        prop_assert_eq!(&reloaded, &config);

        // and the result is stable under a second pass
        let again = ConfigLoader::load_from_str(&ConfigLoader::render(&reloaded)).unwrap();
        prop_assert_eq!(again, reloaded);
    }

    /// Property: the one-time password never survives a round trip
    #[test]
    fn prop_otp_never_rendered(config in config(), otp in "[0-9]{6}") {
        let mut config = config;
        config.auth.otp = otp;

        let reloaded = ConfigLoader::load_from_str(&ConfigLoader::render(&config)).unwrap();
        prop_assert!(reloaded.auth.otp.is_empty());
    }

    /// Property: only the given key differs from the defaults
    #[test]
    fn prop_single_key_overlays_defaults(
        topic in "[a-z][a-z0-9-]{0,15}".prop_filter("null scalar", |t| t != "null")
    ) {
        let config = ConfigLoader::load_from_str(&format!("topic: {topic}\n")).unwrap();
        prop_assert_eq!(config, Config { topic, ..Config::default() });
    }

    /// Property: any unrecognized top-level key fails the load
    #[test]
    fn prop_unknown_top_level_key_rejected(
        key in "[a-z_]{1,12}".prop_filter("recognized key", |k| !TOP_LEVEL_KEYS.contains(&k.as_str()))
    ) {
        let result = ConfigLoader::load_from_str(&format!("topic: rust\n{key}: value\n"));
        prop_assert!(result.is_err());
        prop_assert!(result.unwrap_err().is_parse());
    }

    /// Property: any unrecognized credentials key fails the load
    #[test]
    fn prop_unknown_auth_key_rejected(
        key in "[a-z_]{1,12}".prop_filter("recognized key", |k| !AUTH_KEYS.contains(&k.as_str()))
    ) {
        let result = ConfigLoader::load_from_str(&format!("auth:\n  {key}: value\n"));
        prop_assert!(result.is_err());
        prop_assert!(result.unwrap_err().is_parse());
    }
}
