use figment::Jail;
use heartchase::config::Config;
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

#[test]
fn test_defaults_without_environment() {
    Jail::expect_with(|_jail| {
        let config: Config = Config::figment().extract()?;
        assert_eq!(config, Config::default());
        assert_that(&config.restarts).is_equal_to(1);
        assert_that(&config.realtime).is_true();
        Ok(())
    });
}

#[test]
fn test_environment_overrides() {
    Jail::expect_with(|jail| {
        jail.set_env("HEARTCHASE_SEED", "42");
        jail.set_env("HEARTCHASE_MAX_TICKS", "600");
        jail.set_env("HEARTCHASE_RESTARTS", "3");
        jail.set_env("HEARTCHASE_REALTIME", "false");

        let config: Config = Config::figment().extract()?;
        assert_eq!(
            config,
            Config {
                seed: Some(42),
                max_ticks: Some(600),
                restarts: 3,
                realtime: false,
            }
        );
        Ok(())
    });
}

#[test]
fn test_invalid_value_is_a_config_error() {
    Jail::expect_with(|jail| {
        jail.set_env("HEARTCHASE_SEED", "not-a-number");
        assert_that(&Config::load().is_err()).is_true();
        Ok(())
    });
}
