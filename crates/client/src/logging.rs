/// Filter used when `RUST_LOG` is unset. reqwest/hyper internals are noisy
/// at debug, so they stay at warn.
fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "debug,hyper=warn,reqwest=warn"
    } else {
        "info,hyper=warn,reqwest=warn"
    }
}

/// Installs `env_logger` on stderr for the embedding UI process.
///
/// A set `RUST_LOG` replaces the defaults entirely, `verbose` included.
/// Calling this twice is harmless.
pub fn init_logging(verbose: bool) {
    let env = env_logger::Env::default().default_filter_or(default_filter(verbose));
    let mut builder = env_logger::Builder::from_env(env);
    if builder.target(env_logger::Target::Stderr).try_init().is_err() {
        log::debug!("Logger already initialised");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_raises_only_the_base_level() {
        assert!(default_filter(false).starts_with("info,"));
        assert!(default_filter(true).starts_with("debug,"));
        for verbose in [false, true] {
            assert!(default_filter(verbose).contains("hyper=warn"));
            assert!(default_filter(verbose).contains("reqwest=warn"));
        }
    }

    #[test]
    fn explicit_filter_is_not_overridden() {
        let env = env_logger::Env::new()
            .filter("DEX_LOG_FILTER_UNDER_TEST")
            .default_filter_or(default_filter(true));
        std::env::set_var("DEX_LOG_FILTER_UNDER_TEST", "reqwest=trace");
        let logger = env_logger::Builder::from_env(env).build();
        std::env::remove_var("DEX_LOG_FILTER_UNDER_TEST");

        assert_eq!(logger.filter(), log::LevelFilter::Trace);
    }
}
