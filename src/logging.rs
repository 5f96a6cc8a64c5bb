use tracing_subscriber::EnvFilter;

/// Our own info lines plus warnings from eframe, winit and wgpu.
const DEFAULT_DIRECTIVES: &str = "flagship=info,warn";
/// `--debug`: slide and timer events from the carousel.
const DEBUG_DIRECTIVES: &str = "flagship=debug,info";

/// Filter directives for a launch. `--debug` wins over `RUST_LOG`.
pub fn filter_directives(enable_debug: bool, rust_log: Option<&str>) -> String {
    if enable_debug {
        return DEBUG_DIRECTIVES.to_string();
    }
    match rust_log.map(str::trim) {
        Some(directives) if !directives.is_empty() => directives.to_string(),
        _ => DEFAULT_DIRECTIVES.to_string(),
    }
}

/// Install the fmt subscriber. eframe and egui still log through `log`, so
/// those records are forwarded too. A second call keeps the first subscriber.
pub fn init_tracing(enable_debug: bool) {
    let _ = tracing_log::LogTracer::init();

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directives = filter_directives(enable_debug, rust_log.as_deref());
    let env_filter = EnvFilter::try_new(&directives).unwrap_or_else(|e| {
        eprintln!("Ignoring invalid log filter '{}': {}", directives, e);
        EnvFilter::new(DEFAULT_DIRECTIVES)
    });

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_thread_names(false)
        .try_init()
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_flag_overrides_rust_log() {
        assert_eq!(filter_directives(true, Some("error")), DEBUG_DIRECTIVES);
    }

    #[test]
    fn rust_log_used_when_set() {
        assert_eq!(filter_directives(false, Some(" flagship=trace ")), "flagship=trace");
        assert_eq!(filter_directives(false, Some("  ")), DEFAULT_DIRECTIVES);
        assert_eq!(filter_directives(false, None), DEFAULT_DIRECTIVES);
    }

    #[test]
    fn default_directives_parse() {
        assert!(EnvFilter::try_new(DEFAULT_DIRECTIVES).is_ok());
        assert!(EnvFilter::try_new(DEBUG_DIRECTIVES).is_ok());
    }
}
