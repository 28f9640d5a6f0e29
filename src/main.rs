fn main() {
    // default to info-level logging unless RUST_LOG says otherwise
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    smooth_saver::app::run_app();
}
