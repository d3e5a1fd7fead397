use ammber_interface::App;
use tracing::Level;
use tracing_subscriber::fmt;
use tracing_subscriber_wasm::MakeConsoleWriter;

const LOG_LEVEL: Level = if cfg!(debug_assertions) {
    Level::DEBUG
} else {
    Level::INFO
};

fn main() {
    fmt()
        .with_writer(
            // keep trace events from printing their JS backtrace
            MakeConsoleWriter::default().map_trace_level_to(Level::DEBUG),
        )
        // the browser has no clock that the default timer understands
        .without_time()
        .with_ansi(false)
        .with_max_level(LOG_LEVEL)
        .init();

    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(App)
}
