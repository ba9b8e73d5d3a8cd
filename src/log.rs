/// Initialize logging, if enabled.
///
/// This runs from `.init_array`, before `main`, so that the log messages
/// emitted at program start are visible. `.00099` runs after libc has set up
/// the environment, so loggers that depend on eg. `RUST_LOG` work.
#[unsafe(link_section = ".init_array.00099")]
#[used]
static INIT_ARRAY: unsafe extern "C" fn() = {
    unsafe extern "C" fn function() {
        init()
    }
    function
};

fn init() {
    // Initialize the chosen logger.
    #[cfg(feature = "env_logger")]
    env_logger::init();

    // Log the first message, announcing that the program started. The
    // program started earlier than this, but we couldn't log until the
    // logger was initialized.
    log::trace!(target: "greeter::program", "Program started");
}
