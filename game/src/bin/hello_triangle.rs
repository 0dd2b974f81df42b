use backend::system::WindowConfig;
use hello_triangle::logging::{init_logging, LoggingConfig};
use hello_triangle::{run, scenes};

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());
    run(&WindowConfig::default(), scenes::hello_triangle)
}
