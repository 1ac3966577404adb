use once_cell::sync::Lazy;
use verbose_core::{vprintf, Logger};

// named after this file's directory, relative to the sources root
static LOGGER: Lazy<Logger> = Lazy::new(|| verbose_core::auto());

pub fn hello(name: &str) {
    println!("Hello {}", name);
    vprintf!(LOGGER, "greeted {:?} as {}", name, LOGGER.name());
}
