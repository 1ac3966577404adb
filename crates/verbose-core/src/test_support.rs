//! Helpers shared by unit tests

use std::io::{self, Write};
use std::sync::Arc;

use colored::Color;
use parking_lot::{Mutex, RwLock};

use crate::backend::{Backend, SharedBackend};
use crate::logger::Logger;

/// In-memory writer whose clones share one buffer
#[derive(Clone, Default)]
pub(crate) struct CaptureBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl CaptureBuffer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock()).into_owned()
    }
}

impl Write for CaptureBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// An enabled logger writing to `backend`
pub(crate) fn logger_with(name: &str, backend: impl Backend + 'static) -> Logger {
    let shared: SharedBackend = Arc::new(backend);
    Logger::new(name, true, Color::Cyan, Arc::new(RwLock::new(shared)))
}
