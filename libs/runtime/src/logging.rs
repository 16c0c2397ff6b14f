use crate::config::{LoggingConfig, Section};
use std::{
    io::Write,
    path::Path,
    sync::{Arc, Mutex},
};
use tracing::Level;
use tracing_subscriber::{
    filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer,
};

use file_rotate::{
    compression::Compression,
    suffix::{AppendTimestamp, FileLimit},
    ContentLimit, FileRotate,
};

fn parse_tracing_level(s: &str) -> Option<Level> {
    match s.to_ascii_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        "off" | "none" => None,
        _ => Some(Level::INFO),
    }
}

// -------- rotating writer for files --------

#[derive(Clone)]
struct RotWriter(Arc<Mutex<FileRotate<AppendTimestamp>>>);

impl<'a> fmt::MakeWriter<'a> for RotWriter {
    type Writer = RotWriterHandle;
    fn make_writer(&'a self) -> Self::Writer {
        RotWriterHandle(self.0.clone())
    }
}

#[derive(Clone)]
struct RotWriterHandle(Arc<Mutex<FileRotate<AppendTimestamp>>>);

impl Write for RotWriterHandle {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self.0.lock() {
            Ok(mut rot) => rot.write(buf),
            Err(_) => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self.0.lock() {
            Ok(mut rot) => rot.flush(),
            Err(_) => Ok(()),
        }
    }
}

fn rotating_writer(section: &Section) -> std::io::Result<RotWriter> {
    let log_path = Path::new(&section.file);
    if let Some(dir) = log_path.parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)?;
        }
    }

    let max_bytes = section.max_size_mb.unwrap_or(100).saturating_mul(1024 * 1024) as usize;
    let max_files = section.max_backups.unwrap_or(3);

    let rot = FileRotate::new(
        log_path,
        AppendTimestamp::default(FileLimit::MaxFiles(max_files)),
        ContentLimit::BytesSurpassed(max_bytes),
        Compression::None,
        #[cfg(unix)]
        None, // file permissions (Unix only)
    );

    Ok(RotWriter(Arc::new(Mutex::new(rot))))
}

// -------- public init --------

/// Install the global tracing subscriber from the "default" logging section.
///
/// Console output honors `console_level`; if `file` is set, a rotating file
/// sink is added at `file_level`. Repeated calls are no-ops (`try_init`).
pub fn init_logging_from_config(cfg: Option<&LoggingConfig>) {
    let section = cfg
        .and_then(|c| c.get("default"))
        .cloned()
        .unwrap_or_else(|| Section {
            console_level: "info".to_string(),
            file: String::new(),
            file_level: String::new(),
            max_backups: None,
            max_size_mb: None,
        });

    let console_layer = parse_tracing_level(&section.console_level).map(|level| {
        fmt::layer()
            .with_ansi(atty::is(atty::Stream::Stdout))
            .with_target(true)
            .with_filter(LevelFilter::from_level(level))
    });

    let file_layer = if section.file.is_empty() {
        None
    } else {
        let level = parse_tracing_level(if section.file_level.is_empty() {
            "debug"
        } else {
            &section.file_level
        });
        match (level, rotating_writer(&section)) {
            (Some(level), Ok(writer)) => Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_writer(writer)
                    .with_filter(LevelFilter::from_level(level)),
            ),
            (_, Err(e)) => {
                eprintln!("failed to open log file '{}': {e}", section.file);
                None
            }
            _ => None,
        }
    };

    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();
}
