//! Export helpers for CSV and JSON artifacts.

pub mod profile {
    use std::fs::{self, File};
    use std::io::{self, BufWriter, Write};
    use std::path::Path;

    const HEADER: &str = "time_s,phase,distance_m,velocity_m_s";

    /// Create a writer for the target path, handling stdout (`-`) by convention.
    pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
        if path == Path::new("-") {
            return Ok(Box::new(BufWriter::new(io::stdout())));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }

    /// Write the flight-profile CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// A per-tick flight progress sample.
    #[derive(Debug, Clone)]
    pub struct Record<'a> {
        pub time_s: f64,
        pub phase: &'a str,
        pub distance_m: f64,
        pub velocity_m_s: f64,
    }

    impl<'a> Record<'a> {
        /// Serialize the record to CSV, matching the standard header ordering.
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            writeln!(
                writer,
                "{:.3},{},{:.3},{:.6}",
                self.time_s, self.phase, self.distance_m, self.velocity_m_s,
            )
        }
    }
}

pub mod snapshot {
    use serde::Serialize;
    use serde_json::to_writer_pretty;
    use std::fs::{self, File};
    use std::io;
    use std::path::Path;

    /// Write any serializable planning artifact as a pretty JSON sidecar.
    pub fn write_json<T: Serialize>(path: &Path, value: &T) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        to_writer_pretty(file, value).map_err(io::Error::other)
    }
}
