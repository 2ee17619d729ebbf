//! Printer: the single point of output-mode dispatch and error surfacing.
//!
//! The output mode is chosen once per invocation and injected at construction.
//! Output is rendered fully in memory before anything is written, so an
//! invocation either prints a complete result or nothing at all on the output
//! stream.

use crate::error::ApiError;
use crate::render::{cell_text, PageMeta, Renderable};
use comfy_table::{presets, ContentArrangement, Table};
use std::fmt;
use std::io::{self, Stderr, Stdout, Write};
use tracing::{debug, error};

/// Rendering format for one command invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    Json,
    Yaml,
    #[default]
    Table,
}

impl OutputMode {
    /// Map the `output` configuration value to a mode.
    ///
    /// `json` and `yaml` select the structured documents; anything else,
    /// including an unset value, selects the table.
    pub fn from_config(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("json") => OutputMode::Json,
            Some(v) if v.eq_ignore_ascii_case("yaml") => OutputMode::Yaml,
            _ => OutputMode::Table,
        }
    }
}

/// Process exit status reported by [`Printer::display`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    /// The fetch failed; the error was printed.
    Failure,
    /// A renderable could not be serialized.
    Internal,
    /// Writing to the output or error stream failed.
    Io,
}

impl ExitStatus {
    pub fn code(self) -> i32 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Internal => 70,
            ExitStatus::Io => 74,
        }
    }

    pub fn is_success(self) -> bool {
        self == ExitStatus::Success
    }
}

/// Separator written between the last table section and the paging summary.
const PAGING_SEPARATOR: &str = "======================================";

/// Writes renderables to an output stream and errors to an error stream.
pub struct Printer<W: Write, E: Write> {
    mode: OutputMode,
    out: W,
    err: E,
}

impl Printer<Stdout, Stderr> {
    /// Printer bound to the process stdout and stderr.
    pub fn stdio(mode: OutputMode) -> Self {
        Printer::new(mode, io::stdout(), io::stderr())
    }
}

impl<W: Write, E: Write> Printer<W, E> {
    pub fn new(mode: OutputMode, out: W, err: E) -> Self {
        Self { mode, out, err }
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Display a renderable, or the fetch error when one is present.
    ///
    /// With an error, exactly one line is written to the error stream and no
    /// method of `renderable` is called.
    pub fn display(&mut self, renderable: &dyn Renderable, err: Option<&ApiError>) -> ExitStatus {
        if let Some(e) = err {
            error!(error = %e, "Fetch failed");
            return self.report(format_args!("Error: {}", e), ExitStatus::Failure);
        }

        let rendered = match self.mode {
            OutputMode::Json => renderable.to_json().map(|mut bytes| {
                bytes.push(b'\n');
                bytes
            }),
            OutputMode::Yaml => renderable.to_yaml().map(|mut bytes| {
                if !bytes.ends_with(b"\n") {
                    bytes.push(b'\n');
                }
                bytes
            }),
            OutputMode::Table => Ok(render_table(renderable).into_bytes()),
        };

        let bytes = match rendered {
            Ok(bytes) => bytes,
            Err(e) => {
                error!(error = %e, "Rendering failed");
                return self.report(format_args!("Internal error: {}", e), ExitStatus::Internal);
            }
        };

        debug!(mode = ?self.mode, bytes = bytes.len(), "Writing output");
        match self.out.write_all(&bytes).and_then(|_| self.out.flush()) {
            Ok(()) => ExitStatus::Success,
            Err(e) => {
                error!(error = %e, "Writing output failed");
                self.report(format_args!("Error: failed to write output: {}", e), ExitStatus::Io)
            }
        }
    }

    /// Display the result of a fetch that was mapped into an adapter.
    pub fn emit<R: Renderable>(&mut self, result: Result<R, ApiError>) -> ExitStatus {
        match result {
            Ok(renderable) => self.display(&renderable, None),
            Err(e) => self.display(&Unrendered, Some(&e)),
        }
    }

    /// Write one line to the error stream; `Io` replaces `status` if that fails.
    fn report(&mut self, line: fmt::Arguments<'_>, status: ExitStatus) -> ExitStatus {
        match writeln!(self.err, "{}", line) {
            Ok(()) => status,
            Err(_) => ExitStatus::Io,
        }
    }

    /// Consume the printer and hand back its streams.
    pub fn into_inner(self) -> (W, E) {
        (self.out, self.err)
    }
}

/// Stand-in passed to [`Printer::display`] when the fetch produced no value.
struct Unrendered;

impl Renderable for Unrendered {
    fn to_json(&self) -> Result<Vec<u8>, crate::error::RenderError> {
        Ok(b"{}".to_vec())
    }

    fn to_yaml(&self) -> Result<Vec<u8>, crate::error::RenderError> {
        Ok(b"{}\n".to_vec())
    }

    fn columns(&self) -> crate::render::Columns {
        Default::default()
    }

    fn rows(&self) -> crate::render::Rows {
        Default::default()
    }

    fn paging(&self) -> Option<PageMeta> {
        None
    }
}

/// Render every section in ascending index order, then the paging summary.
fn render_table(renderable: &dyn Renderable) -> String {
    let columns = renderable.columns();
    let mut rows = renderable.rows();

    let mut sections = Vec::with_capacity(columns.len());
    for (index, headers) in &columns {
        let mut table = Table::new();
        table
            .load_preset(presets::NOTHING)
            .set_content_arrangement(ContentArrangement::Disabled)
            .set_header(headers.clone());
        for row in rows.remove(index).unwrap_or_default() {
            table.add_row(row.iter().map(cell_text).collect::<Vec<_>>());
        }
        for column in table.column_iter_mut() {
            column.set_padding((0, 2));
        }
        sections.push(table.trim_fmt());
    }

    let mut output = sections.join("\n\n");
    if !output.is_empty() {
        output.push('\n');
    }
    if let Some(meta) = renderable.paging() {
        output.push_str(PAGING_SEPARATOR);
        output.push('\n');
        output.push_str(&paging_summary(&meta));
        output.push('\n');
    }
    output
}

/// Summary line for a page; cursors are left out when empty.
pub fn paging_summary(meta: &PageMeta) -> String {
    let mut line = format!("total_count={}", meta.total_count);
    if meta.has_next() {
        line.push_str(&format!(" next_cursor={}", meta.next_cursor));
    }
    if !meta.prev_cursor.is_empty() {
        line.push_str(&format!(" prev_cursor={}", meta.prev_cursor));
    }
    line
}
