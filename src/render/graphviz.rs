//! External Graphviz renderer
//!
//! The DOT text is piped into the renderer's stdin. Any abnormal exit is
//! surfaced as [`RenderError::RendererFailed`] carrying the tool's stderr.

use std::io::Write;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use std::thread;
use thiserror::Error;
use tracing::debug;

/// Errors raised while invoking the renderer
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to run {program}: {source}")]
    Io {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} failed ({status}): {stderr}")]
    RendererFailed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },
}

pub type RenderResult<T> = Result<T, RenderError>;

/// Renderer configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphvizRenderer {
    /// Executable to run, `dot` by default
    pub program: String,
    /// Output format passed as `-T<format>`, `png` by default
    pub format: String,
}

impl Default for GraphvizRenderer {
    fn default() -> Self {
        GraphvizRenderer {
            program: "dot".to_string(),
            format: "png".to_string(),
        }
    }
}

impl GraphvizRenderer {
    pub fn new(program: impl Into<String>, format: impl Into<String>) -> Self {
        GraphvizRenderer {
            program: program.into(),
            format: format.into(),
        }
    }

    /// Render `dot` into the file at `path`
    pub fn render_to_file(&self, dot: &str, path: &Path) -> RenderResult<()> {
        let mut command = self.command();
        command.arg("-o").arg(path);
        debug!("Rendering to {:?} with {}", path, self.program);
        self.run(command, dot).map(|_| ())
    }

    /// Render `dot` and return the renderer's stdout
    pub fn render_to_bytes(&self, dot: &str) -> RenderResult<Vec<u8>> {
        debug!("Rendering {} bytes of DOT with {}", dot.len(), self.program);
        self.run(self.command(), dot)
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.arg(format!("-T{}", self.format));
        command
    }

    fn run(&self, mut command: Command, dot: &str) -> RenderResult<Vec<u8>> {
        let mut child = command
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| self.io_error(source))?;

        // Feed stdin from another thread so a full stdout pipe cannot stall us.
        let writer = child.stdin.take().map(|mut stdin| {
            let input = dot.to_owned();
            thread::spawn(move || stdin.write_all(input.as_bytes()))
        });

        let output = child
            .wait_with_output()
            .map_err(|source| self.io_error(source))?;

        if !output.status.success() {
            return Err(RenderError::RendererFailed {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        if let Some(handle) = writer {
            match handle.join() {
                Ok(written) => written.map_err(|source| self.io_error(source))?,
                Err(_) => {
                    return Err(self.io_error(std::io::Error::new(
                        std::io::ErrorKind::Other,
                        "stdin writer panicked",
                    )))
                }
            }
        }

        Ok(output.stdout)
    }

    fn io_error(&self, source: std::io::Error) -> RenderError {
        RenderError::Io {
            program: self.program.clone(),
            source,
        }
    }
}
