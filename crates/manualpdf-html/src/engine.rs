//! External HTML-to-PDF engines
//!
//! The layout itself is delegated to an installed paged-media engine.
//! Discovery walks `PATH` for known executables in priority order:
//!
//! 1. `weasyprint` - full CSS paged media, including margin boxes
//! 2. Chromium family - headless `--print-to-pdf`

use std::ffi::OsStr;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

use manualpdf_core::{output_size, ConvertError, Result};

/// Engine families with different command lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineKind {
    WeasyPrint,
    Chromium,
}

impl EngineKind {
    pub fn name(self) -> &'static str {
        match self {
            EngineKind::WeasyPrint => "WeasyPrint",
            EngineKind::Chromium => "Chromium",
        }
    }

    /// Guess the family from an executable's file name
    pub fn from_executable(path: &Path) -> Self {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        if stem.contains("weasyprint") {
            EngineKind::WeasyPrint
        } else {
            EngineKind::Chromium
        }
    }
}

/// Executables tried during discovery, in priority order
pub const CANDIDATES: &[(&str, EngineKind)] = &[
    ("weasyprint", EngineKind::WeasyPrint),
    ("chromium", EngineKind::Chromium),
    ("chromium-browser", EngineKind::Chromium),
    ("google-chrome", EngineKind::Chromium),
    ("google-chrome-stable", EngineKind::Chromium),
    ("chrome", EngineKind::Chromium),
];

/// A located engine executable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlEngine {
    kind: EngineKind,
    executable: PathBuf,
}

impl HtmlEngine {
    pub fn new(kind: EngineKind, executable: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            executable: executable.into(),
        }
    }

    pub fn kind(&self) -> EngineKind {
        self.kind
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    /// Find the first candidate on the process `PATH`
    pub fn discover() -> Option<Self> {
        let path_var = std::env::var_os("PATH")?;
        Self::discover_in(&path_var)
    }

    /// Find the first candidate in an explicit `PATH`-style search list
    pub fn discover_in(search_path: &OsStr) -> Option<Self> {
        CANDIDATES.iter().find_map(|(name, kind)| {
            find_executable(name, search_path).map(|exe| Self::new(*kind, exe))
        })
    }

    /// Use a configured executable, given either as a path or a bare name
    pub fn from_configured(executable: &Path) -> Result<Self> {
        let kind = EngineKind::from_executable(executable);

        let resolved = if executable.components().count() > 1 || executable.is_absolute() {
            executable.is_file().then(|| executable.to_path_buf())
        } else {
            std::env::var_os("PATH")
                .and_then(|path_var| find_executable(&executable.to_string_lossy(), &path_var))
        };

        resolved.map(|exe| Self::new(kind, exe)).ok_or_else(|| {
            ConvertError::Unavailable(format!(
                "configured HTML engine not found: {}",
                executable.display()
            ))
        })
    }

    /// Build the engine command line for one render
    pub fn command(&self, html: &Path, pdf: &Path) -> Command {
        let mut cmd = Command::new(&self.executable);
        match self.kind {
            EngineKind::WeasyPrint => {
                cmd.arg("--encoding").arg("utf-8").arg(html).arg(pdf);
            }
            EngineKind::Chromium => {
                cmd.arg("--headless")
                    .arg("--disable-gpu")
                    .arg("--no-pdf-header-footer")
                    .arg(format!("--print-to-pdf={}", pdf.display()))
                    .arg(file_url(html));
            }
        }
        cmd
    }

    /// Render a complete HTML document into `output`
    ///
    /// The engine writes to a staging file next to `output`, which replaces
    /// `output` only once it holds a non-empty PDF. A previous PDF at
    /// `output` is left alone when the engine fails.
    ///
    /// # Returns
    /// The size of the written PDF in bytes
    pub fn render(&self, html: &str, output: &Path) -> Result<u64> {
        let mut page = tempfile::Builder::new()
            .prefix("manualpdf-")
            .suffix(".html")
            .tempfile()?;
        page.write_all(html.as_bytes())?;
        page.flush()?;

        let parent = output
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let staged = tempfile::Builder::new()
            .prefix(".manualpdf-")
            .suffix(".pdf")
            .tempfile_in(parent)?
            .into_temp_path();

        tracing::debug!(
            "Running {} ({}) on {} into {}",
            self.kind.name(),
            self.executable.display(),
            page.path().display(),
            staged.display()
        );

        let result = self
            .command(page.path(), &staged)
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ConvertError::Unavailable(format!(
                        "{} could not be started: {}",
                        self.executable.display(),
                        e
                    ))
                } else {
                    ConvertError::Io(e)
                }
            })?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(ConvertError::Render(format!(
                "{} exited with {}: {}",
                self.kind.name(),
                result.status,
                stderr.trim()
            )));
        }

        if std::fs::metadata(&staged)?.len() == 0 {
            return Err(ConvertError::Render(format!(
                "{} exited successfully but wrote no PDF",
                self.kind.name()
            )));
        }

        staged.persist(output).map_err(|e| ConvertError::Io(e.error))?;
        output_size(output)
    }
}

/// Search a `PATH`-style list for an executable file
pub fn find_executable(name: &str, search_path: &OsStr) -> Option<PathBuf> {
    std::env::split_paths(search_path).find_map(|dir| {
        let candidate = dir.join(name);
        if candidate.is_file() {
            return Some(candidate);
        }
        if cfg!(windows) {
            let exe = candidate.with_extension("exe");
            if exe.is_file() {
                return Some(exe);
            }
        }
        None
    })
}

fn file_url(path: &Path) -> String {
    let absolute = path
        .canonicalize()
        .unwrap_or_else(|_| path.to_path_buf());
    let display = absolute.display().to_string().replace('\\', "/");
    if display.starts_with('/') {
        format!("file://{}", display)
    } else {
        format!("file:///{}", display)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, b"#!/bin/sh\n").unwrap();
        path
    }

    fn search_path(dirs: &[&Path]) -> OsString {
        std::env::join_paths(dirs).unwrap()
    }

    #[test]
    fn test_kind_from_executable() {
        assert_eq!(
            EngineKind::from_executable(Path::new("/usr/bin/weasyprint")),
            EngineKind::WeasyPrint
        );
        assert_eq!(
            EngineKind::from_executable(Path::new("/usr/bin/google-chrome")),
            EngineKind::Chromium
        );
    }

    #[test]
    fn test_discover_prefers_weasyprint() {
        let chrome_dir = TempDir::new().unwrap();
        let weasy_dir = TempDir::new().unwrap();
        touch(chrome_dir.path(), "chromium");
        let weasy = touch(weasy_dir.path(), "weasyprint");

        let engine =
            HtmlEngine::discover_in(&search_path(&[chrome_dir.path(), weasy_dir.path()])).unwrap();
        assert_eq!(engine.kind(), EngineKind::WeasyPrint);
        assert_eq!(engine.executable(), weasy.as_path());
    }

    #[test]
    fn test_discover_falls_back_to_chromium() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "google-chrome");

        let engine = HtmlEngine::discover_in(&search_path(&[dir.path()])).unwrap();
        assert_eq!(engine.kind(), EngineKind::Chromium);
    }

    #[test]
    fn test_discover_nothing_installed() {
        let dir = TempDir::new().unwrap();
        assert!(HtmlEngine::discover_in(&search_path(&[dir.path()])).is_none());
    }

    #[test]
    fn test_configured_missing_engine_is_unavailable() {
        let dir = TempDir::new().unwrap();
        let err = HtmlEngine::from_configured(&dir.path().join("weasyprint")).unwrap_err();
        assert!(err.is_unavailable());
    }

    #[test]
    fn test_configured_engine_by_path() {
        let dir = TempDir::new().unwrap();
        let exe = touch(dir.path(), "weasyprint");
        let engine = HtmlEngine::from_configured(&exe).unwrap();
        assert_eq!(engine, HtmlEngine::new(EngineKind::WeasyPrint, exe));
    }

    #[test]
    fn test_weasyprint_command_line() {
        let engine = HtmlEngine::new(EngineKind::WeasyPrint, "weasyprint");
        let cmd = engine.command(Path::new("/tmp/in.html"), Path::new("/tmp/out.pdf"));
        let args: Vec<_> = cmd.get_args().map(|a| a.to_string_lossy().into_owned()).collect();
        assert_eq!(args, vec!["--encoding", "utf-8", "/tmp/in.html", "/tmp/out.pdf"]);
    }

    #[test]
    fn test_chromium_command_line() {
        let engine = HtmlEngine::new(EngineKind::Chromium, "chromium");
        let cmd = engine.command(Path::new("/nonexistent/in.html"), Path::new("/tmp/out.pdf"));
        let args: Vec<_> = cmd.get_args().map(|a| a.to_string_lossy().into_owned()).collect();
        assert!(args.contains(&"--headless".to_string()));
        assert!(args.contains(&"--print-to-pdf=/tmp/out.pdf".to_string()));
        assert_eq!(args.last().unwrap(), "file:///nonexistent/in.html");
    }

    #[cfg(unix)]
    fn script(dir: &Path, name: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[cfg(unix)]
    #[test]
    fn test_render_failure_carries_stderr() {
        let dir = TempDir::new().unwrap();
        let exe = script(dir.path(), "weasyprint", "echo 'no fonts found' >&2\nexit 1");
        let output = dir.path().join("out.pdf");
        std::fs::write(&output, b"%PDF previous run").unwrap();

        let err = HtmlEngine::new(EngineKind::WeasyPrint, exe)
            .render("<html></html>", &output)
            .unwrap_err();

        match err {
            ConvertError::Render(message) => assert!(message.contains("no fonts found")),
            other => panic!("Expected Render, got {:?}", other),
        }
        assert_eq!(std::fs::read(&output).unwrap(), b"%PDF previous run");
    }

    #[cfg(unix)]
    #[test]
    fn test_render_without_output_does_not_reuse_previous_pdf() {
        let dir = TempDir::new().unwrap();
        let exe = script(dir.path(), "chromium", "exit 0");
        let output = dir.path().join("out.pdf");
        std::fs::write(&output, b"%PDF stale from yesterday").unwrap();

        let err = HtmlEngine::new(EngineKind::Chromium, exe)
            .render("<html></html>", &output)
            .unwrap_err();

        assert!(matches!(err, ConvertError::Render(_)));
        assert!(!err.is_unavailable());
        assert_eq!(std::fs::read(&output).unwrap(), b"%PDF stale from yesterday");
    }

    #[cfg(unix)]
    #[test]
    fn test_render_replaces_output() {
        let dir = TempDir::new().unwrap();
        let exe = script(dir.path(), "weasyprint", "printf '%%PDF-1.7 fresh' > \"$4\"");
        let output = dir.path().join("out.pdf");
        std::fs::write(&output, b"%PDF stale").unwrap();

        let size = HtmlEngine::new(EngineKind::WeasyPrint, exe)
            .render("<html></html>", &output)
            .unwrap();

        assert_eq!(std::fs::read(&output).unwrap(), b"%PDF-1.7 fresh");
        assert_eq!(size, std::fs::metadata(&output).unwrap().len());
        let leftovers: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_name().to_string_lossy().starts_with(".manualpdf-"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_render_with_missing_executable_is_unavailable() {
        let dir = TempDir::new().unwrap();
        let engine = HtmlEngine::new(EngineKind::WeasyPrint, dir.path().join("no-such-engine"));
        let err = engine
            .render("<html></html>", &dir.path().join("out.pdf"))
            .unwrap_err();
        assert!(err.is_unavailable());
    }
}
