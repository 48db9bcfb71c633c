//! Showing the rendered page to the operator

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Default location of the report page for a given histogram file.
///
/// `<temp dir>/<file stem>-latency.html`, so repeated runs against the same file
/// replace the previous page.
pub fn default_output_path(histogram_file: &Path) -> PathBuf {
    let stem = histogram_file
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "histogram".to_string());

    std::env::temp_dir().join(format!("{}-latency.html", stem))
}

/// Opens `page` in the default browser without waiting for it to exit.
pub fn open_in_browser(page: &Path) -> io::Result<()> {
    browser_command(page)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
}

fn browser_command(page: &Path) -> Command {
    if cfg!(target_os = "windows") {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", ""]).arg(page);
        command
    } else if cfg!(target_os = "macos") {
        let mut command = Command::new("open");
        command.arg(page);
        command
    } else {
        let mut command = Command::new("xdg-open");
        command.arg(page);
        command
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_uses_file_stem() {
        let path = default_output_path(Path::new("/data/run-1.hgrm"));
        assert_eq!(path, std::env::temp_dir().join("run-1-latency.html"));
    }

    #[test]
    fn default_output_without_stem() {
        let path = default_output_path(Path::new("/"));
        assert_eq!(path, std::env::temp_dir().join("histogram-latency.html"));
    }

    #[test]
    fn command_targets_page() {
        let command = browser_command(Path::new("/tmp/page.html"));
        let args: Vec<_> = command.get_args().collect();
        assert_eq!(args.last().map(|arg| arg.to_os_string()), Some("/tmp/page.html".into()));
    }
}
