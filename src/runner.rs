//! The wrapped `du` process: spawn, stream, recolor, forward exit status.
//!
//! Output is consumed incrementally so colored lines appear as `du`
//! produces them; nothing is buffered beyond the current line. The child's
//! stderr is inherited, so `du`'s own diagnostics reach the user untouched.

use std::ffi::OsString;
use std::io::{self, BufRead, BufReader, Write};
use std::process::{Command, ExitStatus, Stdio};

use anyhow::{Context, Result};

use crate::config::Config;
use crate::transform::{transform, TransformError};

/// The wrapped binary. Resolved through `PATH` like any exec.
const DU_BIN: &str = "du";

/// Run `du` with the forwarded arguments, recoloring its stdout onto ours.
/// Returns the exit code to terminate with.
pub fn run(config: &Config, args: &[OsString]) -> Result<i32> {
    let mut stdout = io::stdout().lock();
    run_command(DU_BIN, args, config, &mut stdout)
}

fn run_command(
    bin: &str,
    args: &[OsString],
    config: &Config,
    writer: &mut impl Write,
) -> Result<i32> {
    let mut child = Command::new(bin)
        .args(args)
        .stdout(Stdio::piped())
        .spawn()
        .with_context(|| format!("failed to start `{bin}`"))?;

    let child_stdout = child
        .stdout
        .take()
        .context("failed to capture child stdout")?;
    stream_lines(BufReader::new(child_stdout), config, writer)?;

    let status = child
        .wait()
        .with_context(|| format!("failed to wait for `{bin}`"))?;
    Ok(exit_code(status))
}

/// Transform lines as they arrive, preserving order. A line that fails to
/// parse is emitted unmodified; a write failure (broken pipe downstream)
/// is fatal.
fn stream_lines(
    reader: impl BufRead,
    config: &Config,
    writer: &mut impl Write,
) -> Result<()> {
    for line in reader.lines() {
        let line = line.context("failed to read child output")?;
        let output = match transform(&line, config) {
            Ok(colored) => colored,
            Err(TransformError::UnparsableLine | TransformError::UnparsableSize { .. }) => line,
            Err(err @ TransformError::InvalidValue(_)) => return Err(err.into()),
        };
        writeln!(writer, "{output}").context("failed to write output")?;
    }
    Ok(())
}

/// Forward the child's exit code; a child killed by a signal maps to the
/// conventional `128 + signo`.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;

    fn sh(script: &str) -> Vec<OsString> {
        vec![OsString::from("-c"), OsString::from(script)]
    }

    #[test]
    fn test_stream_passthrough_is_identity() {
        let input = "garbage line without size\n4.0K\tfoo\nnot-a-size\tbar\n";
        let config = Config::resolve(Some("NONE"), false);
        let mut out = Vec::new();
        stream_lines(Cursor::new(input), &config, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), input);
    }

    #[test]
    fn test_stream_colors_parsable_lines_only() {
        let input = "4.0K\tfoo\ngarbage line without size\n";
        let config = Config::resolve(Some("SUNSET"), false);
        let mut out = Vec::new();
        stream_lines(Cursor::new(input), &config, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("\x1b[38;2;"));
        assert!(lines[0].ends_with("\x1b[0m\tfoo"));
        assert_eq!(lines[1], "garbage line without size");
    }

    #[test]
    fn test_run_command_streams_child_output() {
        let config = Config::resolve(Some("NONE"), false);
        let mut out = Vec::new();
        let code = run_command(
            "sh",
            &sh("printf '4.0K\\tfoo\\n12K\\tbar\\n'"),
            &config,
            &mut out,
        )
        .unwrap();
        assert_eq!(code, 0);
        assert_eq!(String::from_utf8(out).unwrap(), "4.0K\tfoo\n12K\tbar\n");
    }

    #[test]
    fn test_run_command_forwards_exit_code() {
        let config = Config::resolve(Some("NONE"), false);
        let mut out = Vec::new();
        let code = run_command("sh", &sh("exit 3"), &config, &mut out).unwrap();
        assert_eq!(code, 3);
    }

    #[test]
    fn test_run_command_launch_failure() {
        let config = Config::resolve(Some("NONE"), false);
        let mut out = Vec::new();
        let result = run_command("colordu-test-missing-binary", &[], &config, &mut out);
        assert!(result.is_err());
    }

    #[test]
    fn test_run_command_with_real_du() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("data.bin"), vec![0u8; 16 * 1024]).unwrap();

        let config = Config::resolve(Some("SUNSET"), false);
        let args = vec![OsString::from("-h"), dir.path().as_os_str().to_os_string()];
        let mut out = Vec::new();
        let code = run_command("du", &args, &config, &mut out).unwrap();

        assert_eq!(code, 0);
        let text = String::from_utf8(out).unwrap();
        assert!(!text.is_empty());
        assert!(text.contains("\x1b[38;2;"));
    }
}
