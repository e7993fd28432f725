use std::io::{IsTerminal, Read};
use std::path::Path;

use anyhow::{bail, Context};
use colored::Colorize;

use devkit_diff::compare;
use devkit_protocol::{JsonCodec, TextDiffResponse};
use devkit_server::{DevkitServer, ServerConfig};

use crate::cli::*;
use crate::render;

const STDIN: &str = "-";

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Diff(args) => cmd_diff(args, cli.format),
        Command::Serve(args) => cmd_serve(args),
    }
}

fn cmd_diff(args: DiffArgs, format: OutputFormat) -> anyhow::Result<()> {
    if args.original == Path::new(STDIN) && args.modified == Path::new(STDIN) {
        bail!("only one input can be read from stdin");
    }
    let original = read_input(&args.original)?;
    let modified = read_input(&args.modified)?;
    let result = compare(&original, &modified);

    match format {
        OutputFormat::Json => {
            let response = TextDiffResponse::from(result);
            println!("{}", JsonCodec::encode_pretty(&response)?);
            if response.is_error() {
                bail!(response.error);
            }
        }
        OutputFormat::Text => {
            let report = result?;
            let color = std::io::stdout().is_terminal();
            if !args.stat {
                match args.view {
                    ViewMode::Unified => print!("{}", render::unified(&report, color)),
                    ViewMode::Split => print!("{}", render::split(&report, color)),
                }
            }
            let summary = render::stats_line(report.stats());
            if color {
                println!("{}", summary.bold());
            } else {
                println!("{summary}");
            }
        }
    }
    Ok(())
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::from_file(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }

    println!("{} devkit server on {}", "✓".green().bold(), config.bind_addr.to_string().bold());
    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    runtime.block_on(DevkitServer::new(config).serve())?;
    Ok(())
}

/// Read a file, or stdin for `-`. Invalid UTF-8 is replaced rather than rejected.
fn read_input(path: &Path) -> anyhow::Result<String> {
    let bytes = if path == Path::new(STDIN) {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("failed to read stdin")?;
        buf
    } else {
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?
    };
    Ok(decode_text(bytes, path))
}

fn decode_text(bytes: Vec<u8>, path: &Path) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("{} is not valid UTF-8; invalid bytes replaced", path.display());
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn file_with(content: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    fn diff_args(original: PathBuf, modified: PathBuf) -> DiffArgs {
        DiffArgs { original, modified, view: ViewMode::Unified, stat: false }
    }

    #[test]
    fn read_input_from_file() {
        let file = file_with(b"a\nb\n");
        assert_eq!(read_input(file.path()).unwrap(), "a\nb\n");
    }

    #[test]
    fn read_input_missing_file() {
        let err = read_input(Path::new("/nonexistent/input.txt")).unwrap_err();
        assert!(err.to_string().contains("failed to read /nonexistent/input.txt"));
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let text = decode_text(vec![b'a', 0xFF, b'\n', b'b'], Path::new("x"));
        assert_eq!(text, "a\u{FFFD}\nb");
    }

    #[test]
    fn both_stdin_rejected() {
        let args = diff_args(PathBuf::from("-"), PathBuf::from("-"));
        let err = cmd_diff(args, OutputFormat::Text).unwrap_err();
        assert!(err.to_string().contains("only one input"));
    }

    #[test]
    fn diff_files_text_and_json() {
        let old = file_with(b"a\nb\nc\n");
        let new = file_with(b"a\nX\nc\n");
        let args = diff_args(old.path().to_path_buf(), new.path().to_path_buf());
        cmd_diff(args, OutputFormat::Text).unwrap();
        let args = diff_args(old.path().to_path_buf(), new.path().to_path_buf());
        cmd_diff(args, OutputFormat::Json).unwrap();
    }

    #[test]
    fn serve_with_missing_config_fails() {
        let args = ServeArgs { bind: None, config: Some(PathBuf::from("/nonexistent/devkit.toml")) };
        let err = cmd_serve(args).unwrap_err();
        assert!(err.to_string().contains("failed to load"));
    }
}
