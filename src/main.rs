use std::{
    io::{self, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{ArgAction, Parser, ValueEnum};
use tracing::Level;
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};

use mazepath::{build_maze, config::MazeConfig, path::Side, render};

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum OutputFormat {
    /// An SVG image of the maze
    #[default]
    Svg,
    /// One `M x y` / `L x y` drawing command per line
    Segments,
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of cells in each column
    #[arg(short, long, default_value_t = 10)]
    rows: u16,

    /// Number of cells in each row
    #[arg(short, long, default_value_t = 10)]
    cols: u16,

    /// Boundary side with the entrance gap
    #[arg(long, value_enum, default_value_t = Side::Bottom)]
    entrance: Side,

    /// Boundary side with the exit gap
    #[arg(long, value_enum, default_value_t = Side::Left)]
    exit: Side,

    /// Canvas width in pixels
    #[arg(long, default_value_t = 320)]
    width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 320)]
    height: u32,

    /// Blank border around the maze in pixels
    #[arg(short, long, default_value_t = 10)]
    margin: u32,

    /// Seed for a reproducible maze
    #[arg(short, long)]
    seed: Option<u64>,

    #[arg(short, long, value_enum, default_value_t)]
    format: OutputFormat,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Send logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// Opens `path` for appending without rotation, creating its directory if needed.
fn open_log_file(path: &Path) -> io::Result<RollingFileAppender> {
    let Some(file_name) = path.file_name() else {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "log file path has no file name",
        ));
    };
    let dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(dir)
        .map_err(io::Error::other)
}

/// Installs the global subscriber. The returned guard flushes the log file when dropped.
fn init_tracing(verbose: u8, log_file: Option<&Path>) -> io::Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(io::stderr)
            .init();
        return Ok(None);
    };

    let (writer, guard) = tracing_appender::non_blocking(open_log_file(path)?);
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(writer)
        .init();
    Ok(Some(guard))
}

fn main() -> ExitCode {
    let args = Args::parse();

    let _guard = match init_tracing(args.verbose, args.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to set up logging: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let config = MazeConfig {
        rows: args.rows,
        cols: args.cols,
        entrance: args.entrance,
        exit: args.exit,
        canvas_width: args.width,
        canvas_height: args.height,
        margin: args.margin,
    };

    let drawing = match build_maze(&config, args.seed) {
        Ok(drawing) => drawing,
        Err(e) => {
            tracing::error!("[main] Maze generation failed: {}", e);
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let written = match (args.format, args.output.as_deref()) {
        (OutputFormat::Svg, Some(path)) => svg::save(path, &render::to_svg(&drawing)),
        (OutputFormat::Segments, Some(path)) => std::fs::write(path, render::to_text(&drawing)),
        (OutputFormat::Svg, None) => writeln!(io::stdout(), "{}", render::to_svg(&drawing)),
        (OutputFormat::Segments, None) => write!(io::stdout(), "{}", render::to_text(&drawing)),
    };

    match written {
        Ok(()) => {
            if let Some(path) = &args.output {
                tracing::info!("[main] Saved maze to {}", path.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to write maze: {}", e);
            ExitCode::FAILURE
        }
    }
}
