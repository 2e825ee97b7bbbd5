use bezel::imaging::RustBackend;
use bezel::pipeline::{Framer, FramerOptions};
use bezel::{output, scan};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "bezel")]
#[command(about = "Put app screenshots into device frames")]
#[command(long_about = "\
Put app screenshots into device frames

Every PNG under the given path is identified by its pixel size and framed
with the matching device artwork. The result is written next to the original
as <name>_framed.png.

Screenshot structure:

  screenshots/
  ├── Framefile.json               # Background, captions, gloss (optional)
  ├── background.jpg
  ├── en-US/
  │   ├── title.strings            # Localized titles: \"01-Home\" = \"Plan your trip\";
  │   ├── keyword.strings          # Localized keywords
  │   └── iPhone6-01-Home.png
  └── de-DE/
      └── iPhone6-01-Home.png

Frames directory:

  frames/
  ├── gloss.png
  ├── iphone-4.7-portrait.png      # <device>-<orientation>.png
  └── ...

Without a Framefile the screenshot is only put into its frame. With a
background and a title, the framed device is placed on the background with
the captions above it.")]
#[command(version = version_string())]
struct Cli {
    /// Directory holding the frame artwork
    #[arg(long, default_value = "frames", global = true)]
    frames_dir: PathBuf,

    /// Gloss overlay image (default: gloss.png in the frames directory)
    #[arg(long, global = true)]
    gloss: Option<PathBuf>,

    /// Fallback caption font when the Framefile names none
    #[arg(long, global = true)]
    font: Option<PathBuf>,

    /// Worker threads (default: all cores)
    #[arg(long, global = true)]
    threads: Option<usize>,

    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Frame every screenshot under a path
    Frame {
        /// Screenshot file or directory
        #[arg(default_value = ".")]
        path: PathBuf,
    },
    /// Report device, frame asset and offset per screenshot without framing
    Check {
        /// Screenshot file or directory
        #[arg(default_value = ".")]
        path: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let backend = match cli.font.clone() {
        Some(font) => RustBackend::with_default_font(Some(font)),
        None => RustBackend::new(),
    };
    if backend.default_font().is_none() {
        tracing::debug!("no system font found, captions use the embedded font");
    }
    let options = FramerOptions {
        frames_dir: cli.frames_dir.clone(),
        gloss: cli.gloss.clone(),
    };
    let framer = Framer::new(backend, options);

    match cli.command {
        Command::Frame { path } => {
            init_thread_pool(cli.threads);
            let report = scan::scan(framer.backend(), &path)?;
            output::print_skipped(&report.skipped, &path);

            let (tx, rx) = std::sync::mpsc::channel();
            let root = path.clone();
            let printer = std::thread::spawn(move || {
                for event in rx {
                    output::print_frame_event(&event, &root);
                }
            });
            let summary = framer.frame_all(&report.screenshots, Some(tx));
            printer.join().ok();
            output::print_summary(&summary);

            if !summary.is_success() {
                return Err(format!("{} screenshot(s) failed", summary.failed.len()).into());
            }
        }
        Command::Check { path } => {
            println!("==> Checking {}", path.display());
            let report = scan::scan(framer.backend(), &path)?;
            let entries: Vec<_> = report
                .screenshots
                .iter()
                .map(|shot| framer.check(shot))
                .collect();
            output::print_check_output(&entries, &report.skipped, &path);
        }
    }

    Ok(())
}

/// Install the tracing subscriber. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let default_level = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

/// Initialize the rayon thread pool.
///
/// Caps at the number of available CPU cores.
fn init_thread_pool(requested: Option<usize>) {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    let threads = requested.map_or(cores, |n| n.clamp(1, cores));
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}
