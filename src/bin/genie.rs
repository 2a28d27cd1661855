use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use genie::{
    Axis, Direction, Edge, GenieConfig, GenieRequest, RasterSnapshot, Rect, SnapshotProvider,
};

#[derive(Parser, Debug)]
#[command(name = "genie", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a genie timeline and write it as JSON.
    Timeline(TimelineArgs),
    /// Cut an element PNG into margin-padded slice PNGs.
    Slices(SlicesArgs),
}

#[derive(Parser, Debug)]
struct TimelineArgs {
    /// Element frame as `X,Y,W,H`.
    #[arg(long, value_parser = parse_rect)]
    element: Rect,

    /// Destination rect as `X,Y,W,H`.
    #[arg(long, value_parser = parse_rect)]
    dest: Rect,

    /// Element edge that travels into the destination (`top`, `left`, `bottom`, `right`).
    #[arg(long)]
    edge: Edge,

    /// Animation length in seconds.
    #[arg(long)]
    duration: f64,

    /// Play the animation backwards (expand out of the destination).
    #[arg(long)]
    reverse: bool,

    /// Optional config JSON; missing keys keep their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SlicesArgs {
    /// Input element PNG.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Travel edge; decides the slicing axis.
    #[arg(long)]
    edge: Edge,

    /// Pixels per point of the input image.
    #[arg(long, default_value_t = 1.0)]
    scale: f64,

    /// Optional config JSON; missing keys keep their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory receiving `slice_NNNN.png`.
    #[arg(long)]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Timeline(args) => cmd_timeline(args),
        Command::Slices(args) => cmd_slices(args),
    }
}

fn parse_rect(s: &str) -> Result<Rect, String> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid rect '{s}': {e}"))?;
    match parts.as_slice() {
        [x, y, w, h] => Ok(Rect::new(*x, *y, x + w, y + h)),
        _ => Err(format!("expected X,Y,W,H, got '{s}'")),
    }
}

fn read_config(path: Option<&Path>) -> anyhow::Result<GenieConfig> {
    let Some(path) = path else {
        return Ok(GenieConfig::default());
    };
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("read config '{}'", path.display()))?;
    GenieConfig::from_json_str(&s).with_context(|| format!("parse config '{}'", path.display()))
}

fn cmd_timeline(args: TimelineArgs) -> anyhow::Result<()> {
    let config = read_config(args.config.as_deref())?;
    let axis = args.edge.axis();
    let margined = match axis {
        Axis::Horizontal => args.element.inflate(0.0, config.render_margin),
        Axis::Vertical => args.element.inflate(config.render_margin, 0.0),
    };

    let request = GenieRequest {
        element_frame: args.element,
        slices: genie::slice_sizes(margined.size(), axis, config.slice_thickness),
        edge: args.edge,
        destination: args.dest,
        duration_secs: args.duration,
        direction: if args.reverse {
            Direction::Reverse
        } else {
            Direction::Forward
        },
    };
    let timeline = genie::compute_genie_timeline(&request, &config)?;

    match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(path)
                .with_context(|| format!("create output '{}'", path.display()))?;
            let mut w = BufWriter::new(f);
            serde_json::to_writer_pretty(&mut w, &timeline).with_context(|| "write timeline JSON")?;
            w.flush()?;
        }
        None => {
            let mut out = std::io::stdout().lock();
            serde_json::to_writer_pretty(&mut out, &timeline)
                .with_context(|| "write timeline JSON")?;
            writeln!(out)?;
        }
    }

    eprintln!(
        "frames={} slices={} fingerprint={:016x}",
        timeline.frame_count,
        timeline.slice_count(),
        timeline.fingerprint()
    );
    if timeline.overlap_warning {
        eprintln!("warning: element overlaps the destination edge; slices may glitch");
    }
    if let Some(path) = &args.out {
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}

fn cmd_slices(args: SlicesArgs) -> anyhow::Result<()> {
    let config = read_config(args.config.as_deref())?;
    let element = image::open(&args.in_path)
        .with_context(|| format!("open element image '{}'", args.in_path.display()))?
        .to_rgba8();

    let mut snapshots = RasterSnapshot::new(element, args.scale)?;
    let slices = snapshots.capture_slices(args.edge.axis(), &config)?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;
    for (i, slice) in slices.iter().enumerate() {
        let path = args.out_dir.join(format!("slice_{i:04}.png"));
        slice
            .pixels
            .save_with_format(&path, image::ImageFormat::Png)
            .with_context(|| format!("write png '{}'", path.display()))?;
    }

    eprintln!("wrote {} slices to {}", slices.len(), args.out_dir.display());
    Ok(())
}
