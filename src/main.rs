use std::path::PathBuf;

use clap::Parser;
use penkit::ServoSettings;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Servo angle when the pen is down
    #[arg(long, default_value_t = 160)]
    down_angle: u16,

    /// Delay after lowering the pen, in milliseconds
    #[arg(long, default_value_t = 100)]
    down_delay: u64,

    /// Servo angle when the pen is up
    #[arg(long, default_value_t = 143)]
    up_angle: u16,

    /// Delay after lifting the pen, in milliseconds
    #[arg(long, default_value_t = 100)]
    up_delay: u64,

    /// Maximum distance between a G1 move and a following G0 move for
    /// which the G0 is merged away instead of lifting the pen
    #[arg(long, default_value_t = 0.2)]
    merge_threshold: f64,

    /// G-code input file
    #[arg(long)]
    input: PathBuf,

    /// G-code output file (stdout when omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    penkit::init_logging()?;

    let args = Args::parse();
    let settings = ServoSettings {
        down_angle: args.down_angle,
        down_delay_ms: args.down_delay,
        up_angle: args.up_angle,
        up_delay_ms: args.up_delay,
        merge_threshold: args.merge_threshold,
    };
    settings.validate()?;

    penkit::process_file(&args.input, args.output.as_deref(), &settings)
}
