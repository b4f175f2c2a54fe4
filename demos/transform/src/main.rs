use argh::FromArgs;
use std::path::PathBuf;

use warpkit::imgproc::{
    flip::ReflectAxis,
    interpolation::{FillColor, InterpolationMode},
    parallel::ExecutionStrategy,
    transform::{transform, TransformOptions, TransformSpec},
};
use warpkit::io::functional as F;

#[derive(FromArgs)]
/// Apply a geometric transform to an image file
struct Args {
    /// path to an input image
    #[argh(option, short = 'i')]
    input: PathBuf,

    /// path to the output image
    #[argh(option, short = 'o')]
    output: PathBuf,

    /// operation: translate, rotate, scale, reflect or resize
    #[argh(option, default = "String::from(\"rotate\")")]
    op: String,

    /// horizontal shift in pixels
    #[argh(option, default = "0.0")]
    dx: f32,

    /// vertical shift in pixels
    #[argh(option, default = "0.0")]
    dy: f32,

    /// rotation angle in degrees, counter-clockwise
    #[argh(option, default = "0.0")]
    angle: f32,

    /// horizontal scale factor
    #[argh(option, default = "1.0")]
    sx: f32,

    /// vertical scale factor
    #[argh(option, default = "1.0")]
    sy: f32,

    /// reflection axis: horizontal, vertical or both
    #[argh(option, default = "String::from(\"vertical\")")]
    axis: String,

    /// output width for resize
    #[argh(option)]
    width: Option<usize>,

    /// output height for resize
    #[argh(option)]
    height: Option<usize>,

    /// grow the canvas so that rotations are not cropped
    #[argh(switch)]
    lossless: bool,

    /// sample with bilinear interpolation instead of nearest neighbor
    #[argh(switch)]
    bilinear: bool,

    /// sample with bicubic interpolation, takes precedence over --bilinear
    #[argh(switch)]
    bicubic: bool,

    /// gray value for pixels outside the source
    #[argh(option, default = "0")]
    fill: u8,

    /// number of worker threads, all cores by default
    #[argh(option)]
    threads: Option<usize>,

    /// path to a JSON file with a list of steps, overrides --op
    #[argh(option)]
    job: Option<PathBuf>,
}

fn parse_axis(axis: &str) -> Result<ReflectAxis, Box<dyn std::error::Error>> {
    match axis {
        "horizontal" => Ok(ReflectAxis::Horizontal),
        "vertical" => Ok(ReflectAxis::Vertical),
        "both" => Ok(ReflectAxis::Both),
        other => Err(format!("unknown reflection axis: {other}").into()),
    }
}

fn steps_from_args(args: &Args) -> Result<Vec<TransformSpec>, Box<dyn std::error::Error>> {
    if let Some(job) = &args.job {
        let steps: Vec<TransformSpec> = serde_json::from_str(&std::fs::read_to_string(job)?)?;
        return Ok(steps);
    }

    let spec = match args.op.as_str() {
        "translate" => TransformSpec::Translate {
            dx: args.dx,
            dy: args.dy,
        },
        "rotate" => TransformSpec::rotate(args.angle),
        "scale" => TransformSpec::Scale {
            sx: args.sx,
            sy: args.sy,
        },
        "reflect" => TransformSpec::Reflect {
            axis: parse_axis(&args.axis)?,
        },
        "resize" => match (args.width, args.height) {
            (Some(width), Some(height)) => TransformSpec::Resize { width, height },
            _ => return Err("resize needs --width and --height".into()),
        },
        other => return Err(format!("unknown operation: {other}").into()),
    };

    Ok(vec![spec])
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Args = argh::from_env();

    let steps = steps_from_args(&args)?;

    let options = TransformOptions::default()
        .with_interpolation(if args.bicubic {
            InterpolationMode::Bicubic
        } else if args.bilinear {
            InterpolationMode::Bilinear
        } else {
            InterpolationMode::Nearest
        })
        .with_fill(FillColor::Gray(args.fill))
        .with_lossless(args.lossless)
        .with_strategy(match args.threads {
            Some(n) => ExecutionStrategy::Fixed(n),
            None => ExecutionStrategy::ParallelRows,
        });

    // read the image
    let mut raster = F::read_raster(&args.input)?;
    log::info!("read {} from {}", raster.size(), args.input.display());

    for spec in steps.iter() {
        raster = transform(&raster, spec, &options)?;
        log::info!("{:?} -> {}", spec, raster.size());
    }

    F::write_raster(&args.output, &raster)?;
    log::info!("wrote {}", args.output.display());

    Ok(())
}
