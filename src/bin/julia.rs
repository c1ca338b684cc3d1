use clap::{App, Arg, ArgMatches};
use log::warn;
use num::Complex;
use std::str::FromStr;
use std::time::Instant;

use juliaset::config::{preset, PRESET_COUNT};
use juliaset::{
    Canvas, FileSink, FractalConfig, ImageSink, Julia, Mandelbrot, PointEvaluator, Processing,
    RenderError, View,
};

fn parse_pair<T>(s: &str, separator: char) -> Option<(T, T)>
where
    T: FromStr,
{
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

fn parse_complex(s: &str) -> Option<Complex<f64>> {
    match parse_pair(s, ',') {
        Some((re, im)) => Some(Complex { re, im }),
        None => None,
    }
}

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

fn validate_range<T: FromStr + PartialOrd>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

const OUTPUT: &str = "output";
const SIZE: &str = "size";
const THREADS: &str = "threads";
const ITERATIONS: &str = "iterations";
const SAMPLES: &str = "samples";
const CONSTANT: &str = "constant";
const PRESET: &str = "preset";
const CENTER: &str = "center";
const ZOOM: &str = "zoom";
const FRACTAL: &str = "fractal";

fn args<'a>() -> ArgMatches<'a> {
    App::new("julia")
        .version("0.1.0")
        .about("Anti-aliased Julia set renderer")
        .arg(
            Arg::with_name(OUTPUT)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .default_value("julia.png")
                .help("Output file; the format follows the extension"),
        )
        .arg(
            Arg::with_name(SIZE)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("2600x2000")
                .validator(|s| validate_pair::<u16>(&s, 'x', "Could not parse output image size"))
                .help("Size of output image"),
        )
        .arg(
            Arg::with_name(THREADS)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .default_value("8")
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        1024,
                        "Could not parse thread count",
                        "Thread count must be between 1 and 1024",
                    )
                })
                .help("Number of render workers"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value("512")
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        1_000_000,
                        "Could not parse iteration count",
                        "Iteration count must be between 1 and 1000000",
                    )
                })
                .help("Maximum number of iterations per point"),
        )
        .arg(
            Arg::with_name(SAMPLES)
                .long(SAMPLES)
                .short("a")
                .takes_value(true)
                .default_value("2")
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        64,
                        "Could not parse sample count",
                        "Sample count must be between 1 and 64",
                    )
                })
                .help("Samples per pixel along each axis"),
        )
        .arg(
            Arg::with_name(CONSTANT)
                .long(CONSTANT)
                .short("c")
                .takes_value(true)
                .allow_hyphen_values(true)
                .conflicts_with(PRESET)
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse Julia constant"))
                .help("Julia constant c, as RE,IM [default: 0.28,0.008]"),
        )
        .arg(
            Arg::with_name(PRESET)
                .long(PRESET)
                .short("p")
                .takes_value(true)
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        PRESET_COUNT,
                        "Could not parse preset number",
                        &format!("Preset must be between 1 and {}", PRESET_COUNT),
                    )
                })
                .help("Use one of the built-in Julia constants"),
        )
        .arg(
            Arg::with_name(CENTER)
                .long(CENTER)
                .short("m")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("0,0")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse view center"))
                .help("Point of the complex plane at the middle of the image"),
        )
        .arg(
            Arg::with_name(ZOOM)
                .long(ZOOM)
                .short("z")
                .takes_value(true)
                .default_value("1.5")
                .validator(|s| match f64::from_str(&s) {
                    Ok(z) if z.is_finite() && z > 0.0 => Ok(()),
                    Ok(_) => Err("Zoom must be greater than zero".to_string()),
                    Err(_) => Err("Could not parse zoom".to_string()),
                })
                .help("Magnification"),
        )
        .arg(
            Arg::with_name(FRACTAL)
                .long(FRACTAL)
                .short("f")
                .takes_value(true)
                .possible_values(&["julia", "mandelbrot"])
                .default_value("julia")
                .help("Which escape-time fractal to draw"),
        )
        .get_matches()
}

fn config(matches: &ArgMatches) -> Result<FractalConfig, RenderError> {
    // Every value below has a default and has passed its validator.
    let (width, height) = parse_pair::<usize>(matches.value_of(SIZE).unwrap_or_default(), 'x')
        .unwrap_or_default();
    let number =
        |name: &str| usize::from_str(matches.value_of(name).unwrap_or_default()).unwrap_or(0);

    let constant = match (matches.value_of(PRESET), matches.value_of(CONSTANT)) {
        (Some(n), _) => usize::from_str(n).ok().and_then(preset),
        (None, Some(c)) => parse_complex(c),
        (None, None) => None,
    }
    .unwrap_or(View::default().constant);
    let center = matches
        .value_of(CENTER)
        .and_then(parse_complex)
        .unwrap_or(View::default().center);
    let zoom = matches
        .value_of(ZOOM)
        .and_then(|z| f64::from_str(z).ok())
        .unwrap_or(0.0);

    FractalConfig::new(
        Canvas { width, height },
        Processing {
            workers: number(THREADS),
            max_iterations: number(ITERATIONS),
            samples: number(SAMPLES),
        },
        View {
            constant,
            center,
            zoom,
        },
    )
}

fn run(matches: &ArgMatches) -> Result<(), RenderError> {
    let config = config(matches)?;
    if config.workers() > num_cpus::get() {
        warn!(
            "{} workers requested but only {} cpus available",
            config.workers(),
            num_cpus::get()
        );
    }

    let evaluator: Box<dyn PointEvaluator> = match matches.value_of(FRACTAL) {
        Some("mandelbrot") => Box::new(Mandelbrot::new()),
        _ => Box::new(Julia::new(config.constant())),
    };

    let start = Instant::now();
    let raster = juliaset::render(&config, evaluator.as_ref())?;
    println!("\nTime taken: {:?}", start.elapsed());

    FileSink::new(matches.value_of(OUTPUT).unwrap_or("julia.png")).persist(&raster)
}

fn main() {
    env_logger::init();
    let matches = args();
    if let Err(e) = run(&matches) {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}
