use clap::{App, Arg, ArgMatches};
use fractal::config::{
    parse_complex, parse_degree, parse_region, parse_size, DEFAULT_DEGREE, DEFAULT_MAX, DEFAULT_MIN,
};
use fractal::{write_image, Fractal, FractalError, RenderConfig};
use log::debug;

const OUTPUT_FILE: &str = "fractal.ppm";

const SIZE: &str = "output";
const DEGREE: &str = "degree";
const JULIA: &str = "julia";
const MAX: &str = "max";

// Short and long spellings of every flag that takes a value.
const VALUE_FLAGS: [(&str, &str); 4] = [
    ("-o", "--output"),
    ("-d", "--degree"),
    ("-j", "--julia"),
    ("-m", "--max"),
];

const EXAMPLES: &str = "EXAMPLES:
    fractal -o=1920,1080
        A 1920x1080 image of the Mandelbrot set.
    fractal -o=500,500 -j=-0.3,0.7
        A 500x500 image of the degree-2 Julia set for -0.3+0.7i.
    fractal -o=500,500 -d=4
        A 500x500 image of the degree-4 Mandelbrot set.
    fractal -o=800,600 -m=1,1.2,-2,-1.2
        An 800x600 image of the region from -2-1.2i to 1+1.2i.";

fn validate<T>(parsed: Result<T, FractalError>) -> Result<(), String> {
    parsed.map(|_| ()).map_err(|e| e.to_string())
}

fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("fractal")
        .version("0.1.0")
        .about("Renders Mandelbrot and Julia sets of any degree to fractal.ppm")
        .after_help(EXAMPLES)
        .arg(
            Arg::with_name(SIZE)
                .required(true)
                .long(SIZE)
                .short("o")
                .takes_value(true)
                .use_delimiter(false)
                .value_name("w,h")
                .validator(|s| validate(parse_size(&s)))
                .help("Dimensions of the output image"),
        )
        .arg(
            Arg::with_name(DEGREE)
                .required(false)
                .long(DEGREE)
                .short("d")
                .takes_value(true)
                .use_delimiter(false)
                .value_name("d")
                .allow_hyphen_values(true)
                .validator(|s| validate(parse_degree(&s)))
                .help("Order of the Mandelbrot/Julia set, at least 2"),
        )
        .arg(
            Arg::with_name(JULIA)
                .required(false)
                .long(JULIA)
                .short("j")
                .takes_value(true)
                .use_delimiter(false)
                .value_name("re,im")
                .allow_hyphen_values(true)
                .validator(|s| validate(parse_complex(&s)))
                .help("Draw the Julia set for this constant instead of the Mandelbrot set"),
        )
        .arg(
            Arg::with_name(MAX)
                .required(false)
                .long(MAX)
                .short("m")
                .takes_value(true)
                .use_delimiter(false)
                .value_name("x,y[,a,b]")
                .allow_hyphen_values(true)
                .validator(|s| validate(parse_region(&s)))
                .help("Region maximum x,y and minimum a,b; the minimum defaults to -x,-y"),
        )
}

/// Drops everything the command line does not know about, so that
/// unrecognized flags are ignored rather than refused.
fn known_args<I: Iterator<Item = String>>(mut args: I) -> Vec<String> {
    let mut kept: Vec<String> = args.next().into_iter().collect();
    while let Some(arg) = args.next() {
        if arg == "-h" || arg == "--help" {
            kept.push(arg);
            continue;
        }
        let flag = VALUE_FLAGS.iter().find(|&&(short, long)| {
            arg.starts_with(short) || arg == long || arg.starts_with(&format!("{}=", long))
        });
        match flag {
            Some(&(short, long)) => {
                let detached = arg == short || arg == long;
                kept.push(arg);
                if detached {
                    kept.extend(args.next());
                }
            }
            None => debug!("ignoring unrecognized argument '{}'", arg),
        }
    }
    kept
}

fn run(matches: &ArgMatches) -> Result<(), failure::Error> {
    let (width, height) = parse_size(matches.value_of(SIZE).unwrap_or(""))?;
    let degree = matches.value_of(DEGREE).map_or(Ok(DEFAULT_DEGREE), parse_degree)?;
    let fractal = match matches.value_of(JULIA) {
        Some(c) => Fractal::Julia(parse_complex(c)?),
        None => Fractal::Mandelbrot,
    };
    let (max, min) = matches
        .value_of(MAX)
        .map_or(Ok((DEFAULT_MAX, DEFAULT_MIN)), parse_region)?;

    let config = RenderConfig::new(width, height, degree, max, min, fractal)?;
    write_image(OUTPUT_FILE, &config)?;
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Nothing recognizable on the command line: show the usage.
    let args = known_args(std::env::args());
    if args.len() <= 1 {
        if let Err(e) = app().print_help() {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
        println!();
        return;
    }

    let matches = app().get_matches_from(args);
    if let Err(e) = run(&matches) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kept(args: &[&str]) -> Vec<String> {
        known_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn unknown_flags_are_dropped() {
        assert_eq!(
            kept(&["fractal", "-x", "-o=2,2", "stray", "--verbose"]),
            vec!["fractal", "-o=2,2"]
        );
    }

    #[test]
    fn detached_values_follow_their_flag() {
        assert_eq!(
            kept(&["fractal", "-o", "4,4", "-j", "-0.3,0.7", "--degree", "3"]),
            vec!["fractal", "-o", "4,4", "-j", "-0.3,0.7", "--degree", "3"]
        );
    }

    #[test]
    fn attached_values_stand_alone() {
        assert_eq!(
            kept(&["fractal", "-o4,4", "--max=1,1", "-h"]),
            vec!["fractal", "-o4,4", "--max=1,1", "-h"]
        );
    }

    #[test]
    fn clap_accepts_the_filtered_arguments() {
        let matches = app()
            .get_matches_from_safe(kept(&["fractal", "-o=3,2", "-q", "-j", "-0.3,0.7", "-d=4"]))
            .unwrap();
        assert_eq!(matches.value_of(SIZE), Some("3,2"));
        assert_eq!(matches.value_of(JULIA), Some("-0.3,0.7"));
        assert_eq!(matches.value_of(DEGREE), Some("4"));
    }

    #[test]
    fn degree_is_optional() {
        let matches = app()
            .get_matches_from_safe(kept(&["fractal", "-o=3,2"]))
            .unwrap();
        assert_eq!(matches.value_of(DEGREE), None);
        let missing = app().get_matches_from_safe(vec!["fractal"]).unwrap_err();
        assert!(!missing.message.contains("--degree <d> --output"));
    }

    #[test]
    fn only_unknown_flags_leave_nothing_to_parse() {
        assert_eq!(kept(&["fractal", "-x", "--fast", "stray"]), vec!["fractal"]);
    }

    #[test]
    fn clap_refuses_a_low_degree() {
        assert!(app()
            .get_matches_from_safe(kept(&["fractal", "-o=3,2", "-d=1"]))
            .is_err());
    }
}
