mod commands;
mod demo;
mod params;
mod parser;
mod polyline;
mod svg;

use arcblend::math::Point;
use arcblend::tessellation::{ColorMode, CurveOptions, EndMode};
use clap::{App, Arg, ArgMatches, SubCommand};
use commands::*;
use parser::ParseError;

use std::fs::File;
use std::io::prelude::*;
use std::io::stdout;

fn main() {
    env_logger::init();

    let matches = App::new("Arcblend command-line interface")
        .version("0.1")
        .author("arcblend developers")
        .about("Smooth curves through a sequence of points")
        .subcommand(
            SubCommand::with_name("polyline")
                .about("Prints the positions of the tessellated curve, one per line")
                .arg(
                    Arg::with_name("COLORS")
                        .long("colors")
                        .help("Also prints the color of each vertex"),
                )
                .arg(
                    Arg::with_name("COUNT")
                        .short("c")
                        .long("count")
                        .help("Prints the number of vertices and lines"),
                ),
        )
        .subcommand(
            SubCommand::with_name("svg")
                .about("Draws the curve and the points in an SVG document")
                .arg(
                    Arg::with_name("POINT_RADIUS")
                        .long("point-radius")
                        .help("Sets the radius of the dots drawn at each point (5 by default)")
                        .value_name("RADIUS")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("STROKE_WIDTH")
                        .long("stroke-width")
                        .help("Sets the width of the curve (1 by default)")
                        .value_name("WIDTH")
                        .takes_value(true),
                ),
        )
        .subcommand(
            SubCommand::with_name("params")
                .about("Prints the parameters of each span of the curve"),
        )
        .arg(
            Arg::with_name("POINTS")
                .value_name("POINTS")
                .help("A list of points (\"x0 y0 x1 y1 ...\")")
                .takes_value(true)
                .required(false),
        )
        .arg(
            Arg::with_name("INPUT")
                .help("Sets the input file to use")
                .short("i")
                .long("input")
                .value_name("FILE")
                .takes_value(true)
                .required(false),
        )
        .arg(
            Arg::with_name("OUTPUT")
                .help("Sets the output file to use")
                .value_name("FILE")
                .short("o")
                .long("output")
                .takes_value(true)
                .required(false),
        )
        .arg(
            Arg::with_name("SEGMENTS")
                .short("s")
                .long("segments")
                .help("Sets the number of segments per span (128 by default)")
                .value_name("SEGMENTS")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("ENDS")
                .short("e")
                .long("ends")
                .help("Sets how the first and last points are treated (join by default)")
                .value_name("ENDS")
                .possible_values(&["hide", "show", "join"])
                .takes_value(true),
        )
        .arg(
            Arg::with_name("NEUTRAL")
                .long("neutral")
                .help("Draws all arcs in the same color"),
        )
        .arg(
            Arg::with_name("SCALE")
                .long("scale")
                .help("Scales the input points (1 by default)")
                .value_name("SCALE")
                .takes_value(true),
        )
        .get_matches();

    if let Err(e) = run(&matches) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<(), CommandError> {
    let mut file_contents = None;
    if let Some(input_file) = matches.value_of("INPUT") {
        let mut file = File::open(input_file)?;
        let mut buffer = String::new();
        file.read_to_string(&mut buffer)?;
        file_contents = Some(buffer);
    }

    let mut points = read_points(
        matches.value_of("POINTS").unwrap_or(""),
        file_contents.as_deref(),
    )?;
    if points.is_empty() {
        log::info!("no input points, using the demo shape");
        points = demo::demo_shape();
    }

    let scale = get_f32(matches, "SCALE", 1.0);
    for p in &mut points {
        *p = *p * scale;
    }

    let output: Box<dyn Write> = match matches.value_of("OUTPUT") {
        Some(output_file) => Box::new(File::create(output_file)?),
        None => Box::new(stdout()),
    };

    let options = get_options(matches);
    log::info!(
        "{} points, {} segments per span, {:?}, {:?}",
        points.len(),
        options.segments_per_span,
        options.end_mode,
        options.color_mode,
    );

    let curve = CurveCmd {
        points,
        options,
        output,
    };

    if let Some(polyline_matches) = matches.subcommand_matches("polyline") {
        let cmd = PolylineCmd {
            colors: polyline_matches.is_present("COLORS"),
            count: polyline_matches.is_present("COUNT"),
        };

        polyline::polyline(curve, cmd)
    } else if let Some(svg_matches) = matches.subcommand_matches("svg") {
        let cmd = SvgCmd {
            point_radius: get_f32(svg_matches, "POINT_RADIUS", 5.0),
            stroke_width: get_f32(svg_matches, "STROKE_WIDTH", 1.0),
        };

        svg::svg(curve, cmd)
    } else if matches.subcommand_matches("params").is_some() {
        params::params(curve)
    } else {
        log::warn!("no subcommand, printing the polyline");
        polyline::polyline(
            curve,
            PolylineCmd {
                colors: false,
                count: false,
            },
        )
    }
}

fn get_options(matches: &ArgMatches) -> CurveOptions {
    let segments = match matches.value_of("SEGMENTS") {
        Some(s) => s.parse().unwrap_or_else(|_| {
            log::warn!("invalid number of segments {:?}, using the default", s);
            CurveOptions::DEFAULT_SEGMENTS_PER_SPAN
        }),
        None => CurveOptions::DEFAULT_SEGMENTS_PER_SPAN,
    };

    let end_mode = match matches.value_of("ENDS") {
        Some("hide") => EndMode::HideEnds,
        Some("show") => EndMode::ShowEnds,
        _ => EndMode::JoinEnds,
    };

    let color_mode = if matches.is_present("NEUTRAL") {
        ColorMode::Neutral
    } else {
        ColorMode::Colorized
    };

    CurveOptions::segments(segments)
        .with_end_mode(end_mode)
        .with_color_mode(color_mode)
}

/// The points given on the command line followed by the points of the input
/// file. Each source holds whole coordinate pairs.
fn read_points(positional: &str, file_contents: Option<&str>) -> Result<Vec<Point>, ParseError> {
    let mut points = parser::parse_points(positional)?;
    if let Some(contents) = file_contents {
        points.extend(parser::parse_points(contents)?);
    }

    Ok(points)
}

fn get_f32(matches: &ArgMatches, name: &str, default: f32) -> f32 {
    match matches.value_of(name) {
        Some(value) => value.parse().unwrap_or_else(|_| {
            log::warn!("invalid value {:?} for {}, using {}", value, name, default);
            default
        }),
        None => default,
    }
}

#[test]
fn points_from_both_sources() {
    use arcblend::math::point;

    let points = read_points("0 0 10 0", Some("30 40\n50 60\n")).unwrap();
    assert_eq!(
        points,
        vec![point(0.0, 0.0), point(10.0, 0.0), point(30.0, 40.0), point(50.0, 60.0)]
    );

    assert_eq!(read_points("", Some("1 2")).unwrap(), vec![point(1.0, 2.0)]);
    assert_eq!(read_points("1 2", None).unwrap(), vec![point(1.0, 2.0)]);
    assert!(read_points("", None).unwrap().is_empty());
}

#[test]
fn numbers_do_not_merge_across_sources() {
    match read_points("0 0 10", Some("30 40\n50 60\n")) {
        Err(ParseError::OddCoordinateCount { x, .. }) => assert_eq!(x, 10.0),
        other => panic!("unexpected result {:?}", other),
    }

    match read_points("0 0", Some("30 40\n50")) {
        Err(ParseError::OddCoordinateCount { x, line, .. }) => {
            assert_eq!(x, 50.0);
            assert_eq!(line, 1);
        }
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn invalid_float_arguments_use_the_default() {
    let app = || App::new("test").arg(Arg::with_name("SCALE").long("scale").takes_value(true));

    let matches = app().get_matches_from(vec!["arcblend", "--scale", "abc"]);
    assert_eq!(get_f32(&matches, "SCALE", 1.0), 1.0);

    let matches = app().get_matches_from(vec!["arcblend", "--scale", "2.5"]);
    assert_eq!(get_f32(&matches, "SCALE", 1.0), 2.5);

    let matches = app().get_matches_from(vec!["arcblend"]);
    assert_eq!(get_f32(&matches, "SCALE", 3.0), 3.0);
}
