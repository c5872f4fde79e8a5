use std::path::PathBuf;

use clap::{Args, Parser};

use linecross::{generators, polygon, polygon_self_intersections, SweepConfig, DEFAULT_EPS};

#[derive(Copy, Clone, Debug, clap::ValueEnum)]
enum Example {
    FigureEight,
    Pentagram,
    Heptagram,
}

#[derive(Parser)]
struct Cli {
    #[command(flatten)]
    input: Input,

    /// Print every step of the sweep.
    #[arg(long)]
    trace: bool,

    #[arg(long)]
    epsilon: Option<f64>,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct Input {
    /// A file of whitespace-separated vertices, each written as `x,y`.
    input: Option<PathBuf>,

    /// The vertices themselves, like "0,0 10,10 10,0 0,10".
    #[arg(long)]
    vertices: Option<String>,

    #[arg(long)]
    example: Option<Example>,
}

fn parse_vertices(s: &str) -> anyhow::Result<Vec<(f64, f64)>> {
    s.split_whitespace()
        .map(|pair| -> anyhow::Result<(f64, f64)> {
            let (x, y) = pair
                .split_once(',')
                .ok_or_else(|| anyhow::anyhow!("expected `x,y`, got {pair:?}"))?;
            Ok((x.trim().parse()?, y.trim().parse()?))
        })
        .collect()
}

fn get_vertices(input: &Input) -> anyhow::Result<Vec<(f64, f64)>> {
    match (&input.input, &input.vertices, &input.example) {
        (Some(path), None, None) => parse_vertices(&std::fs::read_to_string(path)?),
        (None, Some(vertices), None) => parse_vertices(vertices),
        (None, None, Some(example)) => Ok(match example {
            Example::FigureEight => generators::figure_eight(),
            Example::Pentagram => generators::star_polygon(5, 2),
            Example::Heptagram => generators::star_polygon(7, 3),
        }),
        _ => unreachable!(),
    }
}

pub fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let vertices = get_vertices(&args.input)?;
    let config = SweepConfig::new().with_eps(args.epsilon.unwrap_or(DEFAULT_EPS));

    // Check the inputs first, so that a bad one doesn't start a trace.
    let found = polygon_self_intersections(vertices.iter().copied(), config)?;
    if args.trace {
        polygon::self_intersections_with_trace(vertices.iter().copied(), config, |msg: &str| {
            println!("{msg}")
        });
        println!();
    }

    if found.is_empty() {
        println!("no self-intersections");
    }
    for p in &found {
        println!("self-intersection at ({}, {})", p.x, p.y);
    }
    Ok(())
}
