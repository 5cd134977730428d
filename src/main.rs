use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command, ValueHint};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

use dense_array::config::{load_print_config, Notation, PrintConfig};
use dense_array::report::format_array;
use dense_array::utils::logging::{init_logging, DEFAULT_FILTER};
use dense_array::{DenseArray, Vector};

fn main() -> Result<()> {
    init_logging(DEFAULT_FILTER).context("Failed to initialise logger")?;

    let matches = Command::new("dense-array")
        .version(clap::crate_version!())
        .about("Build, validate and print dense N-dimensional arrays")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("demo")
                .about("Construct and release a few arrays step by step")
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .help("Seed for the random array")
                        .value_parser(clap::value_parser!(u64))
                        .default_value("42"),
                ),
        )
        .subcommand(
            Command::new("create")
                .about("Validate a shape against a flat list of values and print the array")
                .arg(
                    Arg::new("shape")
                        .short('s')
                        .long("shape")
                        .help("Comma separated dimension sizes, e.g. 2,2")
                        .required(true)
                        .value_delimiter(',')
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("values")
                        .short('v')
                        .long("values")
                        .help("Comma separated values in row-major order, e.g. 1,2,3,4")
                        .required(true)
                        .allow_hyphen_values(true)
                        .value_delimiter(',')
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .help("Path to a JSON print configuration file")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("notation")
                        .short('n')
                        .long("notation")
                        .help("Number format. Overrides the notation in the configuration file.")
                        .value_parser(["fixed", "scientific", "sci"]),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("demo", demo_matches)) => run_demo(demo_matches),
        Some(("create", create_matches)) => run_create(create_matches),
        _ => unreachable!("subcommand_required guards this"),
    }
}

fn run_demo(matches: &ArgMatches) -> Result<()> {
    let seed = matches.get_one::<u64>("seed").copied().unwrap_or(42);
    let config = PrintConfig::default();

    let mut empty: DenseArray = DenseArray::empty();
    log::info!("empty array: rank {}, {} elements", empty.rank(), empty.len());
    println!("empty = {}", format_array(&empty, &config));

    let dimension_sizes = [2, 2];
    let values = [1.0, 2.0, 3.0, 4.0];
    let mut matrix = DenseArray::new(&dimension_sizes, &values)?;
    log::info!(
        "matrix: shape {:?}, {} elements",
        matrix.shape(),
        matrix.len()
    );
    println!("matrix =\n{}", format_array(&matrix, &config));

    let boxed = Box::new(DenseArray::new(&dimension_sizes, &values)?);
    log::info!("boxed matrix of {} elements lives on the heap", boxed.len());
    println!("boxed =\n{}", format_array(&*boxed, &config));

    let vector = Vector::from_slice(&[3.0, 4.0]);
    log::info!("vector {} has norm {}", vector, vector.norm());
    println!("vector = {}", vector);

    let mut rng = StdRng::seed_from_u64(seed);
    let random = DenseArray::random_uniform(&[2, 3], 0.0, 1.0, &mut rng)?;
    println!("random =\n{}", format_array(&random, &config));

    match DenseArray::new(&dimension_sizes, &values[..3]) {
        Ok(_) => log::warn!("a mismatched buffer was accepted"),
        Err(e) => log::info!("mismatched buffer rejected: {}", e),
    }

    matrix.release();
    empty.release();
    drop(boxed);
    log::info!("all arrays released");
    Ok(())
}

fn run_create(matches: &ArgMatches) -> Result<()> {
    let shape: Vec<usize> = matches
        .get_many::<usize>("shape")
        .map(|v| v.copied().collect())
        .unwrap_or_default();
    let values: Vec<f64> = matches
        .get_many::<f64>("values")
        .map(|v| v.copied().collect())
        .unwrap_or_default();

    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => {
            log::info!("Loading print configuration from {:?}", path);
            load_print_config(path)?
        }
        None => PrintConfig::default(),
    };
    if let Some(notation) = matches.get_one::<String>("notation") {
        config.notation = notation
            .parse::<Notation>()
            .map_err(anyhow::Error::msg)?;
    }

    let array = DenseArray::from_shape_vec(shape, values).map_err(|e| {
        log::error!("Construction failed: {}", e);
        e
    })?;
    log::info!(
        "created array of rank {} with {} elements",
        array.rank(),
        array.len()
    );
    println!("{}", format_array(&array, &config));
    Ok(())
}
