#[cfg(test)]
#[path = "../../tests/unit/commands/simulate_test.rs"]
mod simulate_test;

use super::*;
use serde::Serialize;
use std::io::BufReader;
use std::sync::Arc;
use swarm_core::prelude::*;

const ALGORITHM_ARG_NAME: &str = "ALGORITHM";
const TICKS_ARG_NAME: &str = "ticks";
const POPULATION_ARG_NAME: &str = "population-size";
const SPEED_ARG_NAME: &str = "speed";
const SEED_ARG_NAME: &str = "seed";
const LANDSCAPE_ARG_NAME: &str = "landscape";
const PROBLEM_ARG_NAME: &str = "problem";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const LOG_ARG_NAME: &str = "log";
const NARRATE_ARG_NAME: &str = "narrate";
const REAL_TIME_ARG_NAME: &str = "real-time";

const DEFAULT_TICKS: usize = 200;
const DEFAULT_POPULATION_SIZE: usize = 20;
const DEFAULT_SPEED: u32 = 50;
const DEFAULT_CITIES_AMOUNT: usize = 8;

pub fn get_simulate_command() -> Command {
    Command::new("simulate")
        .about("Runs a swarm intelligence simulation for a fixed amount of ticks")
        .arg(
            Arg::new(ALGORITHM_ARG_NAME)
                .help("Specifies the algorithm type")
                .required(true)
                .value_parser(["aco", "gwo", "bees"])
                .index(1),
        )
        .arg(
            Arg::new(TICKS_ARG_NAME)
                .help("Specifies amount of ticks to process")
                .short('t')
                .long(TICKS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(POPULATION_ARG_NAME)
                .help("Specifies size of the population")
                .short('p')
                .long(POPULATION_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(SPEED_ARG_NAME)
                .help("Specifies simulation speed in [0, 100] range")
                .short('s')
                .long(SPEED_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(SEED_ARG_NAME)
                .help("Specifies randomization seed to get deterministic results")
                .long(SEED_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LANDSCAPE_ARG_NAME)
                .help("Specifies a landscape function used by the bees algorithm")
                .short('l')
                .long(LANDSCAPE_ARG_NAME)
                .value_parser(["default", "single-peak"])
                .default_value("default")
                .required(false),
        )
        .arg(
            Arg::new(PROBLEM_ARG_NAME)
                .help("Specifies path to a json file with city locations used by the ant colony")
                .long(PROBLEM_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for the final snapshot")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Turns logging of iteration statistics on")
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue)
                .required(false),
        )
        .arg(
            Arg::new(NARRATE_ARG_NAME)
                .help("Turns narration of forwarded statistics on")
                .long(NARRATE_ARG_NAME)
                .action(ArgAction::SetTrue)
                .required(false),
        )
        .arg(
            Arg::new(REAL_TIME_ARG_NAME)
                .help("Paces ticks in real time using the speed setting")
                .long(REAL_TIME_ARG_NAME)
                .action(ArgAction::SetTrue)
                .required(false),
        )
}

pub fn run_simulate<F: Fn(Option<File>) -> BufWriter<Box<dyn Write>>>(
    matches: &ArgMatches,
    quota: Arc<dyn Quota>,
    out_writer_func: F,
) -> Result<(), GenericError> {
    let algorithm = matches.get_one::<String>(ALGORITHM_ARG_NAME).ok_or("ALGORITHM must be set")?.as_str();

    let ticks = parse_int_value::<usize>(matches, TICKS_ARG_NAME, "ticks")?.unwrap_or(DEFAULT_TICKS);
    let population_size =
        parse_int_value::<usize>(matches, POPULATION_ARG_NAME, "population size")?.unwrap_or(DEFAULT_POPULATION_SIZE);
    let speed = parse_int_value::<u32>(matches, SPEED_ARG_NAME, "speed")?.unwrap_or(DEFAULT_SPEED);
    let seed = parse_int_value::<u64>(matches, SEED_ARG_NAME, "seed")?;

    let is_logging = matches.get_flag(LOG_ARG_NAME);
    let is_narrating = matches.get_flag(NARRATE_ARG_NAME);
    let is_paced = matches.get_flag(REAL_TIME_ARG_NAME);

    let logger: InfoLogger =
        if is_logging { Arc::new(|msg: &str| eprintln!("{msg}")) } else { Arc::new(|_: &str| {}) };
    let environment = Arc::new(Environment::new_with_seed(seed, logger.clone()));
    let config = EngineConfig::new(population_size, speed);

    let out_buffer = out_writer_func(
        matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result")),
    );

    let params = SimulationParams { ticks, speed, is_narrating, is_paced, quota, logger };

    match algorithm {
        "aco" => {
            let cities = match matches.get_one::<String>(PROBLEM_ARG_NAME) {
                Some(path) => read_cities(path)?,
                None => create_random_cities(environment.random.as_ref()),
            };
            simulate(AcoEngine::new(cities, config, environment)?, params, out_buffer)
        }
        "gwo" => simulate(GwoEngine::new(Bounds::default(), config, environment)?, params, out_buffer),
        "bees" => {
            let landscape_name =
                matches.get_one::<String>(LANDSCAPE_ARG_NAME).ok_or("landscape must be set")?;
            let landscape = get_landscape_by_name(landscape_name);
            simulate(BeesEngine::new(Bounds::default(), landscape, config, environment)?, params, out_buffer)
        }
        _ => Err(format!("unknown algorithm: '{algorithm}'").into()),
    }
}

struct SimulationParams {
    ticks: usize,
    speed: u32,
    is_narrating: bool,
    is_paced: bool,
    quota: Arc<dyn Quota>,
    logger: InfoLogger,
}

fn simulate<E>(engine: E, params: SimulationParams, mut out_buffer: BufWriter<Box<dyn Write>>) -> Result<(), GenericError>
where
    E: SwarmEngine,
    E::Snapshot: Serialize,
{
    let sink: Box<dyn StatsSink> = Box::new({
        let logger = params.logger.clone();
        move |algorithm: &str, stats: &IterationStats| {
            (logger)(&format!(
                "[{algorithm}] iteration {}, best score {:.3}, population {}",
                stats.iteration, stats.best_score, stats.population_size
            ));
        }
    });

    let mut driver = SimulationDriver::new(engine, sink, params.logger).with_quota(params.quota);
    if params.is_narrating {
        driver = driver.with_narrator(Box::<StaticNarrator>::default());
    }
    if params.is_paced {
        driver = driver.with_pacing(params.speed);
    }

    driver.run(params.ticks);

    serde_json::to_writer_pretty(&mut out_buffer, &driver.engine().snapshot())
        .map_err(|err| format!("cannot write result: '{err}'"))?;
    out_buffer.flush().map_err(|err| format!("cannot flush result: '{err}'"))?;

    Ok(())
}

fn create_random_cities(random: &dyn Random) -> Vec<Position> {
    let bounds = Bounds::default();
    (0..DEFAULT_CITIES_AMOUNT).map(|_| bounds.sample(random)).collect()
}

fn read_cities(path: &str) -> Result<Vec<Position>, GenericError> {
    let reader = BufReader::new(open_file(path, "problem"));
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize cities: '{err}'").into())
}
