/**
 * SvdReco
 * Copyright (C) 2018 Sebastian Schelter
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <http://www.gnu.org/licenses/>.
 */

extern crate env_logger;
extern crate getopts;
#[macro_use]
extern crate log;
extern crate num_cpus;
extern crate svdreco;

use std::error::Error;
use std::env;
use getopts::Options;

use svdreco::{evaluation, io, split, utils};
use svdreco::RatingModel;

fn main() {

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let program = args[0].clone();

    let mut opts = Options::new();
    opts.optopt("i", "inputfile", "Input file name (required). The input consists of ratings of \
        items by users, one user, item, rating and timestamp tuple per line, separated by a \
        tab.", "PATH");
    opts.optopt("t", "testfile", "Held-out ratings in the same format (optional, by default the \
        latest ratings of every user in the inputfile are held out).", "PATH");
    opts.optopt("f", "test-fraction", "Fraction of every user's ratings to hold out when no \
        testfile is given (optional, defaults to 0.2).", "FRACTION");
    opts.optopt("k", "rank", "Truncation rank of the factorization (optional, defaults to \
        10, capped at the largest rank the data supports).", "NUMBER");
    opts.optopt("s", "sweep", "Report the held-out error for every rank in an inclusive range \
        instead of writing predictions (optional).", "FROM:TO");
    opts.optopt("o", "outputfile", "Output file name (optional, output will be written to stdout \
        by default).", "PATH");
    opts.optopt("p", "threads", "Number of threads for the rank sweep (optional, defaults to \
        the number of CPUs).", "NUMBER");
    opts.optflag("h", "help", "Print this help menu");

    let matches = match opts.parse(&args[1..]) {
        Ok(matches) => matches,
        Err(failure) => {
            let hint = failure.to_string();
            return print_usage_and_exit(&program, opts, Some(&hint))
        },
    };

    if matches.opt_present("h") {
        return print_usage_and_exit(&program, opts, None);
    }

    let ratings_path = match matches.opt_str("i") {
        Some(path) => path,
        None => return print_usage_and_exit(
            &program,
            opts,
            Some("Please specify an inputfile via --inputfile."),
        ),
    };

    let test_path = matches.opt_str("t");
    let output_path = matches.opt_str("o");

    let test_fraction: f64 = match matches.opt_get_default("f", 0.2) {
        Ok(test_fraction) => test_fraction,
        Err(failure) => {
            let hint = format!("Problem with option 'f': {}", failure.to_string());
            return print_usage_and_exit(&program, opts, Some(&hint))
        },
    };

    let rank: usize = match matches.opt_get_default("k", 10) {
        Ok(rank) => rank,
        Err(failure) => {
            let hint = format!("Problem with option 'k': {}", failure.to_string());
            return print_usage_and_exit(&program, opts, Some(&hint))
        },
    };

    let pool_size: usize = match matches.opt_get_default("p", num_cpus::get()) {
        Ok(pool_size) => pool_size,
        Err(failure) => {
            let hint = format!("Problem with option 'p': {}", failure.to_string());
            return print_usage_and_exit(&program, opts, Some(&hint))
        },
    };

    let sweep = match matches.opt_str("s") {
        Some(range) => match utils::parse_rank_range(&range) {
            Some(ranks) => Some(ranks),
            None => {
                let hint = format!("Problem with option 's': cannot parse rank range {}", range);
                return print_usage_and_exit(&program, opts, Some(&hint))
            },
        },
        None => None,
    };

    let settings = Settings { ratings_path, test_path, test_fraction, rank, sweep, pool_size };

    if let Err(failure) = predict_ratings(&settings, output_path) {
        error!("{}", failure);
        std::process::exit(1);
    }
}

fn print_usage_and_exit(
    program: &str,
    opts: Options,
    hint: Option<&str>
) {

    if let Some(hint) = hint {
        eprintln!("\n{}\n", hint);
    }

    let brief = format!("Usage: {} [options]", program);
    eprint!("{}", opts.usage(&brief));

    // Only --help arrives here without a hint
    if hint.is_some() {
        std::process::exit(1);
    }
}

struct Settings {
    ratings_path: String,
    test_path: Option<String>,
    test_fraction: f64,
    rank: usize,
    sweep: Option<Vec<usize>>,
    pool_size: usize,
}

fn predict_ratings(
    settings: &Settings,
    output_path: Option<String>
) -> Result<(), Box<dyn Error>> {

    info!("Reading ratings from {}", settings.ratings_path);
    let ratings = io::read_ratings(&mut io::csv_reader(&settings.ratings_path, b'\t')?)?;

    let (train, test) = match settings.test_path {
        Some(ref test_path) => {
            info!("Reading held-out ratings from {}", test_path);
            let test = io::read_ratings(&mut io::csv_reader(test_path, b'\t')?)?;
            (ratings, test)
        },
        None => {
            info!("Holding out the latest {} of every user's ratings", settings.test_fraction);
            split::temporal_split(&ratings, settings.test_fraction)?
        },
    };

    let train = io::observations(&train);
    let test = io::observations(&test);

    info!("Fitting model on {} ratings, {} held out", train.len(), test.len());
    let model = RatingModel::fit(&train)?;

    match settings.sweep {
        Some(ref ranks) => {
            let ranks: Vec<usize> = ranks.iter()
                .cloned()
                .filter(|rank| *rank <= model.max_rank())
                .collect();

            info!("Sweeping {} ranks on {} threads", ranks.len(), settings.pool_size);
            let errors = evaluation::sweep(&model, &test, &ranks, settings.pool_size)?;

            io::write_sweep(&errors, output_path)?;
        },
        None => {
            let rank = settings.rank.min(model.max_rank());
            let errors = evaluation::evaluate(&model, rank, &test)?;
            info!("Rank {}: MSE {:.4}, RMSE {:.4}", rank, errors.mse, errors.rmse);

            let predictions = model.predict(rank, &test)?;

            info!("Writing predictions...");
            io::write_predictions(&test, &predictions, output_path)?;
        },
    }

    Ok(())
}
