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
extern crate svdreco;

use std::error::Error;
use std::env;
use getopts::Options;

use svdreco::io;
use svdreco::TermDocumentMatrix;

fn main() {

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let program = args[0].clone();

    let mut opts = Options::new();
    opts.optopt("i", "inputfile", "Input file name (required). The input consists of one \
        document per line.", "PATH");
    opts.optopt("o", "outputfile", "Output file name (optional, output will be written to stdout \
        by default).", "PATH");
    opts.optopt("k", "topics", "Number of topics to extract (optional, defaults to 5).",
        "NUMBER");
    opts.optopt("n", "terms", "Number of terms to report per topic (optional, defaults to 10).",
        "NUMBER");
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

    let documents_path = match matches.opt_str("i") {
        Some(path) => path,
        None => return print_usage_and_exit(
            &program,
            opts,
            Some("Please specify an inputfile via --inputfile."),
        ),
    };

    let topics_path = matches.opt_str("o");

    let num_topics: usize = match matches.opt_get_default("k", 5) {
        Ok(num_topics) => num_topics,
        Err(failure) => {
            let hint = format!("Problem with option 'k': {}", failure.to_string());
            return print_usage_and_exit(&program, opts, Some(&hint))
        },
    };

    let num_terms: usize = match matches.opt_get_default("n", 10) {
        Ok(num_terms) => num_terms,
        Err(failure) => {
            let hint = format!("Problem with option 'n': {}", failure.to_string());
            return print_usage_and_exit(&program, opts, Some(&hint))
        },
    };

    if let Err(failure) = extract_topics(&documents_path, num_topics, num_terms, topics_path) {
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

fn extract_topics(
    documents_path: &str,
    num_topics: usize,
    num_terms: usize,
    topics_path: Option<String>
) -> Result<(), Box<dyn Error>> {

    info!("Reading documents from {}", documents_path);
    let documents = io::read_documents(documents_path)?;

    let term_document_matrix = TermDocumentMatrix::from_documents(&documents);

    info!(
        "Found {} terms in {} documents.",
        term_document_matrix.vocabulary().len(),
        term_document_matrix.documents().len(),
    );

    let topics = term_document_matrix.topics(num_topics, num_terms)?;

    for topic in topics.iter() {
        info!("Topic {}: {}", topic.topic, topic.label());
    }

    info!("Writing topics...");
    io::write_topics(&topics, topics_path)?;

    Ok(())
}
