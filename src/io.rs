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

extern crate csv;
extern crate serde;
extern crate serde_json;

use std;
use std::io;
use std::io::prelude::*;
use std::io::{stdout, BufReader, BufWriter};
use std::fs::File;
use std::path::Path;

use serde::Serialize;

use evaluation::RankError;
use topics::Topic;
use types::Observation;

/// A single rating as it appears in the input files.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Rating {
    pub user: String,
    pub item: String,
    pub rating: f64,
    pub timestamp: u64,
}

impl Rating {

    pub fn observation(&self) -> Observation<String, String> {
        Observation::new(self.user.clone(), self.item.clone(), self.rating)
    }
}

pub fn observations(ratings: &[Rating]) -> Vec<Observation<String, String>> {
    ratings.iter().map(Rating::observation).collect()
}

/// Reads a CSV input file. We expect NO headers, and a user, item, rating, timestamp tuple per
/// line, separated by `delimiter`.
pub fn csv_reader(file: &str, delimiter: u8) -> Result<csv::Reader<File>, csv::Error> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(delimiter)
        .from_path(file)
}

/// All ratings of a reader, failing on the first malformed line.
pub fn read_ratings<R>(reader: &mut csv::Reader<R>) -> Result<Vec<Rating>, csv::Error>
    where R: std::io::Read {

    reader.deserialize().collect()
}

/// One document per non-empty line.
pub fn read_documents(file: &str) -> io::Result<Vec<String>> {

    let reader = BufReader::new(File::open(&Path::new(file))?);

    let mut documents = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            documents.push(line);
        }
    }

    Ok(documents)
}

/// Struct used for JSON serialization of predictions. Field names will be used in JSON.
#[derive(Serialize)]
struct Prediction<'a> {
    user: &'a str,
    item: &'a str,
    rating: f64,
    prediction: f64,
}

/// If an `output_path` is supplied, we write to a file at the specified path, otherwise, we
/// output to stdout.
fn output(output_path: Option<String>) -> io::Result<Box<dyn Write>> {
    let out: Box<dyn Write> = match output_path {
        Some(path) => Box::new(BufWriter::new(File::create(&Path::new(&path))?)),
        _ => Box::new(stdout())
    };

    Ok(out)
}

fn write_json_lines<T, I>(records: I, output_path: Option<String>) -> io::Result<()>
    where T: Serialize, I: Iterator<Item=T> {

    let mut out = output(output_path)?;

    for record in records {
        writeln!(out, "{}", serde_json::to_string(&record)?)?;
    }

    out.flush()
}

/// Output one JSON line per held-out rating with its prediction.
pub fn write_predictions(
    held_out: &[Observation<String, String>],
    predictions: &[f64],
    output_path: Option<String>,
) -> io::Result<()> {

    let records = held_out.iter()
        .zip(predictions.iter())
        .map(|(observation, prediction)| Prediction {
            user: &observation.user,
            item: &observation.item,
            rating: observation.value,
            prediction: *prediction,
        });

    write_json_lines(records, output_path)
}

pub fn write_sweep(errors: &[RankError], output_path: Option<String>) -> io::Result<()> {
    write_json_lines(errors.iter(), output_path)
}

pub fn write_topics(topics: &[Topic], output_path: Option<String>) -> io::Result<()> {
    write_json_lines(topics.iter(), output_path)
}
