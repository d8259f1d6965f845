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

use std::process::Command;

fn svdreco() -> Command {
    Command::new(env!("CARGO_BIN_EXE_svdreco"))
}

fn lsi_topics() -> Command {
    Command::new(env!("CARGO_BIN_EXE_lsi-topics"))
}

#[test]
fn help_exits_successfully() {
    let status = svdreco().arg("--help").status().unwrap();
    assert!(status.success());

    let status = lsi_topics().arg("--help").status().unwrap();
    assert!(status.success());
}

#[test]
fn missing_inputfile_is_an_error() {
    let output = svdreco().output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("--inputfile"));

    let output = lsi_topics().output().unwrap();
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn unparseable_options_are_errors() {
    let status = svdreco().args(&["--inputfile", "ratings.tsv", "--rank", "ten"])
        .status().unwrap();
    assert_eq!(status.code(), Some(1));

    let status = svdreco().args(&["--inputfile", "ratings.tsv", "--sweep", "5:2"])
        .status().unwrap();
    assert_eq!(status.code(), Some(1));

    let status = lsi_topics().args(&["--inputfile", "documents.txt", "--terms", "many"])
        .status().unwrap();
    assert_eq!(status.code(), Some(1));

    let status = lsi_topics().arg("--no-such-option").status().unwrap();
    assert_eq!(status.code(), Some(1));
}
