//! Interactive pair queries.
//!
//! Reads a source and a destination id, prints the number of link-disjoint
//! paths between them and asks again. Two empty answers, or end of input,
//! quit. Anything that is not an integer, or an id the graph does not know,
//! ends the session with a message.

use std::io::{self, BufRead, Write};

use link_resilience_core::{count_disjoint, Error, Graph, NodeId};

enum Answer {
    Quit,
    Empty,
    Id(NodeId),
    Invalid,
}

fn ask<R: BufRead, W: Write>(question: &str, input: &mut R, out: &mut W) -> io::Result<Answer> {
    write!(out, "{question}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(Answer::Quit);
    }
    let answer = line.trim();
    if answer.is_empty() {
        return Ok(Answer::Empty);
    }
    Ok(answer.parse().map_or(Answer::Invalid, Answer::Id))
}

/// Run the query loop until the user quits or an answer ends the session.
pub fn run_prompt<R: BufRead, W: Write>(graph: &Graph, mut input: R, out: &mut W) -> io::Result<()> {
    writeln!(out, "\nPress Return twice to exit.")?;
    loop {
        let source = ask("\nSource: ", &mut input, out)?;
        let dest = match source {
            Answer::Quit => Answer::Quit,
            _ => ask("Destination: ", &mut input, out)?,
        };

        let (src, dst) = match (source, dest) {
            (Answer::Quit, _) | (_, Answer::Quit) | (Answer::Empty, Answer::Empty) => {
                writeln!(out, "You chose to quit. Bye.")?;
                return Ok(());
            }
            (Answer::Id(src), Answer::Id(dst)) => (src, dst),
            _ => {
                writeln!(out, "Invalid input. Need integers.")?;
                return Ok(());
            }
        };

        match count_disjoint(graph, src, dst) {
            Ok(k) => writeln!(out, "No. of disjoint paths: {k}")?,
            Err(Error::UnknownNode(id)) => {
                writeln!(out, "No node {id} in graph.")?;
                return Ok(());
            }
            Err(e) => {
                writeln!(out, "{e}")?;
                return Ok(());
            }
        }
    }
}
