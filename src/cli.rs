use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;

use crate::domain::Person;
use crate::error::Result;
use crate::roster::Roster;
use crate::trailer::{Trailer, TrailerKind};
use crate::{config, git, resolver};

#[derive(Parser)]
#[command(name = "rb")]
#[command(about = "Append review trailers to the current git commit")]
#[command(version)]
pub struct Cli {
    #[arg(
        required = true,
        help = "Reviewer's username, first name, last name, or full name"
    )]
    pub person: Vec<String>,

    #[arg(short, long, help = "Apply an Acked-by trailer instead of Reviewed-by")]
    pub ack: bool,

    #[arg(short, long, help = "Print the trailer without amending the commit")]
    pub dry_run: bool,

    #[arg(long, value_name = "PATH", help = "Roster file to resolve against")]
    pub roster: Option<PathBuf>,

    #[arg(long, help = "Output resolved trailers as JSON")]
    pub json: bool,
}

#[derive(Serialize)]
struct ResolvedTrailer {
    trailer: String,
    #[serde(flatten)]
    person: Person,
}

pub fn run(cli: Cli) -> Result<()> {
    let roster_path = config::roster_path(cli.roster)?;
    let roster = Roster::load(&roster_path)?;

    let kind = if cli.ack {
        TrailerKind::AckedBy
    } else {
        TrailerKind::ReviewedBy
    };

    let mut resolved = Vec::new();
    let mut skipped = 0usize;

    for query in &cli.person {
        // One bad reviewer name does not abort the batch.
        let Some(person) = resolver::resolve(&roster, query) else {
            eprintln!("Could not uniquely identify {query}, skipping");
            skipped += 1;
            continue;
        };

        let trailer = Trailer { kind, person };

        if cli.dry_run {
            if !cli.json {
                println!("{trailer}");
            }
        } else {
            git::amend_with_trailer(&trailer)?;
        }

        resolved.push(ResolvedTrailer {
            trailer: trailer.to_string(),
            person: person.clone(),
        });
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&resolved)?);
    }

    if skipped > 0 {
        std::process::exit(1);
    }

    Ok(())
}
