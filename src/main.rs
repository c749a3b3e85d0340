//! pagedb REPL - interactive shell over a single-table database file.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use pagedb::repl::{InputBuffer, MetaCommand, Statement};
use pagedb::{Error, Result, Table};

/// A tiny persistent single-table database.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the database file (created if missing)
    file: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if let Err(err) = run(&args.file) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

/// Run the REPL to completion.
///
/// Returns `Ok(())` on `.exit` or end of input, after the table is closed;
/// any returned error is fatal and the table is left unflushed, matching
/// the durability contract (inserts only persist through a clean close).
fn run(path: &Path) -> Result<()> {
    let mut table = Table::open(path)?;
    println!("Welcome to db: {}", path.display());

    let stdin = io::stdin();
    let mut input = InputBuffer::new(stdin.lock());
    let mut stdout = io::stdout();

    loop {
        print!("db > ");
        stdout.flush()?;

        let line = match input.read_line()? {
            Some(line) => line,
            // End of input behaves like .exit
            None => break,
        };

        if line.starts_with('.') {
            match MetaCommand::parse(line) {
                Ok(MetaCommand::Exit) => break,
                Err(err) => println!("{err}"),
            }
            continue;
        }

        let statement = match Statement::prepare(line) {
            Ok(statement) => statement,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        if let Err(err) = execute(&mut table, statement) {
            match err {
                Error::TableFull => println!("Error: table is full."),
                Error::TableEmpty => println!("Error: table is empty."),
                err => return Err(err),
            }
        }
    }

    table.close()
}

fn execute(table: &mut Table, statement: Statement) -> Result<()> {
    match statement {
        Statement::Insert(row) => {
            table.insert(&row)?;
            println!("Executed.");
        }
        Statement::Select => {
            for row in table.scan()? {
                println!("{}", row?);
            }
            println!("Executed.");
        }
    }
    Ok(())
}
