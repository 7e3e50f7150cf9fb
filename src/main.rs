use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use ttl2triples::emitter::form::FormEmitter;
use ttl2triples::emitter::json::JsonEmitter;
use ttl2triples::emitter::ntriples::NTriplesEmitter;
use ttl2triples::emitter::turtle::TurtleEmitter;
use ttl2triples::emitter::TriplesEmitter;
use ttl2triples::model::ontology::freebase;
use ttl2triples::parser::{self as turtle, DatatypePolicy, Document, ParserOptions};
use ttl2triples::source::freebase::{normalize_dump, subject_iri};

/// Parse Turtle-subset RDF documents into triples.
#[derive(Parser)]
#[command(name = "ttl2triples", version, about)]
struct Cli {
    /// Path to a Turtle document, or `-` for stdin.
    input: PathBuf,

    /// Output file path [default: stdout].
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format: ntriples, turtle, json, form.
    #[arg(short, long, value_name = "FORMAT", default_value = "ntriples")]
    format: String,

    /// Base IRI for relative IRIs before any @base directive.
    #[arg(short, long, value_name = "IRI", default_value = "")]
    base_iri: String,

    /// Fail on typed literals instead of dropping their datatype.
    #[arg(long)]
    strict_datatypes: bool,

    /// Treat the input as a Freebase RDF dump for this resource key (e.g. /m/02mjmr).
    #[arg(long, value_name = "KEY")]
    freebase_key: Option<String>,

    /// Verbose output.
    #[arg(short, long)]
    verbose: bool,

    /// Quiet output.
    #[arg(short, long)]
    quiet: bool,
}

fn init_logging(cli: &Cli) -> Result<()> {
    let level = if cli.quiet {
        Level::ERROR
    } else if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    if path == Path::new("-") {
        io::stdin()
            .read_to_end(&mut buf)
            .context("failed to read stdin")?;
    } else {
        buf = std::fs::read(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
    }
    Ok(buf)
}

fn write_document<E: TriplesEmitter>(mut emitter: E, doc: &Document) -> Result<u64> {
    for (label, ns) in doc.prefixes.sorted() {
        emitter.add_prefix(label, ns);
    }
    emitter.emit_all(&doc.triples)?;
    emitter.flush()?;
    Ok(emitter.triple_count())
}

fn run(cli: Cli) -> Result<()> {
    debug!("Loading input from: {}", cli.input.display());
    let raw = read_input(&cli.input)?;
    let mut text = String::from_utf8(raw).context("input is not valid UTF-8")?;

    if let Some(key) = &cli.freebase_key {
        let subject = subject_iri(key);
        debug!("Normalizing Freebase dump for {subject}");
        text = normalize_dump(&subject, &text, freebase::NS);
    }

    let options = ParserOptions {
        base_iri: cli.base_iri.clone(),
        datatypes: if cli.strict_datatypes {
            DatatypePolicy::Reject
        } else {
            DatatypePolicy::Discard
        },
        ..ParserOptions::default()
    };

    let doc = turtle::Parser::new(&text, &options)
        .parse_document()
        .with_context(|| format!("failed to parse {}", cli.input.display()))?;

    // Determine output writer
    let output_writer: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let format = cli.format.to_lowercase();
    let triple_count = match format.as_str() {
        "ntriples" | "nt" => write_document(NTriplesEmitter::new(output_writer), &doc)?,
        "turtle" | "ttl" => write_document(TurtleEmitter::new(output_writer), &doc)?,
        "json" | "jsonl" => write_document(JsonEmitter::new(output_writer), &doc)?,
        "form" => write_document(FormEmitter::new(output_writer), &doc)?,
        _ => bail!("Unknown format: {format}. Use 'ntriples', 'turtle', 'json' or 'form'."),
    };

    info!("Parsed {triple_count} triples from {}", cli.input.display());
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = init_logging(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
