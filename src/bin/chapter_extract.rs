//! Reads a chapter page from stdin and writes the extraction as JSON to stdout.
//!
//! Usage: chapter_extract [--html | --wikitext] [--tables | --chunks]
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`.

use std::io::{self, Read};

use tracing::{error, info};
use wikichapter::{
    decode_utf8, extract_tables_json, normalize, parse_from_html_bytes, parse_from_wikitext_bytes,
    ChapterDocument,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Html,
    Wikitext,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Output {
    Document,
    Tables,
    Chunks,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let mut input = Input::Html;
    let mut output = Output::Document;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--html" => input = Input::Html,
            "--wikitext" => input = Input::Wikitext,
            "--tables" => output = Output::Tables,
            "--chunks" => output = Output::Chunks,
            other => {
                eprintln!("Unknown argument: {other}");
                eprintln!("Usage: chapter_extract [--html | --wikitext] [--tables | --chunks]");
                std::process::exit(2);
            }
        }
    }

    let mut bytes = Vec::new();
    if let Err(err) = io::stdin().read_to_end(&mut bytes) {
        error!(%err, "failed to read stdin");
        std::process::exit(1);
    }

    match run(&bytes, input, output) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            error!(%err, "extraction failed");
            std::process::exit(1);
        }
    }
}

fn run(bytes: &[u8], input: Input, output: Output) -> Result<String, wikichapter::Error> {
    info!(bytes = bytes.len(), ?input, ?output, "extracting chapter");

    if output == Output::Tables {
        // Tables only exist in rendered HTML.
        let html = decode_utf8(bytes)?;
        return Ok(serde_json::to_string_pretty(&extract_tables_json(&html))?);
    }

    let doc: ChapterDocument = match input {
        Input::Html => parse_from_html_bytes(bytes)?,
        Input::Wikitext => parse_from_wikitext_bytes(bytes)?,
    };
    match output {
        Output::Chunks => Ok(serde_json::to_string_pretty(&normalize(&doc))?),
        _ => doc.to_json(),
    }
}
