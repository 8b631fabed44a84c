// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::debug;
use serde::Serialize;

use shelfsearch::{
    highlight_ranges, highlight_segments, load_config, load_records, search_tokens, token_texts,
    tokenize, Book, FieldConfig, SearchConfig, SearchOptions, Token, TokenKind,
};

mod cli;
use cli::display;
use cli::{Cli, Commands};

/// One printed result, also the `--json` row shape
#[derive(Serialize)]
struct ResultRow<'a> {
    index: usize,
    score: f64,
    book: &'a Book,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Commands::Search {
            query,
            input,
            config,
            fuzzy,
            loosen,
            limit,
            fields,
            json,
        } => run_search(SearchArgs {
            query,
            input,
            config,
            fuzzy,
            loosen,
            limit,
            fields,
            json,
        }),
        Commands::Highlight { text, query } => {
            run_highlight(&text, &query);
            Ok(())
        }
        Commands::Tokens { query } => {
            run_tokens(&query);
            Ok(())
        }
    };

    if let Err(e) = outcome {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

struct SearchArgs {
    query: String,
    input: PathBuf,
    config: Option<PathBuf>,
    fuzzy: Option<u32>,
    loosen: bool,
    limit: Option<usize>,
    fields: Vec<String>,
    json: bool,
}

fn run_search(args: SearchArgs) -> Result<()> {
    let books = load_records(&args.input).context("could not load books")?;
    let mut config = load_search_config(args.config.as_deref())?;

    if !args.fields.is_empty() {
        config.options.fields = parse_fields(&args.fields)?;
    }
    if let Some(limit) = args.limit {
        config.options.limit = limit;
    }

    // Explicit --fuzzy wins; otherwise the presets pick from the query shape.
    let tokens = tokenize(&args.query);
    config.options.fuzzy_max_distance = args
        .fuzzy
        .unwrap_or_else(|| config.fuzzy_presets.resolve(&tokens, args.loosen));
    debug!("search options: {:?}", config.options);

    let rows = result_rows(&books, &tokens, &config.options);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if tokens.is_empty() {
        println!("Showing all {} books.", books.len());
    } else {
        println!("{}", display::status_line(rows.len(), config.options.fuzzy_max_distance));
    }

    let texts = token_texts(&tokens);
    for (rank, row) in rows.iter().enumerate() {
        let book = row.book;
        let title = book.title.as_deref().unwrap_or("(untitled)");
        println!(
            "{} {} {}",
            display::rank_label(rank + 1),
            display::score_label(row.score),
            display::highlighted(&highlight_segments(title, &texts))
        );

        let mut details = Vec::new();
        if let Some(author) = book.author.as_deref() {
            details.push(display::highlighted(&highlight_segments(author, &texts)));
        }
        if let Some(series) = book.series.as_deref() {
            details.push(format!(
                "Series: {}",
                display::highlighted(&highlight_segments(series, &texts))
            ));
        }
        if !details.is_empty() {
            println!("              {}", display::secondary(&details.join(" · ")));
        }
    }

    let looser = config.fuzzy_presets.looser;
    if rows.is_empty() && !tokens.is_empty() && args.fuzzy.is_none() && !args.loosen && config.options.fuzzy_max_distance < looser {
        println!("Nothing found. Try a looser search with --loosen (fuzzy {}).", looser);
    }

    Ok(())
}

/// What both output modes print. A blank query lists every book in input
/// order with score 0; otherwise the ranked hits.
fn result_rows<'a>(books: &'a [Book], tokens: &[Token], options: &SearchOptions) -> Vec<ResultRow<'a>> {
    if tokens.is_empty() {
        return books
            .iter()
            .enumerate()
            .map(|(index, book)| ResultRow {
                index,
                score: 0.0,
                book,
            })
            .collect();
    }

    search_tokens(books, tokens, options)
        .into_iter()
        .map(|hit| ResultRow {
            index: hit.index,
            score: hit.score,
            book: hit.record,
        })
        .collect()
}

fn load_search_config(path: Option<&Path>) -> Result<SearchConfig> {
    match path {
        Some(path) => Ok(load_config(path).context("could not load search config")?),
        None => Ok(SearchConfig::default()),
    }
}

/// Parse `--field` values: `title` enables with the default weight,
/// `notes=0.5` sets an explicit one.
fn parse_fields(specs: &[String]) -> Result<FieldConfig> {
    let mut fields = FieldConfig::empty();
    for spec in specs {
        match spec.split_once('=') {
            None if !spec.trim().is_empty() => fields.set(spec.trim(), true),
            Some((name, weight)) if !name.trim().is_empty() => {
                let weight: f64 = weight
                    .trim()
                    .parse()
                    .with_context(|| format!("invalid weight in --field {}", spec))?;
                fields.set(name.trim(), weight);
            }
            _ => bail!("invalid --field value: {:?}", spec),
        }
    }
    Ok(fields)
}

fn run_highlight(text: &str, query: &str) {
    let tokens = token_texts(&tokenize(query));
    println!("{}", display::highlighted(&highlight_segments(text, &tokens)));
    for range in highlight_ranges(text, &tokens) {
        println!("  {:>4}..{:<4} {:?}", range.start, range.end, &text[range.clone()]);
    }
}

fn run_tokens(query: &str) {
    for token in tokenize(query) {
        let kind = match token.kind {
            TokenKind::Word => "word",
            TokenKind::Phrase => "phrase",
        };
        println!("{:<6} {:?}", kind, token.text);
    }
}
