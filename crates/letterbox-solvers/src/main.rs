//! A letter box solver
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![warn(
    bad_style,
    dead_code,
    improper_ctypes,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    no_mangle_generic_items,
    non_shorthand_field_patterns,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unconditional_recursion,
    unsafe_code,
    unused_allocation,
    unused_comparisons,
    unused_crate_dependencies,
    unused_extern_crates,
    unused_import_braces,
    unused_parens,
    unused_qualifications,
    unused_results,
    unused,
    while_true
)]

use clap::{value_parser, Arg, ArgAction, Command};
use eyre::{Result, WrapErr};
use letterbox_automaton::{
    generate::{self, Generator, SearchStatus},
    index::Index,
    pairs::find_pairs,
    prepare::{build_fst, clean_word_list},
    types::Side,
    Sides, SIDE_LEN,
};
use log::LevelFilter;
use std::{
    collections::BTreeSet,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

const DEFAULT_WORD_LIST: &str = "/usr/share/dict/words";

fn main() -> Result<()> {
    let opts = parse_opts()?;
    init_logger(opts.verbosity);

    let words = load_word_list(&opts.word_list)?;
    let sides = match opts.sides {
        Some(sides) => sides,
        None => ask_sides()?,
    };
    log::info!("Solving {} with {} words", sides, words.len());

    let (candidates, status) = find_candidates(&sides, &words, opts.backend)?;
    if let SearchStatus::Truncated { visited } = status {
        eprintln!(
            "Search stopped after visiting {} nodes, the solutions are incomplete",
            visited
        );
    }
    eprintln!("Found {} words that can be spelled", candidates.len());

    let solutions = find_pairs(&candidates, sides.letters());
    if solutions.is_empty() {
        println!("Could not find a solution");
        return Ok(());
    }

    let limit = opts.limit.unwrap_or(usize::MAX);
    for (first, second) in solutions.iter().take(limit) {
        println!(
            "{} - {}",
            first.to_ascii_uppercase(),
            second.to_ascii_uppercase()
        );
    }
    eprintln!("Found {} solutions", solutions.len());

    Ok(())
}

#[derive(Debug)]
struct Opts {
    sides: Option<Sides>,
    word_list: PathBuf,
    backend: Backend,
    limit: Option<usize>,
    verbosity: u8,
}

#[derive(Clone, Copy, Debug)]
enum Backend {
    Index { max_visits: Option<u64> },
    Fst,
}

fn parse_opts() -> Result<Opts> {
    let matches = Command::new(env!("CARGO_PKG_NAME"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("sides")
                .value_name("SIDES")
                .num_args(1..=4)
                .required(false)
                .help("The letters on the four sides, e.g. `cgr dhb uft oal`")
                .long_help(concat!(
                    "The letters on the four sides of the board. ",
                    "Each side has exactly three letters. ",
                    "The sides can be given as four values or as a single value separated by commas, ",
                    "e.g. `cgr dhb uft oal` or `cgr,dhb,uft,oal`. ",
                    "If no sides are given, they will be asked for interactively."
                )),
        )
        .arg(
            Arg::new("word-list")
                .value_name("WORD_LIST")
                .help("The word list to use")
                .long_help(concat!(
                    "The word list to use. ",
                    "The list must contain one word per line. ",
                    "Words with characters other than ascii letters or with fewer than four letters ",
                    "are ignored. The list can be in any order."
                ))
                .short('w')
                .long("word-list")
                .value_parser(value_parser!(PathBuf))
                .default_value(DEFAULT_WORD_LIST),
        )
        .arg(
            Arg::new("max-visits")
                .value_name("NODES")
                .help("Stop the search after visiting this many dictionary nodes")
                .long_help(concat!(
                    "Stop the search after visiting this many nodes of the dictionary index. ",
                    "The solutions that were found so far are still printed, ",
                    "but they are reported as incomplete."
                ))
                .short('m')
                .long("max-visits")
                .value_parser(value_parser!(u64))
                .conflicts_with("fst"),
        )
        .arg(
            Arg::new("fst")
                .help("Search a compiled FST of the word list instead of a prefix tree")
                .long("fst")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("limit")
                .value_name("N")
                .help("Print at most N solutions")
                .short('n')
                .long("limit")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("verbose")
                .help("Log more details, can be repeated")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count),
        )
        .get_matches();

    let sides = matches
        .get_many::<String>("sides")
        .map(|groups| {
            groups
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(" ")
                .parse::<Sides>()
        })
        .transpose()
        .wrap_err("The sides of the board are not valid.")?;

    let word_list = matches
        .get_one::<PathBuf>("word-list")
        .cloned()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_WORD_LIST));

    let backend = if matches.get_flag("fst") {
        Backend::Fst
    } else {
        Backend::Index {
            max_visits: matches.get_one::<u64>("max-visits").copied(),
        }
    };

    Ok(Opts {
        sides,
        word_list,
        backend,
        limit: matches.get_one::<usize>("limit").copied(),
        verbosity: matches.get_count("verbose"),
    })
}

fn init_logger(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let mut builder = env_logger::Builder::new();
    let _ = builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    // RUST_LOG wins over the verbosity flags
    if let Ok(spec) = std::env::var("RUST_LOG") {
        let _ = builder.parse_filters(&spec);
    }

    builder.init();
}

fn load_word_list(file: &Path) -> Result<Vec<String>> {
    let lines = BufReader::new(
        File::open(file).wrap_err_with(|| format!("The file '{}' is missing.", file.display()))?,
    );

    let words = read_word_list(lines)
        .wrap_err_with(|| format!("The file '{}' could not be read.", file.display()))?;
    log::info!("Loaded {} words from '{}'", words.len(), file.display());
    Ok(words)
}

/// Read one word per line, lines that are not valid UTF-8 are skipped
fn read_word_list(reader: impl BufRead) -> std::io::Result<Vec<String>> {
    let mut lines = Vec::new();
    let mut skipped = 0_usize;
    for line in reader.split(b'\n') {
        match String::from_utf8(line?) {
            Ok(line) => lines.push(line),
            Err(_) => skipped += 1,
        }
    }
    if skipped > 0 {
        log::warn!("Skipped {} lines that are not valid UTF-8", skipped);
    }

    Ok(clean_word_list(lines))
}

fn ask_sides() -> Result<Sides> {
    // dialoguer validates against the input type
    #[allow(clippy::ptr_arg)]
    fn valid_side(input: &String) -> Result<(), String> {
        let input = input.trim();
        if input.len() == SIDE_LEN && input.bytes().all(|b| b.is_ascii_alphabetic()) {
            Ok(())
        } else {
            Err(format!("A side must have exactly {} letters", SIDE_LEN))
        }
    }

    let mut groups = Vec::with_capacity(Side::COUNT);
    for side in Side::ALL {
        let group = dialoguer::Input::<String>::new()
            .with_prompt(format!("Letters on {}", side))
            .validate_with(valid_side)
            .interact_text()?;
        groups.push(group.trim().to_owned());
    }

    Sides::new(&groups).wrap_err("The sides of the board are not valid.")
}

fn find_candidates(
    sides: &Sides,
    words: &[String],
    backend: Backend,
) -> Result<(BTreeSet<String>, SearchStatus)> {
    match backend {
        Backend::Index { max_visits } => {
            let index = Index::build(words);
            let generator = Generator::new(sides, &index);
            let generator = match max_visits {
                Some(max_visits) => generator.max_visits(max_visits),
                None => generator,
            };
            let candidates = generator.run();
            let status = candidates.status();
            Ok((candidates.into_words(), status))
        }
        Backend::Fst => {
            let set = build_fst(words).wrap_err("The word list could not be prepared.")?;
            let candidates = generate::generate_fst(sides, &set)
                .wrap_err("The word list contains invalid words.")?;
            Ok((candidates, SearchStatus::Exhausted))
        }
    }
}
