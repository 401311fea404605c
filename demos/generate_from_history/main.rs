//! Example training a model from a csv comment export, saving the artifact, loading it back,
//! and generating one comment, optionally steered by a context string.
//!
//! The csv needs a header with `timestamp,channel,body` columns (`datetime`/`subreddit` from the
//! original exports are accepted too).
//!
//! Usage: generate_from_history <CSV_PATH> <MODEL_PATH> [CONTEXT...]
//! Using `cargo run`: `cargo run --example generate_from_history -- comments.csv model.bin`

use echolalia::{artifact, CorpusRecord, GenerationOptions, Model, StopWordSet, TrainingOptions};

use rand::thread_rng;
use std::process::exit;

const USAGE: &str = "Usage: generate_from_history <CSV_PATH> <MODEL_PATH> [CONTEXT...]";

/// Prefix fragments commonly left behind by other bots. Pruned after loading the artifact, not
/// during training, so the artifact itself stays a faithful record of the corpus.
const BOT_SIGNATURES: [&str; 4] = ["^#", "|", "*****", "^^"];

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        println!("{USAGE}");
        exit(1);
    }

    let mut reader = csv::Reader::from_path(&args[1]).expect("could not open csv");
    let mut builder = Model::builder(TrainingOptions::default());
    for record in reader.deserialize::<CorpusRecord>() {
        builder.feed_record(&record.expect("malformed csv row"));
    }
    let model = builder.build().expect("could not build model");
    artifact::save(&model, &args[2]).expect("could not save model");

    let mut model = artifact::load(&args[2]).expect("could not load model");
    model.remove_prefixes_containing(&BOT_SIGNATURES);

    // A real deployment loads the stopwords-iso lists with StopWordSet::from_files.
    let stop_words = StopWordSet::from_words(["the", "and", "that", "this", "have", "with"]);

    let context = (args.len() > 3).then(|| args[3..].join(" "));
    let comment = model
        .generate_comment(
            &mut thread_rng(),
            &stop_words,
            context.as_deref(),
            &GenerationOptions::default(),
        )
        .expect("could not generate comment");

    println!("{}", postprocess(&comment));
}

/// Caller-side cleanup, outside the engine contract: markdown quote/list spacing, leading
/// capitalization, and patching an unbalanced closing bracket.
fn postprocess(comment: &str) -> String {
    let spaced = comment.replace(" > ", "\n\n > ").replace(" * ", "\n\n* ");

    let mut chars = spaced.chars();
    let mut out = String::with_capacity(spaced.len() + 1);
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(chars.as_str());
    }

    if !out.contains('[') && out.contains(']') {
        out.insert(0, '[');
    }
    out
}
