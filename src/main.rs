use std::env;
use std::io::{self, BufRead, Write};

use log::{debug, warn};
use recipe_tags::{normalizer_from_env, CategoryNormalizer};

/// Normalize one record and print it as a JSON line
fn emit(
    normalizer: &CategoryNormalizer,
    out: &mut impl Write,
    categories: &str,
    duration: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let record = normalizer.process(categories, duration);
    debug!("{:#?}", record);
    writeln!(out, "{}", serde_json::to_string(&record)?)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let normalizer = normalizer_from_env()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Get the record from command-line arguments: CATEGORIES [DURATION]
    let args: Vec<String> = env::args().collect();
    if let Some(categories) = args.get(1) {
        return emit(&normalizer, &mut out, categories, args.get(2).map(String::as_str));
    }

    // Otherwise read `categories<TAB>duration` lines from stdin
    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let (categories, duration) = match line.split_once('\t') {
            Some((categories, duration)) => (categories, Some(duration)),
            None => (line.as_str(), None),
        };
        if let Err(e) = emit(&normalizer, &mut out, categories, duration) {
            warn!("Skipping record {:?}: {}", line, e);
        }
    }

    Ok(())
}
