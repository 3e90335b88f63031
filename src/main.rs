//! Wordsplit - space-delimited tokenizer entry point.

use wordsplit::audit::AuditLogger;
use wordsplit::config::Config;
use wordsplit::filter::apply_filters;
use wordsplit::output::format_tokens;
use wordsplit::text::split;

use std::io::{self, Read};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Read text from stdin
    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        eprintln!("error: failed to read stdin: {}", e);
        return ExitCode::FAILURE;
    }

    // Load config (missing files mean defaults)
    let cwd = std::env::current_dir().ok();
    let config = match Config::load(cwd.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("config error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Compile config patterns
    let compiled = match config.compile() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("config error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Each line is one tokenizer call; newlines never delimit tokens.
    let mut tokens = Vec::new();
    for line in input.lines() {
        tokens.extend(split(line));
    }
    let split_count = tokens.len();

    let kept = apply_filters(tokens, &compiled);

    // Audit logging (if enabled)
    if compiled.raw.audit.enabled {
        if let Some(path) = &compiled.raw.audit.path {
            if let Ok(mut logger) = AuditLogger::open(Path::new(path)) {
                let _ = logger.log_run(&input, split_count, kept.len());
            }
        }
    }

    // Output result
    let rendered = format_tokens(&kept, compiled.format);
    if !rendered.is_empty() {
        println!("{}", rendered);
    }
    ExitCode::SUCCESS
}
