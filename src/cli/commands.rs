//! Command implementation for the retok CLI.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::sync::Arc;

use crate::analysis::morph::{MorphAnalyzer, StaticMorphAnalyzer};
use crate::cli::args::RetokArgs;
use crate::cli::output::{OutputOptions, write_line};
use crate::config::RetokConfig;
use crate::error::Result;
use crate::retokenizer::Retokenizer;

/// Lines between two progress reports.
const PROGRESS_INTERVAL: usize = 1000;

/// Execute the CLI: tokenize every input line and write it to stdout.
pub fn execute_command(args: RetokArgs) -> Result<()> {
    let config = load_config(&args)?;
    let morph = load_morph(&args)?;
    let mut retokenizer = Retokenizer::new(&args.lang, config, morph)?;
    let options = OutputOptions::from_args(&args);

    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => {
            log::info!("converting {}", path.display());
            Box::new(BufReader::new(File::open(path)?))
        }
        None => Box::new(BufReader::new(io::stdin().lock())),
    };
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());

    let lines = retokenize_lines(&mut retokenizer, reader, &mut writer, &options)?;
    writer.flush()?;
    log::info!("tokenized {lines} lines");
    Ok(())
}

/// Configuration from defaults or `--config`, then environment and
/// command line overrides.
pub fn load_config(args: &RetokArgs) -> Result<RetokConfig> {
    let config = match &args.config {
        Some(path) => {
            log::debug!("loading configuration from {}", path.display());
            RetokConfig::from_json_file(path)?
        }
        None => RetokConfig::default(),
    };
    config
        .with_env_overrides()?
        .with_suffix_display_override(args.suffix_display.as_deref())
}

fn load_morph(args: &RetokArgs) -> Result<Option<Arc<dyn MorphAnalyzer>>> {
    let Some(path) = &args.morph else {
        return Ok(None);
    };
    let json = fs::read_to_string(path)?;
    let analyzer = StaticMorphAnalyzer::from_json_str(&json)?;
    log::debug!(
        "loaded {} dictionary entries from {}",
        analyzer.len(),
        path.display()
    );
    Ok(Some(Arc::new(analyzer)))
}

/// Tokenize each trimmed line of `reader`; returns the number of lines.
pub fn retokenize_lines<R: BufRead, W: Write>(
    retokenizer: &mut Retokenizer,
    reader: R,
    writer: &mut W,
    options: &OutputOptions,
) -> Result<usize> {
    let mut count = 0;
    for line in reader.lines() {
        let line = line?;
        count += 1;
        write_line(writer, retokenizer, count, line.trim(), options)?;
        if count % PROGRESS_INTERVAL == 0 {
            log::debug!("{count} lines tokenized");
        }
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use clap::Parser;
    use tempfile::TempDir;

    use super::*;
    use crate::config::SuffixDisplay;

    #[test]
    fn test_retokenize_lines() {
        let mut retokenizer = Retokenizer::new("zh", RetokConfig::default(), None).unwrap();
        let input = Cursor::new("A和B或\n  ８０ｈｚ  \n\n2010-2012\n");
        let mut out = Vec::new();

        let count =
            retokenize_lines(&mut retokenizer, input, &mut out, &OutputOptions::default()).unwrap();

        assert_eq!(count, 4);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "A和B或\n80 hz\n\n2010 - 2012\n"
        );
    }

    #[test]
    fn test_load_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("retok.json");
        fs::write(&path, r#"{"ordinal_marker": "號", "suffix_display": "hide"}"#).unwrap();

        let args = RetokArgs::parse_from([
            "retok",
            "--config",
            path.to_str().unwrap(),
            "--suffix-display",
            "join",
        ]);
        let config = load_config(&args).unwrap();

        assert_eq!(config.ordinal_marker, '號');
        assert_eq!(config.suffix_display, SuffixDisplay::Join);
    }

    #[test]
    fn test_load_morph_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("morph.json");
        fs::write(
            &path,
            r#"{"entries": {"책은": [{"source": "책은", "stem": "책", "particle": "은", "score": 100}]}}"#,
        )
        .unwrap();

        let args = RetokArgs::parse_from(["retok", "--lang", "ko", "--morph", path.to_str().unwrap()]);
        let morph = load_morph(&args).unwrap();
        let mut retokenizer = Retokenizer::new(&args.lang, RetokConfig::default(), morph).unwrap();

        assert_eq!(retokenizer.tokenize_with_spaces("책은", false).unwrap(), "책 −은");
    }

    #[test]
    fn test_missing_morph_file() {
        let args = RetokArgs::parse_from(["retok", "--morph", "/nonexistent/morph.json"]);
        assert!(load_morph(&args).is_err());
    }
}
