//! The `solve` and `presets` commands.

use crate::cli::{OutputFormat, SolveArgs};
use crate::error::CliError;
use cts_core::error::Row;
use cts_core::{
    derive_codes, Alphabet, Derivation, DerivedCode, MatchReport, PresetTable, SessionConfig,
    Symbol, TransformError,
};
use serde::Serialize;
use std::fs;
use std::io::Write;
use tracing::{debug, info};

/// Everything derived for one puzzle.
#[derive(Debug, Serialize)]
pub struct SolveOutcome {
    pub alphabet: Alphabet,
    pub forward: Option<DerivedCode>,
    pub inverse: Option<DerivedCode>,
    pub forward_error: Option<String>,
    pub inverse_error: Option<String>,
    /// None when no candidates were supplied.
    pub matches: Option<MatchReport>,
}

impl SolveOutcome {
    pub fn has_code(&self) -> bool {
        self.forward.is_some() || self.inverse.is_some()
    }

    /// 0 when a code was derived, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.has_code() {
            0
        } else {
            1
        }
    }
}

/// Pick the alphabet: explicit symbols, then `--size`, then the size of the top row.
pub fn resolve_alphabet(args: &SolveArgs, presets: &PresetTable) -> Result<Alphabet, CliError> {
    if let Some(symbols) = &args.alphabet {
        return Ok(symbols.parse()?);
    }
    let size = match args.size {
        Some(size) => size,
        None => args
            .top
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .count(),
    };
    Ok(presets.alphabet_for(size)?)
}

fn read_row(alphabet: &Alphabet, row: Row, text: &str) -> Result<Vec<Symbol>, CliError> {
    alphabet
        .parse_sequence(text)
        .map_err(|source| CliError::Row { row, source })
}

pub fn solve(args: &SolveArgs, presets: &PresetTable) -> Result<SolveOutcome, CliError> {
    let alphabet = resolve_alphabet(args, presets)?;
    info!(%alphabet, "solving");

    let top = read_row(&alphabet, Row::Top, &args.top)?;
    let bottom = read_row(&alphabet, Row::Bottom, &args.bottom)?;
    let candidates = match (&args.candidates, &args.candidates_file) {
        (Some(text), _) => Some(text.clone()),
        (None, Some(path)) => Some(fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.clone(),
            source,
        })?),
        (None, None) => None,
    };

    let config = SessionConfig::new(alphabet)
        .with_directions(args.directions())
        .with_operator_policy(args.operator_policy());
    let Derivation { forward, inverse } = derive_codes(&config, &top, &bottom, &args.operator);
    debug!(?forward, ?inverse, "transforms done");

    let (forward, forward_error) = split(forward);
    let (inverse, inverse_error) = match inverse {
        Some(result) => split(result),
        None => (None, None),
    };
    let matches = candidates
        .as_deref()
        .map(|raw| MatchReport::new(forward.as_ref(), inverse.as_ref(), raw));

    Ok(SolveOutcome {
        alphabet: config.alphabet,
        forward,
        inverse,
        forward_error,
        inverse_error,
        matches,
    })
}

fn split(result: Result<DerivedCode, TransformError>) -> (Option<DerivedCode>, Option<String>) {
    match result {
        Ok(code) => (Some(code), None),
        Err(err) => (None, Some(err.to_string())),
    }
}

// ==================== Rendering ====================

pub fn render_outcome(
    out: &mut impl Write,
    outcome: &SolveOutcome,
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, outcome)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            render_text(out, outcome)?;
        }
    }
    Ok(())
}

fn render_text(out: &mut impl Write, outcome: &SolveOutcome) -> std::io::Result<()> {
    writeln!(out, "Alphabet:        {}", outcome.alphabet)?;
    write_code(out, "Top→Bottom code", outcome.forward.as_ref(), outcome.forward_error.as_deref())?;
    if outcome.inverse.is_some() || outcome.inverse_error.is_some() {
        write_code(out, "Bottom→Top code", outcome.inverse.as_ref(), outcome.inverse_error.as_deref())?;
    }

    if let Some(matches) = &outcome.matches {
        if let Some(found) = &matches.forward {
            writeln!(out, "✓ Match found: {} (Top→Bottom)", found)?;
        }
        if let Some(found) = &matches.inverse {
            writeln!(out, "✓ Match found: {} (Bottom→Top)", found)?;
        }
        if !matches.any() && outcome.has_code() {
            writeln!(out, "⚠ No option matches the computed code")?;
        }
    }
    Ok(())
}

fn write_code(
    out: &mut impl Write,
    label: &str,
    code: Option<&DerivedCode>,
    error: Option<&str>,
) -> std::io::Result<()> {
    match (code, error) {
        (Some(code), _) => writeln!(out, "{}: {}", label, code),
        (None, Some(error)) => writeln!(out, "{}: — ({})", label, error),
        (None, None) => writeln!(out, "{}: —", label),
    }
}

#[derive(Serialize)]
struct PresetEntry<'a> {
    size: usize,
    alphabet: &'a Alphabet,
}

pub fn render_presets(
    out: &mut impl Write,
    presets: &PresetTable,
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let entries: Vec<PresetEntry> = presets
                .iter()
                .map(|(size, alphabet)| PresetEntry { size, alphabet })
                .collect();
            serde_json::to_writer_pretty(&mut *out, &entries)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for (size, alphabet) in presets.iter() {
                writeln!(out, "{:>2}  {}", size, alphabet)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Command};
    use clap::Parser;

    fn solve_args(extra: &[&str]) -> SolveArgs {
        let mut argv = vec!["cts", "solve"];
        argv.extend_from_slice(extra);
        match Cli::try_parse_from(argv).unwrap().command {
            Command::Solve(args) => args,
            Command::Presets => panic!("expected solve"),
        }
    }

    fn render(outcome: &SolveOutcome, format: OutputFormat) -> String {
        let mut buf = Vec::new();
        render_outcome(&mut buf, outcome, format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_solve_infers_size_from_top_row() {
        let args = solve_args(&["-t", "+ ▲ ● ■", "-b", "▲,■,+,●", "-o", "1324", "-c", "1243, 3412\n4231"]);
        let outcome = solve(&args, &PresetTable::default()).unwrap();
        assert_eq!(outcome.alphabet.len(), 4);
        assert_eq!(outcome.forward.as_ref().unwrap(), "3412");
        assert_eq!(outcome.inverse.as_ref().unwrap(), "2143");
        assert_eq!(outcome.exit_code(), 0);

        let text = render(&outcome, OutputFormat::Text);
        assert!(text.contains("Top→Bottom code: 3412"));
        assert!(text.contains("Bottom→Top code: 2143"));
        assert!(text.contains("✓ Match found: 3412 (Top→Bottom)"));
    }

    #[test]
    fn test_solve_explicit_alphabet() {
        let args = solve_args(&["-a", "abc", "-t", "cab", "-b", "bca", "-o", "231", "-d", "forward"]);
        let outcome = solve(&args, &PresetTable::empty()).unwrap();
        // Q = [a, b, c]
        assert_eq!(outcome.forward.as_ref().unwrap(), "231");
        assert_eq!(outcome.inverse, None);
        assert_eq!(outcome.matches, None);

        let text = render(&outcome, OutputFormat::Text);
        assert!(!text.contains("Bottom→Top"));
        assert!(!text.contains("No option matches"));
    }

    #[test]
    fn test_solve_reports_operator_error() {
        let args = solve_args(&["-n", "4", "-t", "+▲●■", "-b", "▲■+●", "-o", "1325", "-c", "3412"]);
        let outcome = solve(&args, &PresetTable::default()).unwrap();
        assert!(!outcome.has_code());
        assert_eq!(outcome.exit_code(), 1);
        assert!(outcome.forward_error.as_deref().unwrap().contains("outside 1..=4"));

        let text = render(&outcome, OutputFormat::Text);
        assert!(text.contains("Top→Bottom code: — ("));
        assert!(!text.contains("No option matches"));
    }

    #[test]
    fn test_solve_agrees_with_session() {
        use cts_core::{OperatorPolicy, Session};

        for strict in [false, true] {
            let mut argv = vec!["-n", "4", "-t", "+▲●■", "-b", "▲■+●", "-o", "2213"];
            if strict {
                argv.push("--strict");
            }
            let outcome = solve(&solve_args(&argv), &PresetTable::default()).unwrap();

            let policy = if strict { OperatorPolicy::Strict } else { OperatorPolicy::Lenient };
            let alphabet = PresetTable::default().alphabet_for(4).unwrap();
            let mut session = Session::new(SessionConfig::new(alphabet).with_operator_policy(policy));
            for c in "+▲●■".chars() {
                assert!(session.push_top(Symbol(c)));
            }
            for c in "▲■+●".chars() {
                assert!(session.push_bottom(Symbol(c)));
            }
            session.set_operator_text("2213");
            let eval = session.evaluate();

            assert_eq!(outcome.forward, eval.forward);
            assert_eq!(outcome.inverse, eval.inverse);
            assert!(!outcome.has_code());
        }
    }

    #[test]
    fn test_solve_no_match_message() {
        let args = solve_args(&["-t", "+▲●■", "-b", "▲■+●", "-o", "1324", "-c", "1111 2222"]);
        let outcome = solve(&args, &PresetTable::default()).unwrap();
        let text = render(&outcome, OutputFormat::Text);
        assert!(text.contains("⚠ No option matches the computed code"));
    }

    #[test]
    fn test_unknown_symbol_is_input_error() {
        let args = solve_args(&["-n", "4", "-t", "+▲●Q", "-b", "▲■+●", "-o", "1324"]);
        let err = solve(&args, &PresetTable::default()).unwrap_err();
        assert!(matches!(err, CliError::Row { row: Row::Top, .. }));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_missing_preset_is_config_error() {
        let args = solve_args(&["-t", "abcdefg", "-b", "gfedcba", "-o", "1234567"]);
        let err = solve(&args, &PresetTable::default()).unwrap_err();
        assert!(matches!(err, CliError::Alphabet(_)));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_json_output() {
        let args = solve_args(&["-t", "+▲●■", "-b", "▲■+●", "-o", "1324", "-c", "2143"]);
        let outcome = solve(&args, &PresetTable::default()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&render(&outcome, OutputFormat::Json)).unwrap();
        assert_eq!(json["forward"], "3412");
        assert_eq!(json["inverse"], "2143");
        assert_eq!(json["matches"]["inverse"], "2143");
        assert_eq!(json["alphabet"][0], "+");
    }

    #[test]
    fn test_render_presets() {
        let mut buf = Vec::new();
        render_presets(&mut buf, &PresetTable::default(), OutputFormat::Text).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 4);
        assert!(text.contains(" 6  % ● ■ ▲ + X"));
    }
}
