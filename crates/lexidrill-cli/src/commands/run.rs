//! The `lexidrill run` command.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use rand::Rng;

use lexidrill_core::model::{DirectionMode, LanguagePair, OutcomeStatus};
use lexidrill_core::report::SessionReport;
use lexidrill_core::{Drill, DrillSettings, RenderedQuestion};
use lexidrill_report::write_html_report;

/// One line of user input during a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    /// Zero-based index into the choices.
    Choice(usize),
    Skip,
    Quit,
}

fn parse_input(line: &str, choices: &[String]) -> Option<Input> {
    let line = line.trim();
    match line.to_lowercase().as_str() {
        "s" | "skip" => return Some(Input::Skip),
        "q" | "quit" => return Some(Input::Quit),
        _ => {}
    }
    if let Ok(n) = line.parse::<usize>() {
        return (1..=choices.len()).contains(&n).then(|| Input::Choice(n - 1));
    }
    choices.iter().position(|c| c == line).map(Input::Choice)
}

#[allow(clippy::too_many_arguments)]
pub async fn execute(
    source: Option<String>,
    mode: Option<String>,
    count: Option<usize>,
    seed: Option<u64>,
    json: Option<PathBuf>,
    html: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let mode = mode
        .map(|m| m.parse::<DirectionMode>().map_err(|e| anyhow::anyhow!(e)))
        .transpose()?;
    if let Some(count) = count {
        anyhow::ensure!(count >= 1, "count must be at least 1");
    }

    let loaded = super::load(source, config_path).await?;
    let settings = DrillSettings {
        mode: mode.unwrap_or(loaded.config.mode),
        question_count: count.unwrap_or(loaded.config.question_count),
    };
    let languages = loaded.config.languages();
    tracing::debug!(?settings, seed, source = %loaded.source, "starting drill");

    let mut drill = Drill::with_seed(Arc::new(loaded.corpus), settings, seed);
    drill.start();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let played = drill_loop(&mut drill, &languages, stdin.lock(), stdout.lock());

    // A failed question still ends the session with a summary of what was answered.
    let report = SessionReport::from_drill(&drill, &loaded.source, languages);
    print_summary(&report, &mut std::io::stdout().lock())?;

    if let Some(path) = json {
        report.save_json(&path)?;
        eprintln!("Report saved to: {}", path.display());
    }
    if let Some(path) = html {
        write_html_report(&report, &path)?;
        eprintln!("HTML summary: {}", path.display());
    }

    played
}

fn render<W: Write>(
    out: &mut W,
    q: &RenderedQuestion,
    total: usize,
    score: usize,
    languages: &LanguagePair,
) -> Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "Question {}/{}  Score: {}",
        q.sequence_number, total, score
    )?;
    writeln!(out, "{}", q.direction.label(languages))?;
    writeln!(out, "  {}", q.prompt)?;
    for (i, choice) in q.choices.iter().enumerate() {
        writeln!(out, "  {}. {}", i + 1, choice)?;
    }
    Ok(())
}

/// Ask questions until the drill finishes, the user quits or input ends.
///
/// On error the drill is ended so the caller can still report it.
fn drill_loop<R: Rng, I: BufRead, W: Write>(
    drill: &mut Drill<R>,
    languages: &LanguagePair,
    input: I,
    mut out: W,
) -> Result<()> {
    let result = ask_all(drill, languages, input, &mut out);
    if result.is_err() {
        drill.end();
    }
    result
}

fn ask_all<R: Rng, I: BufRead, W: Write>(
    drill: &mut Drill<R>,
    languages: &LanguagePair,
    input: I,
    out: &mut W,
) -> Result<()> {
    let mut lines = input.lines();

    while let Some(question) = drill.next_question()? {
        render(
            out,
            &question,
            drill.total_questions(),
            drill.score(),
            languages,
        )?;

        let action = loop {
            write!(out, "Answer [1-{}, s = skip, q = quit]: ", question.choices.len())?;
            out.flush()?;
            let Some(line) = lines.next().transpose()? else {
                break Input::Quit;
            };
            match parse_input(&line, &question.choices) {
                Some(action) => break action,
                None => writeln!(
                    out,
                    "Please enter a number from 1 to {}, s or q.",
                    question.choices.len()
                )?,
            }
        };

        let outcome = match action {
            Input::Choice(i) => drill.answer(&question.choices[i])?,
            Input::Skip => drill.skip()?,
            Input::Quit => {
                writeln!(out)?;
                drill.end();
                break;
            }
        };

        match outcome.status {
            OutcomeStatus::Correct => writeln!(out, "Correct")?,
            OutcomeStatus::Incorrect => writeln!(
                out,
                "Incorrect. Correct answer: {}",
                outcome.question.correct_answer
            )?,
            OutcomeStatus::Skipped => writeln!(
                out,
                "Skipped. Correct answer: {}",
                outcome.question.correct_answer
            )?,
        }
    }

    Ok(())
}

fn print_summary<W: Write>(report: &SessionReport, out: &mut W) -> Result<()> {
    use comfy_table::{Cell, Table};

    let s = &report.summary;
    writeln!(out)?;
    writeln!(out, "{}", report.headline())?;

    let mut table = Table::new();
    table.set_header(vec!["Correct", "Incorrect", "Skipped", "Not reached", "Accuracy"]);
    table.add_row(vec![
        Cell::new(s.correct_count),
        Cell::new(s.incorrect_count),
        Cell::new(s.skipped_count),
        Cell::new(s.not_reached_count),
        Cell::new(format!("{}%", s.attempted_accuracy)),
    ]);
    writeln!(out, "{table}")?;
    writeln!(out, "Total questions: {}", s.total_questions)?;

    let mut misses = Table::new();
    misses.set_header(vec!["#", "Mode", "Question", "Your answer", "Correct answer"]);
    let mut any = false;
    for d in report.misses() {
        any = true;
        misses.add_row(vec![
            Cell::new(d.sequence_number),
            Cell::new(d.direction.label(&report.languages)),
            Cell::new(&d.prompt),
            Cell::new(&d.selected_answer),
            Cell::new(&d.correct_answer),
        ]);
    }
    if any {
        writeln!(out, "{misses}")?;
    }

    Ok(())
}
