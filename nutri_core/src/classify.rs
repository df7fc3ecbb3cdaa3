//! Zero-shot text classification.
//!
//! The classifier itself lives outside this crate; callers construct one and
//! pass it in. This module owns the decision rule applied to its scores.

use crate::{Error, Result};
use serde::Deserialize;
use std::process::Command;

/// Label returned when no candidate clears the threshold
pub const OTHER_LABEL: &str = "Other";

/// Default minimum score for the top label to be accepted
pub const DEFAULT_THRESHOLD: f32 = 0.5;

pub const TEXT_PLACEHOLDER: &str = "{text}";
pub const LABELS_PLACEHOLDER: &str = "{labels}";

#[derive(Clone, Debug, PartialEq)]
pub struct LabelScore {
    pub label: String,
    pub score: f32,
}

/// Scores candidate labels for a piece of text
pub trait TextClassifier {
    fn classify(&self, text: &str, labels: &[String]) -> Result<Vec<LabelScore>>;
}

/// Pick the best-scoring label, or "Other" when it does not exceed `threshold`
///
/// Ties keep the earlier label.
pub fn classify_text(
    classifier: &dyn TextClassifier,
    text: &str,
    labels: &[String],
    threshold: f32,
) -> Result<String> {
    if labels.is_empty() {
        return Err(Error::Classification("no candidate labels given".into()));
    }

    let scores = classifier.classify(text, labels)?;
    check_scores(&scores)?;
    let best = scores
        .iter()
        .fold(None::<&LabelScore>, |best, s| match best {
            Some(b) if b.score >= s.score => Some(b),
            _ => Some(s),
        });

    match best {
        Some(top) if top.score > threshold => {
            tracing::debug!("Classified {:?} as {} ({:.3})", text, top.label, top.score);
            Ok(top.label.clone())
        }
        _ => Ok(OTHER_LABEL.to_string()),
    }
}

/// Reject NaN and infinite scores
fn check_scores(scores: &[LabelScore]) -> Result<()> {
    match scores.iter().find(|s| !s.score.is_finite()) {
        Some(bad) => Err(Error::Classification(format!(
            "non-finite score {} for label '{}'",
            bad.score, bad.label
        ))),
        None => Ok(()),
    }
}

/// Output format of a zero-shot classification pipeline
#[derive(Debug, Deserialize)]
struct PipelineOutput {
    labels: Vec<String>,
    scores: Vec<f32>,
}

/// Classifier backed by an external command
///
/// `{text}` is replaced with the input text and `{labels}` with the
/// comma-joined candidate labels. The command must print
/// `{"labels": [...], "scores": [...]}` to stdout.
#[derive(Clone, Debug)]
pub struct CommandClassifier {
    argv: Vec<String>,
}

impl CommandClassifier {
    pub fn new(argv: Vec<String>) -> Result<Self> {
        if argv.is_empty() || argv[0].trim().is_empty() {
            return Err(Error::Config("classifier command is empty".into()));
        }
        Ok(Self { argv })
    }
}

impl TextClassifier for CommandClassifier {
    fn classify(&self, text: &str, labels: &[String]) -> Result<Vec<LabelScore>> {
        let joined = labels.join(",");
        let args: Vec<String> = self.argv[1..]
            .iter()
            .map(|arg| {
                arg.replace(TEXT_PLACEHOLDER, text)
                    .replace(LABELS_PLACEHOLDER, &joined)
            })
            .collect();

        let output = Command::new(&self.argv[0])
            .args(&args)
            .output()
            .map_err(|e| Error::Classification(format!("failed to run {}: {}", self.argv[0], e)))?;

        if !output.status.success() {
            return Err(Error::Classification(format!(
                "{} exited with {}: {}",
                self.argv[0],
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        parse_pipeline_output(&output.stdout)
    }
}

fn parse_pipeline_output(stdout: &[u8]) -> Result<Vec<LabelScore>> {
    let parsed: PipelineOutput = serde_json::from_slice(stdout)?;
    if parsed.labels.len() != parsed.scores.len() {
        return Err(Error::Classification(format!(
            "classifier returned {} labels but {} scores",
            parsed.labels.len(),
            parsed.scores.len()
        )));
    }

    let scores: Vec<LabelScore> = parsed
        .labels
        .into_iter()
        .zip(parsed.scores)
        .map(|(label, score)| LabelScore { label, score })
        .collect();
    check_scores(&scores)?;
    Ok(scores)
}
