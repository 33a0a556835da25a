//! Rendering of ratings for stdout

use std::io::Write;

use emodel_core::{InputParameters, QualityScore, RatingBreakdown};
use serde::Serialize;

use crate::config::OutputFormat;

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    score: QualityScore,
    #[serde(skip_serializing_if = "Option::is_none")]
    input: Option<&'a InputParameters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    breakdown: Option<&'a RatingBreakdown>,
}

/// Write one rating in the requested format
pub fn render<W: Write>(
    out: &mut W,
    format: OutputFormat,
    verbose: bool,
    input: &InputParameters,
    breakdown: &RatingBreakdown,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => render_text(out, verbose, input, breakdown),
        OutputFormat::Json => render_json(out, verbose, input, breakdown),
    }
}

fn render_text<W: Write>(
    out: &mut W,
    verbose: bool,
    input: &InputParameters,
    breakdown: &RatingBreakdown,
) -> anyhow::Result<()> {
    if verbose {
        writeln!(out, "Input parameters: {}", serde_json::to_string_pretty(input)?)?;
        writeln!(out, "Intermediate quantities:")?;
        for (name, value) in breakdown.entries() {
            if name == "R" {
                continue;
            }
            writeln!(out, "  {:<7}= {:.6}", name, value)?;
        }
        let score = QualityScore::from_r(breakdown.r);
        writeln!(
            out,
            "MOS = {:.2} ({}: {})",
            score.mos,
            score.level,
            score.level.description()
        )?;
    }
    writeln!(out, "R = {:.6}", breakdown.r)?;
    Ok(())
}

fn render_json<W: Write>(
    out: &mut W,
    verbose: bool,
    input: &InputParameters,
    breakdown: &RatingBreakdown,
) -> anyhow::Result<()> {
    let report = JsonReport {
        score: QualityScore::from_r(breakdown.r),
        input: verbose.then_some(input),
        breakdown: verbose.then_some(breakdown),
    };
    serde_json::to_writer(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use emodel_core::compute_breakdown;

    fn rendered(format: OutputFormat, verbose: bool) -> String {
        let input = InputParameters::g107_defaults();
        let breakdown = compute_breakdown(&input);
        let mut out = Vec::new();
        render(&mut out, format, verbose, &input, &breakdown).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_output() {
        assert_eq!(rendered(OutputFormat::Text, false), "R = 93.206208\n");
    }

    #[test]
    fn test_verbose_text_output() {
        let text = rendered(OutputFormat::Text, true);
        assert!(text.starts_with("Input parameters: {"));
        assert!(text.contains("\"BurstR\": 1.0"));
        assert!(text.contains("  Ie_eff = 0.000000"));
        assert!(text.contains("MOS = 4.41 (best: Very satisfied)"));
        assert!(text.ends_with("R = 93.206208\n"));
    }

    #[test]
    fn test_json_output() {
        let value: serde_json::Value = serde_json::from_str(&rendered(OutputFormat::Json, false)).unwrap();
        assert!((value["r"].as_f64().unwrap() - 93.206208).abs() < 1e-6);
        assert_eq!(value["level"], "best");
        assert!(value.get("input").is_none());
        assert!(value.get("breakdown").is_none());
    }

    #[test]
    fn test_verbose_json_output() {
        let value: serde_json::Value = serde_json::from_str(&rendered(OutputFormat::Json, true)).unwrap();
        assert_eq!(value["input"]["Nfor"], -64.0);
        assert!(value["breakdown"]["Ro"].as_f64().unwrap() > 94.0);
    }
}
