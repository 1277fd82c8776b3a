//! Interactive terminal prompting
//!
//! Asks for sample count, excess and mix in turn. Blank answers to the last
//! two take the defaults.

use std::io::{BufRead, Write};

use crate::mix::{MixConcentration, MixError};

use super::CliResult;

/// Values used when the excess or mix prompt is left blank
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PromptDefaults {
    pub excess_percent: f64,
    pub mix_x: u32,
}

/// Answers collected from the prompts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PromptAnswers {
    pub sample_count: i64,
    pub excess_percent: f64,
    pub mix_x: u32,
}

/// Print `prompt`, then read one trimmed line; EOF reads as blank
fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> CliResult<String> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn parse_sample_count(raw: &str) -> Result<i64, MixError> {
    if raw.is_empty() {
        return Err(MixError::invalid_argument("sample count is required"));
    }
    match raw.parse::<i64>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(MixError::invalid_argument("sample count must be a positive integer")),
    }
}

fn parse_excess(raw: &str, default: f64) -> Result<f64, MixError> {
    if raw.is_empty() {
        return Ok(default);
    }
    let trimmed = raw.trim_end_matches('%').trim();
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(MixError::invalid_argument("excess percent must be a non-negative number")),
    }
}

fn parse_mix(raw: &str, default: u32) -> Result<u32, MixError> {
    if raw.is_empty() {
        return Ok(default);
    }
    raw.parse::<MixConcentration>().map(|mix| mix.multiplier())
}

/// Prompt for all three inputs, validating each answer as it arrives
pub fn prompt_inputs<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    defaults: PromptDefaults,
) -> CliResult<PromptAnswers> {
    let excess_default = defaults.excess_percent.max(0.0);

    let raw = ask(input, output, "Enter number of PCR samples: ")?;
    let sample_count = parse_sample_count(&raw).inspect_err(|e| {
        tracing::warn!("Rejected sample count '{}': {}", raw, e);
    })?;

    let raw = ask(
        input,
        output,
        &format!("Excess % (ENTER for {}%): ", excess_default),
    )?;
    let excess_percent = parse_excess(&raw, excess_default).inspect_err(|e| {
        tracing::warn!("Rejected excess '{}': {}", raw, e);
    })?;

    let raw = ask(
        input,
        output,
        &format!("Mix concentration (2 or 5) [ENTER for {}]: ", defaults.mix_x),
    )?;
    let mix_x = parse_mix(&raw, defaults.mix_x).inspect_err(|e| {
        tracing::warn!("Rejected mix concentration '{}': {}", raw, e);
    })?;

    Ok(PromptAnswers {
        sample_count,
        excess_percent,
        mix_x,
    })
}
