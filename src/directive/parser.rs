// src/directive/parser.rs

//! Explicit pipeline directive: `-{ stage1 | stage2 | ... }`.

use crate::errors::{DofileError, Result};

pub const START_MARKER: &str = "-{";
pub const END_MARKER: char = '}';
pub const STAGE_SEPARATOR: char = '|';

/// Ordered, trimmed, non-empty raw stages of a directive.
///
/// Stages still contain their `%f` / `%n` placeholders; the pipeline
/// executor substitutes them right before running each one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineSpec {
    stages: Vec<String>,
}

impl PipelineSpec {
    pub fn new<I, S>(stages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            stages: stages.into_iter().map(Into::into).collect(),
        }
    }

    pub fn stages(&self) -> &[String] {
        &self.stages
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

/// Look for a pipeline directive in `line`.
///
/// - `Ok(None)`: no start marker, the common case.
/// - `Ok(Some(spec))`: the enclosed text split on `|`, each stage trimmed.
/// - `Err(Directive)`: a start marker without a closing `}`, or a directive
///   with nothing but empty stages.
pub fn parse_directive(line: &str) -> Result<Option<PipelineSpec>> {
    let Some(start) = line.find(START_MARKER) else {
        return Ok(None);
    };

    let body_start = start + START_MARKER.len();
    let body = &line[body_start..];
    let Some(end) = body.find(END_MARKER) else {
        return Err(DofileError::Directive(format!(
            "unterminated directive: found `{START_MARKER}` at column {} but no closing `{END_MARKER}`",
            start + 1
        )));
    };

    let stages: Vec<String> = body[..end]
        .split(STAGE_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if stages.is_empty() {
        return Err(DofileError::Directive(
            "directive contains no commands".to_string(),
        ));
    }

    Ok(Some(PipelineSpec { stages }))
}
