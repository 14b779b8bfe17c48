use std::fmt;

use crate::error::PatternError;

/// One labeled example: `input_dims` coordinates followed by a target label.
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    inputs: Vec<f64>,
    output: f64,
}

impl Pattern {
    pub fn new(inputs: Vec<f64>, output: f64) -> Pattern {
        Pattern { inputs, output }
    }

    /// Parses `x1,x2,...,xN,label`. The record must hold exactly
    /// `input_dims + 1` fields; surrounding whitespace is ignored.
    pub fn parse(line: &str, input_dims: usize) -> Result<Pattern, PatternError> {
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() != input_dims + 1 {
            return Err(PatternError::FieldCount {
                expected: input_dims + 1,
                found: fields.len(),
            });
        }

        let mut values = fields
            .iter()
            .enumerate()
            .map(|(index, field)| {
                // NaN and infinities parse as f64 but poison every weight they touch
                field
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| PatternError::InvalidNumber {
                        index,
                        value: field.to_string(),
                    })
            })
            .collect::<Result<Vec<f64>, PatternError>>()?;

        // field count was checked above, so the label is present
        let output = values.pop().unwrap_or_default();
        Ok(Pattern { inputs: values, output })
    }

    pub fn inputs(&self) -> &[f64] {
        &self.inputs
    }

    pub fn output(&self) -> f64 {
        self.output
    }

    pub fn input_dims(&self) -> usize {
        self.inputs.len()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for x in &self.inputs {
            write!(f, "{},", x)?;
        }
        write!(f, "{}", self.output)
    }
}
