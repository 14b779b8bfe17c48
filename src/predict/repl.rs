use std::io::{self, Write};

use tracing::{debug, warn};

use crate::data::Pattern;
use crate::error::PatternError;
use crate::network::Network;
use crate::predict::source::LineSource;

pub const PROMPT: &str = "Input x, y: ";

/// Classifies one line of comma-separated coordinates.
///
/// A placeholder label is appended before parsing, so the line must hold
/// exactly `network.input_dims()` numbers.
pub fn predict_line(network: &mut Network, line: &str) -> Result<f64, PatternError> {
    let record = format!("{},0", line.trim());
    let pattern = Pattern::parse(&record, network.input_dims())?;
    Ok(network.activate(&pattern))
}

/// Rounds half away from zero and never renders negative zero.
pub fn format_prediction(value: f64) -> String {
    format!("{}", value.round() + 0.0)
}

/// Prompts, reads, predicts and prints until `source` runs dry.
///
/// Malformed lines are reported on `out` and the loop carries on. Returns
/// the number of predictions made; only read/write failures are errors.
pub fn run_prediction_loop<S, W>(network: &mut Network, source: &mut S, out: &mut W) -> io::Result<usize>
where
    S: LineSource + ?Sized,
    W: Write + ?Sized,
{
    let mut predictions = 0;
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let line = match source.next_line()? {
            Some(line) => line,
            None => {
                writeln!(out)?;
                debug!(predictions, "input exhausted");
                return Ok(predictions);
            }
        };

        match predict_line(network, &line) {
            Ok(value) => {
                writeln!(out, "{}", format_prediction(value))?;
                predictions += 1;
            }
            Err(e) => {
                warn!(input = %line, error = %e, "rejected prediction input");
                writeln!(out, "{}", e)?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    use crate::activation::ActivationFunction;
    use crate::layers::{Layer, Neuron};

    fn network() -> Network {
        let act = ActivationFunction::default();
        let hidden = Layer::from_neurons(vec![
            Neuron::with_weights(vec![1.0, 1.0], act),
            Neuron::with_weights(vec![1.0, 1.0], act),
        ]);
        Network::from_parts(2, hidden, Neuron::with_weights(vec![1.0, 1.0], act), 0.1)
    }

    fn lines(items: &[&str]) -> VecDeque<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn formats_rounded_predictions() {
        assert_eq!(format_prediction(0.97), "1");
        assert_eq!(format_prediction(-0.97), "-1");
        assert_eq!(format_prediction(-0.2), "0");
        assert_eq!(format_prediction(0.5), "1");
        assert_eq!(format_prediction(-0.5), "-1");
    }

    #[test]
    fn predict_line_uses_network_arity() {
        let mut net = network();
        assert!(predict_line(&mut net, "1, 1").unwrap() > 0.9);
        assert_eq!(
            predict_line(&mut net, "1"),
            Err(PatternError::FieldCount { expected: 3, found: 2 })
        );
        assert!(matches!(
            predict_line(&mut net, "NaN, 1"),
            Err(PatternError::InvalidNumber { index: 0, .. })
        ));
    }

    #[test]
    fn bad_input_is_reported_and_loop_continues() {
        let mut net = network();
        let mut src = lines(&["1,1", "what", "-1,-1", "0,0"]);
        let mut out = Vec::new();

        let count = run_prediction_loop(&mut net, &mut src, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(count, 3);
        assert_eq!(
            text,
            "Input x, y: 1\n\
             Input x, y: expected 3 comma-separated fields, found 2\n\
             Input x, y: -1\n\
             Input x, y: 0\n\
             Input x, y: \n"
        );
    }

    #[test]
    fn read_failure_propagates() {
        struct Broken;
        impl LineSource for Broken {
            fn next_line(&mut self) -> io::Result<Option<String>> {
                Err(io::Error::new(io::ErrorKind::Other, "stdin closed badly"))
            }
        }
        let mut out = Vec::new();
        let err = run_prediction_loop(&mut network(), &mut Broken, &mut out).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Other);
    }
}
