use crate::error::Result;
use std::io::{BufRead, Write};

/// Collects denomination requests from an interactive session.
///
/// Generic over its streams so tests can drive it from byte slices. A
/// non-positive entry or end of input ends the session; unparseable input
/// reports the problem and prompts again.
pub struct DenominationPrompt<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> DenominationPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// The next requested face value, or `None` once the session is over.
    pub fn next_request(&mut self) -> Result<Option<f64>> {
        loop {
            write!(
                self.output,
                "Enter coin denomination (0.25 = a quarter, 0 to quit): "
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }

            match line.trim().parse::<f64>() {
                Ok(value) if value > 0.0 => return Ok(Some(value)),
                Ok(_) => return Ok(None),
                Err(err) => {
                    writeln!(self.output, "Error reading your entry: {err}")?;
                }
            }
        }
    }
}
