//! Pipeline entry points driving the pen-lift processor over a whole
//! document.

use penkit_core::{GcodeLine, Result, ServoSettings};

use crate::penlift::PenLiftProcessor;

/// Run the pen-lift transform over parsed records, including the trailing
/// lift sequence.
pub fn process_lines(lines: &[GcodeLine], settings: &ServoSettings) -> Vec<GcodeLine> {
    let mut processor = PenLiftProcessor::new(settings.clone());
    let mut out = Vec::with_capacity(lines.len() + 6);
    for line in lines {
        out.extend(processor.process(line));
    }
    out.extend(processor.finish());
    out
}

/// Parse, transform, and render a whole G-code document.
///
/// One rendered line per record, newline-terminated, in emission order.
pub fn process_text(text: &str, settings: &ServoSettings) -> Result<String> {
    let lines = penkit_parser::parse(text)?;
    let processed = process_lines(&lines, settings);
    tracing::debug!(
        input = lines.len(),
        output = processed.len(),
        "pen-lift transform complete"
    );

    let mut rendered = String::new();
    for line in &processed {
        rendered.push_str(&line.to_text());
        rendered.push('\n');
    }
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_final_lift_only() {
        let out = process_lines(&[], &ServoSettings::default());
        assert_eq!(out.len(), 3);
        assert_eq!(out[1].to_text(), "M280 P0 S143 ; Servo up");
    }
}
