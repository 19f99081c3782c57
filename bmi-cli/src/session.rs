use std::error::Error;
use std::io::{BufRead, Write};

use bmi_form::{FormHandler, Page, SubmitEvent};
use log::{debug, warn};

use crate::config::OutputFormat;
use crate::render::render;

/// Submits every `HEIGHT WEIGHT` line of `input` to the same page and renders
/// the page after each one. Blank lines are skipped.
pub fn run(
    input: impl BufRead,
    out: &mut dyn Write,
    handler: &FormHandler,
    format: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    let mut page = Page::new();
    for line in input.lines() {
        let line = line?;
        let mut fields = line.split_whitespace();
        let Some(height) = fields.next() else {
            continue;
        };
        let weight = fields.next().unwrap_or_default();
        if fields.next().is_some() {
            warn!("Ignoring extra values on line {:?}", line);
        }
        submit(handler, &mut page, height, weight, format, out)?;
    }
    Ok(())
}

pub fn submit(
    handler: &FormHandler,
    page: &mut Page,
    height: &str,
    weight: &str,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<(), Box<dyn Error>> {
    page.fill(height, weight);
    match handler.on_submit(&mut SubmitEvent::new(), page) {
        Ok(evaluation) => debug!("Evaluated {:?}", evaluation),
        Err(e) => debug!("Shown prompt {:?}", e.to_string()),
    }
    render(page, format, out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use bmi_form::StalePolicy;

    use super::*;

    fn session(input: &str, stale_policy: StalePolicy) -> String {
        let mut out = Vec::new();
        run(
            input.as_bytes(),
            &mut out,
            &FormHandler::new(stale_policy),
            OutputFormat::Text,
        )
        .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn lines_share_one_page() {
        let test_data = [
            (
                "1000 2491\n\n170 abc\n",
                StalePolicy::Retain,
                "result: 24.91\nmessage: OVER-WEIGHT\n\
                 result: plz enter a valid weight\nmessage: OVER-WEIGHT\n",
            ),
            (
                "1000 2491\n170 abc\n",
                StalePolicy::Clear,
                "result: 24.91\nmessage: OVER-WEIGHT\n\
                 result: plz enter a valid weight\nmessage: \n",
            ),
            (
                "170\n",
                StalePolicy::Retain,
                "result: plz enter a valid weight\nmessage: \n",
            ),
            (
                "  170   70  99\n",
                StalePolicy::Retain,
                "result: 24.22\nmessage: NORMAL-RANGE\n",
            ),
            ("\n   \n", StalePolicy::Retain, ""),
            (
                "0 70\n160 60",
                StalePolicy::Retain,
                "result: plz enter a valid height\nmessage: \n\
                 result: 23.44\nmessage: NORMAL-RANGE\n",
            ),
        ];

        for (i, (input, stale_policy, expected_output)) in test_data.into_iter().enumerate() {
            assert_eq!(session(input, stale_policy), expected_output, "Test case #{}", i);
        }
    }

    #[test]
    fn renders_json_per_line() {
        let mut out = Vec::new();
        run(
            "170 70\n-1 70\n".as_bytes(),
            &mut out,
            &FormHandler::default(),
            OutputFormat::Json,
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"result\":\"24.22\",\"message\":\"NORMAL-RANGE\"}\n\
             {\"result\":\"plz enter a valid height\",\"message\":\"NORMAL-RANGE\"}\n"
        );
    }
}
