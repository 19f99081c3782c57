use std::{error::Error, io::Write};

use bmi_form::{Page, Region, RegionId};
use serde::Serialize;

use crate::config::OutputFormat;

#[derive(Debug, Serialize)]
struct Rendered {
    result: Option<String>,
    message: Option<String>,
}

impl Rendered {
    fn from_page(page: &Page) -> Self {
        Self {
            result: page.region(RegionId::Result).map(Region::text_content),
            message: page.region(RegionId::Message).map(Region::text_content),
        }
    }
}

/// Writes the current contents of both output regions.
pub fn render(
    page: &Page,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<(), Box<dyn Error>> {
    let rendered = Rendered::from_page(page);
    match format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &rendered)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            writeln!(out, "result: {}", rendered.result.unwrap_or_default())?;
            writeln!(out, "message: {}", rendered.message.unwrap_or_default())?;
        }
    }
    Ok(())
}
