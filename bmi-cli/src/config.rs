use bmi_form::StalePolicy;
use clap::{Parser, ValueEnum};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// What to do with the previous label when a submission is rejected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum StaleMessage {
    #[default]
    Retain,
    Clear,
}

impl From<StaleMessage> for StalePolicy {
    fn from(stale_message: StaleMessage) -> Self {
        match stale_message {
            StaleMessage::Retain => StalePolicy::Retain,
            StaleMessage::Clear => StalePolicy::Clear,
        }
    }
}

/// Computes a BMI from height (cm) and weight (kg) and labels it.
///
/// Without HEIGHT and WEIGHT, every stdin line `HEIGHT WEIGHT` is submitted
/// to the same form.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None, allow_negative_numbers = true)]
pub struct Cli {
    /// Print each page state as a JSON object
    #[arg(long)]
    pub json: bool,

    /// Output format, overridden by --json
    #[arg(long, value_enum, env = "BMI_OUTPUT", default_value = "text")]
    pub output: OutputFormat,

    /// Keep or clear the label region when a submission is rejected
    #[arg(long, value_enum, env = "BMI_STALE_MESSAGE", default_value = "retain")]
    pub stale_message: StaleMessage,

    /// Height in centimeters
    #[arg(requires = "weight")]
    pub height: Option<String>,

    /// Weight in kilograms
    #[arg(requires = "height")]
    pub weight: Option<String>,
}

impl Cli {
    pub fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.output
        }
    }

    pub fn submission(&self) -> Option<(&str, &str)> {
        self.height.as_deref().zip(self.weight.as_deref())
    }
}
