use bmi_model::{evaluate, Evaluation, EvaluationError};
use log::{debug, info};

use crate::surface::{FieldId, FormSurface, Region, RegionId, SubmitEvent};

/// What happens to the message region when a submission is rejected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StalePolicy {
    /// Leave the previous label in place.
    #[default]
    Retain,
    Clear,
}

#[derive(Debug, Default)]
pub struct FormHandler {
    stale_policy: StalePolicy,
}

impl FormHandler {
    pub fn new(stale_policy: StalePolicy) -> Self {
        Self { stale_policy }
    }

    /// Handles one submission: reads both fields, evaluates them and writes
    /// the outcome into the output regions.
    pub fn on_submit(
        &self,
        event: &mut SubmitEvent,
        surface: &mut dyn FormSurface,
    ) -> Result<Evaluation, EvaluationError> {
        event.prevent_default();

        let height = surface.field_value(FieldId::Height);
        let weight = surface.field_value(FieldId::Weight);
        debug!("Submitted height={:?} weight={:?}", height, weight);

        match evaluate(&height, &weight) {
            Ok(evaluation) => {
                debug!("BMI {} classified as {}", evaluation.value, evaluation.message);
                surface.set_region(
                    RegionId::Result,
                    Region::Markup(format!("<span>{}</span>", evaluation.value)),
                );
                surface.set_region(
                    RegionId::Message,
                    Region::Text(evaluation.message.to_string()),
                );
                Ok(evaluation)
            }
            Err(e) => {
                info!("Rejected submission: {}", e);
                surface.set_region(RegionId::Result, Region::Text(e.to_string()));
                if self.stale_policy == StalePolicy::Clear {
                    surface.clear_region(RegionId::Message);
                }
                Err(e)
            }
        }
    }
}
