use strum::{AsRefStr, Display};

/// Input fields of the form, named by their element ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, Display)]
#[strum(serialize_all = "lowercase")]
pub enum FieldId {
    Height,
    Weight,
}

/// Output regions of the page, named by their element ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, Display)]
#[strum(serialize_all = "lowercase")]
pub enum RegionId {
    Result,
    Message,
}

/// Content written into an output region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Region {
    Text(String),
    Markup(String),
}

impl Region {
    pub fn raw(&self) -> &str {
        match self {
            Region::Text(text) | Region::Markup(text) => text,
        }
    }

    /// The text a reader sees, with any tags dropped.
    pub fn text_content(&self) -> String {
        match self {
            Region::Text(text) => text.clone(),
            Region::Markup(markup) => strip_tags(markup),
        }
    }
}

fn strip_tags(markup: &str) -> String {
    let mut text = String::with_capacity(markup.len());
    let mut in_tag = false;
    for c in markup.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }
    text
}

#[mockall::automock]
pub trait FormSurface {
    fn field_value(&self, field: FieldId) -> String;
    fn set_region(&mut self, region: RegionId, content: Region);
    fn clear_region(&mut self, region: RegionId);
}

/// A form submission. Handlers call `prevent_default` so the page is not
/// navigated away and results render in place.
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}
