pub mod handler;
pub mod page;
pub mod surface;

pub use handler::{FormHandler, StalePolicy};
pub use page::Page;
pub use surface::{FieldId, FormSurface, Region, RegionId, SubmitEvent};
