pub mod forms;
pub mod region;
pub mod render;

pub use forms::{validate_required, upload_label, FormField, FormValidation};
pub use region::{Counter, CounterSink, DisplayRegion, MemoryCounters, MemoryRegion};
pub use render::render_products;
