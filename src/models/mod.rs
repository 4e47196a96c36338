mod envelope;
mod product;
mod request;
mod stats;
mod upload;
mod user;

pub use envelope::Envelope;
pub use product::{Product, ProductDraft, ProductFilter};
pub use request::{Method, RequestDescriptor};
pub use stats::{Activity, DashboardStats, Ping};
pub use upload::FileUpload;
pub use user::User;
