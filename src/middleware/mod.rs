pub mod fallback;
pub mod response;
pub mod validate;

pub use fallback::{method_not_allowed_body, route_not_found};
pub use response::{ApiResponse, ApiResult};
pub use validate::{IdPath, ValidatedJson};
