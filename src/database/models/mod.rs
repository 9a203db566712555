pub mod brand;
pub mod car;
pub mod car_color;
pub mod color;
pub mod model;

pub use brand::{Brand, BrandInput, Brands};
pub use car::{Car, CarInput, Cars};
pub use car_color::{CarColor, CarColors};
pub use color::{Color, ColorInput, Colors};
pub use model::{Model, ModelInput, Models};
