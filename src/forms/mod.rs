pub mod cafe_form;
pub mod csrf;

pub use cafe_form::{CafeForm, FormErrors};
