mod home;

pub use home::{translate, HomeScreen, HomePage, TranslateFn};
