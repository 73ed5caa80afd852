mod layouts;
pub use layouts::{AuthLayout, PrivateLayout};

mod pages;
pub use pages::{Home, SignIn, SignUp, Statistics};
