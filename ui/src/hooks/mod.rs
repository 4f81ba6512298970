pub mod use_authentication;
pub mod use_logout;
pub mod use_title;

pub use use_authentication::use_authentication;
pub use use_logout::use_logout;
pub use use_title::use_title;
