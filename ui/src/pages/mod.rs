pub mod dashboard;
pub mod home;
pub mod landing;
pub mod login;
pub mod not_found;

pub use dashboard::DashboardPage;
pub use home::HomePage;
pub use landing::LandingPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
