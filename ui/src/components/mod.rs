pub mod error_display;
pub mod feature_card;
pub mod icon;
pub mod learn_more_button;
pub mod login_form;

pub use error_display::ErrorDisplay;
pub use feature_card::FeatureCard;
pub use icon::Icon;
pub use learn_more_button::LearnMoreButton;
pub use login_form::LoginForm;
