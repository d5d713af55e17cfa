//! UI Components
//!
//! One component per controller, plus the shared pieces they render.

mod counter_panel;
mod faq_section;
mod field_error;
mod registration_form;
mod site_nav;
mod status_line;
mod theme_toggle;
mod user_dashboard;

pub use counter_panel::CounterPanel;
pub use faq_section::FaqSection;
pub use field_error::{FieldError, FieldSlot};
pub use registration_form::RegistrationForm;
pub use site_nav::SiteNav;
pub use status_line::StatusLine;
pub use theme_toggle::ThemeToggle;
pub use user_dashboard::UserDashboard;
