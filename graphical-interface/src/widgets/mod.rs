mod country;
pub use country::WidgetCountry;
