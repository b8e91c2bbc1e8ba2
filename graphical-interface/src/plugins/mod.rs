mod countries;
pub use countries::Countries;

mod islands;
pub use islands::Islands;
