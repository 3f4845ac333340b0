mod load_config;
mod replace_in;
mod run_report;

pub use load_config::load_config;
pub use replace_in::replace_in;
pub use run_report::RunReport;
