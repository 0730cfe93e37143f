//! Custom widgets for the TUI

mod border_grid;
mod country_detail;
mod country_list;
mod error_panel;
mod header;
mod loading;
mod page_nav;
mod population_chart;

pub use border_grid::BorderGrid;
pub use country_detail::CountryDetailView;
pub use country_list::CountryList;
pub use error_panel::ErrorPanel;
pub use header::MainHeader;
pub use loading::{spinner_frame, LoadingIndicator};
pub use page_nav::{FooterMode, PageNav};
pub use population_chart::{format_population, PopulationChart};
