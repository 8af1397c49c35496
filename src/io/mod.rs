pub mod json;

pub use json::{
    parse_impact_parameters, parse_orbital_state, parse_perturbation_config,
    read_impact_parameters, write_report, write_report_file, write_trajectory,
};
