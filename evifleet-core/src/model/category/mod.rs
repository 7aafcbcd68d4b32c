//! closed vocabularies for each stratifying dimension of a fleet. every label a
//! caller or the source pool supplies must parse into one of these types.
mod category_label;
mod day_of_week;
mod dimension;
mod loc_class;
mod pev_type;
mod power_home;
mod power_work;
mod preferred_loc;
mod vehicle_class;
mod vmt_bin;

pub use category_label::CategoryLabel;
pub use day_of_week::DayOfWeek;
pub use dimension::Dimension;
pub use loc_class::LocClass;
pub use pev_type::PevType;
pub use power_home::PowerHome;
pub use power_work::PowerWork;
pub use preferred_loc::PreferredLoc;
pub use vehicle_class::VehicleClass;
pub use vmt_bin::VmtBin;
