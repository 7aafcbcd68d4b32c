mod destination_type;
mod source_population;
mod source_population_error;
mod source_record;
mod source_vehicle_id;

pub use destination_type::DestinationType;
pub use source_population::SourcePopulation;
pub use source_population_error::SourcePopulationError;
pub use source_record::SourceRecord;
pub use source_vehicle_id::SourceVehicleId;
