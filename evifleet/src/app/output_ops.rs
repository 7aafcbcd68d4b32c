use super::FleetAppError;
use crate::fleet::{FleetParameters, FleetResult, FleetSummary, FleetWarning};
use evifleet_core::model::{
    category::{DayOfWeek, VmtBin},
    weights::VmtWeights,
};
use flate2::{write::GzEncoder, Compression};
use kdam::tqdm;
use serde::Serialize;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

pub const FLEET_ACTIVITY_FILENAME: &str = "fleet_activity.csv";
pub const FLEET_STATS_FILENAME: &str = "fleet_stats.csv";
pub const FLEET_SUMMARY_FILENAME: &str = "fleet_summary.json";
pub const VMT_TABLE_FILENAME: &str = "vmt_table.csv";

/// the contents of the run summary file
#[derive(Serialize)]
pub struct RunSummary<'a> {
    pub created_at: String,
    pub seed: Option<u64>,
    pub parameters: &'a FleetParameters,
    pub summary: &'a FleetSummary,
    pub warnings: &'a [FleetWarning],
}

#[derive(Serialize)]
struct VmtTableRow {
    day_of_week: DayOfWeek,
    schedule_vmt_bin: VmtBin,
    upper_bound: u32,
    weight: f64,
}

/// the activity, stats, summary and mileage table file paths written to an
/// output directory
pub fn output_filepaths(directory: &Path, gzip: bool) -> [PathBuf; 4] {
    let activity = if gzip {
        format!("{FLEET_ACTIVITY_FILENAME}.gz")
    } else {
        FLEET_ACTIVITY_FILENAME.to_string()
    };
    [
        directory.join(activity),
        directory.join(FLEET_STATS_FILENAME),
        directory.join(FLEET_SUMMARY_FILENAME),
        directory.join(VMT_TABLE_FILENAME),
    ]
}

/// fails if any output file already exists and overwriting was not requested
pub fn check_outputs(directory: &Path, gzip: bool, overwrite: bool) -> Result<(), FleetAppError> {
    if overwrite {
        return Ok(());
    }
    match output_filepaths(directory, gzip).iter().find(|p| p.exists()) {
        Some(existing) => Err(FleetAppError::OutputExists(existing.display().to_string())),
        None => Ok(()),
    }
}

/// writes the fleet activity, fleet statistics, mileage table and run summary
/// of a generated fleet to an output directory, creating the directory if needed
pub fn write_fleet(
    directory: &Path,
    result: &FleetResult,
    parameters: &FleetParameters,
    seed: Option<u64>,
    gzip: bool,
    overwrite: bool,
) -> Result<(), FleetAppError> {
    check_outputs(directory, gzip, overwrite)?;
    std::fs::create_dir_all(directory).map_err(|e| {
        FleetAppError::write_error(&directory.display().to_string(), e.to_string())
    })?;
    let [activity_path, stats_path, summary_path, vmt_path] =
        output_filepaths(directory, gzip);

    write_csv(&activity_path, &result.fleet_activity, gzip)?;
    write_csv(&stats_path, &result.fleet_stats.rows, false)?;

    let vmt_filename = vmt_path.display().to_string();
    let vmt_file = create_file(&vmt_path)?;
    write_vmt_table(BufWriter::new(vmt_file), &result.vmt_weights, parameters.bin_width)
        .map_err(|e| FleetAppError::write_error(&vmt_filename, e.to_string()))?;

    let summary = RunSummary {
        created_at: chrono::Local::now().to_rfc3339(),
        seed,
        parameters,
        summary: &result.summary,
        warnings: &result.warnings,
    };
    let summary_filename = summary_path.display().to_string();
    let mut buffer = BufWriter::new(create_file(&summary_path)?);
    serde_json::to_writer_pretty(&mut buffer, &summary)
        .map_err(|e| FleetAppError::write_error(&summary_filename, e.to_string()))?;
    buffer
        .flush()
        .map_err(|e| FleetAppError::write_error(&summary_filename, e.to_string()))?;
    log::info!("wrote fleet outputs to {}", directory.display());
    Ok(())
}

/// writes a mileage table as CSV, one row per day of week and bin
pub fn write_vmt_table<W: Write>(
    w: W,
    vmt: &VmtWeights,
    bin_width: u32,
) -> Result<(), FleetAppError> {
    let mut writer = csv::Writer::from_writer(w);
    for (day_of_week, schedule_vmt_bin, weight) in vmt.iter() {
        let row = VmtTableRow {
            day_of_week,
            schedule_vmt_bin,
            upper_bound: schedule_vmt_bin.upper_bound(bin_width),
            weight,
        };
        writer
            .serialize(row)
            .map_err(|e| FleetAppError::write_error("vmt table", e.to_string()))?;
    }
    writer
        .flush()
        .map_err(|e| FleetAppError::write_error("vmt table", e.to_string()))
}

fn create_file(filepath: &Path) -> Result<File, FleetAppError> {
    File::create(filepath)
        .map_err(|e| FleetAppError::write_error(&filepath.display().to_string(), e.to_string()))
}

/// writes rows as CSV, optionally gzipped. the gzip stream is finished
/// explicitly so a failure writing its trailer is reported.
fn write_csv<T: Serialize>(filepath: &Path, rows: &[T], gzip: bool) -> Result<(), FleetAppError> {
    let filename = filepath.display().to_string();
    let file = create_file(filepath)?;
    if gzip {
        let encoder = GzEncoder::new(file, Compression::default());
        serialize_rows(encoder, rows, &filename)?
            .finish()
            .map_err(|e| FleetAppError::write_error(&filename, e.to_string()))?;
    } else {
        let mut buffer = serialize_rows(BufWriter::new(file), rows, &filename)?;
        buffer
            .flush()
            .map_err(|e| FleetAppError::write_error(&filename, e.to_string()))?;
    }
    Ok(())
}

/// serializes rows with a header into `w` and hands the flushed writer back
fn serialize_rows<W: Write, T: Serialize>(
    w: W,
    rows: &[T],
    filename: &str,
) -> Result<W, FleetAppError> {
    let mut writer = csv::WriterBuilder::new().has_headers(true).from_writer(w);
    for row in tqdm!(rows.iter(), desc = format!("write {filename}")) {
        writer
            .serialize(row)
            .map_err(|e| FleetAppError::write_error(filename, e.to_string()))?;
    }
    eprintln!();
    writer
        .into_inner()
        .map_err(|e| FleetAppError::write_error(filename, e.error().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fleet::{
        fleet_fixtures::{mock_key, mock_source, mock_vmt, mock_weights},
        fleet_generator, FleetParameters,
    };
    use evifleet_core::model::{
        category::{LocClass, PevType, PreferredLoc},
        weights::WeightEntry,
    };
    use flate2::read::GzDecoder;
    use rand::{rngs::StdRng, SeedableRng};
    use std::io::Read;

    #[test]
    fn test_write_vmt_table() {
        let vmt = VmtWeights::try_from_entries(
            &[WeightEntry::new("0", 0.25), WeightEntry::new("10", 0.75)],
            &[WeightEntry::new("0", 1.0)],
        )
        .unwrap();
        let mut buffer = vec![];
        write_vmt_table(&mut buffer, &vmt, 10).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(
            text,
            "day_of_week,schedule_vmt_bin,upper_bound,weight\n\
             weekday,0,10,0.25\n\
             weekday,10,20,0.75\n\
             weekend,0,10,1.0\n"
        );
    }

    #[test]
    fn test_write_fleet_gzip() {
        let weekday = mock_key(DayOfWeek::Weekday, PevType::Bev250, PreferredLoc::PrefHome, 20);
        let weekend = mock_key(DayOfWeek::Weekend, PevType::Bev250, PreferredLoc::PrefHome, 20);
        let source = mock_source(&[(weekday, 1, 2), (weekend, 2, 1)]);
        let weights = mock_weights(&[("BEV250", 1.0)], &[("PrefHome", 1.0)]);
        let vmt = mock_vmt(&[("20", 1.0)], &[("20", 1.0)]);
        let parameters = FleetParameters {
            fleet_size: 4,
            mean_vmt: 30.0,
            bin_width: 10,
            loc_class: LocClass::Urban,
        };
        let mut rng = StdRng::seed_from_u64(7);
        let result =
            fleet_generator::generate(&source, &parameters, &weights, &vmt, 0.001, &mut rng)
                .unwrap();

        let directory =
            std::env::temp_dir().join(format!("evifleet_{}_write_fleet", std::process::id()));
        let _ = std::fs::remove_dir_all(&directory);
        write_fleet(&directory, &result, &parameters, Some(7), true, false).unwrap();
        let [activity_path, stats_path, summary_path, vmt_path] =
            output_filepaths(&directory, true);

        let mut activity = String::new();
        GzDecoder::new(File::open(&activity_path).unwrap())
            .read_to_string(&mut activity)
            .unwrap();
        let stats = std::fs::read_to_string(&stats_path).unwrap();
        let vmt_table = std::fs::read_to_string(&vmt_path).unwrap();
        let summary: serde_json::Value =
            serde_json::from_reader(File::open(&summary_path).unwrap()).unwrap();
        let rewrite = write_fleet(&directory, &result, &parameters, Some(7), true, false);
        std::fs::remove_dir_all(&directory).unwrap();

        // four weekday members with two sessions each, four weekend members with one
        let lines = activity.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 13);
        assert_eq!(
            lines[0],
            "fleet_id,source_vehicle_id,day_of_week,pev_type,preferred_loc,power_home,\
             power_work,vehicle_class,schedule_vmt_bin,power_public,session_id,start_time,\
             end_time,dest_type,energy_kwh"
        );
        assert_eq!(
            lines[1],
            "1,1,weekday,BEV250,PrefHome,HomeL2,WorkL2,Sedan,20,,0,08:00:00,08:45:00,home,6.0"
        );

        let stats_lines = stats.lines().collect::<Vec<_>>();
        assert_eq!(
            stats_lines[0],
            "dimension,day_of_week,category,target_weight,realized_weight,realized_count"
        );
        assert!(stats_lines.contains(&"pev_type,weekday,BEV250,1.0,1.0,4"));
        assert!(stats_lines.contains(&"schedule_vmt_bin,weekend,20,1.0,1.0,4"));

        assert!(vmt_table.lines().any(|l| l == "weekday,20,30,1.0"));

        assert_eq!(summary["seed"], 7);
        assert_eq!(summary["parameters"]["fleet_size"], 4);
        assert_eq!(summary["summary"]["activity_rows"], 12);
        assert_eq!(summary["warnings"], serde_json::json!([]));

        assert!(matches!(rewrite, Err(FleetAppError::OutputExists(_))));
    }

    #[test]
    fn test_existing_output_refused() {
        let directory =
            std::env::temp_dir().join(format!("evifleet_{}_outputs", std::process::id()));
        std::fs::create_dir_all(&directory).unwrap();
        let stats = directory.join(FLEET_STATS_FILENAME);
        std::fs::write(&stats, "dimension\n").unwrap();

        let refused = check_outputs(&directory, true, false);
        let allowed = check_outputs(&directory, true, true);
        std::fs::remove_dir_all(&directory).unwrap();
        assert!(matches!(refused, Err(FleetAppError::OutputExists(_))));
        assert!(allowed.is_ok());
    }

    #[test]
    fn test_gzip_activity_filename() {
        let [activity, _, _, _] = output_filepaths(Path::new("out"), true);
        assert_eq!(activity, Path::new("out").join("fleet_activity.csv.gz"));
    }
}
