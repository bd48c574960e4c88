use{
    std::{
        fs::File,
        io::{Write, BufWriter},
        path::Path,
    },
    serde_json::Value,
    crate::error::SimError,
    super::*,
};

pub type CurveWriter = BufWriter<File>;

/// Writes the per-day history as csv:
/// `day,susceptible,infected,immune,long_condition`
pub fn write_history_csv<W: Write>(history: &[DailyRecord], writer: W) -> Result<(), SimError>
{
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in history{
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn history_to_file<P: AsRef<Path>>(history: &[DailyRecord], path: P) -> Result<(), SimError>
{
    let file = File::create(path.as_ref())?;
    write_history_csv(history, BufWriter::new(file))?;
    log::info!("created {}", path.as_ref().display());
    Ok(())
}

/// Creates a `.dat` file whose first lines are the json parameters, commented out with `#`
pub fn create_dat_file<P: AsRef<Path>>(path: P, jsons: &[Value]) -> Result<CurveWriter, SimError>
{
    let file = File::create(path.as_ref())?;
    log::info!("creating: {}", path.as_ref().display());
    let mut buf = BufWriter::new(file);
    write_jsons(jsons, &mut buf)?;
    Ok(buf)
}

pub fn write_jsons<W: Write>(jsons: &[Value], mut writer: W) -> std::io::Result<()>
{
    for j in jsons{
        write!(writer, "#")?;
        serde_json::to_writer(&mut writer, j)?;
        writeln!(writer)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests
{
    use super::*;
    use std::io::Read;

    fn history() -> Vec<DailyRecord>
    {
        vec![
            DailyRecord::new(0, StatusCounts{susceptible: 8, infected: 2, immune: 0, long_condition: 0}),
            DailyRecord::new(1, StatusCounts{susceptible: 5, infected: 4, immune: 1, long_condition: 0}),
        ]
    }

    #[test]
    fn csv_has_header_and_one_row_per_day()
    {
        let mut out = Vec::new();
        write_history_csv(&history(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines, vec![
            "day,susceptible,infected,immune,long_condition",
            "0,8,2,0,0",
            "1,5,4,1,0",
        ]);
    }

    #[test]
    fn csv_file_roundtrip()
    {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.csv");
        history_to_file(&history(), &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let read: Vec<DailyRecord> = reader.deserialize()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(read, history());
    }

    #[test]
    fn dat_file_starts_with_json_header()
    {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.dat");
        let json = serde_json::json!({"system_size": 10});
        {
            let mut w = create_dat_file(&path, &[json]).unwrap();
            writeln!(w, "1 2 3").unwrap();
        }
        let mut text = String::new();
        File::open(&path).unwrap().read_to_string(&mut text).unwrap();
        assert_eq!(text, "#{\"system_size\":10}\n1 2 3\n");
    }
}
