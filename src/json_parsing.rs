use{
    serde::{Serialize, de::DeserializeOwned},
    serde_json::Value,
    std::{
        fs::File,
        io::{BufReader, Write},
        path::Path,
    },
    crate::error::SimError,
};

/// Reads the parameter file of a subcommand.
///
/// If no file is given, the default parameters are printed as json
/// (to be used as a template) and `Ok(None)` is returned.
/// The raw json is handed back as well, it ends up in the header of
/// every result file.
pub fn parse<P>(file: Option<&String>) -> Result<Option<(P, Value)>, SimError>
where P: Serialize + DeserializeOwned + Default
{
    match file
    {
        None => {
            let example = P::default();
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            serde_json::to_writer_pretty(&mut lock, &example)?;
            writeln!(lock)?;
            Ok(None)
        },
        Some(path) => parse_file(path).map(Some)
    }
}

pub fn parse_file<P, F>(path: F) -> Result<(P, Value), SimError>
where P: DeserializeOwned,
    F: AsRef<Path>
{
    let file = File::open(path.as_ref())?;
    let reader = BufReader::new(file);
    let json: Value = serde_json::from_reader(reader)?;
    let param: P = serde_json::from_value(json.clone())?;
    Ok((param, json))
}
