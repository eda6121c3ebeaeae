use std::fs::File;
use std::io::Write;
use tracing::info;

pub fn save_json(data: &serde_json::Value, filename: &str) -> std::io::Result<()> {
    let mut file = File::create(filename)?;
    file.write_all(serde_json::to_string_pretty(data)?.as_bytes())?;
    info!(file = filename, "report saved");
    Ok(())
}
