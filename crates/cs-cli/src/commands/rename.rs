use std::path::Path;

use cs_save::SaveStore;

pub fn run(dir: &Path, from: &str, to: &str) -> Result<(), String> {
    SaveStore::new(dir)
        .rename(from, to)
        .map_err(|e| e.to_string())?;
    println!("  Renamed {from} to {to}");
    Ok(())
}
