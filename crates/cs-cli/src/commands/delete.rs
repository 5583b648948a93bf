use std::path::Path;

use cs_save::SaveStore;

pub fn run(dir: &Path, name: &str) -> Result<(), String> {
    let removed = SaveStore::new(dir).delete(name).map_err(|e| e.to_string())?;
    if !removed {
        return Err(format!("no save named \"{name}\""));
    }
    println!("  Deleted {name}");
    Ok(())
}
