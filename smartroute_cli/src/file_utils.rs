use std::path::{Path, PathBuf};

const TRIPS_SUFFIX: &str = ".trips.json";

/// Collects every planning input under `folder`, recursively and sorted.
/// Trip plans written by a previous run are skipped.
pub fn read_input_folder(folder_path: &Path) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(folder_path)? {
        let path = entry?.path();
        if path.is_dir() {
            files.extend(read_input_folder(&path)?);
        } else if is_planning_input(&path) {
            files.push(path);
        }
    }

    files.sort();

    Ok(files)
}

fn is_planning_input(path: &Path) -> bool {
    let is_json = path.extension().is_some_and(|extension| extension == "json");
    let is_output = path
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(TRIPS_SUFFIX));

    is_json && !is_output
}

/// `<out>/<stem>.<extension>` for an input file.
pub fn output_path(out: &Path, input: &Path, extension: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from("plan"));

    out.join(format!("{stem}.{extension}"))
}
