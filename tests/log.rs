// tests/log.rs
//
// The run log lives under the same .store/ directory as the document
// cache; the logger must create that directory itself, so a line logged
// before the first cache write is not dropped.

use std::fs;
use std::path::Path;

use htec_map::config::consts::{LOG_FILE, STORE_DIR};
use htec_map::log::write_log;

#[test]
fn log_lines_land_in_the_store_dir() {
    let path = Path::new(STORE_DIR).join(LOG_FILE);
    let _ = fs::remove_file(&path);

    let marker = "first line of the run, before any cache write";
    write_log("INFO", marker);

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains(marker));
    assert!(text.contains("[INFO]"));
}
