use std::fs::{self, File};
use std::io::prelude::*;
use std::path::Path;

use tempfile::TempDir;

pub fn create_file_with_content(path: &Path, file_name: &str, content: &str) {
    let file_path = path.join(file_name);
    let mut f = File::create(&file_path).unwrap();
    f.write_all(content.as_bytes()).unwrap();
}

pub fn create_dir(path: &Path, dir_name: &str) -> std::path::PathBuf {
    let dir_path = path.join(dir_name);
    fs::create_dir(&dir_path).unwrap();
    dir_path
}

pub fn test_in_tmp_dir<F>(func: F)
where
    F: FnOnce(&Path),
{
    let _ = env_logger::builder().is_test(true).try_init();
    let tmp_dir = TempDir::new().expect("create temp dir");
    {
        let path = tmp_dir.path();
        func(path);
    }
    tmp_dir.close().expect("delete temp dir");
}
