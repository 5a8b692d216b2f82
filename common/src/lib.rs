pub use eyre::Result;
use std::{
    ffi::OsString,
    fmt::Debug,
    path::{Path, PathBuf},
};

/// Input files, looked up relative to the working directory.
pub const INPUT_FILES: [&str; 3] = ["file6_1.txt", "file6_2.txt", "file6_3.txt"];
pub const OUTPUT_FILE: &str = "output.txt";
pub const OUT_SUFFIX: &str = ".out";

pub trait App: Debug {
    fn map(&self, k: String, v: String) -> Vec<(String, String)>;
    fn reduce(&self, k: String, vs: Vec<String>) -> String;
}

/// Per-file output path: the input path with [`OUT_SUFFIX`] appended.
pub fn out_path(input: impl AsRef<Path>) -> PathBuf {
    let mut name = OsString::from(input.as_ref().as_os_str());
    name.push(OUT_SUFFIX);
    PathBuf::from(name)
}

pub fn input_paths(dir: impl AsRef<Path>) -> Vec<PathBuf> {
    INPUT_FILES.iter().map(|f| dir.as_ref().join(f)).collect()
}

pub fn init_logger() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init()
}
