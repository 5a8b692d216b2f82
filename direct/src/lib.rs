use common::{input_paths, Result, OUTPUT_FILE};
use eyre::WrapErr;
use log::{debug, info};
use std::{
    collections::HashMap,
    fs::File,
    io::{self, BufWriter, Read, Write},
    path::Path,
    time::{Duration, Instant},
};

/// Maximal runs of non-whitespace characters.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

pub fn count_words(text: &str) -> HashMap<String, usize> {
    let mut freq = HashMap::new();
    for word in tokenize(text) {
        *freq.entry(word.to_owned()).or_insert(0) += 1;
    }
    freq
}

/// Writes one `"<word>: <count>"` line per entry, in the map's iteration
/// order. That order is not stable between runs.
pub fn write_counts<W: Write>(writer: &mut W, freq: &HashMap<String, usize>) -> io::Result<()> {
    for (word, count) in freq {
        writeln!(writer, "{}: {}", word, count)?;
    }
    Ok(())
}

pub fn run(dir: impl AsRef<Path>) -> Result<Duration> {
    let watch = Instant::now();

    let inputs = input_paths(&dir)
        .into_iter()
        .map(|path| {
            File::open(&path)
                .map(|file| (path.clone(), file))
                .wrap_err_with(|| format!("failed to open input {}", path.display()))
        })
        .collect::<Result<Vec<_>>>()?;

    let output = dir.as_ref().join(OUTPUT_FILE);
    let mut output_file = File::create(&output)
        .map(BufWriter::new)
        .wrap_err_with(|| format!("failed to create {}", output.display()))?;

    for (path, mut file) in inputs {
        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .wrap_err_with(|| format!("failed to read {}", path.display()))?;

        let freq = count_words(&contents);
        debug!("{}: {} distinct words", path.display(), freq.len());
        write_counts(&mut output_file, &freq)
            .wrap_err_with(|| format!("failed to write {}", output.display()))?;
        info!("counted {}", path.display());
    }
    output_file
        .flush()
        .wrap_err_with(|| format!("failed to write {}", output.display()))?;

    Ok(watch.elapsed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::INPUT_FILES;
    use std::{env, fs, ops::Deref, path::PathBuf};
    use uuid::Uuid;

    struct ScratchDir(PathBuf);

    impl ScratchDir {
        fn new() -> Self {
            let dir = env::temp_dir().join(format!("direct-{}", Uuid::new_v4()));
            fs::create_dir_all(&dir).unwrap();
            Self(dir)
        }
    }

    impl Deref for ScratchDir {
        type Target = Path;

        fn deref(&self) -> &Path {
            &self.0
        }
    }

    impl AsRef<Path> for ScratchDir {
        fn as_ref(&self) -> &Path {
            &self.0
        }
    }

    impl Drop for ScratchDir {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.0);
        }
    }

    fn parse_block(lines: &[&str]) -> HashMap<String, usize> {
        lines
            .iter()
            .map(|line| {
                let (word, count) = line.rsplit_once(": ").unwrap();
                (word.to_owned(), count.parse().unwrap())
            })
            .collect()
    }

    #[test]
    fn whitespace_tokens_keep_punctuation() {
        let freq = count_words("cat3 dog-2 cat");
        assert_eq!(freq.len(), 3);
        assert_eq!(freq["cat3"], 1);
        assert_eq!(freq["dog-2"], 1);
        assert_eq!(freq["cat"], 1);
    }

    #[test]
    fn tokenize_skips_runs_of_whitespace() {
        let tokens: Vec<_> = tokenize("  a\tb\n\nc  d \r\n").collect();
        assert_eq!(tokens, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn counts_conserved_and_idempotent() {
        let text = "to be or not to be\nthat is the question, to be";
        let freq = count_words(text);
        assert_eq!(freq.values().sum::<usize>(), tokenize(text).count());
        assert_eq!(freq["to"], 3);
        assert_eq!(freq["question,"], 1);
        assert_eq!(freq, count_words(text));
    }

    #[test]
    fn write_counts_formats_lines() {
        let mut freq = HashMap::new();
        freq.insert("cat".to_owned(), 2);

        let mut buf = Vec::new();
        write_counts(&mut buf, &freq).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "cat: 2\n");
    }

    #[test]
    fn run_writes_one_block_per_file() {
        let dir = ScratchDir::new();
        let texts = ["cat dog cat", "dog bird", "cat"];
        for (name, text) in INPUT_FILES.iter().zip(texts.iter()) {
            fs::write(dir.join(name), text).unwrap();
        }

        run(&dir).unwrap();

        let output = fs::read_to_string(dir.join(OUTPUT_FILE)).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 2 + 2 + 1);

        let first = parse_block(&lines[0..2]);
        assert_eq!(first["cat"], 2);
        assert_eq!(first["dog"], 1);
        let second = parse_block(&lines[2..4]);
        assert_eq!(second["dog"], 1);
        assert_eq!(second["bird"], 1);
        assert_eq!(lines[4], "cat: 1");
    }

    #[test]
    fn scratch_dir_removed_on_drop() {
        let dir = ScratchDir::new();
        fs::write(dir.join(INPUT_FILES[0]), "cat").unwrap();
        let path = dir.to_path_buf();
        assert!(path.exists());

        drop(dir);
        assert!(!path.exists());
    }

    #[test]
    fn missing_input_writes_nothing() {
        let dir = ScratchDir::new();
        fs::write(dir.join(INPUT_FILES[0]), "cat").unwrap();
        fs::write(dir.join(INPUT_FILES[1]), "dog").unwrap();

        let err = run(&dir).unwrap_err();

        assert!(err.to_string().contains(INPUT_FILES[2]));
        assert!(!dir.join(OUTPUT_FILE).exists());
    }
}
