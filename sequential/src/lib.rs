use common::{input_paths, out_path, App, Result, OUTPUT_FILE};
use eyre::WrapErr;
use itertools::Itertools;
use log::{debug, info};
use std::{
    collections::HashMap,
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

pub fn group_by_key(kvs: Vec<(String, String)>) -> HashMap<String, Vec<String>> {
    kvs.into_iter().into_group_map()
}

fn read_lines(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).wrap_err_with(|| format!("failed to open {}", path.display()))?;
    BufReader::new(file)
        .lines()
        .collect::<std::io::Result<Vec<_>>>()
        .wrap_err_with(|| format!("failed to read {}", path.display()))
}

/// Runs map, group, reduce and sort over one input file and writes
/// `"<word> <count>"` lines to `output`, ascending by word.
pub fn run_map_reduce(app: &dyn App, input: &Path, output: &Path) -> Result<Duration> {
    let watch = Instant::now();
    let filename = input.to_string_lossy().into_owned();

    let lines = read_lines(input)?;
    let mut output_file = File::create(output)
        .map(BufWriter::new)
        .wrap_err_with(|| format!("failed to create {}", output.display()))?;
    info!("read {} lines from {}", lines.len(), filename);

    let kvs = lines
        .into_iter()
        .flat_map(|line| app.map(filename.clone(), line))
        .collect_vec();
    debug!("{}: {} pairs mapped", filename, kvs.len());

    let groups = group_by_key(kvs);
    let results = groups
        .into_iter()
        .map(|(k, vs)| {
            let output = app.reduce(k.clone(), vs);
            (k, output)
        })
        .sorted_by(|(a, _), (b, _)| a.cmp(b))
        .collect_vec();
    info!("{}: {} groups reduced", filename, results.len());

    for (k, v) in results {
        writeln!(output_file, "{} {}", k, v)
            .wrap_err_with(|| format!("failed to write {}", output.display()))?;
    }
    output_file
        .flush()
        .wrap_err_with(|| format!("failed to write {}", output.display()))?;
    info!("wrote {}", output.display());

    let elapsed = watch.elapsed();
    println!("Map/reduce of {} took {:?}", filename, elapsed);
    Ok(elapsed)
}

/// Concatenates the per-file outputs of `inputs`, in order, into `output`.
pub fn merge_outputs(inputs: &[PathBuf], output: &Path) -> Result<()> {
    let mut output_file = File::create(output)
        .map(BufWriter::new)
        .wrap_err_with(|| format!("failed to create {}", output.display()))?;

    for input in inputs {
        let part = out_path(input);
        for line in read_lines(&part)? {
            writeln!(output_file, "{}", line)
                .wrap_err_with(|| format!("failed to write {}", output.display()))?;
        }
    }
    output_file
        .flush()
        .wrap_err_with(|| format!("failed to write {}", output.display()))?;
    info!("merged {} files into {}", inputs.len(), output.display());
    Ok(())
}

pub fn run(app: &dyn App, dir: impl AsRef<Path>) -> Result<Duration> {
    let watch = Instant::now();
    let inputs = input_paths(&dir);

    // nothing is written unless every input can be opened
    for input in &inputs {
        File::open(input).wrap_err_with(|| format!("failed to open input {}", input.display()))?;
    }

    for input in &inputs {
        run_map_reduce(app, input, &out_path(input))?;
    }
    merge_outputs(&inputs, &dir.as_ref().join(OUTPUT_FILE))?;

    Ok(watch.elapsed())
}
