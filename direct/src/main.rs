use common::{init_logger, Result};

fn main() -> Result<()> {
    init_logger();

    let elapsed = direct::run(".")?;
    println!("Elapsed time: {:?}", elapsed);

    Ok(())
}
