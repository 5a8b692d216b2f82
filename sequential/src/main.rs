use app_wc::WcApp;
use common::{init_logger, Result};

fn main() -> Result<()> {
    init_logger();

    let elapsed = sequential::run(&WcApp::default(), ".")?;
    println!("Total time: {:?}", elapsed);

    Ok(())
}
