use libmyanmar_core::segment;
use std::io::Read;

fn main() -> anyhow::Result<()> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;

    // One JSON object per run, in input order.
    for run in segment(&input) {
        println!("{}", serde_json::to_string(&run)?);
    }
    Ok(())
}
