use anyhow::{Result, bail};
use log::debug;
use multiply_numbers::{Number, multiply, try_multiply};
use std::env::args;

fn main() -> Result<()> {
    env_logger::try_init().unwrap_or_default();

    let args = args().collect::<Vec<_>>();

    let product = match args.get(1..).unwrap_or_default() {
        // smoelius: With no arguments, multiply the demonstration operands.
        [] => multiply(Number::Int(5), Number::Int(10)),
        [left, right] => {
            debug!("operands: {left:?} {right:?}");
            try_multiply(left, right)?
        }
        _ => bail!("usage: multiply [<LEFT> <RIGHT>]"),
    };

    debug!("product: {product}");
    println!("{product}");

    Ok(())
}
