use std::env;
use std::error::Error;
use std::io;

use chess_rules::console::options::ConsoleOptions;
use chess_rules::console::ConsoleHandler;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let options = ConsoleOptions::from_args(env::args().skip(1))?;
    let mut handler = ConsoleHandler::new(options);
    handler.run(io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
