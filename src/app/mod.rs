pub mod config;

pub use config::{Config, ConfigError};

use crate::level::Level;
use crate::logger::Logger;
use crate::record::Properties;
use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, Write};

/// Binary entry point: parse configuration, open the destination, and pump
/// stdin through the logger until end of input.
pub fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    run(Config::parse())
}

pub fn run(config: Config) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Startup failures are themselves unrecoverable conditions: report them
    // as FATAL records on stderr and halt.
    let bootstrap = Logger::new(io::stderr(), Level::Error);

    if let Err(e) = config.validate() {
        bootstrap.fatal(&e, None);
    }
    let properties = match config.parsed_properties() {
        Ok(properties) => properties,
        Err(e) => bootstrap.fatal(&e, None),
    };

    let sink: Box<dyn Write + Send> = match &config.output {
        Some(path) => match File::create(path) {
            Ok(file) => Box::new(file),
            Err(e) => {
                let mut props = Properties::new();
                props.insert("path".to_string(), path.display().to_string());
                bootstrap.fatal(&e, Some(props));
            }
        },
        None => Box::new(io::stdout()),
    };

    let logger = Logger::new(sink, config.log_level);
    pump(
        io::stdin().lock(),
        &logger,
        config.error_stream,
        &properties,
    )?;
    Ok(())
}

/// Emits one record per input line: INFO records carrying the configured
/// properties, or ERROR records through the write-sink adapter when the
/// input is an error stream.
fn pump<R, W>(
    input: R,
    logger: &Logger<W>,
    error_stream: bool,
    properties: &Properties,
) -> io::Result<()>
where
    R: BufRead,
    W: Write + Send,
{
    for line in input.lines() {
        let line = line?;
        if error_stream {
            let mut adapter = logger;
            adapter.write_all(line.as_bytes())?;
        } else {
            let props = (!properties.is_empty()).then(|| properties.clone());
            logger.info(&line, props)?;
        }
    }
    Ok(())
}
