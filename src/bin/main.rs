use bucketmap::shell::{reader, Shell};
use bucketmap::{Error, MapOptions};
use std::io;
use tracing_subscriber::prelude::*;

fn main() -> io::Result<()> {
    let _guard = if std::env::args().any(|arg| arg == "--chrome-trace") {
        let (chrome_layer, guard) = tracing_chrome::ChromeLayerBuilder::new().build();
        tracing_subscriber::registry().with(chrome_layer).init();
        Some(guard)
    } else {
        tracing_subscriber::fmt().with_writer(io::stderr).init();
        None
    };

    let mut shell = match Shell::new(MapOptions::default(), io::stdout()) {
        Ok(shell) => shell,
        Err(e) => return Err(io::Error::new(io::ErrorKind::InvalidInput, e)),
    };
    let mut buffer = String::new();
    loop {
        if io::stdin().read_line(&mut buffer)? == 0 {
            break;
        }
        if let Err(e) = reader::read_shell_line(&buffer, &mut shell) {
            if e != Error::Quit {
                eprintln!("{e}");
            }
            break;
        }
        buffer.clear();
    }
    Ok(())
}
