use anyhow::{bail, Context};
use rs8080_decoder::*;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let path = match args.next() {
        Some(path) => path,
        None => bail!("usage: disassembler <file> [config.toml]"),
    };
    let config = match args.next() {
        Some(config_path) => load_config(&config_path)
            .with_context(|| format!("couldn't load config {}", config_path))?,
        None => Config::default(),
    };

    let mut buf = Vec::new();
    File::open(&path)
        .and_then(|mut f| f.read_to_end(&mut buf))
        .with_context(|| format!("couldn't read {}", path))?;
    log::info!("{}: {} bytes", path, buf.len());

    let decoder = Decoder::new(config.decoder);
    let format = LineFormat::from(config.output);
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for insn in decoder.iter(&buf) {
        match insn {
            Ok(insn) => writeln!(out, "{}", format.line(&insn))?,
            Err(e) => {
                out.flush()?;
                return Err(e.into());
            }
        }
    }
    out.flush()?;
    Ok(())
}
