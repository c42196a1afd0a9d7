use super::load_trace;
use crate::cli::ContactsArgs;
use crate::config::build_config;
use crate::error::Result;
use domsplit::core::models::contact_map::ContactMap;
use domsplit::engine::contacts;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use tracing::info;

pub fn run(args: ContactsArgs) -> Result<()> {
    let config = build_config(&args.input, None)?;
    let (trace, _) = load_trace(&config)?;

    let map = contacts::build_for_trace(&trace, config.analysis.cutoff);
    info!(
        "Contact map of chain '{}': {} residues, {} contacts.",
        trace.chain_id(),
        map.size(),
        map.contact_count()
    );

    match &args.output {
        Some(path) => {
            write_matrix(&map, File::create(path)?)?;
            println!("Contact matrix written to: {}", path.display());
        }
        None => write_matrix(&map, io::stdout().lock())?,
    }
    println!(
        "{} residues, {} contacts at cutoff {} Å.",
        map.size(),
        map.contact_count(),
        config.analysis.cutoff
    );
    Ok(())
}

fn write_matrix(map: &ContactMap, writer: impl Write) -> io::Result<()> {
    let mut writer = BufWriter::new(writer);
    for i in 0..map.size() {
        let row: Vec<&str> = map
            .row(i)
            .iter()
            .map(|&c| if c { "1" } else { "0" })
            .collect();
        writeln!(writer, "{}", row.join(" "))?;
    }
    writer.flush()
}
