use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to an SPDX license list export (licenses.json)
    #[arg(short, long)]
    pub licenses: String,

    /// SPDX identifiers to resolve
    #[arg(short, long = "id", value_delimiter = ',')]
    pub ids: Vec<String>,

    /// License reference URLs to resolve
    pub urls: Vec<String>,

    /// Pretty-print each JSON result
    #[arg(long)]
    pub pretty: bool,
}
