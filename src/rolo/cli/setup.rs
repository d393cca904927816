use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rolo", bin_name = "rolo", version)]
#[command(about = "Keyboard-driven contact book with undoable commands", long_about = None)]
pub struct Cli {
    /// Read settings from this TOML file
    #[arg(long, value_name = "FILE", help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Address book file (overrides `data_file` from the config)
    #[arg(long, value_name = "FILE", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Run this command line and exit; repeat to run several in order
    #[arg(short = 'c', long = "command", value_name = "COMMAND")]
    pub commands: Vec<String>,
}
