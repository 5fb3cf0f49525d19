use bytewise::Scenario;
use clap::{Parser, Subcommand};

/// bytewise - watch integers wrap around in a tiny byte memory
#[derive(Debug, Parser)]
#[command(name = "bytewise", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared across all subcommands.
#[derive(Debug, Parser)]
pub struct GlobalOptions {
    /// Emit output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose (debug-level) logging output, one line per instruction.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run a built-in demonstration: wraparound, cost, counter or watch.
    Demo {
        /// Scenario name.
        #[arg(value_name = "SCENARIO")]
        scenario: Scenario,
    },

    /// Store values into memory, then decode variables and optionally dump memory.
    Eval {
        /// Memory size in bytes.
        #[arg(long, default_value_t = bytewise::memory::DEFAULT_SIZE)]
        size: usize,

        /// Store a value, applied in order (e.g. 0:u8=254, 0x1e:s16=-2).
        #[arg(long, value_name = "ADDR:TAG=VALUE")]
        set: Vec<String>,

        /// Decode a variable after all stores (e.g. 0:s8).
        #[arg(long, value_name = "ADDR:TAG")]
        read: Vec<String>,

        /// Print the memory dump.
        #[arg(long)]
        dump: bool,
    },

    /// Read one integer from the console into a variable.
    Input {
        /// Target variable (e.g. 4:u16).
        #[arg(value_name = "ADDR:TAG")]
        variable: String,

        /// Memory size in bytes.
        #[arg(long, default_value_t = bytewise::memory::DEFAULT_SIZE)]
        size: usize,

        /// Prompt shown before reading.
        #[arg(long, default_value = "value? ")]
        prompt: String,
    },
}
