use std::io;

use bytewise::{ConsoleInput, Machine};
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::{new_store, parse_variable},
    output::{print_dump, print_output},
};

#[derive(Debug, Serialize)]
struct InputOutput {
    variable: String,
    entered: i64,
    stored: i64,
    memory: Vec<String>,
}

pub fn run(variable: &str, size: usize, prompt: &str, opts: &GlobalOptions) -> anyhow::Result<()> {
    let variable = parse_variable(variable)?;
    let mut store = new_store(size)?;
    let mut m = Machine::new(&mut store);

    // Keep stdout clean for JSON; the prompt goes to stderr instead
    let entered = if opts.json {
        m.read_input(ConsoleInput::new(io::stdin().lock(), io::stderr()), prompt, variable)?
    } else {
        m.read_input(ConsoleInput::stdio(), prompt, variable)?
    };
    let stored = m.read(variable)?;
    if entered != stored {
        log::info!("{entered} does not fit {}, stored as {stored}", variable.tag());
    }

    let output = InputOutput {
        variable: variable.to_string(),
        entered,
        stored,
        memory: m.dump().lines().map(str::to_string).collect(),
    };

    print_output(&output, opts, |out| {
        println!("{} = {}", out.variable, out.stored);
        print_dump(&out.memory.join("\n"));
    })
}
