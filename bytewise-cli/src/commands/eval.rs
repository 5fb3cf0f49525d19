use bytewise::Machine;
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::{new_store, parse_assignment, parse_variable},
    output::{print_dump, print_output, Align, TabWriter},
};

#[derive(Debug, Serialize)]
struct ReadEntry {
    variable: String,
    address: i64,
    tag: String,
    value: i64,
}

#[derive(Debug, Serialize)]
struct EvalOutput {
    reads: Vec<ReadEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    memory: Option<Vec<String>>,
}

pub fn run(
    size: usize,
    sets: &[String],
    reads: &[String],
    dump: bool,
    opts: &GlobalOptions,
) -> anyhow::Result<()> {
    let mut store = new_store(size)?;
    let mut m = Machine::new(&mut store);

    for set in sets {
        let (variable, value) = parse_assignment(set)?;
        m.mov(value, variable)?;
    }

    let mut entries = Vec::with_capacity(reads.len());
    for read in reads {
        let variable = parse_variable(read)?;
        entries.push(ReadEntry {
            variable: variable.to_string(),
            address: variable.address(),
            tag: variable.tag().to_string(),
            value: m.read(variable)?,
        });
    }

    let output = EvalOutput {
        reads: entries,
        memory: dump.then(|| m.dump().lines().map(str::to_string).collect()),
    };

    print_output(&output, opts, |out| {
        if !out.reads.is_empty() {
            let mut table = TabWriter::new(vec![
                ("ADDRESS", Align::Right),
                ("TAG", Align::Left),
                ("VALUE", Align::Right),
            ]);
            for entry in &out.reads {
                table.row(vec![
                    entry.address.to_string(),
                    entry.tag.clone(),
                    entry.value.to_string(),
                ]);
            }
            table.print();
        }
        if let Some(memory) = &out.memory {
            print_dump(&memory.join("\n"));
        }
    })
}
