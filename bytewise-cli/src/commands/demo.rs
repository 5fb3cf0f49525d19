use bytewise::Scenario;
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    output::{print_dump, print_output},
};

#[derive(Debug, Serialize)]
struct DemoOutput {
    scenario: String,
    lines: Vec<String>,
    memory: Vec<String>,
}

pub fn run(scenario: Scenario, opts: &GlobalOptions) -> anyhow::Result<()> {
    log::info!("running scenario '{scenario}'");
    let trace = scenario.run()?;

    let output = DemoOutput {
        scenario: scenario.to_string(),
        lines: trace.lines,
        memory: trace.dump.lines().map(str::to_string).collect(),
    };

    print_output(&output, opts, |out| {
        for line in &out.lines {
            println!("{line}");
        }
        println!();
        print_dump(&out.memory.join("\n"));
    })
}
