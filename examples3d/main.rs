#![allow(dead_code)]

extern crate nalgebra as na;

mod benz_asphaug_cube3;
mod helper;
mod impactor3;

use helper::DemoReport;
use inflector::Inflector;

fn demo_name_from_command_line() -> Option<String> {
    let mut args = std::env::args();

    while let Some(arg) = args.next() {
        if &arg[..] == "--example" {
            return args.next();
        }
    }

    None
}

pub fn main() -> anyhow::Result<()> {
    env_logger::init();
    let demo = demo_name_from_command_line()
        .unwrap_or_default()
        .to_camel_case();

    let mut builders: Vec<(_, fn() -> anyhow::Result<DemoReport>)> = vec![
        ("Benz Asphaug cube", benz_asphaug_cube3::run),
        ("Impactor", impactor3::run),
    ];
    builders.sort_by(|a, b| a.0.cmp(b.0));

    let selected: Vec<_> = builders
        .into_iter()
        .filter(|builder| demo.is_empty() || builder.0.to_camel_case() == demo)
        .collect();

    if selected.is_empty() {
        anyhow::bail!("unknown demo: {}", demo);
    }

    for (name, run) in selected {
        let mut report = run()?;
        report.name = name.to_string();
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}
