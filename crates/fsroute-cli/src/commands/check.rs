use anyhow::{bail, Result};
use colored::Colorize;
use fsroute::{check_duplicates, DuplicateCheck, Environment, RouteTable};

pub fn execute(table: &RouteTable, environment: Environment) -> Result<()> {
    match check_duplicates(table, environment) {
        DuplicateCheck::Skipped => {
            println!(
                "{}",
                format!("⚠ Duplicate route check skipped ({})", environment).yellow()
            );
        }
        DuplicateCheck::Clean => {
            println!("{}", "✓ No duplicate routes".green());
        }
        DuplicateCheck::Conflicts(conflicts) => {
            for conflict in &conflicts {
                println!("{}", conflict.to_string().red());
                println!();
            }
            bail!("{} duplicate route(s) found", conflicts.len());
        }
    }

    Ok(())
}
