use colored::Colorize;
use fsroute::RouteTable;

use super::kind_label;

pub fn execute(table: &RouteTable) {
    println!(
        "{} {} files under {}",
        "Route table:".green().bold(),
        table.len(),
        table.root().cyan()
    );
    println!();

    for file in table {
        println!("  {}  {}", kind_label(file.kind), file.route_path);
    }
}
