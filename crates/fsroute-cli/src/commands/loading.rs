use colored::Colorize;
use fsroute::RouteTable;

pub fn execute(table: &RouteTable) {
    let loading = table.loading_files();

    if loading.is_empty() {
        println!("{}", "No loading views".yellow());
        return;
    }

    for entry in loading {
        println!("  {:<24} {}", entry.url.cyan(), entry.file.path);
    }
}
