use grid_search::comparison::compare_directory;
use std::fs::File;
use std::path::Path;
use std::time::Duration;

// Compares all four algorithms on every maze file below a directory (default: ./mazes) and
// optionally writes each report as CSV next to its maze. Usage: benchmark_runner [dir] [--csv]

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let root = args
        .iter()
        .find(|a| !a.starts_with("--"))
        .map(String::as_str)
        .unwrap_or("mazes");
    let write_csv = args.iter().any(|a| a == "--csv");

    let reports = match compare_directory(Path::new(root)) {
        Ok(reports) => reports,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    let mut total_time = Duration::ZERO;
    for (path, report) in reports {
        println!("{} Results:", path.display());
        print!("{}", report);
        total_time += report.iter().map(|(_, r)| r.elapsed).sum::<Duration>();
        if write_csv {
            let csv_path = path.with_extension("csv");
            let result = File::create(&csv_path)
                .map_err(csv::Error::from)
                .and_then(|f| report.write_csv(f));
            if let Err(e) = result {
                eprintln!("Could not write {}: {e}", csv_path.display());
            }
        }
    }
    println!("\tTotal search time: {:.2?}", total_time);
}
