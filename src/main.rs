use line_breaking::samples;
use line_breaking::{break_lines, total_penalty, Algorithm};

fn print_breaking(name: &str, text: &str, max_width: usize) {
    println!("--- {} | width {} ---", name, max_width);
    println!("{}", "-".repeat(max_width));
    match break_lines(text, max_width, Algorithm::Smawk) {
        Ok(lines) => {
            for line in &lines {
                println!("{}", line);
            }
        }
        Err(err) => println!("cannot break: {}", err),
    }
    println!("{}", "-".repeat(max_width));
    for algorithm in Algorithm::ALL {
        match break_lines(text, max_width, algorithm) {
            Ok(lines) => println!(
                "{:>19} -> {} line(s), penalty {}",
                algorithm,
                lines.len(),
                total_penalty(&lines, max_width)
            ),
            Err(err) => println!("{:>19} -> skipped: {}", algorithm, err),
        }
    }
}

fn main() {
    print_breaking("alpha", samples::ALPHA, 9);
    println!();
    print_breaking("gilbert_full", samples::GILBERT_FULL, 30);
    println!();
    print_breaking("preamble", samples::PREAMBLE, 40);
    println!();
    print_breaking("bleak_house", samples::BLEAK_HOUSE, 60);
}
