use colored::Colorize;

const BANNER: &str = r"
  __       _ _
 / _| ___ | (_) ___
| |_ / _ \| | |/ _ \
|  _| (_) | | | (_) |
|_|  \___/|_|_|\___/
";

pub fn print_banner_with_version() {
    println!("{}", BANNER.cyan());
    println!(
        "{} {} \u{2014} a desktop portfolio viewer",
        "folio".bold(),
        env!("CARGO_PKG_VERSION")
    );
}
