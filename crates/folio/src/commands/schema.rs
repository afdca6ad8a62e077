use colored::Colorize;

const QUICK_REFERENCE: &str = r#"
name: Your Name                     # required
tagline: What you do                # shown under the name
about: A short paragraph.           # the About section
avatar: avatar.png                  # optional, relative to the manifest
footer: "© 2024 Your Name"          # optional, shown under Contact

projects:                           # each card opens a live demo preview
  - title: Wordle Game              # required, non-empty
    description: What it is.
    demo_url: https://...           # required, http(s) only

skills: [JavaScript, Rust]          # rendered as chips

contact:
  - label: GitHub
    url: https://github.com/you
"#;

pub fn run(short: bool) {
    if short {
        println!("{}", "folio manifest — quick reference".bold());
        println!("{QUICK_REFERENCE}");
        return;
    }

    println!("{}", "The folio manifest format".bold());
    println!();
    println!(
        "A portfolio is one YAML file. `folio init` scaffolds it, `folio FILE`\n\
         presents it, and edits are picked up live while the page is open."
    );
    println!();
    println!("{}", "Fields".bold());
    println!(
        "  {}      The name shown in the hero section and the header brand.\n\
         \x20          Required and non-empty.",
        "name".cyan()
    );
    println!(
        "  {}   One line under the name, e.g. a role or a motto.",
        "tagline".cyan()
    );
    println!(
        "  {}     The About section paragraph. Plain text, wrapped for you.",
        "about".cyan()
    );
    println!(
        "  {}    Path to an image shown above the name, relative to the\n\
         \x20          manifest file. PNG, JPEG and WebP are supported.",
        "avatar".cyan()
    );
    println!(
        "  {}    Small print at the bottom of the Contact section.",
        "footer".cyan()
    );
    println!(
        "  {}  The project catalog. Every entry needs a non-empty title\n\
         \x20          and an http(s) demo_url; clicking its card opens the demo\n\
         \x20          in the preview overlay.",
        "projects".cyan()
    );
    println!(
        "  {}    A list of strings, rendered as chips.",
        "skills".cyan()
    );
    println!(
        "  {}   Labelled links. Clicking one copies the URL.",
        "contact".cyan()
    );
    println!();
    println!("{}", "Example".bold());
    println!("{QUICK_REFERENCE}");
    println!(
        "Validation happens at load: a missing name, an empty project title\n\
         or a demo_url that is not http(s) is reported and nothing opens."
    );
}
