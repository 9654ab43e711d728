use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("copycheck")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Copycheck Contributors")
        .about("Proofread an HTML email against the approved copydoc")
        .arg(
            clap::arg!([COPYDOC] "Copydoc text file (prompted for when omitted)")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!([HTML] "HTML email file (prompted for when omitted)")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!(-o --output <FILE> "Output file (default: stdout)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!(-f --format <FORMAT> "Report format (text, json)")
                .value_name("FORMAT")
                .default_value("text")
                .value_parser(["text", "json"]),
        )
        .arg(
            clap::arg!(--threshold <PCT> "Minimum similarity percentage for a block to count as found")
                .default_value("50"),
        )
        .arg(clap::arg!(--context <NUM> "Characters of context around each difference").default_value("10"))
        .arg(clap::arg!(--"legacy-snippets" "Cut the found snippet with the expected text's offsets"))
        .arg(clap::arg!(--plain "Text report without emoji markers"))
        .arg(clap::arg!(--strict "Exit with status 1 when discrepancies or missing blocks are found"))
        .arg(clap::arg!(-v --verbose "Enable debug logging"));

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "copycheck", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "copycheck", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "copycheck", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "copycheck", &completions_dir).unwrap();

    println!(
        "cargo:warning=Shell completions generated in: {}",
        completions_dir.display()
    );
}
