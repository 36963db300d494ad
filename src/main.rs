#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "yaml2xml", about = "Convert YAML configuration files to XML")]
struct Cli {
    /// Path or URL of the YAML input
    #[arg(value_name = "YAML")]
    input: String,

    /// Schema type of the input file
    #[arg(value_name = "TYPE", default_value = "resource")]
    schema_type: String,

    /// Path of the XML output file (defaults to the input path with an
    /// `.xml` extension, avoiding collisions with a numeric suffix)
    #[arg(long)]
    output: Option<String>,
}

#[cfg(feature = "cli")]
fn main() {
    use yaml2xml::diagnostics::Severity;

    let cli = Cli::parse();

    match yaml2xml::converter::convert_yaml_to_xml(
        &cli.input,
        &cli.schema_type,
        cli.output.as_deref(),
    ) {
        Ok(report) => {
            println!(
                "processing {} as {}-file",
                cli.input,
                cli.schema_type.to_lowercase()
            );
            if let Some(preferred) = &report.collided_with {
                eprintln!(
                    "warning: {} already exists, using {}",
                    preferred.display(),
                    report.output_path.display()
                );
            }
            for diagnostic in &report.diagnostics {
                match diagnostic.severity {
                    Severity::Warning => eprintln!("warning: {}", diagnostic.message),
                    Severity::Info => println!("{}", diagnostic.message),
                }
            }
            println!("wrote {}", report.output_path.display());
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("This binary is only available with the `cli` feature enabled.");
    std::process::exit(1);
}
